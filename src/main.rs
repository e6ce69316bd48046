//! Application entry point — hands-free interaction core demo.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Build a [`Session`] over an empty gesture database.
//! 4. Read line-oriented commands from stdin until EOF / `quit`.
//!
//! The command loop stands in for the presentation layer: in production the
//! perception process feeds landmark frames, a key map triggers sampling and
//! classification, and the speech engine delivers transcripts.  Here each of
//! those arrives as one line:
//!
//! ```text
//! landmarks <63 floats>        publish one hand frame (21 × x y z)
//! sample <open|close|custom>   capture the latest frame for a label
//! classify                     classify the latest frame
//! say <transcript>             match a transcript against configured commands
//! match <transcript> :: <target>   match against an explicit target phrase
//! ```

use std::io::{self, BufRead, Write};

use handsfree::{
    config::AppConfig,
    gesture::GestureLabel,
    hand::{Landmark, LANDMARK_COUNT},
    pipeline::{Session, SessionError},
};

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn parse_label(name: &str) -> Option<GestureLabel> {
    match name.to_ascii_lowercase().as_str() {
        "open" => Some(GestureLabel::Open),
        "close" => Some(GestureLabel::Close),
        "custom" => Some(GestureLabel::Custom),
        _ => None,
    }
}

/// Parse `21 × (x, y, z)` floats into a landmark set.
fn parse_landmarks(args: &str) -> Result<Vec<Landmark>, String> {
    let values: Result<Vec<f32>, _> = args.split_whitespace().map(str::parse::<f32>).collect();
    let values = values.map_err(|e| format!("bad number: {e}"))?;

    if values.len() != LANDMARK_COUNT * 3 {
        return Err(format!(
            "expected {} numbers (21 landmarks × x y z), got {}",
            LANDMARK_COUNT * 3,
            values.len()
        ));
    }

    Ok(values
        .chunks_exact(3)
        .map(|c| Landmark::new(c[0], c[1], c[2]))
        .collect())
}

fn handle_line(session: &Session, line: &str) {
    let line = line.trim();
    let (command, args) = match line.split_once(' ') {
        Some((c, a)) => (c, a.trim()),
        None => (line, ""),
    };

    match command {
        "landmarks" => match parse_landmarks(args) {
            Ok(landmarks) => match session.publish_landmarks(&landmarks) {
                Ok(0) => println!("frame published"),
                Ok(degenerate) => {
                    println!("frame published ({degenerate} degenerate bone segments)")
                }
                Err(e) => println!("error: {e}"),
            },
            Err(msg) => println!("error: {msg}"),
        },

        "sample" => match parse_label(args) {
            Some(label) => match session.capture_sample(label) {
                Ok(count) => println!("sample added: {label} (count {count})"),
                Err(e) => println!("error: {e}"),
            },
            None => println!("error: unknown label {args:?} (open | close | custom)"),
        },

        "classify" => match session.classify() {
            Ok(label) => println!("gesture: {label}"),
            Err(SessionError::NoFrame) => println!("error: no hand frame published yet"),
            Err(e) => println!("error: {e}"),
        },

        "say" => match session.match_any(args) {
            Some((phrase, outcome)) => println!(
                "command: {phrase:?} (distance {}, ratio {:.3})",
                outcome.distance, outcome.ratio
            ),
            None => println!("no configured command matches"),
        },

        "match" => match args.split_once("::") {
            Some((transcript, target)) => {
                let outcome = session.match_command(transcript.trim(), target.trim());
                println!(
                    "similar: {} (distance {}, ratio {:.3}, {:?} vs {:?})",
                    outcome.similar,
                    outcome.distance,
                    outcome.ratio,
                    outcome.normalized_input,
                    outcome.normalized_target
                );
            }
            None => println!("usage: match <transcript> :: <target>"),
        },

        "help" => print_help(),
        "" => {}
        "quit" | "exit" => std::process::exit(0),
        _ => println!("unknown command {command:?} — try `help`"),
    }
}

fn print_help() {
    println!("commands:");
    println!("  landmarks <63 floats>            publish one hand frame (21 x y z triples)");
    println!("  sample <open|close|custom>       capture the latest frame for a label");
    println!("  classify                         classify the latest frame");
    println!("  say <transcript>                 match against configured command phrases");
    println!("  match <transcript> :: <target>   match against an explicit target");
    println!("  quit");
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("handsfree core starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    log::info!(
        "confidence threshold {} deg², ratio threshold {}, {} command phrase(s)",
        config.gesture.confidence_threshold,
        config.voice.ratio_threshold,
        config.voice.commands.len()
    );

    // 3. Session
    let session = Session::new(config);

    // 4. Command loop
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_help();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        handle_line(&session, &line);
    }

    Ok(())
}
