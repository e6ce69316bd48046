//! Pattern-matching core for a hands-free interaction interface.
//!
//! Two independent, composable components:
//!
//! * **Gesture side** — [`hand::extract_angles`] turns 21 3D hand landmarks
//!   into a 15-dimensional joint-angle vector; [`gesture::GestureDatabase`]
//!   classifies such vectors by nearest-neighbor lookup over hand-authored
//!   samples (training by example, squared-distance confidence threshold).
//! * **Voice side** — [`voice`] normalizes transcribed utterances and
//!   fuzzy-matches them against authored command phrases via Levenshtein
//!   distance with an adaptive short/long-string decision rule.
//!
//! [`pipeline::Session`] wires both behind discrete commands, with a
//! latest-value frame cell decoupling the perception thread from the
//! consumer.  Camera capture, hand-landmark inference, microphone recording
//! and speech-to-text are external collaborators: they deliver landmark sets
//! and transcript strings, nothing more.

pub mod config;
pub mod gesture;
pub mod hand;
pub mod pipeline;
pub mod voice;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use config::AppConfig;
pub use gesture::{GestureDatabase, GestureLabel};
pub use hand::{extract_angles, AngleVector, Landmark};
pub use pipeline::Session;
pub use voice::{is_similar, normalize, CommandMatcher};
