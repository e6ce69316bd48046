//! Session glue — wires the feature extractor, the gesture database and the
//! command matcher together behind discrete commands.
//!
//! The surrounding system drives a [`Session`] from three directions:
//!
//! ```text
//! perception thread ──per frame──▶ publish_landmarks   (extract + publish)
//! input layer       ──discrete──▶ capture_sample / classify
//! speech thread     ──per utterance──▶ match_command / match_any
//! ```
//!
//! Frame delivery and consumption are decoupled through a
//! [`LatestCell`]; the gesture database sits behind a mutex so sampling
//! (writer) and classification (reader) never interleave unsafely.  All
//! operations are synchronous and return immediately.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::config::AppConfig;
use crate::gesture::{GestureDatabase, GestureLabel};
use crate::hand::{extract_angles, AngleVector, HandError, Landmark};
use crate::voice::{CommandMatcher, MatchOutcome};

use super::latest::LatestCell;

// ---------------------------------------------------------------------------
// SessionError
// ---------------------------------------------------------------------------

/// Errors that can surface from session commands.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// No hand frame has been published yet — nothing to sample or classify.
    #[error("no hand frame available yet")]
    NoFrame,

    /// The published landmark set was invalid.
    #[error(transparent)]
    Hand(#[from] HandError),
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One hands-free interaction session.
///
/// Cheap to share: the frame cell and the database are behind `Arc`, so a
/// perception thread can hold [`frames`](Session::frames) while the input
/// layer drives sampling and classification through the session itself.
#[derive(Debug, Clone)]
pub struct Session {
    frames: Arc<LatestCell<AngleVector>>,
    database: Arc<Mutex<GestureDatabase>>,
    config: AppConfig,
}

impl Session {
    /// Session with an empty gesture database.
    pub fn new(config: AppConfig) -> Self {
        Self::with_database(config, GestureDatabase::new())
    }

    /// Session over a pre-authored database (loaded at startup by an
    /// external collaborator).
    pub fn with_database(config: AppConfig, database: GestureDatabase) -> Self {
        Self {
            frames: Arc::new(LatestCell::new()),
            database: Arc::new(Mutex::new(database)),
            config,
        }
    }

    /// Handle to the frame cell, for the perception thread to publish into
    /// directly when it already has angle vectors.
    pub fn frames(&self) -> Arc<LatestCell<AngleVector>> {
        Arc::clone(&self.frames)
    }

    /// Handle to the shared gesture database.
    pub fn database(&self) -> Arc<Mutex<GestureDatabase>> {
        Arc::clone(&self.database)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Per-frame input
    // -----------------------------------------------------------------------

    /// Extract angles from one landmark set and publish them as the latest
    /// frame.  Returns the number of degenerate bone segments encountered
    /// (0 for a clean frame).
    ///
    /// # Errors
    ///
    /// [`HandError::LandmarkCount`] when the set is not exactly 21 points;
    /// nothing is published in that case.
    pub fn publish_landmarks(&self, landmarks: &[Landmark]) -> Result<usize, HandError> {
        let frame = extract_angles(landmarks)?;
        self.frames.publish(frame.angles);
        Ok(frame.degenerate_bones)
    }

    // -----------------------------------------------------------------------
    // Discrete commands
    // -----------------------------------------------------------------------

    /// Capture the latest frame as a training sample for `label`.
    ///
    /// Uses the latest frame whether or not it is fresh — a sampler held
    /// across several frames intentionally records near-duplicates.
    /// Returns the entry's new sample count.
    pub fn capture_sample(&self, label: GestureLabel) -> Result<usize, SessionError> {
        let angles = self.frames.peek().ok_or(SessionError::NoFrame)?;
        let count = self.database.lock().unwrap().add_sample(label, angles);
        Ok(count)
    }

    /// Classify the latest frame against the database using the configured
    /// confidence threshold.
    pub fn classify(&self) -> Result<GestureLabel, SessionError> {
        let angles = self.frames.peek().ok_or(SessionError::NoFrame)?;
        let label = self
            .database
            .lock()
            .unwrap()
            .classify(&angles, self.config.gesture.confidence_threshold);
        Ok(label)
    }

    // -----------------------------------------------------------------------
    // Utterance input
    // -----------------------------------------------------------------------

    /// Match one transcript against one target phrase using the configured
    /// ratio threshold.
    pub fn match_command(&self, transcript: &str, target: &str) -> MatchOutcome {
        CommandMatcher::with_threshold(target, self.config.voice.ratio_threshold)
            .check(transcript)
    }

    /// Match one transcript against every authored command phrase in the
    /// config, returning the first that passes together with its outcome.
    pub fn match_any(&self, transcript: &str) -> Option<(String, MatchOutcome)> {
        for command in &self.config.voice.commands {
            let outcome = self.match_command(transcript, command);
            if outcome.similar {
                return Some((command.clone(), outcome));
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
