//! Frame delivery and session glue.
//!
//! # Architecture
//!
//! ```text
//! perception thread                         input layer
//!        │                                       │
//!  publish_landmarks                    capture_sample / classify
//!        │                                       │
//!        ▼                                       ▼
//! LatestCell<AngleVector> ◀──── peek ──── Session ──── lock ───▶ GestureDatabase
//!                                                │
//!                              match_command / match_any
//!                                                │
//!                                      speech thread (transcripts)
//! ```
//!
//! The perception and speech collaborators run on their own threads at their
//! own cadence; the session itself never blocks, suspends, or performs I/O.

pub mod latest;
pub mod session;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use latest::LatestCell;
pub use session::{Session, SessionError};
