//! Fuzzy matching of transcribed voice utterances against command phrases.
//!
//! The speech collaborator (microphone + STT engine) delivers one plain-text
//! transcript per completed utterance; this module decides whether it means
//! an authored command.  [`normalize`] / [`edit_distance`] /
//! [`distance_ratio`] / [`is_similar`] are the pure building blocks;
//! [`CommandMatcher`] wraps them per configured command.

pub mod command;
pub mod similarity;

pub use command::{CommandMatcher, MatchOutcome};
pub use similarity::{
    distance_ratio, edit_distance, is_similar, normalize, DEFAULT_RATIO_THRESHOLD,
};
