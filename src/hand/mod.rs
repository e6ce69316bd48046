//! Hand pose model and joint-angle feature extraction.
//!
//! The perception collaborator (camera + hand-landmark model) delivers one
//! ordered set of 21 [`Landmark`]s per frame; [`extract_angles`] turns it
//! into the fixed 15-dimensional [`AngleVector`] the gesture classifier
//! consumes.

pub mod angles;
pub mod landmark;

pub use angles::{extract_angles, AngleFrame, AngleVector, HandError, ANGLE_COUNT};
pub use landmark::{Landmark, LANDMARK_COUNT};
