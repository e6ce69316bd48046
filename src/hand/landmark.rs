//! Hand landmark model and anatomical indexing.
//!
//! One hand pose is 21 landmarks in a hand-local coordinate frame, ordered by
//! the MediaPipe hand topology:
//!
//! | Index | Landmark |
//! |-------|----------|
//! | 0     | wrist    |
//! | 1–4   | thumb (CMC, MCP, IP, tip)   |
//! | 5–8   | index (MCP, PIP, DIP, tip)  |
//! | 9–12  | middle (MCP, PIP, DIP, tip) |
//! | 13–16 | ring (MCP, PIP, DIP, tip)   |
//! | 17–20 | pinky (MCP, PIP, DIP, tip)  |

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Landmark indices
// ---------------------------------------------------------------------------

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of landmarks in one hand pose.
pub const LANDMARK_COUNT: usize = 21;

// ---------------------------------------------------------------------------
// Landmark
// ---------------------------------------------------------------------------

/// A single 3D hand-joint position.
///
/// Units are whatever the upstream hand-pose source delivers — only relative
/// geometry matters, because the feature extractor works on normalized bone
/// directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<(f32, f32, f32)> for Landmark {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self { x, y, z }
    }
}
