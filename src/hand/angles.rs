//! Feature extractor — 21 landmarks → 15 joint angles.
//!
//! For each of the 5 fingers the extractor walks a 5-point chain starting at
//! the wrist, forms 4 normalized bone directions along the chain, and takes
//! the angle between each pair of adjacent directions.  That yields 3 angles
//! per finger (at the metacarpal, proximal and distal joints), 15 in total,
//! in finger order thumb / index / middle / ring / pinky.
//!
//! The extractor is a pure function of its input; a zero-length bone segment
//! (coincident landmarks) falls back to an angle of 0° and is counted in
//! [`AngleFrame::degenerate_bones`] rather than propagating NaN.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::landmark::{
    Landmark, INDEX_DIP, INDEX_MCP, INDEX_PIP, INDEX_TIP, LANDMARK_COUNT, MIDDLE_DIP, MIDDLE_MCP,
    MIDDLE_PIP, MIDDLE_TIP, PINKY_DIP, PINKY_MCP, PINKY_PIP, PINKY_TIP, RING_DIP, RING_MCP,
    RING_PIP, RING_TIP, THUMB_CMC, THUMB_IP, THUMB_MCP, THUMB_TIP, WRIST,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Dimensionality of the angle feature vector: 3 joint angles × 5 fingers.
pub const ANGLE_COUNT: usize = 15;

/// The 5-point chain walked per finger.  Every chain starts at the wrist so
/// the first angle captures how far the finger bends away from the palm.
const FINGER_CHAINS: [[usize; 5]; 5] = [
    [WRIST, THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP],
    [WRIST, INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP],
    [WRIST, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP],
    [WRIST, RING_MCP, RING_PIP, RING_DIP, RING_TIP],
    [WRIST, PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP],
];

// ---------------------------------------------------------------------------
// HandError
// ---------------------------------------------------------------------------

/// Errors that can arise from the hand feature extractor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HandError {
    /// The landmark set did not contain exactly 21 points.  The extractor
    /// never pads or truncates.
    #[error("expected exactly {LANDMARK_COUNT} landmarks, got {0}")]
    LandmarkCount(usize),
}

// ---------------------------------------------------------------------------
// AngleVector
// ---------------------------------------------------------------------------

/// 15-dimensional feature vector of joint angles (degrees, each in [0, 180])
/// describing one hand pose.
///
/// Layout: `thumb[0..3)`, `index[3..6)`, `middle[6..9)`, `ring[9..12)`,
/// `pinky[12..15)`, with the metacarpal / proximal / distal angle of each
/// finger in that order.
///
/// The dimensionality is carried in the type, so a query vector and a stored
/// sample can never disagree on length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleVector([f32; ANGLE_COUNT]);

impl AngleVector {
    pub fn new(angles: [f32; ANGLE_COUNT]) -> Self {
        Self(angles)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Squared Euclidean distance to `other` — the sum of squared
    /// per-dimension differences, deliberately **not** square-rooted.
    /// Confidence thresholds are calibrated in degrees².
    pub fn squared_distance(&self, other: &AngleVector) -> f32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }

    /// Vector with every angle set to `degrees` (useful in tests and as a
    /// neutral placeholder).
    pub fn splat(degrees: f32) -> Self {
        Self([degrees; ANGLE_COUNT])
    }
}

impl From<[f32; ANGLE_COUNT]> for AngleVector {
    fn from(angles: [f32; ANGLE_COUNT]) -> Self {
        Self(angles)
    }
}

impl std::ops::Index<usize> for AngleVector {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

// ---------------------------------------------------------------------------
// AngleFrame
// ---------------------------------------------------------------------------

/// One extracted angle vector plus a data-quality signal.
///
/// `degenerate_bones` counts bone segments whose endpoints coincided; their
/// adjacent angles were forced to 0° instead of NaN.  A non-zero count means
/// the upstream pose was low quality and the frame should be treated with
/// suspicion (but it is still usable).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleFrame {
    pub angles: AngleVector,
    pub degenerate_bones: usize,
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Extract the 15-element [`AngleVector`] from exactly 21 ordered landmarks.
///
/// # Errors
///
/// [`HandError::LandmarkCount`] when `landmarks.len() != 21`.
pub fn extract_angles(landmarks: &[Landmark]) -> Result<AngleFrame, HandError> {
    if landmarks.len() != LANDMARK_COUNT {
        return Err(HandError::LandmarkCount(landmarks.len()));
    }

    let mut angles = [0.0_f32; ANGLE_COUNT];
    let mut degenerate_bones = 0;

    for (finger, chain) in FINGER_CHAINS.iter().enumerate() {
        let mut directions = [None; 4];
        for (segment, pair) in chain.windows(2).enumerate() {
            let dir = unit_direction(landmarks[pair[0]], landmarks[pair[1]]);
            if dir.is_none() {
                degenerate_bones += 1;
                log::warn!(
                    "degenerate bone segment {} -> {} (coincident landmarks); falling back to 0°",
                    pair[0],
                    pair[1]
                );
            }
            directions[segment] = dir;
        }

        for joint in 0..3 {
            angles[finger * 3 + joint] = match (directions[joint], directions[joint + 1]) {
                (Some(a), Some(b)) => angle_degrees(a, b),
                // zero-vector fallback: an undefined direction yields 0°
                _ => 0.0,
            };
        }
    }

    Ok(AngleFrame {
        angles: AngleVector(angles),
        degenerate_bones,
    })
}

/// Normalized direction from `p1` to `p2`, or `None` when the points
/// coincide and the direction is undefined.
fn unit_direction(p1: Landmark, p2: Landmark) -> Option<[f32; 3]> {
    let v = [p2.x - p1.x, p2.y - p1.y, p2.z - p1.z];
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len == 0.0 {
        return None;
    }
    Some([v[0] / len, v[1] / len, v[2] / len])
}

/// Angle between two unit vectors in degrees, in [0, 180].
///
/// The dot product is clamped to [-1, 1] before `acos` so floating-point
/// drift on near-parallel vectors cannot produce NaN.
fn angle_degrees(a: [f32; 3], b: [f32; 3]) -> f32 {
    let dot = a[0] * b[0] + a[1] * b[1] + a[2] * b[2];
    dot.clamp(-1.0, 1.0).acos().to_degrees()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// A flat, fully extended hand lying along +x: every bone direction is
    /// identical, so every joint angle is 0°.
    fn flat_hand() -> Vec<Landmark> {
        let mut landmarks = vec![Landmark::new(0.0, 0.0, 0.0); LANDMARK_COUNT];
        for chain in FINGER_CHAINS.iter() {
            for (step, &idx) in chain.iter().enumerate() {
                landmarks[idx] = Landmark::new(step as f32, 0.0, 0.0);
            }
        }
        landmarks
    }

    #[test]
    fn wrong_landmark_count_is_rejected() {
        let landmarks = vec![Landmark::new(0.0, 0.0, 0.0); 20];
        assert_eq!(
            extract_angles(&landmarks),
            Err(HandError::LandmarkCount(20))
        );

        let landmarks = vec![Landmark::new(0.0, 0.0, 0.0); 22];
        assert_eq!(
            extract_angles(&landmarks),
            Err(HandError::LandmarkCount(22))
        );
    }

    #[test]
    fn straight_finger_yields_zero_angles() {
        let frame = extract_angles(&flat_hand()).expect("valid landmark set");
        assert_eq!(frame.degenerate_bones, 0);
        for i in 0..ANGLE_COUNT {
            assert!(
                frame.angles[i].abs() < 1e-3,
                "angle {i} should be ~0, got {}",
                frame.angles[i]
            );
        }
    }

    #[test]
    fn right_angle_bend_is_ninety_degrees() {
        let mut landmarks = flat_hand();
        // Bend the index finger's distal joint: DIP -> tip turns from +x to +y.
        landmarks[INDEX_TIP] = Landmark::new(3.0, 1.0, 0.0);

        let frame = extract_angles(&landmarks).expect("valid landmark set");
        // index distal angle lives at slot 5
        assert!((frame.angles[5] - 90.0).abs() < 1e-3);
        // the other index joints stay straight
        assert!(frame.angles[3].abs() < 1e-3);
        assert!(frame.angles[4].abs() < 1e-3);
    }

    #[test]
    fn all_angles_within_valid_range() {
        // An arbitrary contorted pose — every output must stay in [0, 180].
        let landmarks: Vec<Landmark> = (0..LANDMARK_COUNT)
            .map(|i| {
                let t = i as f32;
                Landmark::new((t * 1.7).sin(), (t * 0.9).cos(), (t * 2.3).sin() * 0.5)
            })
            .collect();

        let frame = extract_angles(&landmarks).expect("valid landmark set");
        for i in 0..ANGLE_COUNT {
            let angle = frame.angles[i];
            assert!(angle.is_finite());
            assert!((0.0..=180.0).contains(&angle), "angle {i} = {angle}");
        }
    }

    #[test]
    fn coincident_landmarks_fall_back_without_nan() {
        // Collapse the entire hand onto one point: every bone is degenerate.
        let landmarks = vec![Landmark::new(1.0, 2.0, 3.0); LANDMARK_COUNT];
        let frame = extract_angles(&landmarks).expect("valid landmark set");

        assert_eq!(frame.degenerate_bones, 20);
        for i in 0..ANGLE_COUNT {
            assert_eq!(frame.angles[i], 0.0);
        }
    }

    #[test]
    fn squared_distance_sums_per_dimension() {
        let a = AngleVector::splat(0.0);
        let b = AngleVector::splat(5.0);
        assert_eq!(a.squared_distance(&b), 15.0 * 25.0);
        // symmetric
        assert_eq!(b.squared_distance(&a), 375.0);
        // identical vectors are at distance zero
        assert_eq!(a.squared_distance(&a), 0.0);
    }
}
