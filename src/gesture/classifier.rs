//! Nearest-neighbor gesture classifier over a hand-authored sample set.
//!
//! [`GestureDatabase`] holds one [`GestureEntry`] per label (duplicates are
//! tolerated — matching simply scans every entry).  Classification is a
//! linear scan over all samples, tracking the minimum squared Euclidean
//! distance; the owning label wins if that minimum is below the confidence
//! threshold, otherwise the [`GestureLabel::None`] sentinel is returned.
//!
//! There is deliberately no indexing structure: the dataset is small and
//! human-curated, and a linear scan keeps the decision boundary fully
//! transparent when debugging a misclassification (every distance can be
//! logged and inspected).
//!
//! Complexity is O(total samples × 15) per [`classify`](GestureDatabase::classify)
//! call.

use serde::{Deserialize, Serialize};

use crate::hand::AngleVector;

use super::label::GestureLabel;

// ---------------------------------------------------------------------------
// GestureSample
// ---------------------------------------------------------------------------

/// One captured angle vector.  Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSample {
    angles: AngleVector,
}

impl GestureSample {
    pub fn new(angles: AngleVector) -> Self {
        Self { angles }
    }

    pub fn angles(&self) -> &AngleVector {
        &self.angles
    }
}

// ---------------------------------------------------------------------------
// GestureEntry
// ---------------------------------------------------------------------------

/// A label plus its ordered, append-only collection of training samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureEntry {
    label: GestureLabel,
    samples: Vec<GestureSample>,
}

impl GestureEntry {
    pub fn new(label: GestureLabel) -> Self {
        Self {
            label,
            samples: Vec::new(),
        }
    }

    pub fn label(&self) -> GestureLabel {
        self.label
    }

    pub fn samples(&self) -> &[GestureSample] {
        &self.samples
    }

    /// Append one sample.  Samples are never updated or removed.
    pub fn push(&mut self, sample: GestureSample) {
        self.samples.push(sample);
    }
}

// ---------------------------------------------------------------------------
// Neighbor
// ---------------------------------------------------------------------------

/// The closest stored sample to a query: its label and squared distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub label: GestureLabel,
    /// Squared Euclidean distance in degrees².
    pub distance: f32,
}

// ---------------------------------------------------------------------------
// GestureDatabase
// ---------------------------------------------------------------------------

/// The full set of gesture entries.
///
/// Mutation is append-only: entries gain samples over time (training by
/// example) but nothing is ever removed at runtime.  Growth is unbounded by
/// design — samples are curated by a human, not auto-pruned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureDatabase {
    entries: Vec<GestureEntry>,
}

impl GestureDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a database from pre-authored entries (e.g. deserialized from an
    /// asset file owned by an external collaborator).
    pub fn from_entries(entries: Vec<GestureEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[GestureEntry] {
        &self.entries
    }

    /// Total number of samples across all entries.
    pub fn sample_count(&self) -> usize {
        self.entries.iter().map(|e| e.samples().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sample_count() == 0
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Append a sample under `label`, creating the entry if absent.
    ///
    /// Returns the entry's new sample count.
    pub fn add_sample(&mut self, label: GestureLabel, angles: AngleVector) -> usize {
        let idx = match self.entries.iter().position(|e| e.label() == label) {
            Some(idx) => idx,
            None => {
                self.entries.push(GestureEntry::new(label));
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[idx];
        entry.push(GestureSample::new(angles));
        log::info!(
            "gesture sample added: label={label} count={}",
            entry.samples().len()
        );
        entry.samples().len()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The stored sample closest to `query`, or `None` for an empty database.
    ///
    /// Ties on the exact minimum distance resolve to the first sample in
    /// database iteration order — stable and deterministic, but carrying no
    /// semantic meaning across database reorderings.
    pub fn nearest(&self, query: &AngleVector) -> Option<Neighbor> {
        let mut best: Option<Neighbor> = None;

        for entry in &self.entries {
            for sample in entry.samples() {
                let distance = query.squared_distance(sample.angles());
                if best.map_or(true, |b| distance < b.distance) {
                    best = Some(Neighbor {
                        label: entry.label(),
                        distance,
                    });
                }
            }
        }

        best
    }

    /// Classify `query` against the database.
    ///
    /// Returns the nearest sample's label when its squared distance is below
    /// `confidence_threshold` (degrees²), otherwise [`GestureLabel::None`].
    /// An empty database always returns the sentinel.
    pub fn classify(&self, query: &AngleVector, confidence_threshold: f32) -> GestureLabel {
        match self.nearest(query) {
            Some(neighbor) => {
                log::debug!(
                    "classify: nearest={} distance={:.2} threshold={:.2}",
                    neighbor.label,
                    neighbor.distance,
                    confidence_threshold
                );
                if neighbor.distance < confidence_threshold {
                    neighbor.label
                } else {
                    GestureLabel::None
                }
            }
            None => GestureLabel::None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
