//! Gesture classification by nearest-neighbor lookup.
//!
//! # Quick start
//!
//! ```rust
//! use handsfree::gesture::{GestureDatabase, GestureLabel};
//! use handsfree::hand::AngleVector;
//!
//! let mut db = GestureDatabase::new();
//! db.add_sample(GestureLabel::Open, AngleVector::splat(0.0));
//! db.add_sample(GestureLabel::Close, AngleVector::splat(180.0));
//!
//! assert_eq!(db.classify(&AngleVector::splat(5.0), 1000.0), GestureLabel::Open);
//! assert_eq!(db.classify(&AngleVector::splat(90.0), 10.0), GestureLabel::None);
//! ```

pub mod classifier;
pub mod label;

pub use classifier::{GestureDatabase, GestureEntry, GestureSample, Neighbor};
pub use label::GestureLabel;
