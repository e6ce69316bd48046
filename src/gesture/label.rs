//! The closed set of gesture kinds.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GestureLabel
// ---------------------------------------------------------------------------

/// A gesture kind.
///
/// This is a closed, small tagged set — extend it by adding variants, not by
/// dispatching on strings.  [`GestureLabel::None`] is the sentinel returned
/// when no stored sample is close enough to a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureLabel {
    /// Open palm, fingers extended.
    Open,
    /// Closed fist.
    Close,
    /// Project-specific custom gesture.
    Custom,
    /// No recognised gesture.
    None,
}

impl GestureLabel {
    /// Short human-readable name for display by the presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureLabel::Open => "Open",
            GestureLabel::Close => "Close",
            GestureLabel::Custom => "Custom",
            GestureLabel::None => "None",
        }
    }
}

impl std::fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for GestureLabel {
    fn default() -> Self {
        GestureLabel::None
    }
}
