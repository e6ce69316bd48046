//! Matching a transcript against an authored command phrase.
//!
//! [`CommandMatcher`] pairs one target phrase with a ratio threshold and
//! produces a [`MatchOutcome`] per utterance — the boolean verdict plus the
//! raw distance, ratio and normalized forms, so the presentation layer can
//! show *why* a command did or did not fire.

use super::similarity::{
    distance_ratio, edit_distance, is_similar, normalize, DEFAULT_RATIO_THRESHOLD,
};

// ---------------------------------------------------------------------------
// MatchOutcome
// ---------------------------------------------------------------------------

/// Full result of comparing one transcript against one target phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// The adaptive similarity verdict.
    pub similar: bool,
    /// Levenshtein distance over the normalized forms.
    pub distance: usize,
    /// Distance divided by the longer normalized length.
    pub ratio: f32,
    /// Normalized transcript.
    pub normalized_input: String,
    /// Normalized target phrase.
    pub normalized_target: String,
}

// ---------------------------------------------------------------------------
// CommandMatcher
// ---------------------------------------------------------------------------

/// One configured voice command and its matching threshold.
///
/// # Example
/// ```rust
/// use handsfree::voice::CommandMatcher;
///
/// let matcher = CommandMatcher::new("Turn on the light (please)");
/// let outcome = matcher.check("turn on the lite");
/// assert!(outcome.similar);
/// assert_eq!(outcome.normalized_target, "turnonthelight");
/// ```
#[derive(Debug, Clone)]
pub struct CommandMatcher {
    target: String,
    ratio_threshold: f32,
}

impl CommandMatcher {
    /// Matcher with the default ratio threshold of 0.3.
    pub fn new(target: impl Into<String>) -> Self {
        Self::with_threshold(target, DEFAULT_RATIO_THRESHOLD)
    }

    pub fn with_threshold(target: impl Into<String>, ratio_threshold: f32) -> Self {
        Self {
            target: target.into(),
            ratio_threshold,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Compare `transcript` against the target phrase.
    pub fn check(&self, transcript: &str) -> MatchOutcome {
        let outcome = MatchOutcome {
            similar: is_similar(transcript, &self.target, self.ratio_threshold),
            distance: edit_distance(transcript, &self.target),
            ratio: distance_ratio(transcript, &self.target),
            normalized_input: normalize(transcript),
            normalized_target: normalize(&self.target),
        };
        log::debug!(
            "command match: target={:?} similar={} distance={} ratio={:.3}",
            self.target,
            outcome.similar,
            outcome.distance,
            outcome.ratio
        );
        outcome
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_transcript_matches_with_zero_distance() {
        let matcher = CommandMatcher::new("open the door");
        let outcome = matcher.check("Open the door!");

        assert!(outcome.similar);
        assert_eq!(outcome.distance, 0);
        assert_eq!(outcome.ratio, 0.0);
        assert_eq!(outcome.normalized_input, "openthedoor");
        assert_eq!(outcome.normalized_target, "openthedoor");
    }

    #[test]
    fn noisy_transcript_still_matches() {
        let matcher = CommandMatcher::new("turn on the light");
        assert!(matcher.check("turn on the lite").similar);
    }

    #[test]
    fn unrelated_transcript_is_rejected_with_diagnostics() {
        let matcher = CommandMatcher::new("turn on the light");
        let outcome = matcher.check("what time is it");

        assert!(!outcome.similar);
        assert!(outcome.distance > 0);
        assert!(outcome.ratio > DEFAULT_RATIO_THRESHOLD);
    }

    #[test]
    fn empty_transcript_is_not_similar() {
        let matcher = CommandMatcher::new("turn on the light");
        let outcome = matcher.check("");
        assert!(!outcome.similar);
        assert_eq!(outcome.normalized_input, "");
    }

    #[test]
    fn custom_threshold_is_honoured() {
        // distance 2 over 14 chars → ratio ≈ 0.143
        let strict = CommandMatcher::with_threshold("turn on the light", 0.1);
        assert!(!strict.check("turn on the lite").similar);

        let lax = CommandMatcher::with_threshold("turn on the light", 0.2);
        assert!(lax.check("turn on the lite").similar);
    }
}
