//! Fuzzy string similarity for transcribed voice commands.
//!
//! Speech-to-text output is noisy: casing, punctuation, and parenthetical
//! asides vary freely between the authored command phrase and what the STT
//! engine hears.  Comparison therefore runs over [`normalize`]d forms, and
//! the pass/fail decision is adaptive — absolute edit-distance bounds for
//! short strings (where a ratio is noisy: one character off in a 2-letter
//! word is already a 50 % ratio) and a length-normalized ratio for longer
//! ones (where a handful of transcription errors is proportionally
//! tolerable).
//!
//! All functions are pure and safe to call concurrently.

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Default [`distance_ratio`] threshold for [`is_similar`].
pub const DEFAULT_RATIO_THRESHOLD: f32 = 0.3;

/// Normalized strings of up to this many characters use the short-string
/// absolute bound of [`SHORT_MAX_DISTANCE`] edits.
const SHORT_MAX_LEN: usize = 3;
const SHORT_MAX_DISTANCE: usize = 2;

/// Normalized strings of up to this many characters use the mid-length
/// absolute bound of [`MID_MAX_DISTANCE`] edits.
const MID_MAX_LEN: usize = 5;
const MID_MAX_DISTANCE: usize = 3;

/// Characters stripped wholesale during normalization.
const PUNCTUATION: [char; 7] = [' ', '.', '!', '?', ',', '"', '-'];

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a string for comparison.
///
/// Removes single-level `(...)` spans and their contents, strips the
/// punctuation set `{space . ! ? , " -}`, and lower-cases the rest.
/// Unmatched parentheses are left in place.  Idempotent:
/// `normalize(normalize(s)) == normalize(s)`.
///
/// ```rust
/// use handsfree::voice::normalize;
///
/// assert_eq!(normalize("Hello, World!"), "helloworld");
/// assert_eq!(normalize("Turn on the light (please)"), "turnonthelight");
/// ```
pub fn normalize(input: &str) -> String {
    strip_parentheticals(input)
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Remove every complete, non-nested `(...)` span.  A `(` with no closing
/// `)` after it (and everything following) is kept as-is.
fn strip_parentheticals(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('(') {
        match rest[open + 1..].find(')') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + 1 + close + 1..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}

// ---------------------------------------------------------------------------
// Levenshtein distance
// ---------------------------------------------------------------------------

/// Levenshtein edit distance between the [`normalize`]d forms of `a` and `b`.
///
/// Symmetric, and zero exactly when the two normalize identically.
///
/// ```rust
/// use handsfree::voice::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(
        &normalize(a).chars().collect::<Vec<_>>(),
        &normalize(b).chars().collect::<Vec<_>>(),
    )
}

/// Classic dynamic-programming Levenshtein over already-normalized chars,
/// using two rolling rows of the `(|a|+1) × (|b|+1)` matrix.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = deletion.min(insertion).min(substitution);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ---------------------------------------------------------------------------
// Distance ratio
// ---------------------------------------------------------------------------

/// Edit distance divided by the longer normalized length.
///
/// `0.0` means the strings normalize identically; higher values mean greater
/// dissimilarity.  Returns `0.0` when both normalize to empty.
pub fn distance_ratio(a: &str, b: &str) -> f32 {
    let norm_a = normalize(a);
    let norm_b = normalize(b);

    let denominator = norm_a.chars().count().max(norm_b.chars().count());
    if denominator == 0 {
        return 0.0;
    }

    let distance = levenshtein(
        &norm_a.chars().collect::<Vec<_>>(),
        &norm_b.chars().collect::<Vec<_>>(),
    );
    distance as f32 / denominator as f32
}

// ---------------------------------------------------------------------------
// Similarity verdict
// ---------------------------------------------------------------------------

/// Adaptive similarity decision between a transcript and a target phrase.
///
/// * either raw string empty → `false` (normal outcome, never an error)
/// * min normalized length ≤ 3 → similar iff edit distance ≤ 2
/// * min normalized length ≤ 5 → similar iff edit distance ≤ 3
/// * otherwise → similar iff [`distance_ratio`] ≤ `ratio_threshold`
///
/// ```rust
/// use handsfree::voice::{is_similar, DEFAULT_RATIO_THRESHOLD};
///
/// assert!(is_similar("go", "no", DEFAULT_RATIO_THRESHOLD));
/// assert!(!is_similar("", "anything", DEFAULT_RATIO_THRESHOLD));
/// ```
pub fn is_similar(a: &str, b: &str, ratio_threshold: f32) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let min_len = normalize(a).chars().count().min(normalize(b).chars().count());
    if min_len <= SHORT_MAX_LEN {
        return edit_distance(a, b) <= SHORT_MAX_DISTANCE;
    }
    if min_len <= MID_MAX_LEN {
        return edit_distance(a, b) <= MID_MAX_DISTANCE;
    }

    distance_ratio(a, b) <= ratio_threshold
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- normalize ---------------------------------------------------------

    #[test]
    fn normalize_strips_case_and_punctuation() {
        assert_eq!(normalize("Hello, World!"), "helloworld");
    }

    #[test]
    fn normalize_strips_parenthetical_asides() {
        assert_eq!(normalize("Turn on the light (please)"), "turnonthelight");
        assert_eq!(normalize("a (x) b (y) c"), "abc");
    }

    #[test]
    fn normalize_keeps_unmatched_parentheses() {
        // only complete pairs are removed
        assert_eq!(normalize("open (the"), "open(the");
        assert_eq!(normalize("close) now"), "close)now");
    }

    #[test]
    fn normalize_empty_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" .!?,\"-"), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in [
            "Hello, World!",
            "Turn on the light (please)",
            "a(b(c)d",
            "weird ((nested)) case",
            "ไฟ เปิด (ครับ)",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    // --- edit_distance -----------------------------------------------------

    #[test]
    fn kitten_sitting_is_three() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(edit_distance("some phrase", "some phrase"), 0);
        // and to anything that normalizes identically
        assert_eq!(edit_distance("Hello!", "hello"), 0);
    }

    #[test]
    fn distance_is_symmetric() {
        for (a, b) in [("kitten", "sitting"), ("go", "stop"), ("", "light")] {
            assert_eq!(edit_distance(a, b), edit_distance(b, a));
        }
    }

    #[test]
    fn empty_side_costs_other_length() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn triangle_inequality_holds() {
        let strings = ["kitten", "sitting", "mitten", "turn on the light", "go"];
        for a in strings {
            for b in strings {
                for c in strings {
                    assert!(
                        edit_distance(a, b) <= edit_distance(a, c) + edit_distance(c, b),
                        "triangle inequality violated for ({a}, {b}, {c})"
                    );
                }
            }
        }
    }

    // --- distance_ratio ----------------------------------------------------

    #[test]
    fn ratio_zero_for_identical_normal_forms() {
        assert_eq!(distance_ratio("Hello, World!", "hello world"), 0.0);
    }

    #[test]
    fn ratio_zero_when_both_normalize_empty() {
        assert_eq!(distance_ratio("...", "!!"), 0.0);
    }

    #[test]
    fn ratio_uses_longer_normalized_length() {
        // "go" vs "gone": distance 2, max length 4
        assert_eq!(distance_ratio("go", "gone"), 0.5);
    }

    // --- is_similar --------------------------------------------------------

    #[test]
    fn short_strings_use_absolute_distance() {
        // min normalized length 2 ≤ 3, distance 1 ≤ 2
        assert!(is_similar("go", "no", DEFAULT_RATIO_THRESHOLD));
        // distance 3 > 2
        assert!(!is_similar("abc", "xyz", DEFAULT_RATIO_THRESHOLD));
    }

    #[test]
    fn mid_strings_allow_three_edits() {
        // normalized lengths 5 and 5, distance 3 ≤ 3
        assert!(is_similar("abcde", "xyzde", DEFAULT_RATIO_THRESHOLD));
        // distance 5 > 3
        assert!(!is_similar("abcde", "vwxyz", DEFAULT_RATIO_THRESHOLD));
    }

    #[test]
    fn long_strings_use_ratio() {
        // 14 normalized chars, a couple of transcription errors
        assert!(is_similar(
            "turn on the light",
            "turn on the lite",
            DEFAULT_RATIO_THRESHOLD
        ));
        assert!(!is_similar(
            "turn on the light",
            "play some music now",
            DEFAULT_RATIO_THRESHOLD
        ));
    }

    #[test]
    fn empty_inputs_are_never_similar() {
        assert!(!is_similar("", "", DEFAULT_RATIO_THRESHOLD));
        assert!(!is_similar("", "light", DEFAULT_RATIO_THRESHOLD));
        assert!(!is_similar("light", "", DEFAULT_RATIO_THRESHOLD));
    }

    #[test]
    fn parenthetical_asides_do_not_affect_the_verdict() {
        assert!(is_similar(
            "turn on the light",
            "Turn on the light (please)",
            DEFAULT_RATIO_THRESHOLD
        ));
    }
}
