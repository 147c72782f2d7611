//! Affirmation list parsing.

/// Separator the app uses when joining upcoming affirmations.
pub const AFFIRMATION_DELIMITER: &str = "|||";

/// Split a `|||`-delimited list into affirmations.
///
/// Empty segments are dropped and order is preserved; whitespace-only
/// segments are kept as written. The result is never empty: missing input,
/// empty input, or input made only of delimiters yields `[fallback]`.
pub fn parse_affirmations(input: Option<&str>, fallback: &str) -> Vec<String> {
    let parsed: Vec<String> = input
        .unwrap_or_default()
        .split(AFFIRMATION_DELIMITER)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    if parsed.is_empty() {
        vec![fallback.to_string()]
    } else {
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FB: &str = "fallback";

    #[test]
    fn empty_and_missing_yield_fallback() {
        assert_eq!(parse_affirmations(Some(""), FB), vec![FB]);
        assert_eq!(parse_affirmations(None, FB), vec![FB]);
        assert_eq!(parse_affirmations(Some("||||||"), FB), vec![FB]);
    }

    #[test]
    fn splits_in_order() {
        assert_eq!(parse_affirmations(Some("a|||b|||c"), FB), vec!["a", "b", "c"]);
    }

    #[test]
    fn drops_empty_segments() {
        assert_eq!(parse_affirmations(Some("a||||||b"), FB), vec!["a", "b"]);
        assert_eq!(parse_affirmations(Some("|||a|||"), FB), vec!["a"]);
    }

    #[test]
    fn keeps_whitespace_only_segments() {
        assert_eq!(parse_affirmations(Some("a||| |||b"), FB), vec!["a", " ", "b"]);
        assert_eq!(parse_affirmations(Some(" ||| "), FB), vec![" ", " "]);
    }

    #[test]
    fn keeps_single_pipes_and_inner_spacing() {
        assert_eq!(
            parse_affirmations(Some("Breathe | slowly||| Smile "), FB),
            vec!["Breathe | slowly", " Smile "]
        );
    }

    proptest! {
        #[test]
        fn never_empty(input in ".*") {
            let parsed = parse_affirmations(Some(&input), FB);
            prop_assert!(!parsed.is_empty());
            prop_assert!(parsed.iter().all(|s| !s.is_empty()));
        }

        #[test]
        fn joined_segments_round_trip(parts in prop::collection::vec("[a-zA-Z .']{1,20}", 1..8)) {
            let joined = parts.join(AFFIRMATION_DELIMITER);
            prop_assert_eq!(parse_affirmations(Some(&joined), FB), parts);
        }
    }
}
