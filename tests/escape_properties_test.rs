use fints_segments::utils::escape::{escape, is_reserved, unescape, ESCAPE};
use proptest::prelude::*;

/// Every reserved character in `escaped` sits behind an escape character.
fn fully_escaped(escaped: &str) -> bool {
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            match chars.next() {
                Some(next) if is_reserved(next) => {}
                _ => return false,
            }
        } else if is_reserved(c) {
            return false;
        }
    }
    true
}

proptest! {
    #[test]
    fn escape_round_trips(s in ".*") {
        prop_assert_eq!(unescape(&escape(&s)), s);
    }

    #[test]
    fn escape_leaves_no_bare_reserved_character(s in "[a-z?+:' ]{0,40}") {
        prop_assert!(fully_escaped(&escape(&s)));
    }

    #[test]
    fn escape_adds_one_char_per_reserved(s in "[a-z?+:']{0,40}") {
        let reserved = s.chars().filter(|c| is_reserved(*c)).count();
        prop_assert_eq!(escape(&s).chars().count(), s.chars().count() + reserved);
    }
}
