use crate::Denylist;

use proptest::prelude::*;

#[test]
fn test_denylist_matches_substring_in_any_case() {
    let denylist = Denylist::new(["Shit"]);

    assert!(denylist.matches("oh SHIT no"));
    assert!(denylist.matches("bullshit"));
    assert!(!denylist.matches("shirt"));
}

#[test]
fn test_denylist_matches_non_ascii_phrase() {
    let denylist = Denylist::new(["死ね"]);

    assert!(denylist.matches("もう死ねよ"));
}

#[test]
fn test_denylist_ignores_blank_phrases() {
    let denylist = Denylist::new(["", "   ", "fuck"]);

    assert_eq!(denylist.len(), 1);
    assert!(!denylist.matches("hello"));
}

#[test]
fn test_empty_denylist_matches_nothing() {
    let denylist = Denylist::default();

    assert!(denylist.is_empty());
    assert!(!denylist.matches("anything at all"));
}

proptest! {
    #[test]
    fn given_text_containing_phrase_in_any_case_when_checked_then_matches(
        prefix in "[a-z ]{0,20}",
        suffix in "[a-z ]{0,20}",
        upper in any::<bool>(),
    ) {
        let denylist = Denylist::new(["badword"]);
        let phrase = if upper { "BadWord" } else { "badword" };
        let text = format!("{prefix}{phrase}{suffix}");
        prop_assert!(denylist.matches(&text));
    }
}
