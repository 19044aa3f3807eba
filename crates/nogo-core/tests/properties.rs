//! Property tests for tokenization and classification.

use nogo_core::{NoGoClassifier, tokenize};
use nogo_model::{MatchOptions, NoGoList, ReferenceEntry, Verdict};
use proptest::prelude::*;

fn sample_classifier() -> NoGoClassifier {
    let list: NoGoList = [
        ReferenceEntry::new("MSG", "Additives"),
        ReferenceEntry::new("High Fructose Corn Syrup", "Sweeteners"),
        ReferenceEntry::new("Sodium Benzoate", "Preservatives"),
    ]
    .into_iter()
    .collect();
    NoGoClassifier::new(list)
}

fn label_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("MSG".to_string()),
            Just("high fructose corn syrup".to_string()),
            Just("Sodium Benzoate".to_string()),
            "[a-zA-Z ]{0,12}",
            "[(),.:;\"' ]{1,3}",
        ],
        0..12,
    )
    .prop_map(|parts| parts.join(", "))
}

proptest! {
    #[test]
    fn classify_is_idempotent(text in label_text()) {
        let checker = sample_classifier();
        let first = checker.classify(&text, &MatchOptions::default());
        let second = checker.classify(&text, &MatchOptions::default());
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tokens_are_trimmed_and_non_empty(text in any::<String>()) {
        for token in tokenize(&text) {
            let raw = token.as_str();
            prop_assert!(!raw.is_empty());
            prop_assert!(!raw.starts_with(|c: char| c.is_ascii_punctuation()));
            prop_assert!(!raw.ends_with(|c: char| c.is_ascii_punctuation()));
            let quotes = ['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];
            prop_assert!(!raw.contains(quotes));
        }
    }

    #[test]
    fn flagged_iff_evidence(text in label_text()) {
        let result = sample_classifier().classify(&text, &MatchOptions::default());
        prop_assert_eq!(result.verdict == Verdict::Flagged, !result.flagged_tokens.is_empty());
        prop_assert_eq!(result.categories.is_empty(), result.flagged_tokens.is_empty());
        prop_assert_eq!(result.flagged_tokens.len(), result.token_matches.len());
    }

    #[test]
    fn case_and_padding_do_not_change_matches(name in "[A-Za-z]{1,10}( [A-Za-z]{1,10})?") {
        let list: NoGoList = [ReferenceEntry::new(name.to_uppercase(), "Test")].into_iter().collect();
        let checker = NoGoClassifier::new(list);
        let padded = format!("Water,   {}  ", name.to_lowercase());
        let result = checker.classify(&padded, &MatchOptions::default());
        prop_assert_eq!(result.verdict, Verdict::Flagged);
    }
}
