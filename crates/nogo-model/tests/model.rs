#![allow(missing_docs)]

use std::collections::{BTreeMap, BTreeSet};

use nogo_model::{
    ClassificationResult, MatchOptions, MatchRecord, NoGoList, REASON_UNAVAILABLE,
    ReferenceEntry, Token, Verdict,
};

#[test]
fn verdict_uses_wire_names() {
    assert_eq!(serde_json::to_string(&Verdict::Safe).unwrap(), "\"Healthy\"");
    assert_eq!(serde_json::to_string(&Verdict::Flagged).unwrap(), "\"NoGo\"");
    assert_eq!(
        serde_json::to_string(&Verdict::Unavailable).unwrap(),
        "\"Error\""
    );
    assert_eq!(Verdict::Flagged.to_string(), "NoGo");
}

#[test]
fn result_serializes_with_contract_field_names() {
    let record = MatchRecord {
        token: "Msg".to_string(),
        nogo_name: "MSG".to_string(),
        score: 100,
        category: "Additives".to_string(),
    };
    let result = ClassificationResult {
        verdict: Verdict::Flagged,
        reason: "Contains concerning ingredients from categories: Additives".to_string(),
        found_terms: BTreeMap::from([("MSG".to_string(), 100)]),
        categories: BTreeSet::from(["Additives".to_string()]),
        flagged_tokens: BTreeSet::from(["Msg".to_string()]),
        token_matches: BTreeMap::from([("Msg".to_string(), vec![record])]),
    };

    let value = serde_json::to_value(&result).expect("serialize result");
    assert_eq!(value["flag"], "NoGo");
    assert_eq!(value["found_terms"]["MSG"], 100);
    assert_eq!(value["categories"][0], "Additives");
    assert_eq!(value["flagged_tokens"][0], "Msg");
    assert_eq!(value["token_matches"]["Msg"][0]["nogo"], "MSG");
    assert_eq!(value["token_matches"]["Msg"][0]["score"], 100);

    let round: ClassificationResult = serde_json::from_value(value).expect("deserialize");
    assert_eq!(round, result);
}

#[test]
fn unavailable_result_is_distinct_from_safe() {
    let result = ClassificationResult::unavailable();
    assert_eq!(result.verdict, Verdict::Unavailable);
    assert_eq!(result.reason, REASON_UNAVAILABLE);
    assert!(!result.is_available());
    assert!(!result.is_flagged());
    assert!(result.flagged_tokens.is_empty());
    assert!(result.categories.is_empty());
}

#[test]
fn token_serializes_transparently() {
    let token = Token::new(" msg ");
    assert_eq!(serde_json::to_string(&token).unwrap(), "\" msg \"");
    assert_eq!(token.normalized(), "MSG");
}

#[test]
fn match_options_validation() {
    assert!(MatchOptions::default().validate().is_ok());
    assert!(!MatchOptions::default().use_fuzzy);
    assert!(MatchOptions::exact().with_fuzzy(85).validate().is_ok());
    assert!(MatchOptions::exact().with_fuzzy(101).validate().is_err());
    assert!(
        MatchOptions::exact()
            .with_length_threshold(1.5)
            .validate()
            .is_err()
    );
}

#[test]
fn category_counts_and_sorted_entries() {
    let list = sample_list();

    let counts = list.category_counts(None);
    assert_eq!(counts.get("Sweeteners"), Some(&2));
    assert_eq!(counts.get("Preservatives"), Some(&1));

    let names: Vec<&str> = list
        .sorted_entries(None)
        .into_iter()
        .map(|e| e.original_name.as_str())
        .collect();
    assert_eq!(names, vec!["BHT", "Aspartame", "Sucralose"]);
}

#[test]
fn category_filter_applies_to_entries_and_counts() {
    let list = sample_list();

    let names: Vec<&str> = list
        .sorted_entries(Some("sweeteners"))
        .into_iter()
        .map(|e| e.original_name.as_str())
        .collect();
    assert_eq!(names, vec!["Aspartame", "Sucralose"]);

    let counts = list.category_counts(Some("SWEETENERS"));
    assert_eq!(counts, BTreeMap::from([("Sweeteners", 2)]));
    assert!(list.category_counts(Some("Colors")).is_empty());
}

fn sample_list() -> NoGoList {
    [
        ReferenceEntry::new("Sucralose", "Sweeteners"),
        ReferenceEntry::new("Aspartame", "Sweeteners"),
        ReferenceEntry::new("BHT", "Preservatives"),
    ]
    .into_iter()
    .collect()
}
