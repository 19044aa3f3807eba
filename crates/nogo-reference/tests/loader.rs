#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use nogo_reference::{
    LoadOptions, ReferenceError, categorize_file, load_nogo_list, load_nogo_list_with,
};

fn write(path: &Path, content: &str) {
    fs::write(path, content).expect("write fixture");
}

#[test]
fn test_load_two_column_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nogo.csv");
    write(
        &path,
        "Sodium Benzoate,Preservatives\nHigh Fructose Corn Syrup,Sweeteners\nMSG\n",
    );

    let list = load_nogo_list(&path).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.source.as_deref(), Some("nogo.csv"));

    let entry = list.get("SODIUM BENZOATE").expect("entry");
    assert_eq!(entry.original_name, "Sodium Benzoate");
    assert_eq!(entry.category, "Preservatives");
    assert_eq!(list.get("MSG").unwrap().category, "Unknown");
}

#[test]
fn test_duplicate_normalized_names_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nogo.csv");
    write(
        &path,
        "Caramel Color (Class III),Colors\ncaramel   color,Additives\n",
    );

    let (list, report) = load_nogo_list_with(&path, &LoadOptions::default()).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(report.overwritten, 1);
    let entry = list.get("CARAMEL COLOR").unwrap();
    assert_eq!(entry.original_name, "caramel   color");
    assert_eq!(entry.category, "Additives");
}

#[test]
fn test_ragged_rows_are_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nogo.csv");
    write(&path, "BHT,Preservatives,extra\nTBHQ\n\"\",Colors\n");

    let (list, report) = load_nogo_list_with(&path, &LoadOptions::default()).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(list.get("BHT").unwrap().category, "Preservatives");
}

#[test]
fn test_missing_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_nogo_list(&dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, ReferenceError::NotFound { .. }));
    assert!(err.is_unavailable());
}

#[test]
fn test_custom_default_category() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nogo.csv");
    write(&path, "name,category\nMSG\n");

    let options = LoadOptions::default()
        .with_headers(true)
        .with_default_category("Uncategorized");
    let (list, _) = load_nogo_list_with(&path, &options).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.get("MSG").unwrap().category, "Uncategorized");
}

#[test]
fn test_categorized_output_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.txt");
    let output = dir.path().join("out").join("nogo_ingredients.csv");
    write(
        &input,
        "NoGo Ingredients\nHigh Fructose Corn Syrup\n\nSodium Benzoate\nCarmine\nApple Juice\n",
    );

    let summary = categorize_file(&input, &output).unwrap();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.uncategorized, vec!["Carmine".to_string()]);
    assert_eq!(summary.categories["Sweeteners"].count, 1);
    assert_eq!(
        summary.categories["Juices"].normalized_example.as_deref(),
        Some("APPLE JUICE")
    );
    assert!(summary.debug_output.exists());

    let debug = fs::read_to_string(&summary.debug_output).unwrap();
    assert!(debug.starts_with("ingredient,normalized,category\n"));

    let list = load_nogo_list(&output).unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list.get("SODIUM BENZOATE").unwrap().category, "Additives");
    assert_eq!(list.get("CARMINE").unwrap().category, "General");
}
