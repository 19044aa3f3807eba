use anyhow::{Context, Result};
use tracing::{debug, info_span};

use nogo_core::{NoGoClassifier, tokenize};
use nogo_model::{ClassificationResult, MatchOptions};
use nogo_cli::input::read_input;
use nogo_cli::outcome::to_json;
use nogo_cli::service::{ReferenceSettings, build_classifier, load_reference};
use nogo_reference::categorize_file;

use crate::cli::{CategorizeArgs, CheckArgs, InputArgs, ListArgs};
use crate::summary::{print_categorize_summary, print_classification, print_reference_list};

pub fn run_check(args: &CheckArgs, reference: &ReferenceSettings) -> Result<ClassificationResult> {
    let classifier = build_classifier(reference, args.allow_unavailable)?;
    let text = read_text(&args.input)?;

    let mut options = MatchOptions::default();
    if args.fuzzy {
        options = options.with_fuzzy(args.fuzzy_threshold);
    }
    options.validate().context("invalid matching options")?;

    let result = classify(&classifier, &text, &options);
    if args.json {
        println!("{}", to_json(&result)?);
    } else {
        print_classification(&result);
    }
    Ok(result)
}

pub fn run_debug(args: &InputArgs, reference: &ReferenceSettings) -> Result<()> {
    let classifier = build_classifier(reference, false)?;
    let text = read_text(args)?;
    let report = classifier.debug_check(&text)?;
    println!("{}", to_json(&report)?);
    Ok(())
}

pub fn run_tokens(args: &InputArgs) -> Result<()> {
    let text = read_text(args)?;
    for token in tokenize(&text) {
        println!("{token}");
    }
    Ok(())
}

pub fn run_list(args: &ListArgs, reference: &ReferenceSettings) -> Result<()> {
    let (list, report) = load_reference(reference)?;
    debug!(
        rows = report.rows_read,
        skipped = report.skipped,
        overwritten = report.overwritten,
        "listing no-go entries"
    );
    print_reference_list(&list, args.category.as_deref());
    Ok(())
}

pub fn run_categorize(args: &CategorizeArgs) -> Result<()> {
    let summary = categorize_file(&args.input, &args.output)
        .with_context(|| format!("categorize {}", args.input.display()))?;
    if args.json {
        println!("{}", to_json(&summary)?);
    } else {
        print_categorize_summary(&summary);
    }
    Ok(())
}

fn classify(classifier: &NoGoClassifier, text: &str, options: &MatchOptions) -> ClassificationResult {
    let span = info_span!("classify", chars = text.len());
    span.in_scope(|| classifier.classify(text, options))
}

fn read_text(args: &InputArgs) -> Result<String> {
    read_input(args.text.as_deref(), args.file.as_deref())
}
