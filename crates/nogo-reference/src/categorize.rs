//! Rule-based categorization of a raw no-go ingredient list.
//!
//! Turns a plain one-ingredient-per-line file into the two-column CSV the
//! loader reads. Each ingredient gets the first category whose suffix
//! pattern matches its normalized name, or [`GENERAL_CATEGORY`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use csv::WriterBuilder;
use regex::Regex;
use serde::Serialize;
use tracing::info;

use nogo_model::normalize_name;

use crate::error::{ReferenceError, Result};

/// Category for ingredients no rule matched.
pub const GENERAL_CATEGORY: &str = "General";

/// Header line some raw lists start with.
const RAW_LIST_HEADER: &str = "nogo ingredients";

/// Examples kept per category in the summary.
const EXAMPLES_PER_CATEGORY: usize = 3;

/// Category rules in priority order. Patterns are matched case-insensitively
/// against the end of the normalized name.
const CATEGORY_RULES: &[(&str, &str)] = &[
    ("Juices", r"\sjuice$"),
    (
        "Sweeteners",
        r"(sugar|syrup|honey|nectar|dextrose|fructose|glucose|maltose|sucrose|stevia|allulose)$",
    ),
    ("Starches", r"(starch|flour|meal)$"),
    ("Proteins", r"(protein|isolate|concentrate)$"),
    ("Oils", r"(oil|fat)$"),
    (
        "Additives",
        r"(acid|sulfite|sulfate|chloride|benzoate|sorbate|nitrite|carbonate|citrate|phosphate)$",
    ),
    ("Flavors", r"(flavor|extract)$"),
    ("Enzymes", r"(enzyme|protease|amylase|lipase)$"),
    ("Preservatives", r"(bha|bht|tbhq|preservative)$"),
    ("Gums", r"(gum|carrageenan|pectin)$"),
    ("Vitamins", r"(vitamin|tocopherol)$"),
    ("Grains", r"(rice|wheat|barley|corn|oat|rye|spelt)$"),
    ("Colors", r"(color|annatto|caramel)$"),
];

static CATEGORY_REGEXES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    CATEGORY_RULES
        .iter()
        .map(|(category, pattern)| {
            let regex = Regex::new(&format!("(?i){pattern}")).expect("Invalid category regex");
            (*category, regex)
        })
        .collect()
});

/// An ingredient with its assigned category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorizedIngredient {
    pub ingredient: String,
    pub normalized: String,
    pub category: &'static str,
}

/// Per-category statistics for a categorization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub count: usize,
    pub examples: Vec<String>,
    /// Normalized form of the first example.
    pub normalized_example: Option<String>,
}

/// Outcome of [`categorize_file`].
#[derive(Debug, Clone, Serialize)]
pub struct CategorizeSummary {
    pub total: usize,
    pub output: PathBuf,
    pub debug_output: PathBuf,
    pub categories: BTreeMap<String, CategoryStats>,
    /// Ingredients that fell through to [`GENERAL_CATEGORY`].
    pub uncategorized: Vec<String>,
}

/// Assign a category to a single ingredient name.
pub fn categorize_ingredient(ingredient: &str) -> &'static str {
    let normalized = normalize_name(ingredient);
    CATEGORY_REGEXES
        .iter()
        .find(|(_, regex)| regex.is_match(&normalized))
        .map_or(GENERAL_CATEGORY, |(category, _)| *category)
}

/// Categorize raw list lines.
///
/// Blank lines are dropped, as is a leading `nogo ingredients` header.
/// Output is sorted by category, then ingredient.
pub fn categorize_ingredients<I, S>(lines: I) -> Vec<CategorizedIngredient>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut items: Vec<CategorizedIngredient> = Vec::new();
    let mut first = true;
    for line in lines {
        let ingredient = line.as_ref().trim();
        if ingredient.is_empty() {
            continue;
        }
        if std::mem::take(&mut first) && ingredient.eq_ignore_ascii_case(RAW_LIST_HEADER) {
            continue;
        }
        items.push(CategorizedIngredient {
            ingredient: ingredient.to_string(),
            normalized: normalize_name(ingredient),
            category: categorize_ingredient(ingredient),
        });
    }
    items.sort_by(|a, b| {
        a.category
            .cmp(b.category)
            .then_with(|| a.ingredient.cmp(&b.ingredient))
    });
    items
}

/// Path of the debug CSV written next to `output` (`<stem>_debug.<ext>`).
pub fn debug_output_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|v| v.to_str())
        .unwrap_or("nogo_ingredients");
    let ext = output.extension().and_then(|v| v.to_str()).unwrap_or("csv");
    output.with_file_name(format!("{stem}_debug.{ext}"))
}

/// Categorize a raw list file and write the reference CSV plus a debug CSV.
///
/// The reference CSV has no header row so it loads directly with
/// default [`LoadOptions`](crate::LoadOptions).
pub fn categorize_file(input: &Path, output: &Path) -> Result<CategorizeSummary> {
    if !input.exists() {
        return Err(ReferenceError::NotFound {
            path: input.to_path_buf(),
        });
    }
    let content = fs::read_to_string(input).map_err(|source| ReferenceError::io(input, source))?;
    let items = categorize_ingredients(content.lines());

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReferenceError::io(parent, source))?;
    }
    let debug_output = debug_output_path(output);
    write_reference_csv(output, &items)?;
    write_debug_csv(&debug_output, &items)?;

    let summary = summarize(&items, output, &debug_output);
    info!(
        input = %input.display(),
        output = %output.display(),
        total = summary.total,
        categories = summary.categories.len(),
        "categorized no-go ingredients"
    );
    Ok(summary)
}

fn write_reference_csv(path: &Path, items: &[CategorizedIngredient]) -> Result<()> {
    let write_err = |source: csv::Error| ReferenceError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(write_err)?;
    for item in items {
        writer
            .write_record([item.ingredient.as_str(), item.category])
            .map_err(write_err)?;
    }
    writer
        .flush()
        .map_err(|source| ReferenceError::io(path, source))
}

fn write_debug_csv(path: &Path, items: &[CategorizedIngredient]) -> Result<()> {
    let write_err = |source: csv::Error| ReferenceError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new().from_path(path).map_err(write_err)?;
    writer
        .write_record(["ingredient", "normalized", "category"])
        .map_err(write_err)?;
    for item in items {
        writer
            .write_record([
                item.ingredient.as_str(),
                item.normalized.as_str(),
                item.category,
            ])
            .map_err(write_err)?;
    }
    writer
        .flush()
        .map_err(|source| ReferenceError::io(path, source))
}

fn summarize(items: &[CategorizedIngredient], output: &Path, debug_output: &Path) -> CategorizeSummary {
    let mut categories: BTreeMap<String, CategoryStats> = BTreeMap::new();
    let mut uncategorized = Vec::new();
    for item in items {
        let stats = categories.entry(item.category.to_string()).or_default();
        stats.count += 1;
        if stats.examples.len() < EXAMPLES_PER_CATEGORY {
            stats.examples.push(item.ingredient.clone());
        }
        if stats.normalized_example.is_none() {
            stats.normalized_example = Some(item.normalized.clone());
        }
        if item.category == GENERAL_CATEGORY {
            uncategorized.push(item.ingredient.clone());
        }
    }
    CategorizeSummary {
        total: items.len(),
        output: output.to_path_buf(),
        debug_output: debug_output.to_path_buf(),
        categories,
        uncategorized,
    }
}
