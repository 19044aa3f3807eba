//! No-go reference list loader.
//!
//! The source is a two-column CSV: ingredient name, then an optional
//! category. Column order is fixed. By default there is no header row,
//! so a header line is loaded like any other row; set
//! [`LoadOptions::has_headers`] to skip it.
//!
//! Rows without a usable name are skipped. Rows whose normalized name
//! collides with an earlier row replace it.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use nogo_model::{DEFAULT_CATEGORY, NoGoList, ReferenceEntry};

use crate::error::{ReferenceError, Result};

/// Options controlling how a reference CSV is read.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Treat the first row as a header and skip it.
    pub has_headers: bool,
    /// Category assigned to rows without a second column.
    pub default_category: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            has_headers: false,
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    #[must_use]
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }
}

/// Counts collected while loading a reference list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Data rows seen (header excluded).
    pub rows_read: usize,
    /// Distinct entries in the resulting list.
    pub loaded: usize,
    /// Rows dropped for lacking a usable name or failing to decode.
    pub skipped: usize,
    /// Rows that replaced an earlier entry with the same normalized name.
    pub overwritten: usize,
}

/// Load a reference list with default options.
pub fn load_nogo_list(path: &Path) -> Result<NoGoList> {
    load_nogo_list_with(path, &LoadOptions::default()).map(|(list, _)| list)
}

/// Load a reference list from a CSV file.
///
/// Fails when the file is missing or unreadable; malformed rows are skipped.
pub fn load_nogo_list_with(path: &Path, options: &LoadOptions) -> Result<(NoGoList, LoadReport)> {
    if !path.exists() {
        return Err(ReferenceError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| ReferenceError::io(path, source))?;
    let source_name = path.display().to_string();
    let (mut list, report) = read_nogo_list(file, &source_name, options)?;
    list.source = path
        .file_name()
        .and_then(|v| v.to_str())
        .map(String::from);

    info!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.skipped,
        overwritten = report.overwritten,
        "loaded no-go list"
    );
    Ok((list, report))
}

/// Read a reference list from any CSV source.
///
/// `source_name` is only used in error messages and log events.
pub fn read_nogo_list<R: Read>(
    reader: R,
    source_name: &str,
    options: &LoadOptions,
) -> Result<(NoGoList, LoadReport)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(options.has_headers)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut list = NoGoList::new();
    let mut report = LoadReport::default();

    for (idx, record) in reader.records().enumerate() {
        report.rows_read += 1;
        let record = match record {
            Ok(record) => record,
            Err(source) if source.is_io_error() => {
                return Err(ReferenceError::Csv {
                    source_name: source_name.to_string(),
                    source,
                });
            }
            Err(error) => {
                warn!(source = source_name, row = idx + 1, %error, "skipping unreadable no-go row");
                report.skipped += 1;
                continue;
            }
        };

        let Some(entry) = parse_entry(&record, &options.default_category) else {
            debug!(source = source_name, row = idx + 1, "skipping no-go row without a name");
            report.skipped += 1;
            continue;
        };

        if let Some(previous) = list.insert(entry) {
            debug!(
                source = source_name,
                row = idx + 1,
                name = %previous.normalized_name,
                "no-go entry replaced by later row"
            );
            report.overwritten += 1;
        }
    }

    report.loaded = list.len();
    Ok((list, report))
}

fn parse_entry(record: &StringRecord, default_category: &str) -> Option<ReferenceEntry> {
    let name = record.get(0)?.trim_start_matches('\u{feff}').trim();
    if name.is_empty() {
        return None;
    }
    let category = record
        .get(1)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default_category);

    let entry = ReferenceEntry::new(name, category);
    if entry.normalized_name.is_empty() {
        return None;
    }
    Some(entry)
}
