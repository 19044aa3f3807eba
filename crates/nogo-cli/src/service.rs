//! Construction of the shared classifier.
//!
//! The reference list is loaded once per process and the resulting
//! [`NoGoClassifier`] is passed to each command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use nogo_core::NoGoClassifier;
use nogo_model::NoGoList;
use nogo_reference::{
    LoadOptions, LoadReport, ReferenceError, load_nogo_list_with, resolve_nogo_list_path,
};

/// Where and how to read the reference list.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSettings {
    /// Explicit path; falls back to `NOGO_LIST_PATH` or the bundled list.
    pub path: Option<PathBuf>,
    /// Skip the first CSV row.
    pub has_headers: bool,
}

impl ReferenceSettings {
    pub fn resolved_path(&self) -> PathBuf {
        resolve_nogo_list_path(self.path.as_deref())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::default().with_headers(self.has_headers)
    }
}

/// Load the reference list described by `settings`.
pub fn load_reference(settings: &ReferenceSettings) -> Result<(NoGoList, LoadReport)> {
    let path = settings.resolved_path();
    load_nogo_list_with(&path, &settings.load_options())
        .with_context(|| format!("load no-go list: {}", path.display()))
}

/// Build the classifier, optionally degrading to an unavailable one when the
/// reference list cannot be read. A list that was read but failed to parse is
/// always an error.
pub fn build_classifier(settings: &ReferenceSettings, allow_unavailable: bool) -> Result<NoGoClassifier> {
    match load_reference(settings) {
        Ok((list, report)) => {
            info!(
                entries = report.loaded,
                skipped = report.skipped,
                "no-go checker initialized"
            );
            Ok(NoGoClassifier::new(list))
        }
        Err(error) if allow_unavailable && is_unavailable(&error) => {
            warn!(error = %format!("{error:#}"), "no-go checker unavailable; continuing in degraded mode");
            Ok(NoGoClassifier::unavailable())
        }
        Err(error) => Err(error),
    }
}

fn is_unavailable(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<ReferenceError>()
        .is_some_and(ReferenceError::is_unavailable)
}
