//! Matching options accepted by the classifier.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Default similarity threshold (0-100) for fuzzy matching.
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 90;

/// Default minimum length ratio between token and reference name.
pub const DEFAULT_LENGTH_THRESHOLD: f64 = 0.7;

/// Matching options for a classification call.
///
/// Only exact matching is implemented. The fuzzy fields are accepted so
/// callers that already pass them keep working; the classifier reports
/// a fuzzy request in its debug log and then matches exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Request approximate matching.
    pub use_fuzzy: bool,
    /// Similarity score (0-100) a fuzzy match would need.
    pub fuzzy_threshold: u8,
    /// Minimum token/reference length ratio (0.0-1.0) a fuzzy match would need.
    pub length_threshold: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            use_fuzzy: false,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            length_threshold: DEFAULT_LENGTH_THRESHOLD,
        }
    }
}

impl MatchOptions {
    /// Exact matching with default thresholds.
    pub fn exact() -> Self {
        Self::default()
    }

    /// Request fuzzy matching with the given threshold.
    #[must_use]
    pub fn with_fuzzy(mut self, threshold: u8) -> Self {
        self.use_fuzzy = true;
        self.fuzzy_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_length_threshold(mut self, threshold: f64) -> Self {
        self.length_threshold = threshold;
        self
    }

    /// Check that thresholds are within their documented ranges.
    pub fn validate(&self) -> Result<()> {
        if self.fuzzy_threshold > 100 {
            return Err(ModelError::InvalidOption {
                name: "fuzzy_threshold",
                message: format!("{} is outside 0..=100", self.fuzzy_threshold),
            });
        }
        if !(0.0..=1.0).contains(&self.length_threshold) {
            return Err(ModelError::InvalidOption {
                name: "length_threshold",
                message: format!("{} is outside 0.0..=1.0", self.length_threshold),
            });
        }
        Ok(())
    }
}
