//! Classification output types.
//!
//! Field names follow the JSON contract consumed by the web layer:
//! `flag`, `reason`, `found_terms`, `categories`, `flagged_tokens`,
//! `token_matches`. Collections are ordered so the same input always
//! serializes to the same bytes.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// Score recorded for an exact match.
pub const EXACT_MATCH_SCORE: u8 = 100;

/// Reason reported when no reference list is loaded.
pub const REASON_UNAVAILABLE: &str = "NoGo checker not available";

/// Reason reported when nothing matched.
pub const REASON_NO_MATCHES: &str = "No concerning ingredients found";

/// Coarse outcome of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// No reference entry matched.
    #[serde(rename = "Healthy")]
    Safe,
    /// At least one token matched a reference entry.
    #[serde(rename = "NoGo")]
    Flagged,
    /// The reference list was not loaded; nothing was checked.
    #[serde(rename = "Error")]
    Unavailable,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "Healthy",
            Verdict::Flagged => "NoGo",
            Verdict::Unavailable => "Error",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evidence that a token matched a reference entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Token as extracted, before normalization.
    pub token: String,
    /// Matched entry's original name.
    #[serde(rename = "nogo")]
    pub nogo_name: String,
    pub score: u8,
    pub category: String,
}

/// Result of one classification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "flag")]
    pub verdict: Verdict,
    pub reason: String,
    /// Matched reference name -> score.
    pub found_terms: BTreeMap<String, u8>,
    pub categories: BTreeSet<String>,
    pub flagged_tokens: BTreeSet<String>,
    /// Flagged token -> its matches, in match order.
    pub token_matches: BTreeMap<String, Vec<MatchRecord>>,
}

impl ClassificationResult {
    /// Degraded result for a classifier without a reference list.
    pub fn unavailable() -> Self {
        Self {
            verdict: Verdict::Unavailable,
            reason: REASON_UNAVAILABLE.to_string(),
            found_terms: BTreeMap::new(),
            categories: BTreeSet::new(),
            flagged_tokens: BTreeSet::new(),
            token_matches: BTreeMap::new(),
        }
    }

    pub fn is_flagged(&self) -> bool {
        self.verdict == Verdict::Flagged
    }

    /// False when the result came from a classifier without a reference list.
    pub fn is_available(&self) -> bool {
        self.verdict != Verdict::Unavailable
    }
}

/// A single exact hit reported by the debug inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugMatch {
    pub token: String,
    pub normalized: String,
    pub ingredient: String,
    pub category: String,
}

/// Intermediate state of a classification, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugReport {
    pub original_text: String,
    pub tokens: Vec<Token>,
    pub normalized_tokens: Vec<String>,
    pub matches: Vec<DebugMatch>,
    /// Size of the reference list the tokens were checked against.
    pub total_ingredients_checked: usize,
}
