//! No-go classifier.
//!
//! A [`NoGoClassifier`] owns a shared, read-only reference list and turns
//! label text into a [`ClassificationResult`]. It is cheap to clone and safe
//! to call from many threads at once; every call works on its own local
//! collections.
//!
//! A classifier built with [`NoGoClassifier::unavailable`] never reports a
//! product as safe. It returns a result with verdict
//! [`Verdict::Unavailable`] so callers can tell "checker down" apart from
//! "nothing found".

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::{debug, trace, warn};

use nogo_model::{
    ClassificationResult, DebugMatch, DebugReport, EXACT_MATCH_SCORE, MatchOptions, MatchRecord,
    NoGoList, REASON_NO_MATCHES, Token, Verdict,
};

use crate::error::ClassifierError;
use crate::tokenizer::tokenize;

#[derive(Debug, Clone, Default)]
pub struct NoGoClassifier {
    list: Option<Arc<NoGoList>>,
}

impl NoGoClassifier {
    pub fn new(list: NoGoList) -> Self {
        Self::from_shared(Arc::new(list))
    }

    pub fn from_shared(list: Arc<NoGoList>) -> Self {
        Self { list: Some(list) }
    }

    /// A classifier with no reference list (degraded mode).
    pub fn unavailable() -> Self {
        Self { list: None }
    }

    pub fn is_available(&self) -> bool {
        self.list.is_some()
    }

    /// The loaded reference list, if any.
    pub fn list(&self) -> Option<&NoGoList> {
        self.list.as_deref()
    }

    /// Classify label text against the reference list.
    ///
    /// Never fails: empty text is a safe verdict with no evidence, and a
    /// missing reference list yields [`ClassificationResult::unavailable`].
    pub fn classify(&self, text: &str, options: &MatchOptions) -> ClassificationResult {
        let Some(list) = self.list.as_deref() else {
            warn!("classification requested without a no-go list");
            return ClassificationResult::unavailable();
        };
        if options.use_fuzzy {
            debug!(
                fuzzy_threshold = options.fuzzy_threshold,
                length_threshold = options.length_threshold,
                "fuzzy matching requested; using exact matching"
            );
        }

        trace!(text, "classifying ingredients text");
        let tokens = tokenize(text);

        let mut found_terms = BTreeMap::new();
        let mut categories = BTreeSet::new();
        let mut flagged_tokens = BTreeSet::new();
        let mut token_matches = BTreeMap::new();

        for token in &tokens {
            let matches = match_token(list, token);
            if matches.is_empty() {
                continue;
            }
            for record in &matches {
                found_terms.insert(record.nogo_name.clone(), record.score);
                categories.insert(record.category.clone());
            }
            flagged_tokens.insert(token.as_str().to_string());
            token_matches.insert(token.as_str().to_string(), matches);
        }

        debug!(
            tokens = tokens.len(),
            flagged = flagged_tokens.len(),
            categories = categories.len(),
            "classified ingredients"
        );

        let (verdict, reason) = if flagged_tokens.is_empty() {
            (Verdict::Safe, REASON_NO_MATCHES.to_string())
        } else {
            (Verdict::Flagged, flagged_reason(&categories))
        };

        ClassificationResult {
            verdict,
            reason,
            found_terms,
            categories,
            flagged_tokens,
            token_matches,
        }
    }

    /// Tokens, their normalized forms, and exact hits, without aggregation.
    pub fn debug_check(&self, text: &str) -> Result<DebugReport, ClassifierError> {
        let list = self.list.as_deref().ok_or(ClassifierError::Unavailable)?;
        let tokens = tokenize(text);
        let normalized_tokens: Vec<String> = tokens.iter().map(Token::normalized).collect();

        let matches = tokens
            .iter()
            .zip(&normalized_tokens)
            .filter_map(|(token, normalized)| {
                list.get(normalized).map(|entry| DebugMatch {
                    token: token.as_str().to_string(),
                    normalized: normalized.clone(),
                    ingredient: entry.original_name.clone(),
                    category: entry.category.clone(),
                })
            })
            .collect();

        Ok(DebugReport {
            original_text: text.to_string(),
            tokens,
            normalized_tokens,
            matches,
            total_ingredients_checked: list.len(),
        })
    }
}

/// Exact matches for one token. Lookup is by normalized-name equality, so a
/// token matches at most one entry.
fn match_token(list: &NoGoList, token: &Token) -> Vec<MatchRecord> {
    list.lookup(token.as_str())
        .map(|entry| MatchRecord {
            token: token.as_str().to_string(),
            nogo_name: entry.original_name.clone(),
            score: EXACT_MATCH_SCORE,
            category: entry.category.clone(),
        })
        .into_iter()
        .collect()
}

fn flagged_reason(categories: &BTreeSet<String>) -> String {
    let joined = categories
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Contains concerning ingredients from categories: {joined}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nogo_model::ReferenceEntry;

    fn classifier() -> NoGoClassifier {
        NoGoClassifier::new(
            [
                ReferenceEntry::new("MSG", "Additives"),
                ReferenceEntry::new("Aspartame", "Sweeteners"),
            ]
            .into_iter()
            .collect(),
        )
    }

    #[test]
    fn reason_lists_sorted_categories() {
        let result = classifier().classify("Aspartame, MSG", &MatchOptions::default());
        assert_eq!(
            result.reason,
            "Contains concerning ingredients from categories: Additives, Sweeteners"
        );
    }

    #[test]
    fn fuzzy_request_still_matches_exactly() {
        let options = MatchOptions::default().with_fuzzy(50);
        let result = classifier().classify("Aspartam", &options);
        assert_eq!(result.verdict, Verdict::Safe);
    }

    #[test]
    fn debug_check_requires_list() {
        let err = NoGoClassifier::unavailable().debug_check("MSG").unwrap_err();
        assert!(matches!(err, ClassifierError::Unavailable));
    }

    #[test]
    fn default_is_unavailable() {
        assert!(!NoGoClassifier::default().is_available());
    }
}
