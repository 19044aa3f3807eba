//! Tokenization of ingredient-label text and exact-match classification
//! against a no-go reference list.
//!
//! ```
//! use nogo_core::{NoGoClassifier, tokenize};
//! use nogo_model::{MatchOptions, NoGoList, ReferenceEntry, Verdict};
//!
//! let list: NoGoList = [ReferenceEntry::new("MSG", "Additives")].into_iter().collect();
//! let classifier = NoGoClassifier::new(list);
//!
//! let result = classifier.classify("INGREDIENTS: Salt, msg", &MatchOptions::default());
//! assert_eq!(result.verdict, Verdict::Flagged);
//! assert_eq!(tokenize("Salt, msg"), vec!["Salt", "msg"]);
//! ```

#![deny(unsafe_code)]

pub mod classifier;
pub mod error;
pub mod tokenizer;

pub use crate::classifier::NoGoClassifier;
pub use crate::error::ClassifierError;
pub use crate::tokenizer::{ingredients_section, strip_quotes, tokenize};
