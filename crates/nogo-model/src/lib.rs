#![deny(unsafe_code)]

pub mod error;
pub mod normalize;
pub mod options;
pub mod reference;
pub mod result;
pub mod token;

pub use error::{ModelError, Result};
pub use normalize::normalize_name;
pub use options::MatchOptions;
pub use reference::{DEFAULT_CATEGORY, NoGoList, ReferenceEntry};
pub use result::{
    ClassificationResult, DebugMatch, DebugReport, EXACT_MATCH_SCORE, MatchRecord,
    REASON_NO_MATCHES, REASON_UNAVAILABLE, Verdict,
};
pub use token::Token;
