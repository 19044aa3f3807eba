//! Normalization rule shared by reference entries and input tokens.
//!
//! Two strings are considered the same ingredient when their normalized
//! forms are equal. The rule is:
//!
//! 1. uppercase and trim surrounding whitespace
//! 2. remove every parenthetical group `(...)` (non-nested)
//! 3. collapse internal whitespace runs to a single space
//!
//! ```
//! use nogo_model::normalize_name;
//!
//! assert_eq!(normalize_name("  Red 40 (Color)  Lake "), "RED 40 LAKE");
//! ```

use std::sync::LazyLock;

use regex::Regex;

static PARENTHETICAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("Invalid parenthetical regex"));

/// Normalize an ingredient name for equality lookup.
pub fn normalize_name(text: &str) -> String {
    let upper = text.to_uppercase();
    let stripped = PARENTHETICAL_REGEX.replace_all(upper.trim(), "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
