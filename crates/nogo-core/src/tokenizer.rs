//! Ingredient-list tokenizer.
//!
//! Label text is split into candidate ingredient names in four steps:
//!
//! 1. Quote characters (straight and curly) are deleted outright.
//! 2. If an `INGREDIENTS:` marker is present (any case), only the text after
//!    its first occurrence is kept.
//! 3. Every `( ... )` group is split on commas into "inside" tokens.
//! 4. The text with those groups removed is split on commas into "outside"
//!    tokens.
//!
//! The result is all inside tokens followed by all outside tokens. Groups are
//! matched non-greedily and do not nest, so `A (B (C), D)` yields `B (C` from
//! the group and leaves `, D)` in the outside text. That lossy behavior is
//! intentional: token boundaries are part of the observable output.
//!
//! Each piece is trimmed of whitespace, then of ASCII punctuation at both
//! ends; empty pieces are dropped.

use std::sync::LazyLock;

use regex::Regex;

use nogo_model::Token;

/// Straight, curly, and low-9 quote marks (single and double).
const QUOTE_CHARS: &[char] = &[
    '"', '\'', '\u{201C}', '\u{201D}', '\u{201E}', '\u{201F}', '\u{2018}', '\u{2019}', '\u{201A}',
    '\u{201B}',
];

static INGREDIENTS_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)INGREDIENTS:").expect("Invalid marker regex"));

static PAREN_GROUP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("Invalid paren group regex"));

/// Delete quote characters. `"salt"` becomes `salt`, `didn't` becomes `didnt`.
pub fn strip_quotes(text: &str) -> String {
    text.chars().filter(|c| !QUOTE_CHARS.contains(c)).collect()
}

/// Text after the first `INGREDIENTS:` marker, or the whole text if absent.
pub fn ingredients_section(text: &str) -> &str {
    match INGREDIENTS_MARKER_REGEX.find(text) {
        Some(marker) => &text[marker.end()..],
        None => text,
    }
}

/// Split label text into ordered candidate tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let unquoted = strip_quotes(text);
    let section = ingredients_section(&unquoted);

    let mut tokens: Vec<Token> = PAREN_GROUP_REGEX
        .captures_iter(section)
        .filter_map(|caps| caps.get(1))
        .flat_map(|group| split_pieces(group.as_str()))
        .collect();

    let outside = PAREN_GROUP_REGEX.replace_all(section, "");
    tokens.extend(split_pieces(&outside));
    tokens
}

fn split_pieces(text: &str) -> impl Iterator<Item = Token> + '_ {
    text.split(',').filter_map(|piece| {
        let cleaned = piece
            .trim()
            .trim_matches(|c: char| c.is_ascii_punctuation());
        (!cleaned.is_empty()).then(|| Token::new(cleaned))
    })
}
