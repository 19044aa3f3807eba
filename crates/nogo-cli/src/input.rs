//! Resolution of the label text a command operates on.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Read label text from an inline argument, a file, or stdin (in that order).
pub fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    read_input_from(text, file, io::stdin().lock())
}

/// Same as [`read_input`] with an explicit fallback reader.
pub fn read_input_from<R: Read>(text: Option<&str>, file: Option<&Path>, mut fallback: R) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("read label text: {}", path.display()));
    }
    let mut buffer = String::new();
    fallback
        .read_to_string(&mut buffer)
        .context("read label text from stdin")?;
    Ok(buffer)
}
