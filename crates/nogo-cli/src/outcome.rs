//! Exit codes and JSON rendering for command results.

use anyhow::{Context, Result};
use serde::Serialize;

use nogo_model::Verdict;

/// No no-go ingredients found.
pub const EXIT_SAFE: i32 = 0;
/// Command failed, or the checker ran without a reference list.
pub const EXIT_FAILURE: i32 = 1;
/// The text contains no-go ingredients.
pub const EXIT_FLAGGED: i32 = 2;

/// Exit code for a `check` verdict. An unavailable checker is a failure,
/// never a pass.
pub fn exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Safe => EXIT_SAFE,
        Verdict::Flagged => EXIT_FLAGGED,
        Verdict::Unavailable => EXIT_FAILURE,
    }
}

/// Pretty-printed JSON for `--json` output.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialize JSON output")
}
