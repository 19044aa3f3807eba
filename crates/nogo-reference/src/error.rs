#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("no-go list not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write CSV {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ReferenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when a reference list could not be read. Categorizer write
    /// failures are not.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Io { .. } | Self::Csv { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ReferenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_failures_are_unavailable() {
        let missing = ReferenceError::NotFound {
            path: PathBuf::from("nogo.csv"),
        };
        assert!(missing.is_unavailable());

        let denied = ReferenceError::io("nogo.csv", std::io::Error::other("denied"));
        assert!(denied.is_unavailable());
    }

    #[test]
    fn write_failures_are_not_unavailable() {
        let error = ReferenceError::Write {
            path: PathBuf::from("out.csv"),
            source: csv::Error::from(std::io::Error::other("disk full")),
        };
        assert!(!error.is_unavailable());
    }
}
