#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Tracing target constants for consistent logging.

/// Tracing target for store construction and fixture loading.
pub const TRACING_TARGET_CLIENT: &str = "gauge_store::client";

/// Tracing target for repository query operations.
pub const TRACING_TARGET_QUERY: &str = "gauge_store::queries";

mod client;
pub mod model;
pub mod prelude;
pub mod query;
pub mod types;

use std::path::PathBuf;

pub use crate::client::MemoryStore;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
#[must_use = "store errors should be handled appropriately"]
pub enum StoreError {
    /// Failed to read a fixture file.
    #[error("Failed to read fixture {}: {source}", path.display())]
    Io {
        /// Path of the fixture file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A fixture file is not a valid JSON record list.
    #[error("Invalid fixture {}: {source}", path.display())]
    Fixture {
        /// Path of the fixture file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Two records share the same organization and identifier.
    #[error("Duplicate data source {id} in organization {org_id}")]
    Duplicate {
        /// Owning organization.
        org_id: i64,
        /// Data source identifier.
        id: i64,
    },
}

impl StoreError {
    /// Returns whether this error indicates a transient failure that might succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Io { source, .. } if matches!(
            source.kind(),
            std::io::ErrorKind::Interrupted | std::io::ErrorKind::TimedOut
        ))
    }

    /// Returns whether this error indicates a permanent failure that won't succeed on retry.
    pub fn is_permanent(&self) -> bool {
        !self.is_transient()
    }
}

/// Specialized [`Result`] type for store operations.
pub type StoreResult<T, E = StoreError> = Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_may_be_transient() {
        let error = StoreError::Io {
            path: "fixtures.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::TimedOut, "slow disk"),
        };
        assert!(error.is_transient());

        let error = StoreError::Io {
            path: "fixtures.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(error.is_permanent());
    }

    #[test]
    fn duplicate_error_message() {
        let error = StoreError::Duplicate { org_id: 1, id: 7 };
        assert_eq!(error.to_string(), "Duplicate data source 7 in organization 1");
        assert!(error.is_permanent());
    }
}
