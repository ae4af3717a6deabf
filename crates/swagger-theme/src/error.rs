//! Error types.
//!
//! Nothing on the theme-switching path returns these to the caller: the
//! controller logs storage failures and carries on. They surface only from
//! the store and configuration constructors.

use std::path::PathBuf;

/// Error returned by a [`SelectionStore`](crate::SelectionStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("failed to access selection store at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backing file does not hold a JSON object.
    #[error("selection store at {} is not valid JSON: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The store refused the write.
    #[error("selection store is read-only")]
    ReadOnly,
}

/// Error returned when loading a [`ThemeConfig`](crate::ThemeConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid theme config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value that cannot work, e.g. an empty storage key.
    #[error("invalid theme config: {field} {reason}")]
    Invalid { field: &'static str, reason: String },
}
