//! Error types for the name resolution module.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when using the name resolution API.
#[derive(Debug, Error)]
pub enum NameResolutionError {
    /// The instance port is not a base-10 integer in the TCP port range.
    #[error("invalid instance port '{value}': {source}")]
    InvalidPort {
        /// The raw port value from the metadata.
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A required metadata property is missing or empty.
    #[error("missing metadata property: {key}")]
    MissingProperty {
        /// The metadata key that was expected.
        key: String,
    },

    /// The app id cannot be mapped to an entry file.
    #[error("invalid app id: '{id}'")]
    InvalidId {
        /// The rejected app id.
        id: String,
    },

    /// No entry has been registered for the app id.
    #[error("no entry for app id {id} at {}", .path.display())]
    NotFound {
        /// The app id being resolved.
        id: String,
        /// The entry file that was looked up.
        path: PathBuf,
    },

    /// Reading or writing an entry file failed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// The entry file involved.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The entry file does not hold a valid entry.
    #[error("malformed entry in {}: {source}", .path.display())]
    Decode {
        /// The entry file that failed to decode.
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No plugin is available to handle the request.
    #[error("no plugin available")]
    NoPluginAvailable,

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl NameResolutionError {
    /// Creates a `MissingProperty` error.
    #[must_use]
    pub fn missing_property(key: impl Into<String>) -> Self {
        Self::MissingProperty { key: key.into() }
    }

    /// Creates an `InvalidId` error.
    #[must_use]
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId { id: id.into() }
    }

    /// Returns `true` for failures caused by a missing entry.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
