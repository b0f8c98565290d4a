//! Entry file format and file access.
//!
//! One file per app id, named `<app-id>.json`:
//!
//! - `host-port`: `{"host": "10.0.0.1", "port": 8080}`
//! - `host-only`: `{"host": "10.0.0.1"}`

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use name_resolution_sdk::NameResolutionError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;

/// Which fields an entry file carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryFormat {
    /// Host and port both come from the entry file.
    #[default]
    HostPort,
    /// Host comes from the entry file, port from the resolve request.
    HostOnly,
}

/// Entry carrying both host and port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticEntry {
    pub host: String,
    pub port: u16,
}

impl StaticEntry {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Entry carrying only the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEntry {
    pub host: String,
}

impl HostEntry {
    #[must_use]
    pub fn address(&self, port: u16) -> String {
        format!("{}:{port}", self.host)
    }
}

/// `<dir>/<id>.json`, or `<id>.json` relative to the working directory.
#[must_use]
pub fn entry_path(directory: Option<&Path>, id: &str) -> PathBuf {
    let file_name = format!("{id}.json");
    match directory {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Serializes `entry` and writes it to `path`, flushed to disk before returning.
///
/// # Errors
///
/// Returns `Io` if the file cannot be created or written.
pub async fn write_entry<T: Serialize>(path: &Path, entry: &T) -> Result<(), NameResolutionError> {
    let bytes = serde_json::to_vec(entry)
        .map_err(|e| NameResolutionError::Internal(format!("failed to encode entry: {e}")))?;
    let io_err = |source| NameResolutionError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o644);

    let mut file = options.open(path).await.map_err(io_err)?;
    file.write_all(&bytes).await.map_err(io_err)?;
    file.sync_all().await.map_err(io_err)?;
    Ok(())
}

/// Reads and decodes the entry for `id` from `path`.
///
/// # Errors
///
/// - `NotFound` if the file does not exist
/// - `Io` if it cannot be read
/// - `Decode` if the content does not match `T`
pub async fn read_entry<T: DeserializeOwned>(
    id: &str,
    path: &Path,
) -> Result<T, NameResolutionError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            NameResolutionError::NotFound {
                id: id.to_owned(),
                path: path.to_path_buf(),
            }
        } else {
            NameResolutionError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_slice(&bytes).map_err(|source| NameResolutionError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
