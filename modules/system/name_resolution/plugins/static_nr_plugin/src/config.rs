//! Configuration for the static name resolution plugin.

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::entry::EntryFormat;

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticNrPluginConfig {
    /// Vendor name used by the gateway for plugin selection.
    pub vendor: String,

    /// Plugin priority (lower = higher priority).
    pub priority: i16,

    /// Directory holding entry files when the metadata does not name one.
    /// Unset means the process working directory.
    pub directory: Option<PathBuf>,

    /// Shape of the entry files this plugin writes and reads.
    pub entry_format: EntryFormat,
}

impl Default for StaticNrPluginConfig {
    fn default() -> Self {
        Self {
            vendor: "hyperspot".to_owned(),
            priority: 100,
            directory: None,
            entry_format: EntryFormat::HostPort,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = StaticNrPluginConfig::default();
        assert_eq!(cfg.vendor, "hyperspot");
        assert_eq!(cfg.priority, 100);
        assert!(cfg.directory.is_none());
        assert_eq!(cfg.entry_format, EntryFormat::HostPort);
    }

    #[test]
    fn deserializes_partial_config() {
        let cfg: StaticNrPluginConfig = serde_json::from_value(serde_json::json!({
            "directory": "/tmp/cfg",
            "entry_format": "host-only"
        }))
        .unwrap();

        assert_eq!(cfg.directory, Some(PathBuf::from("/tmp/cfg")));
        assert_eq!(cfg.entry_format, EntryFormat::HostOnly);
        assert_eq!(cfg.priority, 100);
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<StaticNrPluginConfig, _> =
            serde_json::from_value(serde_json::json!({ "dir": "/tmp/cfg" }));
        assert!(result.is_err());
    }
}
