//! Configuration for the name resolution gateway.

use serde::Deserialize;

/// Gateway configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NameResolutionGwConfig {
    /// Vendor selector used to pick a plugin implementation.
    ///
    /// Among registered plugins matching this vendor, the one with the
    /// lowest priority is selected.
    pub vendor: String,
}

impl Default for NameResolutionGwConfig {
    fn default() -> Self {
        Self {
            vendor: "hyperspot".to_owned(),
        }
    }
}
