//! Domain models for the name resolution module.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::NameResolutionError;

/// Instance metadata handed to a resolver on `init`.
///
/// The host runtime fills the property map; resolvers read the keys they
/// recognize and ignore the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Raw properties by key.
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

impl Metadata {
    /// Instance identifier (app id).
    pub const INSTANCE_NAME: &'static str = "name";
    /// Address other instances use to reach this one.
    pub const INSTANCE_ADDRESS: &'static str = "address";
    /// Port other instances use to reach this one, as a base-10 string.
    pub const INSTANCE_PORT: &'static str = "port";
    /// Directory holding entry files.
    pub const INSTANCE_CONFIGURATION: &'static str = "configuration";

    /// Creates empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property, replacing any previous value for the key.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Returns the property value for `key`, if set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Returns the non-empty property value for `key`.
    ///
    /// # Errors
    ///
    /// Returns `MissingProperty` if the key is absent or its value is empty.
    pub fn require(&self, key: &str) -> Result<&str, NameResolutionError> {
        match self.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(NameResolutionError::missing_property(key)),
        }
    }

    /// Instance identifier.
    ///
    /// # Errors
    ///
    /// Returns `MissingProperty` if the name is absent or empty.
    pub fn instance_name(&self) -> Result<&str, NameResolutionError> {
        self.require(Self::INSTANCE_NAME)
    }

    /// Instance address.
    ///
    /// # Errors
    ///
    /// Returns `MissingProperty` if the address is absent or empty.
    pub fn instance_address(&self) -> Result<&str, NameResolutionError> {
        self.require(Self::INSTANCE_ADDRESS)
    }

    /// Instance port parsed as a base-10 integer.
    ///
    /// A missing port is parsed as the empty string and therefore fails the
    /// same way a non-numeric one does.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPort` if the value is not a number in `0..=65535`.
    pub fn instance_port(&self) -> Result<u16, NameResolutionError> {
        let raw = self.get(Self::INSTANCE_PORT).unwrap_or_default();
        raw.parse::<u16>()
            .map_err(|source| NameResolutionError::InvalidPort {
                value: raw.to_owned(),
                source,
            })
    }

    /// Configured entry directory; empty values count as unset.
    #[must_use]
    pub fn configuration_dir(&self) -> Option<&str> {
        self.get(Self::INSTANCE_CONFIGURATION)
            .filter(|dir| !dir.is_empty())
    }
}

/// Request to resolve an app id into an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRequest {
    /// App id to resolve.
    pub id: String,
    /// Port supplied by the caller. Used only by resolvers that do not store one.
    pub port: u16,
}

impl ResolveRequest {
    #[must_use]
    pub fn new(id: impl Into<String>, port: u16) -> Self {
        Self {
            id: id.into(),
            port,
        }
    }
}

/// Describes a plugin instance to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Unique plugin instance id.
    pub id: String,
    /// Vendor the gateway matches against its configuration.
    pub vendor: String,
    /// Selection priority (lower = higher priority).
    pub priority: i16,
}

/// Checks that an app id can be used as an entry file stem.
///
/// Ids must be non-empty, must not be `.` or `..` and must not contain path
/// separators.
///
/// # Errors
///
/// Returns `InvalidId` if the id is rejected.
pub fn validate_app_id(id: &str) -> Result<(), NameResolutionError> {
    let rejected = id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\', '\0']);
    if rejected {
        return Err(NameResolutionError::invalid_id(id));
    }
    Ok(())
}
