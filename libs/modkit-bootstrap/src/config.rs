//! Application configuration and typed per-module sections.
//!
//! The configuration file is YAML:
//!
//! ```yaml
//! logging:
//!   level: info
//!   json: false
//! modules:
//!   name_resolution:
//!     config:
//!       vendor: hyperspot
//!   static_nr_plugin:
//!     config:
//!       directory: /var/run/apps
//!       entry_format: host-port
//! ```
//!
//! Module sections are kept as raw JSON and decoded by the module that owns
//! them via [`module_config_or_default`].

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Format, Serialized, Yaml};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::logging::LoggingConfig;

/// Configuration error for typed config operations
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid config for module '{module}': {source}")]
    InvalidConfig {
        module: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging setup.
    pub logging: LoggingConfig,

    /// Raw module sections by module name.
    pub modules: HashMap<String, serde_json::Value>,
}

impl AppConfig {
    /// Loads configuration from a YAML file layered over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or does not match the schema.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file_exact(path));
        figment
            .extract()
            .with_context(|| format!("failed to load configuration from {}", path.display()))
    }

    /// Parses configuration from a YAML string layered over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not match the schema.
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::string(yaml));
        figment.extract().context("failed to parse configuration")
    }

    /// Returns the raw section for the module, if any.
    #[must_use]
    pub fn module_config(&self, module_name: &str) -> Option<&serde_json::Value> {
        self.modules.get(module_name)
    }
}

/// Lenient configuration loader that falls back to defaults.
///
/// - If the module is not present in config → returns `Ok(T::default())`
/// - If the module value is not an object → returns `Ok(T::default())`
/// - If the module has no "config" field → returns `Ok(T::default())`
/// - If "config" is present but invalid → returns `Err(ConfigError::InvalidConfig)`
///
/// # Errors
/// Returns `ConfigError::InvalidConfig` if the config section exists but cannot be deserialized.
pub fn module_config_or_default<T: DeserializeOwned + Default>(
    app: &AppConfig,
    module_name: &str,
) -> Result<T, ConfigError> {
    let Some(config_section) = app
        .module_config(module_name)
        .and_then(serde_json::Value::as_object)
        .and_then(|obj| obj.get("config"))
    else {
        return Ok(T::default());
    };

    serde_json::from_value(config_section.clone()).map_err(|e| ConfigError::InvalidConfig {
        module: module_name.to_owned(),
        source: e,
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::io::Write;

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    struct TestConfig {
        vendor: String,
        priority: i16,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                vendor: "hyperspot".to_owned(),
                priority: 100,
            }
        }
    }

    const YAML: &str = r"
logging:
  level: debug
modules:
  test_module:
    config:
      vendor: acme
  no_config_module:
    other: 1
";

    #[test]
    fn parses_logging_and_modules() {
        let app = AppConfig::from_yaml_str(YAML).unwrap();

        assert_eq!(app.logging.level, "debug");
        assert!(!app.logging.json);
        assert!(app.module_config("test_module").is_some());
    }

    #[test]
    fn module_config_is_decoded_with_defaults() {
        let app = AppConfig::from_yaml_str(YAML).unwrap();

        let cfg: TestConfig = module_config_or_default(&app, "test_module").unwrap();
        assert_eq!(
            cfg,
            TestConfig {
                vendor: "acme".to_owned(),
                priority: 100,
            }
        );
    }

    #[test]
    fn missing_module_or_section_falls_back_to_default() {
        let app = AppConfig::from_yaml_str(YAML).unwrap();

        let missing: TestConfig = module_config_or_default(&app, "unknown").unwrap();
        let no_section: TestConfig = module_config_or_default(&app, "no_config_module").unwrap();

        assert_eq!(missing, TestConfig::default());
        assert_eq!(no_section, TestConfig::default());
    }

    #[test]
    fn invalid_section_is_an_error() {
        let app = AppConfig::from_yaml_str(
            r"
modules:
  test_module:
    config:
      unexpected: true
",
        )
        .unwrap();

        let result: Result<TestConfig, _> = module_config_or_default(&app, "test_module");
        match result.unwrap_err() {
            ConfigError::InvalidConfig { module, .. } => assert_eq!(module, "test_module"),
        }
    }

    #[test]
    fn omitted_sections_yield_defaults() {
        let app = AppConfig::from_yaml_str("modules: {}").unwrap();

        assert_eq!(app.logging.level, "info");
        assert!(app.modules.is_empty());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();

        let app = AppConfig::load(file.path()).unwrap();
        assert_eq!(app.logging.level, "debug");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = AppConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(err.to_string().contains("absent.yaml"));
    }
}
