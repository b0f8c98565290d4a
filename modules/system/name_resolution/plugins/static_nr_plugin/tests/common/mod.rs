#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use modkit_bootstrap::AppConfig;
use name_resolution_sdk::Metadata;

/// App config pointing the static plugin at `dir`.
pub fn app_config(dir: &Path, entry_format: &str) -> AppConfig {
    AppConfig::from_yaml_str(&format!(
        r#"
modules:
  static_nr_plugin:
    config:
      directory: "{}"
      entry_format: {entry_format}
"#,
        dir.display()
    ))
    .expect("valid config")
}

pub fn metadata(id: &str, address: &str, port: &str) -> Metadata {
    Metadata::new()
        .with_property(Metadata::INSTANCE_NAME, id)
        .with_property(Metadata::INSTANCE_ADDRESS, address)
        .with_property(Metadata::INSTANCE_PORT, port)
}

/// Polls until `path` disappears or five seconds pass.
pub async fn wait_until_removed(path: &Path) -> bool {
    tokio::time::timeout(Duration::from_secs(5), async {
        while path.exists() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .is_ok()
}
