//! Domain service for the name resolution gateway.
//!
//! Plugin selection is lazy: resolved on the first API call and cached.

use std::sync::Arc;

use name_resolution_sdk::{Metadata, NameResolverPluginClient, PluginDescriptor, ResolveRequest};
use tokio::sync::OnceCell;
use tracing::info;

use super::error::DomainError;
use crate::config::NameResolutionGwConfig;

/// Name resolution gateway service.
///
/// Holds the plugins registered by the host and delegates API calls to the
/// selected one.
pub struct Service {
    vendor: String,
    plugins: Vec<Arc<dyn NameResolverPluginClient>>,
    /// Lazily selected plugin (cached after first call).
    selected: OnceCell<Arc<dyn NameResolverPluginClient>>,
}

impl Service {
    /// Creates a new service with lazy plugin selection.
    #[must_use]
    pub fn new(
        cfg: NameResolutionGwConfig,
        plugins: Vec<Arc<dyn NameResolverPluginClient>>,
    ) -> Self {
        Self {
            vendor: cfg.vendor,
            plugins,
            selected: OnceCell::new(),
        }
    }

    /// Lazily selects and returns the plugin client.
    async fn get_plugin(&self) -> Result<&Arc<dyn NameResolverPluginClient>, DomainError> {
        self.selected
            .get_or_try_init(|| async { self.resolve_plugin() })
            .await
    }

    #[tracing::instrument(skip_all, fields(vendor = %self.vendor))]
    fn resolve_plugin(&self) -> Result<Arc<dyn NameResolverPluginClient>, DomainError> {
        info!("Resolving name resolution plugin");

        let descriptors: Vec<PluginDescriptor> =
            self.plugins.iter().map(|p| p.descriptor()).collect();
        let idx = choose_plugin_instance(&self.vendor, &descriptors)?;
        let plugin = Arc::clone(&self.plugins[idx]);
        info!(
            plugin_id = %descriptors[idx].id,
            priority = descriptors[idx].priority,
            "Selected name resolution plugin instance"
        );
        Ok(plugin)
    }

    /// Registers this instance through the selected plugin.
    ///
    /// # Errors
    ///
    /// - `PluginNotFound` if no plugin matches the configured vendor
    /// - Plugin errors (`InvalidPort`, `MissingProperty`, `Io`, ...)
    #[tracing::instrument(skip_all, fields(app_id = ?metadata.get(Metadata::INSTANCE_NAME)))]
    pub async fn init(&self, metadata: &Metadata) -> Result<(), DomainError> {
        let plugin = self.get_plugin().await?;
        plugin.init(metadata).await.map_err(DomainError::from)
    }

    /// Resolves an app id through the selected plugin.
    ///
    /// # Errors
    ///
    /// - `PluginNotFound` if no plugin matches the configured vendor
    /// - Plugin errors (`NotFound`, `Decode`, `InvalidId`, ...)
    #[tracing::instrument(skip_all, fields(app_id = %request.id))]
    pub async fn resolve_id(&self, request: &ResolveRequest) -> Result<String, DomainError> {
        let plugin = self.get_plugin().await?;
        plugin.resolve_id(request).await.map_err(DomainError::from)
    }
}

/// Selects the best plugin for the given vendor, returning its index.
///
/// If multiple plugins match, the one with lowest priority wins; ties keep
/// the first registered.
#[tracing::instrument(skip_all, fields(vendor, instance_count = instances.len()))]
fn choose_plugin_instance(
    vendor: &str,
    instances: &[PluginDescriptor],
) -> Result<usize, DomainError> {
    let mut best: Option<(usize, i16)> = None;

    for (idx, desc) in instances.iter().enumerate() {
        if desc.vendor != vendor {
            continue;
        }

        match best {
            None => best = Some((idx, desc.priority)),
            Some((_, cur_priority)) => {
                if desc.priority < cur_priority {
                    best = Some((idx, desc.priority));
                }
            }
        }
    }

    best.map(|(idx, _)| idx)
        .ok_or_else(|| DomainError::PluginNotFound {
            vendor: vendor.to_owned(),
        })
}
