//! Name resolution gateway module.

use std::sync::{Arc, OnceLock};

use modkit_bootstrap::{AppConfig, module_config_or_default};
use name_resolution_sdk::{NameResolverGatewayClient, NameResolverPluginClient};
use parking_lot::Mutex;
use tracing::info;

use crate::config::NameResolutionGwConfig;
use crate::domain::{NameResolutionGwLocalClient, Service};

/// Name Resolution Gateway module.
///
/// This module:
/// 1. Collects plugin clients registered by the host
/// 2. Routes requests to the selected plugin based on vendor configuration
///
/// Plugin selection is lazy: happens on first API call.
pub struct NameResolutionGateway {
    plugins: Mutex<Vec<Arc<dyn NameResolverPluginClient>>>,
    service: OnceLock<Arc<Service>>,
}

impl Default for NameResolutionGateway {
    fn default() -> Self {
        Self {
            plugins: Mutex::new(Vec::new()),
            service: OnceLock::new(),
        }
    }
}

impl NameResolutionGateway {
    /// Config section name under `modules:`.
    pub const MODULE_NAME: &'static str = "name_resolution";

    /// Makes a plugin available for selection. Must be called before `init`.
    pub fn register_plugin(&self, plugin: Arc<dyn NameResolverPluginClient>) {
        let desc = plugin.descriptor();
        info!(
            plugin_id = %desc.id,
            vendor = %desc.vendor,
            priority = desc.priority,
            "Registered name resolution plugin"
        );
        self.plugins.lock().push(plugin);
    }

    /// Initializes the gateway and returns the consumer client.
    ///
    /// # Errors
    ///
    /// Returns an error if the config section is invalid or the module was
    /// already initialized.
    #[tracing::instrument(skip_all, fields(vendor))]
    pub fn init(&self, app: &AppConfig) -> anyhow::Result<Arc<dyn NameResolverGatewayClient>> {
        let cfg: NameResolutionGwConfig = module_config_or_default(app, Self::MODULE_NAME)?;
        tracing::Span::current().record("vendor", cfg.vendor.as_str());
        info!(vendor = %cfg.vendor, "Initializing name_resolution gateway");

        let plugins = self.plugins.lock().clone();
        let svc = Arc::new(Service::new(cfg, plugins));
        self.service
            .set(svc.clone())
            .map_err(|_| anyhow::anyhow!("Service already initialized"))?;

        let api: Arc<dyn NameResolverGatewayClient> =
            Arc::new(NameResolutionGwLocalClient::new(svc));
        Ok(api)
    }
}
