//! Static name resolution plugin module.

use std::sync::{Arc, OnceLock};

use modkit_bootstrap::{AppConfig, module_config_or_default};
use name_resolution_sdk::NameResolverPluginClient;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::StaticNrPluginConfig;
use crate::domain::Service;

/// Static name resolution plugin module.
///
/// Reads its section from the application config, builds the service and
/// hands it to the gateway as a plugin client.
pub struct StaticNrPlugin {
    service: OnceLock<Arc<Service>>,
}

impl Default for StaticNrPlugin {
    fn default() -> Self {
        Self {
            service: OnceLock::new(),
        }
    }
}

impl StaticNrPlugin {
    /// Config section name under `modules:`.
    pub const MODULE_NAME: &'static str = "static_nr_plugin";

    /// Initializes the plugin. `shutdown` removes the registered entry file
    /// once cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the config section is invalid or the module was
    /// already initialized.
    #[tracing::instrument(skip_all, fields(vendor))]
    pub fn init(
        &self,
        app: &AppConfig,
        shutdown: CancellationToken,
    ) -> anyhow::Result<Arc<dyn NameResolverPluginClient>> {
        let cfg: StaticNrPluginConfig = module_config_or_default(app, Self::MODULE_NAME)?;
        tracing::Span::current().record("vendor", cfg.vendor.as_str());
        info!(
            vendor = %cfg.vendor,
            priority = cfg.priority,
            entry_format = ?cfg.entry_format,
            directory = ?cfg.directory,
            "Initializing static name resolution plugin"
        );

        let svc = Arc::new(Service::new(cfg, shutdown));
        self.service
            .set(svc.clone())
            .map_err(|_| anyhow::anyhow!("Service already initialized"))?;

        let client: Arc<dyn NameResolverPluginClient> = svc;
        Ok(client)
    }

    /// The service, once initialized.
    #[must_use]
    pub fn service(&self) -> Option<Arc<Service>> {
        self.service.get().cloned()
    }
}
