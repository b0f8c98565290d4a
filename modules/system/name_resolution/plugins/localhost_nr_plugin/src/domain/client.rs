//! Client implementation for the localhost name resolution plugin.
//!
//! Implements `NameResolverPluginClient` with loopback semantics.

use async_trait::async_trait;
use name_resolution_sdk::{
    Metadata, NameResolutionError, NameResolverPluginClient, PluginDescriptor, ResolveRequest,
};
use tracing::{debug, info};

use super::service::Service;

const LOCALHOST: &str = "localhost";

#[async_trait]
impl NameResolverPluginClient for Service {
    fn descriptor(&self) -> PluginDescriptor {
        Service::descriptor()
    }

    async fn init(&self, metadata: &Metadata) -> Result<(), NameResolutionError> {
        // Nothing to publish; peers are always on this host
        debug!(
            app_id = ?metadata.get(Metadata::INSTANCE_NAME),
            "Localhost resolver ignores init metadata"
        );
        Ok(())
    }

    async fn resolve_id(&self, request: &ResolveRequest) -> Result<String, NameResolutionError> {
        // Any id resolves, including ones the static plugin rejects
        let address = format!("{LOCALHOST}:{}", request.port);
        info!(app_id = %request.id, address = %address, "Resolved address for app id");
        Ok(address)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::domain::service::{PLUGIN_ID, PRIORITY};

    #[tokio::test]
    async fn resolve_returns_localhost_with_request_port() {
        let service = Service;

        let result = service
            .resolve_id(&ResolveRequest::new("anything", 3500))
            .await;

        assert_eq!(result.unwrap(), "localhost:3500");
    }

    #[tokio::test]
    async fn init_accepts_empty_metadata() {
        let service = Service;

        let result = service.init(&Metadata::new()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn resolve_ignores_the_id() {
        let service = Service;

        for id in ["", "a/b", "..", "."] {
            let result = service.resolve_id(&ResolveRequest::new(id, 3500)).await;
            assert_eq!(result.unwrap(), "localhost:3500", "id {id:?}");
        }
    }

    #[tokio::test]
    async fn resolve_after_init_is_unchanged() {
        let service = Service;
        let metadata = Metadata::new()
            .with_property(Metadata::INSTANCE_NAME, "orders")
            .with_property(Metadata::INSTANCE_ADDRESS, "10.0.0.1")
            .with_property(Metadata::INSTANCE_PORT, "50001");

        service.init(&metadata).await.unwrap();
        let address = service
            .resolve_id(&ResolveRequest::new("orders", 3500))
            .await
            .unwrap();

        assert_eq!(address, "localhost:3500");
    }

    #[test]
    fn descriptor_is_fallback_priority() {
        let d = NameResolverPluginClient::descriptor(&Service);
        assert_eq!(d.id, PLUGIN_ID);
        assert_eq!(d.vendor, "hyperspot");
        assert_eq!(d.priority, PRIORITY);
    }
}
