//! Client implementation for the static name resolution plugin.
//!
//! Implements `NameResolverPluginClient` using the domain service.

use async_trait::async_trait;
use name_resolution_sdk::{
    Metadata, NameResolutionError, NameResolverPluginClient, PluginDescriptor, ResolveRequest,
};

use super::service::Service;

#[async_trait]
impl NameResolverPluginClient for Service {
    fn descriptor(&self) -> PluginDescriptor {
        Service::descriptor(self)
    }

    async fn init(&self, metadata: &Metadata) -> Result<(), NameResolutionError> {
        self.register(metadata).await
    }

    async fn resolve_id(&self, request: &ResolveRequest) -> Result<String, NameResolutionError> {
        self.lookup(request).await
    }
}
