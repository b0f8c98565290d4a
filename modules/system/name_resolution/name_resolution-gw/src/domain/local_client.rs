//! Local (in-process) client for the name resolution gateway.

use std::sync::Arc;

use async_trait::async_trait;
use name_resolution_sdk::{
    Metadata, NameResolutionError, NameResolverGatewayClient, ResolveRequest,
};

use super::{DomainError, Service};

/// Local client wrapping the gateway service.
///
/// Handed out by the gateway module from `init()`.
pub struct NameResolutionGwLocalClient {
    svc: Arc<Service>,
}

impl NameResolutionGwLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

#[async_trait]
impl NameResolverGatewayClient for NameResolutionGwLocalClient {
    async fn init(&self, metadata: &Metadata) -> Result<(), NameResolutionError> {
        self.svc
            .init(metadata)
            .await
            .map_err(|e: DomainError| {
                tracing::error!(operation = "init", error = ?e, "name_resolution gateway call failed");
                e.into()
            })
    }

    async fn resolve_id(&self, request: &ResolveRequest) -> Result<String, NameResolutionError> {
        self.svc
            .resolve_id(request)
            .await
            .map_err(|e: DomainError| {
                tracing::error!(operation = "resolve_id", error = ?e, "name_resolution gateway call failed");
                e.into()
            })
    }
}
