//! Public API trait for the name resolution gateway.
//!
//! This trait defines the interface that consumers use to interact with
//! the name resolver. The gateway implements this trait and delegates
//! to the selected plugin.

use async_trait::async_trait;

use crate::error::NameResolutionError;
use crate::models::{Metadata, ResolveRequest};

/// Public API trait for the name resolution gateway.
///
/// ```ignore
/// resolver.init(&metadata).await?;
/// let address = resolver.resolve_id(&ResolveRequest::new("billing", 3500)).await?;
/// ```
#[async_trait]
pub trait NameResolverGatewayClient: Send + Sync {
    /// Register this instance with the selected plugin.
    ///
    /// # Errors
    ///
    /// Propagates the plugin error unmodified. No retry is attempted.
    async fn init(&self, metadata: &Metadata) -> Result<(), NameResolutionError>;

    /// Resolve an app id into a `host:port` address.
    ///
    /// # Errors
    ///
    /// Propagates the plugin error unmodified. A failed lookup yields no address.
    async fn resolve_id(&self, request: &ResolveRequest) -> Result<String, NameResolutionError>;
}
