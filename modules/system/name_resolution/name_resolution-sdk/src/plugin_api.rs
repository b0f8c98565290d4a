//! Plugin API trait for name resolver implementations.
//!
//! Plugins implement this trait to register instances and resolve app ids.
//! The gateway selects one plugin by vendor and priority and delegates API
//! calls to it.

use async_trait::async_trait;

use crate::error::NameResolutionError;
use crate::models::{Metadata, PluginDescriptor, ResolveRequest};

/// Plugin API trait for name resolver implementations.
#[async_trait]
pub trait NameResolverPluginClient: Send + Sync {
    /// Describes this plugin instance for gateway selection.
    fn descriptor(&self) -> PluginDescriptor;

    /// Register this instance so that other instances can resolve it.
    ///
    /// Returns only after the registration is durable.
    ///
    /// # Errors
    ///
    /// - `InvalidPort` if the port property is not a base-10 port number
    /// - `MissingProperty` / `InvalidId` for unusable metadata
    /// - `Io` if the registration cannot be persisted
    async fn init(&self, metadata: &Metadata) -> Result<(), NameResolutionError>;

    /// Resolve an app id into a `host:port` address.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the app id was never registered
    /// - `Io` if the registration cannot be read
    /// - `Decode` if the registration is malformed
    async fn resolve_id(&self, request: &ResolveRequest) -> Result<String, NameResolutionError>;
}
