//! Name Resolution SDK
//!
//! This crate provides the public API for the `name_resolution` module:
//!
//! - [`NameResolverGatewayClient`] - Public API trait for consumers
//! - [`NameResolverPluginClient`] - Plugin API trait for implementations
//! - [`Metadata`], [`ResolveRequest`], [`PluginDescriptor`] - Domain models
//! - [`NameResolutionError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use name_resolution_sdk::{Metadata, NameResolverGatewayClient, ResolveRequest};
//!
//! // Register this instance
//! let metadata = Metadata::new()
//!     .with_property(Metadata::INSTANCE_NAME, "orders")
//!     .with_property(Metadata::INSTANCE_ADDRESS, "10.0.0.1")
//!     .with_property(Metadata::INSTANCE_PORT, "50002");
//! resolver.init(&metadata).await?;
//!
//! // Look up a peer
//! let address = resolver.resolve_id(&ResolveRequest::new("billing", 3500)).await?;
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;
pub mod plugin_api;

// Re-export main types at crate root
pub use api::NameResolverGatewayClient;
pub use error::NameResolutionError;
pub use models::{Metadata, PluginDescriptor, ResolveRequest, validate_app_id};
pub use plugin_api::NameResolverPluginClient;
