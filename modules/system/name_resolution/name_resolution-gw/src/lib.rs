//! Name Resolution Gateway Module
//!
//! This module collects name resolution plugins registered by the host
//! and routes API calls to the one selected by vendor configuration.
//!
//! The gateway provides the `NameResolverGatewayClient` trait for
//! consumption by other modules.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

pub use module::NameResolutionGateway;
