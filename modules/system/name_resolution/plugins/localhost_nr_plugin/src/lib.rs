//! Localhost Name Resolution Plugin
//!
//! Zero-configuration plugin for single-host deployments where every app
//! listens on the loopback interface.
//!
//! ## Behavior
//!
//! - `init`: Accepts any metadata and stores nothing
//! - `resolve_id`: Returns `localhost:<port>` using the port from the request
//!
//! ## Configuration
//!
//! No configuration required. The plugin registers itself with:
//! - Vendor: `hyperspot`
//! - Priority: `1000` (lower than the static plugin, so static wins when both are enabled)

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod domain;

pub use domain::service::Service;
