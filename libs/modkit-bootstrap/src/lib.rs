//! Host bootstrap for processes embedding the name resolution module.
//!
//! - [`config`]: YAML configuration and per-module config sections
//! - [`logging`]: `tracing` subscriber setup
//! - [`signals`]: OS signals turned into a shutdown `CancellationToken`

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod logging;
pub mod signals;

pub use config::*;
pub use logging::*;
pub use signals::*;
