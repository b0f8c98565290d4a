//! Static Name Resolution Plugin
//!
//! Each instance registers itself by writing a JSON entry file named
//! `<app-id>.json`; peers resolve it by reading that file back. The entry is
//! removed again when the host shuts down.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   static_nr_plugin:
//!     config:
//!       vendor: "hyperspot"
//!       priority: 100
//!       directory: "/var/run/apps"
//!       entry_format: host-port   # or host-only
//! ```
//!
//! The `configuration` metadata property passed to `init` overrides
//! `directory`.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

pub use module::StaticNrPlugin;
