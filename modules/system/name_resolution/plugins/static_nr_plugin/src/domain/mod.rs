//! Domain layer for the static name resolution plugin.

pub mod client;
pub mod entry;
pub mod lease;
pub mod service;

pub use entry::{EntryFormat, HostEntry, StaticEntry, entry_path};
pub use lease::EntryLease;
pub use service::Service;
