//! Domain layer for the name resolution gateway.

pub mod error;
pub mod local_client;
pub mod service;

pub use error::DomainError;
pub use local_client::NameResolutionGwLocalClient;
pub use service::Service;
