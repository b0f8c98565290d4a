//! Domain errors for the name resolution gateway.

use name_resolution_sdk::NameResolutionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("no name resolution plugin registered for vendor '{vendor}'")]
    PluginNotFound { vendor: String },

    #[error(transparent)]
    Plugin(#[from] NameResolutionError),
}

impl From<DomainError> for NameResolutionError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::PluginNotFound { .. } => NameResolutionError::NoPluginAvailable,
            DomainError::Plugin(e) => e,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn plugin_not_found_maps_to_no_plugin_available() {
        let err: NameResolutionError = DomainError::PluginNotFound {
            vendor: "acme".to_owned(),
        }
        .into();

        assert!(matches!(err, NameResolutionError::NoPluginAvailable));
    }

    #[test]
    fn plugin_errors_pass_through() {
        let err: NameResolutionError =
            DomainError::from(NameResolutionError::missing_property("name")).into();

        match err {
            NameResolutionError::MissingProperty { key } => assert_eq!(key, "name"),
            other => panic!("Expected MissingProperty, got: {other:?}"),
        }
    }
}
