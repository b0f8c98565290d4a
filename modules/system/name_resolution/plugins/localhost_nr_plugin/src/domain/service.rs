//! Domain service for the localhost name resolution plugin.

use name_resolution_sdk::PluginDescriptor;

/// Plugin instance id reported to the gateway.
pub const PLUGIN_ID: &str = "hyperspot.builtin.localhost_name_resolver.plugin.v1";

/// Vendor the plugin registers under.
pub const VENDOR: &str = "hyperspot";

/// Fallback priority; any configured plugin of the same vendor wins.
pub const PRIORITY: i16 = 1000;

/// Localhost name resolution service.
///
/// No state is needed - every app id maps to the loopback host.
pub struct Service;

impl Service {
    #[must_use]
    pub fn descriptor() -> PluginDescriptor {
        PluginDescriptor {
            id: PLUGIN_ID.to_owned(),
            vendor: VENDOR.to_owned(),
            priority: PRIORITY,
        }
    }
}
