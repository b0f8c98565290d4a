//! Domain service for the static name resolution plugin.

use std::path::PathBuf;
use std::sync::{Arc, Weak};

use name_resolution_sdk::{
    Metadata, NameResolutionError, PluginDescriptor, ResolveRequest, validate_app_id,
};
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::entry::{EntryFormat, HostEntry, StaticEntry, entry_path, read_entry, write_entry};
use super::lease::EntryLease;
use crate::config::StaticNrPluginConfig;

/// Plugin instance id reported to the gateway.
pub const PLUGIN_ID: &str = "hyperspot.builtin.static_name_resolver.plugin.v1";

#[derive(Debug, Default)]
struct State {
    /// Directory chosen by the last `init`; starts as the configured one.
    directory: Option<PathBuf>,
    /// Entry file owned by this instance.
    lease: Option<EntryLease>,
}

/// Static name resolution service.
///
/// Owns at most one entry file at a time. The file is deleted when the
/// shutdown token is cancelled, on [`Service::release`], or when the service
/// is dropped.
pub struct Service {
    cfg: StaticNrPluginConfig,
    shutdown: CancellationToken,
    state: Arc<Mutex<State>>,
}

impl Service {
    /// Creates a new service. `shutdown` is the host's shutdown token.
    #[must_use]
    pub fn new(cfg: StaticNrPluginConfig, shutdown: CancellationToken) -> Self {
        let state = State {
            directory: cfg.directory.clone(),
            lease: None,
        };
        Self {
            cfg,
            shutdown,
            state: Arc::new(Mutex::new(state)),
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor {
            id: PLUGIN_ID.to_owned(),
            vendor: self.cfg.vendor.clone(),
            priority: self.cfg.priority,
        }
    }

    #[must_use]
    pub fn entry_format(&self) -> EntryFormat {
        self.cfg.entry_format
    }

    /// Directory entry files are currently read from and written to.
    #[must_use]
    pub fn directory(&self) -> Option<PathBuf> {
        self.state.lock().directory.clone()
    }

    /// Path of the entry file this instance owns, if any.
    #[must_use]
    pub fn registered_path(&self) -> Option<PathBuf> {
        self.state
            .lock()
            .lease
            .as_ref()
            .map(|lease| lease.path().to_path_buf())
    }

    /// Writes this instance's entry and takes ownership of the file.
    ///
    /// The port is validated before anything touches the disk.
    ///
    /// # Errors
    ///
    /// - `InvalidPort` for a non-numeric or out-of-range port
    /// - `MissingProperty` / `InvalidId` for unusable metadata
    /// - `Io` if the file cannot be written
    /// - `Internal` if shutdown has already begun
    #[tracing::instrument(skip_all, fields(app_id = ?metadata.get(Metadata::INSTANCE_NAME)))]
    pub(super) async fn register(&self, metadata: &Metadata) -> Result<(), NameResolutionError> {
        let port = metadata.instance_port()?;
        let id = metadata.instance_name()?;
        validate_app_id(id)?;
        let address = metadata.instance_address()?;

        if self.shutdown.is_cancelled() {
            return Err(NameResolutionError::Internal(
                "shutdown in progress, refusing to register".to_owned(),
            ));
        }

        let directory = metadata
            .configuration_dir()
            .map(PathBuf::from)
            .or_else(|| self.cfg.directory.clone());
        let path = entry_path(directory.as_deref(), id);

        match self.cfg.entry_format {
            EntryFormat::HostPort => {
                let entry = StaticEntry {
                    host: address.to_owned(),
                    port,
                };
                write_entry(&path, &entry).await?;
            }
            EntryFormat::HostOnly => {
                let entry = HostEntry {
                    host: address.to_owned(),
                };
                write_entry(&path, &entry).await?;
            }
        }
        info!(app_id = id, path = %path.display(), "Registered instance entry");

        let lease = EntryLease::new(path.clone());
        let released = lease.released();
        let previous = {
            let mut state = self.state.lock();
            state.directory = directory;
            state.lease.replace(lease)
        };
        // Re-registering the same id rewrote the file in place; keep it.
        if let Some(previous) = previous {
            if previous.path() == path {
                previous.disarm();
            } else {
                previous.release();
            }
        }

        self.watch_shutdown(released);
        Ok(())
    }

    /// Reads the entry for the requested app id and formats its address.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if the id cannot name an entry file
    /// - `NotFound` / `Io` / `Decode` from reading the entry
    #[tracing::instrument(skip_all, fields(app_id = %request.id, format = ?self.cfg.entry_format))]
    pub(super) async fn lookup(
        &self,
        request: &ResolveRequest,
    ) -> Result<String, NameResolutionError> {
        validate_app_id(&request.id)?;
        let path = entry_path(self.directory().as_deref(), &request.id);

        let address = match self.cfg.entry_format {
            EntryFormat::HostPort => read_entry::<StaticEntry>(&request.id, &path)
                .await?
                .address(),
            EntryFormat::HostOnly => read_entry::<HostEntry>(&request.id, &path)
                .await?
                .address(request.port),
        };

        info!(app_id = %request.id, address = %address, "Resolved address for app id");
        Ok(address)
    }

    /// Deletes the owned entry file now. Returns `false` if nothing was owned.
    #[must_use]
    pub fn release(&self) -> bool {
        take_lease(&self.state).map(EntryLease::release).is_some()
    }

    /// Releases the lease when the shutdown token fires, unless the lease
    /// goes away first.
    fn watch_shutdown(&self, released: CancellationToken) {
        let state: Weak<Mutex<State>> = Arc::downgrade(&self.state);
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            tokio::select! {
                () = shutdown.cancelled() => {
                    let lease = state.upgrade().and_then(|state| take_lease(&state));
                    if let Some(lease) = lease {
                        info!(path = %lease.path().display(), "Shutdown: removing entry file");
                        lease.release();
                    }
                }
                () = released.cancelled() => {
                    debug!("Entry lease released before shutdown");
                }
            }
        });
    }
}

fn take_lease(state: &Mutex<State>) -> Option<EntryLease> {
    state.lock().lease.take()
}
