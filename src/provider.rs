//! Process-wide, lazily constructed client handle.
//!
//! The slot is a fallible once-cell: concurrent first callers run a single
//! initializer and all observe its result, and a failed initialization leaves
//! the slot empty so a later call can retry.

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::client::ClientHandle;
use crate::config::{ServiceConfig, env_var};
use crate::error::ConfigurationError;

type EnvLookup = fn(&str) -> Option<String>;

static PROVIDER: ClientProvider<EnvLookup> = ClientProvider::new(env_var as EnvLookup);

/// The shared client handle for this process.
///
/// Built from `SERVICE_URL` and `SERVICE_API_KEY` on the first successful
/// call; every later call returns the same instance without reading the
/// environment again.
pub fn get_client() -> Result<&'static ClientHandle, ConfigurationError> {
    PROVIDER.get()
}

pub struct ClientProvider<F> {
    slot: OnceCell<ClientHandle>,
    lookup: F,
}

impl<F> ClientProvider<F> {
    pub const fn new(lookup: F) -> Self {
        Self {
            slot: OnceCell::new(),
            lookup,
        }
    }

    /// The handle, if one has been constructed.
    pub fn peek(&self) -> Option<&ClientHandle> {
        self.slot.get()
    }
}

impl<F> ClientProvider<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn get(&self) -> Result<&ClientHandle, ConfigurationError> {
        self.slot.get_or_try_init(|| {
            let config = ServiceConfig::from_lookup(&self.lookup).inspect_err(|e| {
                warn!("client configuration rejected: {}", e);
            })?;
            debug!(url = %config.url, "constructing service client");
            Ok(ClientHandle::new(config))
        })
    }
}
