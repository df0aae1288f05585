//! Lazily constructed, process-wide client handle for a hosted backend
//! service, configured from `SERVICE_URL` and `SERVICE_API_KEY`.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod provider;

pub use client::ClientHandle;
pub use config::ServiceConfig;
pub use error::ConfigurationError;
pub use provider::{ClientProvider, get_client};
