use thiserror::Error;

use crate::config::{API_KEY_VAR, URL_VAR};

/// Raised when the service configuration cannot produce a client handle.
///
/// This is the only error the provider ever returns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error(
        "{} and {} must both be set to non-empty values (missing: {missing})",
        URL_VAR,
        API_KEY_VAR
    )]
    Missing { missing: String },

    #[error("{} is not a valid http(s) URL: {value} ({reason})", URL_VAR)]
    InvalidUrl { value: String, reason: String },

    #[error("{} contains characters that cannot be sent in an HTTP header", API_KEY_VAR)]
    InvalidApiKey,
}

impl ConfigurationError {
    pub(crate) fn missing(names: &[&str]) -> Self {
        ConfigurationError::Missing {
            missing: names.join(", "),
        }
    }
}
