use std::fmt;

use anyhow::{Context, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Url};

use crate::config::{ServiceConfig, redact};
use crate::http::shared_client;

/// Opaque descriptor of an authenticated session with the remote service.
///
/// Building one is a local operation: nothing touches the network, and the
/// shared transport is only created once a request is built.
pub struct ClientHandle {
    base_url: Url,
    api_key: String,
}

impl ClientHandle {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            base_url: config.url,
            api_key: config.api_key,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn redacted_key(&self) -> String {
        redact(&self.api_key)
    }

    /// Resolve `path` below the base URL. A leading `/` does not escape the
    /// base path.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let relative = path.trim_start_matches('/');
        self.base_url
            .join(relative)
            .with_context(|| format!("invalid endpoint path: '{}'", path))
    }

    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.endpoint(path)?;
        Ok(shared_client()
            .request(method, url)
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key)))
    }
}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHandle")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.redacted_key())
            .finish()
    }
}
