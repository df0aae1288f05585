use std::fmt;

use reqwest::Url;
use reqwest::header::HeaderValue;

use crate::error::ConfigurationError;

pub const URL_VAR: &str = "SERVICE_URL";
pub const API_KEY_VAR: &str = "SERVICE_API_KEY";

/// Validated connection settings for the remote service.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub url: Url,
    pub api_key: String,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(env_var)
    }

    /// Read both settings through `lookup`. Values are trimmed; a value that
    /// is empty after trimming counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let url = read(URL_VAR);
        let api_key = read(API_KEY_VAR);

        let (url, api_key) = match (url, api_key) {
            (Some(url), Some(api_key)) => (url, api_key),
            (url, api_key) => {
                let mut missing = Vec::new();
                if url.is_none() {
                    missing.push(URL_VAR);
                }
                if api_key.is_none() {
                    missing.push(API_KEY_VAR);
                }
                return Err(ConfigurationError::missing(&missing));
            }
        };

        Ok(Self {
            url: parse_url(&url)?,
            api_key: check_api_key(api_key)?,
        })
    }
}

// Never print the key itself.
impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("url", &self.url.as_str())
            .field("api_key", &redact(&self.api_key))
            .finish()
    }
}

pub(crate) fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn parse_url(raw: &str) -> Result<Url, ConfigurationError> {
    let invalid = |reason: String| ConfigurationError::InvalidUrl {
        value: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query/fragment not allowed".to_string()));
    }

    // Keep the base path when joining relative endpoints onto it.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn check_api_key(key: String) -> Result<String, ConfigurationError> {
    HeaderValue::from_str(&format!("Bearer {}", key))
        .map_err(|_| ConfigurationError::InvalidApiKey)?;
    Ok(key)
}

/// At most the first four characters, followed by an ellipsis.
pub fn redact(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "****".to_string();
    }
    let visible: String = secret.chars().take(4).collect();
    format!("{}…", visible)
}
