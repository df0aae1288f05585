use std::sync::OnceLock;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Transport shared by every request built from a client handle.
///
/// Kept apart from `ClientHandle` so building a handle stays a local,
/// infallible step; connection pools and TLS setup are only created once a
/// request is actually built, and all handles reuse them.
pub fn shared_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to build HTTP client")
    })
}
