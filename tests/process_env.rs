//! Exercises the process-wide accessor against the real environment. Kept in
//! a single test so nothing else in this binary touches the variables.

use service_client::{ConfigurationError, get_client};

fn set(name: &str, value: &str) {
    // SAFETY: this test binary runs a single test, so no other thread reads
    // the environment concurrently.
    unsafe { std::env::set_var(name, value) }
}

fn unset(name: &str) {
    // SAFETY: see `set`.
    unsafe { std::env::remove_var(name) }
}

#[test]
fn global_client_is_built_once_from_the_environment() {
    unset("SERVICE_URL");
    set("SERVICE_API_KEY", "key123");

    let err = get_client().unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::Missing {
            missing: "SERVICE_URL".to_string()
        }
    );

    set("SERVICE_URL", "");
    assert!(get_client().is_err());

    set("SERVICE_URL", "https://example.test");
    let first = get_client().unwrap();
    assert_eq!(first.base_url().as_str(), "https://example.test/");
    assert_eq!(first.api_key(), "key123");

    set("SERVICE_URL", "https://changed.test");
    set("SERVICE_API_KEY", "changed");
    let second = get_client().unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.api_key(), "key123");

    unset("SERVICE_URL");
    unset("SERVICE_API_KEY");
    assert!(std::ptr::eq(first, get_client().unwrap()));
}
