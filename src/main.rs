mod cli;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use reqwest::Method;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use service_client::{ClientHandle, get_client};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Check { json } => cmd_check(json)?,
        Command::Ping { path } => cmd_ping(&path).await?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug, Serialize)]
struct Summary {
    base_url: String,
    api_key: String,
}

impl Summary {
    fn of(client: &ClientHandle) -> Self {
        Self {
            base_url: client.base_url().to_string(),
            api_key: client.redacted_key(),
        }
    }
}

fn cmd_check(json: bool) -> Result<()> {
    let client = get_client()?;
    let summary = Summary::of(client);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("base url: {}", summary.base_url);
        println!("api key:  {}", summary.api_key);
    }
    Ok(())
}

async fn cmd_ping(path: &str) -> Result<()> {
    let client = get_client()?;
    let url = client.endpoint(path)?;
    info!("GET {}", url);

    let resp = client
        .request(Method::GET, path)?
        .send()
        .await
        .with_context(|| format!("request to {} failed", url))?;
    let status = resp.status();
    debug!(?status, "response received");

    if !status.is_success() {
        return Err(anyhow!(
            "service returned status {}: {}",
            status,
            describe_body(resp.text().await)
        ));
    }

    println!("{} {}", status.as_u16(), status.canonical_reason().unwrap_or(""));
    Ok(())
}

fn describe_body<E: std::fmt::Display>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| format!("<body unavailable: {e}>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_body_is_reported() {
        assert_eq!(
            describe_body::<&str>(Err("connection reset")),
            "<body unavailable: connection reset>"
        );
        assert_eq!(describe_body::<&str>(Ok("denied".to_string())), "denied");
    }
    use service_client::ServiceConfig;

    #[test]
    fn summary_never_contains_the_full_key() {
        let config = ServiceConfig::from_lookup(|name: &str| match name {
            "SERVICE_URL" => Some("https://example.test/api".to_string()),
            "SERVICE_API_KEY" => Some("key123456".to_string()),
            _ => None,
        })
        .unwrap();
        let summary = Summary::of(&ClientHandle::new(config));

        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            json,
            r#"{"base_url":"https://example.test/api/","api_key":"key1…"}"#
        );
    }
}
