use std::env;
use std::time::Duration;

use anyhow::Context;
use dotenv::dotenv;

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_port: String,
    pub database_url: String,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads configuration from the process environment, after loading `.env` if one exists.
    pub fn from_env() -> anyhow::Result<Config> {
        if let Err(e) = dotenv() {
            if !e.not_found() {
                return Err(e).context("failed to load .env file");
            }
        }

        let server_port = load_env("SERVER_PORT")?;
        let database_url = load_env("DATABASE_URL")?;
        let request_timeout = parse_timeout(env::var("REQUEST_TIMEOUT_MS").ok().as_deref())?;

        Ok(Config {
            server_port,
            database_url,
            request_timeout,
        })
    }
}

fn load_env(key: &str) -> anyhow::Result<String> {
    env::var(key).with_context(|| format!("failed to load environment variable {}", key))
}

fn parse_timeout(raw: Option<&str>) -> anyhow::Result<Duration> {
    let millis = match raw {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("REQUEST_TIMEOUT_MS must be a whole number, got {}", raw))?,
        None => DEFAULT_REQUEST_TIMEOUT_MS,
    };

    Ok(Duration::from_millis(millis))
}
