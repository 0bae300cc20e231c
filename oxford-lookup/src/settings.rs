use std::env;
use std::time::Duration;

use anyhow::Context;
use oxford_dictionary::ClientConfig;

pub struct Settings {
    pub app_id: String,
    pub app_key: String,
    pub client: ClientConfig,
}

impl Settings {
    /// Reads credentials and overrides from the environment, after `.env` if present.
    pub fn from_env() -> anyhow::Result<Self> {
        if let Err(error) = dotenvy::dotenv() {
            tracing::debug!("no .env file loaded: {error}");
        }

        let app_id = env::var("OXFORD_APP_ID").context("OXFORD_APP_ID is not set")?;
        let app_key = env::var("OXFORD_APP_KEY").context("OXFORD_APP_KEY is not set")?;

        let mut client = ClientConfig::default();
        if let Ok(host) = env::var("OXFORD_API_HOST") {
            client = client.with_host(host);
        }
        if let Ok(value) = env::var("OXFORD_TIMEOUT_MS") {
            client = client.with_timeout(parse_timeout(&value)?);
        }

        Ok(Self {
            app_id,
            app_key,
            client,
        })
    }
}

fn parse_timeout(value: &str) -> anyhow::Result<Duration> {
    let timeout_ms: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("OXFORD_TIMEOUT_MS is not a number of milliseconds: {value:?}"))?;
    Ok(Duration::from_millis(timeout_ms))
}
