use std::time::Duration;

use serde::{Deserialize, Serialize};

const OXFORD_API_URL: &str = "https://od-api.oxforddictionaries.com/api/v2";

fn default_host() -> String {
    OXFORD_API_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_thesaurus() -> String {
    "/thesaurus/en".to_string()
}

fn default_words() -> String {
    "/words/en-gb".to_string()
}

fn default_entries() -> String {
    "/entries/en-gb".to_string()
}

fn default_sentences() -> String {
    "/sentences/en".to_string()
}

fn default_translations() -> String {
    "/translations".to_string()
}

/// Settings owned by a [`Client`](crate::Client). Fixed once the client is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub endpoints: Endpoints,
}

/// Path templates for each endpoint, relative to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    #[serde(default = "default_thesaurus")]
    pub thesaurus: String,
    #[serde(default = "default_words")]
    pub words: String,
    #[serde(default = "default_entries")]
    pub entries: String,
    #[serde(default = "default_sentences")]
    pub sentences: String,
    #[serde(default = "default_translations")]
    pub translations: String,
}

impl ClientConfig {
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Rounds down to whole milliseconds, never below one.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis())
            .unwrap_or(u64::MAX)
            .max(1);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.max(1))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            timeout_ms: default_timeout_ms(),
            endpoints: Endpoints::default(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            thesaurus: default_thesaurus(),
            words: default_words(),
            entries: default_entries(),
            sentences: default_sentences(),
            translations: default_translations(),
        }
    }
}
