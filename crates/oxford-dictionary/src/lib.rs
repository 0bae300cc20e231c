use std::fmt;

use oxford_api::fetch;

mod config;
mod dictionary;
mod oxford_api;

pub use config::{ClientConfig, Endpoints};
pub use dictionary::{
    Antonym, Construction, DomainClass, Entry, Example, GrammaticalFeature, HeadwordResult,
    Inflection, LexicalCategory, LexicalEntry, Note, OxfordResponse, Phrase, Pronunciation,
    Region, Register, SemanticClass, Sense, Sentence, Synonym, Translation,
};
pub use oxford_api::Lookup;
pub use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum OxfordError {
    #[error("credentials are empty")]
    EmptyCredentials,
    #[error("failed to build http client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("request failed: {0}")]
    Fetch(reqwest::Error),
    #[error("API Error: {status}")]
    Api { status: StatusCode },
    #[error("failed to decode response: {0}")]
    Deserialize(reqwest::Error),
}

impl OxfordError {
    /// Status of a non-200 response, if that is what failed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            OxfordError::Api { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, OxfordError::Fetch(error) if error.is_timeout())
    }
}

/// Blocking client for the Oxford Dictionaries API.
///
/// Clones share the same connection pool and credentials.
#[derive(Clone)]
pub struct Client {
    client: reqwest::blocking::Client,
    config: ClientConfig,
    app_id: String,
    app_key: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .field("app_id", &self.app_id)
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn new(app_id: &str, app_key: &str) -> Result<Self, OxfordError> {
        Self::with_config(app_id, app_key, ClientConfig::default())
    }

    pub fn with_config(
        app_id: &str,
        app_key: &str,
        config: ClientConfig,
    ) -> Result<Self, OxfordError> {
        if app_id.is_empty() || app_key.is_empty() {
            return Err(OxfordError::EmptyCredentials);
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(OxfordError::ClientBuild)?;
        Ok(Self {
            client,
            config,
            app_id: app_id.to_owned(),
            app_key: app_key.to_owned(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL a lookup is sent to.
    pub fn url(&self, lookup: &Lookup) -> String {
        format!("{}{}", self.config.host, lookup.path(&self.config.endpoints))
    }

    pub fn thesaurus(&self, word: &str) -> Result<OxfordResponse, OxfordError> {
        self.lookup(Lookup::Thesaurus(word))
    }

    /// General information about a word or phrase.
    pub fn word_info(&self, word: &str) -> Result<OxfordResponse, OxfordError> {
        self.lookup(Lookup::WordInfo(word))
    }

    pub fn entry(&self, word: &str) -> Result<OxfordResponse, OxfordError> {
        self.lookup(Lookup::Entry(word))
    }

    pub fn sentences(&self, word: &str) -> Result<OxfordResponse, OxfordError> {
        self.lookup(Lookup::Sentences(word))
    }

    pub fn translation(
        &self,
        word: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<OxfordResponse, OxfordError> {
        self.lookup(Lookup::Translation {
            word,
            source_lang,
            target_lang,
        })
    }

    pub fn lookup(&self, lookup: Lookup) -> Result<OxfordResponse, OxfordError> {
        fetch(&self.client, &self.url(&lookup), &self.app_id, &self.app_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credentials_are_rejected() {
        assert!(matches!(Client::new("", "key"), Err(OxfordError::EmptyCredentials)));
        assert!(matches!(Client::new("id", ""), Err(OxfordError::EmptyCredentials)));
        assert!(matches!(Client::new("", ""), Err(OxfordError::EmptyCredentials)));
    }

    #[test]
    fn client_keeps_its_config() {
        let client = Client::new("id", "key").unwrap();
        assert_eq!(client.config(), &ClientConfig::default());
        assert_eq!(
            client.url(&Lookup::Translation {
                word: "cat",
                source_lang: "en",
                target_lang: "fr",
            }),
            "https://od-api.oxforddictionaries.com/api/v2/translations/en/fr/cat?strictMatch=false"
        );
    }

    #[test]
    fn url_uses_configured_host() {
        let config = ClientConfig::default().with_host("http://127.0.0.1:9000");
        let client = Client::with_config("id", "key", config).unwrap();
        assert_eq!(
            client.url(&Lookup::WordInfo("hello world")),
            "http://127.0.0.1:9000/words/en-gb?q=hello_world"
        );
    }

    #[test]
    fn api_error_shows_status_line() {
        let error = OxfordError::Api {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(error.to_string(), "API Error: 404 Not Found");
        assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
        assert!(!error.is_timeout());
        assert_eq!(OxfordError::EmptyCredentials.status(), None);
    }

    #[test]
    fn debug_output_hides_key() {
        let client = Client::new("id", "secret-key").unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("\"id\""));
        assert!(!debug.contains("secret-key"));
    }
}
