// https://developer.oxforddictionaries.com/documentation - v2 endpoints, app_id/app_key headers

use reqwest::{blocking::Client, header::ACCEPT, StatusCode};

use crate::{config::Endpoints, OxfordError, OxfordResponse};

const STRICT_MATCH_PARAMS: &str = "?strictMatch=false";
const WORDS_PARAMS: &str = "";

/// One lookup against the service together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Thesaurus(&'a str),
    /// Accepts phrases; spaces become underscores in the query value.
    WordInfo(&'a str),
    Entry(&'a str),
    Sentences(&'a str),
    Translation {
        word: &'a str,
        source_lang: &'a str,
        target_lang: &'a str,
    },
}

impl Lookup<'_> {
    /// Path and query string of the request, relative to the host.
    pub fn path(&self, endpoints: &Endpoints) -> String {
        match self {
            Lookup::Thesaurus(word) => {
                format!("{}/{word}{STRICT_MATCH_PARAMS}", endpoints.thesaurus)
            }
            Lookup::WordInfo(word) => format!(
                "{}?q={}{WORDS_PARAMS}",
                endpoints.words,
                word.replace(' ', "_")
            ),
            Lookup::Entry(word) => format!("{}/{word}{STRICT_MATCH_PARAMS}", endpoints.entries),
            Lookup::Sentences(word) => {
                format!("{}/{word}{STRICT_MATCH_PARAMS}", endpoints.sentences)
            }
            Lookup::Translation {
                word,
                source_lang,
                target_lang,
            } => format!(
                "{}/{source_lang}/{target_lang}/{word}{STRICT_MATCH_PARAMS}",
                endpoints.translations
            ),
        }
    }
}

pub(crate) fn fetch(
    client: &Client,
    url: &str,
    app_id: &str,
    app_key: &str,
) -> Result<OxfordResponse, OxfordError> {
    tracing::debug!(url, "sending dictionary request");
    let res = client
        .get(url)
        .header("app_id", app_id)
        .header("app_key", app_key)
        .header(ACCEPT, "application/json")
        .send()
        .map_err(OxfordError::Fetch)?;

    let status = res.status();
    tracing::debug!(url, %status, "received dictionary response");
    if status != StatusCode::OK {
        tracing::warn!(url, %status, "dictionary request failed");
        return Err(OxfordError::Api { status });
    }
    res.json::<OxfordResponse>()
        .map_err(OxfordError::Deserialize)
}
