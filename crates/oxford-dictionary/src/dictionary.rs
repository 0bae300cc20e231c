use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Treats an explicit `null` the same as an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top level body returned by every endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OxfordResponse {
    #[serde(deserialize_with = "nullable")]
    pub metadata: Map<String, Value>,
    #[serde(deserialize_with = "nullable")]
    pub query: String,
    #[serde(deserialize_with = "nullable")]
    pub results: Vec<HeadwordResult>,
}

/// One matched headword, in the order the service ranked it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadwordResult {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub language: String,
    #[serde(deserialize_with = "nullable")]
    pub lexical_entries: Vec<LexicalEntry>,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    #[serde(deserialize_with = "nullable")]
    pub word: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LexicalEntry {
    #[serde(deserialize_with = "nullable")]
    pub entries: Vec<Entry>,
    #[serde(deserialize_with = "nullable")]
    pub language: String,
    #[serde(deserialize_with = "nullable")]
    pub lexical_category: LexicalCategory,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
    #[serde(deserialize_with = "nullable")]
    pub phrases: Vec<Phrase>,
    #[serde(deserialize_with = "nullable")]
    pub sentences: Vec<Sentence>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Entry {
    #[serde(deserialize_with = "nullable")]
    pub senses: Vec<Sense>,
    #[serde(deserialize_with = "nullable")]
    pub pronunciations: Vec<Pronunciation>,
    #[serde(deserialize_with = "nullable")]
    pub etymologies: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub inflections: Vec<Inflection>,
    #[serde(deserialize_with = "nullable")]
    pub grammatical_features: Vec<GrammaticalFeature>,
}

/// A single meaning. `subsenses` nests further meanings of the same shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sense {
    #[serde(deserialize_with = "nullable")]
    pub antonyms: Vec<Antonym>,
    #[serde(deserialize_with = "nullable")]
    pub synonyms: Vec<Synonym>,
    #[serde(deserialize_with = "nullable")]
    pub definitions: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub short_definitions: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub examples: Vec<Example>,
    #[serde(deserialize_with = "nullable")]
    pub constructions: Vec<Construction>,
    #[serde(deserialize_with = "nullable")]
    pub inflections: Vec<Inflection>,
    #[serde(deserialize_with = "nullable")]
    pub domain_classes: Vec<DomainClass>,
    #[serde(deserialize_with = "nullable")]
    pub notes: Vec<Note>,
    #[serde(deserialize_with = "nullable")]
    pub translations: Vec<Translation>,
    #[serde(deserialize_with = "nullable")]
    pub semantic_classes: Vec<SemanticClass>,
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub subsenses: Vec<Sense>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pronunciation {
    #[serde(deserialize_with = "nullable")]
    pub audio_file: String,
    #[serde(deserialize_with = "nullable")]
    pub dialects: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub phonetic_notation: String,
    #[serde(deserialize_with = "nullable")]
    pub phonetic_spelling: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Synonym {
    #[serde(deserialize_with = "nullable")]
    pub language: String,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Antonym {
    #[serde(deserialize_with = "nullable")]
    pub language: String,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Example {
    #[serde(deserialize_with = "nullable")]
    pub text: String,
    #[serde(deserialize_with = "nullable")]
    pub notes: Vec<Note>,
    #[serde(deserialize_with = "nullable")]
    pub registers: Vec<Register>,
    #[serde(deserialize_with = "nullable")]
    pub translations: Vec<Translation>,
}

/// Usage example returned by the sentences endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sentence {
    #[serde(deserialize_with = "nullable")]
    pub regions: Vec<Region>,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Inflection {
    #[serde(deserialize_with = "nullable")]
    pub inflected_form: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Construction {
    #[serde(deserialize_with = "nullable")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    #[serde(deserialize_with = "nullable")]
    pub language: String,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalCategory {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainClass {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    #[serde(deserialize_with = "nullable")]
    pub text: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticClass {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Register {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phrase {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammaticalFeature {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
}

impl OxfordResponse {
    /// Every sense in the response, subsenses included, depth first.
    pub fn senses(&self) -> impl Iterator<Item = &Sense> {
        self.results
            .iter()
            .flat_map(|result| result.lexical_entries.iter())
            .flat_map(|lexical_entry| lexical_entry.entries.iter())
            .flat_map(|entry| entry.senses.iter())
            .flat_map(Sense::flatten)
    }

    pub fn synonyms(&self) -> impl Iterator<Item = &str> {
        self.senses()
            .flat_map(|sense| sense.synonyms.iter())
            .map(|synonym| &synonym.text[..])
    }

    pub fn antonyms(&self) -> impl Iterator<Item = &str> {
        self.senses()
            .flat_map(|sense| sense.antonyms.iter())
            .map(|antonym| &antonym.text[..])
    }
}

impl Sense {
    /// This sense followed by all of its subsenses, depth first.
    pub fn flatten(&self) -> Vec<&Sense> {
        let mut senses = vec![self];
        for subsense in &self.subsenses {
            senses.extend(subsense.flatten());
        }
        senses
    }

    pub fn all_definitions(&self) -> impl Iterator<Item = &str> {
        self.flatten()
            .into_iter()
            .flat_map(|sense| sense.definitions.iter())
            .map(|definition| &definition[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THESAURUS_BODY: &str = r#"{
        "metadata": {"provider": "Oxford University Press"},
        "query": "happy",
        "results": [{
            "id": "happy",
            "language": "en",
            "type": "headword",
            "word": "happy",
            "unknownField": 42,
            "lexicalEntries": [{
                "language": "en",
                "text": "happy",
                "lexicalCategory": {"id": "adjective", "text": "Adjective"},
                "entries": [{
                    "senses": [{
                        "id": "s1",
                        "synonyms": [{"language": "en", "text": "cheerful"}],
                        "antonyms": [{"language": "en", "text": "sad"}],
                        "subsenses": [{
                            "id": "s1.1",
                            "definitions": ["pleased about a situation"],
                            "synonyms": [{"language": "en", "text": "glad"}]
                        }]
                    }]
                }]
            }]
        }]
    }"#;

    #[test]
    fn decodes_nested_subsenses() {
        let response: OxfordResponse = serde_json::from_str(THESAURUS_BODY).unwrap();
        assert_eq!(response.query, "happy");
        assert_eq!(response.metadata["provider"], "Oxford University Press");

        let result = &response.results[0];
        assert_eq!(result.kind, "headword");
        let lexical_entry = &result.lexical_entries[0];
        assert_eq!(lexical_entry.lexical_category.id, "adjective");
        let sense = &lexical_entry.entries[0].senses[0];
        assert_eq!(sense.subsenses.len(), 1);
        assert_eq!(sense.subsenses[0].id, "s1.1");
        assert!(sense.subsenses[0].subsenses.is_empty());
    }

    #[test]
    fn missing_fields_decode_to_empty_values() {
        let response: OxfordResponse = serde_json::from_str(r#"{"results": [{}]}"#).unwrap();
        assert!(response.metadata.is_empty());
        assert_eq!(response.query, "");
        let result = &response.results[0];
        assert_eq!(result.word, "");
        assert!(result.lexical_entries.is_empty());

        let sense: Sense = serde_json::from_str("{}").unwrap();
        assert_eq!(sense, Sense::default());
    }

    #[test]
    fn null_fields_decode_to_empty_values() {
        let response: OxfordResponse = serde_json::from_str(
            r#"{"metadata": null, "query": "x", "results": [{"id": "a", "lexicalEntries": null, "word": null}]}"#,
        )
        .unwrap();
        assert!(response.metadata.is_empty());
        let result = &response.results[0];
        assert_eq!(result.id, "a");
        assert_eq!(result.word, "");
        assert!(result.lexical_entries.is_empty());

        let lexical_entry: LexicalEntry = serde_json::from_str(
            r#"{"lexicalCategory": null, "entries": [{"senses": [{"subsenses": null, "definitions": null}]}]}"#,
        )
        .unwrap();
        assert_eq!(lexical_entry.lexical_category, LexicalCategory::default());
        assert_eq!(lexical_entry.entries[0].senses[0], Sense::default());
    }

    #[test]
    fn renamed_fields_use_service_names() {
        let pronunciation: Pronunciation = serde_json::from_str(
            r#"{"audioFile": "https://audio/happy.mp3", "phoneticSpelling": "ˈhapi", "dialects": ["British English"]}"#,
        )
        .unwrap();
        assert_eq!(pronunciation.audio_file, "https://audio/happy.mp3");
        assert_eq!(pronunciation.phonetic_spelling, "ˈhapi");
        assert_eq!(pronunciation.dialects, vec!["British English"]);

        let note: Note = serde_json::from_str(r#"{"text": "informal", "type": "grammaticalNote"}"#).unwrap();
        assert_eq!(note.kind, "grammaticalNote");

        let inflection: Inflection = serde_json::from_str(r#"{"inflectedForm": "happier"}"#).unwrap();
        assert_eq!(inflection.inflected_form, "happier");
    }

    #[test]
    fn serialized_response_decodes_to_same_value() {
        let response: OxfordResponse = serde_json::from_str(THESAURUS_BODY).unwrap();
        let encoded = serde_json::to_string(&response).unwrap();
        let decoded: OxfordResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn aggregates_across_subsenses() {
        let response: OxfordResponse = serde_json::from_str(THESAURUS_BODY).unwrap();
        assert_eq!(response.senses().count(), 2);
        assert_eq!(response.synonyms().collect::<Vec<_>>(), vec!["cheerful", "glad"]);
        assert_eq!(response.antonyms().collect::<Vec<_>>(), vec!["sad"]);

        let sense = response.senses().next().unwrap();
        assert_eq!(
            sense.all_definitions().collect::<Vec<_>>(),
            vec!["pleased about a situation"]
        );
    }

    #[test]
    fn wrong_field_type_is_an_error() {
        let error = serde_json::from_str::<OxfordResponse>(r#"{"results": "nope"}"#);
        assert!(error.is_err());
    }
}
