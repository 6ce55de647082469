use serde::{Deserialize, Serialize};

fn default_lookup_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_suggest_url() -> String {
    "https://api.datamuse.com/sug".to_string()
}

fn default_max_suggestions() -> usize {
    6
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Base URL, the word is appended as the last path segment
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,
    #[serde(default = "default_suggest_url")]
    pub suggest_url: String,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            lookup_url: default_lookup_url(),
            suggest_url: default_suggest_url(),
            max_suggestions: default_max_suggestions(),
        }
    }
}
