use lexa_types::Language;
use serde::{Deserialize, Serialize};

fn default_source_lang() -> Language {
    Language::En
}

fn default_target_lang() -> Language {
    Language::Es
}

fn default_primary_urls() -> Vec<String> {
    vec![
        "https://libretranslate.de/translate".to_string(),
        "https://libretranslate.com/translate".to_string(),
        "https://translate.argosopentech.com/translate".to_string(),
    ]
}

fn default_fallback_url() -> String {
    "https://api.mymemory.translated.net/get".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_source_lang")]
    pub source_lang: Language,
    #[serde(default = "default_target_lang")]
    pub target_lang: Language,
    /// LibreTranslate-compatible endpoints, tried in order
    #[serde(default = "default_primary_urls")]
    pub primary_urls: Vec<String>,
    /// MyMemory endpoint, tried once after every primary failed
    #[serde(default = "default_fallback_url")]
    pub fallback_url: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            primary_urls: default_primary_urls(),
            fallback_url: default_fallback_url(),
        }
    }
}
