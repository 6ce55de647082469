use std::env;

use lexa_types::Language;
use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::favorites::FavoritesConfig;
use self::network::NetworkConfig;
use self::quiz::QuizConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod favorites;
pub mod network;
pub mod quiz;
pub mod translator;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub dictionary: DictionaryConfig,
    pub translator: TranslatorConfig,
    pub quiz: QuizConfig,
    pub favorites: FavoritesConfig,
}

impl Config {
    pub fn new() -> Self {
        let mut translator = TranslatorConfig::default();
        if let Some(lang) = env::var("LEXA_SOURCE_LANG")
            .ok()
            .and_then(|v| Language::from_code(&v))
        {
            translator.source_lang = lang;
        }
        if let Some(lang) = env::var("LEXA_TARGET_LANG")
            .ok()
            .and_then(|v| Language::from_code(&v))
        {
            translator.target_lang = lang;
        }

        let quiz = QuizConfig {
            word_bank_path: env::var("LEXA_WORD_BANK").ok(),
            ..QuizConfig::default()
        };

        Config {
            network: NetworkConfig::new(),
            dictionary: DictionaryConfig::default(),
            translator,
            quiz,
            favorites: FavoritesConfig::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.dictionary.max_suggestions, 6);
        assert_eq!(config.translator.primary_urls.len(), 3);
        assert_eq!(config.translator.source_lang, Language::En);
        assert_eq!(config.translator.target_lang, Language::Es);
        assert_eq!(config.quiz.question_count, 5);
        assert_eq!(config.quiz.advance_delay_ms, 1500);
        assert_eq!(config.network.attempt_timeout_ms, 8000);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"translator": {"target_lang": "fr"}, "quiz": {"question_count": 3}}"#)
                .unwrap();
        assert_eq!(config.translator.target_lang, Language::Fr);
        assert_eq!(config.translator.source_lang, Language::En);
        assert_eq!(config.quiz.question_count, 3);
        assert_eq!(config.quiz.advance_delay_ms, 1500);
    }
}
