use std::iter;
use std::sync::Arc;

use lexa_config::translator::TranslatorConfig;
use lexa_core::ProviderClient;
use lexa_types::Language;

use crate::providers::{LibreTranslate, MyMemory};
use crate::{Attempt, Rung, TranslateError, Translation, Translator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source: Language,
    pub target: Language,
    pub text: String,
}

/// Ordered fallback ladder: every primary in turn, then the fallback once.
///
/// Stateless between calls. Providers are tried strictly one after another
/// and the first usable answer wins.
pub struct TranslationResolver {
    primaries: Vec<Arc<dyn Translator>>,
    fallback: Arc<dyn Translator>,
}

impl TranslationResolver {
    pub fn new(primaries: Vec<Arc<dyn Translator>>, fallback: Arc<dyn Translator>) -> Self {
        Self {
            primaries,
            fallback,
        }
    }

    pub fn from_config(client: &ProviderClient, config: &TranslatorConfig) -> Self {
        let primaries = config
            .primary_urls
            .iter()
            .map(|url| {
                Arc::new(LibreTranslate::new(client.clone(), url.clone())) as Arc<dyn Translator>
            })
            .collect();
        let fallback = Arc::new(MyMemory::new(client.clone(), config.fallback_url.clone()));

        Self::new(primaries, fallback)
    }

    fn ladder(&self) -> impl Iterator<Item = (Rung, &Arc<dyn Translator>)> {
        self.primaries
            .iter()
            .enumerate()
            .map(|(i, t)| (Rung::Primary(i), t))
            .chain(iter::once((Rung::Fallback, &self.fallback)))
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<Translation, TranslateError> {
        if request.source == request.target {
            return Ok(Translation {
                text: request.text.clone(),
                from: request.source,
                to: request.target,
                provider: "identity".to_string(),
                confidence: None,
            });
        }

        let text = request.text.trim();
        if text.is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let mut attempts = Vec::new();
        for (rung, translator) in self.ladder() {
            let provider = translator.metadata().name;
            tracing::debug!("Trying {} ({:?})", provider, rung);

            match translator.translate(text, request.source, request.target).await {
                Ok(translation) => {
                    tracing::info!(
                        "Translated {} -> {} via {} after {} failed attempts",
                        request.source,
                        request.target,
                        provider,
                        attempts.len()
                    );
                    return Ok(translation);
                }
                Err(error) => {
                    tracing::warn!("Translation via {} failed: {}", provider, error);
                    attempts.push(Attempt {
                        rung,
                        provider,
                        error,
                    });
                }
            }
        }

        Err(TranslateError::AllProvidersExhausted { attempts })
    }
}
