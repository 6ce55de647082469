use std::fmt;

use lexa_core::ProviderError;
use lexa_types::Language;

pub mod panel;
pub mod providers;
pub mod resolver;

pub use panel::TranslatorPanel;
pub use providers::{LibreTranslate, MyMemory};
pub use resolver::{TranslationRequest, TranslationResolver};

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    pub from: Language,
    pub to: Language,
    pub provider: String,
    pub confidence: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub endpoint: String,
}

/// Position of a provider in the fallback ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rung {
    Primary(usize),
    Fallback,
}

/// One failed step of a ladder traversal
#[derive(Debug)]
pub struct Attempt {
    pub rung: Rung,
    pub provider: String,
    pub error: TranslateError,
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?}): {}", self.provider, self.rung, self.error)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Nothing to translate")]
    EmptyInput,

    #[error("All {} translation providers failed", .attempts.len())]
    AllProvidersExhausted { attempts: Vec<Attempt> },
}
