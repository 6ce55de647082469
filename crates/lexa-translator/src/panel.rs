use lexa_core::{LatestRequest, Ticket};
use lexa_types::{Language, TranslationOutcome};

use crate::resolver::TranslationRequest;
use crate::{TranslateError, Translation};

/// The only message users ever see for a failed translation
pub const GENERIC_ERROR: &str = "Unable to translate right now. Please try again.";

/// Translator panel state: languages, input text and the displayed result
pub struct TranslatorPanel {
    pub source: Language,
    pub target: Language,
    pub input: String,
    pub output: Option<String>,
    pub error: Option<String>,
    latest: LatestRequest,
}

impl TranslatorPanel {
    pub fn new(source: Language, target: Language) -> Self {
        Self {
            source,
            target,
            input: String::new(),
            output: None,
            error: None,
            latest: LatestRequest::new(),
        }
    }

    /// Change the language pair. A translation still in flight for the old
    /// pair is dropped.
    pub fn set_languages(&mut self, source: Language, target: Language) {
        self.latest.invalidate();
        self.source = source;
        self.target = target;
    }

    /// Swap languages; a displayed result becomes the new input so it can
    /// be translated back. No request is issued and a pending one is dropped.
    pub fn swap(&mut self) {
        self.latest.invalidate();
        std::mem::swap(&mut self.source, &mut self.target);
        if let Some(output) = &self.output {
            self.input = output.clone();
        }
    }

    /// Start a translation of `text`, clearing the previous result and
    /// superseding any pending one. `None` for blank input.
    pub fn submit(&mut self, text: &str) -> Option<(Ticket, TranslationRequest)> {
        self.input = text.to_string();
        self.output = None;
        self.error = None;

        if text.trim().is_empty() && self.source != self.target {
            self.latest.invalidate();
            return None;
        }

        let ticket = self.latest.begin();
        Some((
            ticket,
            TranslationRequest {
                source: self.source,
                target: self.target,
                text: self.input.clone(),
            },
        ))
    }

    /// Apply a finished translation. Returns false if a newer one was submitted since.
    pub fn apply(&mut self, generation: u64, outcome: TranslationOutcome) -> bool {
        if !self.latest.finish(generation) {
            return false;
        }

        match outcome {
            TranslationOutcome::Translated { text, .. } => self.output = Some(text),
            TranslationOutcome::Failed => self.error = Some(GENERIC_ERROR.to_string()),
        }
        true
    }
}

/// Collapse a resolver result into what the panel shows; `None` when there
/// was nothing to translate
pub fn outcome_of(result: Result<Translation, TranslateError>) -> Option<TranslationOutcome> {
    match result {
        Ok(translation) => Some(TranslationOutcome::Translated {
            text: translation.text,
            provider: translation.provider,
        }),
        Err(TranslateError::EmptyInput) => None,
        Err(_) => Some(TranslationOutcome::Failed),
    }
}
