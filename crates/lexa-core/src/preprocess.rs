use std::fmt;

use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default search-box preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC)
        let text: String = text.nfkc().collect();

        // Pasted text may carry line breaks
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// A trimmed, non-empty search term
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn parse(raw: &str) -> Option<Self> {
        let processed = DefaultPreprocessor.process(raw);
        if processed.is_empty() {
            None
        } else {
            Some(Self(processed))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
