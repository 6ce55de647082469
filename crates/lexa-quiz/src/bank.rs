use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::QuizError;

const EMBEDDED: &str = include_str!("../data/word_bank.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBankEntry {
    pub word: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

impl WordBankEntry {
    pub fn is_usable(&self) -> bool {
        !self.synonyms.is_empty() || !self.antonyms.is_empty()
    }
}

/// Read-only collection of quiz source words
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    entries: Vec<WordBankEntry>,
}

impl WordBank {
    pub fn new(entries: Vec<WordBankEntry>) -> Self {
        Self { entries }
    }

    /// The bank shipped with the binary
    pub fn embedded() -> Result<Self, QuizError> {
        Self::parse(EMBEDDED)
    }

    /// Load a custom bank. A file without a single usable entry is rejected.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, QuizError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let bank = Self::parse(&raw)?;
        if !bank.entries.iter().any(WordBankEntry::is_usable) {
            return Err(QuizError::EmptyBank);
        }
        tracing::info!(
            "Loaded {} word bank entries from {}",
            bank.len(),
            path.as_ref().display()
        );
        Ok(bank)
    }

    pub fn parse(raw: &str) -> Result<Self, QuizError> {
        let entries: Vec<WordBankEntry> = serde_json::from_str(raw)?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[WordBankEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
