use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_question_count() -> usize {
    5
}

fn default_advance_delay_ms() -> u64 {
    1500
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct QuizConfig {
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    /// How long the answer colouring stays up before the next question
    #[serde(default = "default_advance_delay_ms")]
    pub advance_delay_ms: u64,
    /// Custom word bank, the embedded one is used when unset
    #[serde(default)]
    pub word_bank_path: Option<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: default_question_count(),
            advance_delay_ms: default_advance_delay_ms(),
            word_bank_path: None,
        }
    }
}

impl QuizConfig {
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }
}
