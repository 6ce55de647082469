pub mod bank;
pub mod generator;
pub mod session;

pub use bank::{WordBank, WordBankEntry};
pub use generator::QuizGenerator;
pub use session::{AnswerVerdict, QuizSession};

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Failed to read word bank: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid word bank: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("'{0}' has neither synonyms nor antonyms")]
    InsufficientData(String),

    #[error("Word bank has no usable entries")]
    EmptyBank,
}
