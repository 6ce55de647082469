use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum AppEvent {
    // Frontend -> app
    InputChanged(String),
    Search(String),
    SelectFavorite(String),
    AddFavorite(String),
    RemoveFavorite(String),
    Translate(String),
    SetLanguages {
        source: Language,
        target: Language,
    },
    SwapLanguages,
    StartQuiz,
    AnswerQuiz(String),
    Quit,

    // Task completions, routed back through the event loop
    SuggestionsReady(SuggestionUpdate),
    LookupFinished(LookupUpdate),
    TranslationFinished {
        generation: u64,
        outcome: TranslationOutcome,
    },
    QuizAdvance {
        session_id: Uuid,
        index: usize,
    },

    // App -> frontend
    ShowSuggestions(Vec<Suggestion>),
    ShowLoading(String),
    ShowLookup {
        term: String,
        outcome: LookupOutcome,
    },
    ShowLanguages {
        source: Language,
        target: Language,
        text: String,
    },
    ShowTranslation {
        text: String,
        provider: String,
    },
    ShowTranslationError(String),
    ShowFavorites(Vec<String>),
    ShowQuestion {
        index: usize,
        total: usize,
        question: QuizQuestion,
    },
    ShowAnswer {
        marks: Vec<(String, OptionMark)>,
        correct: bool,
        score: usize,
    },
    ShowQuizComplete {
        score: usize,
        total: usize,
    },
    Status(String),
}

/// Fixed set of languages offered by the translator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Ru,
    Hi,
    Ta,
    Te,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::It,
        Language::Pt,
        Language::Ru,
        Language::Hi,
        Language::Ta,
        Language::Te,
    ];

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Ru => "ru",
            Language::Hi => "hi",
            Language::Ta => "ta",
            Language::Te => "te",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Fr => "French",
            Language::De => "German",
            Language::It => "Italian",
            Language::Pt => "Portuguese",
            Language::Ru => "Russian",
            Language::Hi => "Hindi",
            Language::Ta => "Tamil",
            Language::Te => "Telugu",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One autocomplete candidate, server-ranked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
}

#[derive(Debug, Clone)]
pub struct SuggestionUpdate {
    pub generation: u64,
    pub query: String,
    pub suggestions: Vec<Suggestion>,
}

/// Dictionary entry as returned by the free dictionary API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(WordEntry),
    NotFound,
    TransientError(String),
}

#[derive(Debug, Clone)]
pub struct LookupUpdate {
    pub generation: u64,
    pub term: String,
    pub outcome: LookupOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Translated { text: String, provider: String },
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Synonym,
    Antonym,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Synonym => "synonym",
            QuestionKind::Antonym => "antonym",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub word: String,
    pub kind: QuestionKind,
    pub correct: String,
    pub options: Vec<String>,
}

impl QuizQuestion {
    pub fn prompt(&self) -> String {
        let article = match self.kind {
            QuestionKind::Synonym => "a",
            QuestionKind::Antonym => "an",
        };
        format!("Choose {article} {} of \"{}\"", self.kind.as_str(), self.word)
    }
}

/// Colouring applied to each option once an answer is locked in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    Wrong,
    Neutral,
}
