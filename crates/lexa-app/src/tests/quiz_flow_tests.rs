use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use kanal::{AsyncReceiver, AsyncSender};
use lexa_config::Config;
use lexa_core::{Favorites, LookupError, MemoryStore, ProviderError, SearchTerm};
use lexa_dictionary::{SuggestionSource, WordSource};
use lexa_quiz::{WordBank, WordBankEntry};
use lexa_translator::{
    ProviderMetadata, TranslateError, Translation, TranslationResolver, Translator,
};
use lexa_types::{AppEvent, Language, OptionMark, QuizQuestion, Suggestion, WordEntry};

use super::{assert_quiet, next_event};
use crate::events::{AppContext, Providers, run};

struct Offline;

#[async_trait]
impl WordSource for Offline {
    async fn lookup(&self, _term: &SearchTerm) -> Result<WordEntry, LookupError> {
        Err(LookupError::Transient(ProviderError::Status(503)))
    }
}

#[async_trait]
impl SuggestionSource for Offline {
    async fn suggest(&self, _prefix: &str, _max: usize) -> Result<Vec<Suggestion>, ProviderError> {
        Err(ProviderError::Status(503))
    }
}

#[async_trait]
impl Translator for Offline {
    async fn translate(
        &self,
        _text: &str,
        _from: Language,
        _to: Language,
    ) -> Result<Translation, TranslateError> {
        Err(TranslateError::Provider(ProviderError::Status(503)))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "offline".to_string(),
            endpoint: "mock://offline".to_string(),
        }
    }
}

fn entry(word: &str, synonyms: &[&str], antonyms: &[&str]) -> WordBankEntry {
    WordBankEntry {
        word: word.to_string(),
        synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        antonyms: antonyms.iter().map(|s| s.to_string()).collect(),
    }
}

async fn start(bank: WordBank) -> (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>) {
    let (ui_to_app_tx, ui_to_app_rx) = kanal::unbounded_async();
    let (app_to_ui_tx, app_to_ui_rx) = kanal::unbounded_async();

    let providers = Providers {
        words: Arc::new(Offline),
        suggestions: Arc::new(Offline),
        resolver: Arc::new(TranslationResolver::new(vec![], Arc::new(Offline))),
    };
    let context = AppContext::new(
        &Config::default(),
        providers,
        Favorites::load(Arc::new(MemoryStore::new())),
        bank,
        ui_to_app_tx.clone(),
    );
    tokio::spawn(run(context, ui_to_app_rx, app_to_ui_tx));

    next_event(&app_to_ui_rx).await;
    next_event(&app_to_ui_rx).await;
    (ui_to_app_tx, app_to_ui_rx)
}

fn expect_question(event: AppEvent) -> (usize, usize, QuizQuestion) {
    match event {
        AppEvent::ShowQuestion {
            index,
            total,
            question,
        } => (index, total, question),
        other => panic!("Wrong event type: {:?}", other),
    }
}

/// Single-option questions make the right answer predictable
fn single_option_bank() -> WordBank {
    WordBank::new(vec![entry("glad", &["happy"], &[]), entry("tiny", &["small"], &[])])
}

#[tokio::test(start_paused = true)]
async fn test_quiz_runs_to_completion() {
    let (tx, rx) = start(single_option_bank()).await;

    tx.send(AppEvent::StartQuiz).await.unwrap();
    let (index, total, question) = expect_question(next_event(&rx).await);
    assert_eq!((index, total), (0, 2));
    assert_eq!(question.options, vec![question.correct.clone()]);

    tx.send(AppEvent::AnswerQuiz(question.correct.clone())).await.unwrap();
    match next_event(&rx).await {
        AppEvent::ShowAnswer {
            marks,
            correct,
            score,
        } => {
            assert!(correct);
            assert_eq!(score, 1);
            assert_eq!(marks, vec![(question.correct.clone(), OptionMark::Correct)]);
        }
        other => panic!("Wrong event type: {:?}", other),
    }

    let (index, _, question) = expect_question(next_event(&rx).await);
    assert_eq!(index, 1);

    tx.send(AppEvent::AnswerQuiz(question.correct)).await.unwrap();
    assert!(matches!(next_event(&rx).await, AppEvent::ShowAnswer { score: 2, .. }));
    assert!(matches!(
        next_event(&rx).await,
        AppEvent::ShowQuizComplete { score: 2, total: 2 }
    ));
}

#[tokio::test(start_paused = true)]
async fn test_double_answer_is_scored_once() {
    let (tx, rx) = start(single_option_bank()).await;

    tx.send(AppEvent::StartQuiz).await.unwrap();
    let (_, _, question) = expect_question(next_event(&rx).await);

    tx.send(AppEvent::AnswerQuiz(question.correct.clone())).await.unwrap();
    tx.send(AppEvent::AnswerQuiz(question.correct.clone())).await.unwrap();

    assert!(matches!(next_event(&rx).await, AppEvent::ShowAnswer { score: 1, .. }));
    // Next thing is the following question, not a second verdict
    let (index, _, _) = expect_question(next_event(&rx).await);
    assert_eq!(index, 1);
}

#[tokio::test(start_paused = true)]
async fn test_answer_is_held_before_advancing() {
    let (tx, rx) = start(single_option_bank()).await;

    tx.send(AppEvent::StartQuiz).await.unwrap();
    let (_, _, question) = expect_question(next_event(&rx).await);
    tx.send(AppEvent::AnswerQuiz(question.correct)).await.unwrap();
    next_event(&rx).await;

    let started = tokio::time::Instant::now();
    expect_question(next_event(&rx).await);
    assert!(started.elapsed() >= Duration::from_millis(1400));
}

#[tokio::test(start_paused = true)]
async fn test_restart_ignores_pending_advance() {
    let (tx, rx) = start(single_option_bank()).await;

    tx.send(AppEvent::StartQuiz).await.unwrap();
    let (_, _, question) = expect_question(next_event(&rx).await);
    tx.send(AppEvent::AnswerQuiz(question.correct)).await.unwrap();
    next_event(&rx).await;

    tx.send(AppEvent::StartQuiz).await.unwrap();
    let (index, _, _) = expect_question(next_event(&rx).await);
    assert_eq!(index, 0);

    // The first session's timer fires into the void
    assert_quiet(&rx).await;
}

#[tokio::test(start_paused = true)]
async fn test_unusable_bank_reports_status() {
    let (tx, rx) = start(WordBank::new(vec![entry("void", &[], &[])])).await;

    tx.send(AppEvent::StartQuiz).await.unwrap();

    assert!(matches!(next_event(&rx).await, AppEvent::Status(_)));
}

#[tokio::test(start_paused = true)]
async fn test_answer_without_quiz_is_ignored() {
    let (tx, rx) = start(single_option_bank()).await;

    tx.send(AppEvent::AnswerQuiz("happy".to_string())).await.unwrap();

    assert_quiet(&rx).await;
}
