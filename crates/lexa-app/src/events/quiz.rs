use std::time::Duration;

use kanal::AsyncSender;
use lexa_config::quiz::QuizConfig;
use lexa_quiz::{QuizError, QuizGenerator, QuizSession, WordBank};
use lexa_types::AppEvent;
use uuid::Uuid;

use super::AppContext;

/// Word bank plus the running session, if any
pub struct QuizState {
    generator: QuizGenerator,
    bank: WordBank,
    question_count: usize,
    advance_delay: Duration,
    session: Option<QuizSession>,
}

impl QuizState {
    pub fn new(bank: WordBank, config: &QuizConfig) -> Self {
        Self {
            generator: QuizGenerator::new(),
            bank,
            question_count: config.question_count,
            advance_delay: config.advance_delay(),
            session: None,
        }
    }

    /// Throw away the current session and start a fresh one
    pub fn reset(&mut self) -> Result<&QuizSession, QuizError> {
        let session = self
            .generator
            .generate_session(&self.bank, self.question_count)?;
        Ok(self.session.insert(session))
    }
}

fn question_event(session: &QuizSession) -> AppEvent {
    match session.current() {
        Some(question) => AppEvent::ShowQuestion {
            index: session.index(),
            total: session.total(),
            question: question.clone(),
        },
        None => AppEvent::ShowQuizComplete {
            score: session.score(),
            total: session.total(),
        },
    }
}

pub async fn handle_start_quiz(
    context: &mut AppContext,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let event = match context.quiz.reset() {
        Ok(session) => {
            tracing::info!("Quiz {} started with {} questions", session.id(), session.total());
            question_event(session)
        }
        Err(e) => {
            tracing::warn!("Could not start quiz: {}", e);
            AppEvent::Status(format!("Could not start quiz: {e}"))
        }
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}

pub async fn handle_answer(
    context: &mut AppContext,
    choice: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let delay = context.quiz.advance_delay;
    let Some(session) = context.quiz.session.as_mut() else {
        return Ok(());
    };
    let Some(verdict) = session.answer(&choice) else {
        tracing::debug!("Answer '{}' rejected", choice);
        return Ok(());
    };

    let session_id = session.id();
    let index = session.index();
    app_to_ui_tx
        .send(AppEvent::ShowAnswer {
            marks: verdict.marks,
            correct: verdict.correct,
            score: verdict.score,
        })
        .await?;

    // Keep the marks up for a moment, then move on
    let completions = context.completions.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if let Err(e) = completions
            .send(AppEvent::QuizAdvance { session_id, index })
            .await
        {
            tracing::debug!("Quiz advance dropped, event loop gone: {}", e);
        }
    });

    Ok(())
}

pub async fn handle_quiz_advance(
    context: &mut AppContext,
    session_id: Uuid,
    index: usize,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(session) = context.quiz.session.as_mut() else {
        return Ok(());
    };
    // Timers from a reset session or an earlier question are ignored
    if session.id() != session_id || session.index() != index || !session.advance() {
        return Ok(());
    }

    if session.is_complete() {
        tracing::info!("Quiz finished: {}/{}", session.score(), session.total());
    }
    app_to_ui_tx.send(question_event(session)).await?;

    Ok(())
}
