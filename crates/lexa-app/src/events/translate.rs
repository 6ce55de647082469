use kanal::AsyncSender;
use lexa_translator::TranslateError;
use lexa_translator::panel::{GENERIC_ERROR, outcome_of};
use lexa_types::{AppEvent, Language, TranslationOutcome};

use super::AppContext;

pub async fn handle_translate(
    context: &mut AppContext,
    text: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some((ticket, request)) = context.panel.submit(&text) else {
        tracing::debug!("Nothing to translate");
        return Ok(());
    };

    app_to_ui_tx
        .send(AppEvent::Status(format!(
            "Translating {} -> {}...",
            request.source.label(),
            request.target.label()
        )))
        .await?;

    let resolver = context.resolver.clone();
    let completions = context.completions.clone();

    tokio::spawn(async move {
        let Some(result) = ticket.run(resolver.translate(&request)).await else {
            return;
        };

        if let Err(TranslateError::AllProvidersExhausted { attempts }) = &result {
            tracing::warn!("Translation failed after {} attempts", attempts.len());
        }

        let Some(outcome) = outcome_of(result) else {
            return;
        };
        if ticket.is_cancelled() {
            return;
        }

        let event = AppEvent::TranslationFinished {
            generation: ticket.generation(),
            outcome,
        };
        if let Err(e) = completions.send(event).await {
            tracing::debug!("Translation result dropped, event loop gone: {}", e);
        }
    });

    Ok(())
}

pub async fn handle_translation_finished(
    context: &mut AppContext,
    generation: u64,
    outcome: TranslationOutcome,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !context.panel.apply(generation, outcome.clone()) {
        tracing::debug!("Dropping stale translation {}", generation);
        return Ok(());
    }

    let event = match outcome {
        TranslationOutcome::Translated { text, provider } => {
            AppEvent::ShowTranslation { text, provider }
        }
        TranslationOutcome::Failed => AppEvent::ShowTranslationError(GENERIC_ERROR.to_string()),
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}

pub async fn handle_set_languages(
    context: &mut AppContext,
    source: Language,
    target: Language,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    context.panel.set_languages(source, target);
    send_languages(context, app_to_ui_tx).await
}

pub async fn handle_swap(
    context: &mut AppContext,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    context.panel.swap();
    send_languages(context, app_to_ui_tx).await
}

async fn send_languages(
    context: &AppContext,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::ShowLanguages {
            source: context.panel.source,
            target: context.panel.target,
            text: context.panel.input.clone(),
        })
        .await?;

    Ok(())
}
