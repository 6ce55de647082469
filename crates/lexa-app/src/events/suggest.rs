use kanal::AsyncSender;
use lexa_types::{AppEvent, SuggestionUpdate};

use super::AppContext;

pub async fn handle_input_changed(
    context: &mut AppContext,
    text: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // Blank input is answered right away, anything else arrives as SuggestionsReady
    if let Some(suggestions) = context.suggestions.on_input_change(&text) {
        app_to_ui_tx
            .send(AppEvent::ShowSuggestions(suggestions))
            .await?;
    }

    Ok(())
}

pub async fn handle_suggestions_ready(
    context: &mut AppContext,
    update: SuggestionUpdate,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if let Some(suggestions) = context.suggestions.accept(update) {
        tracing::debug!("Showing {} suggestions", suggestions.len());
        app_to_ui_tx
            .send(AppEvent::ShowSuggestions(suggestions))
            .await?;
    }

    Ok(())
}
