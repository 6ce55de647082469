use kanal::AsyncSender;
use lexa_core::SearchTerm;
use lexa_types::{AppEvent, LookupUpdate};

use super::AppContext;

/// Commit a search. Also used when a favorite is picked.
pub async fn handle_search(
    context: &mut AppContext,
    raw: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(term) = SearchTerm::parse(&raw) else {
        tracing::debug!("Ignoring blank search");
        return Ok(());
    };

    context.suggestions.clear();
    app_to_ui_tx
        .send(AppEvent::ShowSuggestions(Vec::new()))
        .await?;
    app_to_ui_tx
        .send(AppEvent::ShowLoading(term.to_string()))
        .await?;

    let generation = context.lookup.resolve(term);
    tracing::debug!("Lookup generation {} started", generation);

    Ok(())
}

pub async fn handle_lookup_finished(
    context: &mut AppContext,
    update: LookupUpdate,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(update) = context.lookup.accept(update) else {
        return Ok(());
    };

    app_to_ui_tx
        .send(AppEvent::ShowLookup {
            term: update.term,
            outcome: update.outcome,
        })
        .await?;

    Ok(())
}
