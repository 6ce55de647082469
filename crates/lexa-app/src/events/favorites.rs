use kanal::AsyncSender;
use lexa_types::AppEvent;

use super::AppContext;

/// A blank word stands for the word currently looked up
pub async fn handle_add_favorite(
    context: &mut AppContext,
    word: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let word = match word.trim() {
        "" => match context.lookup.current_term() {
            Some(term) => term.to_string(),
            None => {
                app_to_ui_tx
                    .send(AppEvent::Status("Nothing to add to favorites".to_string()))
                    .await?;
                return Ok(());
            }
        },
        word => word.to_string(),
    };

    match context.favorites.add(&word) {
        Ok(true) => tracing::info!("Added '{}' to favorites", word),
        Ok(false) => tracing::debug!("'{}' already in favorites", word),
        Err(e) => {
            tracing::warn!("Failed to save favorites: {}", e);
            app_to_ui_tx
                .send(AppEvent::Status("Favorites could not be saved".to_string()))
                .await?;
        }
    }

    app_to_ui_tx
        .send(AppEvent::ShowFavorites(context.favorites.words().to_vec()))
        .await?;

    Ok(())
}

pub async fn handle_remove_favorite(
    context: &mut AppContext,
    word: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let word = match word.trim() {
        "" => context
            .lookup
            .current_term()
            .map(|term| term.to_string())
            .unwrap_or_default(),
        word => word.to_string(),
    };

    match context.favorites.remove(&word) {
        Ok(true) => tracing::info!("Removed '{}' from favorites", word),
        Ok(false) => tracing::debug!("'{}' was not a favorite", word),
        Err(e) => {
            tracing::warn!("Failed to save favorites: {}", e);
            app_to_ui_tx
                .send(AppEvent::Status("Favorites could not be saved".to_string()))
                .await?;
        }
    }

    app_to_ui_tx
        .send(AppEvent::ShowFavorites(context.favorites.words().to_vec()))
        .await?;

    Ok(())
}
