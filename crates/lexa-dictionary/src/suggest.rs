use std::sync::Arc;

use kanal::AsyncSender;
use lexa_core::LatestRequest;
use lexa_types::{AppEvent, Suggestion, SuggestionUpdate};

use crate::source::SuggestionSource;

/// Live autocomplete for the search box.
///
/// Each keystroke supersedes the previous request. Results come back as
/// [`AppEvent::SuggestionsReady`] and only become visible through
/// [`SuggestionStream::accept`], which drops anything but the latest generation.
pub struct SuggestionStream {
    source: Arc<dyn SuggestionSource>,
    max: usize,
    latest: LatestRequest,
    events: AsyncSender<AppEvent>,
}

impl SuggestionStream {
    pub fn new(source: Arc<dyn SuggestionSource>, max: usize, events: AsyncSender<AppEvent>) -> Self {
        Self {
            source,
            max,
            latest: LatestRequest::new(),
            events,
        }
    }

    /// Blank input is answered immediately with `Some(empty)`; otherwise a
    /// request is spawned and `None` is returned.
    pub fn on_input_change(&mut self, raw: &str) -> Option<Vec<Suggestion>> {
        let query = raw.trim();
        if query.is_empty() {
            self.latest.invalidate();
            return Some(Vec::new());
        }

        let ticket = self.latest.begin();
        let source = self.source.clone();
        let events = self.events.clone();
        let max = self.max;
        let query = query.to_string();

        tokio::spawn(async move {
            // Superseded requests settle silently
            let Some(result) = ticket.run(source.suggest(&query, max)).await else {
                return;
            };

            let suggestions = match result {
                Ok(mut suggestions) => {
                    suggestions.truncate(max);
                    suggestions
                }
                Err(e) => {
                    tracing::warn!("Suggestions for '{}' unavailable: {}", query, e);
                    Vec::new()
                }
            };

            if ticket.is_cancelled() {
                return;
            }

            let update = SuggestionUpdate {
                generation: ticket.generation(),
                query,
                suggestions,
            };
            if let Err(e) = events.send(AppEvent::SuggestionsReady(update)).await {
                tracing::debug!("Suggestion result dropped, event loop gone: {}", e);
            }
        });

        None
    }

    /// Returns the suggestions to display, or `None` for a stale update
    pub fn accept(&mut self, update: SuggestionUpdate) -> Option<Vec<Suggestion>> {
        if self.latest.finish(update.generation) {
            Some(update.suggestions)
        } else {
            tracing::debug!("Dropping stale suggestions for '{}'", update.query);
            None
        }
    }

    /// Cancel any in-flight request, e.g. when a search is committed
    pub fn clear(&mut self) {
        self.latest.invalidate();
    }
}
