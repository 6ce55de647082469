use std::sync::Arc;

use kanal::AsyncSender;
use lexa_core::{LatestRequest, LookupError, SearchTerm};
use lexa_types::{AppEvent, LookupOutcome, LookupUpdate, WordEntry};

use crate::source::WordSource;

/// Resolves committed search terms, applying only the most recent one
pub struct LookupCoordinator {
    source: Arc<dyn WordSource>,
    latest: LatestRequest,
    events: AsyncSender<AppEvent>,
    current: Option<SearchTerm>,
}

impl LookupCoordinator {
    pub fn new(source: Arc<dyn WordSource>, events: AsyncSender<AppEvent>) -> Self {
        Self {
            source,
            latest: LatestRequest::new(),
            events,
            current: None,
        }
    }

    /// Commit `term`; any earlier unresolved lookup becomes stale.
    /// Returns the generation the result will be tagged with.
    pub fn resolve(&mut self, term: SearchTerm) -> u64 {
        let ticket = self.latest.begin();
        let generation = ticket.generation();
        self.current = Some(term.clone());

        let source = self.source.clone();
        let events = self.events.clone();

        tokio::spawn(async move {
            let Some(result) = ticket.run(source.lookup(&term)).await else {
                return;
            };

            let Some(outcome) = outcome_of(result) else {
                return;
            };
            match &outcome {
                LookupOutcome::TransientError(reason) => {
                    tracing::warn!("Lookup for '{}' failed: {}", term, reason)
                }
                LookupOutcome::NotFound => tracing::info!("No entry for '{}'", term),
                LookupOutcome::Found(_) => {}
            }

            if ticket.is_cancelled() {
                return;
            }

            let update = LookupUpdate {
                generation: ticket.generation(),
                term: term.into_inner(),
                outcome,
            };
            if let Err(e) = events.send(AppEvent::LookupFinished(update)).await {
                tracing::debug!("Lookup result dropped, event loop gone: {}", e);
            }
        });

        generation
    }

    /// Returns the update if it belongs to the latest committed term
    pub fn accept(&mut self, update: LookupUpdate) -> Option<LookupUpdate> {
        if self.latest.finish(update.generation) {
            Some(update)
        } else {
            tracing::debug!("Dropping stale lookup for '{}'", update.term);
            None
        }
    }

    pub fn current_term(&self) -> Option<&SearchTerm> {
        self.current.as_ref()
    }

    pub fn cancel(&mut self) {
        self.latest.invalidate();
        self.current = None;
    }
}

/// `None` for cancellations, which are never reported
pub fn outcome_of(result: Result<WordEntry, LookupError>) -> Option<LookupOutcome> {
    match result {
        Ok(entry) => Some(LookupOutcome::Found(entry)),
        Err(LookupError::NotFound(_)) => Some(LookupOutcome::NotFound),
        Err(LookupError::Cancelled) => None,
        Err(e @ LookupError::Transient(_)) => Some(LookupOutcome::TransientError(e.to_string())),
    }
}
