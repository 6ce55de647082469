use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Handle for one issued request of a stream
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    token: CancellationToken,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drive `fut` unless the ticket gets superseded first, in which case
    /// the future is dropped (aborting the transport) and `None` is returned.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        self.token.run_until_cancelled(fut).await
    }
}

/// Authoritative "latest request" marker for one logical stream.
///
/// Issuing a new ticket cancels the previous one. Results must still be
/// checked with [`LatestRequest::is_current`] before being applied, since a
/// response may already be queued when cancellation happens.
#[derive(Debug, Default)]
pub struct LatestRequest {
    generation: u64,
    active: Option<CancellationToken>,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> Ticket {
        self.cancel();
        self.generation += 1;

        let token = CancellationToken::new();
        self.active = Some(token.clone());

        Ticket {
            generation: self.generation,
            token,
        }
    }

    /// Cancel the in-flight request and make every issued ticket stale
    pub fn invalidate(&mut self) {
        self.cancel();
        self.generation += 1;
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.active.is_some() && self.generation == generation
    }

    /// Mark the current request as settled. Returns false for stale generations.
    pub fn finish(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.active = None;
        true
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn cancel(&mut self) {
        if let Some(token) = self.active.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_begin_cancels_previous_ticket() {
        let mut latest = LatestRequest::new();
        let first = latest.begin();
        let second = latest.begin();

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert!(!latest.is_current(first.generation()));
        assert!(latest.is_current(second.generation()));
    }

    #[test]
    fn test_invalidate_makes_everything_stale() {
        let mut latest = LatestRequest::new();
        let ticket = latest.begin();
        latest.invalidate();

        assert!(ticket.is_cancelled());
        assert!(!latest.is_current(ticket.generation()));
    }

    #[test]
    fn test_finish_only_accepts_current_once() {
        let mut latest = LatestRequest::new();
        let stale = latest.begin();
        let current = latest.begin();

        assert!(!latest.finish(stale.generation()));
        assert!(latest.finish(current.generation()));
        assert!(!latest.finish(current.generation()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_drops_future_on_cancel() {
        let mut latest = LatestRequest::new();
        let ticket = latest.begin();

        let pending = tokio::spawn({
            let ticket = ticket.clone();
            async move {
                ticket
                    .run(tokio::time::sleep(Duration::from_secs(60)))
                    .await
            }
        });

        tokio::task::yield_now().await;
        latest.begin();

        assert_eq!(pending.await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_run_completes_when_not_cancelled() {
        let mut latest = LatestRequest::new();
        let ticket = latest.begin();
        assert_eq!(ticket.run(async { 7 }).await, Some(7));
    }
}
