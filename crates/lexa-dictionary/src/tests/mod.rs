
use std::time::Duration;

use kanal::AsyncReceiver;
use lexa_types::AppEvent;
use tokio::time::timeout;

/// Collect everything the spawned tasks deliver until the channel goes quiet
async fn drain(rx: &AsyncReceiver<AppEvent>) -> Vec<AppEvent> {
    let mut events = Vec::new();
    while let Ok(Ok(event)) = timeout(Duration::from_secs(5), rx.recv()).await {
        events.push(event);
    }
    events
}
