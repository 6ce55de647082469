use std::time::Duration;

use kanal::AsyncReceiver;
use lexa_types::AppEvent;
use tokio::time::timeout;

mod quiz_flow_tests;

async fn next_event(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    match timeout(Duration::from_secs(10), rx.recv()).await {
        Ok(Ok(event)) => event,
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - event never arrived!"),
    }
}

/// Nothing else shows up within a generous window
async fn assert_quiet(rx: &AsyncReceiver<AppEvent>) {
    if let Ok(Ok(event)) = timeout(Duration::from_secs(5), rx.recv()).await {
        panic!("Unexpected event: {:?}", event);
    }
}
