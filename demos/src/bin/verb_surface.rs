use request_sequencer::{Verb, VerbTable, surface};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // every reply carries a revision number; earlier requests reply slower
    let revision = Arc::new(AtomicU64::new(0));
    let api = surface(VerbTable::new().on(Verb::Get, move |url: String| {
        let revision = revision.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            tokio::time::sleep(Duration::from_millis(300 / revision)).await;
            Ok::<Value, String>(json!({ "url": url, "revision": revision }))
        }
    }));

    let requests = (0..3).map(|_| api.get(String::from("/dashboard")));
    let mut handles = Vec::new();
    for request in requests {
        handles.push(tokio::spawn(request));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(Ok(response)) => info!(request = i + 1, %response, "resolved"),
            Ok(Err(error)) => info!(request = i + 1, %error, "rejected"),
            Err(error) => info!(request = i + 1, %error, "task failed"),
        }
    }
    info!(sequencers = api.len(), "done");
}
