use request_sequencer::Sequencer;
use std::time::Duration;
use tracing::info;

async fn job((payload, delay_ms): (u32, u64)) -> Result<u32, String> {
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    Ok(payload)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let active = Sequencer::new(job);

    info!("sequenced: issuing (1, 2000ms) then (2, 1000ms)");
    let (first, second) = tokio::join!(active.call((1, 2000)), active.call((2, 1000)));
    info!(?first, ?second, "both callers see the later call's payload");

    active.toggle();

    info!("disabled: issuing (1, 2000ms) then (2, 1000ms)");
    let (first, second) = tokio::join!(active.call((1, 2000)), active.call((2, 1000)));
    info!(?first, ?second, "each caller sees its own payload");
}
