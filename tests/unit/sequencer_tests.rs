use request_sequencer::{CallError, Outcome, Sequencer, SequencerMode};
use std::time::Duration;

#[cfg(test)]
mod tests {
    use super::*;

    async fn job((payload, delay_ms): (u32, u64)) -> Result<u32, String> {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        Ok(payload)
    }

    // --- Worked example ---

    #[tokio::test(start_paused = true)]
    async fn test_slow_first_call_adopts_second_payload() {
        let active = Sequencer::new(job);

        let first = tokio::spawn(active.call((1, 2000)));
        let second = active.call((2, 1000));

        assert_eq!(second.await, Ok(2));
        assert_eq!(first.await.unwrap(), Ok(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggled_first_call_keeps_own_payload() {
        let active = Sequencer::new(job);
        active.toggle();

        let first = tokio::spawn(active.call((1, 2000)));
        let second = active.call((2, 1000));

        assert_eq!(second.await, Ok(2));
        assert_eq!(first.await.unwrap(), Ok(1));
    }

    // --- Recency is fixed at issue ---

    #[tokio::test(start_paused = true)]
    async fn test_issued_after_completion_still_supersedes_record() {
        let active = Sequencer::new(job);
        assert_eq!(active.call((1, 10)).await, Ok(1));

        let pending = active.call((2, 30));
        let newer = active.call((3, 20));
        let (pending, newer) = tokio::join!(pending, newer);

        assert_eq!(newer, Ok(3));
        assert_eq!(pending, Ok(3));
        assert_eq!(active.last_outcome(), Some(Outcome::Success(3)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reenabling_resumes_sequencing() {
        let active = Sequencer::new(job);
        active.toggle();
        assert_eq!(active.mode(), SequencerMode::Disabled);
        active.toggle();

        let first = active.call((1, 20));
        let second = active.call((2, 10));
        let (first, second) = tokio::join!(first, second);

        assert_eq!(first, Ok(2));
        assert_eq!(second, Ok(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_before_any_record() {
        let active = Sequencer::new(job);

        let first = active.call((1, 10));
        let second = active.call((2, 20));
        let (first, second) = tokio::join!(first, second);

        assert_eq!(first, Err(CallError::NoOutcome));
        assert_eq!(second, Ok(2));
    }
}
