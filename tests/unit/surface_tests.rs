use request_sequencer::registry::signature_digest;
use request_sequencer::{CallError, FnTarget, Verb, VerbTable, surface};
use serde_json::{Value, json};
use std::time::Duration;

#[cfg(test)]
mod tests {
    use super::*;

    /// Echoes the request body back after `delay_ms`.
    fn api_target() -> VerbTable<(String, Value), Value, String> {
        VerbTable::new()
            .on(Verb::Get, |(url, query): (String, Value)| async move {
                let delay = query["delay_ms"].as_u64().unwrap_or(0);
                tokio::time::sleep(Duration::from_millis(delay)).await;
                Ok(json!({ "url": url, "query": query }))
            })
            .on(Verb::Post, |(url, body): (String, Value)| async move {
                if body.is_null() {
                    return Err(format!("empty body for {url}"));
                }
                Ok(json!({ "created": url, "body": body }))
            })
    }

    // --- Verb surface ---

    #[tokio::test(start_paused = true)]
    async fn test_get_returns_response() {
        let api = surface(api_target());

        let response = api
            .get((String::from("/users"), json!({ "page": 1 })))
            .await
            .unwrap();

        assert_eq!(response["url"], "/users");
        assert_eq!(response["query"]["page"], 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mutating_response_keeps_cache_intact() {
        let api = surface(api_target());
        let args = || (String::from("/users"), json!({ "page": 1 }));

        let mut response = api.get(args()).await.unwrap();
        response["url"] = json!("tampered");

        let sequencer = api.sequencer_for("get", &args()).unwrap();
        match sequencer.last_outcome() {
            Some(request_sequencer::Outcome::Success(cached)) => {
                assert_eq!(cached["url"], "/users");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_without_record_reports_no_outcome() {
        let api = surface(api_target());

        let result = api.post((String::from("/users"), Value::Null)).await;

        assert_eq!(result, Err(CallError::NoOutcome));
    }

    #[tokio::test(start_paused = true)]
    async fn test_distinct_queries_do_not_interfere() {
        let api = surface(api_target());

        let slow = api.get((String::from("/users"), json!({ "delay_ms": 2000 })));
        let fast = api.get((String::from("/users"), json!({ "delay_ms": 1000 })));
        let (slow, fast) = tokio::join!(slow, fast);

        assert_eq!(slow.unwrap()["query"]["delay_ms"], 2000);
        assert_eq!(fast.unwrap()["query"]["delay_ms"], 1000);
        assert_eq!(api.len(), 2);
    }

    #[test]
    fn test_digest_is_stable_for_json_arguments() {
        let args = (String::from("/users"), json!({ "page": 1 }));
        assert_eq!(
            signature_digest("get", &args).unwrap(),
            signature_digest("get", &args.clone()).unwrap()
        );
    }

    // --- Direct-call surface ---

    #[tokio::test(start_paused = true)]
    async fn test_direct_call_surface() {
        let api = surface(FnTarget::new(|url: String, delay_ms: u64| async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            Ok::<_, String>(format!("{url} after {delay_ms}ms"))
        }));

        assert_eq!(
            api.call("/health", 5).await,
            Ok(String::from("/health after 5ms"))
        );
        assert_eq!(
            api.get(5).await,
            Err(CallError::Unsupported {
                signature: String::from("get"),
            })
        );
    }
}
