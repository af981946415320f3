/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Tests for calls whose digest cannot be derived.

#[cfg(test)]
mod tests {
    use crate::registry::{Registry, Verb, VerbTable};
    use crate::sequencer::CallError;
    use serde::ser::Error as _;
    use serde::{Serialize, Serializer};
    use std::time::Duration;

    enum Query {
        Page(u32),
        Opaque { payload: u32, delay_ms: u64 },
        Poisoned,
    }

    impl Serialize for Query {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Query::Page(page) => serializer.serialize_u32(*page),
                Query::Opaque { .. } | Query::Poisoned => {
                    Err(S::Error::custom("query has no representation"))
                }
            }
        }
    }

    fn query_target() -> VerbTable<Query, u32, String> {
        VerbTable::new().on(Verb::Get, |query: Query| async move {
            match query {
                Query::Page(page) => Ok(page),
                Query::Opaque { payload, delay_ms } => {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    Ok(payload)
                }
                Query::Poisoned => Err(String::from("poisoned")),
            }
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_unrepresentable_call_still_completes() {
        let registry = Registry::new(query_target());

        let result = registry
            .get(Query::Opaque {
                payload: 9,
                delay_ms: 10,
            })
            .await;

        assert_eq!(result, Ok(9));
        assert!(registry.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unrepresentable_calls_are_not_sequenced() {
        let registry = Registry::new(query_target());

        let first = registry.get(Query::Opaque {
            payload: 1,
            delay_ms: 2000,
        });
        let second = registry.get(Query::Opaque {
            payload: 2,
            delay_ms: 1000,
        });
        let (first, second) = tokio::join!(first, second);

        assert_eq!(first, Ok(1));
        assert_eq!(second, Ok(2));
    }

    #[tokio::test]
    async fn test_unrepresentable_failure_passes_through() {
        let registry = Registry::new(query_target());

        let result = registry.get(Query::Poisoned).await;

        assert_eq!(result, Err(CallError::Failed(String::from("poisoned"))));
    }

    #[tokio::test]
    async fn test_representable_calls_still_sequenced() {
        let registry = Registry::new(query_target());

        assert_eq!(registry.get(Query::Page(4)).await, Ok(4));
        assert_eq!(registry.len(), 1);
    }
}
