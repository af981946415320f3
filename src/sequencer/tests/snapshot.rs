/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Tests for payload copies.

#[cfg(test)]
mod tests {
    use crate::sequencer::{Outcome, deep_copy};
    use serde::{Deserialize, Serialize};
    use std::collections::{BTreeMap, HashMap};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Profile {
        name: String,
        tags: Vec<String>,
        scores: BTreeMap<String, i64>,
    }

    #[test]
    fn test_nested_struct_copy_is_equal() {
        let profile = Profile {
            name: String::from("ada"),
            tags: vec![String::from("admin")],
            scores: BTreeMap::from([(String::from("rank"), 1)]),
        };

        assert_eq!(deep_copy(&profile), profile);
    }

    #[test]
    fn test_json_value_copy() {
        let value = serde_json::json!({ "items": [1, 2, { "nested": null }] });
        assert_eq!(deep_copy(&value), value);
    }

    #[test]
    fn test_non_string_keys_fall_back_to_clone() {
        let map: HashMap<(u8, u8), String> = HashMap::from([((1, 2), String::from("edge"))]);
        assert_eq!(deep_copy(&map), map);
    }

    #[test]
    fn test_non_finite_float_falls_back_to_clone() {
        assert!(deep_copy(&f64::NAN).is_nan());
        assert_eq!(deep_copy(&f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_outcome_conversions() {
        let success: Outcome<u32, String> = Ok(3).into();
        assert!(success.is_success());
        assert_eq!(success.into_result(), Ok(3));

        let failure: Outcome<u32, String> = Err(String::from("boom")).into();
        assert!(failure.is_failure());
        assert_eq!(failure.into_result(), Err(String::from("boom")));
    }
}
