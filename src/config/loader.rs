// src/config/loader.rs

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::config::model::BlockParameters;
use crate::errors::{BlockError, Result};

/// Environment variable carrying the task parameters as a JSON object.
pub const TASK_PARAMETERS_ENV: &str = "UP42_TASK_PARAMETERS";

/// Extract block parameters from an environment mapping.
///
/// A missing or empty `UP42_TASK_PARAMETERS` yields an empty mapping. Any
/// other content must be a JSON object; anything else is a hard error rather
/// than being silently replaced by defaults.
pub fn load_params(env: &HashMap<String, String>) -> Result<BlockParameters> {
    let data = match env.get(TASK_PARAMETERS_ENV).map(String::as_str) {
        None | Some("") => return Ok(Map::new()),
        Some(data) => data,
    };

    serde_json::from_str::<BlockParameters>(data).map_err(BlockError::TaskParameters)
}

/// Same as [`load_params`], reading the real process environment.
pub fn load_params_from_env() -> Result<BlockParameters> {
    // Non-UTF-8 entries cannot hold our JSON anyway.
    let env: HashMap<String, String> = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();
    load_params(&env)
}

/// Render parameters for log output.
pub fn describe_params(params: &BlockParameters) -> String {
    Value::Object(params.clone()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn env_with(value: Option<&str>) -> HashMap<String, String> {
        let mut env = HashMap::new();
        env.insert("UNRELATED".to_string(), "x".to_string());
        if let Some(v) = value {
            env.insert(TASK_PARAMETERS_ENV.to_string(), v.to_string());
        }
        env
    }

    #[test]
    fn absent_and_empty_yield_empty_params() {
        assert!(load_params(&env_with(None)).unwrap().is_empty());
        assert!(load_params(&env_with(Some(""))).unwrap().is_empty());
        assert!(load_params(&env_with(Some("{}"))).unwrap().is_empty());
    }

    #[test]
    fn json_object_round_trips() {
        let params = load_params(&env_with(Some(r#"{"parameter": 1}"#))).unwrap();
        assert_eq!(Value::Object(params), json!({"parameter": 1}));
    }

    #[test]
    fn key_order_is_preserved() {
        let params = load_params(&env_with(Some(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#))).unwrap();
        let keys: Vec<&str> = params.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = load_params(&env_with(Some("{not json"))).unwrap_err();
        assert!(matches!(err, BlockError::TaskParameters(_)));
    }

    #[test]
    fn non_object_json_is_an_error() {
        let err = load_params(&env_with(Some("[1, 2]"))).unwrap_err();
        assert!(matches!(err, BlockError::TaskParameters(_)));
    }
}
