//! Flattening of request parameter objects into query-string pairs.
//!
//! Parameter structs serialize to a JSON object first; [`flatten_query`] then
//! turns that object into the `(key, value)` pairs handed to the HTTP layer.
//! Sequence values become one pair per element under the same key, so
//! `{"address": ["a", "b"]}` is sent as `?address=a&address=b`.

use serde_json::Value;

/// A parameter object that cannot be expressed as a flat query string.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    /// The top-level parameters were not a JSON object.
    #[error("query parameters must be an object, got {0}")]
    NotAnObject(&'static str),
    /// A value (or sequence element) was itself an object or array.
    #[error("query parameter '{key}' holds a nested value")]
    Nested { key: String },
}

/// Flatten a JSON parameter object into ordered query pairs.
///
/// `null` values and `null` sequence elements are dropped. Element order of
/// sequences is preserved.
pub fn flatten_query(params: &Value) -> Result<Vec<(String, String)>, QueryError> {
    let object = match params {
        Value::Null => return Ok(Vec::new()),
        Value::Object(object) => object,
        other => return Err(QueryError::NotAnObject(kind_of(other))),
    };

    let mut pairs = Vec::with_capacity(object.len());
    for (key, value) in object {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_text(key, item)? {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            scalar => {
                if let Some(text) = scalar_text(key, scalar)? {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    Ok(pairs)
}

fn scalar_text(key: &str, value: &Value) -> Result<Option<String>, QueryError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(QueryError::Nested {
            key: key.to_string(),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values_of<'a>(pairs: &'a [(String, String)], key: &str) -> Vec<&'a str> {
        pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    #[test]
    fn arrays_repeat_the_same_key_in_order() {
        let pairs = flatten_query(&json!({ "address": ["b", "a", "c"] })).expect("flatten");
        assert_eq!(values_of(&pairs, "address"), vec!["b", "a", "c"]);
        assert!(pairs.iter().all(|(k, _)| k == "address"));
    }

    #[test]
    fn single_element_array_is_one_pair() {
        let pairs = flatten_query(&json!({ "address": ["a"] })).expect("flatten");
        assert_eq!(pairs, vec![("address".to_string(), "a".to_string())]);
    }

    #[test]
    fn nulls_are_dropped() {
        let pairs = flatten_query(&json!({
            "limit": 5,
            "offset": null,
            "account": ["x", null, "y"],
        }))
        .expect("flatten");
        assert!(values_of(&pairs, "offset").is_empty());
        assert_eq!(values_of(&pairs, "account"), vec!["x", "y"]);
        assert_eq!(values_of(&pairs, "limit"), vec!["5"]);
        assert!(pairs.iter().all(|(_, v)| v != "null" && v != "undefined"));
    }

    #[test]
    fn scalars_use_their_json_text() {
        let pairs = flatten_query(&json!({
            "include_boc": true,
            "workchain": -1,
            "shard": "8000000000000000",
        }))
        .expect("flatten");
        assert_eq!(values_of(&pairs, "include_boc"), vec!["true"]);
        assert_eq!(values_of(&pairs, "workchain"), vec!["-1"]);
        assert_eq!(values_of(&pairs, "shard"), vec!["8000000000000000"]);
    }

    #[test]
    fn empty_array_emits_nothing() {
        let pairs = flatten_query(&json!({ "trace_id": [] })).expect("flatten");
        assert!(pairs.is_empty());
    }

    #[test]
    fn null_params_are_empty() {
        assert!(flatten_query(&Value::Null).expect("flatten").is_empty());
    }

    #[test]
    fn nested_values_are_rejected() {
        let err = flatten_query(&json!({ "filter": { "a": 1 } })).unwrap_err();
        assert_eq!(
            err,
            QueryError::Nested {
                key: "filter".to_string()
            }
        );

        let err = flatten_query(&json!({ "stack": [["num", "1"]] })).unwrap_err();
        assert!(matches!(err, QueryError::Nested { key } if key == "stack"));
    }

    #[test]
    fn non_object_params_are_rejected() {
        let err = flatten_query(&json!(["a"])).unwrap_err();
        assert_eq!(err, QueryError::NotAnObject("an array"));
    }
}
