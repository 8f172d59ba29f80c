use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Deserialize `value` into `T`, rejecting anything that is not a JSON object.
///
/// serde accepts sequences for derived structs; decision documents and
/// extraction requests are only ever objects, so arrays are refused here.
pub fn from_object<T>(value: serde_json::Value) -> Result<T, DocumentError>
where
    T: serde::de::DeserializeOwned,
{
    if !value.is_object() {
        return Err(DocumentError::NotAnObject(json_type_name(&value)));
    }
    Ok(serde_json::from_value(value)?)
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Pair {
        a: u32,
        b: u32,
    }

    #[test]
    fn object_is_accepted() {
        let pair: Pair = from_object(serde_json::json!({"a": 1, "b": 2})).unwrap();
        assert_eq!(pair.a + pair.b, 3);
    }

    #[test]
    fn array_is_refused_even_when_it_would_fit() {
        let err = from_object::<Pair>(serde_json::json!([1, 2])).unwrap_err();
        assert!(matches!(err, DocumentError::NotAnObject("an array")));
        assert_eq!(err.to_string(), "expected a JSON object, found an array");
    }

    #[test]
    fn wrong_field_type_is_a_json_error() {
        let err = from_object::<Pair>(serde_json::json!({"a": "one", "b": 2})).unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
    }
}
