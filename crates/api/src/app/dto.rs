//! Request body parsing.
//!
//! Bodies are parsed by hand from raw bytes so a malformed payload lands on
//! each endpoint's own 400 shape instead of the framework's rejection.

use serde_json::{Map, Value};
use thiserror::Error;

pub type JsonObject = Map<String, Value>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} must be an integer")]
    NotInteger(&'static str),

    #[error("{0} must be a string")]
    NotString(&'static str),
}

/// The body as a non-empty JSON object, or `None`.
pub fn parse_object(body: &[u8]) -> Option<JsonObject> {
    match serde_json::from_slice::<Value>(body).ok()? {
        Value::Object(map) if !map.is_empty() => Some(map),
        _ => None,
    }
}

/// Parse the body and require every key in `fields` to be present.
pub fn object_with(body: &[u8], fields: &[&str]) -> Option<JsonObject> {
    parse_object(body).filter(|obj| fields.iter().all(|f| obj.contains_key(*f)))
}

/// Text field; `null` reads as the empty string so the name rule reports it.
pub fn text_field(obj: &JsonObject, key: &'static str) -> Result<String, FieldError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(FieldError::NotString(key)),
    }
}

/// Integer field. Whole-number floats such as `12.0` are accepted.
pub fn int_field(obj: &JsonObject, key: &'static str) -> Result<i64, FieldError> {
    let number = match obj.get(key) {
        Some(Value::Number(n)) => n,
        _ => return Err(FieldError::NotInteger(key)),
    };
    if let Some(i) = number.as_i64() {
        return Ok(i);
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(FieldError::NotInteger(key)),
    }
}

/// Loose truthiness: null, false, 0, "" and empty collections are all blank.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_object_bodies_are_rejected() {
        assert!(parse_object(b"").is_none());
        assert!(parse_object(b"not json").is_none());
        assert!(parse_object(b"[1, 2]").is_none());
        assert!(parse_object(b"{}").is_none());
        assert!(parse_object(br#"{"name": "Alex"}"#).is_some());
    }

    #[test]
    fn object_with_requires_every_field() {
        let body = br#"{"camper_id": 1, "time": 9}"#;
        assert!(object_with(body, &["camper_id", "time"]).is_some());
        assert!(object_with(body, &["camper_id", "activity_id", "time"]).is_none());
    }

    #[test]
    fn field_types_are_checked() {
        let obj = parse_object(br#"{"name": null, "age": "twelve", "time": 9}"#).unwrap();
        assert_eq!(text_field(&obj, "name").unwrap(), "");
        assert_eq!(int_field(&obj, "age"), Err(FieldError::NotInteger("age")));
        assert_eq!(int_field(&obj, "time"), Ok(9));
    }

    #[test]
    fn whole_number_floats_read_as_integers() {
        let obj = parse_object(br#"{"age": 12.0, "time": 9.5, "big": 1e300}"#).unwrap();
        assert_eq!(int_field(&obj, "age"), Ok(12));
        assert_eq!(int_field(&obj, "time"), Err(FieldError::NotInteger("time")));
        assert_eq!(int_field(&obj, "big"), Err(FieldError::NotInteger("big")));
    }

    #[test]
    fn blank_values() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&json!(""))));
        assert!(is_blank(Some(&json!(null))));
        assert!(!is_blank(Some(&json!("Alex"))));
    }
}
