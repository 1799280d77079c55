//! Defensive access to loosely-typed records.
//!
//! Records are plain [`serde_json::Value`]s. Every helper here tolerates
//! non-object values and missing fields, returning `None` (or nothing) rather
//! than failing. Object keys enumerate in document order because the crate
//! builds `serde_json` with `preserve_order`.

use serde_json::Value;

/// Look up a field, returning `None` for missing fields and non-object records.
pub fn field<'a>(record: &'a Value, name: &str) -> Option<&'a Value> {
    record.as_object()?.get(name)
}

/// Iterate over a record's fields in insertion order.
///
/// Non-object records have no fields.
pub fn fields(record: &Value) -> impl Iterator<Item = (&String, &Value)> {
    record.as_object().into_iter().flat_map(|map| map.iter())
}

/// Whether a value counts as "set" for first-present field chains.
///
/// Null, `false`, numeric zero and the empty string are unset; everything else,
/// including empty arrays and objects, is set.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read a value as a finite number: JSON numbers directly, strings when
/// their trimmed content parses as one.
pub fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// The record's identifier as a number, if it has a numeric one.
pub fn numeric_id(record: &Value, id_field: &str) -> Option<f64> {
    field(record, id_field).and_then(as_number)
}

/// The record's identifier rendered as text, for any non-null id.
///
/// Strings render without quotes; other values use their JSON form.
pub fn id_text(record: &Value, id_field: &str) -> Option<String> {
    match field(record, id_field)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_access_is_defensive() {
        let record = json!({"id": 7, "name": "Shaft A"});
        assert_eq!(field(&record, "id"), Some(&json!(7)));
        assert_eq!(field(&record, "missing"), None);
        assert_eq!(field(&json!("plain string"), "id"), None);
        assert_eq!(field(&Value::Null, "id"), None);
        assert_eq!(field(&json!([1, 2]), "id"), None);
    }

    #[test]
    fn fields_follow_document_order() {
        let record: Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "10": 3, "mid": 4}"#).unwrap();
        let keys: Vec<_> = fields(&record).map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "10", "mid"]);

        assert_eq!(fields(&json!(42)).count(), 0);
    }

    #[test]
    fn truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("not-a-date")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn numeric_ids() {
        assert_eq!(numeric_id(&json!({"id": 12}), "id"), Some(12.0));
        assert_eq!(numeric_id(&json!({"id": " 42 "}), "id"), Some(42.0));
        assert_eq!(numeric_id(&json!({"id": "2.5"}), "id"), Some(2.5));
        assert_eq!(numeric_id(&json!({"id": "abc-1"}), "id"), None);
        assert_eq!(numeric_id(&json!({"id": "NaN"}), "id"), None);
        assert_eq!(numeric_id(&json!({"id": "inf"}), "id"), None);
        assert_eq!(numeric_id(&json!({"id": null}), "id"), None);
        assert_eq!(numeric_id(&json!({"uid": 3}), "uid"), Some(3.0));
    }

    #[test]
    fn textual_ids() {
        assert_eq!(id_text(&json!({"id": "MNR-004"}), "id"), Some("MNR-004".to_string()));
        assert_eq!(id_text(&json!({"id": 4}), "id"), Some("4".to_string()));
        assert_eq!(id_text(&json!({"id": true}), "id"), Some("true".to_string()));
        assert_eq!(id_text(&json!({"id": null}), "id"), None);
        assert_eq!(id_text(&json!({}), "id"), None);
    }
}
