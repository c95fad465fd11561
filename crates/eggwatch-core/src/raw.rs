//! Raw scanner payloads and the coerce-or-default rules applied to them.
//!
//! Feeds (RocketMap-style and Monocle-style webhooks) send a flat JSON
//! object per event. Values arrive as numbers, numeric strings or not at
//! all, so every accessor here is total: it either yields a typed value or
//! `None`/an [`Unknown`] sentinel, never an error.

use crate::field::{Field, Unknown};
use serde_json::{Map, Value};

/// One inbound event exactly as the feed sent it.
pub type RawEvent = Map<String, Value>;

/// Returns the value of the first key that is present and not `null`.
///
/// Used for fields that different scanners send under different names
/// (`start`/`raid_begin`, `team_id`/`team`); earlier keys win.
#[must_use]
pub fn first_present<'a>(raw: &'a RawEvent, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .find(|value| !value.is_null())
}

/// Integer view of a feed value. Floats are truncated, strings parsed.
#[must_use]
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64().filter(|f| f.is_finite())?;
            #[allow(clippy::cast_possible_truncation)]
            let truncated = f.trunc() as i64;
            Some(truncated)
        }),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text view of a feed value. Only scalars have one.
#[must_use]
pub fn coerce_str(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Finite float view of a feed value (numbers and numeric strings).
#[must_use]
pub fn coerce_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|f: &f64| f.is_finite())
}

/// Integer field read from the first present key, or `absent`.
#[must_use]
pub fn int_field(raw: &RawEvent, keys: &[&str], absent: Unknown) -> Field<i64> {
    Field::from_option(first_present(raw, keys).and_then(coerce_int), absent)
}

/// Text field read from the first present key, or `absent`.
#[must_use]
pub fn str_field(raw: &RawEvent, keys: &[&str], absent: Unknown) -> Field<String> {
    Field::from_option(first_present(raw, keys).and_then(coerce_str), absent)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawEvent {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture is not an object: {other}"),
        }
    }

    #[test]
    fn first_present_prefers_earlier_keys_and_skips_null() {
        let event = raw(json!({"team_id": 2, "team": 3}));
        assert_eq!(first_present(&event, &["team_id", "team"]), Some(&json!(2)));

        let event = raw(json!({"team_id": null, "team": 3}));
        assert_eq!(first_present(&event, &["team_id", "team"]), Some(&json!(3)));

        let event = raw(json!({}));
        assert_eq!(first_present(&event, &["team_id", "team"]), None);
    }

    #[test]
    fn coerce_int_accepts_numbers_and_numeric_text() {
        assert_eq!(coerce_int(&json!(5)), Some(5));
        assert_eq!(coerce_int(&json!(5.9)), Some(5));
        assert_eq!(coerce_int(&json!(" 12 ")), Some(12));
        assert_eq!(coerce_int(&json!(true)), Some(1));
        assert_eq!(coerce_int(&json!("5.5")), None);
        assert_eq!(coerce_int(&json!("five")), None);
        assert_eq!(coerce_int(&json!([1])), None);
    }

    #[test]
    fn coerce_str_only_for_scalars() {
        assert_eq!(coerce_str(&json!("Park")), Some("Park".to_string()));
        assert_eq!(coerce_str(&json!(42)), Some("42".to_string()));
        assert_eq!(coerce_str(&json!(null)), None);
        assert_eq!(coerce_str(&json!({"a": 1})), None);
    }

    #[test]
    fn coerce_float_rejects_non_numeric_and_non_finite() {
        assert_eq!(coerce_float(&json!("10.5")), Some(10.5));
        assert_eq!(coerce_float(&json!(-3)), Some(-3.0));
        assert_eq!(coerce_float(&json!("NaN")), None);
        assert_eq!(coerce_float(&json!("north")), None);
        assert_eq!(coerce_float(&json!(true)), None);
    }

    #[test]
    fn typed_fields_fall_back_to_sentinels() {
        let event = raw(json!({"weather": "x", "park": 7}));
        assert_eq!(
            int_field(&event, &["weather"], Unknown::Tiny),
            Field::Unknown(Unknown::Tiny)
        );
        assert_eq!(
            str_field(&event, &["park"], Unknown::Regular),
            Field::Known("7".to_string())
        );
        assert_eq!(
            str_field(&event, &["name"], Unknown::Regular),
            Field::Unknown(Unknown::Regular)
        );
    }
}
