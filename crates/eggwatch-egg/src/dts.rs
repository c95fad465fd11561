//! Template placeholder values ("DTS") produced by flattening an event.

use eggwatch_core::{Field, Unknown};
use eggwatch_format::time::plain_datetime;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Flattened placeholder name -> value mapping handed to the renderer.
pub type Dts = BTreeMap<String, DtsValue>;

/// One placeholder value.
///
/// `Bool` only appears for tri-state flags that are known; an unknown flag
/// is `Unknown`, never `Bool(false)`.
#[derive(Debug, Clone, PartialEq)]
pub enum DtsValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Time(OffsetDateTime),
    Unknown(Unknown),
}

impl DtsValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DtsValue::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            DtsValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            DtsValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            DtsValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_time(&self) -> Option<OffsetDateTime> {
        match self {
            DtsValue::Time(t) => Some(*t),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, DtsValue::Unknown(_))
    }
}

/// Template rendering of the value.
impl fmt::Display for DtsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DtsValue::Text(s) => f.write_str(s),
            DtsValue::Int(v) => write!(f, "{v}"),
            // whole floats keep their ".0" so coordinates read as coordinates
            DtsValue::Float(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{v:.1}"),
            DtsValue::Float(v) => write!(f, "{v}"),
            DtsValue::Bool(v) => write!(f, "{v}"),
            DtsValue::Time(t) => f.write_str(&plain_datetime(*t)),
            DtsValue::Unknown(u) => f.write_str(u.as_str()),
        }
    }
}

impl Serialize for DtsValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DtsValue::Text(s) => serializer.serialize_str(s),
            DtsValue::Int(v) => serializer.serialize_i64(*v),
            DtsValue::Float(v) => serializer.serialize_f64(*v),
            DtsValue::Bool(v) => serializer.serialize_bool(*v),
            // RFC 3339 has no room for years outside 0000..=9999
            DtsValue::Time(t) => match t.format(&Rfc3339) {
                Ok(text) => serializer.serialize_str(&text),
                Err(_) => serializer.serialize_str(&plain_datetime(*t)),
            },
            DtsValue::Unknown(u) => u.serialize(serializer),
        }
    }
}

impl From<String> for DtsValue {
    fn from(v: String) -> Self {
        DtsValue::Text(v)
    }
}

impl From<&str> for DtsValue {
    fn from(v: &str) -> Self {
        DtsValue::Text(v.to_string())
    }
}

impl From<i64> for DtsValue {
    fn from(v: i64) -> Self {
        DtsValue::Int(v)
    }
}

impl From<f64> for DtsValue {
    fn from(v: f64) -> Self {
        DtsValue::Float(v)
    }
}

impl From<bool> for DtsValue {
    fn from(v: bool) -> Self {
        DtsValue::Bool(v)
    }
}

impl From<OffsetDateTime> for DtsValue {
    fn from(v: OffsetDateTime) -> Self {
        DtsValue::Time(v)
    }
}

impl From<Unknown> for DtsValue {
    fn from(v: Unknown) -> Self {
        DtsValue::Unknown(v)
    }
}

impl<T: Into<DtsValue>> From<Field<T>> for DtsValue {
    fn from(field: Field<T>) -> Self {
        match field {
            Field::Known(v) => v.into(),
            Field::Unknown(u) => DtsValue::Unknown(u),
        }
    }
}
