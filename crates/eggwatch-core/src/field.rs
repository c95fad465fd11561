//! Typed stand-ins for feed values that are absent or could not be coerced.
//!
//! Scanner feeds omit fields freely. Instead of a shared null, every value
//! of an event is either [`Field::Known`] or [`Field::Unknown`], where the
//! [`Unknown`] variant carries the display width the templates expect for
//! the placeholder. For logic purposes all widths mean the same thing:
//! "we don't know".

use serde::{Serialize, Serializer};
use std::fmt;

/// Placeholder for a missing value, sized for the slot it is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unknown {
    /// Numeric and one-glyph fields (`"?"`).
    Tiny,
    /// Short strings such as distances (`"???"`).
    Small,
    /// Names, descriptions and other regular strings (`"unknown"`).
    Regular,
}

impl Unknown {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Unknown::Tiny => "?",
            Unknown::Small => "???",
            Unknown::Regular => "unknown",
        }
    }

    /// Returns `true` if `text` is one of the sentinel renderings.
    #[must_use]
    pub fn is_sentinel(text: &str) -> bool {
        matches!(text, "?" | "???" | "unknown")
    }
}

impl fmt::Display for Unknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Unknown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A value that is either known or marked with an [`Unknown`] sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<T> {
    Known(T),
    Unknown(Unknown),
}

impl<T> Field<T> {
    /// Wraps an optional value, substituting `absent` for `None`.
    #[must_use]
    pub fn from_option(value: Option<T>, absent: Unknown) -> Self {
        match value {
            Some(v) => Field::Known(v),
            None => Field::Unknown(absent),
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Field::Known(_))
    }

    #[must_use]
    pub const fn known(&self) -> Option<&T> {
        match self {
            Field::Known(v) => Some(v),
            Field::Unknown(_) => None,
        }
    }

    #[must_use]
    pub fn into_known(self) -> Option<T> {
        match self {
            Field::Known(v) => Some(v),
            Field::Unknown(_) => None,
        }
    }

    #[must_use]
    pub const fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Known(v) => Field::Known(v),
            Field::Unknown(u) => Field::Unknown(*u),
        }
    }

    /// Transforms a known value; an unknown one keeps its sentinel.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Field::Known(v) => Field::Known(f(v)),
            Field::Unknown(u) => Field::Unknown(u),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Field<U>) -> Field<U> {
        match self {
            Field::Known(v) => f(v),
            Field::Unknown(u) => Field::Unknown(u),
        }
    }

    /// Like [`Field::map`], but an unknown value is re-marked with `absent`.
    pub fn map_or_unknown<U>(self, absent: Unknown, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Field::Known(v) => Field::Known(f(v)),
            Field::Unknown(_) => Field::Unknown(absent),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.into_known().unwrap_or(default)
    }
}

impl Field<String> {
    /// The known text, or an empty string for conditional template blocks.
    #[must_use]
    pub fn or_empty(&self) -> &str {
        match self {
            Field::Known(s) => s,
            Field::Unknown(_) => "",
        }
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Known(v) => v.fmt(f),
            Field::Unknown(u) => u.fmt(f),
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Known(v) => v.serialize(serializer),
            Field::Unknown(u) => u.serialize(serializer),
        }
    }
}
