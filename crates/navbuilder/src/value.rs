// File: src/value.rs
// Purpose: Argument values used for defaults and route filling

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::NavType;

/// A value bound to a navigation argument.
///
/// Used both for declared default values and for the bindings passed to
/// [`Nav::build_route`](crate::Nav::build_route). `Null` is a real value: a
/// nullable argument may legitimately default to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavValue {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    String(String),
}

impl NavValue {
    pub fn is_null(&self) -> bool {
        matches!(self, NavValue::Null)
    }

    /// Borrows the string payload, if this is a `String`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            NavValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Reinterprets a number read back from JSON as the kind `nav_type`
    /// declares.
    ///
    /// Untagged numbers come back as the narrowest variant that holds them,
    /// so a `long` argument's `5` arrives as `Int(5)`. Anything that is not a
    /// number, or has no declared kind, is returned unchanged.
    pub fn conform_to(self, nav_type: Option<NavType>) -> Self {
        match (self, nav_type) {
            (NavValue::Int(n), Some(NavType::Long)) => NavValue::Long(i64::from(n)),
            (NavValue::Int(n), Some(NavType::Float)) => NavValue::Float(n as f32),
            (NavValue::Long(n), Some(NavType::Float)) => NavValue::Float(n as f32),
            (value, _) => value,
        }
    }

    /// Widens `Int` and `Long` payloads to `i64`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NavValue::Int(n) => Some(i64::from(*n)),
            NavValue::Long(n) => Some(*n),
            _ => None,
        }
    }
}

/// Renders the form that gets written into a route.
///
/// `Null` renders as `null`; whole floats keep their trailing `.0`.
impl fmt::Display for NavValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavValue::Null => f.write_str("null"),
            NavValue::Bool(b) => write!(f, "{}", b),
            NavValue::Int(n) => write!(f, "{}", n),
            NavValue::Long(n) => write!(f, "{}", n),
            NavValue::Float(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{:.1}", n),
            NavValue::Float(n) => write!(f, "{}", n),
            NavValue::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for NavValue {
    fn from(b: bool) -> Self {
        NavValue::Bool(b)
    }
}

impl From<i32> for NavValue {
    fn from(n: i32) -> Self {
        NavValue::Int(n)
    }
}

impl From<i64> for NavValue {
    fn from(n: i64) -> Self {
        NavValue::Long(n)
    }
}

impl From<f32> for NavValue {
    fn from(n: f32) -> Self {
        NavValue::Float(n)
    }
}

/// Narrows to `f32`, the width the framework stores floats in
impl From<f64> for NavValue {
    fn from(n: f64) -> Self {
        NavValue::Float(n as f32)
    }
}

impl From<u8> for NavValue {
    fn from(n: u8) -> Self {
        NavValue::Int(i32::from(n))
    }
}

impl From<i16> for NavValue {
    fn from(n: i16) -> Self {
        NavValue::Int(i32::from(n))
    }
}

impl From<u16> for NavValue {
    fn from(n: u16) -> Self {
        NavValue::Int(i32::from(n))
    }
}

impl From<u32> for NavValue {
    fn from(n: u32) -> Self {
        NavValue::Long(i64::from(n))
    }
}

impl From<String> for NavValue {
    fn from(s: String) -> Self {
        NavValue::String(s)
    }
}

impl From<&String> for NavValue {
    fn from(s: &String) -> Self {
        NavValue::String(s.clone())
    }
}

impl From<&str> for NavValue {
    fn from(s: &str) -> Self {
        NavValue::String(s.to_string())
    }
}

impl<T: Into<NavValue>> From<Option<T>> for NavValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(NavValue::Null)
    }
}
