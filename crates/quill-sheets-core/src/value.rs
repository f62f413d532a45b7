//! Scalar values carried by cells, titles, metadata, and template arguments

use crate::attr::{Assign, IntoAssign};
use chrono::NaiveDateTime;
use std::hash::{Hash, Hasher};

/// A scalar value
///
/// All numbers are stored as f64. Dates and times are carried as naive
/// timestamps; interpreting them against a date system is the writer's
/// concern.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// String value
    String(String),
    /// Date/time value
    DateTime(NaiveDateTime),
}

impl Value {
    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a date/time
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

// Hash by discriminant + payload; floats hash by bit pattern. Used by the
// style dedup index, which double-checks equality on hash hits.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => n.to_bits().hash(state),
            Value::String(s) => s.hash(state),
            Value::DateTime(dt) => dt.hash(state),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl IntoAssign<Value> for bool {
    fn into_assign(self) -> Assign<Value> {
        Assign::Set(self.into())
    }
}

impl IntoAssign<Value> for f64 {
    fn into_assign(self) -> Assign<Value> {
        Assign::Set(self.into())
    }
}

impl IntoAssign<Value> for i32 {
    fn into_assign(self) -> Assign<Value> {
        Assign::Set(self.into())
    }
}

impl IntoAssign<Value> for i64 {
    fn into_assign(self) -> Assign<Value> {
        Assign::Set(self.into())
    }
}

impl IntoAssign<Value> for u32 {
    fn into_assign(self) -> Assign<Value> {
        Assign::Set(self.into())
    }
}

impl IntoAssign<Value> for &str {
    fn into_assign(self) -> Assign<Value> {
        Assign::Set(self.into())
    }
}

impl IntoAssign<Value> for String {
    fn into_assign(self) -> Assign<Value> {
        Assign::Set(self.into())
    }
}

impl IntoAssign<Value> for NaiveDateTime {
    fn into_assign(self) -> Assign<Value> {
        Assign::Set(self.into())
    }
}
