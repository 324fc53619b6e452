//! Metadata value model.
//!
//! Metadata values are a closed variant over exactly three scalar
//! classes: string, number, boolean. Keeping the set closed makes filter
//! equality well-defined.
//!
//! ## Equality Rules
//!
//! - Different types are NEVER equal (no type coercion)
//! - `Number(3.0)` != `String("3")`
//! - Numbers use IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A document's metadata: string keys mapped to scalar values.
pub type Metadata = BTreeMap<String, Scalar>;

/// A metadata scalar value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    /// UTF-8 string.
    String(String),
    /// 64-bit IEEE-754 floating point. Integers are widened on the way in.
    Number(f64),
    /// Boolean.
    Bool(bool),
}

impl Scalar {
    /// Returns the type name as a string (for error messages).
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::String(_) => "String",
            Scalar::Number(_) => "Number",
            Scalar::Bool(_) => "Bool",
        }
    }

    /// Try to get as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as f64.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert a JSON value into a scalar.
    ///
    /// Arrays, objects and null have no scalar form and yield `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Scalar> {
        match value {
            serde_json::Value::String(s) => Some(Scalar::String(s.clone())),
            serde_json::Value::Number(n) => n.as_f64().map(Scalar::Number),
            serde_json::Value::Bool(b) => Some(Scalar::Bool(*b)),
            _ => None,
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value as f64)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}
