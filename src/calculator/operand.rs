//! Operand values accepted by the operation evaluator

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

/// A single operand as received at the API boundary.
///
/// Only JSON numbers are numeric. Booleans, strings, null, arrays and objects
/// are kept as [`Operand::Invalid`] so the evaluator can reject them with a
/// proper error instead of the decoder failing first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Operand {
    /// Integral JSON number
    Integer(i64),
    /// Any other JSON number
    Float(f64),
    /// Non-numeric JSON value
    Invalid(JsonValue),
}

impl Operand {
    /// Numeric value of the operand, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Operand::Integer(n) => Some(*n as f64),
            Operand::Float(n) => Some(*n),
            Operand::Invalid(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Operand::Invalid(_))
    }
}

/// Whether a JSON value counts as absent: null, `false`, zero, or an empty
/// string, array or object
pub fn is_blank(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !b,
        JsonValue::Number(n) => n.as_f64() == Some(0.0),
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(items) => items.is_empty(),
        JsonValue::Object(map) => map.is_empty(),
    }
}

impl From<JsonValue> for Operand {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Operand::Integer(i),
                (None, Some(f)) => Operand::Float(f),
                _ => Operand::Invalid(JsonValue::Number(n)),
            },
            other => Operand::Invalid(other),
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

impl<'de> Deserialize<'de> for Operand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonValue::deserialize(deserializer).map(Operand::from)
    }
}
