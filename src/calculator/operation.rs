//! Named operations folded over a list of operands

use super::operand::{is_blank, Operand};
use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Supported binary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Apply the operation to a running result
    fn apply(&self, acc: f64, rhs: f64) -> Result<f64> {
        match self {
            Operation::Add => Ok(acc + rhs),
            Operation::Subtract => Ok(acc - rhs),
            Operation::Multiply => Ok(acc * rhs),
            Operation::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(acc / rhs)
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            other => Err(CalcError::UnsupportedOperation(other.to_string())),
        }
    }
}

/// The `numbers` field of a request: a list of operands, or any other JSON value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperandList {
    List(Vec<Operand>),
    Other(JsonValue),
}

impl OperandList {
    /// Number of entries, for values that have a length
    pub fn entry_count(&self) -> Option<usize> {
        match self {
            OperandList::List(operands) => Some(operands.len()),
            OperandList::Other(JsonValue::Array(items)) => Some(items.len()),
            OperandList::Other(JsonValue::String(s)) => Some(s.chars().count()),
            OperandList::Other(JsonValue::Object(map)) => Some(map.len()),
            OperandList::Other(_) => None,
        }
    }

    /// Numeric value of every entry, or `None` if any entry is not a number.
    ///
    /// The entries of a string or object are characters and keys, so those
    /// never qualify.
    pub fn values(&self) -> Option<Vec<f64>> {
        match self {
            OperandList::List(operands) => operands.iter().map(Operand::as_f64).collect(),
            OperandList::Other(JsonValue::Array(items)) => items
                .iter()
                .map(|item| Operand::from(item.clone()).as_f64())
                .collect(),
            OperandList::Other(_) => None,
        }
    }
}

impl From<Vec<Operand>> for OperandList {
    fn from(operands: Vec<Operand>) -> Self {
        OperandList::List(operands)
    }
}

/// A structured calculation request, e.g. `{"operation": "add", "numbers": [5, 3]}`
///
/// Fields keep whatever JSON was sent so wrong types are judged by
/// [`calculate`] rather than by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationRequest {
    #[serde(default)]
    pub operation: Option<JsonValue>,
    #[serde(default)]
    pub numbers: Option<OperandList>,
}

impl OperationRequest {
    pub fn new(operation: impl Into<String>, numbers: Vec<Operand>) -> Self {
        Self {
            operation: Some(JsonValue::String(operation.into())),
            numbers: Some(numbers.into()),
        }
    }
}

/// Reduce the request's operands left to right with its named operation.
///
/// Validation happens before any arithmetic, in this order: the request shape
/// ([`CalcError::InvalidExpression`]), operand types
/// ([`CalcError::NonNumericOperand`]), then the operation name
/// ([`CalcError::UnsupportedOperation`]). A zero divisor stops the fold with
/// [`CalcError::DivisionByZero`].
pub fn calculate(request: &OperationRequest) -> Result<f64> {
    let name = request
        .operation
        .as_ref()
        .filter(|op| !is_blank(op))
        .ok_or(CalcError::InvalidExpression)?;

    let numbers = request
        .numbers
        .as_ref()
        .filter(|numbers| numbers.entry_count().is_some_and(|len| len >= 2))
        .ok_or(CalcError::InvalidExpression)?;

    let values = numbers.values().ok_or(CalcError::NonNumericOperand)?;

    let operation: Operation = match name {
        JsonValue::String(name) => name.parse()?,
        other => return Err(CalcError::UnsupportedOperation(other.to_string())),
    };
    debug!(%operation, count = values.len(), "calculating");

    values[1..]
        .iter()
        .try_fold(values[0], |acc, &rhs| operation.apply(acc, rhs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn request(value: serde_json::Value) -> OperationRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_add() {
        let req = request(json!({"operation": "add", "numbers": [5, 3, 2]}));
        assert_eq!(calculate(&req).unwrap(), 10.0);
    }

    #[test]
    fn test_subtract() {
        let req = request(json!({"operation": "subtract", "numbers": [10, 3, 2]}));
        assert_eq!(calculate(&req).unwrap(), 5.0);
    }

    #[test]
    fn test_multiply() {
        let req = request(json!({"operation": "multiply", "numbers": [2, 3, 4]}));
        assert_eq!(calculate(&req).unwrap(), 24.0);
    }

    #[test]
    fn test_divide() {
        let req = request(json!({"operation": "divide", "numbers": [20, 2, 2]}));
        assert_eq!(calculate(&req).unwrap(), 5.0);

        let req = request(json!({"operation": "divide", "numbers": [24, 2, 3]}));
        assert_eq!(calculate(&req).unwrap(), 4.0);
    }

    #[test]
    fn test_mixed_integer_and_float_operands() {
        let req = request(json!({"operation": "add", "numbers": [1, 0.5, -2]}));
        assert_eq!(calculate(&req).unwrap(), -0.5);
    }

    #[test]
    fn test_divide_by_zero() {
        let req = request(json!({"operation": "divide", "numbers": [10, 0]}));
        let err = calculate(&req).unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn test_divide_by_zero_late_in_list() {
        let req = request(json!({"operation": "divide", "numbers": [10, 2, 0.0, 5]}));
        assert_eq!(calculate(&req), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_zero_is_fine_outside_divide() {
        let req = request(json!({"operation": "multiply", "numbers": [10, 0]}));
        assert_eq!(calculate(&req).unwrap(), 0.0);
    }

    #[test]
    fn test_unsupported_operation() {
        let req = request(json!({"operation": "invalid", "numbers": [1, 2]}));
        assert_eq!(
            calculate(&req),
            Err(CalcError::UnsupportedOperation("invalid".to_string()))
        );
    }

    #[test]
    fn test_operation_names_are_case_sensitive() {
        let req = request(json!({"operation": "Add", "numbers": [1, 2]}));
        assert_eq!(calculate(&req).unwrap_err().kind(), ErrorKind::UnsupportedOperation);
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            calculate(&request(json!({"operation": "add"}))),
            Err(CalcError::InvalidExpression)
        );
        assert_eq!(
            calculate(&request(json!({}))),
            Err(CalcError::InvalidExpression)
        );
        assert_eq!(
            calculate(&request(json!({"numbers": [1, 2]}))),
            Err(CalcError::InvalidExpression)
        );
    }

    #[test]
    fn test_too_few_numbers_or_empty_operation() {
        assert_eq!(
            calculate(&request(json!({"operation": "add", "numbers": [1]}))),
            Err(CalcError::InvalidExpression)
        );
        assert_eq!(
            calculate(&request(json!({"operation": "add", "numbers": []}))),
            Err(CalcError::InvalidExpression)
        );
        assert_eq!(
            calculate(&request(json!({"operation": "", "numbers": [1, 2]}))),
            Err(CalcError::InvalidExpression)
        );
    }

    #[test]
    fn test_non_numeric_operands() {
        for bad in [json!("3"), json!(true), json!(null), json!([1]), json!({})] {
            let req = request(json!({"operation": "add", "numbers": [1, bad]}));
            assert_eq!(calculate(&req), Err(CalcError::NonNumericOperand));
        }
    }

    #[test]
    fn test_non_string_operation_is_unsupported() {
        let req = request(json!({"operation": 5, "numbers": [1, 2]}));
        assert_eq!(
            calculate(&req),
            Err(CalcError::UnsupportedOperation("5".to_string()))
        );
        assert_eq!(
            calculate(&req).unwrap_err().to_string(),
            "Unsupported operation: 5"
        );

        let req = request(json!({"operation": ["add"], "numbers": [1, 2]}));
        assert_eq!(calculate(&req).unwrap_err().kind(), ErrorKind::UnsupportedOperation);
    }

    #[test]
    fn test_non_string_operation_still_checks_operands_first() {
        let req = request(json!({"operation": 5, "numbers": [1, "x"]}));
        assert_eq!(calculate(&req), Err(CalcError::NonNumericOperand));
    }

    #[test]
    fn test_blank_operation_values() {
        for blank in [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})] {
            let req = request(json!({"operation": blank, "numbers": [1, 2]}));
            assert_eq!(calculate(&req), Err(CalcError::InvalidExpression));
        }
    }

    #[test]
    fn test_numbers_as_string_are_non_numeric() {
        let req = request(json!({"operation": "add", "numbers": "ab"}));
        assert_eq!(calculate(&req), Err(CalcError::NonNumericOperand));

        // One character is too short to be a list of two
        let req = request(json!({"operation": "add", "numbers": "a"}));
        assert_eq!(calculate(&req), Err(CalcError::InvalidExpression));
    }

    #[test]
    fn test_numbers_as_object_are_non_numeric() {
        let req = request(json!({"operation": "add", "numbers": {"a": 1, "b": 2}}));
        assert_eq!(calculate(&req), Err(CalcError::NonNumericOperand));
    }

    #[test]
    fn test_numbers_without_length_are_invalid() {
        for value in [json!(5), json!(true), json!(null), json!(0)] {
            let req = request(json!({"operation": "add", "numbers": value}));
            assert_eq!(calculate(&req), Err(CalcError::InvalidExpression));
        }
    }

    #[test]
    fn test_operand_list_decoding() {
        let req = request(json!({"operation": "add", "numbers": [1, "x"]}));
        assert_eq!(
            req.numbers,
            Some(OperandList::List(vec![
                Operand::Integer(1),
                Operand::Invalid(json!("x")),
            ]))
        );

        let req = request(json!({"operation": "add", "numbers": "ab"}));
        assert_eq!(req.numbers, Some(OperandList::Other(json!("ab"))));
    }

    #[test]
    fn test_validation_order() {
        // Operand types are checked before the operation name
        let req = request(json!({"operation": "pow", "numbers": [1, "2"]}));
        assert_eq!(calculate(&req), Err(CalcError::NonNumericOperand));

        // Shape is checked before operand types
        let req = request(json!({"operation": "pow", "numbers": ["2"]}));
        assert_eq!(calculate(&req), Err(CalcError::InvalidExpression));
    }

    #[test]
    fn test_operation_round_trips_through_str() {
        for op in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ] {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_constructor() {
        let req = OperationRequest::new("add", vec![Operand::from(1.5), Operand::from(2i64)]);
        assert_eq!(calculate(&req).unwrap(), 3.5);
    }
}
