use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, format_error_code, ErrorCode};

/// Failures produced by the equation and operation evaluators.
///
/// Every variant is an expected, caller-recoverable condition. The `Display`
/// strings are part of the HTTP contract and must not change.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid operator: {0}")]
    InvalidOperator(char),

    #[error("Invalid number '{token}' at position {position}")]
    MalformedNumber { token: String, position: usize },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid expression: requires operation and at least two numbers")]
    InvalidExpression,

    #[error("All values must be numbers")]
    NonNumericOperand,

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

/// Discriminant of [`CalcError`], for callers that dispatch on the failure
/// class rather than its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidOperator,
    MalformedNumber,
    DivisionByZero,
    InvalidExpression,
    NonNumericOperand,
    UnsupportedOperation,
}

impl CalcError {
    /// Create a malformed number error for the token found at `position`
    pub fn malformed_number(token: impl Into<String>, position: usize) -> Self {
        Self::MalformedNumber {
            token: token.into(),
            position,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidOperator(_) => ErrorKind::InvalidOperator,
            Self::MalformedNumber { .. } => ErrorKind::MalformedNumber,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::InvalidExpression => ErrorKind::InvalidExpression,
            Self::NonNumericOperand => ErrorKind::NonNumericOperand,
            Self::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
        }
    }

    /// Get the registry code for this error
    pub fn code(&self) -> u16 {
        match self.kind() {
            ErrorKind::InvalidOperator => ErrorCode::EQUATION_INVALID_OPERATOR,
            ErrorKind::MalformedNumber => ErrorCode::EQUATION_MALFORMED_NUMBER,
            ErrorKind::DivisionByZero => ErrorCode::ARITH_DIVISION_BY_ZERO,
            ErrorKind::InvalidExpression => ErrorCode::OPERATION_INVALID_EXPRESSION,
            ErrorKind::NonNumericOperand => ErrorCode::OPERATION_NON_NUMERIC_OPERAND,
            ErrorKind::UnsupportedOperation => ErrorCode::OPERATION_UNSUPPORTED,
        }
    }

    /// Get the process exit code for this error
    ///
    /// All evaluator failures are bad input, so they share the argument
    /// error status.
    pub fn exit_code(&self) -> i32 {
        2
    }

    /// Get a user-facing message, prefixed with the error code
    pub fn user_message(&self) -> String {
        format!("[{}] {}", format_error_code(self.code()), self)
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
