/// Error code registry for calcd
///
/// Error codes are organized by category:
/// - 1000-1999: Equation parsing errors
/// - 2000-2999: Operation request errors
/// - 3000-3999: Arithmetic errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Equation errors (1000-1999)
    pub const EQUATION_INVALID_OPERATOR: u16 = 1001;
    pub const EQUATION_MALFORMED_NUMBER: u16 = 1002;

    // Operation errors (2000-2999)
    pub const OPERATION_INVALID_EXPRESSION: u16 = 2001;
    pub const OPERATION_NON_NUMERIC_OPERAND: u16 = 2002;
    pub const OPERATION_UNSUPPORTED: u16 = 2003;

    // Arithmetic errors (3000-3999)
    pub const ARITH_DIVISION_BY_ZERO: u16 = 3001;

    // Other errors (9000-9999)
    pub const OTHER_INTERNAL_ERROR: u16 = 9004;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1001 => "Equation contains a character that is not a supported operator",
        1002 => "Equation contains an empty or unparsable number",

        2001 => "Operation request is missing its operation or has fewer than two numbers",
        2002 => "Operation request contains a non-numeric operand",
        2003 => "Operation is not one of add, subtract, multiply or divide",

        3001 => "Division by zero",

        9004 => "Internal error",

        _ => "Unknown error code",
    }
}

/// Render a code the way it appears in responses, e.g. `E3001`
pub fn format_error_code(code: u16) -> String {
    format!("E{code:04}")
}
