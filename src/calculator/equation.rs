//! Flat infix equation evaluation
//!
//! Multiplication and division are folded into the accumulator as soon as
//! they are scanned; addition and subtraction are deferred to a second pass
//! over the accumulated terms. No expression tree is built.

use crate::error::{CalcError, Result};
use tracing::{debug, trace};

/// Operators resolved in the second pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdditiveOp {
    Add,
    Subtract,
}

/// Cursor over a whitespace-free equation
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn is_exhausted(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Read a maximal run of ASCII digits and dots and parse it as a number
    fn read_number(&mut self) -> Result<f64> {
        let start = self.pos;
        let len = self.input[start..]
            .bytes()
            .take_while(|b| b.is_ascii_digit() || *b == b'.')
            .count();
        self.pos += len;

        let token = &self.input[start..self.pos];
        token
            .parse::<f64>()
            .map_err(|_| CalcError::malformed_number(token, start))
    }

    /// Read one operator character
    fn read_operator(&mut self) -> Result<char> {
        // Only called while input remains
        let op = self.input[self.pos..].chars().next().unwrap_or_default();
        self.pos += op.len_utf8();
        match op {
            '+' | '-' | '*' | '/' => Ok(op),
            other => Err(CalcError::InvalidOperator(other)),
        }
    }
}

/// Evaluate a flat infix equation such as `"10*4+3-2"`.
///
/// Supports `+ - * /` over non-negative decimal literals, with `*` and `/`
/// binding tighter than `+` and `-` and both tiers left-associative.
/// Whitespace anywhere in the input is ignored.
///
/// # Errors
///
/// - [`CalcError::MalformedNumber`] when a number is expected but the run of
///   digits is empty or unparsable (empty input, `2++2`, `2+`, `1.2.3`)
/// - [`CalcError::InvalidOperator`] when an operator position holds anything
///   other than `+ - * /`
/// - [`CalcError::DivisionByZero`] when any divisor is exactly zero
pub fn evaluate_equation(input: &str) -> Result<f64> {
    let equation: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    debug!(equation = %equation, "evaluating equation");

    let mut scanner = Scanner::new(&equation);
    let mut terms = vec![scanner.read_number()?];
    let mut pending = Vec::new();

    while !scanner.is_exhausted() {
        let op = scanner.read_operator()?;
        let num = scanner.read_number()?;
        trace!(%op, num, "scanned operand");

        match op {
            '*' | '/' => {
                let prev = terms.pop().unwrap_or_default();
                let value = if op == '*' {
                    prev * num
                } else {
                    if num == 0.0 {
                        return Err(CalcError::DivisionByZero);
                    }
                    prev / num
                };
                terms.push(value);
            }
            '+' => {
                terms.push(num);
                pending.push(AdditiveOp::Add);
            }
            _ => {
                terms.push(num);
                pending.push(AdditiveOp::Subtract);
            }
        }
    }

    debug_assert_eq!(terms.len(), pending.len() + 1);

    let result = pending
        .iter()
        .zip(&terms[1..])
        .fold(terms[0], |acc, (op, term)| match op {
            AdditiveOp::Add => acc + term,
            AdditiveOp::Subtract => acc - term,
        });

    debug!(result, "equation evaluated");
    Ok(result)
}
