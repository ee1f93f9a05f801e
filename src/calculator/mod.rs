//! Arithmetic evaluation
//!
//! Two stateless evaluators live here:
//! - [`evaluate_equation`] parses and evaluates a flat infix string
//! - [`calculate`] folds a named operation over a list of operands
//!
//! Neither keeps state between calls, so both are safe to call from any
//! number of request handlers at once.

mod equation;
mod operand;
mod operation;

pub use equation::evaluate_equation;
pub use operand::{is_blank, Operand};
pub use operation::{calculate, OperandList, Operation, OperationRequest};
