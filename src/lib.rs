//! # calcd
//!
//! A small arithmetic service. It evaluates flat infix equations such as
//! `10*4+3-2` and named operations folded over a list of numbers, and serves
//! both over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! calcd serve --port 5000
//! calcd eval "2+3*4"
//! calcd calc divide 20 2 2
//! ```
//!
//! ## Modules
//!
//! - `app` - Configuration, logging, fatal error handling and server startup
//! - `calculator` - Equation and operation evaluators
//! - `error` - Evaluator error taxonomy and error codes
//! - `greeting` - Greeting messages
//! - `server` - axum router and HTTP handlers
pub mod app;
pub mod calculator;
pub mod error;
pub mod greeting;
pub mod server;

pub use calculator::{calculate, evaluate_equation, Operand, Operation, OperationRequest};
pub use error::{CalcError, ErrorKind};
