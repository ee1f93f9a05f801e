//! Error handling utilities

use crate::error::{describe_error_code, format_error_code};
use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// A [`CalcError`](crate::error::CalcError) anywhere in the chain is shown
/// with its error code and exits with its own status. Anything else exits
/// with 1. With `verbose >= 1` the full error chain is printed as well.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {:#}", error);

    let exit_code = exit_code_for(&error);
    match find_calc_error(&error) {
        Some(calc_err) => eprintln!("Error: {}", calc_err.user_message()),
        None => eprintln!("Error: {error}"),
    }

    if verbose >= 1 {
        if let Some(calc_err) = find_calc_error(&error) {
            eprintln!(
                "\n{}: {}",
                format_error_code(calc_err.code()),
                describe_error_code(calc_err.code())
            );
        }
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code)
}

/// Exit status for an error: the evaluator's status if one caused it, else 1
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    find_calc_error(error).map_or(1, |e| e.exit_code())
}

fn find_calc_error(error: &anyhow::Error) -> Option<&crate::error::CalcError> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<crate::error::CalcError>())
}
