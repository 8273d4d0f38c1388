//! Error handling and exit codes.

use pizzaduel_cli::input::ParseError;
use pizzaduel_core::{exit_codes, PizzaError};

/// Map an application error to its process exit code.
#[must_use]
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<PizzaError>().is_some() {
        exit_codes::ERROR_DIMENSION
    } else if err.downcast_ref::<ParseError>().is_some() {
        exit_codes::ERROR_FORMAT
    } else {
        exit_codes::ERROR_CONFIG
    }
}
