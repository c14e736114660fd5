//! Arithmetic failures raised while evaluating calculator input.

use thiserror::Error;

/// Why an arithmetic step could not produce a displayable number.
///
/// The engine never surfaces these to the view; they are turned into the
/// `"Error"` display and the error phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("{0} is undefined for this input")]
    Domain(&'static str),
    #[error("result is out of range")]
    Overflow,
}
