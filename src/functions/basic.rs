//! Selection and magnitude builtins.

use crate::error::EvalError;

/// Smallest of two or more arguments.
pub(super) fn min(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Largest of two or more arguments.
pub(super) fn max(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

pub(super) fn abs(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].abs())
}

/// -1, 0, or 1 by the sign of the argument.
pub(super) fn sign(args: &[f64]) -> Result<f64, EvalError> {
    let x = args[0];
    // f64::signum maps 0.0 to 1.0; this builtin keeps zero at zero.
    Ok(if x == 0.0 { 0.0 } else { x.signum() })
}

/// `if(condition, a, b)`: `a` when the condition is non-zero, else `b`.
/// Both values are already evaluated by the time the call happens.
pub(super) fn select(args: &[f64]) -> Result<f64, EvalError> {
    Ok(if args[0] != 0.0 { args[1] } else { args[2] })
}
