//! Rounding builtins.

use crate::error::EvalError;

pub(super) fn floor(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].floor())
}

pub(super) fn ceil(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].ceil())
}

pub(super) fn round(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].round())
}

pub(super) fn trunc(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].trunc())
}
