//! Trigonometric builtins. Angles are radians.

use crate::error::EvalError;
use crate::functions::domain;

pub(super) fn sin(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].sin())
}

pub(super) fn cos(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].cos())
}

pub(super) fn tan(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].tan())
}

pub(super) fn asin(args: &[f64]) -> Result<f64, EvalError> {
    if args[0].abs() > 1.0 {
        return Err(domain("asin", "input outside [-1, 1]"));
    }
    Ok(args[0].asin())
}

pub(super) fn acos(args: &[f64]) -> Result<f64, EvalError> {
    if args[0].abs() > 1.0 {
        return Err(domain("acos", "input outside [-1, 1]"));
    }
    Ok(args[0].acos())
}

pub(super) fn atan(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].atan())
}

/// `atan2(y, x)`.
pub(super) fn atan2(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].atan2(args[1]))
}
