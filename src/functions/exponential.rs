//! Power and logarithm builtins. Out-of-domain input is an error, not NaN.

use crate::error::EvalError;
use crate::functions::domain;

pub(super) fn sqrt(args: &[f64]) -> Result<f64, EvalError> {
    if args[0] < 0.0 {
        return Err(domain("sqrt", "negative input"));
    }
    Ok(args[0].sqrt())
}

pub(super) fn pow(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].powf(args[1]))
}

pub(super) fn exp(args: &[f64]) -> Result<f64, EvalError> {
    Ok(args[0].exp())
}

/// Natural logarithm; `log2`/`log10` are the explicit-base forms.
pub(super) fn log(args: &[f64]) -> Result<f64, EvalError> {
    if args[0] <= 0.0 {
        return Err(domain("log", "non-positive input"));
    }
    Ok(args[0].ln())
}

pub(super) fn log2(args: &[f64]) -> Result<f64, EvalError> {
    if args[0] <= 0.0 {
        return Err(domain("log2", "non-positive input"));
    }
    Ok(args[0].log2())
}

pub(super) fn log10(args: &[f64]) -> Result<f64, EvalError> {
    if args[0] <= 0.0 {
        return Err(domain("log10", "non-positive input"));
    }
    Ok(args[0].log10())
}
