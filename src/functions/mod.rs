//! The fixed builtin function table.
//!
//! Builtins are name-addressed and always available unless shadowed by a
//! custom function registered on the [`Context`](crate::Context). Each
//! enforces a fixed arity and, where applicable, its input domain. Domain
//! violations are errors, never silent NaN propagation.

mod basic;
mod exponential;
mod interpolate;
mod rounding;
mod trig;

use crate::context::Arity;
use crate::error::EvalError;
use crate::limits;

type Builtin = fn(&[f64]) -> Result<f64, EvalError>;

/// Whether `name` is one of the builtin functions.
pub fn is_builtin(name: &str) -> bool {
    lookup(name).is_some()
}

/// Invokes a builtin by name. `None` when no builtin has that name.
pub(crate) fn call_builtin(name: &str, args: &[f64]) -> Option<Result<f64, EvalError>> {
    let (arity, func) = lookup(name)?;
    Some(arity.check(name, args.len()).and_then(|()| func(args)))
}

pub(crate) fn domain(name: &str, details: &str) -> EvalError {
    EvalError::Domain {
        name: name.to_string(),
        details: details.to_string(),
    }
}

fn lookup(name: &str) -> Option<(Arity, Builtin)> {
    Some(match name {
        "min" => (Arity::between(2, limits::MAX_CALL_ARGS), basic::min),
        "max" => (Arity::between(2, limits::MAX_CALL_ARGS), basic::max),
        "abs" => (Arity::exactly(1), basic::abs),
        "sign" => (Arity::exactly(1), basic::sign),
        "if" => (Arity::exactly(3), basic::select),

        "clamp" => (Arity::exactly(3), interpolate::clamp),
        "lerp" => (Arity::exactly(3), interpolate::lerp),
        "step" => (Arity::exactly(2), interpolate::step),
        "smoothstep" => (Arity::exactly(3), interpolate::smoothstep),

        "floor" => (Arity::exactly(1), rounding::floor),
        "ceil" => (Arity::exactly(1), rounding::ceil),
        "round" => (Arity::exactly(1), rounding::round),
        "trunc" => (Arity::exactly(1), rounding::trunc),

        "sqrt" => (Arity::exactly(1), exponential::sqrt),
        "pow" => (Arity::exactly(2), exponential::pow),
        "exp" => (Arity::exactly(1), exponential::exp),
        "log" => (Arity::exactly(1), exponential::log),
        "log2" => (Arity::exactly(1), exponential::log2),
        "log10" => (Arity::exactly(1), exponential::log10),

        "sin" => (Arity::exactly(1), trig::sin),
        "cos" => (Arity::exactly(1), trig::cos),
        "tan" => (Arity::exactly(1), trig::tan),
        "asin" => (Arity::exactly(1), trig::asin),
        "acos" => (Arity::exactly(1), trig::acos),
        "atan" => (Arity::exactly(1), trig::atan),
        "atan2" => (Arity::exactly(2), trig::atan2),

        _ => return None,
    })
}
