//! An embeddable arithmetic formula engine.
//!
//! Hosts author runtime-configurable numeric formulas ("10 + level * 2")
//! bound to named variables and evaluate them against a [`Context`]. Two
//! interchangeable backends share one grammar: a tree-walking interpreter
//! ([`Context::eval`]) and a bytecode compiler plus stack VM
//! ([`Context::compile`] / [`Context::exec`]) for formulas that run many
//! times.
//!
//! ```
//! use formulon_rs::Context;
//!
//! let mut context = Context::new();
//! context.set_var("level", 7.0).unwrap();
//!
//! // One-off evaluation.
//! assert_eq!(context.eval("10 + level * 2").unwrap(), 24.0);
//!
//! // Compile once, execute many times.
//! let formula = context.compile("clamp(level * 3, 0, 20)").unwrap();
//! assert_eq!(context.exec(&formula).unwrap(), 20.0);
//! context.set_var("level", 2.0).unwrap();
//! assert_eq!(context.exec(&formula).unwrap(), 6.0);
//! ```
//!
//! Everything is a 64-bit float; comparisons and logicals yield 0.0/1.0.
//! `&&`, `||`, and `?:` are NOT short-circuiting: every operand and branch
//! evaluates before the result is selected, so cost is deterministic and an
//! error anywhere in the expression always surfaces. Division and modulo by
//! zero and out-of-domain builtin input are errors, never silent
//! NaN/infinity.
//!
//! All fallible operations return a [`Result`]; the [`Context`] also keeps
//! the last error message queryable via [`Context::last_error`].

pub mod ast;
pub mod bytecode;
pub mod cache;
pub mod context;
pub mod error;
pub mod format;
pub mod functions;
pub mod lexer;
pub mod limits;

pub use bytecode::{Compiler, Formula};
pub use cache::FormulaCache;
pub use context::{Arity, Context, NativeFn, ProfilerHook};
pub use error::{Error, EvalError, ParseError};
pub use format::format_number;

/// One-shot evaluation against a fresh context seeded with the well-known
/// constants (`pi`, `e`, `tau`, `phi`).
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    let mut context = Context::with_constants();
    context.eval(expression)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_one_shot() {
        assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
        assert!((evaluate("cos(2 * pi)").unwrap() - 1.0).abs() < 1e-12);
        assert!(evaluate("5 / 0").is_err());
    }
}
