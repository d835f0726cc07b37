//! Error types for lexing, parsing, compilation, and evaluation.
//!
//! [`ParseError`] covers everything detected before a formula can run
//! (lexical mistakes, syntax errors, compile-time resource limits).
//! [`EvalError`] covers runtime failures (arithmetic, name binding, VM
//! resource limits). [`Error`] wraps both for the public entry points.

use thiserror::Error;

/// Errors detected while lexing, parsing, or compiling an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Found a character the language does not use.
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    /// A lone `=`, `&`, or `|`. Assignment and bitwise operators are
    /// intentionally unsupported; only `==`, `&&`, and `||` exist.
    #[error("unexpected '{0}', did you mean '{0}{0}'?")]
    LoneOperator(char),
    /// A numeric literal that failed to parse as a float.
    #[error("malformed number literal")]
    MalformedNumber,
    /// Found a valid token in a position where it makes no sense.
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
    /// The expression ended in the middle of a production.
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    /// An opening `(` without its matching `)`.
    #[error("expected closing ')'")]
    MissingClosingParen,
    /// A `?` without its matching `:`.
    #[error("expected ':' in conditional expression")]
    MissingColon,
    /// A call with more arguments than the engine supports.
    #[error("too many arguments in call to '{name}' (limit is {max})")]
    TooManyArguments { name: String, max: usize },
    /// Source text longer than the engine accepts.
    #[error("expression is too long ({len} bytes, limit is {max})")]
    ExpressionTooLong { len: usize, max: usize },
    /// Grammar nesting deeper than the engine accepts.
    #[error("expression is too deeply nested (limit is {max})")]
    TooDeeplyNested { max: usize },
    /// The compiler would emit more instructions than a formula may hold.
    #[error("formula is too complex (instruction limit is {max})")]
    TooComplex { max: usize },
}

/// Errors raised while evaluating or executing an expression, or while
/// mutating a [`Context`](crate::Context).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The expression references a variable the context does not hold.
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),
    /// The expression calls a name that is neither a custom function nor a
    /// builtin.
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    /// A function was called with the wrong number of arguments.
    #[error("function '{name}' expects {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: String,
        got: usize,
    },
    /// Division by exactly zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Modulo by exactly zero.
    #[error("modulo by zero")]
    ModuloByZero,
    /// An argument outside a builtin's input domain (e.g. `sqrt(-1)`).
    #[error("domain error in '{name}': {details}")]
    Domain { name: String, details: String },
    /// A custom function reported a failure.
    #[error("function '{name}' failed: {message}")]
    FunctionFailed { name: String, message: String },
    /// The context's variable table is full.
    #[error("too many variables (limit is {max})")]
    TooManyVariables { max: usize },
    /// The context's custom-function table is full.
    #[error("too many custom functions (limit is {max})")]
    TooManyFunctions { max: usize },
    /// The VM operand stack exceeded its fixed depth.
    #[error("operand stack overflow")]
    StackOverflow,
    /// An instruction needed more operands than the stack holds.
    #[error("operand stack underflow")]
    StackUnderflow,
    /// Execution finished with a stack depth other than one.
    #[error("invalid expression: malformed instruction sequence")]
    InvalidStack,
}

/// Any failure an `eval`/`compile`/`exec` call can produce.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
