//! Resource bounds shared by the parser, compiler, VM, and context.
//!
//! The limits are a deliberate circuit breaker against pathological or
//! hostile input: worst-case cost stays bounded and predictable. Exceeding a
//! limit is always a dedicated error, never silent growth or truncation of
//! work already done.

/// Maximum byte length of a variable or function name. Longer identifiers
/// are silently truncated by the lexer (and by `Context::set_var`, so a
/// truncated identifier still finds its binding).
pub const MAX_NAME_LEN: usize = 64;

/// Maximum byte length of an expression accepted by `eval` and `compile`.
pub const MAX_EXPRESSION_LEN: usize = 1024;

/// Maximum nesting depth of the expression grammar (parentheses, ternary
/// branches, call arguments, chained unary operators).
pub const MAX_NESTING_DEPTH: usize = 64;

/// Maximum number of arguments in a single function call.
pub const MAX_CALL_ARGS: usize = 16;

/// Maximum number of instructions in a compiled [`Formula`](crate::Formula).
pub const MAX_INSTRUCTIONS: usize = 256;

/// Maximum operand stack depth of the bytecode VM.
pub const MAX_STACK: usize = 64;

/// Maximum number of variables a [`Context`](crate::Context) may hold.
pub const MAX_VARIABLES: usize = 256;

/// Maximum number of custom functions a [`Context`](crate::Context) may hold.
pub const MAX_CUSTOM_FUNCTIONS: usize = 64;
