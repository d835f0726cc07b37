//! The mutable evaluation environment shared across evaluations.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::ast::{Evaluator, Parser};
use crate::bytecode::{Compiler, Executor, Formula};
use crate::error::{Error, EvalError};
use crate::functions;
use crate::limits;

/// A custom function body: a slice of already-evaluated arguments in, one
/// number out. State travels via closure capture.
pub type NativeFn = Arc<dyn Fn(&[f64]) -> Result<f64, String> + Send + Sync>;

/// A hook invoked around each interpreter evaluation with the source text
/// and the elapsed wall time.
pub type ProfilerHook = Arc<dyn Fn(&str, Duration) + Send + Sync>;

/// How many arguments a function accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Arity {
    min: usize,
    max: Option<usize>,
}

impl Arity {
    /// Exactly `count` arguments.
    pub const fn exactly(count: usize) -> Self {
        Self {
            min: count,
            max: Some(count),
        }
    }

    /// At least `min` arguments, no upper bound (beyond the grammar's
    /// [`limits::MAX_CALL_ARGS`]).
    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    /// Between `min` and `max` arguments inclusive.
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub(crate) fn check(&self, name: &str, got: usize) -> Result<(), EvalError> {
        let fits = got >= self.min && self.max.map_or(true, |max| got <= max);
        if fits {
            Ok(())
        } else {
            Err(EvalError::ArityMismatch {
                name: name.to_string(),
                expected: self.describe(),
                got,
            })
        }
    }

    fn describe(&self) -> String {
        match self.max {
            Some(max) if max == self.min => self.min.to_string(),
            Some(max) => format!("{} to {}", self.min, max),
            None => format!("at least {}", self.min),
        }
    }
}

#[derive(Clone)]
struct CustomFunction {
    arity: Arity,
    func: NativeFn,
}

/// Well-known constants seeded by [`Context::with_constants`] and
/// [`Context::seed_constants`].
const CONSTANTS: [(&str, f64); 4] = [
    ("pi", std::f64::consts::PI),
    ("e", std::f64::consts::E),
    ("tau", std::f64::consts::TAU),
    ("phi", 1.618_033_988_749_895),
];

/// Variable bindings, custom functions, and the last-error slot.
///
/// A `Context` is a plain mutable value: it is not synchronized, and sharing
/// one across threads is not supported. Clone it (cheap for the function
/// table, which shares `Arc`s) to evaluate concurrently.
pub struct Context {
    variables: HashMap<String, f64>,
    functions: HashMap<String, CustomFunction>,
    last_error: Option<String>,
    profiler: Option<ProfilerHook>,
}

impl Context {
    /// An empty context: no variables, no custom functions.
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
            functions: HashMap::new(),
            last_error: None,
            profiler: None,
        }
    }

    /// A context pre-seeded with `pi`, `e`, `tau`, and `phi`.
    pub fn with_constants() -> Self {
        let mut context = Self::new();
        for (name, value) in CONSTANTS {
            context.variables.insert(name.to_string(), value);
        }
        context
    }

    /// Seeds `pi`, `e`, `tau`, and `phi` into an existing context.
    pub fn seed_constants(&mut self) -> Result<(), EvalError> {
        for (name, value) in CONSTANTS {
            self.set_var(name, value)?;
        }
        Ok(())
    }

    /// Binds `name` to `value`, replacing any previous binding.
    ///
    /// Names longer than [`limits::MAX_NAME_LEN`] are truncated, mirroring
    /// the lexer, so a truncated identifier still finds its binding. Fails
    /// only when the table is full.
    pub fn set_var(&mut self, name: &str, value: f64) -> Result<(), EvalError> {
        let name = bounded(name);
        if !self.variables.contains_key(name) && self.variables.len() == limits::MAX_VARIABLES {
            return Err(EvalError::TooManyVariables {
                max: limits::MAX_VARIABLES,
            });
        }
        self.variables.insert(name.to_string(), value);
        Ok(())
    }

    /// The value bound to `name`, or `default` when absent.
    pub fn get_var(&self, name: &str, default: f64) -> f64 {
        self.variables.get(bounded(name)).copied().unwrap_or(default)
    }

    pub fn has_var(&self, name: &str) -> bool {
        self.variables.contains_key(bounded(name))
    }

    /// Removes a binding, returning its value if it existed.
    pub fn remove_var(&mut self, name: &str) -> Option<f64> {
        self.variables.remove(bounded(name))
    }

    pub fn clear_vars(&mut self) {
        self.variables.clear();
    }

    /// Registers a custom function, replacing any existing one with the
    /// same name. A custom function shadows the builtin of the same name.
    pub fn register_function<F>(&mut self, name: &str, arity: Arity, func: F) -> Result<(), EvalError>
    where
        F: Fn(&[f64]) -> Result<f64, String> + Send + Sync + 'static,
    {
        let name = bounded(name);
        if !self.functions.contains_key(name) && self.functions.len() == limits::MAX_CUSTOM_FUNCTIONS
        {
            return Err(EvalError::TooManyFunctions {
                max: limits::MAX_CUSTOM_FUNCTIONS,
            });
        }
        self.functions.insert(
            name.to_string(),
            CustomFunction {
                arity,
                func: Arc::new(func),
            },
        );
        Ok(())
    }

    /// Removes a custom function; any shadowed builtin becomes visible
    /// again. Returns whether the function existed.
    pub fn unregister_function(&mut self, name: &str) -> bool {
        self.functions.remove(bounded(name)).is_some()
    }

    /// Installs a hook invoked around each [`eval`](Context::eval) call.
    pub fn set_profiler<F>(&mut self, hook: F)
    where
        F: Fn(&str, Duration) + Send + Sync + 'static,
    {
        self.profiler = Some(Arc::new(hook));
    }

    pub fn clear_profiler(&mut self) {
        self.profiler = None;
    }

    /// Parses and evaluates `expression` with the tree-walking backend.
    pub fn eval(&mut self, expression: &str) -> Result<f64, Error> {
        let started = Instant::now();
        let result = match Parser::parse(expression) {
            Ok(ast) => Evaluator::new(self).evaluate(&ast).map_err(Error::from),
            Err(error) => Err(Error::from(error)),
        };
        if let Some(hook) = &self.profiler {
            hook(expression, started.elapsed());
        }
        self.record(result)
    }

    /// Compiles `expression` into a reusable [`Formula`].
    pub fn compile(&mut self, expression: &str) -> Result<Formula, Error> {
        let result = Compiler::compile(expression);
        self.record(result)
    }

    /// Executes a compiled [`Formula`] with the bytecode backend.
    pub fn exec(&mut self, formula: &Formula) -> Result<f64, Error> {
        let result = Executor::new(self).run(formula).map_err(Error::from);
        self.record(result)
    }

    /// The message of the most recent failed `eval`/`compile`/`exec`, if
    /// the most recent call failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.last_error.is_some()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Refreshes the last-error slot from a finished operation, so a stale
    /// message can never outlive a successful call.
    fn record<T>(&mut self, result: Result<T, Error>) -> Result<T, Error> {
        match &result {
            Ok(_) => self.last_error = None,
            Err(error) => self.last_error = Some(error.to_string()),
        }
        result
    }

    pub(crate) fn lookup(&self, name: &str) -> Result<f64, EvalError> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UnknownVariable(name.to_string()))
    }

    /// Resolves and invokes a function: custom functions first (so they may
    /// shadow any builtin), then the builtin table.
    pub(crate) fn call_function(&self, name: &str, args: &[f64]) -> Result<f64, EvalError> {
        if let Some(custom) = self.functions.get(name) {
            custom.arity.check(name, args.len())?;
            return (custom.func)(args).map_err(|message| EvalError::FunctionFailed {
                name: name.to_string(),
                message,
            });
        }
        match functions::call_builtin(name, args) {
            Some(result) => result,
            None => Err(EvalError::UnknownFunction(name.to_string())),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Context {
    /// Deep-copies variables and custom functions (function bodies share
    /// `Arc`s) and resets the error slot.
    fn clone(&self) -> Self {
        Self {
            variables: self.variables.clone(),
            functions: self.functions.clone(),
            last_error: None,
            profiler: self.profiler.clone(),
        }
    }
}

/// Truncates a name to [`limits::MAX_NAME_LEN`] on a char boundary.
fn bounded(name: &str) -> &str {
    if name.len() <= limits::MAX_NAME_LEN {
        return name;
    }
    let mut end = limits::MAX_NAME_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}
