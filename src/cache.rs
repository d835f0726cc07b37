//! An LRU cache of compiled formulas keyed by source text.
//!
//! Hosts that receive formula strings repeatedly (config reloads, per-frame
//! rule evaluation) can route them through a `FormulaCache` to pay the
//! compile cost once per distinct expression.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;

use crate::bytecode::Formula;
use crate::context::Context;
use crate::error::Error;

pub struct FormulaCache {
    cache: LruCache<String, Arc<Formula>>,
}

impl FormulaCache {
    /// A cache holding at most `capacity` compiled formulas (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// The cached formula for `expression`, compiling (and caching) it on a
    /// miss. Compile failures are not cached.
    pub fn get(&mut self, context: &mut Context, expression: &str) -> Result<Arc<Formula>, Error> {
        if let Some(formula) = self.cache.get(expression) {
            return Ok(Arc::clone(formula));
        }
        let formula = Arc::new(context.compile(expression)?);
        self.cache.put(expression.to_string(), Arc::clone(&formula));
        Ok(formula)
    }

    /// Compiles through the cache and executes against `context`.
    pub fn eval_through(&mut self, context: &mut Context, expression: &str) -> Result<f64, Error> {
        let formula = self.get(context, expression)?;
        context.exec(&formula)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
