//! The binding environment shared by every node of a session.
//!
//! Two flat tables, one for variables and one for functions. There is no
//! scope stack: every name resolves against the same tables at the moment
//! it is evaluated (dynamic scoping), so a function body reads and writes
//! the caller's variables directly. Calls protect only their own
//! parameters, through the save/restore frame in `exec::call`.

use rustc_hash::FxHashMap;
use yx_ir::SharedFunction;

use crate::diagnostics::EvalCounters;
use crate::errors::SeedError;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Variable and function tables plus the session's output sink.
pub struct Environment {
    variables: FxHashMap<String, f64>,
    functions: FxHashMap<String, SharedFunction>,
    print_handler: SharedPrintHandler,
    /// Number of user-function activations currently running.
    call_depth: usize,
    /// Present only when counting was requested.
    counters: Option<EvalCounters>,
}

impl Environment {
    /// Create an empty environment writing `display` output to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    /// Create an empty environment writing `display` output to `handler`.
    pub fn with_print_handler(handler: SharedPrintHandler) -> Self {
        Environment {
            variables: FxHashMap::default(),
            functions: FxHashMap::default(),
            print_handler: handler,
            call_depth: 0,
            counters: None,
        }
    }

    /// Read a variable. Unset variables read as `0.0`.
    #[inline]
    pub fn get_variable(&self, name: &str) -> f64 {
        self.variables.get(name).copied().unwrap_or(0.0)
    }

    /// Bind or overwrite a variable.
    #[inline]
    pub fn set_variable(&mut self, name: &str, value: f64) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_owned(), value);
        }
    }

    /// The current binding, distinguishing "unset" from `0.0`.
    #[inline]
    pub fn lookup_variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    pub fn contains_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Remove a binding, returning its value if it was set.
    pub fn remove_variable(&mut self, name: &str) -> Option<f64> {
        self.variables.remove(name)
    }

    /// Names of all bound variables, sorted.
    pub fn variable_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.variables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    /// Look up a registered function, cloning its handle.
    ///
    /// The returned handle keeps the definition alive even if the name is
    /// re-registered while the caller is still using it.
    #[inline]
    pub fn get_function(&self, name: &str) -> Option<SharedFunction> {
        self.functions.get(name).cloned()
    }

    /// Register `def` under `name`, returning the definition it replaced.
    pub fn set_function(&mut self, name: &str, def: SharedFunction) -> Option<SharedFunction> {
        self.functions.insert(name.to_owned(), def)
    }

    pub fn contains_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Names of all registered functions, sorted.
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn clear_functions(&mut self) {
        self.functions.clear();
    }

    /// Bind variables from `name=value` pairs separated by commas or
    /// whitespace, e.g. `"x=1, y=2.5"`.
    ///
    /// All pairs are validated before any binding changes, so a malformed
    /// string leaves the environment untouched.
    pub fn seed_from_str(&mut self, pairs: &str) -> Result<(), SeedError> {
        let parsed = pairs
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|pair| !pair.is_empty())
            .map(parse_seed_pair)
            .collect::<Result<Vec<_>, _>>()?;
        for (name, value) in parsed {
            self.set_variable(name, value);
        }
        Ok(())
    }

    /// The sink `display` writes to.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Number of user-function activations currently running.
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Snapshot of the counters, when counting is enabled.
    pub fn counters(&self) -> Option<EvalCounters> {
        self.counters
    }

    pub(crate) fn enable_counters(&mut self) {
        self.counters.get_or_insert_with(EvalCounters::default);
    }

    pub(crate) fn enter_call(&mut self) {
        self.call_depth += 1;
        if let Some(counters) = &mut self.counters {
            counters.count_function_call(self.call_depth);
        }
    }

    pub(crate) fn exit_call(&mut self) {
        self.call_depth = self.call_depth.saturating_sub(1);
    }

    pub(crate) fn count_display(&mut self) {
        if let Some(counters) = &mut self.counters {
            counters.count_display();
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_seed_pair(pair: &str) -> Result<(&str, f64), SeedError> {
    let Some((name, value)) = pair.split_once('=') else {
        return Err(SeedError::MissingEquals {
            pair: pair.to_owned(),
        });
    };
    if name.is_empty() {
        return Err(SeedError::EmptyName {
            pair: pair.to_owned(),
        });
    }
    let parsed = value.parse::<f64>().map_err(|_| SeedError::InvalidValue {
        name: name.to_owned(),
        value: value.to_owned(),
    })?;
    Ok((name, parsed))
}
