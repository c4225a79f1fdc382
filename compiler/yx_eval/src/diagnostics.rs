//! Optional evaluation counters.
//!
//! Stored as `Option<EvalCounters>` on the environment. When `None`, every
//! increment is skipped.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalCounters {
    /// User-defined function calls that found a registered definition.
    pub function_calls: u64,
    /// Values written by the `display` builtin.
    pub display_writes: u64,
    /// Deepest nesting of user-function activations observed.
    pub max_call_depth: usize,
}

impl EvalCounters {
    /// Record one call entered at nesting `depth`.
    #[inline]
    pub fn count_function_call(&mut self, depth: usize) {
        self.function_calls = self.function_calls.wrapping_add(1);
        self.max_call_depth = self.max_call_depth.max(depth);
    }

    #[inline]
    pub fn count_display(&mut self) {
        self.display_writes = self.display_writes.wrapping_add(1);
    }

    /// Fold another session's counters into this one.
    pub fn merge(&mut self, other: &EvalCounters) {
        self.function_calls = self.function_calls.wrapping_add(other.function_calls);
        self.display_writes = self.display_writes.wrapping_add(other.display_writes);
        self.max_call_depth = self.max_call_depth.max(other.max_call_depth);
    }
}

impl fmt::Display for EvalCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "function calls:  {}", self.function_calls)?;
        writeln!(f, "display writes:  {}", self.display_writes)?;
        write!(f, "max call depth:  {}", self.max_call_depth)
    }
}
