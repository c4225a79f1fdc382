//! Tree evaluation.
//!
//! `Evaluate` is implemented for the node types of `yx_ir`. Evaluation is
//! strictly depth-first and left-to-right: the variable table is shared and
//! mutable, so the order of sibling evaluations is observable.

mod call;
mod expr;

use yx_ir::{ExprList, Node};
use yx_stack::ensure_sufficient_stack;

use crate::Environment;

/// Evaluate a tree against the session environment.
pub trait Evaluate {
    /// Evaluate to a number, mutating `env` as a side effect.
    ///
    /// Never fails: undefined names read as `0.0` and domain errors
    /// surface as `inf`/`nan`.
    fn evaluate(&self, env: &mut Environment) -> f64;
}

impl Evaluate for Node {
    #[inline]
    fn evaluate(&self, env: &mut Environment) -> f64 {
        ensure_sufficient_stack(|| expr::eval_node(self, env))
    }
}

impl Evaluate for ExprList {
    /// A standalone list evaluates its first element only.
    #[inline]
    fn evaluate(&self, env: &mut Environment) -> f64 {
        self.head.evaluate(env)
    }
}
