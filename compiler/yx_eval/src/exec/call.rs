//! User-defined function calls.
//!
//! There are no per-call scopes: parameters are bound in the one shared
//! variable table. To keep recursion working, a call first records the
//! current binding of every parameter name in a `CallFrame`, overwrites
//! the parameters with the actual arguments, evaluates the body, and then
//! puts every recorded binding back. Each activation records after its
//! caller has bound its own parameters and restores before returning to
//! it, so the caller sees exactly the bindings it had before the call.
//!
//! Variables other than the parameters are not protected: a body that
//! assigns to a free variable changes it for the caller too.

use std::ops::{Deref, DerefMut};

use yx_ir::ExprList;

use super::Evaluate;
use crate::Environment;

/// Saved parameter bindings of one activation.
///
/// Restores on drop, including during unwinding, so a panic inside a body
/// cannot leave the parameters of an outer activation overwritten.
/// Access the environment through the frame; it implements `DerefMut`.
struct CallFrame<'env, 'def> {
    env: &'env mut Environment,
    /// Parameter names in declaration order with the binding each had
    /// before the call (`None`: the name was unset).
    saved: Vec<(&'def str, Option<f64>)>,
}

impl<'env, 'def> CallFrame<'env, 'def> {
    fn enter(env: &'env mut Environment, capacity: usize) -> Self {
        env.enter_call();
        CallFrame {
            env,
            saved: Vec::with_capacity(capacity),
        }
    }

    /// Record the current binding of `name` before it is overwritten.
    ///
    /// Only the first occurrence of a repeated parameter name is recorded,
    /// so the restored value is the one from before the call.
    fn save(&mut self, name: &'def str) {
        if self.saved.iter().any(|(saved, _)| *saved == name) {
            return;
        }
        let prior = self.env.lookup_variable(name);
        self.saved.push((name, prior));
    }
}

impl Drop for CallFrame<'_, '_> {
    fn drop(&mut self) {
        for (name, prior) in self.saved.drain(..) {
            match prior {
                Some(value) => self.env.set_variable(name, value),
                None => {
                    self.env.remove_variable(name);
                }
            }
        }
        self.env.exit_call();
    }
}

impl Deref for CallFrame<'_, '_> {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        self.env
    }
}

impl DerefMut for CallFrame<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.env
    }
}

/// Call the function registered under `name`.
///
/// Undefined functions evaluate to `0.0`. Parameters and arguments are
/// paired in order: each argument is evaluated right before its parameter
/// is bound, so later arguments already see earlier parameters' new
/// values. Missing arguments bind `0.0`; surplus arguments are never
/// evaluated.
#[tracing::instrument(level = "debug", skip(env, args), fields(depth = env.call_depth()))]
pub(super) fn call_function(env: &mut Environment, name: &str, args: Option<&ExprList>) -> f64 {
    let Some(def) = env.get_function(name) else {
        tracing::trace!("call to undefined function");
        return 0.0;
    };
    tracing::trace!(remaining_stack = ?yx_stack::remaining_stack(), "entering body");

    let mut frame = CallFrame::enter(env, def.params.len());
    let mut actuals = args.into_iter().flat_map(ExprList::iter);
    for param in def.params.names() {
        frame.save(param);
        let value = actuals.next().map_or(0.0, |arg| arg.evaluate(&mut frame));
        frame.set_variable(param, value);
    }

    let result = def.body.evaluate(&mut frame);
    tracing::debug!(result, "call returned");
    result
}
