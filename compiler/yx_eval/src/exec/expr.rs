//! Per-variant evaluation.

use yx_ir::{Node, SharedFunction, UnaryBuiltin};

use super::call::call_function;
use super::Evaluate;
use crate::operators::{
    evaluate_arith, evaluate_binary_builtin, evaluate_compare, evaluate_unary_builtin,
};
use crate::Environment;

pub(super) fn eval_node(node: &Node, env: &mut Environment) -> f64 {
    match node {
        Node::Constant(value) => *value,
        Node::VariableRef(name) => env.get_variable(name),
        Node::Negate(operand) => -operand.evaluate(env),
        Node::BinaryArith { op, left, right } => {
            let left = left.evaluate(env);
            let right = right.evaluate(env);
            evaluate_arith(*op, left, right)
        }
        Node::Compare { op, left, right } => {
            let left = left.evaluate(env);
            let right = right.evaluate(env);
            evaluate_compare(*op, left, right)
        }
        Node::UnaryBuiltin { func, operand } => {
            let value = operand.evaluate(env);
            if *func == UnaryBuiltin::Display {
                display(env, value)
            } else {
                evaluate_unary_builtin(*func, value)
            }
        }
        Node::BinaryBuiltin { func, left, right } => {
            let left = left.evaluate(env);
            let right = right.evaluate(env);
            evaluate_binary_builtin(*func, left, right)
        }
        Node::ExprList(list) => list.evaluate(env),
        Node::Assignment { name, value } => {
            let value = value.evaluate(env);
            env.set_variable(name, value);
            value
        }
        Node::Condition {
            cond,
            then_branch,
            else_branch,
        } => {
            let branch = if cond.evaluate(env) != 0.0 {
                then_branch
            } else {
                else_branch
            };
            branch.as_deref().map_or(0.0, |branch| branch.evaluate(env))
        }
        Node::Sequence { first, second } => {
            first.evaluate(env);
            second.evaluate(env)
        }
        Node::ParamList(_) => 0.0,
        Node::FunctionDef(def) => {
            register_function(env, def);
            0.0
        }
        Node::FunctionCall { name, args } => call_function(env, name, args.as_ref()),
    }
}

/// Write `value` to the session's output and pass it through.
fn display(env: &mut Environment, value: f64) -> f64 {
    env.count_display();
    env.print_handler().display(value);
    value
}

/// Register (or re-register) a definition under its name.
///
/// The table takes its own handle; the defining node keeps its handle, so
/// the definition lives as long as either of them or any running call.
fn register_function(env: &mut Environment, def: &SharedFunction) {
    match env.set_function(&def.name, def.clone()) {
        None => tracing::debug!(name = %def.name, params = def.params.len(), "function registered"),
        Some(previous) if previous.ptr_eq(def) => {
            tracing::trace!(name = %def.name, "function re-registered");
        }
        Some(previous) => tracing::debug!(
            name = %def.name,
            live_handles = previous.handle_count(),
            "function definition replaced"
        ),
    }
}
