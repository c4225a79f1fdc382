use pretty_assertions::assert_eq;
use yx_ir::{ArithOp, ExprList, Node, ParamList, UnaryBuiltin};

use super::*;
use crate::print_handler::buffer_handler;

fn env() -> Environment {
    Environment::with_print_handler(buffer_handler())
}

#[test]
fn empty_program_evaluates_to_zero() {
    let mut env = env();
    let program = Program::new();
    assert!(program.is_empty());
    assert_eq!(program.evaluate_all(&mut env), 0.0);
}

#[test]
fn evaluate_all_returns_last_value() {
    let mut env = env();
    let mut program = Program::new();
    program.add(Node::assign("x", Node::constant(3.0)));
    program.add(Node::arith(
        ArithOp::Mul,
        Node::variable("x"),
        Node::constant(2.0),
    ));
    assert_eq!(program.len(), 2);
    assert_eq!(program.evaluate_all(&mut env), 6.0);
}

#[test]
fn definitions_persist_across_units() {
    let mut env = env();
    let program: Program = [
        Node::function_def(
            "double",
            ParamList::single("v"),
            Node::arith(ArithOp::Add, Node::variable("v"), Node::variable("v")),
        ),
        Node::unary_builtin(
            UnaryBuiltin::Display,
            Node::call("double", Some(ExprList::single(Node::constant(21.0)))),
        ),
    ]
    .into_iter()
    .collect();
    assert_eq!(program.evaluate_all(&mut env), 42.0);
    assert_eq!(env.print_handler().get_output(), "= 42\n");
}

#[test]
fn definitions_survive_clearing_the_program() {
    let mut env = env();
    let mut program = Program::new();
    program.add(Node::function_def(
        "one",
        ParamList::single("v"),
        Node::constant(1.0),
    ));
    program.evaluate_all(&mut env);
    program.clear();
    assert!(program.is_empty());

    program.add(Node::call("one", None));
    assert_eq!(program.evaluate_all(&mut env), 1.0);
}

#[test]
fn evaluate_unit_checks_the_index() {
    let mut env = env();
    let mut program = Program::new();
    program.extend([Node::constant(1.0), Node::constant(2.0)]);
    assert_eq!(program.evaluate_unit(1, &mut env), Ok(2.0));
    assert_eq!(
        program.evaluate_unit(2, &mut env),
        Err(ProgramError::UnitOutOfRange { index: 2, len: 2 })
    );
}

#[test]
fn out_of_range_error_message() {
    let error = ProgramError::UnitOutOfRange { index: 5, len: 1 };
    assert_eq!(
        error.to_string(),
        "program unit 5 out of range (program has 1 units)"
    );
}

#[test]
fn trace_concatenates_units() {
    let mut program = Program::new();
    program.add(Node::assign("x", Node::constant(1.0)));
    program.add(Node::variable("x"));
    assert_eq!(program.trace(), "assignment: x\n  1\nvariable: x\n");
    assert_eq!((&program).into_iter().count(), 2);
}
