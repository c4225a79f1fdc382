use pretty_assertions::assert_eq;

use super::init_tracing;
use crate::{ArithOp, EnvironmentBuilder, Evaluate, Node, OutputMode, UnaryBuiltin};

fn displayed_run() -> (f64, String) {
    let mut env = EnvironmentBuilder::new().output(OutputMode::Capture).build();
    let node = Node::unary_builtin(
        UnaryBuiltin::Display,
        Node::arith(ArithOp::Mul, Node::constant(6.0), Node::constant(7.0)),
    );
    let value = node.evaluate(&mut env);
    (value, env.print_handler().get_output())
}

#[test]
fn init_tracing_twice_leaves_results_and_output_unchanged() {
    let before = displayed_run();
    init_tracing();
    init_tracing();
    assert_eq!(displayed_run(), before);
    assert_eq!(before, (42.0, "= 42\n".to_owned()));
}
