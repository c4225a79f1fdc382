//! Whole-program tests: trees built the way a front end would build them,
//! handed to a `Program`, evaluated against one environment.

use pretty_assertions::assert_eq;
use yx_eval::{
    ArithOp, CompareOp, EnvironmentBuilder, Evaluate, ExprList, Node, OutputMode, ParamList,
    Program, UnaryBuiltin,
};

fn num(value: f64) -> Node {
    Node::constant(value)
}

fn var(name: &str) -> Node {
    Node::variable(name)
}

fn call(name: &str, args: Vec<Node>) -> Node {
    Node::call(name, ExprList::from_nodes(args))
}

fn display(node: Node) -> Node {
    Node::unary_builtin(UnaryBuiltin::Display, node)
}

fn params(names: &[&str]) -> ParamList {
    let Some(params) = ParamList::from_names(names.iter().copied()) else {
        panic!("functions take at least one parameter");
    };
    params
}

/// `let fib(n) = if n < 2 then n else fib(n - 1) + fib(n - 2) fi`
fn fibonacci() -> Node {
    Node::function_def(
        "fib",
        params(&["n"]),
        Node::condition(
            Node::compare(CompareOp::Lt, var("n"), num(2.0)),
            Some(var("n")),
            Some(Node::arith(
                ArithOp::Add,
                call("fib", vec![Node::arith(ArithOp::Sub, var("n"), num(1.0))]),
                call("fib", vec![Node::arith(ArithOp::Sub, var("n"), num(2.0))]),
            )),
        ),
    )
}

/// `let gcd(a, b) = if b == 0 then a else gcd(b, a % b) fi`
///
/// Arguments bind in lockstep, so the second argument is computed from
/// the new `a` (already bound to the old `b`). Capture the remainder first.
fn gcd() -> Node {
    Node::function_def(
        "gcd",
        params(&["a", "b"]),
        Node::condition(
            Node::compare(CompareOp::Eq, var("b"), num(0.0)),
            Some(var("a")),
            Node::block(vec![
                Node::assign("r", Node::arith(ArithOp::Mod, var("a"), var("b"))),
                call("gcd", vec![var("b"), var("r")]),
            ]),
        ),
    )
}

#[test]
fn fibonacci_with_display() {
    let mut env = EnvironmentBuilder::new()
        .output(OutputMode::Capture)
        .build();
    let mut program = Program::new();
    program.add(fibonacci());
    program.add(display(call("fib", vec![num(10.0)])));
    program.add(display(call("fib", vec![num(15.0)])));

    assert_eq!(program.evaluate_all(&mut env), 610.0);
    assert_eq!(env.print_handler().get_output(), "= 55\n= 610\n");
    assert!(!env.contains_variable("n"));
}

#[test]
fn two_parameter_recursion_restores_both_parameters() {
    let mut env = EnvironmentBuilder::new()
        .output(OutputMode::Silent)
        .variable("a", -1.0)
        .variable("b", -2.0)
        .build();
    let program: Program = [gcd(), call("gcd", vec![num(1071.0), num(462.0)])]
        .into_iter()
        .collect();

    assert_eq!(program.evaluate_all(&mut env), 21.0);
    assert_eq!(env.get_variable("a"), -1.0);
    assert_eq!(env.get_variable("b"), -2.0);
    // `r` is not a parameter, so the body's write to it escapes.
    assert!(env.contains_variable("r"));
}

#[test]
fn multiple_chunks_share_one_environment() {
    let mut env = EnvironmentBuilder::new()
        .output(OutputMode::Capture)
        .build();

    let mut first_chunk = Program::new();
    first_chunk.add(Node::assign("rate", num(0.5)));
    first_chunk.add(Node::function_def(
        "scale",
        params(&["v"]),
        Node::arith(ArithOp::Mul, var("v"), var("rate")),
    ));
    first_chunk.evaluate_all(&mut env);
    drop(first_chunk);

    let mut second_chunk = Program::new();
    second_chunk.add(display(call("scale", vec![num(9.0)])));
    second_chunk.add(Node::assign("rate", num(2.0)));
    second_chunk.add(display(call("scale", vec![num(9.0)])));
    assert_eq!(second_chunk.evaluate_all(&mut env), 18.0);
    assert_eq!(env.print_handler().get_output(), "= 4.5\n= 18\n");
}

#[test]
fn functions_see_caller_variables_dynamically() {
    let mut env = EnvironmentBuilder::new()
        .output(OutputMode::Silent)
        .build();
    // inner(x) = x + y, where y is whatever the caller has bound
    Node::function_def(
        "inner",
        params(&["x"]),
        Node::arith(ArithOp::Add, var("x"), var("y")),
    )
    .evaluate(&mut env);
    // outer(y) = inner(1)
    Node::function_def("outer", params(&["y"]), call("inner", vec![num(1.0)]))
        .evaluate(&mut env);

    assert_eq!(call("outer", vec![num(10.0)]).evaluate(&mut env), 11.0);
    assert_eq!(call("inner", vec![num(1.0)]).evaluate(&mut env), 1.0);
}

#[test]
fn mutual_recursion() {
    let mut env = EnvironmentBuilder::new()
        .output(OutputMode::Silent)
        .build();
    // even(n) = if n == 0 then 1 else odd(n - 1) fi
    // odd(n)  = if n == 0 then 0 else even(n - 1) fi
    for (name, base, other) in [("even", 1.0, "odd"), ("odd", 0.0, "even")] {
        Node::function_def(
            name,
            params(&["n"]),
            Node::condition(
                Node::compare(CompareOp::Eq, var("n"), num(0.0)),
                Some(num(base)),
                Some(call(other, vec![Node::arith(ArithOp::Sub, var("n"), num(1.0))])),
            ),
        )
        .evaluate(&mut env);
    }
    assert_eq!(call("even", vec![num(10.0)]).evaluate(&mut env), 1.0);
    assert_eq!(call("odd", vec![num(7.0)]).evaluate(&mut env), 1.0);
    assert_eq!(call("odd", vec![num(8.0)]).evaluate(&mut env), 0.0);
}

#[test]
fn deep_recursion_runs_to_completion() {
    let mut env = EnvironmentBuilder::new()
        .output(OutputMode::Silent)
        .counters(true)
        .build();
    // sum(n) = if n <= 0 then 0 else n + sum(n - 1) fi
    Node::function_def(
        "sum",
        params(&["n"]),
        Node::condition(
            Node::compare(CompareOp::LtEq, var("n"), num(0.0)),
            Some(num(0.0)),
            Some(Node::arith(
                ArithOp::Add,
                var("n"),
                call("sum", vec![Node::arith(ArithOp::Sub, var("n"), num(1.0))]),
            )),
        ),
    )
    .evaluate(&mut env);

    assert_eq!(call("sum", vec![num(20_000.0)]).evaluate(&mut env), 200_010_000.0);
    let Some(counters) = env.counters() else {
        panic!("counters were enabled");
    };
    assert_eq!(counters.function_calls, 20_001);
    assert_eq!(counters.max_call_depth, 20_001);
    assert_eq!(env.call_depth(), 0);
}

#[test]
fn program_trace_matches_structure() {
    let mut program = Program::new();
    program.add(Node::assign("x", num(1e20)));
    program.add(display(var("x")));
    assert_eq!(
        program.trace(),
        "assignment: x\n  1e+20\ndisplay function\n  variable: x\n"
    );
}

#[test]
fn long_statement_block_evaluates_traces_and_clears() {
    let statements = (0..100_000)
        .map(|i| Node::assign("x", num(f64::from(i))))
        .collect();
    let Some(block) = Node::block(statements) else {
        panic!("non-empty block");
    };
    let mut program = Program::new();
    program.add(block);
    let mut env = EnvironmentBuilder::new().output(OutputMode::Silent).build();

    assert_eq!(program.evaluate_all(&mut env), 99_999.0);
    assert_eq!(program.trace().lines().count(), 200_001);

    program.clear();
    assert!(program.is_empty());
    assert_eq!(env.get_variable("x"), 99_999.0);

    let mut teardown = Program::new();
    teardown.extend(Node::block((0..100_000).map(|_| var("x")).collect()));
    assert_eq!(teardown.len(), 1);
    drop(teardown);
}
