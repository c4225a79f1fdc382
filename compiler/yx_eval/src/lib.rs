//! Yxlang Eval - tree-walking evaluator for Yxlang programs.
//!
//! # Architecture
//!
//! - `Environment`: one flat variable table and one flat function table,
//!   shared by every node of a session (dynamic scoping)
//! - `Evaluate`: recursive evaluation of `yx_ir` trees to `f64`
//! - Function calls bind parameters in the shared table and restore the
//!   previous bindings afterwards (save/restore instead of stack frames)
//! - `Program`: owns the top-level trees and drives their evaluation
//! - Print handlers: where the `display` builtin writes
//!
//! Evaluation is single-threaded and never fails. Undefined variables and
//! functions evaluate to `0.0`; floating-point domain errors propagate as
//! `inf`/`nan`.

mod builder;
mod diagnostics;
mod environment;
pub mod errors;
mod exec;
mod operators;
mod print_handler;
mod program;
mod tracing_setup;

pub use builder::{EnvironmentBuilder, OutputMode};
pub use diagnostics::EvalCounters;
pub use environment::Environment;
pub use errors::{ProgramError, SeedError};
pub use exec::Evaluate;
pub use operators::{
    evaluate_arith, evaluate_binary_builtin, evaluate_compare, evaluate_unary_builtin,
};
pub use print_handler::{
    buffer_handler, display_line, silent_handler, stdout_handler, BufferPrintHandler,
    PrintHandlerImpl, SharedPrintHandler, StdoutPrintHandler, DISPLAY_PREFIX,
};
pub use program::Program;
pub use tracing_setup::init_tracing;

// Re-export the tree types so hosts need only this crate.
pub use yx_ir::{
    format_number, ArithOp, BinaryBuiltin, CompareOp, ExprList, FunctionDef, Node, ParamList,
    SharedFunction, UnaryBuiltin,
};

#[cfg(test)]
mod tests;
