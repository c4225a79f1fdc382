//! Yxlang IR - abstract syntax tree types.
//!
//! This crate contains the tree handed over by the parsing front end:
//! - `Node`: the closed set of node variants
//! - `ExprList` / `ParamList`: linked argument and parameter sequences
//! - `FunctionDef` / `SharedFunction`: function definitions and the
//!   reference-counted handle the environment registers
//! - Operator enums for arithmetic, comparison and builtin calls
//! - Indented trace rendering (`Display` on `Node`)
//! - General number formatting shared by tracing and the `display` builtin
//!
//! # Design
//!
//! - **Strict tree**: every composite node owns its children through `Box`.
//! - **One shared edge**: a function definition's parameters and body sit
//!   behind an `Rc` so registration can outlive the defining statement.
//! - **Structural accessors**: argument and parameter lists are walked with
//!   iterators, never by inspecting node variants at runtime.

pub mod ast;
mod number;
mod trace;

pub use ast::{
    ArithOp, BinaryBuiltin, CompareOp, ExprList, FunctionDef, Node, ParamList, SharedFunction,
    UnaryBuiltin,
};
pub use number::format_number;
