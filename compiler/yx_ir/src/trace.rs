//! Indented trace rendering for debugging.
//!
//! One node per line, two spaces of indentation per depth level, children
//! below their parent. A right-nested statement chain renders as one
//! `statement` line with every statement of the chain one level below it.
//! `Display` on `Node` renders the whole tree from depth zero.

use std::fmt::{self, Write};

use yx_stack::ensure_sufficient_stack;

use crate::ast::{ExprList, Node, ParamList};
use crate::format_number;

/// Spaces per depth level.
const INDENT_WIDTH: usize = 2;

/// Stands in for a missing `then` branch that has an `else` branch.
const EMPTY_BRANCH: &str = "(empty)";

impl Node {
    /// Write this node and its subtree, starting at `depth`.
    pub fn write_trace<W: Write>(&self, out: &mut W, depth: usize) -> fmt::Result {
        ensure_sufficient_stack(|| self.write_trace_inner(out, depth))
    }

    fn write_trace_inner<W: Write>(&self, out: &mut W, depth: usize) -> fmt::Result {
        let pad = depth * INDENT_WIDTH;
        match self {
            Node::Constant(value) => writeln!(out, "{:pad$}{}", "", format_number(*value)),
            Node::VariableRef(name) => writeln!(out, "{:pad$}variable: {name}", ""),
            Node::Negate(operand) => {
                writeln!(out, "{:pad$}- negate", "")?;
                operand.write_trace(out, depth + 1)
            }
            Node::BinaryArith { op, left, right } => {
                writeln!(out, "{:pad$}{} {}", "", op.as_symbol(), op.trace_name())?;
                left.write_trace(out, depth + 1)?;
                right.write_trace(out, depth + 1)
            }
            Node::Compare { op, left, right } => {
                writeln!(out, "{:pad$}{} compare", "", op.as_symbol())?;
                left.write_trace(out, depth + 1)?;
                right.write_trace(out, depth + 1)
            }
            Node::UnaryBuiltin { func, operand } => {
                writeln!(out, "{:pad$}{} function", "", func.name())?;
                operand.write_trace(out, depth + 1)
            }
            Node::BinaryBuiltin { func, left, right } => {
                writeln!(out, "{:pad$}{} function", "", func.name())?;
                left.write_trace(out, depth + 1)?;
                right.write_trace(out, depth + 1)
            }
            Node::ExprList(list) => list.write_trace(out, depth),
            Node::Assignment { name, value } => {
                writeln!(out, "{:pad$}assignment: {name}", "")?;
                value.write_trace(out, depth + 1)
            }
            Node::Condition {
                cond,
                then_branch,
                else_branch,
            } => {
                writeln!(out, "{:pad$}condition", "")?;
                cond.write_trace(out, depth + 1)?;
                match (then_branch, else_branch) {
                    (Some(then_branch), _) => then_branch.write_trace(out, depth + 1)?,
                    (None, Some(_)) => {
                        let pad = pad + INDENT_WIDTH;
                        writeln!(out, "{:pad$}{EMPTY_BRANCH}", "")?;
                    }
                    (None, None) => {}
                }
                match else_branch {
                    Some(else_branch) => else_branch.write_trace(out, depth + 1),
                    None => Ok(()),
                }
            }
            Node::Sequence { first, second } => {
                writeln!(out, "{:pad$}statement", "")?;
                first.write_trace(out, depth + 1)?;
                let mut rest = &**second;
                while let Node::Sequence { first, second } = rest {
                    first.write_trace(out, depth + 1)?;
                    rest = &**second;
                }
                rest.write_trace(out, depth + 1)
            }
            Node::ParamList(params) => params.write_trace(out, depth),
            Node::FunctionDef(def) => {
                writeln!(out, "{:pad$}function: {}", "", def.name)?;
                def.params.write_trace(out, depth + 1)?;
                def.body.write_trace(out, depth + 1)
            }
            Node::FunctionCall { name, args } => {
                writeln!(out, "{:pad$}call: {name}", "")?;
                match args {
                    Some(args) => args.write_trace(out, depth + 1),
                    None => Ok(()),
                }
            }
        }
    }
}

impl ExprList {
    /// Write the list header and each element one level deeper.
    pub fn write_trace<W: Write>(&self, out: &mut W, depth: usize) -> fmt::Result {
        writeln!(out, "{:pad$}exprlist", "", pad = depth * INDENT_WIDTH)?;
        self.iter()
            .try_for_each(|node| node.write_trace(out, depth + 1))
    }
}

impl ParamList {
    /// Write the parameter names on a single line.
    pub fn write_trace<W: Write>(&self, out: &mut W, depth: usize) -> fmt::Result {
        write!(out, "{:pad$}paramlist: ", "", pad = depth * INDENT_WIDTH)?;
        for (index, name) in self.names().enumerate() {
            if index > 0 {
                out.write_str(", ")?;
            }
            out.write_str(name)?;
        }
        out.write_char('\n')
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_trace(f, 0)
    }
}
