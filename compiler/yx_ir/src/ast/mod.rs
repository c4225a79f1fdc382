//! AST node types.
//!
//! The front end builds one `Node` tree per top-level program unit,
//! bottom-up, through the constructors on `Node`, `ExprList` and
//! `ParamList`. Trees are acyclic by construction: children are owned
//! through `Box` and nothing hands out a way to link a node back to an
//! ancestor.

mod operators;

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

pub use operators::{ArithOp, BinaryBuiltin, CompareOp, UnaryBuiltin};

/// One node of a Yxlang syntax tree.
#[derive(Debug, PartialEq)]
pub enum Node {
    /// Numeric literal.
    Constant(f64),
    /// Read of a variable from the shared table.
    VariableRef(String),
    /// Unary minus.
    Negate(Box<Node>),
    BinaryArith {
        op: ArithOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Compare {
        op: CompareOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    UnaryBuiltin {
        func: UnaryBuiltin,
        operand: Box<Node>,
    },
    BinaryBuiltin {
        func: BinaryBuiltin,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// A standalone expression list; evaluates to its first element.
    ExprList(ExprList),
    Assignment {
        name: String,
        value: Box<Node>,
    },
    /// `if cond then ... [else ...] fi`. Either branch may be empty.
    Condition {
        cond: Box<Node>,
        then_branch: Option<Box<Node>>,
        else_branch: Option<Box<Node>>,
    },
    /// Statement chaining: `first` runs, then `second` supplies the value.
    Sequence {
        first: Box<Node>,
        second: Box<Node>,
    },
    /// A standalone parameter list; evaluates to `0.0`.
    ParamList(ParamList),
    FunctionDef(SharedFunction),
    FunctionCall {
        name: String,
        args: Option<ExprList>,
    },
}

impl Node {
    pub fn constant(value: f64) -> Self {
        Node::Constant(value)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Node::VariableRef(name.into())
    }

    pub fn negate(operand: Node) -> Self {
        Node::Negate(Box::new(operand))
    }

    pub fn arith(op: ArithOp, left: Node, right: Node) -> Self {
        Node::BinaryArith {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn compare(op: CompareOp, left: Node, right: Node) -> Self {
        Node::Compare {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary_builtin(func: UnaryBuiltin, operand: Node) -> Self {
        Node::UnaryBuiltin {
            func,
            operand: Box::new(operand),
        }
    }

    pub fn binary_builtin(func: BinaryBuiltin, left: Node, right: Node) -> Self {
        Node::BinaryBuiltin {
            func,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn expr_list(list: ExprList) -> Self {
        Node::ExprList(list)
    }

    pub fn assign(name: impl Into<String>, value: Node) -> Self {
        Node::Assignment {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn condition(cond: Node, then_branch: Option<Node>, else_branch: Option<Node>) -> Self {
        Node::Condition {
            cond: Box::new(cond),
            then_branch: then_branch.map(Box::new),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn sequence(first: Node, second: Node) -> Self {
        Node::Sequence {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    pub fn param_list(list: ParamList) -> Self {
        Node::ParamList(list)
    }

    pub fn function_def(name: impl Into<String>, params: ParamList, body: Node) -> Self {
        Node::FunctionDef(SharedFunction::new(FunctionDef {
            name: name.into(),
            params,
            body,
        }))
    }

    pub fn call(name: impl Into<String>, args: Option<ExprList>) -> Self {
        Node::FunctionCall {
            name: name.into(),
            args,
        }
    }

    /// Fold a statement list into a right-nested `Sequence` chain.
    ///
    /// Returns `None` for an empty list and the statement itself for a
    /// single-element list, so `[a, b, c]` becomes
    /// `Sequence(a, Sequence(b, c))`.
    pub fn block(statements: Vec<Node>) -> Option<Self> {
        statements
            .into_iter()
            .rev()
            .reduce(|rest, stmt| Node::sequence(stmt, rest))
    }
}

// Dropped through a worklist: a statement chain is as deep as it is long,
// and the recursive drop glue would run out of native stack on it.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl Node {
    /// Move every owned child node into `out`, leaving leaves behind.
    fn detach_children(&mut self, out: &mut Vec<Node>) {
        match self {
            Node::Constant(_) | Node::VariableRef(_) | Node::ParamList(_) | Node::FunctionDef(_) => {}
            Node::Negate(operand)
            | Node::UnaryBuiltin { operand, .. }
            | Node::Assignment { value: operand, .. } => out.push(detach(operand)),
            Node::BinaryArith { left, right, .. }
            | Node::Compare { left, right, .. }
            | Node::BinaryBuiltin { left, right, .. }
            | Node::Sequence {
                first: left,
                second: right,
            } => {
                out.push(detach(left));
                out.push(detach(right));
            }
            Node::Condition {
                cond,
                then_branch,
                else_branch,
            } => {
                out.push(detach(cond));
                out.extend(then_branch.take().map(|branch| *branch));
                out.extend(else_branch.take().map(|branch| *branch));
            }
            Node::ExprList(list) => list.detach_nodes(out),
            Node::FunctionCall { args, .. } => {
                if let Some(args) = args {
                    args.detach_nodes(out);
                }
            }
        }
    }
}

fn detach(slot: &mut Node) -> Node {
    std::mem::replace(slot, Node::Constant(0.0))
}

/// Ordered actual-argument sequence, linked through `tail`.
#[derive(Debug, PartialEq)]
pub struct ExprList {
    pub head: Box<Node>,
    pub tail: Option<Box<ExprList>>,
}

impl ExprList {
    pub fn new(head: Node, tail: Option<ExprList>) -> Self {
        ExprList {
            head: Box::new(head),
            tail: tail.map(Box::new),
        }
    }

    pub fn single(head: Node) -> Self {
        Self::new(head, None)
    }

    /// Build a list from nodes in order. `None` when `nodes` is empty.
    pub fn from_nodes(nodes: Vec<Node>) -> Option<Self> {
        nodes
            .into_iter()
            .rev()
            .fold(None, |tail, head| Some(ExprList::new(head, tail)))
    }

    /// Walk the argument expressions in order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        std::iter::successors(Some(self), |list| list.tail.as_deref()).map(|list| &*list.head)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always `false`: a list holds at least its head.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Move every argument expression into `out`, unlinking the tail.
    fn detach_nodes(&mut self, out: &mut Vec<Node>) {
        out.push(detach(&mut self.head));
        let mut tail = self.tail.take();
        while let Some(mut list) = tail {
            out.push(detach(&mut list.head));
            tail = list.tail.take();
        }
    }
}

impl Drop for ExprList {
    fn drop(&mut self) {
        let mut tail = self.tail.take();
        while let Some(mut list) = tail {
            tail = list.tail.take();
        }
    }
}

/// Ordered formal-parameter sequence, linked through `rest` only.
#[derive(Debug, PartialEq)]
pub struct ParamList {
    pub name: String,
    pub rest: Option<Box<ParamList>>,
}

impl ParamList {
    pub fn new(name: impl Into<String>, rest: Option<ParamList>) -> Self {
        ParamList {
            name: name.into(),
            rest: rest.map(Box::new),
        }
    }

    pub fn single(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    /// Build a list from names in order. `None` when `names` is empty.
    pub fn from_names<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: DoubleEndedIterator,
        S: Into<String>,
    {
        names
            .into_iter()
            .rev()
            .fold(None, |rest, name| Some(ParamList::new(name, rest)))
    }

    /// Walk the parameter names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::successors(Some(self), |list| list.rest.as_deref()).map(|list| list.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.names().count()
    }

    /// Always `false`: a list holds at least one name.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// A user-defined function: name, formal parameters and body.
#[derive(Debug, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub params: ParamList,
    pub body: Node,
}

/// Reference-counted handle to a function definition.
///
/// The defining `Node::FunctionDef` holds one handle, the environment's
/// function table holds another after registration, and every running
/// call holds its own for the duration of the body. The definition is
/// freed when the last handle goes away, so replacing a registration
/// while an activation of the old body is still running is safe.
///
/// Single-threaded (`Rc`), like the evaluator.
#[derive(PartialEq)]
pub struct SharedFunction(Rc<FunctionDef>);

impl SharedFunction {
    pub fn new(def: FunctionDef) -> Self {
        SharedFunction(Rc::new(def))
    }

    /// Whether two handles point at the same definition.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles to this definition.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl Clone for SharedFunction {
    #[inline]
    fn clone(&self) -> Self {
        SharedFunction(Rc::clone(&self.0))
    }
}

impl Deref for SharedFunction {
    type Target = FunctionDef;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for SharedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedFunction").field(&*self.0).finish()
    }
}
