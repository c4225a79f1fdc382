//! The program container.
//!
//! Owns the top-level trees handed over by the front end, possibly from
//! several input chunks fed to the same environment. Dropping the
//! container (or calling `clear`) drops every tree; function definitions
//! registered from those trees stay alive in the environment.

use yx_ir::Node;

use crate::errors::ProgramError;
use crate::{Environment, Evaluate};

/// Ordered list of top-level program units.
#[derive(Debug, Default)]
pub struct Program {
    units: Vec<Node>,
}

impl Program {
    pub fn new() -> Self {
        Program { units: Vec::new() }
    }

    /// Take ownership of a parsed top-level unit.
    pub fn add(&mut self, tree: Node) {
        self.units.push(tree);
    }

    /// Drop every owned tree.
    pub fn clear(&mut self) {
        self.units.clear();
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.units.iter()
    }

    /// Evaluate every unit in order, returning the last unit's value
    /// (`0.0` for an empty program).
    pub fn evaluate_all(&self, env: &mut Environment) -> f64 {
        self.units
            .iter()
            .enumerate()
            .fold(0.0, |_, (index, tree)| evaluate_logged(index, tree, env))
    }

    /// Evaluate the unit at `index`.
    pub fn evaluate_unit(&self, index: usize, env: &mut Environment) -> Result<f64, ProgramError> {
        let tree = self.units.get(index).ok_or(ProgramError::UnitOutOfRange {
            index,
            len: self.units.len(),
        })?;
        Ok(evaluate_logged(index, tree, env))
    }

    /// Render every unit's trace, in order.
    pub fn trace(&self) -> String {
        self.units.iter().map(Node::to_string).collect()
    }
}

fn evaluate_logged(index: usize, tree: &Node, env: &mut Environment) -> f64 {
    let _span = tracing::debug_span!("unit", index).entered();
    let value = tree.evaluate(env);
    tracing::debug!(value, "unit evaluated");
    value
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Node> for Program {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, trees: I) {
        self.units.extend(trees);
    }
}

impl FromIterator<Node> for Program {
    fn from_iter<I: IntoIterator<Item = Node>>(trees: I) -> Self {
        Program {
            units: trees.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests;
