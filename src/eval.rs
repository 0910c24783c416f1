//! Evaluating a tree on a single input.
//!
//! Anything implementing [`Input`] can be fed to [`Bdt::eval`]: parsed [`Assignment`]s,
//! raw binary strings, or bool slices.

use log::warn;

use crate::bdt::Bdt;
use crate::node::Node;
use crate::reference::Ref;
use crate::truth::Assignment;

/// Source of variable values, addressed by 0-based position.
pub trait Input {
    /// Value at `position`, or `None` if the input does not assign it.
    fn bit(&self, position: usize) -> Option<bool>;
}

impl Input for Assignment {
    fn bit(&self, position: usize) -> Option<bool> {
        self.get(position)
    }
}

impl Input for [bool] {
    fn bit(&self, position: usize) -> Option<bool> {
        self.get(position).copied()
    }
}

impl Input for str {
    fn bit(&self, position: usize) -> Option<bool> {
        match self.as_bytes().get(position) {
            Some(b'0') => Some(false),
            Some(b'1') => Some(true),
            _ => None,
        }
    }
}

impl Bdt {
    /// Evaluates the tree rooted at `root` on `input`.
    ///
    /// Returns `None` ("no result") for an absent tree, or when `input` does not assign a
    /// variable tested on the path.
    pub fn eval(&self, root: Option<Ref>, input: &(impl Input + ?Sized)) -> Option<bool> {
        let mut current = root?;
        loop {
            match self.node(current) {
                Node::Leaf(value) => return Some(value),
                Node::Branch { var, low, high } => match input.bit(var.position()) {
                    Some(false) => current = low,
                    Some(true) => current = high,
                    None => {
                        warn!("eval: input does not assign {}", var);
                        return None;
                    }
                },
            }
        }
    }
}
