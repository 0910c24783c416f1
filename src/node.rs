use crate::reference::Ref;
use crate::types::{Label, Var};

/// A single tree node: a leaf, or a branch owning exactly two children.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Node {
    Leaf(bool),
    Branch { var: Var, low: Ref, high: Ref },
}

impl Node {
    pub fn label(&self) -> Label {
        match *self {
            Node::Leaf(value) => Label::Terminal(value),
            Node::Branch { var, .. } => Label::Variable(var),
        }
    }

    pub fn low(&self) -> Option<Ref> {
        match *self {
            Node::Leaf(_) => None,
            Node::Branch { low, .. } => Some(low),
        }
    }

    pub fn high(&self) -> Option<Ref> {
        match *self {
            Node::Leaf(_) => None,
            Node::Branch { high, .. } => Some(high),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
}
