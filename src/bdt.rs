//! The [`Bdt`] manager: construction, reduction and teardown of compact decision trees.
//!
//! All nodes live in one arena owned by the manager and are addressed by [`Ref`] handles.
//! Every tree is a strict tree: each node has exactly one parent, so freeing a subtree
//! never invalidates a handle held by another tree.
//!
//! # Construction
//!
//! [`Bdt::build`] partitions the true inputs on `x1`, then `x2`, and so on. A branch with no
//! true input left becomes the leaf `0`. At the last variable, a branch whose inputs disagree
//! on the final bit collapses to the leaf `1` without testing it.
//!
//! # Reduction
//!
//! [`Bdt::reduce`] merges, bottom-up, every node whose two children are structurally equal
//! into that child. The result never has a node with identical low and high subtrees.
//!
//! ```
//! use cbdt::bdt::Bdt;
//! use cbdt::truth::TruthSet;
//!
//! // x2 = 1, x3 = 0, whatever x1 is: the x1 test is redundant.
//! let set = TruthSet::from_strs(["010", "110"]).unwrap();
//! let mut bdt = Bdt::default();
//! let root = bdt.build(&set).unwrap();
//! let unreduced = bdt.size(Some(root));
//! let root = bdt.reduce(root);
//! assert!(bdt.size(Some(root)) < unreduced);
//! ```

use std::fmt::{Debug, Formatter};

use log::debug;

use crate::node::Node;
use crate::reference::Ref;
use crate::storage::Storage;
use crate::truth::{Assignment, TruthSet};
use crate::types::{Label, Var};

pub struct Bdt {
    storage: Storage<Node>,
}

impl Bdt {
    /// Creates a manager with room for `capacity` nodes before the arena grows.
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: Storage::new(capacity),
        }
    }
}

impl Default for Bdt {
    fn default() -> Self {
        Bdt::new(1 << 10)
    }
}

impl Debug for Bdt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bdt")
            .field("capacity", &self.storage.capacity())
            .field("size", &self.storage.size())
            .field("live", &self.storage.real_size())
            .finish()
    }
}

impl Bdt {
    pub fn node(&self, node: Ref) -> Node {
        self.storage.value(node.index())
    }
    pub fn label(&self, node: Ref) -> Label {
        self.node(node).label()
    }
    pub fn low(&self, node: Ref) -> Option<Ref> {
        self.node(node).low()
    }
    pub fn high(&self, node: Ref) -> Option<Ref> {
        self.node(node).high()
    }
    pub fn is_leaf(&self, node: Ref) -> bool {
        self.node(node).is_leaf()
    }

    /// Number of nodes currently alive in the arena, across all trees.
    pub fn live_nodes(&self) -> usize {
        self.storage.real_size()
    }

    fn alloc(&mut self, node: Node) -> Ref {
        let index = self.storage.add(node);
        Ref::new(index as u32)
    }

    pub fn mk_leaf(&mut self, value: bool) -> Ref {
        self.alloc(Node::Leaf(value))
    }

    pub fn mk_branch(&mut self, var: Var, low: Ref, high: Ref) -> Ref {
        debug!("mk_branch(var = {}, low = {}, high = {})", var, low, high);
        self.alloc(Node::Branch { var, low, high })
    }
}

impl Bdt {
    /// Builds the (unreduced) compact tree for the function that is true exactly on `set`.
    ///
    /// Returns `None` for an empty set: there is no tree to build.
    pub fn build(&mut self, set: &TruthSet) -> Option<Ref> {
        debug!("build(num_vars = {}, true = {})", set.num_vars(), set.len());

        if set.is_empty() {
            return None;
        }
        if set.is_complete() {
            return Some(self.mk_leaf(true));
        }

        let rows: Vec<&Assignment> = set.iter().collect();
        Some(self.build_level(&rows, 1, set.num_vars()))
    }

    /// Builds and then reduces the tree for `set`.
    pub fn build_compact(&mut self, set: &TruthSet) -> Option<Ref> {
        let root = self.build(set)?;
        Some(self.reduce(root))
    }

    /// Partitions the non-empty `rows` on variable `v` and builds the subtree testing it.
    fn build_level(&mut self, rows: &[&Assignment], v: usize, num_vars: usize) -> Ref {
        assert!(!rows.is_empty(), "Cannot build a level from no inputs");

        let var = Var::new(v as u32);
        let (ones, zeros): (Vec<&Assignment>, Vec<&Assignment>) = rows
            .iter()
            .copied()
            .partition(|row| row.get(var.position()) == Some(true));

        debug!(
            "build_level(var = {}, zeros = {}, ones = {})",
            var,
            zeros.len(),
            ones.len()
        );

        if v == num_vars {
            return match (zeros.is_empty(), ones.is_empty()) {
                (false, false) => self.mk_leaf(true),
                (false, true) => {
                    let low = self.mk_leaf(true);
                    let high = self.mk_leaf(false);
                    self.mk_branch(var, low, high)
                }
                _ => {
                    let low = self.mk_leaf(false);
                    let high = self.mk_leaf(true);
                    self.mk_branch(var, low, high)
                }
            };
        }

        let low = if zeros.is_empty() {
            self.mk_leaf(false)
        } else {
            self.build_level(&zeros, v + 1, num_vars)
        };
        let high = if ones.is_empty() {
            self.mk_leaf(false)
        } else {
            self.build_level(&ones, v + 1, num_vars)
        };
        self.mk_branch(var, low, high)
    }
}

impl Bdt {
    /// Merges, bottom-up, every node whose children are structurally equal.
    ///
    /// The returned handle is always `node`. On a merge the duplicate high subtree and the
    /// low child's own slot are freed first, then `node` is overwritten in place with the
    /// low child's label and children.
    pub fn reduce(&mut self, node: Ref) -> Ref {
        let (low, high) = match self.node(node) {
            Node::Leaf(_) => return node,
            Node::Branch { low, high, .. } => (low, high),
        };

        let low = self.reduce(low);
        let high = self.reduce(high);

        if self.is_equal(Some(low), Some(high)) {
            debug!("reduce: merging {} == {} into {}", low, high, node);
            let survivor = self.node(low);
            self.delete(high);
            self.storage.drop(low.index());
            self.storage.set_value(node.index(), survivor);
        }

        node
    }

    /// Structural equality of two possibly-absent subtrees.
    pub fn is_equal(&self, a: Option<Ref>, b: Option<Ref>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                let (a, b) = (self.node(a), self.node(b));
                a.label() == b.label()
                    && self.is_equal(a.high(), b.high())
                    && self.is_equal(a.low(), b.low())
            }
            _ => false,
        }
    }

    /// Frees `node` and all of its descendants.
    pub fn delete(&mut self, node: Ref) {
        debug!("delete({})", node);
        if let Node::Branch { low, high, .. } = self.node(node) {
            self.delete(low);
            self.delete(high);
        }
        self.storage.drop(node.index());
    }

    /// Number of nodes reachable from `node`; an absent tree has none.
    pub fn size(&self, node: Option<Ref>) -> u64 {
        match node {
            None => 0,
            Some(node) => {
                let n = self.node(node);
                1 + self.size(n.high()) + self.size(n.low())
            }
        }
    }

    /// Renders the tree as nested `(var, high, low)` triples, e.g. `(x1, (1), (0))`.
    pub fn to_bracket_string(&self, node: Ref) -> String {
        match self.node(node) {
            Node::Leaf(value) => format!("({})", value as u8),
            Node::Branch { var, low, high } => format!(
                "({}, {}, {})",
                var,
                self.to_bracket_string(high),
                self.to_bracket_string(low)
            ),
        }
    }
}
