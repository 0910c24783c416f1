//! # cbdt: Compact Binary Decision Trees
//!
//! **`cbdt`** turns a boolean function, given as the set of inputs on which it is true,
//! into a compact decision tree, minimizes that tree, and checks it against the original
//! truth set by exhaustive enumeration.
//!
//! ## Pipeline
//!
//! 1. **Build**: [`Bdt::build`][crate::bdt::Bdt::build] partitions the true inputs on
//!    `x1`, `x2`, ..., `xn` in order, producing one tree level per variable.
//! 2. **Reduce**: [`Bdt::reduce`][crate::bdt::Bdt::reduce] merges sibling subtrees that
//!    are structurally identical, removing redundant variable tests.
//! 3. **Evaluate / verify**: [`Bdt::eval`][crate::bdt::Bdt::eval] answers a single query;
//!    [`Bdt::verify`][crate::bdt::Bdt::verify] enumerates all `2^n` inputs.
//!
//! Nodes are kept in an arena owned by the [`Bdt`][crate::bdt::Bdt] manager and referenced
//! through lightweight [`Ref`][crate::reference::Ref] handles. Variables are 1-indexed:
//! `x1` tests the first character of an input string.
//!
//! ## Basic Usage
//!
//! ```rust
//! use cbdt::bdt::Bdt;
//! use cbdt::truth::TruthSet;
//!
//! // f(x1, x2) = x1 AND x2
//! let set = TruthSet::from_strs(["11"]).unwrap();
//!
//! let mut bdt = Bdt::default();
//! let root = bdt.build_compact(&set);
//!
//! assert_eq!(bdt.eval(root, "11"), Some(true));
//! assert_eq!(bdt.eval(root, "10"), Some(false));
//! assert!(bdt.mismatches(root, &set).is_empty());
//! assert_eq!(bdt.size(root), 5);
//!
//! // Teardown releases every node of the tree.
//! if let Some(root) = root {
//!     bdt.delete(root);
//! }
//! assert_eq!(bdt.live_nodes(), 0);
//! ```

pub mod bdt;
pub mod eval;
pub mod node;
pub mod reference;
pub mod sat;
pub mod storage;
pub mod truth;
pub mod types;
pub mod verify;
