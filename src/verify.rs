//! Exhaustive verification of a tree against its truth set.
//!
//! [`Bdt::verify`] walks all `2^n` inputs in counting order (`00..0`, `00..1`, ..., `11..1`),
//! evaluates each one and compares the result with membership in the truth set. Records are
//! produced lazily; printing them is up to the caller.
//!
//! ```
//! use cbdt::bdt::Bdt;
//! use cbdt::truth::TruthSet;
//!
//! let set = TruthSet::from_strs(["11"]).unwrap();
//! let mut bdt = Bdt::default();
//! let root = bdt.build_compact(&set);
//!
//! let lines: Vec<String> = bdt.verify(root, &set).map(|v| v.to_string()).collect();
//! assert_eq!(lines, ["00| 0", "01| 0", "10| 0", "11| 1"]);
//! assert!(bdt.mismatches(root, &set).is_empty());
//! ```

use std::fmt;

use crate::bdt::Bdt;
use crate::reference::Ref;
use crate::truth::{Assignment, TruthSet};

/// Text shown when a tree yields no result.
pub const NO_RESULT: &str = "Solution Could Not Be Found.";

/// Outcome of evaluating one enumerated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub input: Assignment,
    pub result: Option<bool>,
    /// The result disagrees with the truth set.
    pub is_error: bool,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.input.is_empty() {
            write!(f, "ALL INPUTS")?;
        } else {
            write!(f, "{}", self.input)?;
        }
        match self.result {
            Some(value) => write!(f, "| {}", value as u8),
            None => write!(f, "| {}", NO_RESULT),
        }
    }
}

/// Lazy enumeration of [`Verdict`]s, created by [`Bdt::verify`].
pub struct Verification<'a> {
    bdt: &'a Bdt,
    root: Option<Ref>,
    set: &'a TruthSet,
    next: u64,
    total: u64,
}

impl<'a> Verification<'a> {
    pub fn new(bdt: &'a Bdt, root: Option<Ref>, set: &'a TruthSet) -> Self {
        let total = match root {
            Some(_) => 1u64 << set.num_vars(),
            None => 0,
        };
        Verification {
            bdt,
            root,
            set,
            next: 0,
            total,
        }
    }
}

impl Iterator for Verification<'_> {
    type Item = Verdict;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }

        let input = Assignment::from_index(self.next, self.set.num_vars());
        self.next += 1;

        let result = self.bdt.eval(self.root, &input);
        let expected = self.set.contains(&input);
        let is_error = (result == Some(true)) != expected;

        Some(Verdict {
            input,
            result,
            is_error,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Verification<'_> {}

impl Bdt {
    /// Enumerates every input of width `set.num_vars()` and checks the tree on it.
    ///
    /// An absent tree yields no records. With no variables, a single record with an empty
    /// input is produced.
    pub fn verify<'a>(&'a self, root: Option<Ref>, set: &'a TruthSet) -> Verification<'a> {
        Verification::new(self, root, set)
    }

    /// Inputs on which the tree disagrees with `set`, in enumeration order.
    pub fn mismatches(&self, root: Option<Ref>, set: &TruthSet) -> Vec<Assignment> {
        self.verify(root, set)
            .filter(|verdict| verdict.is_error)
            .map(|verdict| verdict.input)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::types::Var;

    #[test]
    fn test_verify_all_inputs() {
        let set = TruthSet::from_strs(["000", "111"]).unwrap();
        let mut bdt = Bdt::default();
        let root = bdt.build_compact(&set);

        let verdicts: Vec<Verdict> = bdt.verify(root, &set).collect();
        assert_eq!(verdicts.len(), 8);
        assert!(verdicts.iter().all(|v| !v.is_error));
        assert_eq!(verdicts[0].to_string(), "000| 1");
        assert_eq!(verdicts[1].to_string(), "001| 0");
        assert_eq!(verdicts[7].to_string(), "111| 1");
    }

    #[test]
    fn test_verify_detects_mismatch() {
        let set = TruthSet::from_strs(["01"]).unwrap();
        let mut bdt = Bdt::default();
        // A tree for x1 instead of (!x1 & x2).
        let low = bdt.mk_leaf(false);
        let high = bdt.mk_leaf(true);
        let root = Some(bdt.mk_branch(Var::new(1), low, high));

        let errors: Vec<String> = bdt
            .mismatches(root, &set)
            .iter()
            .map(|a| a.to_string())
            .collect();
        assert_eq!(errors, ["01", "10", "11"]);
    }

    #[test]
    fn test_verify_no_variables() {
        let set = TruthSet::from_strs([""]).unwrap();
        let mut bdt = Bdt::default();
        let root = bdt.build_compact(&set);

        let lines: Vec<String> = bdt.verify(root, &set).map(|v| v.to_string()).collect();
        assert_eq!(lines, ["ALL INPUTS| 1"]);
    }

    #[test]
    fn test_verify_empty_tree() {
        let set = TruthSet::new(2).unwrap();
        let bdt = Bdt::default();
        assert_eq!(bdt.verify(None, &set).count(), 0);
        assert!(bdt.mismatches(None, &set).is_empty());
    }

    #[test]
    fn test_verdict_no_result() {
        let verdict = Verdict {
            input: "10".parse().unwrap(),
            result: None,
            is_error: false,
        };
        assert_eq!(verdict.to_string(), "10| Solution Could Not Be Found.");
    }
}
