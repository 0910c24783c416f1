//! Truth sets: the inputs on which a boolean function is declared true.
//!
//! An [`Assignment`] is one fixed-width binary input, written most-significant
//! (first variable) first, e.g. `"011"` assigns `x1 = 0`, `x2 = 1`, `x3 = 1`.
//! A [`TruthSet`] is an ordered, duplicate-free collection of assignments that all
//! share the same width. Malformed data is rejected here, before any tree is built.
//!
//! # Examples
//!
//! ```
//! use cbdt::truth::TruthSet;
//!
//! let set = TruthSet::from_strs(["011", "110"]).unwrap();
//! assert_eq!(set.num_vars(), 3);
//! assert!(set.contains(&"110".parse().unwrap()));
//! assert!(TruthSet::from_strs(["01", "01"]).is_err());
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while assembling a [`TruthSet`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TruthSetError {
    #[error("Invalid digit '{found}' at position {position}, expected '0' or '1'")]
    InvalidDigit { position: usize, found: char },

    #[error("Input {input} has {found} digits, expected {expected}")]
    LengthMismatch {
        input: String,
        expected: usize,
        found: usize,
    },

    #[error("Input {0} was already given")]
    Duplicate(String),

    #[error("{0} variables requested, at most {max} supported", max = TruthSet::MAX_VARS)]
    TooManyVariables(usize),

    #[error("At least one true input is required")]
    Empty,
}

/// A single binary input.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Assignment(Vec<bool>);

impl Assignment {
    pub fn new(bits: Vec<bool>) -> Self {
        Self(bits)
    }

    /// Builds the `index`-th input of width `num_vars` in enumeration order,
    /// where the first position is the most significant bit.
    pub fn from_index(index: u64, num_vars: usize) -> Self {
        let bits = (0..num_vars)
            .map(|i| (index >> (num_vars - 1 - i)) & 1 == 1)
            .collect();
        Self(bits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at a 0-based position, `None` if out of range.
    pub fn get(&self, position: usize) -> Option<bool> {
        self.0.get(position).copied()
    }

    pub fn bits(&self) -> &[bool] {
        &self.0
    }
}

impl FromStr for Assignment {
    type Err = TruthSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(TruthSetError::InvalidDigit { position, found }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Assignment)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            write!(f, "{}", bit as u8)?;
        }
        Ok(())
    }
}

/// Inputs for which the represented function is true.
#[derive(Debug, Clone, Default)]
pub struct TruthSet {
    num_vars: usize,
    rows: Vec<Assignment>,
    seen: HashSet<Assignment>,
}

impl TruthSet {
    /// Largest supported number of variables; `2^n` must fit into a `u64`.
    pub const MAX_VARS: usize = 63;

    pub fn new(num_vars: usize) -> Result<Self, TruthSetError> {
        if num_vars > Self::MAX_VARS {
            return Err(TruthSetError::TooManyVariables(num_vars));
        }
        Ok(Self {
            num_vars,
            rows: Vec::new(),
            seen: HashSet::new(),
        })
    }

    /// Parses binary strings; the first one fixes the number of variables.
    pub fn from_strs<I, S>(inputs: I) -> Result<Self, TruthSetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inputs = inputs.into_iter();
        let first: Assignment = inputs.next().ok_or(TruthSetError::Empty)?.as_ref().parse()?;
        let mut set = TruthSet::new(first.len())?;
        set.insert(first)?;
        for input in inputs {
            set.insert(input.as_ref().parse()?)?;
        }
        Ok(set)
    }

    /// Adds an input, rejecting duplicates and inputs of the wrong width.
    pub fn insert(&mut self, input: Assignment) -> Result<(), TruthSetError> {
        if input.len() != self.num_vars {
            return Err(TruthSetError::LengthMismatch {
                input: input.to_string(),
                expected: self.num_vars,
                found: input.len(),
            });
        }
        if self.seen.contains(&input) {
            return Err(TruthSetError::Duplicate(input.to_string()));
        }
        self.seen.insert(input.clone());
        self.rows.push(input);
        Ok(())
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether every one of the `2^n` inputs is present.
    pub fn is_complete(&self) -> bool {
        self.rows.len() as u64 == 1u64 << self.num_vars
    }

    pub fn contains(&self, input: &Assignment) -> bool {
        self.seen.contains(input)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a TruthSet {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_parse_assignment() {
        let a: Assignment = "0110".parse().unwrap();
        assert_eq!(a.bits(), &[false, true, true, false]);
        assert_eq!(a.to_string(), "0110");
        assert_eq!(a.get(1), Some(true));
        assert_eq!(a.get(4), None);
    }

    #[test]
    fn test_parse_invalid_digit() {
        let err = "01x".parse::<Assignment>().unwrap_err();
        assert_eq!(
            err,
            TruthSetError::InvalidDigit {
                position: 2,
                found: 'x'
            }
        );
    }

    #[test]
    fn test_from_index_order() {
        let inputs: Vec<String> = (0..4).map(|i| Assignment::from_index(i, 2).to_string()).collect();
        assert_eq!(inputs, vec!["00", "01", "10", "11"]);
        assert!(Assignment::from_index(0, 0).is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut set = TruthSet::new(2).unwrap();
        set.insert("10".parse().unwrap()).unwrap();
        let err = set.insert("10".parse().unwrap()).unwrap_err();
        assert_eq!(err, TruthSetError::Duplicate("10".to_string()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = TruthSet::from_strs(["101", "10"]).unwrap_err();
        assert!(matches!(
            err,
            TruthSetError::LengthMismatch {
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_and_limits() {
        let none: [&str; 0] = [];
        assert_eq!(TruthSet::from_strs(none).unwrap_err(), TruthSetError::Empty);
        assert_eq!(
            TruthSet::new(64).unwrap_err(),
            TruthSetError::TooManyVariables(64)
        );
    }

    #[test]
    fn test_complete() {
        let set = TruthSet::from_strs(["00", "01", "10", "11"]).unwrap();
        assert!(set.is_complete());
        let set = TruthSet::from_strs(["00", "11"]).unwrap();
        assert!(!set.is_complete());
        let set = TruthSet::from_strs([""]).unwrap();
        assert_eq!(set.num_vars(), 0);
        assert!(set.is_complete());
    }
}
