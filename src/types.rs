//! Type-safe wrappers for tree variables and node labels.
//!
//! A node label is either a tested variable (`x1`, `x2`, ...) or a terminal value.
//! Keeping both in a tagged enum means evaluation never parses variable names.
use std::fmt;

/// A variable identifier (1-indexed).
///
/// Variable `x_k` tests the `k`-th character of an input string.
///
/// # Invariants
///
/// - Variable IDs must be >= 1
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a new variable with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id == 0`. Variables must be 1-indexed.
    pub fn new(id: u32) -> Self {
        assert_ne!(id, 0, "Variable IDs must be >= 1");
        Var(id)
    }

    /// Returns the raw variable ID as a `u32`.
    pub fn id(self) -> u32 {
        self.0
    }

    /// Returns the 0-based position this variable tests in an input.
    pub fn position(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl From<Var> for u32 {
    fn from(var: Var) -> Self {
        var.0
    }
}

/// Label carried by a tree node.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Label {
    /// Leaf with a constant output.
    Terminal(bool),
    /// Internal node testing a variable.
    Variable(Var),
}

impl Label {
    pub fn is_terminal(self) -> bool {
        matches!(self, Label::Terminal(_))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Terminal(value) => write!(f, "{}", *value as u8),
            Label::Variable(var) => write!(f, "{}", var),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_creation() {
        let v1 = Var::new(1);
        let v2 = Var::new(2);
        assert_eq!(v1.id(), 1);
        assert_eq!(v2.position(), 1);
        assert!(v1 < v2);
    }

    #[test]
    #[should_panic(expected = "Variable IDs must be >= 1")]
    fn test_var_zero_panics() {
        Var::new(0);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Terminal(false).to_string(), "0");
        assert_eq!(Label::Terminal(true).to_string(), "1");
        assert_eq!(Label::Variable(Var::new(3)).to_string(), "x3");
        assert!(Label::Terminal(true).is_terminal());
        assert!(!Label::Variable(Var::new(3)).is_terminal());
    }
}
