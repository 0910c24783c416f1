use std::fmt::{Display, Formatter};

/// Handle to a node slot inside a [`Bdt`][crate::bdt::Bdt] arena.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Ref(u32);

impl Ref {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Return the internal representation of the reference.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Return the arena index of the reference.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for Ref {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Ref::new(7).to_string(), "@7");
        assert_eq!(Ref::new(7).index(), 7);
    }
}
