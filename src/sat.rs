use num_bigint::BigUint;

use crate::bdt::Bdt;
use crate::node::Node;
use crate::reference::Ref;

impl Bdt {
    /// Number of inputs over `num_vars` variables on which the tree evaluates to true.
    ///
    /// Skipped variables are counted on both branches, so reduced and unreduced trees of the
    /// same function give the same count. An absent tree has no satisfying input.
    pub fn sat_count(&self, root: Option<Ref>, num_vars: usize) -> BigUint {
        let max = BigUint::from(2u32).pow(num_vars as u32);
        match root {
            None => BigUint::ZERO,
            Some(node) => self._sat_count(node, &max),
        }
    }

    fn _sat_count(&self, node: Ref, max: &BigUint) -> BigUint {
        match self.node(node) {
            Node::Leaf(false) => BigUint::ZERO,
            Node::Leaf(true) => max.clone(),
            Node::Branch { low, high, .. } => {
                let count_low = self._sat_count(low, max);
                let count_high = self._sat_count(high, max);
                (count_low + count_high) >> 1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::truth::TruthSet;

    #[test]
    fn test_sat_count_matches_truth_set() {
        let set = TruthSet::from_strs(["0010", "0111", "1000", "1011", "1111"]).unwrap();
        let mut bdt = Bdt::default();
        let root = bdt.build(&set);
        assert_eq!(bdt.sat_count(root, 4), BigUint::from(5u32));
        let root = root.map(|r| bdt.reduce(r));
        assert_eq!(bdt.sat_count(root, 4), BigUint::from(5u32));
    }

    #[test]
    fn test_sat_count_constants() {
        let mut bdt = Bdt::default();
        let one = bdt.mk_leaf(true);
        let zero = bdt.mk_leaf(false);
        assert_eq!(bdt.sat_count(Some(one), 3), BigUint::from(8u32));
        assert_eq!(bdt.sat_count(Some(zero), 3), BigUint::ZERO);
        assert_eq!(bdt.sat_count(None, 3), BigUint::ZERO);
    }
}
