//! Enumeration of the genus tree.
//!
//! The genus tree is rooted at the trivial semigroup and every semigroup of genus `g` sits
//! at depth `g`, reached by removing one effective generator at a time.
use std::collections::VecDeque;

use crate::semigroup::NumericalSemigroup;

/// All numerical semigroups of the given genus.
pub fn with_genus(genus: usize) -> Vec<NumericalSemigroup> {
    let mut found = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back((NumericalSemigroup::trivial(), 0));
    while let Some((node, depth)) = queue.pop_front() {
        if depth == genus {
            found.push(node);
        } else {
            for child in node.children() {
                queue.push_back((child, depth + 1));
            }
        }
    }
    found
}

/// All numerical semigroups of genus at most the given bound, in breadth-first order.
pub fn with_max_genus(genus: usize) -> Vec<NumericalSemigroup> {
    let mut found = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back((NumericalSemigroup::trivial(), 0));
    while let Some((node, depth)) = queue.pop_front() {
        if depth < genus {
            for child in node.children() {
                queue.push_back((child, depth + 1));
            }
        }
        found.push(node);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_the_genus_sequence() {
        let counts: Vec<usize> = (0..7).map(|g| with_genus(g).len()).collect();
        assert_eq!(counts, vec![1, 1, 2, 4, 7, 12, 23]);
    }

    #[test]
    fn genus_two_semigroups() {
        let found = with_genus(2);
        let gaps: Vec<&[u32]> = found.iter().map(|s| s.gaps()).collect();
        assert_eq!(gaps, vec![&[1, 2][..], &[1, 3][..]]);
    }

    #[test]
    fn bounded_enumeration_nests() {
        let found = with_max_genus(3);
        assert_eq!(found.len(), 1 + 1 + 2 + 4);
        assert!(found.iter().all(|s| s.genus() <= 3));
        // breadth first: genus is non-decreasing along the output
        let genera: Vec<usize> = found.iter().map(|s| s.genus()).collect();
        let mut sorted = genera.clone();
        sorted.sort_unstable();
        assert_eq!(genera, sorted);
    }

    #[test]
    fn every_enumerated_semigroup_has_the_right_depth() {
        for g in 0..5 {
            for s in with_genus(g) {
                assert_eq!(s.genus(), g);
            }
        }
    }
}
