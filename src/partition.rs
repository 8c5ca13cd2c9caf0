//! Integer partitions and their gap-set profile.
use std::fmt;

use once_cell::sync::OnceCell;

use crate::error::{Error, Result};
use crate::El;

/// A single move of the profile walk along a partition's boundary.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    /// Consume one column of the current row.
    Right,
    /// Move to the previous row.
    Up,
}

/// An integer partition (Young diagram).
///
/// A partition is a non-increasing sequence of positive integers. Construction also accepts
/// the reversed (non-decreasing) orientation and normalizes it; everything else is rejected.
///
/// Walking the boundary of the diagram from the bottom-left corner to the top-right corner
/// yields the partition's *profile*, a sequence of [`Step`]s. The 0-indexed positions of the
/// `Up` steps are the *gaps* of the partition; this is the bijection with
/// [`NumericalSet`][crate::NumericalSet] gap sets.
#[derive(Clone, Default)]
pub struct Partition {
    parts: Box<[El]>,
    hooks: OnceCell<Vec<Vec<El>>>,
}

impl Partition {
    /// Create a partition from a list of parts.
    ///
    /// Parts must be positive and non-increasing, or non-decreasing (in which case the list
    /// is reversed).
    pub fn new(mut parts: Vec<El>) -> Result<Partition> {
        if parts.iter().any(|&p| p == 0) {
            return Err(Error::ZeroPart);
        }
        if !is_non_increasing(&parts) {
            parts.reverse();
            if !is_non_increasing(&parts) {
                return Err(Error::UnsortedPartition);
            }
        }
        Ok(Self::from_parts_unchecked(parts))
    }

    pub(crate) fn from_parts_unchecked(parts: Vec<El>) -> Partition {
        debug_assert!(parts.iter().all(|&p| p > 0));
        debug_assert!(is_non_increasing(&parts));
        Partition {
            parts: parts.into_boxed_slice(),
            hooks: OnceCell::new(),
        }
    }

    /// The parts, non-increasing.
    pub fn parts(&self) -> &[El] {
        &self.parts
    }

    /// The number of boxes of the diagram.
    pub fn size(&self) -> El {
        self.parts.iter().sum()
    }

    /// The conjugate (transposed) partition.
    ///
    /// `conjugate[i]` counts the parts larger than `i`.
    pub fn conjugate(&self) -> Partition {
        let width = self.parts.first().copied().unwrap_or(0);
        let conj = (0..width)
            .map(|i| self.parts.iter().filter(|&&p| p > i).count() as El)
            .collect();
        Partition::from_parts_unchecked(conj)
    }

    /// The hook length of every cell, row by row.
    ///
    /// The hook at cell `(i, j)` counts the cells to its right, the cells below it and the
    /// cell itself: `arm + leg + 1`, where the leg is read off the conjugate partition.
    pub fn hook_lengths(&self) -> &[Vec<El>] {
        self.hooks.get_or_init(|| {
            let conj = self.conjugate();
            let conj = conj.parts();
            self.parts
                .iter()
                .enumerate()
                .map(|(i, &p)| {
                    (0..p as usize)
                        .map(|j| {
                            let arm = p - j as El - 1;
                            let leg = conj[j] - i as El - 1;
                            arm + leg + 1
                        })
                        .collect()
                })
                .collect()
        })
    }

    /// The boundary profile, walked from the bottom-left corner.
    ///
    /// While the current column lies inside the current row the walk steps [`Step::Right`],
    /// otherwise it steps [`Step::Up`] to the previous row. The walk ends at the top-right
    /// corner of the diagram.
    pub fn profile(&self) -> Vec<Step> {
        if self.parts.is_empty() {
            return Vec::new();
        }
        let width = self.parts[0];
        let mut moves = Vec::new();
        let mut row = self.parts.len() as isize - 1;
        let mut col: El = 0;
        while row >= 0 && col < width {
            while col < self.parts[row as usize] {
                moves.push(Step::Right);
                col += 1;
            }
            while row >= 0 && col >= self.parts[row as usize] {
                moves.push(Step::Up);
                row -= 1;
            }
        }
        moves
    }

    /// The gaps of the partition: positions of the `Up` steps in the profile.
    ///
    /// Sorted ascending. The first profile step of a non-empty partition is always `Right`,
    /// so 0 is never a gap.
    pub fn gaps(&self) -> Vec<El> {
        self.profile()
            .iter()
            .enumerate()
            .filter(|&(_, &step)| step == Step::Up)
            .map(|(i, _)| i as El)
            .collect()
    }

    /// The non-gaps below the largest gap.
    pub fn non_gaps(&self) -> Vec<El> {
        let gaps = self.gaps();
        match gaps.last() {
            None => Vec::new(),
            Some(&frobenius) => (0..frobenius)
                .filter(|x| gaps.binary_search(x).is_err())
                .collect(),
        }
    }

    /// The gaps of the atom monoid: the hook-length multiset with repeats removed.
    ///
    /// Sorted ascending.
    pub fn atom_monoid_gaps(&self) -> Vec<El> {
        let mut hooks: Vec<El> = self.hook_lengths().iter().flatten().copied().collect();
        hooks.sort_unstable();
        hooks.dedup();
        hooks
    }

    /// The atom partition, reconstructed from the hook-length multiset.
    ///
    /// For every integer present among the hook lengths the atom partition gains a part equal
    /// to the number of smaller integers *absent* from the hook lengths. A partition is a
    /// semigroup partition exactly when this reconstruction is the identity.
    pub fn atom_partition(&self) -> Partition {
        let hooks = self.atom_monoid_gaps();
        let max = match hooks.last() {
            Some(&max) => max,
            None => return Partition::default(),
        };
        let mut parts = Vec::with_capacity(hooks.len());
        let mut absent: El = 0;
        for i in 0..=max {
            if hooks.binary_search(&i).is_ok() {
                // 0 is never a hook length, so at least one integer is absent by now
                parts.push(absent);
            } else {
                absent += 1;
            }
        }
        parts.sort_unstable_by(|a, b| b.cmp(a));
        Partition::from_parts_unchecked(parts)
    }

    /// Whether the gaps of this partition form a numerical semigroup.
    pub fn is_semigroup(&self) -> bool {
        self.atom_partition() == *self
    }
}

fn is_non_increasing(parts: &[El]) -> bool {
    parts.windows(2).all(|w| w[0] >= w[1])
}

impl PartialEq for Partition {
    fn eq(&self, other: &Partition) -> bool {
        self.parts == other.parts
    }
}

impl Eq for Partition {}

impl std::hash::Hash for Partition {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.parts.hash(state);
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Partition(size={})", self.size())
    }
}

impl fmt::Debug for Partition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Partition({:?})", self.parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::set::NumericalSet;

    fn random_partition() -> impl Strategy<Value = Partition> {
        prop::collection::vec(1..20u32, 0..10).prop_map(|mut parts| {
            parts.sort_unstable_by(|a, b| b.cmp(a));
            Partition::new(parts).unwrap()
        })
    }

    #[test]
    fn rejects_zero_parts() {
        assert_eq!(Partition::new(vec![3, 0, 1]), Err(Error::ZeroPart));
    }

    #[test]
    fn rejects_unsorted_parts() {
        assert_eq!(Partition::new(vec![2, 3, 1]), Err(Error::UnsortedPartition));
    }

    #[test]
    fn accepts_reversed_parts() {
        assert_eq!(
            Partition::new(vec![1, 1, 3]).unwrap(),
            Partition::new(vec![3, 1, 1]).unwrap()
        );
    }

    #[test]
    fn conjugate_of_hook_shape() {
        let p = Partition::new(vec![3, 1]).unwrap();
        assert_eq!(p.conjugate().parts(), &[2, 1, 1]);
    }

    #[test]
    fn profile_of_hook_shape() {
        use Step::{Right, Up};
        let p = Partition::new(vec![3, 1]).unwrap();
        assert_eq!(p.profile(), vec![Right, Up, Right, Right, Up]);
        assert_eq!(p.gaps(), vec![1, 4]);
        assert_eq!(p.non_gaps(), vec![0, 2, 3]);
    }

    #[test]
    fn hook_lengths_of_hook_shape() {
        let p = Partition::new(vec![3, 1]).unwrap();
        assert_eq!(p.hook_lengths(), &[vec![4, 2, 1], vec![1]]);
        assert_eq!(p.atom_monoid_gaps(), vec![1, 2, 4]);
    }

    #[test]
    fn atom_partition_of_hook_shape() {
        let p = Partition::new(vec![3, 1]).unwrap();
        assert_eq!(p.atom_partition().parts(), &[2, 1, 1]);
        assert!(!p.is_semigroup());
    }

    #[test]
    fn staircase_is_semigroup_partition() {
        let p = Partition::new(vec![2, 1]).unwrap();
        assert_eq!(p.gaps(), vec![1, 3]);
        assert_eq!(p.atom_partition().parts(), &[2, 1]);
        assert!(p.is_semigroup());
    }

    #[test]
    fn empty_partition() {
        let p = Partition::new(vec![]).unwrap();
        assert!(p.profile().is_empty());
        assert!(p.gaps().is_empty());
        assert_eq!(p.conjugate().parts(), &[] as &[El]);
        assert!(p.atom_partition().parts().is_empty());
        assert_eq!(p.size(), 0);
    }

    proptest! {
        #[test]
        fn roundtrip_through_gap_set(p in random_partition()) {
            let set = NumericalSet::new(p.gaps()).unwrap();
            prop_assert_eq!(set.partition(), p);
        }

        #[test]
        fn conjugate_is_an_involution(p in random_partition()) {
            prop_assert_eq!(p.conjugate().conjugate(), p);
        }

        #[test]
        fn conjugate_preserves_size(p in random_partition()) {
            prop_assert_eq!(p.conjugate().size(), p.size());
        }

        #[test]
        fn hook_formulas_agree(p in random_partition()) {
            // arm + leg + 1, with the leg counted directly instead of via the conjugate
            let parts = p.parts();
            let hooks = p.hook_lengths();
            for (i, row) in hooks.iter().enumerate() {
                prop_assert_eq!(row.len() as El, parts[i]);
                for (j, &hook) in row.iter().enumerate() {
                    let arm = parts[i] as i64 - j as i64 - 1;
                    let leg = parts[i + 1..]
                        .iter()
                        .filter(|&&lower| lower as usize > j)
                        .count() as i64;
                    prop_assert_eq!(hook as i64, arm + leg + 1);
                }
            }
        }

        #[test]
        fn profile_length_is_width_plus_height(p in random_partition()) {
            let rights = p.parts().first().copied().unwrap_or(0) as usize;
            let ups = p.parts().len();
            prop_assert_eq!(p.profile().len(), rights + ups);
            prop_assert_eq!(p.gaps().len(), ups);
        }
    }
}
