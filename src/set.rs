//! Numerical sets: finite gap sets and their invariants.
use std::fmt;

use crate::error::{Error, Result};
use crate::partition::Partition;
use crate::El;

/// A numerical set, given by its finite set of gaps.
///
/// The gaps are the positive integers missing from the set; the set itself is the complement
/// of the gaps in the naturals. A numerical set is not required to be closed under addition —
/// that refinement is [`NumericalSemigroup`][crate::NumericalSemigroup].
///
/// The *Frobenius number* is the largest gap, or `None` when there are no gaps.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct NumericalSet {
    // Sorted ascending, no repeats.
    gaps: Box<[El]>,
}

impl NumericalSet {
    /// Create a numerical set from a collection of gaps.
    ///
    /// Repeats are dropped and the order of the input is irrelevant. Gaps must be positive.
    pub fn new<I>(gaps: I) -> Result<NumericalSet>
    where
        I: IntoIterator<Item = El>,
    {
        let mut gaps: Vec<El> = gaps.into_iter().collect();
        if gaps.contains(&0) {
            return Err(Error::ZeroGap);
        }
        gaps.sort_unstable();
        gaps.dedup();
        Ok(Self::from_sorted_unchecked(gaps))
    }

    pub(crate) fn from_sorted_unchecked(gaps: Vec<El>) -> NumericalSet {
        debug_assert!(gaps.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(gaps.first().map_or(true, |&g| g > 0));
        NumericalSet {
            gaps: gaps.into_boxed_slice(),
        }
    }

    /// The gaps, sorted ascending.
    pub fn gaps(&self) -> &[El] {
        &self.gaps
    }

    /// The genus: the number of gaps.
    pub fn genus(&self) -> usize {
        self.gaps.len()
    }

    /// The Frobenius number: the largest gap, or `None` when the set is all of the naturals.
    pub fn frobenius_number(&self) -> Option<El> {
        self.gaps.last().copied()
    }

    /// Whether `x` is a gap of this set.
    pub fn is_gap(&self, x: El) -> bool {
        self.gaps.binary_search(&x).is_ok()
    }

    /// The gaps of the atom monoid, sorted ascending.
    ///
    /// An integer `x` is a gap of the atom monoid when `x + t` is a gap for some non-gap
    /// `t <= F`. The candidates range over `0..=2F`. The set is the gap set of a numerical
    /// semigroup exactly when this closure reproduces the gaps unchanged.
    pub fn atom_monoid_gaps(&self) -> Vec<El> {
        let frobenius = match self.frobenius_number() {
            Some(frobenius) => frobenius,
            None => return Vec::new(),
        };
        let non_gaps: Vec<El> = (0..=frobenius).filter(|&t| !self.is_gap(t)).collect();
        (0..=2 * frobenius)
            .filter(|&x| non_gaps.iter().any(|&t| self.is_gap(x + t)))
            .collect()
    }

    /// Whether the gaps form the gap set of a numerical semigroup.
    pub fn is_semigroup(&self) -> bool {
        self.atom_monoid_gaps() == self.gaps()
    }

    /// The partition whose profile gaps are this set's gaps.
    ///
    /// This is the inverse of [`Partition::gaps`][crate::Partition::gaps]: walking
    /// `0..=F`, the running row length grows on every non-gap and is emitted at every gap.
    pub fn partition(&self) -> Partition {
        Partition::from_parts_unchecked(parts_from_gaps(&self.gaps))
    }

    /// The small elements: the non-gaps strictly below the Frobenius number.
    pub fn small_elements(&self) -> Vec<El> {
        match self.frobenius_number() {
            None => Vec::new(),
            Some(frobenius) => (0..frobenius).filter(|&s| !self.is_gap(s)).collect(),
        }
    }

    /// The multiplicity: the smallest positive element of the set.
    ///
    /// Returns 1 when there are no gaps, and `F + 1` when 0 is the only small element.
    pub fn multiplicity(&self) -> El {
        let small = self.small_elements();
        if small.is_empty() {
            return 1;
        }
        match small.iter().find(|&&s| s != 0) {
            Some(&m) => m,
            None => self.gaps[self.gaps.len() - 1] + 1,
        }
    }
}

/// Partition parts read off a sorted gap list by the inverse profile walk.
pub(crate) fn parts_from_gaps(gaps: &[El]) -> Vec<El> {
    let frobenius = match gaps.last() {
        Some(&frobenius) => frobenius,
        None => return Vec::new(),
    };
    let mut parts = Vec::new();
    let mut row: El = 0;
    for i in 0..=frobenius {
        if gaps.binary_search(&i).is_ok() {
            if row > 0 {
                parts.push(row);
            }
        } else {
            row += 1;
        }
    }
    parts.sort_unstable_by(|a, b| b.cmp(a));
    parts
}

impl fmt::Display for NumericalSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "NumericalSet(genus={}, frobenius={})",
            self.genus(),
            self.frobenius_number().map_or(-1, |frobenius| frobenius as i64)
        )
    }
}

impl fmt::Debug for NumericalSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
