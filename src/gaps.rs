//! The gap-set capability shared by sets, semigroups and partitions.
use crate::error::Result;
use crate::partition::Partition;
use crate::poset::Poset;
use crate::semigroup::NumericalSemigroup;
use crate::set::{parts_from_gaps, NumericalSet};
use crate::El;

/// Types that expose a finite gap set and its atom monoid.
///
/// [`NumericalSet`], [`NumericalSemigroup`] and [`Partition`] all carry a gap set — directly,
/// or through the profile bijection — and with it an atom monoid. This trait is the seam for
/// operations generic over all three.
pub trait GapStructure {
    /// The gap set, sorted ascending.
    fn gap_set(&self) -> Vec<El>;

    /// The gap set of the atom monoid, sorted ascending.
    fn atom_monoid_gap_set(&self) -> Vec<El>;
}

impl GapStructure for NumericalSet {
    fn gap_set(&self) -> Vec<El> {
        self.gaps().to_vec()
    }

    fn atom_monoid_gap_set(&self) -> Vec<El> {
        self.atom_monoid_gaps()
    }
}

impl GapStructure for NumericalSemigroup {
    fn gap_set(&self) -> Vec<El> {
        self.gaps().to_vec()
    }

    // A semigroup's gap set is its own closure.
    fn atom_monoid_gap_set(&self) -> Vec<El> {
        self.gaps().to_vec()
    }
}

impl GapStructure for Partition {
    fn gap_set(&self) -> Vec<El> {
        self.gaps()
    }

    fn atom_monoid_gap_set(&self) -> Vec<El> {
        self.atom_monoid_gaps()
    }
}

/// The atom monoid of a value, as a numerical semigroup.
pub fn atom_monoid<T>(value: &T) -> Result<NumericalSemigroup>
where
    T: GapStructure + ?Sized,
{
    NumericalSemigroup::from_gaps(value.atom_monoid_gap_set())
}

/// The partition whose profile gaps are the value's gap set.
pub fn partition_of<T>(value: &T) -> Partition
where
    T: GapStructure + ?Sized,
{
    Partition::from_parts_unchecked(parts_from_gaps(&value.gap_set()))
}

/// The gap poset of a semigroup, validated.
pub fn gap_poset(semigroup: &NumericalSemigroup) -> Result<Poset> {
    let (elements, relations) = semigroup.gap_poset();
    Poset::new(elements, relations)
}

/// The void poset of a semigroup, validated.
pub fn void_poset(semigroup: &NumericalSemigroup) -> Result<Poset> {
    let (elements, relations) = semigroup.void_poset();
    Poset::new(elements, relations)
}
