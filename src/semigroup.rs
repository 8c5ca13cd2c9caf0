//! Numerical semigroups and the genus tree.
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use num_integer::gcd;
use once_cell::sync::OnceCell;

use crate::error::{Error, Result};
use crate::partition::Partition;
use crate::set::NumericalSet;
use crate::El;

/// A numerical semigroup, given by its gap set.
///
/// A numerical semigroup is a numerical set whose complement is closed under addition,
/// equivalently a [`NumericalSet`] whose gap set is a fixed point of the atom monoid closure.
/// Construction from gaps validates this; construction from generators computes the gaps and
/// is correct by construction.
///
/// The *genus tree* connects semigroups of adjacent genus: removing an effective generator
/// (a minimal generator above the Frobenius number) yields a child of genus one higher, and
/// removing the Frobenius number from the gap set yields the parent of genus one lower.
#[derive(Clone)]
pub struct NumericalSemigroup {
    set: NumericalSet,
    min_gens: OnceCell<Box<[El]>>,
    pseudofrobenius: OnceCell<Box<[El]>>,
}

impl NumericalSemigroup {
    /// The trivial semigroup: all of the naturals, genus 0.
    pub fn trivial() -> NumericalSemigroup {
        Self::from_set_unchecked(NumericalSet::default())
    }

    /// Create a numerical semigroup from an explicit gap set.
    ///
    /// Fails when the gaps are not a fixed point of the atom monoid closure.
    pub fn from_gaps<I>(gaps: I) -> Result<NumericalSemigroup>
    where
        I: IntoIterator<Item = El>,
    {
        let set = NumericalSet::new(gaps)?;
        if !set.is_semigroup() {
            return Err(Error::NotASemigroup);
        }
        Ok(Self::from_set_unchecked(set))
    }

    /// Create a numerical semigroup from a set of generators.
    ///
    /// The generators must be positive and coprime. Generators that are sums of two others
    /// are discarded, the product `B` of the remaining generators bounds every gap, and the
    /// gaps are the integers in `1..B` unreachable as sums of generators.
    pub fn from_generators<I>(generators: I) -> Result<NumericalSemigroup>
    where
        I: IntoIterator<Item = El>,
    {
        let generators: BTreeSet<El> = generators.into_iter().collect();
        if generators.contains(&0) {
            return Err(Error::ZeroGenerator);
        }
        if generators.is_empty() {
            return Err(Error::EmptyGenerators);
        }
        if generators.iter().fold(0, |acc, &g| gcd(acc, g)) != 1 {
            return Err(Error::GeneratorsNotCoprime);
        }

        let reduced = reduce_by_sums(generators.into_iter().collect());
        let bound = reduced.iter().map(|&g| g as u64).product::<u64>() as usize;

        let mut reachable = vec![false; bound];
        for i in 1..bound {
            for &g in &reduced {
                let g = g as usize;
                if i >= g && (i == g || reachable[i - g]) {
                    reachable[i] = true;
                    break;
                }
            }
        }
        let gaps = (1..bound).filter(|&i| !reachable[i]).map(|i| i as El).collect();
        Ok(Self::from_set_unchecked(NumericalSet::from_sorted_unchecked(gaps)))
    }

    fn from_set_unchecked(set: NumericalSet) -> NumericalSemigroup {
        debug_assert!(set.is_semigroup());
        NumericalSemigroup {
            set,
            min_gens: OnceCell::new(),
            pseudofrobenius: OnceCell::new(),
        }
    }

    /// The underlying numerical set.
    pub fn as_set(&self) -> &NumericalSet {
        &self.set
    }

    /// The gaps, sorted ascending.
    pub fn gaps(&self) -> &[El] {
        self.set.gaps()
    }

    /// The genus: the number of gaps.
    pub fn genus(&self) -> usize {
        self.set.genus()
    }

    /// The Frobenius number: the largest gap, or `None` for the trivial semigroup.
    pub fn frobenius_number(&self) -> Option<El> {
        self.set.frobenius_number()
    }

    /// Whether `x` is a gap.
    pub fn is_gap(&self, x: El) -> bool {
        self.set.is_gap(x)
    }

    /// The multiplicity: the smallest nonzero element of the semigroup.
    pub fn multiplicity(&self) -> El {
        self.set.multiplicity()
    }

    /// The small elements: the elements strictly below the Frobenius number.
    pub fn small_elements(&self) -> Vec<El> {
        self.set.small_elements()
    }

    /// The partition associated to the gap set.
    pub fn partition(&self) -> Partition {
        self.set.partition()
    }

    /// The minimal generating set, sorted ascending.
    ///
    /// Uses the Rosales–Vasco congruence approach: one witness element per residue class
    /// modulo the multiplicity, reduced to a fixed point by discarding pairwise sums.
    pub fn minimal_generating_set(&self) -> &[El] {
        self.min_gens
            .get_or_init(|| self.compute_minimal_generators().into_boxed_slice())
    }

    fn compute_minimal_generators(&self) -> Vec<El> {
        let multiplicity = self.multiplicity();
        if multiplicity == 1 {
            return vec![1];
        }
        let candidates = self.generator_candidates();
        if multiplicity == 2 {
            // The unique odd candidate generates together with 2.
            let odd = candidates.iter().copied().find(|g| g % 2 == 1);
            return match odd {
                Some(odd) => vec![2, odd],
                None => vec![2],
            };
        }

        let mut witnesses = vec![multiplicity];
        for residue in 1..multiplicity {
            if let Some(&g) = candidates.iter().find(|&&g| g % multiplicity == residue) {
                witnesses.push(g);
            }
        }
        witnesses.sort_unstable();
        reduce_by_sums(witnesses)
    }

    /// One non-gap witness per residue class modulo the multiplicity, sorted ascending.
    ///
    /// Classes without a witness below the Frobenius number get one from the `m` integers
    /// right above it.
    fn generator_candidates(&self) -> Vec<El> {
        let multiplicity = self.multiplicity();
        let frobenius = self.frobenius_number().unwrap_or(0);
        let mut generators = vec![multiplicity];
        let mut classes = vec![0];
        for i in multiplicity + 1..frobenius {
            if !self.is_gap(i) && !classes.contains(&(i % multiplicity)) {
                generators.push(i);
                classes.push(i % multiplicity);
            }
        }
        for i in frobenius + 1..=frobenius + multiplicity {
            if !classes.contains(&(i % multiplicity)) {
                generators.push(i);
            }
        }
        generators
    }

    /// The Apéry set with respect to `n`, sorted ascending.
    ///
    /// For each residue class modulo `n` this is the smallest element of the semigroup in
    /// that class. Fails when `n` is itself a gap; `n = 0` yields the empty set.
    pub fn apery_set(&self, n: El) -> Result<Vec<El>> {
        if self.is_gap(n) {
            return Err(Error::InvalidAperyModulus(n));
        }
        let mut apery: Vec<El> = (0..n)
            .map(|k| {
                let mut x = k;
                while self.is_gap(x) {
                    x += n;
                }
                x
            })
            .collect();
        apery.sort_unstable();
        Ok(apery)
    }

    /// The pseudo-Frobenius numbers, sorted ascending.
    ///
    /// These are the differences `gap - small element` occurring exactly once over all pairs
    /// with the gap above the small element.
    pub fn pseudofrobenius_numbers(&self) -> &[El] {
        self.pseudofrobenius.get_or_init(|| {
            let mut counts: HashMap<El, usize> = HashMap::new();
            for s in self.small_elements() {
                for &gap in self.gaps() {
                    if gap > s {
                        *counts.entry(gap - s).or_insert(0) += 1;
                    }
                }
            }
            let mut unique: Vec<El> = counts
                .into_iter()
                .filter(|&(_, count)| count == 1)
                .map(|(value, _)| value)
                .collect();
            unique.sort_unstable();
            unique.into_boxed_slice()
        })
    }

    /// The type: the number of pseudo-Frobenius numbers.
    pub fn semigroup_type(&self) -> usize {
        self.pseudofrobenius_numbers().len()
    }

    /// The void: gaps whose reflection about the Frobenius number is also a gap.
    pub fn void(&self) -> Vec<El> {
        match self.frobenius_number() {
            None => Vec::new(),
            Some(frobenius) => self
                .gaps()
                .iter()
                .copied()
                .filter(|&g| self.is_gap(frobenius - g))
                .collect(),
        }
    }

    /// The gap poset as raw elements and `>=` relations.
    ///
    /// `(y, x)` is a relation when `x <= y` and `y - x` is an element of the semigroup.
    /// Feed the pair to [`gap_poset`][crate::gaps::gap_poset] for a validated
    /// [`Poset`][crate::Poset].
    pub fn gap_poset(&self) -> (Vec<El>, Vec<(El, El)>) {
        let gaps = self.gaps().to_vec();
        let relations = self.divisibility_relations(&gaps);
        (gaps, relations)
    }

    /// The void poset as raw elements and `>=` relations, ordered like the gap poset.
    pub fn void_poset(&self) -> (Vec<El>, Vec<(El, El)>) {
        let void = self.void();
        let relations = self.divisibility_relations(&void);
        (void, relations)
    }

    fn divisibility_relations(&self, elements: &[El]) -> Vec<(El, El)> {
        let mut relations = Vec::new();
        for &x in elements {
            for &y in elements {
                if x <= y && !self.is_gap(y - x) {
                    relations.push((y, x));
                }
            }
        }
        relations
    }

    /// The special gaps: gaps that can be adjoined to the semigroup.
    ///
    /// A pseudo-Frobenius number is special when none of its multiples up to the Frobenius
    /// number is a gap.
    pub fn special_gaps(&self) -> Vec<El> {
        let frobenius = match self.frobenius_number() {
            Some(frobenius) => frobenius,
            None => return Vec::new(),
        };
        self.pseudofrobenius_numbers()
            .iter()
            .copied()
            .filter(|&p| (2..=frobenius / p).all(|k| !self.is_gap(k * p)))
            .collect()
    }

    /// Adjoin a special gap to the semigroup, lowering the genus by one.
    ///
    /// Fails when `p` is not currently a special gap.
    pub fn add_special_gap(&self, p: El) -> Result<NumericalSemigroup> {
        if !self.special_gaps().contains(&p) {
            return Err(Error::NotASpecialGap(p));
        }
        let gaps = self.gaps().iter().copied().filter(|&g| g != p).collect();
        Ok(Self::from_set_unchecked(NumericalSet::from_sorted_unchecked(gaps)))
    }

    /// Remove a minimal generator from the semigroup, raising the genus by one.
    ///
    /// Fails when `n` is not a minimal generator.
    pub fn remove_minimal_generator(&self, n: El) -> Result<NumericalSemigroup> {
        if !self.minimal_generating_set().contains(&n) {
            return Err(Error::NotAMinimalGenerator(n));
        }
        Ok(self.remove_generator_unchecked(n))
    }

    /// Removal of a generator known to be minimal.
    pub(crate) fn remove_generator_unchecked(&self, n: El) -> NumericalSemigroup {
        debug_assert!(self.minimal_generating_set().contains(&n));
        let mut gaps = self.gaps().to_vec();
        let position = match gaps.binary_search(&n) {
            Ok(position) | Err(position) => position,
        };
        gaps.insert(position, n);
        Self::from_set_unchecked(NumericalSet::from_sorted_unchecked(gaps))
    }

    /// The effective generators: minimal generators above the Frobenius number.
    ///
    /// Removing one raises the genus by exactly one while keeping the Frobenius number equal
    /// to the removed generator; these are the edges of the genus tree.
    pub fn effective_generators(&self) -> Vec<El> {
        let frobenius = self.frobenius_number();
        self.minimal_generating_set()
            .iter()
            .copied()
            .filter(|&g| frobenius.map_or(true, |frobenius| g > frobenius))
            .collect()
    }

    /// The effective weight: gaps above each minimal generator, summed over the generators.
    pub fn effective_weight(&self) -> usize {
        self.minimal_generating_set()
            .iter()
            .map(|&g| self.gaps().iter().filter(|&&gap| gap > g).count())
            .sum()
    }

    /// The children in the genus tree, one per effective generator.
    pub fn children(&self) -> Vec<NumericalSemigroup> {
        self.effective_generators()
            .into_iter()
            .map(|g| self.remove_generator_unchecked(g))
            .collect()
    }

    /// The children in the Frobenius-preserving tree, one per special gap below the
    /// Frobenius number.
    pub fn frob_children(&self) -> Vec<NumericalSemigroup> {
        let frobenius = self.frobenius_number();
        self.special_gaps()
            .into_iter()
            .filter(|&p| Some(p) != frobenius)
            .filter_map(|p| self.add_special_gap(p).ok())
            .collect()
    }

    /// The parent in the genus tree: the Frobenius number leaves the gap set.
    ///
    /// `None` for the trivial semigroup.
    pub fn parent(&self) -> Option<NumericalSemigroup> {
        let gaps = self.gaps();
        if gaps.is_empty() {
            return None;
        }
        let parent = gaps[..gaps.len() - 1].to_vec();
        Some(Self::from_set_unchecked(NumericalSet::from_sorted_unchecked(parent)))
    }
}

/// Discard elements that are sums of two elements of the set, to a fixed point.
///
/// The input and output are sorted ascending.
fn reduce_by_sums(mut elements: Vec<El>) -> Vec<El> {
    loop {
        let max = match elements.last() {
            Some(&max) => max,
            None => return elements,
        };
        let mut sums = HashSet::new();
        for (i, &x) in elements.iter().enumerate() {
            for &y in &elements[i..] {
                if x + y > max {
                    break;
                }
                sums.insert(x + y);
            }
        }
        let before = elements.len();
        elements.retain(|value| !sums.contains(value));
        if elements.len() == before {
            return elements;
        }
    }
}

impl PartialEq for NumericalSemigroup {
    fn eq(&self, other: &NumericalSemigroup) -> bool {
        self.set == other.set
    }
}

impl Eq for NumericalSemigroup {}

impl std::hash::Hash for NumericalSemigroup {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.set.hash(state);
    }
}

impl fmt::Display for NumericalSemigroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "NumericalSemigroup(genus={}, frobenius={})",
            self.genus(),
            self.frobenius_number().map_or(-1, |frobenius| frobenius as i64)
        )
    }
}

impl fmt::Debug for NumericalSemigroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use proptest::prelude::*;

    pub(crate) fn random_semigroup() -> impl Strategy<Value = NumericalSemigroup> {
        prop::collection::btree_set(2..20u32, 1..4)
            .prop_filter("generators must be coprime", |generators| {
                generators.iter().fold(0, |acc, &g| gcd(acc, g)) == 1
            })
            .prop_map(|generators| NumericalSemigroup::from_generators(generators).unwrap())
    }

    #[test]
    fn from_generators_three_five() {
        let s = NumericalSemigroup::from_generators(vec![3, 5]).unwrap();
        assert_eq!(s.gaps(), &[1, 2, 4, 7]);
        assert_eq!(s.frobenius_number(), Some(7));
        assert_eq!(s.multiplicity(), 3);
        assert_eq!(s.genus(), 4);
        assert_eq!(s.minimal_generating_set(), &[3, 5]);
    }

    #[test]
    fn from_generators_two_three() {
        let s = NumericalSemigroup::from_generators(vec![2, 3]).unwrap();
        assert_eq!(s.gaps(), &[1]);
        assert_eq!(s.multiplicity(), 2);
        assert_eq!(s.minimal_generating_set(), &[2, 3]);
    }

    #[test]
    fn redundant_generators_are_discarded() {
        let a = NumericalSemigroup::from_generators(vec![3, 5, 8]).unwrap();
        let b = NumericalSemigroup::from_generators(vec![3, 5]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generators_of_one() {
        let s = NumericalSemigroup::from_generators(vec![1]).unwrap();
        assert_eq!(s, NumericalSemigroup::trivial());
        assert_eq!(s.genus(), 0);
        assert_eq!(s.frobenius_number(), None);
        assert_eq!(s.minimal_generating_set(), &[1]);
    }

    #[test]
    fn invalid_generator_sets() {
        assert_eq!(
            NumericalSemigroup::from_generators(vec![0, 3]),
            Err(Error::ZeroGenerator)
        );
        assert_eq!(
            NumericalSemigroup::from_generators(vec![]),
            Err(Error::EmptyGenerators)
        );
        assert_eq!(
            NumericalSemigroup::from_generators(vec![2, 4]),
            Err(Error::GeneratorsNotCoprime)
        );
    }

    #[test]
    fn from_gaps_validates_closure() {
        assert!(NumericalSemigroup::from_gaps(vec![1, 2, 4, 7]).is_ok());
        assert_eq!(
            NumericalSemigroup::from_gaps(vec![1, 4]),
            Err(Error::NotASemigroup)
        );
    }

    #[test]
    fn maximal_embedding_dimension_generators() {
        let s = NumericalSemigroup::from_gaps(vec![1, 2, 3]).unwrap();
        assert_eq!(s.minimal_generating_set(), &[4, 5, 6, 7]);
    }

    #[test]
    fn apery_set_of_three_five() {
        let s = NumericalSemigroup::from_generators(vec![3, 5]).unwrap();
        assert_eq!(s.apery_set(3).unwrap(), vec![0, 5, 10]);
        assert_eq!(s.apery_set(0).unwrap(), Vec::<El>::new());
        assert_eq!(s.apery_set(7), Err(Error::InvalidAperyModulus(7)));
    }

    #[test]
    fn pseudofrobenius_and_type() {
        let s = NumericalSemigroup::from_generators(vec![3, 5]).unwrap();
        assert_eq!(s.pseudofrobenius_numbers(), &[7]);
        assert_eq!(s.semigroup_type(), 1);

        let s = NumericalSemigroup::from_generators(vec![3, 5, 7]).unwrap();
        assert_eq!(s.gaps(), &[1, 2, 4]);
        assert_eq!(s.pseudofrobenius_numbers(), &[2, 4]);
        assert_eq!(s.semigroup_type(), 2);
    }

    #[test]
    fn void_of_pseudosymmetric_semigroup() {
        let s = NumericalSemigroup::from_generators(vec![3, 5, 7]).unwrap();
        assert_eq!(s.void(), vec![2]);
        // symmetric semigroups have an empty void
        let s = NumericalSemigroup::from_generators(vec![3, 5]).unwrap();
        assert!(s.void().is_empty());
    }

    #[test]
    fn gap_poset_relations() {
        let s = NumericalSemigroup::from_generators(vec![3, 5, 7]).unwrap();
        let (elements, mut relations) = s.gap_poset();
        relations.sort_unstable();
        assert_eq!(elements, vec![1, 2, 4]);
        assert_eq!(relations, vec![(1, 1), (2, 2), (4, 1), (4, 4)]);

        let (void, void_relations) = s.void_poset();
        assert_eq!(void, vec![2]);
        assert_eq!(void_relations, vec![(2, 2)]);
    }

    #[test]
    fn special_gaps_and_adjoining() {
        let s = NumericalSemigroup::from_generators(vec![3, 5, 7]).unwrap();
        assert_eq!(s.special_gaps(), vec![4]);
        let up = s.add_special_gap(4).unwrap();
        assert_eq!(up.gaps(), &[1, 2]);
        assert_eq!(s.add_special_gap(2), Err(Error::NotASpecialGap(2)));
    }

    #[test]
    fn frob_children_preserve_the_frobenius_number() {
        let s = NumericalSemigroup::from_gaps(vec![1, 2, 3]).unwrap();
        assert_eq!(s.special_gaps(), vec![2, 3]);
        let children = s.frob_children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].gaps(), &[1, 3]);
        assert_eq!(children[0].frobenius_number(), s.frobenius_number());
    }

    #[test]
    fn removing_a_minimal_generator() {
        let s = NumericalSemigroup::from_generators(vec![2, 3]).unwrap();
        let out = s.remove_minimal_generator(3).unwrap();
        assert_eq!(out.gaps(), &[1, 3]);
        assert_eq!(
            s.remove_minimal_generator(5),
            Err(Error::NotAMinimalGenerator(5))
        );
    }

    #[test]
    fn effective_generators_and_leaves() {
        // <3,5> has no minimal generator above its Frobenius number: a leaf of the tree.
        let s = NumericalSemigroup::from_generators(vec![3, 5]).unwrap();
        assert!(s.effective_generators().is_empty());
        assert!(s.children().is_empty());

        let s = NumericalSemigroup::from_generators(vec![3, 4]).unwrap();
        assert_eq!(s.gaps(), &[1, 2, 5]);
        assert_eq!(s.minimal_generating_set(), &[3, 4]);
        assert!(s.effective_generators().is_empty());
    }

    #[test]
    fn children_of_the_trivial_semigroup() {
        let children = NumericalSemigroup::trivial().children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].gaps(), &[1]);
        assert!(NumericalSemigroup::trivial().parent().is_none());
    }

    #[test]
    fn effective_weight_examples() {
        let s = NumericalSemigroup::from_generators(vec![3, 5]).unwrap();
        assert_eq!(s.effective_weight(), 3);
        let s = NumericalSemigroup::from_generators(vec![4, 5, 6]).unwrap();
        assert_eq!(s.gaps(), &[1, 2, 3, 7]);
        assert_eq!(s.effective_weight(), 3);
    }

    #[test]
    fn larger_two_generator_semigroup() {
        let s = NumericalSemigroup::from_generators(vec![5, 7]).unwrap();
        assert_eq!(s.frobenius_number(), Some(23));
        assert_eq!(s.genus(), 12);
        assert_eq!(s.minimal_generating_set(), &[5, 7]);
        assert_eq!(s.apery_set(5).unwrap(), vec![0, 7, 14, 21, 28]);
        assert_eq!(s.pseudofrobenius_numbers(), &[23]);
    }

    proptest! {
        #[test]
        fn closure_is_a_fixed_point(s in random_semigroup()) {
            prop_assert_eq!(s.as_set().atom_monoid_gaps(), s.gaps());
        }

        #[test]
        fn minimal_generators_regenerate_the_semigroup(s in random_semigroup()) {
            let generators: Vec<El> = s.minimal_generating_set().to_vec();
            let regenerated = NumericalSemigroup::from_generators(generators).unwrap();
            prop_assert_eq!(regenerated, s);
        }

        #[test]
        fn apery_sets_cover_every_residue(s in random_semigroup()) {
            for n in 1..10u32 {
                if s.is_gap(n) {
                    continue;
                }
                let apery = s.apery_set(n).unwrap();
                prop_assert_eq!(apery.len(), n as usize);
                let mut residues: Vec<El> = apery.iter().map(|&a| a % n).collect();
                residues.sort_unstable();
                prop_assert_eq!(residues, (0..n).collect::<Vec<_>>());
                for &a in &apery {
                    prop_assert!(!s.is_gap(a));
                }
            }
        }

        #[test]
        fn children_raise_the_genus_by_one(s in random_semigroup()) {
            for child in s.children() {
                prop_assert_eq!(child.genus(), s.genus() + 1);
                prop_assert_eq!(child.parent().unwrap(), s.clone());
            }
        }

        #[test]
        fn parent_lowers_the_genus_by_one(s in random_semigroup()) {
            if let Some(parent) = s.parent() {
                prop_assert_eq!(parent.genus(), s.genus() - 1);
            } else {
                prop_assert_eq!(s.genus(), 0);
            }
        }

        #[test]
        fn minimal_generators_are_not_sums(s in random_semigroup()) {
            let generators = s.minimal_generating_set();
            for (i, &x) in generators.iter().enumerate() {
                for &y in &generators[i..] {
                    prop_assert!(!generators.contains(&(x + y)));
                }
            }
        }
    }
}
