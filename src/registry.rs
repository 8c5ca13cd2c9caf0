//! Value-keyed interning of the entity types.
//!
//! Equal gap sets, part lists or poset data describe the same logical object. A [`Registry`]
//! hands out one shared instance per value, so derived computations memoized on an instance
//! are shared by everything that refers to it. Registries are explicit objects: independent
//! registries do not share instances, and nothing in this crate keeps a hidden global one.
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;
use crate::partition::Partition;
use crate::poset::Poset;
use crate::semigroup::NumericalSemigroup;
use crate::set::NumericalSet;
use crate::El;

type PosetKey = (Box<[El]>, Box<[(El, El)]>);

/// An interning cache for sets, semigroups, partitions and posets.
///
/// Construction through a registry validates exactly like the plain constructors, then
/// returns the canonical [`Arc`] for the value: constructing an equal value twice yields
/// pointer-identical instances. Under concurrent construction of an equal value the first
/// inserted instance wins and every caller receives it. Entries live until [`clear`][Self::clear].
#[derive(Default)]
pub struct Registry {
    sets: RwLock<HashMap<Box<[El]>, Arc<NumericalSet>>>,
    semigroups: RwLock<HashMap<Box<[El]>, Arc<NumericalSemigroup>>>,
    partitions: RwLock<HashMap<Box<[El]>, Arc<Partition>>>,
    posets: RwLock<HashMap<PosetKey, Arc<Poset>>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Registry {
        Registry::default()
    }

    /// The canonical numerical set with the given gaps.
    pub fn numerical_set<I>(&self, gaps: I) -> Result<Arc<NumericalSet>>
    where
        I: IntoIterator<Item = El>,
    {
        let set = NumericalSet::new(gaps)?;
        let key = set.gaps().into();
        Ok(intern(&self.sets, key, || set))
    }

    /// The canonical numerical semigroup with the given gaps.
    pub fn semigroup_from_gaps<I>(&self, gaps: I) -> Result<Arc<NumericalSemigroup>>
    where
        I: IntoIterator<Item = El>,
    {
        let semigroup = NumericalSemigroup::from_gaps(gaps)?;
        self.intern_semigroup(semigroup)
    }

    /// The canonical numerical semigroup with the given generators.
    pub fn semigroup_from_generators<I>(&self, generators: I) -> Result<Arc<NumericalSemigroup>>
    where
        I: IntoIterator<Item = El>,
    {
        let semigroup = NumericalSemigroup::from_generators(generators)?;
        self.intern_semigroup(semigroup)
    }

    fn intern_semigroup(&self, semigroup: NumericalSemigroup) -> Result<Arc<NumericalSemigroup>> {
        let key = semigroup.gaps().into();
        Ok(intern(&self.semigroups, key, || semigroup))
    }

    /// The canonical partition with the given parts.
    pub fn partition(&self, parts: Vec<El>) -> Result<Arc<Partition>> {
        let partition = Partition::new(parts)?;
        let key = partition.parts().into();
        Ok(intern(&self.partitions, key, || partition))
    }

    /// The canonical poset with the given elements and relations.
    pub fn poset<E, R>(&self, elements: E, relations: R) -> Result<Arc<Poset>>
    where
        E: IntoIterator<Item = El>,
        R: IntoIterator<Item = (El, El)>,
    {
        let poset = Poset::new(elements, relations)?;
        let key = (
            poset.elements().into(),
            poset.relations().iter().copied().collect(),
        );
        Ok(intern(&self.posets, key, || poset))
    }

    /// The number of interned instances across all entity types.
    pub fn len(&self) -> usize {
        self.sets.read().len()
            + self.semigroups.read().len()
            + self.partitions.read().len()
            + self.posets.read().len()
    }

    /// Whether the registry holds no instances.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every interned instance.
    ///
    /// Instances already handed out stay alive through their `Arc`s; subsequent
    /// constructions produce fresh canonical instances.
    pub fn clear(&self) {
        self.sets.write().clear();
        self.semigroups.write().clear();
        self.partitions.write().clear();
        self.posets.write().clear();
    }
}

/// Look up or insert under a canonical key. The first inserted instance wins a race.
fn intern<K, V>(map: &RwLock<HashMap<K, Arc<V>>>, key: K, build: impl FnOnce() -> V) -> Arc<V>
where
    K: Eq + Hash,
{
    if let Some(existing) = map.read().get(&key) {
        return existing.clone();
    }
    let candidate = Arc::new(build());
    map.write().entry(key).or_insert(candidate).clone()
}
