//! Finite partially ordered sets.
use std::collections::BTreeSet;
use std::fmt;

use once_cell::sync::OnceCell;

use crate::error::{Error, Result};
use crate::El;

/// A finite poset over [`El`] elements.
///
/// Relations are ordered pairs `(a, b)` meaning `a >= b`, stored reflexively closed. The
/// poset laws — reflexivity, antisymmetry and transitivity — are checked at construction;
/// a violation is an error, never silently tolerated.
#[derive(Clone, Default)]
pub struct Poset {
    elements: Box<[El]>,
    relations: BTreeSet<(El, El)>,
    covers: OnceCell<Vec<(El, El)>>,
}

impl Poset {
    /// Create a poset from its elements and `>=` relations.
    ///
    /// Every relation must stay within the element set and the poset laws must hold.
    pub fn new<E, R>(elements: E, relations: R) -> Result<Poset>
    where
        E: IntoIterator<Item = El>,
        R: IntoIterator<Item = (El, El)>,
    {
        let elements: BTreeSet<El> = elements.into_iter().collect();
        let relations: BTreeSet<(El, El)> = relations.into_iter().collect();

        for &(a, b) in &relations {
            if !elements.contains(&a) || !elements.contains(&b) {
                return Err(Error::UnknownElement(a, b));
            }
        }
        for &e in &elements {
            if !relations.contains(&(e, e)) {
                return Err(Error::Reflexivity(e));
            }
        }
        for &(a, b) in &relations {
            if a != b && relations.contains(&(b, a)) {
                return Err(Error::Antisymmetry(a, b));
            }
        }
        for &(a, b) in &relations {
            for &(_, c) in relations.range((b, El::MIN)..=(b, El::MAX)) {
                if !relations.contains(&(a, c)) {
                    return Err(Error::Transitivity(a, b, c));
                }
            }
        }

        Ok(Poset {
            elements: elements.into_iter().collect(),
            relations,
            covers: OnceCell::new(),
        })
    }

    /// The elements, sorted ascending.
    pub fn elements(&self) -> &[El] {
        &self.elements
    }

    /// The `>=` relations, reflexively closed.
    pub fn relations(&self) -> &BTreeSet<(El, El)> {
        &self.relations
    }

    /// Whether `x <= y` holds in this poset.
    pub fn le(&self, x: El, y: El) -> bool {
        self.relations.contains(&(y, x))
    }

    /// A new poset with one more element, related only to itself.
    pub fn add_element(&self, element: El) -> Result<Poset> {
        let elements = self.elements.iter().copied().chain([element]);
        let relations = self.relations.iter().copied().chain([(element, element)]);
        Poset::new(elements, relations)
    }

    /// A new poset with one more `a >= b` relation.
    ///
    /// Fails when either element is unknown or the enlarged relation set breaks a poset law.
    pub fn add_relation(&self, a: El, b: El) -> Result<Poset> {
        if self.elements.binary_search(&a).is_err() || self.elements.binary_search(&b).is_err() {
            return Err(Error::UnknownElement(a, b));
        }
        let relations = self.relations.iter().copied().chain([(a, b)]);
        Poset::new(self.elements.iter().copied(), relations)
    }

    /// The cover relations: pairs `(a, b)`, `a > b`, with no element strictly between.
    ///
    /// Sorted ascending; always a subset of the relations.
    pub fn cover_relations(&self) -> &[(El, El)] {
        self.covers.get_or_init(|| {
            self.relations
                .iter()
                .copied()
                .filter(|&(a, b)| a != b && !self.has_intermediate(a, b))
                .collect()
        })
    }

    fn has_intermediate(&self, a: El, b: El) -> bool {
        self.relations
            .range((a, El::MIN)..=(a, El::MAX))
            .any(|&(_, c)| c != a && c != b && self.relations.contains(&(c, b)))
    }
}

impl PartialEq for Poset {
    fn eq(&self, other: &Poset) -> bool {
        self.elements == other.elements && self.relations == other.relations
    }
}

impl Eq for Poset {}

impl fmt::Display for Poset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Poset with {} elements and {} relations",
            self.elements.len(),
            self.relations.len()
        )
    }
}

impl fmt::Debug for Poset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
