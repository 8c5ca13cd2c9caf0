//! Random descents through the genus tree.
use rand::Rng;

use crate::semigroup::NumericalSemigroup;

/// A random numerical semigroup of the given genus.
///
/// Starting from the trivial semigroup, removes a uniformly random minimal generator
/// `genus` times. This follows the random construction of the GAP `numericalsgps` package.
pub fn random_semigroup_with_genus<R>(genus: usize, rng: &mut R) -> NumericalSemigroup
where
    R: Rng + ?Sized,
{
    random_graph_walk(&NumericalSemigroup::trivial(), genus, rng)
}

/// Walk down from `start`, removing a uniformly random minimal generator at each step.
///
/// Every step raises the genus by one; this walk can leave the subtree below `start`.
pub fn random_graph_walk<R>(start: &NumericalSemigroup, steps: usize, rng: &mut R) -> NumericalSemigroup
where
    R: Rng + ?Sized,
{
    let mut current = start.clone();
    for _ in 0..steps {
        let generators = current.minimal_generating_set();
        // never empty: the multiplicity is always a minimal generator
        let chosen = generators[rng.gen_range(0..generators.len())];
        current = current.remove_generator_unchecked(chosen);
    }
    current
}

/// Walk down from `start`, removing a uniformly random *effective* generator at each step.
///
/// This walk stays inside the genus tree below `start`. It short-circuits to `None` when a
/// node has no effective generator (a leaf of the tree) before the steps are exhausted.
pub fn random_tree_walk<R>(
    start: &NumericalSemigroup,
    steps: usize,
    rng: &mut R,
) -> Option<NumericalSemigroup>
where
    R: Rng + ?Sized,
{
    let mut current = start.clone();
    for _ in 0..steps {
        let effective = current.effective_generators();
        if effective.is_empty() {
            return None;
        }
        let chosen = effective[rng.gen_range(0..effective.len())];
        current = current.remove_generator_unchecked(chosen);
    }
    Some(current)
}
