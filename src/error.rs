//! Validation errors.
//!
//! Every failure in this crate is a synchronous validation error: either a malformed value
//! (non-positive entries, unordered partitions, gap sets that are not closed) or a violated
//! domain precondition. Nothing is retryable.
use thiserror::Error;

use crate::El;

/// Error type for all fallible constructions and operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A gap set contained 0. Gaps are positive integers.
    #[error("gaps must be positive integers")]
    ZeroGap,

    /// A generator set contained 0. Generators are positive integers.
    #[error("generators must be positive integers")]
    ZeroGenerator,

    /// A generator set was empty.
    #[error("generator set must be non-empty")]
    EmptyGenerators,

    /// The generators have a common divisor, so the complement is infinite.
    #[error("generators must be coprime")]
    GeneratorsNotCoprime,

    /// A partition part was 0. Parts are positive integers.
    #[error("partition parts must be positive integers")]
    ZeroPart,

    /// The part list is not non-increasing in either orientation.
    #[error("partition must be non-increasing or the reverse of a non-increasing sequence")]
    UnsortedPartition,

    /// A gap set passed to `NumericalSemigroup` is not a fixed point of the atom monoid
    /// closure.
    #[error("gap set is not the gap set of a numerical semigroup")]
    NotASemigroup,

    /// The Apéry modulus is a gap of the atom monoid.
    #[error("{0} is a gap of the atom monoid and has no Apéry set")]
    InvalidAperyModulus(El),

    /// The element is not a minimal generator of the semigroup.
    #[error("{0} is not a minimal generator")]
    NotAMinimalGenerator(El),

    /// The element is not a special gap of the semigroup.
    #[error("{0} is not a special gap")]
    NotASpecialGap(El),

    /// A Kunz polyhedron needs a positive multiplicity.
    #[error("multiplicity must be a positive integer")]
    ZeroMultiplicity,

    /// A poset relation mentions an element outside the element set.
    #[error("relation ({0}, {1}) mentions an element outside the poset")]
    UnknownElement(El, El),

    /// An element of a poset is not related to itself.
    #[error("reflexivity violated for element {0}")]
    Reflexivity(El),

    /// Two distinct poset elements are related in both directions.
    #[error("antisymmetry violated for pair ({0}, {1})")]
    Antisymmetry(El, El),

    /// Two chained poset relations have no composite.
    #[error("transitivity violated for pairs ({0}, {1}) and ({1}, {2})")]
    Transitivity(El, El, El),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
