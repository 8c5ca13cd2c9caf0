//! A numerical semigroup and partition library
//!
//! This crate provides data structures and algorithms for working with numerical semigroups,
//! their gap sets and the bijection with integer partitions: minimal generating sets, Apéry
//! sets, pseudo-Frobenius numbers, gap and void posets, Kunz coordinates and the genus tree.
//!
pub mod error;
pub mod gaps;
pub mod genus;
pub mod kunz;
pub mod partition;
pub mod poset;
pub mod registry;
pub mod semigroup;
pub mod set;
pub mod walk;

pub use crate::error::{Error, Result};
pub use crate::gaps::{atom_monoid, gap_poset, partition_of, void_poset, GapStructure};
pub use crate::genus::{with_genus, with_max_genus};
pub use crate::kunz::{kunz_tuple, KunzPolyhedron};
pub use crate::partition::{Partition, Step};
pub use crate::poset::Poset;
pub use crate::registry::Registry;
pub use crate::semigroup::NumericalSemigroup;
pub use crate::set::NumericalSet;
pub use crate::walk::{random_graph_walk, random_semigroup_with_genus, random_tree_walk};

/// Set element.
///
/// Gaps, generators and partition parts are represented by non-negative integers (`u32`).
pub type El = u32;
