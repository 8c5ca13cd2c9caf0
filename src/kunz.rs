//! Kunz coordinates of numerical semigroups.
use crate::error::{Error, Result};
use crate::semigroup::NumericalSemigroup;
use crate::El;

/// The Kunz tuple of a semigroup: normalized Apéry values in residue order.
///
/// With `m` the multiplicity and `A` the Apéry set of `m`, the tuple lists
/// `a / m` for the unique `a` in `A` congruent to each residue `1, ..., m - 1` in turn.
/// The trivial semigroup has the empty tuple.
pub fn kunz_tuple(semigroup: &NumericalSemigroup) -> Result<Vec<El>> {
    let m = semigroup.multiplicity();
    let apery = semigroup.apery_set(m)?;
    let mut tuple = Vec::with_capacity((m as usize).saturating_sub(1));
    for residue in 1..m {
        for &a in &apery {
            if a % m == residue {
                tuple.push(a / m);
                break;
            }
        }
    }
    Ok(tuple)
}

/// The Kunz polyhedron for a fixed multiplicity `m`.
///
/// Its integer points with first coordinate 0 are exactly the Kunz tuples (prefixed with
/// `x_0 = 0`) of numerical semigroups of multiplicity dividing `m`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct KunzPolyhedron {
    m: El,
}

impl KunzPolyhedron {
    /// Create the polyhedron for multiplicity `m`. Fails for `m = 0`.
    pub fn new(m: El) -> Result<KunzPolyhedron> {
        if m == 0 {
            return Err(Error::ZeroMultiplicity);
        }
        Ok(KunzPolyhedron { m })
    }

    /// The multiplicity.
    pub fn multiplicity(&self) -> El {
        self.m
    }

    /// Whether `point` is a point of the polyhedron.
    ///
    /// `point` is a full coordinate vector `(x_0, ..., x_{m-1})`; slices of any other length
    /// are not points. The defining inequalities are `x_i + x_j >= x_{i+j}` with indices
    /// taken modulo `m` and the left side increased by one whenever `i + j` wraps.
    pub fn is_point(&self, point: &[El]) -> bool {
        let m = self.m as usize;
        if point.len() != m {
            return false;
        }
        for i in 0..m {
            for j in i..m {
                let (lhs, rhs) = if i + j < m {
                    (point[i] + point[j], point[i + j])
                } else {
                    (point[i] + point[j] + 1, point[i + j - m])
                };
                if lhs < rhs {
                    return false;
                }
            }
        }
        true
    }
}
