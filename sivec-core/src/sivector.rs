//! Dimension-tagged vectors outside the typed kind system.
//!
//! An [`SiVector`] carries SI-standard values and a runtime dimension
//! signature, but no quantity kind. It is the currency of cross-kind
//! arithmetic: multiplying a force vector by a length vector yields an
//! `SiVector` tagged `kg m2 s-2`, and only an explicit
//! [`SiVector::as_quantity`] cast decides whether those numbers are
//! energies or torques. The cast validates dimensions and fails loudly on
//! a mismatch; it never guesses.

use core::fmt;
use std::sync::Arc;

use crate::dimensions::SiDimensions;
use crate::error::{QuantityError, Result};
use crate::kind::QuantityKind;
use crate::storage::{Iter, StorageKind, VectorData};
use crate::unit::{registry, Unit};
use crate::vector::QuantityVector;

/// A vector of SI-standard values tagged with a runtime dimension
/// signature.
#[derive(Clone, Debug)]
pub struct SiVector {
    data: Arc<VectorData>,
    unit: Unit,
}

impl SiVector {
    /// Builds a vector of SI values for the given dimension signature,
    /// e.g. `"kg m2 s-2"`. The unit is resolved through the registry.
    pub fn of(values: &[f64], signature: &str, kind: StorageKind) -> Result<Self> {
        let dims: SiDimensions = signature.parse()?;
        Ok(SiVector {
            data: Arc::new(VectorData::from_si(values, kind)),
            unit: registry::resolve(dims),
        })
    }

    /// Builds from a sparse index→value mapping of SI values.
    pub fn of_map(
        pairs: &[(usize, f64)],
        size: usize,
        signature: &str,
        kind: StorageKind,
    ) -> Result<Self> {
        let dims: SiDimensions = signature.parse()?;
        Ok(SiVector {
            data: Arc::new(VectorData::from_map(
                pairs,
                size,
                &crate::scale::Scale::IDENTITY,
                kind,
            )?),
            unit: registry::resolve(dims),
        })
    }

    pub(crate) fn from_parts(data: VectorData, dims: SiDimensions) -> Self {
        SiVector {
            data: Arc::new(data),
            unit: registry::resolve(dims),
        }
    }

    fn wrap(&self, data: VectorData) -> Self {
        SiVector {
            data: Arc::new(data),
            unit: self.unit.clone(),
        }
    }

    fn data_mut(&mut self) -> Result<&mut VectorData> {
        if !self.data.is_mutable() {
            return Err(QuantityError::ImmutabilityViolation);
        }
        Ok(Arc::make_mut(&mut self.data))
    }

    /// The dimension signature.
    pub fn dims(&self) -> SiDimensions {
        self.unit.dims()
    }

    /// The canonical unit for this signature.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has zero elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The current storage representation.
    pub fn storage_kind(&self) -> StorageKind {
        self.data.storage_kind()
    }

    /// Whether in-place operations are permitted.
    pub fn is_mutable(&self) -> bool {
        self.data.is_mutable()
    }

    /// Count of non-zero entries.
    pub fn cardinality(&self) -> usize {
        self.data.cardinality()
    }

    /// Sum of all SI entries.
    pub fn zsum(&self) -> f64 {
        self.data.zsum()
    }

    /// The SI value at `index`.
    pub fn get_si(&self, index: usize) -> Result<f64> {
        self.data.get(index)
    }

    /// Writes an SI value at `index`. Requires a mutable instance.
    pub fn set_si(&mut self, index: usize, si: f64) -> Result<()> {
        self.data_mut()?.set(index, si)
    }

    /// All SI values in index order, materialized densely.
    pub fn values_si(&self) -> Vec<f64> {
        self.data.dense_values()
    }

    /// Iterates the SI values in index order.
    pub fn iter(&self) -> Iter<'_> {
        self.data.iter()
    }

    /// An equivalent vector in dense representation.
    pub fn to_dense(&self) -> Self {
        self.wrap(self.data.to_dense())
    }

    /// An equivalent vector in sparse representation.
    pub fn to_sparse(&self) -> Self {
        self.wrap(self.data.to_sparse())
    }

    /// A writable copy sharing no payload with this vector.
    pub fn mutable(&self) -> Self {
        self.wrap(self.data.mutable())
    }

    /// A read-only copy.
    pub fn immutable(&self) -> Self {
        self.wrap(self.data.immutable())
    }

    /// Element-wise product; dimension signatures multiply.
    pub fn times(&self, rhs: &SiVector) -> Result<Self> {
        let data = self.data.times(&rhs.data)?;
        Ok(SiVector::from_parts(data, self.dims() * rhs.dims()))
    }

    /// Element-wise quotient; dimension signatures divide (IEEE value
    /// semantics, never an error for zero divisors).
    pub fn divide(&self, rhs: &SiVector) -> Result<Self> {
        let data = self.data.divide(&rhs.data)?;
        Ok(SiVector::from_parts(data, self.dims() / rhs.dims()))
    }

    /// Casts into a typed quantity vector of kind `K`, displayed in the
    /// kind's coherent SI unit.
    ///
    /// Fails with [`QuantityError::DimensionMismatch`] when the signature
    /// does not match `K`'s base dimensions. Energies and torques share a
    /// signature, so both casts succeed on `kg m2 s-2` data; the caller
    /// decides which is meant.
    pub fn as_quantity<K: QuantityKind>(&self) -> Result<QuantityVector<K>> {
        if self.dims() != K::BASE {
            return Err(QuantityError::DimensionMismatch {
                expected: K::BASE,
                found: self.dims(),
            });
        }
        Ok(QuantityVector::from_arc(self.data.clone(), K::si_unit()))
    }

    /// Casts into a typed quantity vector of kind `K` displayed in the
    /// given unit, which must also belong to the kind's dimensions.
    pub fn as_quantity_in<K: QuantityKind>(&self, unit: &Unit) -> Result<QuantityVector<K>> {
        if self.dims() != K::BASE {
            return Err(QuantityError::DimensionMismatch {
                expected: K::BASE,
                found: self.dims(),
            });
        }
        if unit.dims() != K::BASE {
            return Err(QuantityError::DimensionMismatch {
                expected: K::BASE,
                found: unit.dims(),
            });
        }
        Ok(QuantityVector::from_arc(self.data.clone(), unit.clone()))
    }
}

/// Logical equality: same dimension signature, same length and same SI
/// values, regardless of storage kind or mutability.
impl PartialEq for SiVector {
    fn eq(&self, other: &Self) -> bool {
        self.dims() == other.dims() && self.data == other.data
    }
}

impl fmt::Display for SiVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "] {}", self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{Energy, Length, Torque};
    use crate::units;

    #[test]
    fn of_parses_the_signature() {
        let v = SiVector::of(&[1.0, 0.0, 2.0], "kg m2 s-2", StorageKind::Sparse).unwrap();
        assert_eq!(v.dims(), "kg m2 s-2".parse().unwrap());
        assert_eq!(v.cardinality(), 2);
        assert_eq!(v.unit().symbol(), "J");
    }

    #[test]
    fn of_rejects_bad_signatures() {
        assert!(SiVector::of(&[1.0], "kg kg", StorageKind::Dense).is_err());
        assert!(SiVector::of(&[1.0], "m0", StorageKind::Dense).is_err());
    }

    #[test]
    fn ambiguous_signature_casts_both_ways() {
        let v = SiVector::of(&[5.0], "kg m2 s-2", StorageKind::Dense).unwrap();
        let energy = v.as_quantity::<Energy>().unwrap();
        let torque = v.as_quantity::<Torque>().unwrap();
        assert_eq!(energy.get_si(0).unwrap(), 5.0);
        assert_eq!(torque.get_si(0).unwrap(), 5.0);
        assert_eq!(energy.unit().symbol(), "J");
        assert_eq!(torque.unit().symbol(), "N.m");
    }

    #[test]
    fn cast_rejects_wrong_dims() {
        let v = SiVector::of(&[5.0], "kg m2 s-2", StorageKind::Dense).unwrap();
        let err = v.as_quantity::<Length>().unwrap_err();
        assert_eq!(
            err,
            QuantityError::DimensionMismatch {
                expected: "m".parse().unwrap(),
                found: "kg m2 s-2".parse().unwrap(),
            }
        );
    }

    #[test]
    fn cast_in_unit_validates_the_unit_too() {
        let v = SiVector::of(&[1_000.0], "m", StorageKind::Dense).unwrap();
        let km = v.as_quantity_in::<Length>(&units::kilometer()).unwrap();
        assert_eq!(km.iter().next().unwrap(), 1.0);
        assert!(v.as_quantity_in::<Length>(&units::second()).is_err());
    }

    #[test]
    fn times_and_divide_track_dimensions() {
        let force = SiVector::of(&[2.0], "kg m s-2", StorageKind::Dense).unwrap();
        let length = SiVector::of(&[3.0], "m", StorageKind::Dense).unwrap();
        let work = force.times(&length).unwrap();
        assert_eq!(work.dims(), "kg m2 s-2".parse().unwrap());
        assert_eq!(work.get_si(0).unwrap(), 6.0);
        let back = work.divide(&length).unwrap();
        assert_eq!(back.dims(), "kg m s-2".parse().unwrap());
        assert_eq!(back.get_si(0).unwrap(), 2.0);
    }

    #[test]
    fn dividing_cancels_to_dimensionless() {
        let a = SiVector::of(&[4.0], "m s-1", StorageKind::Dense).unwrap();
        let ratio = a.divide(&a).unwrap();
        assert_eq!(ratio.dims(), SiDimensions::DIMENSIONLESS);
        assert_eq!(ratio.unit().symbol(), "1");
    }

    #[test]
    fn mutability_discipline_applies() {
        let v = SiVector::of(&[1.0], "m", StorageKind::Dense).unwrap();
        let mut frozen = v.clone();
        assert!(frozen.set_si(0, 2.0).is_err());
        let mut writable = v.mutable();
        writable.set_si(0, 2.0).unwrap();
        assert_eq!(writable.get_si(0).unwrap(), 2.0);
        assert_eq!(v.get_si(0).unwrap(), 1.0);
    }

    #[test]
    fn equality_requires_matching_dims() {
        let m = SiVector::of(&[1.0], "m", StorageKind::Dense).unwrap();
        let s = SiVector::of(&[1.0], "s", StorageKind::Dense).unwrap();
        assert_ne!(m, s);
        assert_eq!(m, m.to_sparse());
    }
}
