//! Typed quantity vectors.
//!
//! [`QuantityVector`] is the dimension-safe workhorse of the crate: a
//! [`VectorData`] payload of SI-standard values, a display [`Unit`] chosen
//! at construction, and a quantity kind fixed at the type level. The kind
//! governs the algebra. Relative vectors add and subtract among
//! themselves; absolute vectors only combine with their paired relative
//! kind, and subtracting two absolutes produces that relative kind.
//!
//! Products and quotients escape the typed world on purpose: they return a
//! dimension-tagged [`SiVector`] that must be cast back with
//! [`SiVector::as_quantity`], because a dimension signature alone does not
//! identify a kind (energy vs torque).
//!
//! The payload is shared copy-on-write. Cloning a vector is cheap;
//! in-place mutation requires an instance created through
//! [`QuantityVector::mutable`] and copies the payload only when it is
//! actually shared.

use core::fmt;
use core::marker::PhantomData;
use std::sync::Arc;

use crate::error::{QuantityError, Result};
use crate::kind::{Absolute, QuantityKind, Relative};
use crate::scalar::QuantityScalar;
use crate::sivector::SiVector;
use crate::storage::{Iter, StorageKind, VectorData};
use crate::unit::Unit;

/// A vector of quantities of kind `K` with a display unit.
#[derive(Clone, Debug)]
pub struct QuantityVector<K: QuantityKind> {
    data: Arc<VectorData>,
    unit: Unit,
    _kind: PhantomData<K>,
}

fn check_unit<K: QuantityKind>(unit: &Unit) -> Result<()> {
    if unit.dims() != K::BASE {
        return Err(QuantityError::DimensionMismatch {
            expected: K::BASE,
            found: unit.dims(),
        });
    }
    Ok(())
}

impl<K: QuantityKind> QuantityVector<K> {
    /// Builds a vector from values expressed in `unit`, converting each to
    /// SI representation through the unit's scale. The result is immutable.
    pub fn from_display(values: &[f64], unit: &Unit, kind: StorageKind) -> Result<Self> {
        check_unit::<K>(unit)?;
        Ok(QuantityVector {
            data: Arc::new(VectorData::from_display(values, unit.scale(), kind)),
            unit: unit.clone(),
            _kind: PhantomData,
        })
    }

    /// Builds a vector from SI-standard values, displayed in the kind's
    /// coherent SI unit.
    pub fn from_si(values: &[f64], kind: StorageKind) -> Self {
        QuantityVector {
            data: Arc::new(VectorData::from_si(values, kind)),
            unit: K::si_unit(),
            _kind: PhantomData,
        }
    }

    /// Builds a vector from a sparse index→value mapping of values
    /// expressed in `unit`. Unspecified indices are SI zeros.
    pub fn from_map(
        pairs: &[(usize, f64)],
        size: usize,
        unit: &Unit,
        kind: StorageKind,
    ) -> Result<Self> {
        check_unit::<K>(unit)?;
        Ok(QuantityVector {
            data: Arc::new(VectorData::from_map(pairs, size, unit.scale(), kind)?),
            unit: unit.clone(),
            _kind: PhantomData,
        })
    }

    /// Builds a vector from typed scalars. The display unit is taken from
    /// the first scalar, or the coherent SI unit for an empty slice.
    pub fn from_scalars(scalars: &[QuantityScalar<K>], kind: StorageKind) -> Self {
        let unit = scalars
            .first()
            .map(|s| s.unit().clone())
            .unwrap_or_else(K::si_unit);
        let si: Vec<f64> = scalars.iter().map(|s| s.si()).collect();
        QuantityVector {
            data: Arc::new(VectorData::from_si(&si, kind)),
            unit,
            _kind: PhantomData,
        }
    }

    pub(crate) fn from_arc(data: Arc<VectorData>, unit: Unit) -> Self {
        QuantityVector {
            data,
            unit,
            _kind: PhantomData,
        }
    }

    fn wrap(&self, data: VectorData) -> Self {
        QuantityVector {
            data: Arc::new(data),
            unit: self.unit.clone(),
            _kind: PhantomData,
        }
    }

    fn data_mut(&mut self) -> Result<&mut VectorData> {
        // Reject before make_mut so a shared immutable payload is never
        // copied just to fail.
        if !self.data.is_mutable() {
            return Err(QuantityError::ImmutabilityViolation);
        }
        Ok(Arc::make_mut(&mut self.data))
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

    /// The display unit.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Count of entries whose SI value is non-zero, independent of
    /// storage kind and display unit.
    pub fn cardinality(&self) -> usize {
        self.data.cardinality()
    }

    /// The SI value at `index`.
    pub fn get_si(&self, index: usize) -> Result<f64> {
        self.data.get(index)
    }

    /// The typed scalar at `index`, carrying this vector's display unit.
    pub fn get(&self, index: usize) -> Result<QuantityScalar<K>> {
        let si = self.data.get(index)?;
        Ok(QuantityScalar::from_parts(si, self.unit.clone()))
    }

    /// The value at `index` expressed in another unit of this kind.
    pub fn get_in(&self, index: usize, unit: &Unit) -> Result<f64> {
        check_unit::<K>(unit)?;
        Ok(unit.scale().from_si(self.data.get(index)?))
    }

    /// All SI values in index order, materialized densely.
    pub fn values_si(&self) -> Vec<f64> {
        self.data.dense_values()
    }

    /// Iterates the SI values in index order.
    pub fn iter_si(&self) -> Iter<'_> {
        self.data.iter()
    }

    /// Iterates the values in index order, expressed in the display unit.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().map(|si| self.unit.scale().from_si(si))
    }

    /// Writes an SI value at `index`. Requires a mutable instance.
    pub fn set_si(&mut self, index: usize, si: f64) -> Result<()> {
        self.data_mut()?.set(index, si)
    }

    /// Writes a value expressed in the display unit at `index`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let si = self.unit.scale().to_si(value);
        self.data_mut()?.set(index, si)
    }

    /// Writes a value expressed in another unit of this kind at `index`.
    pub fn set_in(&mut self, index: usize, value: f64, unit: &Unit) -> Result<()> {
        check_unit::<K>(unit)?;
        let si = unit.scale().to_si(value);
        self.data_mut()?.set(index, si)
    }

    /// Applies `f` to every SI value in place.
    pub fn assign(&mut self, f: impl Fn(f64) -> f64) -> Result<()> {
        self.data_mut()?.assign(f)
    }

    /// In-place absolute value of the SI values.
    pub fn abs(&mut self) -> Result<()> {
        self.data_mut()?.abs()
    }

    /// In-place ceiling of the SI values.
    pub fn ceil(&mut self) -> Result<()> {
        self.data_mut()?.ceil()
    }

    /// In-place floor of the SI values.
    pub fn floor(&mut self) -> Result<()> {
        self.data_mut()?.floor()
    }

    /// In-place negation.
    pub fn neg(&mut self) -> Result<()> {
        self.data_mut()?.neg()
    }

    /// In-place rounding of the SI values to the nearest integer, ties to
    /// even.
    pub fn rint(&mut self) -> Result<()> {
        self.data_mut()?.rint()
    }

    /// An equivalent vector in dense representation.
    pub fn to_dense(&self) -> Self {
        self.wrap(self.data.to_dense())
    }

    /// An equivalent vector in sparse representation.
    pub fn to_sparse(&self) -> Self {
        self.wrap(self.data.to_sparse())
    }

    /// A writable copy of this vector sharing no payload with it.
    pub fn mutable(&self) -> Self {
        self.wrap(self.data.mutable())
    }

    /// A read-only copy of this vector.
    pub fn immutable(&self) -> Self {
        self.wrap(self.data.immutable())
    }

    /// Re-displays this vector in another unit of the same kind. The SI
    /// payload is shared, not copied.
    pub fn in_unit(&self, unit: &Unit) -> Result<Self> {
        check_unit::<K>(unit)?;
        Ok(QuantityVector {
            data: self.data.clone(),
            unit: unit.clone(),
            _kind: PhantomData,
        })
    }

    /// Element-wise product with a vector of any kind. The result carries
    /// the combined dimension signature and must be cast back to a kind
    /// explicitly.
    pub fn times<R: QuantityKind>(&self, rhs: &QuantityVector<R>) -> Result<SiVector> {
        let data = self.data.times(&rhs.data)?;
        Ok(SiVector::from_parts(data, K::BASE * R::BASE))
    }

    /// Element-wise quotient with a vector of any kind (IEEE semantics,
    /// never an error for zero divisors).
    pub fn divide<R: QuantityKind>(&self, rhs: &QuantityVector<R>) -> Result<SiVector> {
        let data = self.data.divide(&rhs.data)?;
        Ok(SiVector::from_parts(data, K::BASE / R::BASE))
    }
}

impl<K: Relative> QuantityVector<K> {
    /// Element-wise sum. The result keeps this vector's display unit and
    /// storage kind, and is immutable.
    pub fn plus(&self, rhs: &Self) -> Result<Self> {
        Ok(self.wrap(self.data.plus(&rhs.data)?))
    }

    /// Element-wise difference.
    pub fn minus(&self, rhs: &Self) -> Result<Self> {
        Ok(self.wrap(self.data.minus(&rhs.data)?))
    }

    /// Sum of all elements as a typed scalar in this vector's display
    /// unit.
    pub fn zsum(&self) -> QuantityScalar<K> {
        QuantityScalar::from_parts(self.data.zsum(), self.unit.clone())
    }

    /// In-place multiplication of every element by a dimensionless
    /// factor.
    pub fn multiply_by(&mut self, factor: f64) -> Result<()> {
        self.data_mut()?.multiply_by(factor)
    }

    /// In-place division of every element by a dimensionless divisor
    /// (IEEE semantics).
    pub fn divide_by(&mut self, divisor: f64) -> Result<()> {
        self.data_mut()?.divide_by(divisor)
    }
}

impl<K: Absolute> QuantityVector<K> {
    /// Shifts every element by the paired relative vector. The result
    /// stays absolute and keeps this vector's display unit.
    pub fn plus_rel(&self, rhs: &QuantityVector<K::Pair>) -> Result<Self> {
        Ok(self.wrap(self.data.plus(&rhs.data)?))
    }

    /// Shifts every element back by the paired relative vector.
    pub fn minus_rel(&self, rhs: &QuantityVector<K::Pair>) -> Result<Self> {
        Ok(self.wrap(self.data.minus(&rhs.data)?))
    }

    /// Element-wise difference of two absolute vectors, yielding the
    /// paired relative kind in its coherent SI unit.
    pub fn minus_abs(&self, rhs: &Self) -> Result<QuantityVector<K::Pair>> {
        let data = self.data.minus(&rhs.data)?;
        Ok(QuantityVector::from_arc(
            Arc::new(data),
            <K::Pair as QuantityKind>::si_unit(),
        ))
    }
}

/// Logical equality: same length and same SI values, regardless of
/// display unit, storage kind or mutability.
impl<K: QuantityKind> PartialEq for QuantityVector<K> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<K: QuantityKind> fmt::Display for QuantityVector<K> {
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
