//! Typed scalar quantities.
//!
//! [`QuantityScalar`] is the single-value sibling of
//! [`crate::vector::QuantityVector`]: one `f64` stored in SI
//! representation, tagged with a quantity kind at the type level and a
//! display unit at the value level. It is what indexing a quantity vector
//! hands back when the caller wants the value together with its unit.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Sub};

use crate::error::{QuantityError, Result};
use crate::kind::{QuantityKind, Relative};
use crate::unit::Unit;

/// A single quantity value of kind `K` with a display unit.
///
/// The payload is always SI-standard; the unit only affects how the value
/// is presented. Comparison and arithmetic operate on the SI payload, so
/// `100 cm == 1 m` holds.
#[derive(Clone, Debug)]
pub struct QuantityScalar<K: QuantityKind> {
    si: f64,
    unit: Unit,
    _kind: PhantomData<K>,
}

impl<K: QuantityKind> QuantityScalar<K> {
    /// Creates a scalar from a value expressed in `unit`.
    ///
    /// Fails with [`QuantityError::DimensionMismatch`] when the unit's
    /// dimensions differ from the kind's base dimensions.
    pub fn new(value: f64, unit: &Unit) -> Result<Self> {
        if unit.dims() != K::BASE {
            return Err(QuantityError::DimensionMismatch {
                expected: K::BASE,
                found: unit.dims(),
            });
        }
        Ok(QuantityScalar {
            si: unit.scale().to_si(value),
            unit: unit.clone(),
            _kind: PhantomData,
        })
    }

    /// Creates a scalar from an SI-standard value, displayed in the
    /// kind's coherent SI unit.
    pub fn from_si(si: f64) -> Self {
        QuantityScalar {
            si,
            unit: K::si_unit(),
            _kind: PhantomData,
        }
    }

    pub(crate) fn from_parts(si: f64, unit: Unit) -> Self {
        QuantityScalar {
            si,
            unit,
            _kind: PhantomData,
        }
    }

    /// The SI-standard payload.
    #[inline]
    pub fn si(&self) -> f64 {
        self.si
    }

    /// The payload expressed in the display unit.
    #[inline]
    pub fn value(&self) -> f64 {
        self.unit.scale().from_si(self.si)
    }

    /// The display unit.
    #[inline]
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// The payload expressed in another unit of the same kind.
    pub fn in_unit(&self, unit: &Unit) -> Result<f64> {
        if unit.dims() != K::BASE {
            return Err(QuantityError::DimensionMismatch {
                expected: K::BASE,
                found: unit.dims(),
            });
        }
        Ok(unit.scale().from_si(self.si))
    }
}

impl<K: QuantityKind> PartialEq for QuantityScalar<K> {
    fn eq(&self, other: &Self) -> bool {
        self.si == other.si
    }
}

impl<K: QuantityKind> PartialOrd for QuantityScalar<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.si.partial_cmp(&other.si)
    }
}

impl<K: QuantityKind> fmt::Display for QuantityScalar<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value(), self.unit)
    }
}

impl<K: Relative> Add for QuantityScalar<K> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        QuantityScalar {
            si: self.si + rhs.si,
            unit: self.unit,
            _kind: PhantomData,
        }
    }
}

impl<K: Relative> Sub for QuantityScalar<K> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        QuantityScalar {
            si: self.si - rhs.si,
            unit: self.unit,
            _kind: PhantomData,
        }
    }
}
