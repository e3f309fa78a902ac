//! Unit scales: conversion between display values and SI-standard values.
//!
//! Every [`crate::unit::Unit`] carries a `Scale` that maps a number between
//! the unit's display representation and the coherent SI representation of
//! its quantity. Linear scales are a closed-form `(factor, offset)` pair;
//! the grade scale is non-linear and must never be collapsed into a
//! factor/offset shortcut. Code that batch-converts values through a factor
//! has to check [`Scale::is_linear`] first.
//!
//! # Examples
//!
//! ```rust
//! use sivec_core::scale::Scale;
//!
//! let celsius = Scale::Linear { factor: 1.0, offset: 273.15 };
//! assert_eq!(celsius.to_si(0.0), 273.15);
//! assert_eq!(celsius.from_si(273.15), 0.0);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Conversion function pair between a unit's display values and SI values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Scale {
    /// Closed-form linear scale: `si = display * factor + offset`.
    Linear {
        /// Multiplicative factor from display to SI.
        factor: f64,
        /// Additive offset applied after the factor (e.g. `273.15` for °C).
        offset: f64,
    },
    /// Non-linear slope scale: a grade (ratio of rise over run, scaled by
    /// `factor`) whose SI value is the corresponding angle in radians.
    ///
    /// `to_si(x) = atan(x * factor)`, `from_si(x) = tan(x) / factor`.
    /// Monotonic for SI values in `(-π/2, π/2)`.
    Grade {
        /// Factor applied to the raw grade before taking the arctangent.
        /// `1.0` for a plain ratio, `0.01` for percent grade.
        factor: f64,
    },
}

impl Scale {
    /// The identity scale of every coherent SI unit.
    pub const IDENTITY: Scale = Scale::Linear {
        factor: 1.0,
        offset: 0.0,
    };

    /// Linear scale with the given factor and no offset.
    #[inline]
    pub const fn linear(factor: f64) -> Self {
        Scale::Linear {
            factor,
            offset: 0.0,
        }
    }

    /// Converts a display-unit value to its SI-standard value.
    #[inline]
    pub fn to_si(&self, value: f64) -> f64 {
        match *self {
            Scale::Linear { factor, offset } => value * factor + offset,
            Scale::Grade { factor } => (value * factor).atan(),
        }
    }

    /// Converts an SI-standard value back to the display-unit value.
    #[inline]
    pub fn from_si(&self, value: f64) -> f64 {
        match *self {
            Scale::Linear { factor, offset } => (value - offset) / factor,
            Scale::Grade { factor } => value.tan() / factor,
        }
    }

    /// Whether this scale is a plain `(factor, offset)` pair.
    ///
    /// Batch conversions that shortcut through the factor must skip
    /// non-linear scales.
    #[inline]
    pub const fn is_linear(&self) -> bool {
        matches!(self, Scale::Linear { .. })
    }

    /// Whether this is the identity scale (factor 1, offset 0).
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(
            *self,
            Scale::Linear { factor, offset } if factor == 1.0 && offset == 0.0
        )
    }
}
