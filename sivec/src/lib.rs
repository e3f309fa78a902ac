//! Dimension-safe vectors of physical quantities.
//!
//! `sivec` is the user-facing crate in this workspace. It re-exports the
//! full API from `sivec-core` plus per-kind type aliases (`LengthVector`,
//! `DurationVector`, …) for the built-in quantity kinds.
//!
//! The core idea is: a vector is always a `QuantityVector<K>`, where `K`
//! is a zero-sized type naming the quantity kind. Values are stored in
//! SI-standard representation from construction onward; the display unit
//! converts exactly once in each direction. Storage is dense or sparse
//! behind the same API, and the two representations are interchangeable.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible quantities (you can't add metres to
//!   seconds, or two positions to each other).
//! - Keeps absolute and relative quantities apart: subtracting two points
//!   in time yields a duration, not another point in time.
//! - Makes cross-kind arithmetic explicit: products and quotients come
//!   back as dimension-tagged [`SiVector`]s that must be cast to a kind
//!   with a validated `as_quantity::<K>()`.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic: values are backed by `f64` and follow IEEE-754
//!   (division by zero yields infinities and NaN, never an error).
//! - Matrices or higher-rank tensors; vectors only.
//! - Unit parsing beyond SI dimension signatures such as `"kg m2 s-2"`.
//!
//! # Quick start
//!
//! ```rust
//! use sivec::{DurationVector, LengthVector, Speed, StorageKind};
//! use sivec::units;
//!
//! let distance = LengthVector::from_display(
//!     &[1.0, 2.0],
//!     &units::kilometer(),
//!     StorageKind::Dense,
//! )?;
//! let elapsed = DurationVector::from_si(&[100.0, 500.0], StorageKind::Dense);
//!
//! let speed = distance.divide(&elapsed)?.as_quantity::<Speed>()?;
//! assert_eq!(speed.values_si(), vec![10.0, 4.0]);
//! # Ok::<(), sivec::QuantityError>(())
//! ```
//!
//! Mutation is opt-in. Constructors and arithmetic produce immutable
//! vectors; `mutable()` hands back a writable deep copy:
//!
//! ```rust
//! use sivec::{LengthVector, StorageKind};
//!
//! let v = LengthVector::from_si(&[1.0, 2.0], StorageKind::Sparse);
//! assert!(v.clone().multiply_by(2.0).is_err());
//!
//! let mut w = v.mutable();
//! w.multiply_by(2.0)?;
//! assert_eq!(w.values_si(), vec![2.0, 4.0]);
//! assert_eq!(v.values_si(), vec![1.0, 2.0]);
//! # Ok::<(), sivec::QuantityError>(())
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use sivec::{DurationVector, LengthVector, StorageKind};
//!
//! let d = LengthVector::from_si(&[1.0], StorageKind::Dense);
//! let t = DurationVector::from_si(&[1.0], StorageKind::Dense);
//! let _ = d.plus(&t); // cannot add different quantity kinds
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for the value-level types in
//!   `sivec-core` (scales, dimension signatures, raw storage).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between
//! minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub use sivec_core::*;

pub use sivec_core::kind::{
    AbsoluteTemperature, Angle, Area, Dimensionless, Direction, Duration, Energy, Force,
    Frequency, Length, Mass, Position, Power, Speed, Temperature, Time, Torque,
};
pub use sivec_core::units;

/// Vector of plain numbers.
pub type DimensionlessVector = QuantityVector<Dimensionless>;
/// Vector of lengths.
pub type LengthVector = QuantityVector<Length>;
/// Vector of areas.
pub type AreaVector = QuantityVector<Area>;
/// Vector of masses.
pub type MassVector = QuantityVector<Mass>;
/// Vector of durations.
pub type DurationVector = QuantityVector<Duration>;
/// Vector of temperature differences.
pub type TemperatureVector = QuantityVector<Temperature>;
/// Vector of plane angles.
pub type AngleVector = QuantityVector<Angle>;
/// Vector of speeds.
pub type SpeedVector = QuantityVector<Speed>;
/// Vector of frequencies.
pub type FrequencyVector = QuantityVector<Frequency>;
/// Vector of forces.
pub type ForceVector = QuantityVector<Force>;
/// Vector of energies.
pub type EnergyVector = QuantityVector<Energy>;
/// Vector of torques.
pub type TorqueVector = QuantityVector<Torque>;
/// Vector of powers.
pub type PowerVector = QuantityVector<Power>;
/// Vector of positions (absolute).
pub type PositionVector = QuantityVector<Position>;
/// Vector of points in time (absolute).
pub type TimeVector = QuantityVector<Time>;
/// Vector of thermodynamic temperatures (absolute).
pub type AbsoluteTemperatureVector = QuantityVector<AbsoluteTemperature>;
/// Vector of directions (absolute).
pub type DirectionVector = QuantityVector<Direction>;

/// Scalar length.
pub type LengthScalar = QuantityScalar<Length>;
/// Scalar duration.
pub type DurationScalar = QuantityScalar<Duration>;
/// Scalar temperature difference.
pub type TemperatureScalar = QuantityScalar<Temperature>;
/// Scalar speed.
pub type SpeedScalar = QuantityScalar<Speed>;
/// Scalar energy.
pub type EnergyScalar = QuantityScalar<Energy>;
