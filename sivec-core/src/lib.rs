//! # sivec-core
//!
//! Core engine for dimension-safe vectors of physical quantities.
//!
//! Values live in SI-standard representation from construction onward:
//! the display [`unit::Unit`] converts exactly once on the way in and on
//! the way out, through its [`scale::Scale`] (linear, offset or the
//! non-linear grade scale). Storage is dense or sparse behind a single
//! [`storage::VectorData`] engine, with equality, arithmetic and
//! reductions independent of the representation.
//!
//! Dimension safety comes in two layers:
//!
//! * **Typed**: [`vector::QuantityVector`] is tagged with a
//!   [`kind::QuantityKind`] marker type. Relative kinds add and subtract;
//!   absolute kinds combine only with their paired relative kind.
//! * **Tagged**: products and quotients return a runtime
//!   [`sivector::SiVector`] carrying an [`dimensions::SiDimensions`]
//!   exponent vector, cast back into the typed layer with an explicit,
//!   validated [`sivector::SiVector::as_quantity`].
//!
//! ```rust
//! use sivec_core::kind::{Duration, Length, Speed};
//! use sivec_core::storage::StorageKind;
//! use sivec_core::units;
//! use sivec_core::vector::QuantityVector;
//!
//! let distance = QuantityVector::<Length>::from_display(
//!     &[1.0, 2.0],
//!     &units::kilometer(),
//!     StorageKind::Dense,
//! )?;
//! let elapsed = QuantityVector::<Duration>::from_si(&[100.0, 500.0], StorageKind::Dense);
//!
//! let speed = distance.divide(&elapsed)?.as_quantity::<Speed>()?;
//! assert_eq!(speed.values_si(), vec![10.0, 4.0]);
//! # Ok::<(), sivec_core::error::QuantityError>(())
//! ```
//!
//! Instances are immutable after construction. Call
//! [`vector::QuantityVector::mutable`] for a writable deep copy; in-place
//! calls on an immutable instance fail without changing anything.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod dimensions;
pub mod error;
pub mod kind;
mod macros;
pub mod scalar;
pub mod scale;
pub mod sivector;
pub mod storage;
pub mod unit;
pub mod units;
pub mod vector;

pub use dimensions::SiDimensions;
pub use error::{QuantityError, Result};
pub use kind::{Absolute, QuantityKind, Relative};
pub use scalar::QuantityScalar;
pub use scale::Scale;
pub use sivector::SiVector;
pub use storage::{StorageKind, VectorData};
pub use unit::Unit;
pub use vector::QuantityVector;
