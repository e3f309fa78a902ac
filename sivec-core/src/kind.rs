//! Quantity kinds and the Absolute/Relative type algebra.
//!
//! A *kind* is the category a quantity belongs to (length, duration,
//! torque, …), modelled as a zero-sized marker type. The kind fixes the
//! base SI dimensions and the coherent SI unit; the display unit is chosen
//! per vector.
//!
//! Kinds split into two families:
//!
//! * [`Relative`] kinds (length, duration, temperature difference, angle)
//!   have no fixed origin and are closed under addition and subtraction.
//! * [`Absolute`] kinds (position, time, absolute temperature, direction)
//!   are anchored to an origin. Each names the relative kind its
//!   differences produce via [`Absolute::Pair`]: subtracting two positions
//!   yields a length, adding a length to a position yields a position, and
//!   adding two positions is not offered at all.
//!
//! Several kinds may share one dimension signature ([`Energy`] and
//! [`Torque`] are both `kg m2 s-2`), which is exactly why products and
//! quotients of quantities come back as dimension-tagged
//! [`crate::sivector::SiVector`]s that must be cast explicitly.

use core::fmt::Debug;

use crate::declare_kind;
use crate::dimensions::SiDimensions;
use crate::unit::Unit;
use crate::units;

/// Marker trait implemented by every quantity kind.
pub trait QuantityKind: Copy + Debug + PartialEq + 'static {
    /// Lower-case kind name used for unit tagging and diagnostics.
    const NAME: &'static str;
    /// The base SI dimension signature of this kind.
    const BASE: SiDimensions;

    /// The coherent SI unit of this kind (identity scale).
    fn si_unit() -> Unit;
}

/// Quantity kinds with no fixed origin, closed under `+` and `-`.
pub trait Relative: QuantityKind {}

/// Quantity kinds anchored to a fixed origin.
///
/// Differences between two absolutes yield the paired relative kind.
pub trait Absolute: QuantityKind {
    /// The relative kind paired with this absolute kind.
    type Pair: Relative;
}

declare_kind! {
    /// Plain dimensionless numbers.
    relative Dimensionless {
        name: "dimensionless",
        si_symbol: "1",
        dims: SiDimensions::DIMENSIONLESS,
    }
}

declare_kind! {
    /// Length (relative distance).
    relative Length {
        name: "length",
        si_symbol: "m",
        dims: units::LENGTH,
    }
}

declare_kind! {
    /// Area.
    relative Area {
        name: "area",
        si_symbol: "m2",
        dims: units::AREA,
    }
}

declare_kind! {
    /// Mass.
    relative Mass {
        name: "mass",
        si_symbol: "kg",
        dims: units::MASS,
    }
}

declare_kind! {
    /// Duration (relative time span).
    relative Duration {
        name: "duration",
        si_symbol: "s",
        dims: units::DURATION,
    }
}

declare_kind! {
    /// Temperature difference.
    relative Temperature {
        name: "temperature",
        si_symbol: "K",
        dims: units::TEMPERATURE,
    }
}

declare_kind! {
    /// Plane angle (relative rotation).
    relative Angle {
        name: "angle",
        si_symbol: "rad",
        dims: units::ANGLE,
    }
}

declare_kind! {
    /// Speed.
    relative Speed {
        name: "speed",
        si_symbol: "m/s",
        dims: units::SPEED,
    }
}

declare_kind! {
    /// Frequency.
    relative Frequency {
        name: "frequency",
        si_symbol: "Hz",
        dims: units::FREQUENCY,
    }
}

declare_kind! {
    /// Force.
    relative Force {
        name: "force",
        si_symbol: "N",
        dims: units::FORCE,
    }
}

declare_kind! {
    /// Energy. Shares its dimensions with [`Torque`].
    relative Energy {
        name: "energy",
        si_symbol: "J",
        dims: units::ENERGY,
    }
}

declare_kind! {
    /// Torque. Shares its dimensions with [`Energy`].
    relative Torque {
        name: "torque",
        si_symbol: "N.m",
        dims: units::ENERGY,
    }
}

declare_kind! {
    /// Power.
    relative Power {
        name: "power",
        si_symbol: "W",
        dims: units::POWER,
    }
}

declare_kind! {
    /// Position along an axis, anchored to an origin.
    absolute Position pairs Length {
        name: "position",
        si_symbol: "m",
        dims: units::LENGTH,
    }
}

declare_kind! {
    /// A point in time, anchored to an epoch.
    absolute Time pairs Duration {
        name: "time",
        si_symbol: "s",
        dims: units::DURATION,
    }
}

declare_kind! {
    /// Thermodynamic temperature, anchored to absolute zero.
    absolute AbsoluteTemperature pairs Temperature {
        name: "absolute temperature",
        si_symbol: "K",
        dims: units::TEMPERATURE,
    }
}

declare_kind! {
    /// A direction, anchored to a reference bearing.
    absolute Direction pairs Angle {
        name: "direction",
        si_symbol: "rad",
        dims: units::ANGLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_dims_match_catalogue() {
        assert_eq!(Length::BASE, "m".parse().unwrap());
        assert_eq!(Speed::BASE, "m s-1".parse().unwrap());
        assert_eq!(Energy::BASE, "kg m2 s-2".parse().unwrap());
        assert_eq!(Angle::BASE, "rad".parse().unwrap());
    }

    #[test]
    fn energy_and_torque_share_dims_but_not_units() {
        assert_eq!(Energy::BASE, Torque::BASE);
        assert_ne!(Energy::si_unit(), Torque::si_unit());
    }

    #[test]
    fn absolute_pairs_share_dims() {
        assert_eq!(Position::BASE, Length::BASE);
        assert_eq!(Time::BASE, Duration::BASE);
        assert_eq!(AbsoluteTemperature::BASE, Temperature::BASE);
        assert_eq!(Direction::BASE, Angle::BASE);
    }

    #[test]
    fn si_units_have_identity_scale() {
        assert!(Length::si_unit().scale().is_identity());
        assert!(AbsoluteTemperature::si_unit().scale().is_identity());
        assert_eq!(Duration::si_unit().symbol(), "s");
    }
}
