//! Catalogue of named units used by the built-in quantity kinds.
//!
//! Each accessor returns a cheap clone of a lazily constructed unit. The
//! celsius unit demonstrates an offset scale; `grade` and `percent_grade`
//! are the non-linear scales of the angle kind.

use core::f64::consts::PI;
use once_cell::sync::Lazy;

use crate::dimensions::SiDimensions;
use crate::scale::Scale;
use crate::unit::Unit;

/// Length dimension signature (`m`).
pub const LENGTH: SiDimensions = SiDimensions::new(0, 0, 1, 0, 0, 0, 0, 0);
/// Area dimension signature (`m2`).
pub const AREA: SiDimensions = SiDimensions::new(0, 0, 2, 0, 0, 0, 0, 0);
/// Mass dimension signature (`kg`).
pub const MASS: SiDimensions = SiDimensions::new(0, 1, 0, 0, 0, 0, 0, 0);
/// Time dimension signature (`s`).
pub const DURATION: SiDimensions = SiDimensions::new(0, 0, 0, 1, 0, 0, 0, 0);
/// Thermodynamic temperature dimension signature (`K`).
pub const TEMPERATURE: SiDimensions = SiDimensions::new(0, 0, 0, 0, 0, 1, 0, 0);
/// Plane angle dimension signature (`rad`).
pub const ANGLE: SiDimensions = SiDimensions::new(1, 0, 0, 0, 0, 0, 0, 0);
/// Speed dimension signature (`m s-1`).
pub const SPEED: SiDimensions = SiDimensions::new(0, 0, 1, -1, 0, 0, 0, 0);
/// Frequency dimension signature (`s-1`).
pub const FREQUENCY: SiDimensions = SiDimensions::new(0, 0, 0, -1, 0, 0, 0, 0);
/// Force dimension signature (`kg m s-2`).
pub const FORCE: SiDimensions = SiDimensions::new(0, 1, 1, -2, 0, 0, 0, 0);
/// Energy (and torque) dimension signature (`kg m2 s-2`).
pub const ENERGY: SiDimensions = SiDimensions::new(0, 1, 2, -2, 0, 0, 0, 0);
/// Power dimension signature (`kg m2 s-3`).
pub const POWER: SiDimensions = SiDimensions::new(0, 1, 2, -3, 0, 0, 0, 0);

macro_rules! named_unit {
    ($(#[$doc:meta])* $fn_name:ident, $static_name:ident, $symbol:literal, $scale:expr, $dims:expr, $kind:literal) => {
        static $static_name: Lazy<Unit> = Lazy::new(|| Unit::new($symbol, $scale, $dims, $kind));

        $(#[$doc])*
        pub fn $fn_name() -> Unit {
            $static_name.clone()
        }
    };
}

named_unit!(
    /// The dimensionless unit.
    one, ONE, "1", Scale::IDENTITY, SiDimensions::DIMENSIONLESS, "dimensionless"
);

named_unit!(
    /// Metre, the SI base unit of length.
    meter, METER, "m", Scale::IDENTITY, LENGTH, "length"
);
named_unit!(
    /// Kilometre (`1000 m`).
    kilometer, KILOMETER, "km", Scale::linear(1_000.0), LENGTH, "length"
);
named_unit!(
    /// Centimetre (`0.01 m`).
    centimeter, CENTIMETER, "cm", Scale::linear(1e-2), LENGTH, "length"
);
named_unit!(
    /// International inch (`0.0254 m` exactly).
    inch, INCH, "in", Scale::linear(0.0254), LENGTH, "length"
);

named_unit!(
    /// Square metre.
    square_meter, SQUARE_METER, "m2", Scale::IDENTITY, AREA, "area"
);

named_unit!(
    /// Kilogram, the SI base unit of mass.
    kilogram, KILOGRAM, "kg", Scale::IDENTITY, MASS, "mass"
);
named_unit!(
    /// Gram (`1e-3 kg`).
    gram, GRAM, "g", Scale::linear(1e-3), MASS, "mass"
);

named_unit!(
    /// Second, the SI base unit of time.
    second, SECOND, "s", Scale::IDENTITY, DURATION, "duration"
);
named_unit!(
    /// Minute (`60 s`).
    minute, MINUTE, "min", Scale::linear(60.0), DURATION, "duration"
);
named_unit!(
    /// Hour (`3600 s`).
    hour, HOUR, "h", Scale::linear(3_600.0), DURATION, "duration"
);

named_unit!(
    /// Kelvin, the SI base unit of thermodynamic temperature.
    kelvin, KELVIN, "K", Scale::IDENTITY, TEMPERATURE, "temperature"
);
named_unit!(
    /// Degree Celsius: offset scale, `si = x + 273.15`.
    celsius, CELSIUS, "degC", Scale::Linear { factor: 1.0, offset: 273.15 }, TEMPERATURE, "temperature"
);

named_unit!(
    /// Radian.
    radian, RADIAN, "rad", Scale::IDENTITY, ANGLE, "angle"
);
named_unit!(
    /// Degree of arc (`π/180 rad`).
    degree, DEGREE, "deg", Scale::linear(PI / 180.0), ANGLE, "angle"
);
named_unit!(
    /// Grade (slope ratio): non-linear scale, `si = atan(x)` radians.
    grade, GRADE, "grade", Scale::Grade { factor: 1.0 }, ANGLE, "angle"
);
named_unit!(
    /// Percent grade: non-linear scale, `si = atan(x / 100)` radians.
    percent_grade, PERCENT_GRADE, "%grade", Scale::Grade { factor: 0.01 }, ANGLE, "angle"
);

named_unit!(
    /// Metre per second.
    meter_per_second, METER_PER_SECOND, "m/s", Scale::IDENTITY, SPEED, "speed"
);
named_unit!(
    /// Hertz.
    hertz, HERTZ, "Hz", Scale::IDENTITY, FREQUENCY, "frequency"
);
named_unit!(
    /// Newton.
    newton, NEWTON, "N", Scale::IDENTITY, FORCE, "force"
);
named_unit!(
    /// Joule.
    joule, JOULE, "J", Scale::IDENTITY, ENERGY, "energy"
);
named_unit!(
    /// Newton-metre, the torque sibling of the joule.
    newton_meter, NEWTON_METER, "N.m", Scale::IDENTITY, ENERGY, "torque"
);
named_unit!(
    /// Watt.
    watt, WATT, "W", Scale::IDENTITY, POWER, "power"
);

/// The named coherent SI units that pre-seed the unit registry.
///
/// Only identity-scale units with an unambiguous dimension signature are
/// listed; `kg m2 s-2` is seeded as the joule, the conventional choice.
pub(crate) fn base_units() -> Vec<Unit> {
    vec![
        one(),
        meter(),
        square_meter(),
        kilogram(),
        second(),
        kelvin(),
        radian(),
        meter_per_second(),
        hertz(),
        newton(),
        joule(),
        watt(),
    ]
}
