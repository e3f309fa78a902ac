//! SI dimension vectors: the exponent signature of a physical quantity.
//!
//! [`SiDimensions`] identifies the physical dimension of a quantity
//! independently of its chosen unit: metres and inches share the same
//! dimension vector, joules and newton-metres do too. The vector holds one
//! signed rational exponent per base dimension, in the canonical order
//! `rad, kg, m, s, A, K, mol, cd`. The leading radian slot is the extra
//! (eighth) dimension that keeps plane angles distinguishable from plain
//! dimensionless numbers.
//!
//! Multiplying two quantities adds their exponent vectors; dividing
//! subtracts them. Both are exposed as the `*` and `/` operators.
//!
//! ```rust
//! use sivec_core::dimensions::SiDimensions;
//!
//! let length = SiDimensions::new(0, 0, 1, 0, 0, 0, 0, 0);
//! let duration = SiDimensions::new(0, 0, 0, 1, 0, 0, 0, 0);
//! let speed = length / duration;
//! assert_eq!(speed.to_string(), "m s-1");
//! assert_eq!(speed, "m s-1".parse().unwrap());
//! ```

use core::fmt;
use core::ops::{Div, Mul};
use core::str::FromStr;

use crate::error::QuantityError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Symbols of the base dimensions, in canonical print order.
const SYMBOLS: [&str; 8] = ["rad", "kg", "m", "s", "A", "K", "mol", "cd"];

/// A signed rational exponent of a single base dimension.
///
/// Kept normalized: the denominator is positive and shares no common factor
/// with the numerator; zero is always `0/1`. Equality is therefore exact
/// structural equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exponent {
    num: i8,
    den: i8,
}

const fn gcd(mut a: i8, mut b: i8) -> i8 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    if a < 0 {
        -a
    } else {
        a
    }
}

impl Exponent {
    /// The zero exponent.
    pub const ZERO: Exponent = Exponent { num: 0, den: 1 };

    /// Integer exponent.
    #[inline]
    pub const fn int(num: i8) -> Self {
        Exponent { num, den: 1 }
    }

    /// Rational exponent, normalized. The denominator must be non-zero.
    pub const fn ratio(num: i8, den: i8) -> Self {
        assert!(den != 0, "exponent denominator must be non-zero");
        let sign = if den < 0 { -1 } else { 1 };
        let (num, den) = (num * sign, den * sign);
        if num == 0 {
            return Exponent::ZERO;
        }
        let g = gcd(num, den);
        Exponent {
            num: num / g,
            den: den / g,
        }
    }

    /// Numerator of the normalized exponent.
    #[inline]
    pub const fn numer(self) -> i8 {
        self.num
    }

    /// Denominator of the normalized exponent (always positive).
    #[inline]
    pub const fn denom(self) -> i8 {
        self.den
    }

    /// Whether this exponent is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    fn add(self, rhs: Exponent) -> Exponent {
        let num = i32::from(self.num) * i32::from(rhs.den) + i32::from(rhs.num) * i32::from(self.den);
        let den = i32::from(self.den) * i32::from(rhs.den);
        // Exponents of physical dimensions stay tiny; i8 cannot overflow here.
        Exponent::ratio(num as i8, den as i8)
    }

    fn sub(self, rhs: Exponent) -> Exponent {
        self.add(Exponent {
            num: -rhs.num,
            den: rhs.den,
        })
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// Immutable vector of eight rational exponents over the SI base dimensions.
///
/// The zero vector denotes a dimensionless quantity. Two dimension vectors
/// are equal iff all exponents match exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiDimensions([Exponent; 8]);

impl SiDimensions {
    /// The dimensionless signature (all exponents zero).
    pub const DIMENSIONLESS: SiDimensions = SiDimensions([Exponent::ZERO; 8]);

    /// Builds a dimension vector from integer exponents in canonical order
    /// `rad, kg, m, s, A, K, mol, cd`.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(rad: i8, kg: i8, m: i8, s: i8, a: i8, k: i8, mol: i8, cd: i8) -> Self {
        SiDimensions([
            Exponent::int(rad),
            Exponent::int(kg),
            Exponent::int(m),
            Exponent::int(s),
            Exponent::int(a),
            Exponent::int(k),
            Exponent::int(mol),
            Exponent::int(cd),
        ])
    }

    /// Builds a dimension vector from explicit (possibly rational) exponents.
    pub const fn from_exponents(exponents: [Exponent; 8]) -> Self {
        SiDimensions(exponents)
    }

    /// The exponents in canonical order.
    #[inline]
    pub const fn exponents(&self) -> &[Exponent; 8] {
        &self.0
    }

    /// Whether all exponents are zero.
    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|e| e.is_zero())
    }
}

/// Dimension of a product of quantities: component-wise exponent addition.
impl Mul for SiDimensions {
    type Output = SiDimensions;

    fn mul(self, rhs: SiDimensions) -> SiDimensions {
        let mut out = [Exponent::ZERO; 8];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.0[i].add(rhs.0[i]);
        }
        SiDimensions(out)
    }
}

/// Dimension of a quotient of quantities: component-wise exponent subtraction.
impl Div for SiDimensions {
    type Output = SiDimensions;

    fn div(self, rhs: SiDimensions) -> SiDimensions {
        let mut out = [Exponent::ZERO; 8];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.0[i].sub(rhs.0[i]);
        }
        SiDimensions(out)
    }
}

impl fmt::Display for SiDimensions {
    /// Canonical signature string, e.g. `"kg m2 s-2"`; `"1"` when
    /// dimensionless. Exponent `1` is omitted; rational exponents print as
    /// `num/den` and do not round-trip through [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }
        let mut first = true;
        for (symbol, exp) in SYMBOLS.iter().zip(self.0.iter()) {
            if exp.is_zero() {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            if *exp == Exponent::int(1) {
                write!(f, "{symbol}")?;
            } else {
                write!(f, "{symbol}{exp}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for SiDimensions {
    type Err = QuantityError;

    /// Parses a canonical signature like `"kg m s-2"`.
    ///
    /// Each whitespace-separated token is a base symbol optionally followed
    /// by a signed integer exponent. `"1"` or the empty string denote the
    /// dimensionless signature. A symbol may appear at most once.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: &str| QuantityError::UnitParse {
            input: input.to_owned(),
            reason: reason.to_owned(),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed == "1" {
            return Ok(SiDimensions::DIMENSIONLESS);
        }

        let mut exponents = [Exponent::ZERO; 8];
        let mut seen = [false; 8];
        for token in trimmed.split_whitespace() {
            // Longest-symbol-first so "mol" is not read as "m" + junk.
            let slot = SYMBOLS
                .iter()
                .enumerate()
                .filter(|(_, sym)| token.starts_with(**sym))
                .max_by_key(|(_, sym)| sym.len())
                .map(|(i, _)| i)
                .ok_or_else(|| parse_err("unknown base symbol"))?;
            let rest = &token[SYMBOLS[slot].len()..];
            let exp = if rest.is_empty() {
                1i8
            } else {
                rest.parse::<i8>()
                    .map_err(|_| parse_err("exponent is not a small integer"))?
            };
            if exp == 0 {
                return Err(parse_err("explicit zero exponent"));
            }
            if seen[slot] {
                return Err(parse_err("repeated base symbol"));
            }
            seen[slot] = true;
            exponents[slot] = Exponent::int(exp);
        }
        Ok(SiDimensions(exponents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LENGTH: SiDimensions = SiDimensions::new(0, 0, 1, 0, 0, 0, 0, 0);
    const DURATION: SiDimensions = SiDimensions::new(0, 0, 0, 1, 0, 0, 0, 0);
    const ENERGY: SiDimensions = SiDimensions::new(0, 1, 2, -2, 0, 0, 0, 0);

    #[test]
    fn exponent_normalization() {
        assert_eq!(Exponent::ratio(2, 4), Exponent::ratio(1, 2));
        assert_eq!(Exponent::ratio(-2, -4), Exponent::ratio(1, 2));
        assert_eq!(Exponent::ratio(1, -2), Exponent::ratio(-1, 2));
        assert_eq!(Exponent::ratio(0, 7), Exponent::ZERO);
        assert_eq!(Exponent::ratio(1, 2).add(Exponent::ratio(1, 2)), Exponent::int(1));
    }

    #[test]
    fn multiply_adds_exponents() {
        let area = LENGTH * LENGTH;
        assert_eq!(area, SiDimensions::new(0, 0, 2, 0, 0, 0, 0, 0));
    }

    #[test]
    fn divide_subtracts_exponents() {
        let speed = LENGTH / DURATION;
        assert_eq!(speed, SiDimensions::new(0, 0, 1, -1, 0, 0, 0, 0));
        assert_eq!(speed * DURATION, LENGTH);
    }

    #[test]
    fn zero_vector_is_dimensionless() {
        assert!(SiDimensions::DIMENSIONLESS.is_dimensionless());
        assert!((LENGTH / LENGTH).is_dimensionless());
        assert!(!LENGTH.is_dimensionless());
    }

    #[test]
    fn angle_is_not_dimensionless() {
        let angle = SiDimensions::new(1, 0, 0, 0, 0, 0, 0, 0);
        assert!(!angle.is_dimensionless());
        assert_ne!(angle, SiDimensions::DIMENSIONLESS);
    }

    #[test]
    fn display_canonical_order() {
        assert_eq!(ENERGY.to_string(), "kg m2 s-2");
        assert_eq!(LENGTH.to_string(), "m");
        assert_eq!(SiDimensions::DIMENSIONLESS.to_string(), "1");
        let odd = SiDimensions::new(1, 0, 0, -1, 0, 0, 1, 0);
        assert_eq!(odd.to_string(), "rad s-1 mol");
    }

    #[test]
    fn parse_basic_signatures() {
        assert_eq!("kg m s-2".parse::<SiDimensions>().unwrap(), SiDimensions::new(0, 1, 1, -2, 0, 0, 0, 0));
        assert_eq!("1".parse::<SiDimensions>().unwrap(), SiDimensions::DIMENSIONLESS);
        assert_eq!("".parse::<SiDimensions>().unwrap(), SiDimensions::DIMENSIONLESS);
        assert_eq!("mol".parse::<SiDimensions>().unwrap(), SiDimensions::new(0, 0, 0, 0, 0, 0, 1, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("parsec".parse::<SiDimensions>().is_err());
        assert!("m m".parse::<SiDimensions>().is_err());
        assert!("m0".parse::<SiDimensions>().is_err());
        assert!("kg2.5".parse::<SiDimensions>().is_err());
    }

    #[test]
    fn parse_display_roundtrip() {
        for sig in ["kg m2 s-2", "rad s-1", "m", "1", "A2 K-1 cd3"] {
            let dims: SiDimensions = sig.parse().unwrap();
            assert_eq!(dims.to_string(), sig);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let dims: SiDimensions = "kg m2 s-2".parse().unwrap();
        let json = serde_json::to_string(&dims).unwrap();
        let back: SiDimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dims);
    }

    proptest! {
        #[test]
        fn prop_mul_div_cancel(
            exps in proptest::array::uniform8(-4i8..=4),
            other in proptest::array::uniform8(-4i8..=4),
        ) {
            let a = SiDimensions::new(
                exps[0], exps[1], exps[2], exps[3], exps[4], exps[5], exps[6], exps[7],
            );
            let b = SiDimensions::new(
                other[0], other[1], other[2], other[3], other[4], other[5], other[6], other[7],
            );
            prop_assert_eq!(a * b / b, a);
            prop_assert_eq!(a / a, SiDimensions::DIMENSIONLESS);
        }

        #[test]
        fn prop_integer_roundtrip(exps in proptest::array::uniform8(-9i8..=9)) {
            let dims = SiDimensions::new(
                exps[0], exps[1], exps[2], exps[3], exps[4], exps[5], exps[6], exps[7],
            );
            let reparsed: SiDimensions = dims.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, dims);
        }
    }
}
