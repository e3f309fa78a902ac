//! Macros for declaring quantity kinds.

/// Declares a quantity-kind marker type.
///
/// This is the seam through which per-quantity wrapper crates plug their
/// own kinds into the generic engine. A `relative` kind is closed under
/// addition and subtraction with itself; an `absolute` kind names the
/// relative kind its differences produce.
///
/// ```rust
/// use sivec_core::declare_kind;
/// use sivec_core::dimensions::SiDimensions;
///
/// declare_kind! {
///     /// Amount of data.
///     relative Information {
///         name: "information",
///         si_symbol: "bit",
///         dims: SiDimensions::DIMENSIONLESS,
///     }
/// }
/// ```
#[macro_export]
macro_rules! declare_kind {
    (
        $(#[$meta:meta])*
        relative $name:ident {
            name: $label:literal,
            si_symbol: $symbol:literal,
            dims: $dims:expr,
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name;

        impl $crate::kind::QuantityKind for $name {
            const NAME: &'static str = $label;
            const BASE: $crate::dimensions::SiDimensions = $dims;

            fn si_unit() -> $crate::unit::Unit {
                $crate::unit::Unit::new($symbol, $crate::scale::Scale::IDENTITY, Self::BASE, Self::NAME)
            }
        }

        impl $crate::kind::Relative for $name {}
    };

    (
        $(#[$meta:meta])*
        absolute $name:ident pairs $pair:ty {
            name: $label:literal,
            si_symbol: $symbol:literal,
            dims: $dims:expr,
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name;

        impl $crate::kind::QuantityKind for $name {
            const NAME: &'static str = $label;
            const BASE: $crate::dimensions::SiDimensions = $dims;

            fn si_unit() -> $crate::unit::Unit {
                $crate::unit::Unit::new($symbol, $crate::scale::Scale::IDENTITY, Self::BASE, Self::NAME)
            }
        }

        impl $crate::kind::Absolute for $name {
            type Pair = $pair;
        }
    };
}
