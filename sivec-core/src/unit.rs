//! Units and the process-wide unit registry.
//!
//! A [`Unit`] ties a display [`Scale`] to an [`SiDimensions`] signature and
//! the name of the quantity kind it belongs to. A unit belongs to exactly
//! one kind, but several kinds may share the same dimensions (energy and
//! torque are both `kg m2 s-2`); that ambiguity is resolved only by the
//! declared quantity type at construction time, never inferred from the
//! dimensions alone.
//!
//! The [`registry`] resolves a dimension vector to a canonical unit,
//! minting an anonymous derived SI unit on demand when no named unit is
//! registered for that combination.

use core::fmt;
use std::sync::Arc;

use crate::dimensions::SiDimensions;
use crate::scale::Scale;

#[derive(Debug)]
struct UnitInner {
    symbol: String,
    scale: Scale,
    dims: SiDimensions,
    kind: &'static str,
}

/// A concrete unit: display symbol, scale and SI dimension signature.
///
/// Cheap to clone (shared inner). Two units compare equal when symbol,
/// scale and dimensions all match.
#[derive(Clone, Debug)]
pub struct Unit(Arc<UnitInner>);

impl Unit {
    /// Creates a named unit belonging to the given quantity kind.
    pub fn new(symbol: &str, scale: Scale, dims: SiDimensions, kind: &'static str) -> Self {
        Unit(Arc::new(UnitInner {
            symbol: symbol.to_owned(),
            scale,
            dims,
            kind,
        }))
    }

    /// Mints an anonymous derived SI unit for the given dimensions:
    /// identity scale, symbol equal to the canonical dimension signature.
    pub fn derived(dims: SiDimensions) -> Self {
        Unit(Arc::new(UnitInner {
            symbol: dims.to_string(),
            scale: Scale::IDENTITY,
            dims,
            kind: "si",
        }))
    }

    /// The printable unit symbol.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.0.symbol
    }

    /// The display↔SI conversion scale.
    #[inline]
    pub fn scale(&self) -> &Scale {
        &self.0.scale
    }

    /// The SI dimension signature.
    #[inline]
    pub fn dims(&self) -> SiDimensions {
        self.0.dims
    }

    /// Name of the quantity kind this unit belongs to (`"si"` for
    /// anonymous derived units).
    #[inline]
    pub fn kind(&self) -> &'static str {
        self.0.kind
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.0.symbol == other.0.symbol
            && self.0.scale == other.0.scale
            && self.0.dims == other.0.dims
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.symbol)
    }
}

/// Lookup-or-create resolution from dimension vectors to canonical units.
///
/// The map is process-wide state with a documented lifecycle: initialized
/// lazily on first use, append-only, never reset during normal operation.
/// It is lock-guarded, so read-mostly concurrent access is safe.
pub mod registry {
    use once_cell::sync::Lazy;
    use rustc_hash::FxHashMap;
    use std::sync::Mutex;

    use super::{SiDimensions, Unit};
    use crate::units;

    static REGISTRY: Lazy<Mutex<FxHashMap<SiDimensions, Unit>>> = Lazy::new(|| {
        let mut map = FxHashMap::default();
        for unit in units::base_units() {
            map.insert(unit.dims(), unit);
        }
        Mutex::new(map)
    });

    /// Returns the canonical unit for the given dimensions.
    ///
    /// Named base units are returned where one is registered; otherwise an
    /// anonymous derived SI unit is created, cached and returned. Repeated
    /// calls with equal dimensions yield equal units with identity scale.
    pub fn resolve(dims: SiDimensions) -> Unit {
        let mut map = REGISTRY.lock().expect("unit registry poisoned");
        map.entry(dims)
            .or_insert_with(|| {
                log::debug!("registering derived SI unit for \"{dims}\"");
                Unit::derived(dims)
            })
            .clone()
    }
}
