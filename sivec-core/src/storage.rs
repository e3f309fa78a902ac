//! Dense/sparse storage engine for SI-standard values.
//!
//! [`VectorData`] owns the raw numbers behind a quantity vector, always in
//! SI-standard representation: conversion through the display unit's
//! [`Scale`] happens exactly once, at construction. The storage kind is a
//! property of the representation only: equality, arithmetic, iteration
//! and cardinality are all representation-transparent.
//!
//! Sparse storage keeps an index-sorted pair of arrays holding only the
//! entries whose SI value is non-zero (`NaN` counts as non-zero); every
//! other index is an implicit exact zero. Element-wise addition and
//! subtraction between two sparse operands use a merge walk over the union
//! of their index sets, as does multiplication (stored values may be `NaN`
//! or infinite, so even a product cannot skip indices where one side is
//! non-zero). Division materializes densely first: `0/0` is `NaN` at
//! indices neither operand stores.
//!
//! Every instance is tagged mutable or immutable at creation; constructors
//! and arithmetic produce immutable data, and [`VectorData::mutable`] makes
//! a writable deep copy. In-place calls on an immutable instance fail with
//! [`QuantityError::ImmutabilityViolation`] and change nothing.

use crate::error::{QuantityError, Result};
use crate::scale::Scale;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical representation of a vector's backing store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StorageKind {
    /// One slot per index, including zeros.
    Dense,
    /// Only non-zero-valued indices stored explicitly.
    Sparse,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum Storage {
    Dense(Vec<f64>),
    Sparse {
        len: usize,
        indices: Vec<usize>,
        values: Vec<f64>,
    },
}

/// Dense or sparse array of SI-standard values with a mutability tag.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VectorData {
    storage: Storage,
    mutable: bool,
}

fn is_stored(v: f64) -> bool {
    // NaN is non-zero and must be stored explicitly.
    v != 0.0 || v.is_nan()
}

fn package(values: Vec<f64>, kind: StorageKind) -> Storage {
    match kind {
        StorageKind::Dense => Storage::Dense(values),
        StorageKind::Sparse => {
            let len = values.len();
            let mut indices = Vec::new();
            let mut kept = Vec::new();
            for (i, v) in values.into_iter().enumerate() {
                if is_stored(v) {
                    indices.push(i);
                    kept.push(v);
                }
            }
            Storage::Sparse {
                len,
                indices,
                values: kept,
            }
        }
    }
}

impl VectorData {
    /// Builds from raw display-unit values, converting each through
    /// `scale.to_si`. The result is immutable.
    pub fn from_display(values: &[f64], scale: &Scale, kind: StorageKind) -> Self {
        let si: Vec<f64> = values.iter().map(|&v| scale.to_si(v)).collect();
        Self::from_si_vec(si, kind)
    }

    /// Builds from values already in SI representation. Immutable.
    pub fn from_si(values: &[f64], kind: StorageKind) -> Self {
        Self::from_si_vec(values.to_vec(), kind)
    }

    fn from_si_vec(si: Vec<f64>, kind: StorageKind) -> Self {
        VectorData {
            storage: package(si, kind),
            mutable: false,
        }
    }

    /// Builds from a sparse index→value mapping of display-unit values.
    ///
    /// Unspecified indices are implicit SI zeros (they do not pass through
    /// the scale). Fails on an index at or beyond `size`, or on a repeated
    /// index, before any state is created.
    pub fn from_map(
        pairs: &[(usize, f64)],
        size: usize,
        scale: &Scale,
        kind: StorageKind,
    ) -> Result<Self> {
        for &(index, _) in pairs {
            if index >= size {
                return Err(QuantityError::InvalidSparseIndex { index, size });
            }
        }
        let mut sorted: Vec<(usize, f64)> = pairs
            .iter()
            .map(|&(i, v)| (i, scale.to_si(v)))
            .collect();
        sorted.sort_unstable_by_key(|&(i, _)| i);
        for window in sorted.windows(2) {
            if window[0].0 == window[1].0 {
                return Err(QuantityError::DuplicateSparseIndex { index: window[0].0 });
            }
        }
        let storage = match kind {
            StorageKind::Dense => {
                let mut dense = vec![0.0; size];
                for (i, v) in sorted {
                    dense[i] = v;
                }
                Storage::Dense(dense)
            }
            StorageKind::Sparse => {
                let mut indices = Vec::with_capacity(sorted.len());
                let mut values = Vec::with_capacity(sorted.len());
                for (i, v) in sorted {
                    if is_stored(v) {
                        indices.push(i);
                        values.push(v);
                    }
                }
                Storage::Sparse {
                    len: size,
                    indices,
                    values,
                }
            }
        };
        Ok(VectorData {
            storage,
            mutable: false,
        })
    }

    /// Number of elements (fixed for the lifetime of the instance).
    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Dense(values) => values.len(),
            Storage::Sparse { len, .. } => *len,
        }
    }

    /// Whether the vector has zero elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The current representation.
    pub fn storage_kind(&self) -> StorageKind {
        match self.storage {
            Storage::Dense(_) => StorageKind::Dense,
            Storage::Sparse { .. } => StorageKind::Sparse,
        }
    }

    /// Whether in-place operations are permitted on this instance.
    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.len();
        if index >= len {
            return Err(QuantityError::IndexOutOfBounds { index, len });
        }
        Ok(())
    }

    fn check_mutable(&self) -> Result<()> {
        if !self.mutable {
            return Err(QuantityError::ImmutabilityViolation);
        }
        Ok(())
    }

    fn value_at(&self, index: usize) -> f64 {
        match &self.storage {
            Storage::Dense(values) => values[index],
            Storage::Sparse {
                indices, values, ..
            } => match indices.binary_search(&index) {
                Ok(pos) => values[pos],
                Err(_) => 0.0,
            },
        }
    }

    /// The SI value at `index`.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.value_at(index))
    }

    /// Writes an SI value at `index`. Requires the mutable tag.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        self.check_mutable()?;
        self.check_index(index)?;
        match &mut self.storage {
            Storage::Dense(values) => values[index] = value,
            Storage::Sparse {
                indices, values, ..
            } => match indices.binary_search(&index) {
                Ok(pos) => {
                    if is_stored(value) {
                        values[pos] = value;
                    } else {
                        indices.remove(pos);
                        values.remove(pos);
                    }
                }
                Err(pos) => {
                    if is_stored(value) {
                        indices.insert(pos, index);
                        values.insert(pos, value);
                    }
                }
            },
        }
        Ok(())
    }

    /// Applies `f` to every logical element in place.
    ///
    /// On sparse storage, when `f(0) != 0` (e.g. a division by zero) the
    /// implicit zeros become explicit entries; the representation stays
    /// sparse either way.
    pub fn assign(&mut self, f: impl Fn(f64) -> f64) -> Result<()> {
        self.check_mutable()?;
        match &mut self.storage {
            Storage::Dense(values) => {
                for v in values.iter_mut() {
                    *v = f(*v);
                }
            }
            Storage::Sparse {
                len,
                indices,
                values,
            } => {
                let zero_image = f(0.0);
                if is_stored(zero_image) {
                    let mut dense = vec![zero_image; *len];
                    for (&i, &v) in indices.iter().zip(values.iter()) {
                        dense[i] = f(v);
                    }
                    let mut new_indices = Vec::new();
                    let mut new_values = Vec::new();
                    for (i, v) in dense.into_iter().enumerate() {
                        if is_stored(v) {
                            new_indices.push(i);
                            new_values.push(v);
                        }
                    }
                    *indices = new_indices;
                    *values = new_values;
                } else {
                    let mut new_indices = Vec::with_capacity(indices.len());
                    let mut new_values = Vec::with_capacity(values.len());
                    for (&i, &v) in indices.iter().zip(values.iter()) {
                        let mapped = f(v);
                        if is_stored(mapped) {
                            new_indices.push(i);
                            new_values.push(mapped);
                        }
                    }
                    *indices = new_indices;
                    *values = new_values;
                }
            }
        }
        Ok(())
    }

    /// In-place absolute value.
    pub fn abs(&mut self) -> Result<()> {
        self.assign(f64::abs)
    }

    /// In-place ceiling.
    pub fn ceil(&mut self) -> Result<()> {
        self.assign(f64::ceil)
    }

    /// In-place floor.
    pub fn floor(&mut self) -> Result<()> {
        self.assign(f64::floor)
    }

    /// In-place negation.
    pub fn neg(&mut self) -> Result<()> {
        self.assign(|v| -v)
    }

    /// In-place rounding to the nearest integer, ties to even.
    pub fn rint(&mut self) -> Result<()> {
        self.assign(f64::round_ties_even)
    }

    /// In-place multiplication of every element by a scalar.
    pub fn multiply_by(&mut self, factor: f64) -> Result<()> {
        self.assign(|v| v * factor)
    }

    /// In-place division of every element by a scalar (IEEE semantics).
    pub fn divide_by(&mut self, divisor: f64) -> Result<()> {
        self.assign(|v| v / divisor)
    }

    /// Count of entries whose SI value is non-zero, independent of the
    /// storage kind.
    pub fn cardinality(&self) -> usize {
        match &self.storage {
            Storage::Dense(values) => values.iter().filter(|&&v| is_stored(v)).count(),
            Storage::Sparse { values, .. } => values.len(),
        }
    }

    /// Sum of all SI entries.
    pub fn zsum(&self) -> f64 {
        match &self.storage {
            Storage::Dense(values) => values.iter().sum(),
            Storage::Sparse { values, .. } => values.iter().sum(),
        }
    }

    /// All logical SI values in index order, materialized densely.
    pub fn dense_values(&self) -> Vec<f64> {
        match &self.storage {
            Storage::Dense(values) => values.clone(),
            Storage::Sparse {
                len,
                indices,
                values,
            } => {
                let mut dense = vec![0.0; *len];
                for (&i, &v) in indices.iter().zip(values.iter()) {
                    dense[i] = v;
                }
                dense
            }
        }
    }

    /// An equivalent instance in dense representation. No-op copy when
    /// already dense; preserves the mutability tag.
    pub fn to_dense(&self) -> Self {
        VectorData {
            storage: Storage::Dense(self.dense_values()),
            mutable: self.mutable,
        }
    }

    /// An equivalent instance in sparse representation. No-op copy when
    /// already sparse; preserves the mutability tag.
    pub fn to_sparse(&self) -> Self {
        let storage = match &self.storage {
            Storage::Sparse { .. } => self.storage.clone(),
            Storage::Dense(values) => package(values.clone(), StorageKind::Sparse),
        };
        VectorData {
            storage,
            mutable: self.mutable,
        }
    }

    /// A writable deep copy sharing no backing store with `self`.
    pub fn mutable(&self) -> Self {
        VectorData {
            storage: self.storage.clone(),
            mutable: true,
        }
    }

    /// A read-only deep copy sharing no mutable backing store with `self`.
    pub fn immutable(&self) -> Self {
        VectorData {
            storage: self.storage.clone(),
            mutable: false,
        }
    }

    /// Iterates the logical SI values in index order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            data: self,
            index: 0,
            cursor: 0,
        }
    }

    fn check_size(&self, rhs: &VectorData) -> Result<()> {
        if self.len() != rhs.len() {
            return Err(QuantityError::SizeMismatch {
                left: self.len(),
                right: rhs.len(),
            });
        }
        Ok(())
    }

    fn binary_zero_preserving(&self, rhs: &VectorData, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        self.check_size(rhs)?;
        let storage = match (&self.storage, &rhs.storage) {
            (
                Storage::Sparse {
                    len,
                    indices: li,
                    values: lv,
                },
                Storage::Sparse {
                    indices: ri,
                    values: rv,
                    ..
                },
            ) => merge_sparse(*len, li, lv, ri, rv, f),
            _ => {
                let values: Vec<f64> = self
                    .iter()
                    .zip(rhs.iter())
                    .map(|(l, r)| f(l, r))
                    .collect();
                package(values, self.storage_kind())
            }
        };
        Ok(VectorData {
            storage,
            mutable: false,
        })
    }

    /// Element-wise sum. Result adopts the left operand's storage kind and
    /// is immutable. Fails on a size mismatch before touching any element.
    pub fn plus(&self, rhs: &VectorData) -> Result<Self> {
        self.binary_zero_preserving(rhs, |l, r| l + r)
    }

    /// Element-wise difference.
    pub fn minus(&self, rhs: &VectorData) -> Result<Self> {
        self.binary_zero_preserving(rhs, |l, r| l - r)
    }

    /// Element-wise product. Indices where either operand stores a value
    /// are computed explicitly, so `0 * NaN` and `0 * ∞` follow IEEE-754.
    pub fn times(&self, rhs: &VectorData) -> Result<Self> {
        self.binary_zero_preserving(rhs, |l, r| l * r)
    }

    /// Element-wise quotient with IEEE-754 semantics (`0/0` is `NaN`,
    /// `x/0` is `±∞`), never an error. Computed densely because the
    /// quotient is non-zero even where neither operand stores a value.
    pub fn divide(&self, rhs: &VectorData) -> Result<Self> {
        self.check_size(rhs)?;
        let values: Vec<f64> = self
            .iter()
            .zip(rhs.iter())
            .map(|(l, r)| l / r)
            .collect();
        Ok(VectorData {
            storage: package(values, self.storage_kind()),
            mutable: false,
        })
    }
}

/// Representation-transparent equality: two instances holding the same
/// logical values compare equal regardless of storage kind.
impl PartialEq for VectorData {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| l == r)
    }
}

/// Index-order iterator over the logical SI values of a [`VectorData`].
///
/// The sequence is finite and cannot mutate the vector.
pub struct Iter<'a> {
    data: &'a VectorData,
    index: usize,
    cursor: usize,
}

impl Iterator for Iter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.data.len() {
            return None;
        }
        let value = match &self.data.storage {
            Storage::Dense(values) => values[self.index],
            Storage::Sparse {
                indices, values, ..
            } => {
                if self.cursor < indices.len() && indices[self.cursor] == self.index {
                    let v = values[self.cursor];
                    self.cursor += 1;
                    v
                } else {
                    0.0
                }
            }
        };
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Merge walk over the union of two sorted sparse index sets.
fn merge_sparse(
    len: usize,
    li: &[usize],
    lv: &[f64],
    ri: &[usize],
    rv: &[f64],
    f: impl Fn(f64, f64) -> f64,
) -> Storage {
    let mut indices = Vec::new();
    let mut values = Vec::new();
    let (mut l, mut r) = (0, 0);
    while l < li.len() || r < ri.len() {
        let (index, left, right) = if r >= ri.len() || (l < li.len() && li[l] < ri[r]) {
            let out = (li[l], lv[l], 0.0);
            l += 1;
            out
        } else if l >= li.len() || ri[r] < li[l] {
            let out = (ri[r], 0.0, rv[r]);
            r += 1;
            out
        } else {
            let out = (li[l], lv[l], rv[r]);
            l += 1;
            r += 1;
            out
        };
        let v = f(left, right);
        if is_stored(v) {
            indices.push(index);
            values.push(v);
        }
    }
    Storage::Sparse {
        len,
        indices,
        values,
    }
}
