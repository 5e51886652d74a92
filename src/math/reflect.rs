//! Mirror-border index tables.
//!
//! ## Purpose
//!
//! This module implements the reflected border extension used by the box
//! filter. A [`ReflectTable`] maps virtual indices of a padded axis onto
//! real indices of the unpadded axis, mirroring across each boundary
//! without duplicating the edge sample.
//!
//! ## Key concepts
//!
//! * **Virtual index**: A position `v` in `[0, len + 2k)` along the padded
//!   axis.
//! * **Mirroring rule**: `v < k` maps to `k - 1 - v`; the interior maps to
//!   `v - k`; `v >= len + k` maps to `2*len + k - 1 - v`.
//!
//! ## Invariants
//!
//! * Requires `k <= len`; every mapped index then lands in `[0, len)`.
//! * The table is built once per axis per filter call and never mutated.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::ops::Index;

/// Precomputed virtual-to-real index mapping for one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectTable {
    map: Vec<usize>,
}

impl ReflectTable {
    /// Build the mapping for an axis of length `len` with half-window `k`.
    ///
    /// The table has `len + 2k` entries. `k` must not exceed `len`.
    pub fn new(len: usize, k: usize) -> Self {
        debug_assert!(k <= len, "half-window {} exceeds axis length {}", k, len);
        let mut map = Vec::with_capacity(len + 2 * k);
        for v in 0..k {
            map.push(k - 1 - v);
        }
        for v in k..len + k {
            map.push(v - k);
        }
        for v in len + k..len + 2 * k {
            map.push(2 * len + k - 1 - v);
        }
        Self { map }
    }

    /// Number of virtual positions covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table covers no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The mapped indices as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.map
    }
}

impl Index<usize> for ReflectTable {
    type Output = usize;

    #[inline]
    fn index(&self, v: usize) -> &usize {
        &self.map[v]
    }
}
