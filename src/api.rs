//! High-level API for the matrix engine and box filter.
//!
//! ## Purpose
//!
//! This module provides the crate's public surface: the re-exported core
//! types plus [`BoxFilter`], a small configuration type wrapping the free
//! [`box_filter`] entry point for callers that prefer to hold the window
//! size alongside reusable outputs.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `BoxFilter::new(k_size)` then
//!   `.apply(&input, &mut output)`; the output matrix is reused across
//!   calls with stable shapes.

use num_traits::{AsPrimitive, Float};

use crate::filter::boxfilter::box_filter;
use crate::math::lanes::Lanes;
use crate::matrix::dense::Matrix;
use crate::primitives::element::Element;
use crate::primitives::errors::MatrixError;

// Publicly re-exported types
pub use crate::matrix::arith::{scalar_add, scalar_div, scalar_mul, scalar_sub};
pub use crate::matrix::convert::to_type;
pub use crate::matrix::dense::BufferLayout;

/// A reusable box-filter configuration.
///
/// Holds the requested window size; the window applied is the normalized
/// odd size `2 * (k_size / 2) + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxFilter {
    k_size: usize,
}

impl BoxFilter {
    /// Create a filter with the given window size.
    #[inline]
    pub const fn new(k_size: usize) -> Self {
        Self { k_size }
    }

    /// The configured (pre-normalization) window size.
    #[inline]
    pub const fn k_size(&self) -> usize {
        self.k_size
    }

    /// Run the filter; see [`box_filter`] for semantics and errors.
    pub fn apply<IT, ST>(
        &self,
        input: &Matrix<IT>,
        output: &mut Matrix<ST>,
    ) -> Result<(), MatrixError>
    where
        IT: Element + AsPrimitive<ST>,
        ST: Element + Float + Lanes,
    {
        box_filter(input, output, self.k_size)
    }
}
