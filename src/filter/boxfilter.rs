//! The separable moving-sum box filter.
//!
//! ## Purpose
//!
//! This module implements [`box_filter`], a windowed mean over a 2-D matrix
//! computed as two 1-D moving-sum passes (rows, then columns reusing the
//! row sums). Each pass costs O(L) per line regardless of the window size.
//!
//! ## Design notes
//!
//! * **Separability**: The row pass collapses the column window into an
//!   intermediate matrix of row-windowed sums; the column pass slides a
//!   running per-column sum over reflected row indices and writes the
//!   normalized mean.
//! * **Accumulator type**: Sums accumulate in the output's element type
//!   `ST`, a float type wide enough to hold `(2k+1)^2 * max(IT)` without
//!   unacceptable precision loss; inputs widen via `AsPrimitive`.
//! * **Borders**: Reflected indexing through
//!   [`ReflectTable`](crate::math::reflect::ReflectTable): mirrored across
//!   each boundary, edge sample excluded.
//! * **Scratch**: The padded row buffer, difference array, running column
//!   sum, and intermediate sum matrix are function-scoped and released on
//!   every exit path by drop order alone.
//!
//! ## Invariants
//!
//! * The intermediate matrix holds one windowed sum per (real row, output
//!   column); virtual rows are resolved through the row table at column-pass
//!   read time.
//! * The normalized window is always odd: `k_size` is rewritten to
//!   `2 * (k_size / 2) + 1`.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::{AsPrimitive, Float};

use crate::math::lanes::Lanes;
use crate::math::reflect::ReflectTable;
use crate::matrix::dense::Matrix;
use crate::primitives::element::Element;
use crate::primitives::errors::MatrixError;
use crate::primitives::validator::Validator;

/// Windowed mean of `input` with an odd `k_size x k_size` window, written
/// into `output`.
///
/// `k_size` is normalized to the nearest odd value not above it
/// (`2 * (k_size / 2) + 1`). `output` is (re)allocated to the input shape
/// when empty or mis-shaped, otherwise its storage is reused, which lets
/// callers amortize allocation across repeated calls.
///
/// # Errors
///
/// * [`MatrixError::EmptyInput`] when `input` has no rows or columns.
/// * [`MatrixError::InvalidKernelSize`] when `k_size` is zero.
/// * [`MatrixError::KernelTooLarge`] when the half-window exceeds the
///   smaller input extent.
///
/// ```
/// use boxmat_rs::prelude::*;
///
/// let img = Matrix::<u8>::from_buffer(3, 3, &[7; 9], BufferLayout::Packed)?;
/// let mut mean = Matrix::<f32>::new();
/// box_filter(&img, &mut mean, 3)?;
/// assert!((*mean.at(1, 1) - 7.0).abs() < 1e-4);
/// # Ok::<(), MatrixError>(())
/// ```
pub fn box_filter<IT, ST>(
    input: &Matrix<IT>,
    output: &mut Matrix<ST>,
    k_size: usize,
) -> Result<(), MatrixError>
where
    IT: Element + AsPrimitive<ST>,
    ST: Element + Float + Lanes,
{
    Validator::validate_not_empty(input.rows(), input.cols())?;
    Validator::validate_kernel(k_size, input.rows(), input.cols())?;

    let width = input.cols();
    let height = input.rows();

    // Normalize to an odd, symmetric window.
    let k = k_size / 2;
    let k_size = 2 * k + 1;
    let ks = ST::one() / ST::from(k_size * k_size).unwrap();

    let col_map = ReflectTable::new(width, k);
    let row_map = ReflectTable::new(height, k);

    if output.shape() != (height, width) {
        output.create(height, width);
    }

    // Row-windowed sums for every real row; the column pass resolves
    // virtual rows through `row_map`.
    let mut sum = Matrix::<ST>::with_shape(height, width);

    let padded_len = width + 2 * k;
    let mut padded: Vec<IT> = vec![IT::zero(); padded_len];
    let mut diff: Vec<ST> = vec![ST::zero(); width - 1];

    for j in 0..height {
        let src = input.row(j);

        // Gather the reflected borders, then the row body.
        for i in 0..k {
            padded[i] = src[col_map[i]];
        }
        for i in width + k..padded_len {
            padded[i] = src[col_map[i]];
        }
        padded[k..width + k].copy_from_slice(src);

        for i in 0..width - 1 {
            let hi: ST = padded[i + k_size].as_();
            let lo: ST = padded[i].as_();
            diff[i] = hi - lo;
        }

        // Seed with the first window, then slide once per output column.
        let dst = sum.row_mut(j);
        let mut acc = ST::zero();
        for i in 0..k_size {
            let v: ST = padded[i].as_();
            acc = acc + v;
        }
        dst[0] = acc;
        for i in 1..width {
            acc = acc + diff[i - 1];
            dst[i] = acc;
        }
    }

    // Column pass: seed the running sums with the first k_size - 1
    // reflected rows, then slide one output row at a time.
    let mut buffer: Vec<ST> = vec![ST::zero(); width];
    for j in 0..k_size - 1 {
        ST::vadd(&mut buffer, sum.row(row_map[j]));
    }

    for j in 0..height {
        let add_row = sum.row(row_map[j + k_size - 1]);
        let sub_row = sum.row(row_map[j]);
        let dst = output.row_mut(j);
        for i in 0..width {
            let t = buffer[i] + add_row[i];
            dst[i] = t;
            buffer[i] = t - sub_row[i];
        }
    }

    output.mul_assign_scalar(ks);
    Ok(())
}
