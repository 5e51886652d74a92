//! The dense, stride-padded matrix container.
//!
//! ## Purpose
//!
//! This module provides [`Matrix`], a row-major 2-D numeric array whose row
//! stride is rounded up so that every row starts at a lane-aligned offset.
//! The container owns its storage exclusively: copying clones the buffer,
//! moving transfers it, and dropping releases it exactly once.
//!
//! ## Design notes
//!
//! * **Stride padding**: `step >= cols`, chosen so `cols * size_of::<T>()`
//!   rounds up to a [`LANE_ALIGN`] multiple. Elements in `[cols, step)` of
//!   a row are padding: zero after allocation, unspecified after lane-wise
//!   arithmetic, and never read as logical data.
//! * **Empty state**: A default-constructed or cleared matrix has
//!   `rows == cols == step == 0` and no allocation. This is distinct from a
//!   zero-area matrix that still records one nonzero extent.
//! * **Fatal allocation**: The plain constructors abort on allocation
//!   failure (via the aligned buffer's non-recovering boundary); the `try_`
//!   constructors surface [`MatrixError::AllocationFailed`] instead.
//!
//! ## Invariants
//!
//! * The buffer holds exactly `rows * step` elements.
//! * `step == 0` if and only if `cols == 0`.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;
use core::mem::size_of;

use crate::primitives::buffer::{AlignedBuffer, LANE_ALIGN};
use crate::primitives::element::Element;
use crate::primitives::errors::MatrixError;
use crate::primitives::validator::Validator;

/// Layout of a raw source buffer handed to [`Matrix::from_buffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferLayout {
    /// Rows are packed back to back (`rows * cols` elements); each row is
    /// copied into place to respect the internal stride.
    Packed,

    /// The source already uses this matrix's padded stride
    /// (`rows * step` elements) and is copied wholesale.
    Padded,
}

/// A dense row-major matrix with lane-aligned row stride.
#[derive(Debug, Clone)]
pub struct Matrix<T: Element> {
    rows: usize,
    cols: usize,
    step: usize,
    data: AlignedBuffer<T>,
}

impl<T: Element> Matrix<T> {
    /// Create an empty matrix (no allocation).
    #[inline]
    pub const fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            step: 0,
            data: AlignedBuffer::empty(),
        }
    }

    /// Allocate a zero-initialized `rows x cols` matrix.
    ///
    /// Aborts the process on allocation failure; see
    /// [`try_with_shape`](Self::try_with_shape) for the recoverable form.
    pub fn with_shape(rows: usize, cols: usize) -> Self {
        let step = Self::step_for(cols);
        Self {
            rows,
            cols,
            step,
            data: AlignedBuffer::zeroed(rows * step),
        }
    }

    /// Allocate a zero-initialized `rows x cols` matrix, surfacing
    /// allocation failure as a typed error.
    pub fn try_with_shape(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let step = Self::step_for(cols);
        Ok(Self {
            rows,
            cols,
            step,
            data: AlignedBuffer::try_zeroed(rows * step)?,
        })
    }

    /// Build a matrix from a raw element buffer.
    ///
    /// With [`BufferLayout::Packed`] the source holds `rows * cols`
    /// elements and each row is copied into the padded layout; with
    /// [`BufferLayout::Padded`] the source already uses this matrix's
    /// stride and holds `rows * step` elements.
    pub fn from_buffer(
        rows: usize,
        cols: usize,
        data: &[T],
        layout: BufferLayout,
    ) -> Result<Self, MatrixError> {
        let mut mat = Self::with_shape(rows, cols);
        match layout {
            BufferLayout::Packed => {
                Validator::validate_buffer_len(rows * cols, data.len())?;
                for r in 0..rows {
                    mat.row_mut(r).copy_from_slice(&data[r * cols..(r + 1) * cols]);
                }
            }
            BufferLayout::Padded => {
                Validator::validate_buffer_len(rows * mat.step, data.len())?;
                mat.data.copy_from_slice(data);
            }
        }
        Ok(mat)
    }

    /// Release the current storage and allocate a fresh zero-initialized
    /// `rows x cols` matrix in place.
    pub fn create(&mut self, rows: usize, cols: usize) {
        *self = Self::with_shape(rows, cols);
    }

    /// Release the storage and return to the empty state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Reset every element (padding included) to zero, keeping the shape.
    pub fn set_zero(&mut self) {
        self.data.set_zero();
    }

    /// Number of logical rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of logical columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Physical row stride in elements (`>= cols`).
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Logical shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total allocated size in bytes (`rows * step * size_of::<T>()`).
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.rows * self.step * size_of::<T>()
    }

    /// Whether the matrix holds no logical elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether the storage is one dense run with no gaps after the last
    /// padded row. Always true for this layout; `step` may still exceed
    /// `cols`.
    #[inline]
    pub fn is_continuous(&self) -> bool {
        true
    }

    /// Reference to the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics when the index is out of the logical range (contract
    /// violation).
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.step + col]
    }

    /// Mutable reference to the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics when the index is out of the logical range.
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.data[row * self.step + col]
    }

    /// Checked element access.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        (row < self.rows && col < self.cols).then(|| &self.data[row * self.step + col])
    }

    /// Checked mutable element access.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        (row < self.rows && col < self.cols).then(|| &mut self.data[row * self.step + col])
    }

    /// The logical elements of one row (padding excluded).
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.step;
        &self.data[start..start + self.cols]
    }

    /// The logical elements of one row, mutably.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.step;
        &mut self.data[start..start + self.cols]
    }

    /// The whole padded buffer (`rows * step` elements) as a flat slice.
    ///
    /// Flat indexing only matches logical indexing when `step == cols`;
    /// stride-aware callers use [`row`](Self::row) instead.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The whole padded buffer as a mutable flat slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Collect the logical elements into a packed `Vec` in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.rows * self.cols);
        for r in 0..self.rows {
            out.extend_from_slice(self.row(r));
        }
        out
    }

    fn step_for(cols: usize) -> usize {
        if cols == 0 {
            return 0;
        }
        let bytes = cols * size_of::<T>();
        let padded = (bytes + LANE_ALIGN - 1) / LANE_ALIGN * LANE_ALIGN;
        padded / size_of::<T>()
    }
}

impl<T: Element> Default for Matrix<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> PartialEq for Matrix<T> {
    /// Logical equality: shapes match and every logical element compares
    /// equal. Padding never participates.
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && (0..self.rows).all(|r| self.row(r) == other.row(r))
    }
}

impl<T: Element + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for (i, v) in self.row(r).iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", v)?;
            }
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
