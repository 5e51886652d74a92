//! Fail-fast validation of shapes and parameters.
//!
//! ## Purpose
//!
//! This module provides the contract checks shared by the matrix engine and
//! the box filter: operand shape agreement, product compatibility, raw
//! buffer sizing, and kernel bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Shape-only**: The validator sees extents, never element data, so it
//!   stays independent of the element type.
//!
//! ## Non-goals
//!
//! * This module does not correct or coerce invalid inputs.
//! * This module does not check element values (division by zero follows
//!   the numeric type's own behavior by design).

use crate::primitives::errors::MatrixError;

/// Validation utility for matrix shapes and filter parameters.
///
/// Provides static methods returning `Result<(), MatrixError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate that two operands share the same logical shape.
    ///
    /// Equal-shaped empty operands pass: the corresponding operations no-op
    /// cleanly on them.
    pub fn validate_same_shape(
        left: (usize, usize),
        right: (usize, usize),
    ) -> Result<(), MatrixError> {
        if left != right {
            return Err(MatrixError::ShapeMismatch { left, right });
        }
        Ok(())
    }

    /// Validate that matrix product operands have agreeing inner dimensions.
    pub fn validate_product_shapes(
        left: (usize, usize),
        right: (usize, usize),
    ) -> Result<(), MatrixError> {
        if left.1 != right.0 {
            return Err(MatrixError::IncompatibleProduct { left, right });
        }
        Ok(())
    }

    /// Validate that a raw source buffer holds exactly the expected number
    /// of elements.
    pub fn validate_buffer_len(expected: usize, got: usize) -> Result<(), MatrixError> {
        if expected != got {
            return Err(MatrixError::BufferSizeMismatch { expected, got });
        }
        Ok(())
    }

    /// Validate that a matrix has at least one row and one column.
    pub fn validate_not_empty(rows: usize, cols: usize) -> Result<(), MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyInput);
        }
        Ok(())
    }

    /// Validate a box-filter kernel size against the input extents.
    ///
    /// The half-window `k = k_size / 2` must not exceed the smaller extent,
    /// otherwise the reflected index range would leave the matrix.
    pub fn validate_kernel(k_size: usize, rows: usize, cols: usize) -> Result<(), MatrixError> {
        if k_size == 0 {
            return Err(MatrixError::InvalidKernelSize(k_size));
        }
        let k = k_size / 2;
        if k > rows.min(cols) {
            return Err(MatrixError::KernelTooLarge {
                k_size: 2 * k + 1,
                rows,
                cols,
            });
        }
        Ok(())
    }
}
