//! Element-type conversion.
//!
//! ## Purpose
//!
//! This module provides [`to_type`], the free conversion routine producing
//! a matrix of a different element type by per-element numeric cast with
//! `as` semantics (truncating or rounding per the target type's conversion
//! rules), preserving the logical shape.
//!
//! ## Design notes
//!
//! * Conversion is stride-aware: only logical elements are cast, the
//!   target's padding stays zero-initialized.
//! * The target stride is recomputed for the target element width, so the
//!   physical layouts of source and result may differ.

use num_traits::AsPrimitive;

use crate::matrix::dense::Matrix;
use crate::primitives::element::Element;

/// Convert a matrix to a different element type, element by element.
///
/// ```
/// use boxmat_rs::prelude::*;
///
/// let bytes = Matrix::<u8>::from_buffer(1, 3, &[1, 2, 3], BufferLayout::Packed)?;
/// let floats: Matrix<f32> = to_type(&bytes);
/// assert_eq!(*floats.at(0, 2), 3.0);
/// # Ok::<(), MatrixError>(())
/// ```
pub fn to_type<U, T>(mat: &Matrix<T>) -> Matrix<U>
where
    T: Element + AsPrimitive<U>,
    U: Element,
{
    let mut ret = Matrix::with_shape(mat.rows(), mat.cols());
    for r in 0..mat.rows() {
        for (dst, src) in ret.row_mut(r).iter_mut().zip(mat.row(r).iter()) {
            *dst = src.as_();
        }
    }
    ret
}
