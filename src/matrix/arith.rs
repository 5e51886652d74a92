//! Arithmetic operations and operator overloads.
//!
//! ## Purpose
//!
//! This module implements the matrix engine's arithmetic contract: the
//! elementwise family (add, subtract, elementwise multiply, divide) with
//! scalar-broadcast and commuted-scalar siblings, compound in-place forms,
//! the matrix product, and transposition.
//!
//! ## Design notes
//!
//! * **Named methods first**: The fallible named methods are the primary
//!   surface and return [`MatrixError`] on shape mismatch. The operator
//!   overloads delegate to them and panic on contract violation.
//! * **Padded lane-wise evaluation**: Add, subtract, multiply, and every
//!   scalar form run over the full padded buffer; padding values are never
//!   observed downstream and writes stay inside the allocation. Division
//!   iterates logical columns only: integral zero padding in a divisor
//!   would trap.
//! * **Product strategy**: `matmul` transposes the right operand once and
//!   reduces each output element as a lane-chunked dot product of two rows,
//!   so float results may differ from naive left-to-right summation in the
//!   last bit.
//! * **Operator semantics**: Between matrices, `*` is the matrix product
//!   while `*=` is elementwise (the elementwise product is also available
//!   as the named `mul_elem`).
//!
//! ## Invariants
//!
//! * Elementwise operands must share the same logical shape; the product
//!   requires `lhs.cols == rhs.rows`.
//! * Compound forms mutate only the receiver; no operation reads an operand
//!   location after writing the corresponding output location.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::math::lanes::Lanes;
use crate::matrix::dense::Matrix;
use crate::primitives::element::Element;
use crate::primitives::errors::MatrixError;
use crate::primitives::validator::Validator;

// ============================================================================
// Named operations
// ============================================================================

impl<T: Element + Lanes> Matrix<T> {
    /// Elementwise sum. Fails with `ShapeMismatch` on unequal shapes.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        Validator::validate_same_shape(self.shape(), other.shape())?;
        let mut ret = self.clone();
        T::vadd(ret.as_mut_slice(), other.as_slice());
        Ok(ret)
    }

    /// Elementwise difference. Fails with `ShapeMismatch` on unequal shapes.
    pub fn sub(&self, other: &Self) -> Result<Self, MatrixError> {
        Validator::validate_same_shape(self.shape(), other.shape())?;
        let mut ret = self.clone();
        T::vsub(ret.as_mut_slice(), other.as_slice());
        Ok(ret)
    }

    /// Elementwise product (distinct from the matrix product).
    pub fn mul_elem(&self, other: &Self) -> Result<Self, MatrixError> {
        Validator::validate_same_shape(self.shape(), other.shape())?;
        let mut ret = self.clone();
        T::vmul(ret.as_mut_slice(), other.as_slice());
        Ok(ret)
    }

    /// Elementwise quotient.
    ///
    /// Zero divisors follow the numeric type's own behavior: floats
    /// propagate infinities and NaN, integers panic.
    pub fn div(&self, other: &Self) -> Result<Self, MatrixError> {
        Validator::validate_same_shape(self.shape(), other.shape())?;
        let mut ret = self.clone();
        for r in 0..self.rows() {
            T::vdiv(ret.row_mut(r), other.row(r));
        }
        Ok(ret)
    }

    /// Matrix product; requires `self.cols == other.rows`.
    ///
    /// The right operand is transposed once, then each output element is a
    /// lane-chunked dot product between a row of `self` and a row of the
    /// transpose.
    pub fn matmul(&self, other: &Self) -> Result<Self, MatrixError> {
        Validator::validate_product_shapes(self.shape(), other.shape())?;
        let bt = other.transpose();
        let mut ret = Self::with_shape(self.rows(), other.cols());
        let step = ret.step();
        let out = ret.as_mut_slice();
        for i in 0..self.rows() {
            let lhs = self.row(i);
            for j in 0..bt.rows() {
                out[i * step + j] = T::dot(lhs, bt.row(j));
            }
        }
        Ok(ret)
    }

    /// Broadcast sum with a scalar.
    pub fn add_scalar(&self, s: T) -> Self {
        let mut ret = self.clone();
        T::vadd_scalar(ret.as_mut_slice(), s);
        ret
    }

    /// Broadcast difference with a scalar.
    pub fn sub_scalar(&self, s: T) -> Self {
        let mut ret = self.clone();
        T::vsub_scalar(ret.as_mut_slice(), s);
        ret
    }

    /// Broadcast product with a scalar.
    pub fn mul_scalar(&self, s: T) -> Self {
        let mut ret = self.clone();
        T::vmul_scalar(ret.as_mut_slice(), s);
        ret
    }

    /// Broadcast quotient with a scalar.
    pub fn div_scalar(&self, s: T) -> Self {
        let mut ret = self.clone();
        T::vdiv_scalar(ret.as_mut_slice(), s);
        ret
    }

    /// In-place elementwise sum.
    pub fn add_assign_mat(&mut self, other: &Self) -> Result<(), MatrixError> {
        Validator::validate_same_shape(self.shape(), other.shape())?;
        T::vadd(self.as_mut_slice(), other.as_slice());
        Ok(())
    }

    /// In-place elementwise difference.
    pub fn sub_assign_mat(&mut self, other: &Self) -> Result<(), MatrixError> {
        Validator::validate_same_shape(self.shape(), other.shape())?;
        T::vsub(self.as_mut_slice(), other.as_slice());
        Ok(())
    }

    /// In-place elementwise product.
    pub fn mul_assign_elem(&mut self, other: &Self) -> Result<(), MatrixError> {
        Validator::validate_same_shape(self.shape(), other.shape())?;
        T::vmul(self.as_mut_slice(), other.as_slice());
        Ok(())
    }

    /// In-place elementwise quotient.
    pub fn div_assign_mat(&mut self, other: &Self) -> Result<(), MatrixError> {
        Validator::validate_same_shape(self.shape(), other.shape())?;
        for r in 0..self.rows() {
            T::vdiv(self.row_mut(r), other.row(r));
        }
        Ok(())
    }

    /// In-place broadcast sum.
    #[inline]
    pub fn add_assign_scalar(&mut self, s: T) {
        T::vadd_scalar(self.as_mut_slice(), s);
    }

    /// In-place broadcast difference.
    #[inline]
    pub fn sub_assign_scalar(&mut self, s: T) {
        T::vsub_scalar(self.as_mut_slice(), s);
    }

    /// In-place broadcast product.
    #[inline]
    pub fn mul_assign_scalar(&mut self, s: T) {
        T::vmul_scalar(self.as_mut_slice(), s);
    }

    /// In-place broadcast quotient.
    #[inline]
    pub fn div_assign_scalar(&mut self, s: T) {
        T::vdiv_scalar(self.as_mut_slice(), s);
    }
}

impl<T: Element> Matrix<T> {
    /// Transposition: `ret[j][i] = self[i][j]`, into fresh storage.
    pub fn transpose(&self) -> Self {
        let mut ret = Self::with_shape(self.cols(), self.rows());
        let step = ret.step();
        let out = ret.as_mut_slice();
        for i in 0..self.rows() {
            for (j, v) in self.row(i).iter().enumerate() {
                out[j * step + i] = *v;
            }
        }
        ret
    }
}

// ============================================================================
// Commuted scalar forms
// ============================================================================

/// `s + m`, elementwise.
pub fn scalar_add<T: Element + Lanes>(s: T, mat: &Matrix<T>) -> Matrix<T> {
    mat.add_scalar(s)
}

/// `s - m`, elementwise.
pub fn scalar_sub<T: Element + Lanes>(s: T, mat: &Matrix<T>) -> Matrix<T> {
    let mut ret = mat.clone();
    T::vrsub_scalar(ret.as_mut_slice(), s);
    ret
}

/// `s * m`, elementwise.
pub fn scalar_mul<T: Element + Lanes>(s: T, mat: &Matrix<T>) -> Matrix<T> {
    mat.mul_scalar(s)
}

/// `s / m`, elementwise.
///
/// Iterates logical columns only: integral zero padding would trap.
pub fn scalar_div<T: Element + Lanes>(s: T, mat: &Matrix<T>) -> Matrix<T> {
    let mut ret = mat.clone();
    for r in 0..ret.rows() {
        T::vrdiv_scalar(ret.row_mut(r), s);
    }
    ret
}

// ============================================================================
// Operator overloads
// ============================================================================
//
// Operators delegate to the named methods and panic on shape mismatch; the
// named methods are the non-panicking surface.

fn expect_op<T>(result: Result<T, MatrixError>, op: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("matrix {} failed: {}", op, e),
    }
}

impl<'a, 'b, T: Element + Lanes> Add<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &'b Matrix<T>) -> Matrix<T> {
        expect_op(Matrix::add(self, rhs), "addition")
    }
}

impl<'a, T: Element + Lanes> Add<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: T) -> Matrix<T> {
        self.add_scalar(rhs)
    }
}

impl<'a, 'b, T: Element + Lanes> Sub<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &'b Matrix<T>) -> Matrix<T> {
        expect_op(Matrix::sub(self, rhs), "subtraction")
    }
}

impl<'a, T: Element + Lanes> Sub<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: T) -> Matrix<T> {
        self.sub_scalar(rhs)
    }
}

/// `*` between matrices is the matrix product; use
/// [`Matrix::mul_elem`] or `*=` for the elementwise product.
impl<'a, 'b, T: Element + Lanes> Mul<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &'b Matrix<T>) -> Matrix<T> {
        expect_op(self.matmul(rhs), "product")
    }
}

impl<'a, T: Element + Lanes> Mul<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.mul_scalar(rhs)
    }
}

impl<'a, 'b, T: Element + Lanes> Div<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: &'b Matrix<T>) -> Matrix<T> {
        expect_op(Matrix::div(self, rhs), "division")
    }
}

impl<'a, T: Element + Lanes> Div<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Matrix<T> {
        self.div_scalar(rhs)
    }
}

impl<'a, T: Element + Lanes> AddAssign<&'a Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &'a Matrix<T>) {
        expect_op(self.add_assign_mat(rhs), "addition");
    }
}

impl<T: Element + Lanes> AddAssign<T> for Matrix<T> {
    fn add_assign(&mut self, rhs: T) {
        self.add_assign_scalar(rhs);
    }
}

impl<'a, T: Element + Lanes> SubAssign<&'a Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &'a Matrix<T>) {
        expect_op(self.sub_assign_mat(rhs), "subtraction");
    }
}

impl<T: Element + Lanes> SubAssign<T> for Matrix<T> {
    fn sub_assign(&mut self, rhs: T) {
        self.sub_assign_scalar(rhs);
    }
}

/// `*=` between matrices is elementwise, matching the named
/// [`Matrix::mul_assign_elem`].
impl<'a, T: Element + Lanes> MulAssign<&'a Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: &'a Matrix<T>) {
        expect_op(self.mul_assign_elem(rhs), "elementwise product");
    }
}

impl<T: Element + Lanes> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.mul_assign_scalar(rhs);
    }
}

impl<'a, T: Element + Lanes> DivAssign<&'a Matrix<T>> for Matrix<T> {
    fn div_assign(&mut self, rhs: &'a Matrix<T>) {
        expect_op(self.div_assign_mat(rhs), "division");
    }
}

impl<T: Element + Lanes> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        self.div_assign_scalar(rhs);
    }
}
