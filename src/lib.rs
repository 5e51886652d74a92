//! # boxmat: dense matrix kernel with a separable box filter
//!
//! A minimal dense-matrix numeric engine paired with a separable box (mean)
//! filter whose cost per pixel is independent of the window size.
//!
//! ## What is in the box?
//!
//! Two components, the second built on the first:
//!
//! * **Dense matrix engine**: [`Matrix<T>`](prelude::Matrix) owns
//!   row-major, alignment-padded storage for any primitive numeric element
//!   type and exposes elementwise arithmetic (with scalar-broadcast and
//!   commuted forms), the matrix product, transposition, and element-type
//!   conversion. Hot loops run through explicit SIMD lane kernels
//!   (`wide`) for `f32`/`f64` with scalar fallbacks everywhere else.
//! * **Box filter**: [`box_filter`](prelude::box_filter) computes the
//!   windowed mean via two 1-D moving-sum passes with reflected border
//!   extension, accumulating in a wider output type.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxmat_rs::prelude::*;
//!
//! // Build two 2x3 matrices and combine them.
//! let a = Matrix::<f32>::from_buffer(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], BufferLayout::Packed)?;
//! let b = a.mul_scalar(2.0);
//! let c = a.add(&b)?;
//! assert_eq!(*c.at(1, 2), 18.0);
//!
//! // Transpose and multiply: (2x3) * (3x2) -> 2x2.
//! let prod = a.matmul(&a.transpose())?;
//! assert_eq!(prod.shape(), (2, 2));
//! # Ok::<(), MatrixError>(())
//! ```
//!
//! Filtering an 8-bit image into a float mean:
//!
//! ```rust
//! use boxmat_rs::prelude::*;
//!
//! let img = Matrix::<u8>::from_buffer(4, 4, &[10; 16], BufferLayout::Packed)?;
//! let mut mean = Matrix::<f32>::new();
//! box_filter(&img, &mut mean, 3)?;
//! // A constant image stays constant under a mean filter.
//! assert!((*mean.at(0, 0) - 10.0).abs() < 1e-3);
//! # Ok::<(), MatrixError>(())
//! ```
//!
//! ## Error handling
//!
//! Fallible operations return `Result<_, MatrixError>`; the operator sugar
//! (`+`, `-`, `*`, `/` and compound forms) delegates to the same methods
//! and panics on shape mismatch. Allocation failure is fatal by default;
//! `try_` constructors surface it as a typed error instead.
//!
//! ```rust
//! use boxmat_rs::prelude::*;
//!
//! let a = Matrix::<i32>::with_shape(2, 2);
//! let b = Matrix::<i32>::with_shape(3, 2);
//! assert!(matches!(a.add(&b), Err(MatrixError::ShapeMismatch { .. })));
//! # Ok::<(), MatrixError>(())
//! ```
//!
//! ## no_std
//!
//! Disable default features to drop the standard library dependency
//! (an allocator is still required):
//!
//! ```toml
//! [dependencies]
//! boxmat-rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors, element marker, aligned storage, validation.
mod primitives;

// Layer 2: Math - lane kernels and reflection tables.
mod math;

// Layer 3: Matrix - the dense container and its arithmetic engine.
mod matrix;

// Layer 4: Filter - the separable box filter.
mod filter;

// High-level API: the `BoxFilter` configuration type and re-exports.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access to
/// the most commonly used types:
///
/// ```
/// use boxmat_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{scalar_add, scalar_div, scalar_mul, scalar_sub, to_type, BoxFilter};
    pub use crate::filter::boxfilter::box_filter;
    pub use crate::math::lanes::Lanes;
    pub use crate::matrix::dense::{BufferLayout, Matrix};
    pub use crate::primitives::element::Element;
    pub use crate::primitives::errors::MatrixError;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math kernels.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal matrix engine.
    pub mod matrix {
        pub use crate::matrix::*;
    }
    /// Internal filter implementation.
    pub mod filter {
        pub use crate::filter::*;
    }
    /// Internal API surface.
    pub mod api {
        pub use crate::api::*;
    }
}
