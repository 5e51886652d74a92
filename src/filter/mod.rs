//! Layer 4: Filter
//!
//! # Purpose
//!
//! This layer provides the separable box (mean) filter built on the matrix
//! engine: a sliding-window average over a 2-D signal computed in time
//! independent of the window size, with reflected boundary extension.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Filter ← You are here
//!   ↓
//! Layer 3: Matrix
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// The separable moving-sum box filter.
pub mod boxfilter;
