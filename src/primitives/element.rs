//! Element marker trait for storable numeric types.
//!
//! ## Purpose
//!
//! This module defines [`Element`], the bound every matrix element type must
//! satisfy. It collects the numeric capabilities the engine relies on and
//! pins down which types may live inside the zero-initialized aligned
//! storage.
//!
//! ## Invariants
//!
//! * `Element` is implemented exactly for the primitive numeric types; for
//!   all of them an all-zero-bytes bit pattern is the value `0`/`0.0`.
//!   Zero-initialized allocation depends on this, which is why the trait is
//!   not open for blanket implementation.

use core::fmt::Debug;
use num_traits::{Num, NumCast};

/// Marker trait for types that can be stored in a matrix.
///
/// Implemented for the primitive integer and floating-point types. An
/// all-zero byte pattern must be a valid value of the type (it is the
/// additive identity for every implementor).
pub trait Element: Num + NumCast + Copy + PartialOrd + Debug + Send + Sync + 'static {}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(impl Element for $t {})*
    };
}

impl_element!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);
