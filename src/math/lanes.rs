//! Vectorized slice kernels with scalar fallbacks.
//!
//! ## Purpose
//!
//! This module provides [`Lanes`], the vector engine seam of the crate.
//! Every elementwise operation of the matrix engine bottoms out in one of
//! these slice kernels, so the container code never branches on lane width
//! itself.
//!
//! ## Design notes
//!
//! * **Trait dispatch**: `Lanes` carries default scalar loop bodies for
//!   every `Element` type; `f32` and `f64` override them with `wide`
//!   vectors (`f32x8`, `f64x4`) processing aligned-stride data in chunks
//!   with scalar tails.
//! * **In-place kernels**: Binary kernels mutate `dst`, which lets the
//!   matrix layer build the owning-result forms as clone-then-assign and
//!   the compound-assignment forms directly.
//! * **Reduction order**: `dot` accumulates lane-wise and finishes with a
//!   horizontal reduction, so float results may differ from naive
//!   left-to-right summation in the last bit.
//!
//! ## Invariants
//!
//! * Kernels touch `min(dst.len(), src.len())` elements and never read or
//!   write beyond either slice.

use wide::{f32x8, f64x4};

use crate::primitives::element::Element;

/// Slice arithmetic kernels, overridable per element type.
///
/// The default bodies are plain scalar loops; `f32` and `f64` specialize
/// them with explicit SIMD. Integer types keep the defaults, which the
/// compiler is free to auto-vectorize.
pub trait Lanes: Element {
    /// `dst[i] += src[i]`
    fn vadd(dst: &mut [Self], src: &[Self]) {
        for (d, s) in dst.iter_mut().zip(src.iter()) {
            *d = *d + *s;
        }
    }

    /// `dst[i] -= src[i]`
    fn vsub(dst: &mut [Self], src: &[Self]) {
        for (d, s) in dst.iter_mut().zip(src.iter()) {
            *d = *d - *s;
        }
    }

    /// `dst[i] *= src[i]` (elementwise)
    fn vmul(dst: &mut [Self], src: &[Self]) {
        for (d, s) in dst.iter_mut().zip(src.iter()) {
            *d = *d * *s;
        }
    }

    /// `dst[i] /= src[i]` (elementwise; zero divisors follow the numeric
    /// type's own behavior)
    fn vdiv(dst: &mut [Self], src: &[Self]) {
        for (d, s) in dst.iter_mut().zip(src.iter()) {
            *d = *d / *s;
        }
    }

    /// `dst[i] += s`
    fn vadd_scalar(dst: &mut [Self], s: Self) {
        for d in dst.iter_mut() {
            *d = *d + s;
        }
    }

    /// `dst[i] -= s`
    fn vsub_scalar(dst: &mut [Self], s: Self) {
        for d in dst.iter_mut() {
            *d = *d - s;
        }
    }

    /// `dst[i] *= s`
    fn vmul_scalar(dst: &mut [Self], s: Self) {
        for d in dst.iter_mut() {
            *d = *d * s;
        }
    }

    /// `dst[i] /= s`
    fn vdiv_scalar(dst: &mut [Self], s: Self) {
        for d in dst.iter_mut() {
            *d = *d / s;
        }
    }

    /// `dst[i] = s - dst[i]` (commuted subtraction)
    fn vrsub_scalar(dst: &mut [Self], s: Self) {
        for d in dst.iter_mut() {
            *d = s - *d;
        }
    }

    /// `dst[i] = s / dst[i]` (commuted division)
    fn vrdiv_scalar(dst: &mut [Self], s: Self) {
        for d in dst.iter_mut() {
            *d = s / *d;
        }
    }

    /// Dot product over `min(a.len(), b.len())` elements.
    fn dot(a: &[Self], b: &[Self]) -> Self {
        let mut acc = Self::zero();
        for (x, y) in a.iter().zip(b.iter()) {
            acc = acc + *x * *y;
        }
        acc
    }
}

macro_rules! impl_lanes_scalar {
    ($($t:ty),* $(,)?) => {
        $(impl Lanes for $t {})*
    };
}

impl_lanes_scalar!(u8, i8, u16, i16, u32, i32, u64, i64);

macro_rules! impl_lanes_simd {
    ($elem:ty, $vec:ident, $lanes:expr) => {
        impl Lanes for $elem {
            fn vadd(dst: &mut [Self], src: &[Self]) {
                let n = dst.len().min(src.len());
                let mut i = 0;
                while i + $lanes <= n {
                    let a = $vec::new(dst[i..i + $lanes].try_into().unwrap());
                    let b = $vec::new(src[i..i + $lanes].try_into().unwrap());
                    dst[i..i + $lanes].copy_from_slice(&(a + b).to_array());
                    i += $lanes;
                }
                // Tail
                while i < n {
                    dst[i] += src[i];
                    i += 1;
                }
            }

            fn vsub(dst: &mut [Self], src: &[Self]) {
                let n = dst.len().min(src.len());
                let mut i = 0;
                while i + $lanes <= n {
                    let a = $vec::new(dst[i..i + $lanes].try_into().unwrap());
                    let b = $vec::new(src[i..i + $lanes].try_into().unwrap());
                    dst[i..i + $lanes].copy_from_slice(&(a - b).to_array());
                    i += $lanes;
                }
                while i < n {
                    dst[i] -= src[i];
                    i += 1;
                }
            }

            fn vmul(dst: &mut [Self], src: &[Self]) {
                let n = dst.len().min(src.len());
                let mut i = 0;
                while i + $lanes <= n {
                    let a = $vec::new(dst[i..i + $lanes].try_into().unwrap());
                    let b = $vec::new(src[i..i + $lanes].try_into().unwrap());
                    dst[i..i + $lanes].copy_from_slice(&(a * b).to_array());
                    i += $lanes;
                }
                while i < n {
                    dst[i] *= src[i];
                    i += 1;
                }
            }

            fn vdiv(dst: &mut [Self], src: &[Self]) {
                let n = dst.len().min(src.len());
                let mut i = 0;
                while i + $lanes <= n {
                    let a = $vec::new(dst[i..i + $lanes].try_into().unwrap());
                    let b = $vec::new(src[i..i + $lanes].try_into().unwrap());
                    dst[i..i + $lanes].copy_from_slice(&(a / b).to_array());
                    i += $lanes;
                }
                while i < n {
                    dst[i] /= src[i];
                    i += 1;
                }
            }

            fn vadd_scalar(dst: &mut [Self], s: Self) {
                let sv = $vec::splat(s);
                let n = dst.len();
                let mut i = 0;
                while i + $lanes <= n {
                    let a = $vec::new(dst[i..i + $lanes].try_into().unwrap());
                    dst[i..i + $lanes].copy_from_slice(&(a + sv).to_array());
                    i += $lanes;
                }
                while i < n {
                    dst[i] += s;
                    i += 1;
                }
            }

            fn vsub_scalar(dst: &mut [Self], s: Self) {
                let sv = $vec::splat(s);
                let n = dst.len();
                let mut i = 0;
                while i + $lanes <= n {
                    let a = $vec::new(dst[i..i + $lanes].try_into().unwrap());
                    dst[i..i + $lanes].copy_from_slice(&(a - sv).to_array());
                    i += $lanes;
                }
                while i < n {
                    dst[i] -= s;
                    i += 1;
                }
            }

            fn vmul_scalar(dst: &mut [Self], s: Self) {
                let sv = $vec::splat(s);
                let n = dst.len();
                let mut i = 0;
                while i + $lanes <= n {
                    let a = $vec::new(dst[i..i + $lanes].try_into().unwrap());
                    dst[i..i + $lanes].copy_from_slice(&(a * sv).to_array());
                    i += $lanes;
                }
                while i < n {
                    dst[i] *= s;
                    i += 1;
                }
            }

            fn vdiv_scalar(dst: &mut [Self], s: Self) {
                let sv = $vec::splat(s);
                let n = dst.len();
                let mut i = 0;
                while i + $lanes <= n {
                    let a = $vec::new(dst[i..i + $lanes].try_into().unwrap());
                    dst[i..i + $lanes].copy_from_slice(&(a / sv).to_array());
                    i += $lanes;
                }
                while i < n {
                    dst[i] /= s;
                    i += 1;
                }
            }

            fn vrsub_scalar(dst: &mut [Self], s: Self) {
                let sv = $vec::splat(s);
                let n = dst.len();
                let mut i = 0;
                while i + $lanes <= n {
                    let a = $vec::new(dst[i..i + $lanes].try_into().unwrap());
                    dst[i..i + $lanes].copy_from_slice(&(sv - a).to_array());
                    i += $lanes;
                }
                while i < n {
                    dst[i] = s - dst[i];
                    i += 1;
                }
            }

            fn vrdiv_scalar(dst: &mut [Self], s: Self) {
                let sv = $vec::splat(s);
                let n = dst.len();
                let mut i = 0;
                while i + $lanes <= n {
                    let a = $vec::new(dst[i..i + $lanes].try_into().unwrap());
                    dst[i..i + $lanes].copy_from_slice(&(sv / a).to_array());
                    i += $lanes;
                }
                while i < n {
                    dst[i] = s / dst[i];
                    i += 1;
                }
            }

            fn dot(a: &[Self], b: &[Self]) -> Self {
                let n = a.len().min(b.len());
                let mut i = 0;
                let mut acc = $vec::splat(0.0);
                while i + $lanes <= n {
                    let x = $vec::new(a[i..i + $lanes].try_into().unwrap());
                    let y = $vec::new(b[i..i + $lanes].try_into().unwrap());
                    acc += x * y;
                    i += $lanes;
                }
                let mut sum = acc.reduce_add();
                // Tail
                while i < n {
                    sum += a[i] * b[i];
                    i += 1;
                }
                sum
            }
        }
    };
}

impl_lanes_simd!(f32, f32x8, 8);
impl_lanes_simd!(f64, f64x4, 4);
