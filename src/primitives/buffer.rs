//! Aligned, zero-initialized owning buffer.
//!
//! ## Purpose
//!
//! This module provides [`AlignedBuffer`], the single-ownership storage
//! handle behind every matrix. Construction, cloning, and destruction are
//! the only places allocation and deallocation occur, so a buffer is freed
//! exactly once and moving a matrix simply transfers the handle.
//!
//! ## Design notes
//!
//! * **Alignment**: Every allocation is aligned to [`LANE_ALIGN`] bytes so
//!   lane-width loads starting at any row boundary stay inside one aligned
//!   block.
//! * **Fallible core, aborting boundary**: [`AlignedBuffer::try_zeroed`] is
//!   the recoverable allocation path; [`AlignedBuffer::zeroed`] is the
//!   boundary that chooses not to recover and aborts via
//!   `handle_alloc_error`.
//! * **Zero-initialized**: Fresh storage reads as `0`/`0.0` for every
//!   [`Element`](crate::primitives::element::Element) type.
//!
//! ## Invariants
//!
//! * `len == 0` implies a dangling (never dereferenced-for-write) pointer
//!   and no allocation.
//! * The layout used for deallocation is recomputed from `len` and is
//!   identical to the one used at allocation time.

#[cfg(not(feature = "std"))]
use alloc::alloc::{alloc_zeroed, dealloc, handle_alloc_error, Layout};
#[cfg(feature = "std")]
use std::alloc::{alloc_zeroed, dealloc, handle_alloc_error, Layout};

use core::fmt;
use core::mem::size_of;
use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;
use core::slice;

use crate::primitives::element::Element;
use crate::primitives::errors::MatrixError;

/// Allocation and row-stride alignment in bytes.
///
/// Matches the widest vector register the lane kernels use (256 bits), so a
/// stride rounded to this value keeps every row start lane-aligned.
pub const LANE_ALIGN: usize = 32;

/// An exclusively owned, `LANE_ALIGN`-aligned, zero-initialized buffer of
/// `len` elements.
pub struct AlignedBuffer<T: Element> {
    ptr: NonNull<T>,
    len: usize,
}

impl<T: Element> AlignedBuffer<T> {
    /// Create an empty buffer without allocating.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
        }
    }

    /// Allocate a zero-initialized buffer of `len` elements.
    ///
    /// Returns [`MatrixError::AllocationFailed`] when the allocator refuses
    /// the request or the byte size overflows.
    pub fn try_zeroed(len: usize) -> Result<Self, MatrixError> {
        if len == 0 {
            return Ok(Self::empty());
        }
        let layout = Self::layout(len)?;
        // SAFETY: `layout` has non-zero size (len > 0 and T is a primitive
        // numeric type).
        let raw = unsafe { alloc_zeroed(layout) };
        match NonNull::new(raw as *mut T) {
            Some(ptr) => Ok(Self { ptr, len }),
            None => Err(MatrixError::AllocationFailed {
                bytes: layout.size(),
            }),
        }
    }

    /// Allocate a zero-initialized buffer of `len` elements, aborting the
    /// process on allocation failure.
    ///
    /// This is the non-recovering boundary documented by the matrix
    /// constructors; callers that want a typed error use
    /// [`try_zeroed`](Self::try_zeroed).
    pub fn zeroed(len: usize) -> Self {
        match Self::try_zeroed(len) {
            Ok(buf) => buf,
            Err(_) => match Self::layout(len) {
                Ok(layout) => handle_alloc_error(layout),
                Err(_) => panic!("aligned buffer of {} elements overflows usize", len),
            },
        }
    }

    /// Number of elements in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reset every element to zero.
    pub fn set_zero(&mut self) {
        if self.len > 0 {
            // SAFETY: the region is exactly the allocation; zero bytes are a
            // valid value for every `Element`.
            unsafe { core::ptr::write_bytes(self.ptr.as_ptr(), 0, self.len) };
        }
    }

    fn layout(len: usize) -> Result<Layout, MatrixError> {
        let bytes = len
            .checked_mul(size_of::<T>())
            .ok_or(MatrixError::AllocationFailed { bytes: usize::MAX })?;
        Layout::from_size_align(bytes, LANE_ALIGN)
            .map_err(|_| MatrixError::AllocationFailed { bytes })
    }
}

impl<T: Element> Deref for AlignedBuffer<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        // SAFETY: `ptr` points to `len` initialized elements (or is a
        // dangling-but-aligned pointer when len == 0, which is valid for a
        // zero-length slice).
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Element> DerefMut for AlignedBuffer<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: as above, plus exclusive ownership of the allocation.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Element> Clone for AlignedBuffer<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::zeroed(self.len);
        copy.copy_from_slice(self);
        copy
    }
}

impl<T: Element> Drop for AlignedBuffer<T> {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }
        // The layout succeeded at allocation time, so it succeeds here too.
        if let Ok(layout) = Self::layout(self.len) {
            // SAFETY: the pointer was produced by `alloc_zeroed` with this
            // exact layout and has not been freed before.
            unsafe { dealloc(self.ptr.as_ptr() as *mut u8, layout) };
        }
    }
}

impl<T: Element> Default for AlignedBuffer<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Element> fmt::Debug for AlignedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("len", &self.len)
            .finish()
    }
}

// SAFETY: the buffer owns its allocation exclusively; `Element` types are
// plain numeric data.
unsafe impl<T: Element> Send for AlignedBuffer<T> {}
// SAFETY: shared access is read-only through `Deref`.
unsafe impl<T: Element> Sync for AlignedBuffer<T> {}
