//! Centralized unsafe operations on the slot's inline storage.
//!
//! `LazySlot` keeps its value as a `MaybeUninit<T>` next to an occupancy flag.
//! Every read, write, move-out and drop of that storage goes through the small
//! surface here, so the unsafe code can be audited in one place.
//!
//! ## Core invariant
//! `value` holds a live `T` *exactly when* `occupied` is `true`:
//! - `occupied` is set only after a write has completed, and
//! - `occupied` is cleared *before* the value is moved out or dropped.
//!
//! Clearing first means a panicking `Drop for T` can never lead to a second drop.

use core::{mem::MaybeUninit, ptr};

/// Layout note: store `value` first; keep `occupied` in tail padding.
#[repr(C)]
pub(super) struct Storage<T> {
    value: MaybeUninit<T>,
    occupied: bool,
}

impl<T> Storage<T> {
    #[inline(always)]
    pub(super) const fn empty() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            occupied: false,
        }
    }

    #[inline(always)]
    pub(super) const fn occupied(&self) -> bool {
        self.occupied
    }

    /// Writes `value` and marks the storage occupied.
    ///
    /// Does not drop a value that may already be present; callers decide what an
    /// overwrite means.
    #[inline(always)]
    pub(super) fn write(&mut self, value: T) -> &mut T {
        let slot = self.value.write(value);
        self.occupied = true;
        slot
    }

    /// Interprets the storage as `&T`.
    ///
    /// # Safety
    /// - `self.occupied()` must be `true`.
    #[inline(always)]
    pub(super) unsafe fn assume_init_ref(&self) -> &T {
        // SAFETY: caller asserts the storage is occupied.
        unsafe { self.value.assume_init_ref() }
    }

    /// Interprets the storage as `&mut T`.
    ///
    /// # Safety
    /// - `self.occupied()` must be `true`.
    #[inline(always)]
    pub(super) unsafe fn assume_init_mut(&mut self) -> &mut T {
        // SAFETY: caller asserts the storage is occupied; `&mut self` is exclusive.
        unsafe { self.value.assume_init_mut() }
    }

    #[inline(always)]
    pub(super) fn as_ptr(&self) -> *const T {
        self.value.as_ptr()
    }

    #[inline(always)]
    pub(super) fn as_mut_ptr(&mut self) -> *mut T {
        self.value.as_mut_ptr()
    }

    /// Moves the value out, leaving the storage empty.
    #[inline]
    pub(super) fn take(&mut self) -> Option<T> {
        if !self.occupied {
            return None;
        }
        self.occupied = false;
        // SAFETY: the flag was set, so the value is live; clearing it first hands
        // ownership of the bytes to the returned `T`.
        Some(unsafe { ptr::read(self.value.as_ptr()) })
    }

    /// Drops the value in place if present, leaving the storage empty.
    ///
    /// Returns `true` if a value was dropped.
    #[inline]
    pub(super) fn clear(&mut self) -> bool {
        if !self.occupied {
            return false;
        }
        self.occupied = false;
        // SAFETY: the flag was set, so the value is live and dropped exactly once.
        unsafe { ptr::drop_in_place(self.value.as_mut_ptr()) };
        true
    }
}
