//! # `lazy_slot` - Deferred In-Place Construction
//!
//! Reserve inline storage for a value now, construct it later. A [`LazySlot<T>`]
//! is a correctly sized and aligned region for one `T` plus an occupancy flag.
//! It lets an aggregate declare a member without paying for a default
//! construction, and without requiring `T: Default` at all.
//!
//! ## Lifecycle
//!
//! ```text
//!   new() ──► empty ──init*()──► occupied ──drop──► gone
//!               ▲                    │
//!               └── take() / reset() ┘
//! ```
//!
//! - An empty slot never constructs or drops a `T`.
//! - An occupied slot drops its value exactly once.
//! - `take`, `reset` and `into_inner` are the only ways back to empty; there is
//!   no automatic re-initialization.
//!
//! ## Safety Guarantees
//!
//! - **No double ownership**: `LazySlot` is not `Clone`/`Copy`. Moving a slot moves
//!   the value and its occupancy together.
//! - **No uninitialized reads from safe code**: safe accessors check occupancy and
//!   panic on an empty slot. The unchecked accessors are `unsafe` and verified by
//!   `debug_assert!` only.
//! - **Double initialization** is a programming error caught by `debug_assert!`.
//!   Release builds skip the check; the earlier value is then leaked, never dropped
//!   twice.
//! - **Failed construction** (`try_init_with` returning `Err`, or a panicking
//!   constructor) leaves the slot empty.
//!
//! ## Concurrency
//!
//! `LazySlot` has no internal synchronization. Mutation requires `&mut self`, so the
//! borrow checker already enforces a single writer; sharing across threads follows
//! the usual `Send`/`Sync` rules of `T`.
//!
//! ## Features
//!
//! - `tracing`: emit `TRACE` events for init, take, reset and drop.
//! - `proptest`: `Arbitrary` impl for `LazySlot<T>`.
//!
//! ## Example
//!
//! ```rust
//! use lazy_slot::LazySlot;
//!
//! struct Session {
//!     user: String,
//!     admin: bool,
//! }
//!
//! impl From<(&str, bool)> for Session {
//!     fn from((user, admin): (&str, bool)) -> Self {
//!         Session { user: user.to_owned(), admin }
//!     }
//! }
//!
//! let mut session = LazySlot::<Session>::new();
//! assert!(session.try_get().is_none());
//!
//! session.init_from(("ada", true));
//! assert_eq!(session.user, "ada");
//! assert!(session.admin);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod slot;
mod trace;

pub use slot::LazySlot;

// Compile-time assertions for memory layout.
const _: () = {
    use core::mem;

    // Storage is inline and aligned for `T`.
    assert!(mem::align_of::<LazySlot<u64>>() == mem::align_of::<u64>());
    assert!(mem::align_of::<LazySlot<u128>>() == mem::align_of::<u128>());
    assert!(mem::align_of::<LazySlot<[u8; 3]>>() == mem::align_of::<[u8; 3]>());

    // The occupancy flag costs at most one alignment unit of `T`.
    assert!(mem::size_of::<LazySlot<u64>>() <= mem::size_of::<u64>() + mem::align_of::<u64>());
    assert!(mem::size_of::<LazySlot<[u8; 3]>>() == 4);
    assert!(mem::size_of::<LazySlot<()>>() == 1);
    assert!(
        mem::size_of::<LazySlot<String>>()
            <= mem::size_of::<String>() + mem::align_of::<String>()
    );
};
