//! Feature-gated lifecycle logging.
//!
//! With the `tracing` feature enabled, slot lifecycle transitions are emitted as
//! `TRACE` events under the `lazy_slot` target. Without it the macro expands to
//! nothing and the crate carries no logging dependency.

#[cfg(feature = "tracing")]
macro_rules! trace_lifecycle {
    ($event:literal, $ty:ty) => {
        ::tracing::trace!(
            target: "lazy_slot",
            value_type = ::core::any::type_name::<$ty>(),
            $event
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_lifecycle {
    ($event:literal, $ty:ty) => {};
}

pub(crate) use trace_lifecycle;
