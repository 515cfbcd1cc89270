//! `LazySlot` — inline storage for a value constructed on request.

mod ops;
mod storage;


use core::{
    fmt,
    ops::{Deref, DerefMut},
};

use crate::trace::trace_lifecycle;
use storage::Storage;

const EMPTY_ACCESS: &str = "LazySlot accessed before initialization";
const DOUBLE_INIT: &str = "LazySlot initialized while already holding a value";

/// Inline, correctly aligned storage for one `T` whose construction is deferred.
///
/// A slot starts empty. Exactly one `init*` call moves it to the occupied state,
/// after which the value can be read and mutated any number of times. The value is
/// dropped exactly once: when the slot is dropped, or earlier through [`take`] or
/// [`reset`]. An empty slot never constructs nor drops a `T`, so `T` needs no
/// `Default` impl and no placeholder value.
///
/// ## Contract
/// - Initializing an occupied slot is a programming error, caught by
///   `debug_assert!`. With debug assertions off the old value is overwritten
///   without being dropped (leaked, never double-dropped).
/// - Reading an empty slot through a safe accessor panics in every build.
///   [`get_unchecked`] is the unchecked path and is `unsafe`.
///
/// ## Ownership
/// `LazySlot` is neither `Clone` nor `Copy`: duplicating it would duplicate
/// ownership of the contained value.
///
/// ```compile_fail
/// use lazy_slot::LazySlot;
///
/// let mut a = LazySlot::<String>::new();
/// a.init(String::from("owned"));
/// let b = LazySlot::clone(&a);
/// ```
///
/// ```compile_fail
/// use lazy_slot::LazySlot;
///
/// fn duplicate<T: Clone>(value: &T) -> T {
///     value.clone()
/// }
///
/// let slot = LazySlot::<String>::new();
/// let _ = duplicate(&slot);
/// ```
///
/// Method-call syntax goes through `Deref`, so `slot.clone()` compiles when
/// `T: Clone` and returns a clone of the contained `T`, not a second slot.
///
/// ```
/// use lazy_slot::LazySlot;
///
/// let mut slot = LazySlot::<String>::new();
/// slot.init(String::from("owned"));
/// let copy: String = slot.clone();
/// assert_eq!(copy, "owned");
/// ```
///
/// ```compile_fail
/// use lazy_slot::LazySlot;
///
/// fn duplicate<T: Copy>(value: T) -> (T, T) {
///     (value, value)
/// }
///
/// let slot: LazySlot<u32> = LazySlot::new();
/// let _ = duplicate(slot);
/// ```
///
/// Moving a slot is allowed and transfers the value along with its occupancy; the
/// moved-from binding can no longer be used. [`take`] and [`into_inner`] move the
/// value itself out and leave the slot empty.
///
/// [`take`]: LazySlot::take
/// [`reset`]: LazySlot::reset
/// [`into_inner`]: LazySlot::into_inner
/// [`get_unchecked`]: LazySlot::get_unchecked
///
/// # Example
/// ```
/// use lazy_slot::LazySlot;
///
/// struct Connection {
///     host: String,
///     port: u16,
/// }
///
/// struct Client {
///     conn: LazySlot<Connection>,
/// }
///
/// let mut client = Client { conn: LazySlot::new() };
/// assert!(!client.conn.is_initialized());
///
/// client.conn.init(Connection { host: "localhost".into(), port: 5432 });
/// assert_eq!(client.conn.port, 5432);
/// assert_eq!(client.conn.get().host, "localhost");
/// ```
#[repr(transparent)]
pub struct LazySlot<T> {
    storage: Storage<T>,
}

impl<T> LazySlot<T> {
    /// Creates an empty slot. No `T` is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: Storage::empty(),
        }
    }

    /// Returns `true` if the slot currently holds a value.
    #[inline(always)]
    pub const fn is_initialized(&self) -> bool {
        self.storage.occupied()
    }

    /// Moves `value` into the slot and returns a reference to it.
    ///
    /// # Panics
    /// In debug builds, panics if the slot is already occupied.
    #[inline]
    pub fn init(&mut self, value: T) -> &mut T {
        debug_assert!(!self.storage.occupied(), "{}", DOUBLE_INIT);
        trace_lifecycle!("initialized", T);
        self.storage.write(value)
    }

    /// Constructs the value with `f` and stores it.
    ///
    /// If `f` panics the slot stays empty.
    ///
    /// # Panics
    /// In debug builds, panics if the slot is already occupied.
    #[inline]
    pub fn init_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        debug_assert!(!self.storage.occupied(), "{}", DOUBLE_INIT);
        let value = f();
        self.init(value)
    }

    /// Constructs the value from an argument pack, typically a tuple of
    /// constructor arguments, via `T: From<A>`.
    ///
    /// ```
    /// use lazy_slot::LazySlot;
    ///
    /// struct Endpoint {
    ///     host: String,
    ///     port: u16,
    /// }
    ///
    /// impl From<(&str, u16)> for Endpoint {
    ///     fn from((host, port): (&str, u16)) -> Self {
    ///         Self { host: host.to_owned(), port }
    ///     }
    /// }
    ///
    /// let mut slot = LazySlot::<Endpoint>::new();
    /// slot.init_from(("example.org", 443));
    /// assert_eq!(slot.host, "example.org");
    /// assert_eq!(slot.port, 443);
    /// ```
    ///
    /// # Panics
    /// In debug builds, panics if the slot is already occupied.
    #[inline]
    pub fn init_from<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.init_with(|| T::from(args))
    }

    /// Constructs the value with `T::default()`.
    ///
    /// # Panics
    /// In debug builds, panics if the slot is already occupied.
    #[inline]
    pub fn init_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.init_with(T::default)
    }

    /// Constructs the value with a fallible constructor.
    ///
    /// On `Err` the error is returned unchanged and the slot stays empty; nothing
    /// is dropped because nothing was constructed.
    ///
    /// # Panics
    /// In debug builds, panics if the slot is already occupied.
    pub fn try_init_with<F, E>(&mut self, f: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        debug_assert!(!self.storage.occupied(), "{}", DOUBLE_INIT);
        let value = f()?;
        Ok(self.init(value))
    }

    /// Returns a shared reference to the value.
    ///
    /// # Panics
    /// Panics if the slot is empty.
    #[inline]
    #[track_caller]
    pub fn get(&self) -> &T {
        match self.try_get() {
            Some(value) => value,
            None => panic!("{}", EMPTY_ACCESS),
        }
    }

    /// Returns an exclusive reference to the value.
    ///
    /// # Panics
    /// Panics if the slot is empty.
    #[inline]
    #[track_caller]
    pub fn get_mut(&mut self) -> &mut T {
        match self.try_get_mut() {
            Some(value) => value,
            None => panic!("{}", EMPTY_ACCESS),
        }
    }

    /// Returns a shared reference to the value, or `None` if the slot is empty.
    #[inline]
    pub fn try_get(&self) -> Option<&T> {
        if self.storage.occupied() {
            // SAFETY: occupied.
            Some(unsafe { self.storage.assume_init_ref() })
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the value, or `None` if the slot is empty.
    #[inline]
    pub fn try_get_mut(&mut self) -> Option<&mut T> {
        if self.storage.occupied() {
            // SAFETY: occupied.
            Some(unsafe { self.storage.assume_init_mut() })
        } else {
            None
        }
    }

    /// Returns a shared reference to the value without checking occupancy.
    ///
    /// # Safety
    /// The slot must be initialized. Only debug builds verify this.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.storage.occupied(), "{}", EMPTY_ACCESS);
        // SAFETY: caller guarantees the slot is occupied.
        unsafe { self.storage.assume_init_ref() }
    }

    /// Returns an exclusive reference to the value without checking occupancy.
    ///
    /// # Safety
    /// The slot must be initialized. Only debug builds verify this.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.storage.occupied(), "{}", EMPTY_ACCESS);
        // SAFETY: caller guarantees the slot is occupied.
        unsafe { self.storage.assume_init_mut() }
    }

    /// Returns the address of the value's storage.
    ///
    /// The storage address is stable for as long as the slot is not moved.
    /// Reading through the pointer is only valid while the slot is occupied.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        debug_assert!(self.storage.occupied(), "{}", EMPTY_ACCESS);
        self.storage.as_ptr()
    }

    /// Returns the mutable address of the value's storage.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        debug_assert!(self.storage.occupied(), "{}", EMPTY_ACCESS);
        self.storage.as_mut_ptr()
    }

    /// Forwards to the value's conversion into `bool`.
    ///
    /// # Panics
    /// Panics if the slot is empty.
    #[inline]
    #[track_caller]
    pub fn as_bool(&self) -> bool
    where
        for<'a> bool: From<&'a T>,
    {
        bool::from(self.get())
    }

    /// Moves the value out, leaving the slot empty and ready for a new `init`.
    pub fn take(&mut self) -> Option<T> {
        let value = self.storage.take();
        if value.is_some() {
            trace_lifecycle!("taken", T);
        }
        value
    }

    /// Drops the value, if any, and leaves the slot empty.
    ///
    /// Occupancy is cleared before the destructor runs, so a panicking destructor
    /// still leaves the slot empty.
    pub fn reset(&mut self) {
        if self.storage.clear() {
            trace_lifecycle!("reset", T);
        }
    }

    /// Consumes the slot and returns the value, if any.
    #[inline]
    pub fn into_inner(mut self) -> Option<T> {
        self.take()
    }
}

impl<T> Drop for LazySlot<T> {
    fn drop(&mut self) {
        if self.storage.clear() {
            trace_lifecycle!("dropped", T);
        }
    }
}

impl<T> Default for LazySlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for LazySlot<T> {
    fn from(value: T) -> Self {
        let mut slot = Self::new();
        slot.init(value);
        slot
    }
}

impl<T> From<Option<T>> for LazySlot<T> {
    fn from(value: Option<T>) -> Self {
        let mut slot = Self::new();
        if let Some(value) = value {
            slot.init(value);
        }
        slot
    }
}

impl<T> Deref for LazySlot<T> {
    type Target = T;

    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T> DerefMut for LazySlot<T> {
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for LazySlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_get() {
            Some(value) => f.debug_tuple("LazySlot").field(value).finish(),
            None => f.write_str("LazySlot(<uninit>)"),
        }
    }
}

#[cfg(feature = "proptest")]
impl<T> proptest::arbitrary::Arbitrary for LazySlot<T>
where
    T: proptest::arbitrary::Arbitrary + 'static,
{
    type Parameters = <Option<T> as proptest::arbitrary::Arbitrary>::Parameters;
    type Strategy = proptest::strategy::Map<
        <Option<T> as proptest::arbitrary::Arbitrary>::Strategy,
        fn(Option<T>) -> Self,
    >;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        use proptest::strategy::Strategy;
        proptest::arbitrary::any_with::<Option<T>>(args)
            .prop_map(<Self as From<Option<T>>>::from as fn(Option<T>) -> Self)
    }
}
