//! Operator forwarding for `LazySlot`.
//!
//! Every operator reads the contained value(s) through [`LazySlot::get`] and
//! delegates to the value's own operator, so an empty operand panics. Binary
//! operators accept another slot or a bare `&T` on the right-hand side and are
//! implemented on references, so neither operand is consumed.

use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

use super::LazySlot;

impl<T: PartialEq> PartialEq for LazySlot<T> {
    #[track_caller]
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: PartialEq> PartialEq<T> for LazySlot<T> {
    #[track_caller]
    fn eq(&self, other: &T) -> bool {
        self.get() == other
    }
}

impl<T: Eq> Eq for LazySlot<T> {}

impl<T: PartialOrd> PartialOrd for LazySlot<T> {
    #[track_caller]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(other.get())
    }
}

impl<T: PartialOrd> PartialOrd<T> for LazySlot<T> {
    #[track_caller]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.get().partial_cmp(other)
    }
}

impl<T: Ord> Ord for LazySlot<T> {
    #[track_caller]
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(other.get())
    }
}

macro_rules! forward_binop {
    ($($op:ident :: $method:ident),* $(,)?) => {$(
        impl<'a, T> $op<&'a LazySlot<T>> for &'a LazySlot<T>
        where
            &'a T: $op<&'a T>,
        {
            type Output = <&'a T as $op<&'a T>>::Output;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: &'a LazySlot<T>) -> Self::Output {
                $op::$method(self.get(), rhs.get())
            }
        }

        impl<'a, T> $op<&'a T> for &'a LazySlot<T>
        where
            &'a T: $op<&'a T>,
        {
            type Output = <&'a T as $op<&'a T>>::Output;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: &'a T) -> Self::Output {
                $op::$method(self.get(), rhs)
            }
        }
    )*};
}

forward_binop!(
    Add::add,
    Sub::sub,
    Mul::mul,
    Div::div,
    Rem::rem,
    Shl::shl,
    Shr::shr,
);

macro_rules! forward_unop {
    ($($op:ident :: $method:ident),* $(,)?) => {$(
        impl<'a, T> $op for &'a LazySlot<T>
        where
            &'a T: $op,
        {
            type Output = <&'a T as $op>::Output;

            #[inline]
            #[track_caller]
            fn $method(self) -> Self::Output {
                $op::$method(self.get())
            }
        }
    )*};
}

// `Not` covers both logical not (`bool`) and bitwise not (integers).
forward_unop!(Neg::neg, Not::not);
