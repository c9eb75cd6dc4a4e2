//! Compile-time type equality assertions.
//!
//! ```ignore
//! use type_algebra::prelude::*;
//!
//! assert_type_eq!(Add<_22, _8>, _30);
//! ```

/// Implemented only for `T` itself.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not the same type as `{T}`",
    label = "types differ"
)]
pub trait SameAs<T: ?Sized> {}

impl<T: ?Sized> SameAs<T> for T {}

/// Compiles iff `A` and `B` are the same type.
#[inline(always)]
pub const fn assert_type_eq<A, B>()
where
    A: ?Sized + SameAs<B>,
    B: ?Sized,
{
}

/// Assert that two types are identical at compile time.
/// Usage: `assert_type_eq!(Computed, Expected);`
#[macro_export]
macro_rules! assert_type_eq {
    ($a:ty, $b:ty $(,)?) => {
        const _: () = $crate::assert::assert_type_eq::<$a, $b>();
    };
}

/// Assert that a boolean operator resolves to `True` at compile time.
/// Usage: `assert_true!(StringEqual<A, B>);`
#[macro_export]
macro_rules! assert_true {
    ($b:ty $(,)?) => {
        $crate::assert_type_eq!($b, $crate::primitives::True);
    };
}

/// Assert that a boolean operator resolves to `False` at compile time.
#[macro_export]
macro_rules! assert_false {
    ($b:ty $(,)?) => {
        $crate::assert_type_eq!($b, $crate::primitives::False);
    };
}
