//! Deep optionality.
//!
//! `Shape` tells records apart from leaf values: a record maps every field
//! to `Option<DeepPartial<V>>`, a leaf is left as is (and then wrapped in
//! `Option` by the enclosing field). Without specialization a leaf has to
//! say so explicitly; common std types are covered here and user types opt
//! in with `impl_leaf!`.

use crate::primitives::{HCons, HNil, Str};
use super::Field;

/// Record-or-leaf classification driving `DeepPartial`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no `DeepPartial` shape",
    label = "neither a record nor a registered leaf type",
    note = "Register leaf types with `type_algebra::impl_leaf!(MyType);`."
)]
pub trait Shape {
    type DeepPartial;
}

impl Shape for HNil {
    type DeepPartial = HNil;
}

impl<K, V, T> Shape for HCons<Field<K, V>, T>
where
    V: Shape,
    T: Shape,
{
    type DeepPartial = HCons<Field<K, Option<<V as Shape>::DeepPartial>>, <T as Shape>::DeepPartial>;
}

/// Mark types as leaves for `DeepPartial`.
///
/// Usage: `impl_leaf!(MyType, OtherType);`
#[macro_export]
macro_rules! impl_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::record::Shape for $ty {
                type DeepPartial = $ty;
            }
        )*
    };
}

impl_leaf!(
    (), bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    &'static str,
);

#[cfg(feature = "alloc")]
impl_leaf!(alloc::string::String);

#[cfg(feature = "alloc")]
impl<T> Shape for alloc::vec::Vec<T> {
    type DeepPartial = Self;
}

#[cfg(feature = "alloc")]
impl<T: ?Sized> Shape for alloc::boxed::Box<T> {
    type DeepPartial = Self;
}

// Already optional: keep one `Option` and descend into the payload
impl<T: Shape> Shape for Option<T> {
    type DeepPartial = Option<<T as Shape>::DeepPartial>;
}

impl<N> Shape for Str<N> {
    type DeepPartial = Self;
}

pub type DeepPartial<T> = <T as Shape>::DeepPartial;
