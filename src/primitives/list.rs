//! Type-level lists.
//!
//! `HNil` / `HCons` carry every finite collection in the crate: label sets
//! (unions), records (lists of `Field`s) and variable-length sequences.

use core::marker::PhantomData;

/// Empty HList
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HNil;

/// HList cons cell
pub struct HCons<H, T>(PhantomData<(H, T)>);

/// Append `Other` after `Self`.
pub trait Concat<Other> {
    type Out;
}

impl<U> Concat<U> for HNil {
    type Out = U;
}

impl<H, T, U> Concat<U> for HCons<H, T>
where
    T: Concat<U>,
{
    type Out = HCons<H, <T as Concat<U>>::Out>;
}

/// Build an HList type from a list of types.
/// Usage: `hlist![A, B, C]`
#[macro_export]
macro_rules! hlist {
    () => { $crate::primitives::list::HNil };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::primitives::list::HCons<$head, $crate::hlist![$($rest),*]>
    };
}
