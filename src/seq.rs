//! # Layer 1: Sequence Introspection
//!
//! Fixed-length sequences are tuples (arity 0..=12) or `HCons` lists.
//! Tuples carry their length as an O(1) table entry; lists count with the
//! successor table.
//!
//! `UnionizeTuple` turns the element types into a type-level list (union).
//! Arbitrary Rust types cannot be compared on stable, so elements keep their
//! positions and repeats; label elements can be deduplicated with
//! `UnionizeLabels`.

use crate::num::{Nat, NatNext};
use crate::primitives::{HCons, HNil};
use crate::set::Dedup;

/// Length of a fixed-length sequence, as a `Nat`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a fixed-length sequence",
    note = "Sequences are tuples of up to 12 elements or `hlist![...]` lists."
)]
pub trait SeqLength {
    type Out;
}

/// Element types of a sequence, as a list.
pub trait SeqUnion {
    type Out;
}

// =============================================================================
// Tuples
// =============================================================================

macro_rules! tuple_list {
    () => { HNil };
    ($head:ident $(, $rest:ident)*) => { HCons<$head, tuple_list!($($rest),*)> };
}

macro_rules! impl_tuple_seq {
    ($($len:literal => ($($T:ident),*);)*) => {
        $(
            impl<$($T),*> SeqLength for ($($T,)*) {
                type Out = Nat<$len>;
            }

            impl<$($T),*> SeqUnion for ($($T,)*) {
                type Out = tuple_list!($($T),*);
            }
        )*
    };
}

impl_tuple_seq! {
    0 => ();
    1 => (A);
    2 => (A, B);
    3 => (A, B, C);
    4 => (A, B, C, D);
    5 => (A, B, C, D, E);
    6 => (A, B, C, D, E, F);
    7 => (A, B, C, D, E, F, G);
    8 => (A, B, C, D, E, F, G, H);
    9 => (A, B, C, D, E, F, G, H, I);
    10 => (A, B, C, D, E, F, G, H, I, J);
    11 => (A, B, C, D, E, F, G, H, I, J, K);
    12 => (A, B, C, D, E, F, G, H, I, J, K, L);
}

// =============================================================================
// Lists
// =============================================================================

impl SeqLength for HNil {
    type Out = Nat<0>;
}

impl<H, T> SeqLength for HCons<H, T>
where
    T: SeqLength,
    <T as SeqLength>::Out: NatNext,
{
    type Out = <<T as SeqLength>::Out as NatNext>::Out;
}

impl SeqUnion for HNil {
    type Out = HNil;
}

impl<H, T> SeqUnion for HCons<H, T> {
    type Out = Self;
}

pub type Length<T> = <T as SeqLength>::Out;
pub type UnionizeTuple<T> = <T as SeqUnion>::Out;
pub type UnionizeLabels<T> = <<T as SeqUnion>::Out as Dedup>::Out;
