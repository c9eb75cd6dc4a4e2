//! Set operations on label sets: Diff, IsNever, StringEqual, DropString,
//! Union, IntersectSet, Subset, Dedup.

use crate::primitives::{And, Bool, Concat, False, HCons, HNil, If, True};
use super::member::Member;

// =============================================================================
// Diff
// =============================================================================

/// Set difference: labels of `Self` that are not in `Other`.
///
/// Each label is looked up in `Other`'s membership table. A hit resolves to
/// the rest of the list (the label is removed), a miss keeps the label.
pub trait SetDiff<Other> {
    type Out;
}

impl<U> SetDiff<U> for HNil {
    type Out = HNil;
}

impl<H, T, U> SetDiff<U> for HCons<H, T>
where
    U: Member<H>,
    T: SetDiff<U>,
{
    type Out = If<<U as Member<H>>::Out, <T as SetDiff<U>>::Out, HCons<H, <T as SetDiff<U>>::Out>>;
}

// =============================================================================
// IsNever
// =============================================================================

/// `True` iff the set is empty.
pub trait SetEmpty {
    type Out: Bool;
}

impl SetEmpty for HNil {
    type Out = True;
}

impl<H, T> SetEmpty for HCons<H, T> {
    type Out = False;
}

// =============================================================================
// Subset / equality
// =============================================================================

/// `True` iff every label of `Self` is in `Other`.
pub trait SetSubset<Other> {
    type Out: Bool;
}

impl<T, U> SetSubset<U> for T
where
    T: SetDiff<U>,
    <T as SetDiff<U>>::Out: SetEmpty,
{
    type Out = <<T as SetDiff<U>>::Out as SetEmpty>::Out;
}

/// Set equality by mutual containment.
pub trait SetEq<Other> {
    type Out: Bool;
}

impl<T, U> SetEq<U> for T
where
    T: SetSubset<U>,
    U: SetSubset<T>,
{
    type Out = And<<T as SetSubset<U>>::Out, <U as SetSubset<T>>::Out>;
}

// =============================================================================
// DropString
// =============================================================================

/// `Diff` restricted to a subset `Other` of `Self`.
#[diagnostic::on_unimplemented(
    message = "cannot drop `{Other}` from `{Self}`",
    label = "the labels to drop must all be present in this set",
    note = "Use `Diff` to remove labels that may be absent."
)]
pub trait SetDrop<Other> {
    type Out;
}

impl<T, U> SetDrop<U> for T
where
    U: SetSubset<T, Out = True>,
    T: SetDiff<U>,
{
    type Out = <T as SetDiff<U>>::Out;
}

// =============================================================================
// Union / intersection
// =============================================================================

/// Duplicate-free union: `Self` followed by the labels of `Other` not in `Self`.
pub trait SetUnion<Other> {
    type Out;
}

impl<T, U> SetUnion<U> for T
where
    U: SetDiff<T>,
    T: Concat<<U as SetDiff<T>>::Out>,
{
    type Out = <T as Concat<<U as SetDiff<T>>::Out>>::Out;
}

/// Labels of `Self` that are also in `Other`: `Self - (Self - Other)`.
pub trait SetIntersect<Other> {
    type Out;
}

impl<T, U> SetIntersect<U> for T
where
    T: SetDiff<U>,
    T: SetDiff<<T as SetDiff<U>>::Out>,
{
    type Out = <T as SetDiff<<T as SetDiff<U>>::Out>>::Out;
}

/// Remove repeated labels, keeping the last occurrence.
pub trait Dedup {
    type Out;
}

impl Dedup for HNil {
    type Out = HNil;
}

impl<H, T> Dedup for HCons<H, T>
where
    T: Member<H> + Dedup,
{
    type Out = If<<T as Member<H>>::Out, <T as Dedup>::Out, HCons<H, <T as Dedup>::Out>>;
}

// =============================================================================
// Aliases
// =============================================================================

pub type Diff<T, U> = <T as SetDiff<U>>::Out;
pub type IsNever<S> = <S as SetEmpty>::Out;
pub type Subset<T, U> = <T as SetSubset<U>>::Out;
pub type StringEqual<T, U> = <T as SetEq<U>>::Out;
pub type DropString<T, U> = <T as SetDrop<U>>::Out;
pub type Union<T, U> = <T as SetUnion<U>>::Out;
pub type IntersectSet<T, U> = <T as SetIntersect<U>>::Out;
