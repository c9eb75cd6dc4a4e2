//! Key sets and projections: Keys, Pick, Get and the key-set aliases.

use crate::primitives::{False, HCons, HNil, If, LabelEq, True};
use crate::set::{Diff, IntersectSet, Member, Union};
use super::Field;

// =============================================================================
// Keys
// =============================================================================

/// The label set of a record's fields.
#[diagnostic::on_unimplemented(
    message = "cannot take the keys of `{Self}`",
    label = "expected a record",
    note = "Build records with `record! {{ key: Type, ... }}`."
)]
pub trait RecordKeys {
    type Out;
}

impl RecordKeys for HNil {
    type Out = HNil;
}

impl<K, V, T> RecordKeys for HCons<Field<K, V>, T>
where
    T: RecordKeys,
{
    type Out = HCons<K, <T as RecordKeys>::Out>;
}

// =============================================================================
// Pick
// =============================================================================

/// Keep the fields whose key is a member of `Ks`. Keys of `Ks` the record
/// does not have select nothing.
pub trait RecordPick<Ks> {
    type Out;
}

impl<Ks> RecordPick<Ks> for HNil {
    type Out = HNil;
}

impl<Ks, K, V, T> RecordPick<Ks> for HCons<Field<K, V>, T>
where
    Ks: Member<K>,
    T: RecordPick<Ks>,
{
    type Out = If<
        <Ks as Member<K>>::Out,
        HCons<Field<K, V>, <T as RecordPick<Ks>>::Out>,
        <T as RecordPick<Ks>>::Out,
    >;
}

// =============================================================================
// Get
// =============================================================================

/// Value type of field `K`.
#[diagnostic::on_unimplemented(
    message = "record `{Self}` has no field `{K}`",
    label = "missing field",
    note = "Check the key against `Keys<...>` of this record."
)]
pub trait RecordGet<K> {
    type Out;
}

impl<K, FK, V, T> RecordGet<K> for HCons<Field<FK, V>, T>
where
    FK: LabelEq<K>,
    <FK as LabelEq<K>>::Out: GetDispatch<V, T, K>,
{
    type Out = <<FK as LabelEq<K>>::Out as GetDispatch<V, T, K>>::Out;
}

/// Stops at the matching field or continues into the tail.
pub trait GetDispatch<V, Tail, K> {
    type Out;
}

impl<V, Tail, K> GetDispatch<V, Tail, K> for True {
    type Out = V;
}

impl<V, Tail, K> GetDispatch<V, Tail, K> for False
where
    Tail: RecordGet<K>,
{
    type Out = <Tail as RecordGet<K>>::Out;
}

// =============================================================================
// Aliases
// =============================================================================

pub type Keys<T> = <T as RecordKeys>::Out;
pub type SharedKeys<T, U> = IntersectSet<Keys<T>, Keys<U>>;
pub type DiffKeys<T, U> = Diff<Keys<T>, Keys<U>>;
pub type AllKeys<T, U> = Union<Keys<T>, Keys<U>>;
pub type Pick<T, K> = <T as RecordPick<K>>::Out;
pub type Omit<T, K> = Pick<T, Diff<Keys<T>, K>>;
pub type Get<T, K> = <T as RecordGet<K>>::Out;
