//! Structural combination: CombineObjects, Intersect, Merge, Overwrite.

use crate::primitives::{Concat, False, HCons, HNil, True};
use crate::set::{Diff, Member, SetDiff};
use super::keys::{DiffKeys, Keys, Omit, RecordGet, RecordKeys, RecordPick, SharedKeys};
use super::{Both, Field};

/// Flatten two records into one.
///
/// Fields of `Self` come first. A key present on both sides holds
/// `Both<Left, Right>`; keys only present on `Other` follow.
pub trait RecordCombine<Other> {
    type Out;
}

impl<T, U> RecordCombine<U> for T
where
    T: CombineLeft<U> + RecordKeys,
    U: RecordKeys,
    Keys<U>: SetDiff<Keys<T>>,
    U: RecordPick<Diff<Keys<U>, Keys<T>>>,
    <T as CombineLeft<U>>::Out: Concat<Omit<U, Keys<T>>>,
{
    type Out = <<T as CombineLeft<U>>::Out as Concat<Omit<U, Keys<T>>>>::Out;
}

/// Fields of `Self`, each merged with its counterpart on `Other` if any.
pub trait CombineLeft<Other> {
    type Out;
}

impl<U> CombineLeft<U> for HNil {
    type Out = HNil;
}

impl<K, V, T, U> CombineLeft<U> for HCons<Field<K, V>, T>
where
    U: RecordKeys,
    Keys<U>: Member<K>,
    <Keys<U> as Member<K>>::Out: CombineField<K, V, U>,
    T: CombineLeft<U>,
{
    type Out = HCons<
        <<Keys<U> as Member<K>>::Out as CombineField<K, V, U>>::Out,
        <T as CombineLeft<U>>::Out,
    >;
}

/// Shared key: intersect the value types. Unshared key: keep the field.
pub trait CombineField<K, V, Other> {
    type Out;
}

impl<K, V, U> CombineField<K, V, U> for True
where
    U: RecordGet<K>,
{
    type Out = Field<K, Both<V, <U as RecordGet<K>>::Out>>;
}

impl<K, V, U> CombineField<K, V, U> for False {
    type Out = Field<K, V>;
}

pub type CombineObjects<T, U> = <T as RecordCombine<U>>::Out;

/// `U`'s fields whose key also exists on `T`, typed by `U`.
pub type Intersect<T, U> = Omit<U, DiffKeys<U, T>>;

/// Every key of both records; `U` wins each conflict.
pub type Merge<T, U> = CombineObjects<Omit<T, SharedKeys<T, U>>, U>;

/// `T` with the values of its keys replaced from `U`. Keys only `U` has are
/// never introduced.
pub type Overwrite<T, U> = Merge<T, Intersect<T, U>>;
