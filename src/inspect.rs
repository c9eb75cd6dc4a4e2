//! Runtime inspection of label sets and records
//!
//! Allows iterating over the labels of a set, or the keys of a record, for
//! debugging and logging.

use alloc::string::String;
use crate::primitives::{HCons, HNil, Label, Str, Nibbles};
use crate::record::Field;

/// Runtime inspection of label sets and records.
pub trait Inspect {
    /// Calls `f` for each label of the set (or key of the record), in list order.
    fn inspect<F: FnMut(&str)>(f: F);

    /// All labels, in list order.
    fn names() -> alloc::vec::Vec<String> {
        let mut names = alloc::vec::Vec::new();
        Self::inspect(|n| names.push(String::from(n)));
        names
    }
}

/// One list element: a label, or a record field reporting its key.
pub trait InspectItem {
    fn name() -> String;
}

impl<N: Nibbles> InspectItem for Str<N> {
    fn name() -> String {
        <Self as Label>::name()
    }
}

impl<K: Label, V> InspectItem for Field<K, V> {
    fn name() -> String {
        K::name()
    }
}

impl Inspect for HNil {
    fn inspect<F: FnMut(&str)>(_f: F) {}
}

impl<H: InspectItem, T: Inspect> Inspect for HCons<H, T> {
    fn inspect<F: FnMut(&str)>(mut f: F) {
        f(&H::name());
        T::inspect(f);
    }
}
