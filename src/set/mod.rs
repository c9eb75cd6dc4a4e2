//! # Layer 1: Label Sets
//!
//! Finite sets of string labels (unions of string literals), stored as
//! `HCons<Label, ...>` lists and built with `labels![...]`. Order carries
//! no meaning: equality is mutual containment, never structural identity.
//!
//! - **Membership**: `Member` / `Contains` (total: unknown labels are `False`).
//! - **Operations**: `Diff`, `IsNever`, `StringEqual`, `DropString`, `Union`,
//!   `IntersectSet`, `Subset`, `Dedup`.

pub mod member;
pub mod ops;

pub use member::{Member, Contains};
pub use ops::{
    SetDiff, SetEmpty, SetSubset, SetEq, SetDrop, SetUnion, SetIntersect, Dedup,
    Diff, IsNever, Subset, StringEqual, DropString, Union, IntersectSet,
};
