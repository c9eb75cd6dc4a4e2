//! # Layer 2: Record Shapes
//!
//! A record is a list of `Field<Key, Value>` with unique label keys,
//! built with `record! { w: u8, x: String }`. Key-set operators look only at
//! the labels; combination operators also carry the value types.
//!
//! - **Keys**: `Keys`, `SharedKeys`, `DiffKeys`, `AllKeys`.
//! - **Projection**: `Pick`, `Omit`, `Intersect`, `Get`.
//! - **Combination**: `CombineObjects`, `Merge`, `Overwrite`.
//! - **Transformation**: `DeepPartial`.
//!
//! ```ignore
//! type Obj1 = record! { w: u8, x: String, y: bool };
//! type Obj2 = record! { y: i64, z: char };
//!
//! type M = Merge<Obj1, Obj2>;         // { w: u8, x: String, y: i64, z: char }
//! type O = Overwrite<Obj1, Obj2>;     // { w: u8, x: String, y: i64 }
//! ```

use core::marker::PhantomData;
use crate::primitives::{HCons, HNil, Label};

pub mod keys;
pub mod combine;
pub mod partial;

pub use keys::{
    RecordKeys, RecordPick, RecordGet, GetDispatch,
    Keys, SharedKeys, DiffKeys, AllKeys, Pick, Omit, Get,
};
pub use combine::{
    RecordCombine, CombineLeft, CombineField, CombineObjects, Intersect, Merge, Overwrite,
};
pub use partial::{Shape, DeepPartial};

/// A record field: label `K` holding a value of type `V`.
pub struct Field<K, V>(PhantomData<(K, V)>);

/// Value type of a key present on both sides of `CombineObjects`.
pub struct Both<A, B>(PhantomData<(A, B)>);

/// A record shape and its field count.
///
/// Operators do not require this bound; a non-record is rejected by
/// `RecordKeys`, `RecordPick`, `RecordGet` or `Shape` where it is used.
pub trait Record: 'static {
    /// Number of fields.
    const LEN: usize;
}

impl Record for HNil {
    const LEN: usize = 0;
}

impl<K: Label, V: 'static, T: Record> Record for HCons<Field<K, V>, T> {
    const LEN: usize = T::LEN + 1;
}
