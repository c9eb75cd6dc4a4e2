#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: label names and set inspection as `String`

//! # type-algebra
//!
//! **Compile-time type algebra for Rust.**
//!
//! Booleans, bounded naturals, string label sets, record shapes and
//! fixed-length sequences, all evaluated by the trait solver. Nothing runs at
//! runtime; every operator is a trait with an `Out` associated type and a
//! type alias naming its result.
//!
//! ## Architecture
//!
//! There are no native type-level conditionals or loops, so every branch is a
//! lookup: `Bool::If` is a two-entry table (one impl per boolean), label
//! membership is a table keyed by label with a catch-all `False`, and numeric
//! successor/predecessor are per-value impls. Recursion is a trait impl that
//! refers back to itself at a smaller argument, stopped by a `True`/`False`
//! dispatch trait.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (If/Not/And/Or/Xor/Nand), Nibble (X0-XF), Label, HList    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Sets, Naturals, Sequences                               |
//! |  - Member, Diff, IsNever, StringEqual, DropString, Union          |
//! |  - Nat<0..63>, Next, Prev, IsZero, Add, Sub, NumberEqual          |
//! |  - Length, UnionizeTuple                                          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Records                                                 |
//! |  - Keys, SharedKeys, DiffKeys, AllKeys, Omit, Intersect           |
//! |  - Merge, Overwrite, CombineObjects, DeepPartial                  |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use type_algebra::prelude::*;
//!
//! type Obj1 = record! { w: u8, x: String, y: bool };
//! type Obj2 = record! { y: i64, z: char };
//!
//! assert_true!(StringEqual<SharedKeys<Obj1, Obj2>, labels!["y"]>);
//! assert_true!(StringEqual<DiffKeys<Obj1, Obj2>, labels!["w", "x"]>);
//! assert_type_eq!(Get<Merge<Obj1, Obj2>, label!("y")>, i64);
//!
//! assert_type_eq!(Add<_22, _8>, _30);
//! ```
//!
//! ## Errors
//!
//! All failures are compile errors at the use site: an out-of-range natural,
//! a non-record passed to a record operator, a missing key in `Get`. The
//! traits involved carry `#[diagnostic::on_unimplemented]` messages naming
//! the operator and the accepted inputs.

// Allow `::type_algebra` to work inside the crate itself
extern crate self as type_algebra;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the natural alias macros
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Sets, Naturals, Sequences
// =============================================================================
pub mod set;
pub mod num;
pub mod seq;

// =============================================================================
// Layer 2: Records
// =============================================================================
pub mod record;

// =============================================================================
// Tooling
// =============================================================================
#[cfg(feature = "alloc")]
pub mod inspect;
pub mod assert;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Bool, True, False, If, Not, And, Or, Xor, Nand};
pub use primitives::label::{Label, Str};
pub use primitives::list::{HNil, HCons};

// Re-export proc-macros
pub use macros::{label, labels, record};

/// Common items for the type algebra.
pub mod prelude {
    pub use crate::primitives::bool::{
        Bool, True, False, If, Not, And, Or, Xor, Nand,
        BoolNot, BoolAnd, BoolOr, BoolXor, BoolNand,
    };
    pub use crate::primitives::label::{Label, LabelEq};
    pub use crate::primitives::list::{HNil, HCons};
    pub use crate::set::{
        Member, Contains, Diff, IsNever, StringEqual, DropString, Union, IntersectSet, Subset,
    };
    pub use crate::num::*;
    pub use crate::seq::{SeqLength, SeqUnion, Length, UnionizeTuple, UnionizeLabels};
    pub use crate::record::{
        Record, Field, Both, Shape,
        Keys, SharedKeys, DiffKeys, AllKeys, Pick, Omit, Get,
        Intersect, Merge, Overwrite, CombineObjects, DeepPartial,
    };
    pub use crate::assert::{SameAs, assert_type_eq};
    #[cfg(feature = "alloc")]
    pub use crate::inspect::Inspect;
    pub use macros::{label, labels, record};
    // Note: assert_type_eq!, assert_true!, assert_false!, hlist!, impl_leaf! are
    // #[macro_export] so they're at crate root
}
