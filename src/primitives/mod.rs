//! # Layer 0: Primitives
//!
//! Basic building blocks for the algebra:
//! - `bool.rs`: Type-level boolean logic (True/False).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF).
//! - `label.rs`: String labels encoded as nibble lists.
//! - `list.rs`: HNil/HCons lists backing sets, records and sequences.

pub mod bool;
pub mod nibble;
pub mod label;
pub mod list;

// Re-export key types at this level
pub use bool::{
    Bool, True, False, If, Not, And, Or, Xor, Nand, Lift,
    BoolNot, BoolAnd, BoolOr, BoolXor, BoolNand, SelectBool,
};
pub use nibble::{Nibble, NibbleEq, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};
pub use label::{Label, LabelEq, Str, NCons, NNil, Nibbles, NibblesEq};
pub use list::{HNil, HCons, Concat};
