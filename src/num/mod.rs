//! # Layer 1: Bounded Naturals
//!
//! Naturals are the closed range [0, 63], one distinct type each
//! (`Nat<0>`..`Nat<63>`, aliased `_0`..`_63`). The bound is a hard ceiling:
//! unary recursion over a wider range makes trait resolution slow enough to
//! hurt every downstream crate.
//!
//! - **Tables**: `Next`, `Prev`, `IsZero`, `IsOne`, `NumberToString` (O(1)).
//! - **Arithmetic**: `Add`, `Sub` (O(second operand / 8)), `NumberEqual`.
//!
//! ## Recursion limit
//!
//! A round of `Add`/`Sub` moves up to `LEAP` units, so the second operand
//! 63 takes 14 rounds. Every operation in range resolves under the default
//! `recursion_limit` of 128.
//!
//! ```ignore
//! use type_algebra::num::*;
//!
//! type Thirty = Add<_22, _8>;
//! const _: () = assert!(<Thirty as Natural>::VALUE == 30);
//! ```

pub mod table;
pub mod arith;

pub use table::{
    Nat, Natural, NatNext, NatPrev, NatIsZero, NatIsOne, NatLeap, NatStride,
    Halt, Unit, Leap, MAX, LEAP,
    Next, Prev, IsZero, IsOne, NumberToString,
};
pub use table::{
    _0, _1, _2, _3, _4, _5, _6, _7, _8, _9, _10, _11, _12, _13, _14, _15,
    _16, _17, _18, _19, _20, _21, _22, _23, _24, _25, _26, _27, _28, _29, _30, _31,
    _32, _33, _34, _35, _36, _37, _38, _39, _40, _41, _42, _43, _44, _45, _46, _47,
    _48, _49, _50, _51, _52, _53, _54, _55, _56, _57, _58, _59, _60, _61, _62, _63,
};
pub use arith::{NatAdd, NatSub, NatEq, AddDispatch, SubDispatch, Add, Sub, NumberEqual};
