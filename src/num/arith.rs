//! Recursive arithmetic over bounded naturals.
//!
//! `Add` and `Sub` move units between the operands through the tables until
//! the second operand reaches zero. Each round is picked by the second
//! operand's stride: `Leap` moves `LEAP` units through the leap tables,
//! `Unit` moves one through the successor/predecessor tables and `Halt`
//! returns the first operand. A round is a dispatch trait implemented
//! separately per stride, so no further round is resolved once `Halt` is
//! reached, and the deepest sum in range takes 14 rounds instead of 63.

use crate::primitives::{Bool, HCons, HNil};
use crate::set::SetEq;
use super::table::{Halt, Leap, NatLeap, NatNext, NatPrev, NatStride, Natural, Unit};

// =============================================================================
// Add
// =============================================================================

/// `Self + Other`, O(Other / 8) table lookups.
#[diagnostic::on_unimplemented(
    message = "cannot add `{Other}` to `{Self}` within [0, 63]",
    label = "sum leaves the natural range",
    note = "Both operands and the result must be naturals in [0, 63]."
)]
pub trait NatAdd<Other>: Natural {
    type Out: Natural;
}

impl<A, B> NatAdd<B> for A
where
    A: Natural,
    B: Natural + NatStride,
    <B as NatStride>::Step: AddDispatch<A, B>,
{
    type Out = <<B as NatStride>::Step as AddDispatch<A, B>>::Out;
}

/// One round of `Add`, picked by the stride of `B`.
pub trait AddDispatch<A, B> {
    type Out: Natural;
}

impl<A: Natural, B> AddDispatch<A, B> for Halt {
    type Out = A;
}

impl<A, B> AddDispatch<A, B> for Unit
where
    A: NatNext,
    B: NatPrev,
    <A as NatNext>::Out: NatAdd<<B as NatPrev>::Out>,
{
    type Out = <<A as NatNext>::Out as NatAdd<<B as NatPrev>::Out>>::Out;
}

impl<A, B> AddDispatch<A, B> for Leap
where
    A: NatLeap,
    B: NatLeap,
    <A as NatLeap>::Up: NatAdd<<B as NatLeap>::Down>,
{
    type Out = <<A as NatLeap>::Up as NatAdd<<B as NatLeap>::Down>>::Out;
}

// =============================================================================
// Sub
// =============================================================================

/// `Self - Other`, O(Other / 8) table lookups.
#[diagnostic::on_unimplemented(
    message = "cannot subtract `{Other}` from `{Self}` within [0, 63]",
    label = "difference leaves the natural range",
    note = "Both operands and the result must be naturals in [0, 63]."
)]
pub trait NatSub<Other>: Natural {
    type Out: Natural;
}

impl<A, B> NatSub<B> for A
where
    A: Natural,
    B: Natural + NatStride,
    <B as NatStride>::Step: SubDispatch<A, B>,
{
    type Out = <<B as NatStride>::Step as SubDispatch<A, B>>::Out;
}

/// One round of `Sub`, picked by the stride of `B`.
pub trait SubDispatch<A, B> {
    type Out: Natural;
}

impl<A: Natural, B> SubDispatch<A, B> for Halt {
    type Out = A;
}

impl<A, B> SubDispatch<A, B> for Unit
where
    A: NatPrev,
    B: NatPrev,
    <A as NatPrev>::Out: NatSub<<B as NatPrev>::Out>,
{
    type Out = <<A as NatPrev>::Out as NatSub<<B as NatPrev>::Out>>::Out;
}

impl<A, B> SubDispatch<A, B> for Leap
where
    A: NatLeap,
    B: NatLeap,
    <A as NatLeap>::Down: NatSub<<B as NatLeap>::Down>,
{
    type Out = <<A as NatLeap>::Down as NatSub<<B as NatLeap>::Down>>::Out;
}

// =============================================================================
// NumberEqual
// =============================================================================

/// Equality by canonical label: both naturals are rendered with
/// `NumberToString` and compared as singleton label sets.
pub trait NatEq<Other>: Natural {
    type Out: Bool;
}

impl<A, B> NatEq<B> for A
where
    A: Natural,
    B: Natural,
    HCons<A::Label, HNil>: SetEq<HCons<B::Label, HNil>>,
{
    type Out = <HCons<A::Label, HNil> as SetEq<HCons<B::Label, HNil>>>::Out;
}

pub type Add<A, B> = <A as NatAdd<B>>::Out;
pub type Sub<A, B> = <A as NatSub<B>>::Out;
pub type NumberEqual<A, B> = <A as NatEq<B>>::Out;
