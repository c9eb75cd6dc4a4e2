//! Set membership.
//!
//! A label set is looked up like a table: every member label maps to
//! `True`, and the empty tail answers `False` for any label at all. The
//! catch-all makes membership total over the label domain.

use crate::primitives::{Bool, False, HCons, HNil, LabelEq, Or};

/// Query: does the set contain label `L`?
///
/// Returns `True` or `False`.
pub trait Member<L> {
    type Out: Bool;
}

// Catch-all: no label is a member of the empty set
impl<L> Member<L> for HNil {
    type Out = False;
}

impl<L, H, T> Member<L> for HCons<H, T>
where
    H: LabelEq<L>,
    T: Member<L>,
{
    type Out = Or<<H as LabelEq<L>>::Out, <T as Member<L>>::Out>;
}

/// `True` if `L` is a member of `S`.
pub type Contains<S, L> = <S as Member<L>>::Out;
