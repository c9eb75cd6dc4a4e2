//! Bounded naturals and their O(1) lookup tables.
//!
//! `Nat<V>` exists for any `i8`, but only `Nat<0>`..=`Nat<63>` are
//! `Natural`. The successor table maps [0, 63] onto [1, 64] and the
//! predecessor table maps [0, 63] onto [-1, 62]; `Nat<64>` and `Nat<-1>` are
//! sentinels that no arithmetic operator accepts. The leap tables do the same
//! eight units at a time and drive the large rounds of `Add` and `Sub`.

use crate::primitives::{Bool, False, Label, True};

/// A natural number candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nat<const V: i8>;

mod sealed {
    pub trait Sealed {}
}

/// Natural number in the supported range [0, 63].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a natural in [0, 63]",
    label = "out of range",
    note = "Naturals are capped at 63; results outside [0, 63] are rejected at compile time."
)]
pub trait Natural: sealed::Sealed + NatNext + NatPrev + NatIsZero + NatIsOne + 'static {
    const VALUE: u8;

    /// Canonical decimal label, e.g. `label!("22")`.
    type Label: Label;
}

/// Successor table.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no successor entry",
    note = "The successor table covers Nat<0>..=Nat<63>."
)]
pub trait NatNext {
    type Out;
}

/// Predecessor table. `Nat<0>` maps to the `Nat<-1>` sentinel.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no predecessor entry",
    note = "The predecessor table covers Nat<0>..=Nat<63>."
)]
pub trait NatPrev {
    type Out;
}

/// `True` only for `Nat<0>`.
pub trait NatIsZero {
    type Out: Bool;
}

/// `True` only for `Nat<1>`.
pub trait NatIsOne {
    type Out: Bool;
}

/// Eight-unit successor and predecessor tables. Entries past either end of
/// the range are sentinels like `Nat<64>` and `Nat<-1>`.
pub trait NatLeap {
    type Up;
    type Down;
}

/// How far one `Add`/`Sub` round moves when `Self` is the second operand.
pub trait NatStride {
    /// `Halt`, `Unit` or `Leap`.
    type Step;
}

/// Second operand is zero: the round returns the first operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Halt;

/// Second operand below `LEAP`: move one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unit;

/// Second operand of at least `LEAP`: move `LEAP` units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Leap;

macros::nat_table!(63, leap = 8);

/// Largest supported natural.
pub const MAX: u8 = 63;

/// Distance covered by a `Leap` round.
pub const LEAP: u8 = 8;

// =============================================================================
// Aliases _0.._63
// =============================================================================

macro_rules! nat_aliases {
    ($($n:literal)*) => {
        $crate::paste::paste! {
            $(
                #[doc = concat!("The natural `", stringify!($n), "`.")]
                pub type [<_ $n>] = Nat<$n>;
            )*
        }
    };
}

nat_aliases!(
    0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15
    16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31
    32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47
    48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63
);

pub type Next<N> = <N as NatNext>::Out;
pub type Prev<N> = <N as NatPrev>::Out;
pub type IsZero<N> = <N as NatIsZero>::Out;
pub type IsOne<N> = <N as NatIsOne>::Out;
pub type NumberToString<N> = <N as Natural>::Label;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_edges() {
        assert_eq!(<_0 as Natural>::VALUE, 0);
        assert_eq!(<_63 as Natural>::VALUE, MAX);
        assert_eq!(<Next<_62> as Natural>::VALUE, 63);
        assert_eq!(<Prev<_1> as Natural>::VALUE, 0);
    }

    #[test]
    fn test_sentinels() {
        let _: Prev<_0> = Nat::<-1>;
        let _: Next<_63> = Nat::<64>;
    }

    #[test]
    fn test_classification() {
        assert!(<IsZero<_0> as Bool>::VALUE);
        assert!(!<IsZero<_1> as Bool>::VALUE);
        assert!(<IsOne<_1> as Bool>::VALUE);
        assert!(!<IsOne<_0> as Bool>::VALUE);
        assert!(!<IsOne<_63> as Bool>::VALUE);
    }

    #[test]
    fn test_leap_table() {
        assert_eq!(<<_0 as NatLeap>::Up as Natural>::VALUE, LEAP);
        assert_eq!(<<_63 as NatLeap>::Down as Natural>::VALUE, MAX - LEAP);
        let _: <_60 as NatLeap>::Up = Nat::<68>;
        let _: <_3 as NatLeap>::Down = Nat::<-5>;
    }

    #[test]
    fn test_stride() {
        let _: <_0 as NatStride>::Step = Halt;
        let _: <_1 as NatStride>::Step = Unit;
        let _: <_7 as NatStride>::Step = Unit;
        let _: <_8 as NatStride>::Step = Leap;
        let _: <_63 as NatStride>::Step = Leap;
    }
}
