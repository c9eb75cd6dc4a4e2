//! Type-level nibble system (4-bit values X0-XF).
//!
//! Labels are stored as lists of nibbles, two per UTF-8 byte. Nibbles are
//! comparable on stable Rust through an explicit equality table, which
//! `const u8` generics are not.

use super::bool::{False, True, Bool};

// =============================================================================
// Nibble iteration macros
// =============================================================================

/// Iterate over all 16 (Nibble, value) pairs.
macro_rules! for_each_nibble {
    ($mac:ident) => {
        $mac!(X0, 0x0); $mac!(X1, 0x1); $mac!(X2, 0x2); $mac!(X3, 0x3);
        $mac!(X4, 0x4); $mac!(X5, 0x5); $mac!(X6, 0x6); $mac!(X7, 0x7);
        $mac!(X8, 0x8); $mac!(X9, 0x9); $mac!(XA, 0xA); $mac!(XB, 0xB);
        $mac!(XC, 0xC); $mac!(XD, 0xD); $mac!(XE, 0xE); $mac!(XF, 0xF);
    };
}

/// Generate impls for all distinct pairs (A, B) and (B, A) where A != B.
macro_rules! for_distinct_pairs {
    ($mac:ident) => {
        for_distinct_pairs!(@recurse $mac, [X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF]);
    };
    (@recurse $mac:ident, [$head:ident, $($tail:ident),*]) => {
        $(
            $mac!($head, $tail);
            $mac!($tail, $head);
        )*
        for_distinct_pairs!(@recurse $mac, [$($tail),*]);
    };
    (@recurse $mac:ident, [$last:ident]) => {};
}

// =============================================================================
// Nibble trait and types
// =============================================================================

/// Type-level nibble (4-bit value, 0..15)
pub trait Nibble: 'static {
    const VALUE: u8;
}

// Define structs X0..XF and implement Nibble
macro_rules! define_nibble {
    ($n:ident, $v:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $n;
        impl Nibble for $n {
            const VALUE: u8 = $v;
        }
    };
}
for_each_nibble!(define_nibble);

// =============================================================================
// Nibble equality
// =============================================================================

/// Type-level nibble equality
pub trait NibbleEq<Other: Nibble>: Nibble {
    type Out: Bool;
}

// Self-equality: X == X → True
macro_rules! impl_eq_self {
    ($n:ident, $v:literal) => { impl NibbleEq<$n> for $n { type Out = True; } };
}
for_each_nibble!(impl_eq_self);

// Cross-inequality: X != Y → False
macro_rules! impl_neq { ($a:ident, $b:ident) => { impl NibbleEq<$b> for $a { type Out = False; } }; }
for_distinct_pairs!(impl_neq);
