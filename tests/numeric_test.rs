//! Tests for bounded natural arithmetic.
//!
//! Runs under the default `recursion_limit`: the whole [0, 63] range must
//! resolve without raising it.

use type_algebra::prelude::*;
use type_algebra::{assert_false, assert_true, assert_type_eq};

// =============================================================================
// Tables
// =============================================================================

assert_type_eq!(Next<_0>, _1);
assert_type_eq!(Next<_62>, _63);
assert_type_eq!(Prev<_63>, _62);
assert_type_eq!(Prev<_1>, _0);

// Sentinels just outside the domain
assert_type_eq!(Prev<_0>, Nat<-1>);
assert_type_eq!(Next<_63>, Nat<64>);

assert_true!(IsZero<_0>);
assert_false!(IsZero<_1>);
assert_false!(IsZero<_63>);
assert_true!(IsOne<_1>);
assert_false!(IsOne<_0>);
assert_false!(IsOne<_2>);

macro_rules! for_each_natural {
    ($mac:ident) => {
        $mac!(0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15
              16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31
              32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47
              48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63);
    };
}

#[test]
fn test_number_to_string_round_trip() {
    macro_rules! check {
        ($($n:literal)*) => {
            $(
                let name = <NumberToString<Nat<$n>> as Label>::name();
                assert_eq!(name, stringify!($n));
                assert_eq!(name.parse::<u8>(), Ok(<Nat<$n> as Natural>::VALUE));
            )*
        };
    }
    for_each_natural!(check);
}

#[test]
fn test_values() {
    macro_rules! check {
        ($($n:literal)*) => {
            $(
                assert_eq!(<Nat<$n> as Natural>::VALUE, $n);
            )*
        };
    }
    for_each_natural!(check);
}

#[test]
fn test_next_prev_inverse() {
    // Next<Prev<N>> == N for N in [1, 62]
    macro_rules! next_of_prev {
        ($($n:literal)*) => {
            $(
                assert_type_eq::<Next<Prev<Nat<$n>>>, Nat<$n>>();
            )*
        };
    }
    next_of_prev!(1 2 3 4 5 6 7 8 9 10 11 12 13 14 15
                  16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31
                  32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47
                  48 49 50 51 52 53 54 55 56 57 58 59 60 61 62);

    // Prev<Next<N>> == N for N in [0, 62]
    macro_rules! prev_of_next {
        ($($n:literal)*) => {
            $(
                assert_type_eq::<Prev<Next<Nat<$n>>>, Nat<$n>>();
            )*
        };
    }
    prev_of_next!(0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15
                  16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31
                  32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47
                  48 49 50 51 52 53 54 55 56 57 58 59 60 61 62);
}

// =============================================================================
// Add / Sub
// =============================================================================

assert_type_eq!(Add<_22, _8>, _30);
assert_type_eq!(Add<_8, _22>, _30);
assert_type_eq!(Sub<_30, _8>, _22);

#[test]
fn test_add_commutative() {
    assert_type_eq::<Add<_22, _8>, Add<_8, _22>>();
    assert_type_eq::<Add<_1, _0>, Add<_0, _1>>();
    assert_type_eq::<Add<_13, _17>, Add<_17, _13>>();
    assert_eq!(<Add<_22, _8> as Natural>::VALUE, 30);
}

#[test]
fn test_add_identity() {
    assert_type_eq::<Add<_0, _0>, _0>();
    assert_type_eq::<Add<_63, _0>, _63>();
    assert_type_eq::<Add<_0, _63>, _63>();
}

#[test]
fn test_add_to_ceiling() {
    assert_type_eq::<Add<_31, _32>, _63>();
    assert_type_eq::<Add<_62, _1>, _63>();
    assert_type_eq::<Add<_1, _62>, _63>();
}

// The longest chains in range, at the default recursion limit
assert_type_eq!(Add<_0, _63>, _63);
assert_type_eq!(Sub<_63, _63>, _0);
assert_type_eq!(Sub<_63, _62>, _1);

#[test]
fn test_every_second_operand() {
    macro_rules! check {
        ($($n:literal)*) => {
            $(
                assert_type_eq::<Add<_0, Nat<$n>>, Nat<$n>>();
                assert_type_eq::<Sub<Nat<$n>, Nat<$n>>, _0>();
                assert_type_eq::<Sub<_63, Nat<$n>>, Nat<{ 63 - $n }>>();
            )*
        };
    }
    for_each_natural!(check);
}

#[test]
fn test_sub_inverts_add() {
    assert_type_eq::<Sub<Add<_22, _8>, _8>, _22>();
    assert_type_eq::<Sub<Add<_40, _23>, _23>, _40>();
    assert_type_eq::<Sub<_63, _63>, _0>();
    assert_type_eq::<Sub<_63, _0>, _63>();
}

#[test]
fn test_generic_arithmetic() {
    fn sum<A: NatAdd<B>, B>() -> u8 {
        <<A as NatAdd<B>>::Out as Natural>::VALUE
    }
    fn difference<A: NatSub<B>, B>() -> u8 {
        <<A as NatSub<B>>::Out as Natural>::VALUE
    }

    assert_eq!(sum::<_10, _20>(), 30);
    assert_eq!(difference::<_10, _4>(), 6);
}

// =============================================================================
// NumberEqual
// =============================================================================

assert_true!(NumberEqual<_0, _0>);
assert_true!(NumberEqual<_63, _63>);
assert_false!(NumberEqual<_6, _63>);
assert_false!(NumberEqual<_36, _63>);

#[test]
fn test_number_equal_after_arithmetic() {
    assert!(<NumberEqual<Add<_22, _8>, _30> as Bool>::VALUE);
    assert!(<NumberEqual<Sub<_30, _8>, Add<_11, _11>> as Bool>::VALUE);
    assert!(!<NumberEqual<Add<_22, _8>, _31> as Bool>::VALUE);
}
