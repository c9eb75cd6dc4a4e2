//! Tests for sequence length and element unions.

use type_algebra::prelude::*;
use type_algebra::{assert_type_eq, hlist};

type Hey = label!("hey");
type There = label!("there");

// =============================================================================
// Length
// =============================================================================

assert_type_eq!(Length<(Hey, There)>, _2);
assert_type_eq!(Length<()>, _0);
assert_type_eq!(Length<(u8,)>, _1);
assert_type_eq!(Length<(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8)>, _12);

#[test]
fn test_list_length() {
    assert_type_eq::<Length<hlist![]>, _0>();
    assert_type_eq::<Length<hlist![u8, String, bool]>, _3>();
    assert_type_eq::<Length<labels!["a", "b", "c", "d"]>, _4>();
    assert_eq!(<Length<hlist![u8, u8, u8, u8, u8]> as Natural>::VALUE, 5);
}

#[test]
fn test_length_feeds_arithmetic() {
    type Total = Add<Length<(u8, u16)>, Length<hlist![u32, u64, i8]>>;
    assert_type_eq::<Total, _5>();
    assert!(<NumberEqual<Length<(Hey, There)>, _2> as Bool>::VALUE);
}

// =============================================================================
// UnionizeTuple
// =============================================================================

assert_type_eq!(UnionizeTuple<(u32, String)>, HCons<u32, HCons<String, HNil>>);
assert_type_eq!(UnionizeTuple<()>, HNil);

#[test]
fn test_unionize_keeps_positions() {
    assert_type_eq::<UnionizeTuple<(u8, u8)>, hlist![u8, u8]>();
    assert_type_eq::<UnionizeTuple<hlist![u8, bool]>, hlist![u8, bool]>();
}

#[test]
fn test_unionize_labels() {
    assert_type_eq::<UnionizeLabels<(Hey, There)>, labels!["hey", "there"]>();
    assert_type_eq::<UnionizeLabels<(Hey, There, Hey)>, labels!["there", "hey"]>();
    assert!(<StringEqual<UnionizeLabels<(Hey, There, Hey)>, labels!["hey", "there"]> as Bool>::VALUE);
    assert!(<Contains<UnionizeTuple<(Hey, There)>, There> as Bool>::VALUE);
}
