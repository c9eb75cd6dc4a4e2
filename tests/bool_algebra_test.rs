//! Tests for the boolean algebra: If and the derived operators.

use type_algebra::prelude::*;
use type_algebra::{assert_false, assert_true, assert_type_eq};

// =============================================================================
// If
// =============================================================================

assert_type_eq!(If<True, u8, String>, u8);
assert_type_eq!(If<False, u8, String>, String);
assert_type_eq!(If<True, HNil, ()>, HNil);

#[test]
fn test_if_selects_payload() {
    struct Then;
    struct Else;
    assert_type_eq::<If<True, Then, Else>, Then>();
    assert_type_eq::<If<False, Then, Else>, Else>();
    assert_type_eq::<If<True, Vec<u8>, Option<u8>>, Vec<u8>>();
}

#[test]
fn test_if_nested() {
    type Choose<A, B> = If<A, If<B, u8, u16>, If<B, u32, u64>>;
    assert_type_eq::<Choose<True, True>, u8>();
    assert_type_eq::<Choose<True, False>, u16>();
    assert_type_eq::<Choose<False, True>, u32>();
    assert_type_eq::<Choose<False, False>, u64>();
}

// =============================================================================
// Truth tables
// =============================================================================

assert_false!(Not<True>);
assert_true!(Not<False>);

assert_true!(And<True, True>);
assert_false!(And<True, False>);
assert_false!(And<False, True>);
assert_false!(And<False, False>);

assert_true!(Or<True, True>);
assert_true!(Or<True, False>);
assert_true!(Or<False, True>);
assert_false!(Or<False, False>);

assert_false!(Xor<True, True>);
assert_true!(Xor<True, False>);
assert_true!(Xor<False, True>);
assert_false!(Xor<False, False>);

assert_false!(Nand<True, True>);
assert_true!(Nand<True, False>);
assert_true!(Nand<False, True>);
assert_true!(Nand<False, False>);

#[test]
fn test_values_match_runtime_logic() {
    fn check<A: Bool, B: Bool>()
    where
        A: BoolAnd<B> + BoolOr<B> + BoolXor<B> + BoolNand<B>,
    {
        let (a, b) = (A::VALUE, B::VALUE);
        assert_eq!(<And<A, B> as Bool>::VALUE, a && b);
        assert_eq!(<Or<A, B> as Bool>::VALUE, a || b);
        assert_eq!(<Xor<A, B> as Bool>::VALUE, a ^ b);
        assert_eq!(<Nand<A, B> as Bool>::VALUE, !(a && b));
        assert_eq!(<Not<A> as Bool>::VALUE, !a);
    }

    check::<True, True>();
    check::<True, False>();
    check::<False, True>();
    check::<False, False>();
}

#[test]
fn test_composition() {
    // De Morgan: Not<And<A, B>> == Or<Not<A>, Not<B>>
    assert_type_eq::<Not<And<True, False>>, Or<Not<True>, Not<False>>>();
    assert_type_eq::<Not<Or<False, False>>, And<Not<False>, Not<False>>>();
    // Double negation
    assert_type_eq::<Not<Not<True>>, True>();
    assert_type_eq::<Not<Not<False>>, False>();
}
