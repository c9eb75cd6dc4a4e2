#![allow(dead_code, unused)]

use type_algebra::prelude::*;
use type_algebra::record::RecordGet;
use type_algebra::set::SetDrop;

type Obj = record! { w: u8, x: String };

// Scenario 1: Reading a field the record does not have
fn field_of<R: RecordGet<K>, K>() {}

// Scenario 2: Dropping labels that are not in the set
fn drop_labels<T: SetDrop<U>, U>() {}

// Scenario 3: Arithmetic past either end of [0, 63]
fn sum<A: NatAdd<B>, B>() {}
fn difference<A: NatSub<B>, B>() {}

#[test]
fn test_missing_field() {
    field_of::<Obj, label!("w")>();

    // Obj has no `z`: "record `...` has no field `...`"
    // field_of::<Obj, label!("z")>();
}

#[test]
fn test_drop_not_subset() {
    drop_labels::<labels!["hi", "there"], labels!["hi"]>();

    // "friend" is not in the set: "cannot drop `...` from `...`"
    // drop_labels::<labels!["hi", "there"], labels!["friend"]>();
}

#[test]
fn test_out_of_range() {
    sum::<_62, _1>();
    difference::<_1, _1>();

    // 63 + 1 lands on Nat<64>, which is not a natural
    // sum::<_63, _1>();

    // 0 - 1 lands on Nat<-1>
    // difference::<_0, _1>();

    // Nat<100> is outside the table entirely
    // let _: Next<Nat<100>>;
}

#[test]
fn test_not_a_record() {
    // u8 has no keys: "cannot take the keys of `u8`"
    // let _: Keys<u8>;

    // Neither a record nor a registered leaf:
    // struct Opaque;
    // let _: DeepPartial<record! { o: Opaque }>;
}
