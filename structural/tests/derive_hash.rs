//! End-to-end tests for `#[derive(StructuralHash)]` and its consistency
//! with the derived structural equality.

use std::cell::{Cell, RefCell};
use std::hash::{DefaultHasher, Hash, Hasher};

use structural::{StructuralEq, StructuralHash};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[derive(StructuralEq, StructuralHash)]
struct Point {
    x: f64,
    y: f64,
}

#[derive(StructuralHash)]
struct Mirrored {
    y: f64,
    x: f64,
}

#[derive(StructuralEq, StructuralHash)]
struct Doc {
    body: String,
    #[structural(skip)]
    revision: usize,
}

#[derive(StructuralEq, StructuralHash)]
struct Counter {
    hits: Cell<u32>,
    log: RefCell<String>,
}

#[derive(StructuralEq, StructuralHash)]
enum Status {
    Ok,
    Error { code: u32 },
}

#[derive(StructuralHash)]
enum Callback {
    Idle,
    Run(Box<dyn Fn() -> i32>),
}

#[test]
fn equal_products_hash_identically() {
    let a = Point { x: 1.0, y: 2.0 };
    let b = Point { x: 1.0, y: 2.0 };
    assert!(a == b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn negative_zero_hashes_like_positive_zero() {
    let a = Point { x: 0.0, y: 2.0 };
    let b = Point { x: -0.0, y: 2.0 };
    assert!(a == b, "IEEE zeroes compare equal");
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn member_order_changes_the_hash_sequence() {
    // Same member values, opposite declaration order: the hasher is fed
    // 1.0 then 2.0 on one side and 2.0 then 1.0 on the other.
    let ordered = Point { x: 1.0, y: 2.0 };
    let mirrored = Mirrored { y: 2.0, x: 1.0 };
    assert_ne!(hash_of(&ordered), hash_of(&mirrored));
}

#[test]
fn skipped_members_do_not_affect_the_hash() {
    let a = Doc {
        body: "hello".to_owned(),
        revision: 1,
    };
    let b = Doc {
        body: "hello".to_owned(),
        revision: 999,
    };
    assert!(a == b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn cells_hash_contained_values() {
    let a = Counter {
        hits: Cell::new(3),
        log: RefCell::new("up".to_owned()),
    };
    let b = Counter {
        hits: Cell::new(3),
        log: RefCell::new("up".to_owned()),
    };
    assert!(a == b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn no_payload_variant_hashes_its_declaration_index() {
    let mut expected = DefaultHasher::new();
    0_usize.hash(&mut expected);
    assert_eq!(hash_of(&Status::Ok), expected.finish());
}

#[test]
fn payload_variant_hashes_index_then_slots() {
    let mut expected = DefaultHasher::new();
    1_usize.hash(&mut expected);
    5_u32.hash(&mut expected);
    assert_eq!(hash_of(&Status::Error { code: 5 }), expected.finish());
}

#[test]
fn equal_sum_values_hash_identically() {
    let a = Status::Error { code: 5 };
    let b = Status::Error { code: 5 };
    assert!(a == b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn callable_payloads_are_skipped_not_hashed_as_zero() {
    // Two different closures hash identically because only the variant's
    // discriminant is fed; the slot contributes nothing at all.
    let a = Callback::Run(Box::new(|| 1));
    let b = Callback::Run(Box::new(|| 2));
    assert_eq!(hash_of(&a), hash_of(&b));

    let mut expected = DefaultHasher::new();
    1_usize.hash(&mut expected);
    assert_eq!(hash_of(&a), expected.finish());

    assert_ne!(hash_of(&Callback::Idle), hash_of(&a));
}
