use quickcheck::{Arbitrary, Gen, QuickCheck};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use crate::optional_type::Optional;

impl<T: Arbitrary> Arbitrary for Optional<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        // Roughly one in four generated values is absent
        if u8::arbitrary(g) % 4 == 0 {
            Optional::None
        } else {
            Optional::Some(T::arbitrary(g))
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Optional::Some(value) => Box::new(
                std::iter::once(Optional::None).chain(value.shrink().map(Optional::Some)),
            ),
            Optional::None => quickcheck::empty_shrinker(),
        }
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn f(x: i64) -> i64 {
    x.wrapping_mul(3)
}

fn g(x: i64) -> String {
    format!("<{}>", x)
}

fn half(x: i64) -> Optional<i64> {
    if x % 2 == 0 {
        Optional::some(x / 2)
    } else {
        Optional::none()
    }
}

// Property: mapping the identity function changes nothing
fn prop_functor_identity(o: Optional<i64>) -> bool {
    o.map(|x| x) == o
}

// Property: map(f).map(g) == map(g . f)
fn prop_functor_composition(o: Optional<i64>) -> bool {
    o.map(f).map(g) == o.map(|x| g(f(x)))
}

// Property: some(x).flat_map(k) == k(x)
fn prop_monad_left_identity(x: i64) -> bool {
    Optional::some(x).flat_map(half) == half(x)
}

// Property: o.flat_map(some) == o
fn prop_monad_right_identity(o: Optional<i64>) -> bool {
    o.flat_map(Optional::some) == o
}

// Property: (o >>= k) >>= h == o >>= (x -> k(x) >>= h)
fn prop_monad_associativity(o: Optional<i64>) -> bool {
    o.flat_map(half).flat_map(half) == o.flat_map(|x| half(x).flat_map(half))
}

// Property: a present value survives extraction untouched
fn prop_some_round_trips(x: i64) -> bool {
    let o = Optional::some(x);
    o.is_some() && o.value_or_throw() == Ok(x) && o.into_value() == Ok(x)
}

// Property: equal optionals hash equal
fn prop_equality_consistent_with_hash(a: Optional<i64>, b: Optional<i64>) -> bool {
    a != b || hash_of(&a) == hash_of(&b)
}

// Property: select_many agrees with flat_map followed by map
fn prop_select_many_is_bind_then_map(o: Optional<i64>) -> bool {
    let via_select = o.select_many(|x| half(*x), |x, y| x.wrapping_add(y));
    let via_bind = o.flat_map(|x| half(x).map(|y| x.wrapping_add(y)));
    via_select == via_bind
}

// Property: value_or falls back exactly when absent
fn prop_value_or_default(o: Optional<i64>, d: i64) -> bool {
    match o {
        Optional::Some(x) => o.value_or(d) == x,
        Optional::None => o.value_or(d) == d,
    }
}

#[test]
fn test_functor_laws() {
    QuickCheck::new()
        .tests(200)
        .quickcheck(prop_functor_identity as fn(Optional<i64>) -> bool);
    QuickCheck::new()
        .tests(200)
        .quickcheck(prop_functor_composition as fn(Optional<i64>) -> bool);
}

#[test]
fn test_monad_laws() {
    QuickCheck::new()
        .tests(200)
        .quickcheck(prop_monad_left_identity as fn(i64) -> bool);
    QuickCheck::new()
        .tests(200)
        .quickcheck(prop_monad_right_identity as fn(Optional<i64>) -> bool);
    QuickCheck::new()
        .tests(200)
        .quickcheck(prop_monad_associativity as fn(Optional<i64>) -> bool);
}

#[test]
fn test_extraction() {
    QuickCheck::new()
        .tests(100)
        .quickcheck(prop_some_round_trips as fn(i64) -> bool);
    QuickCheck::new()
        .tests(100)
        .quickcheck(prop_value_or_default as fn(Optional<i64>, i64) -> bool);
}

#[test]
fn test_hash_consistency() {
    QuickCheck::new()
        .tests(200)
        .quickcheck(prop_equality_consistent_with_hash as fn(Optional<i64>, Optional<i64>) -> bool);
}

#[test]
fn test_select_many() {
    QuickCheck::new()
        .tests(200)
        .quickcheck(prop_select_many_is_bind_then_map as fn(Optional<i64>) -> bool);
}
