//! RNG tests for deck-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие порядка
//! - отсутствие потерянных/повторяющихся элементов
//! - работу SystemRng и seed от часов

use deck_engine::engine::RandomSource;
use deck_engine::infra::{DeterministicRng, SystemRng};

//
// TEST 1 — DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2 — different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_seed(111);
    let mut r2 = DeterministicRng::from_seed(222);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds must produce different shuffle");
}

//
// TEST 3 — no duplicates after shuffle
//
#[test]
fn shuffle_produces_no_duplicates() {
    let mut rng = DeterministicRng::from_seed(555);

    let mut deck = (0..52).collect::<Vec<u32>>();
    rng.shuffle(&mut deck);

    let mut sorted = deck.clone();
    sorted.sort_unstable();
    sorted.dedup();

    assert_eq!(sorted, (0..52).collect::<Vec<u32>>());
}

//
// TEST 4 — SystemRng keeps every element
//
#[test]
fn system_rng_is_a_permutation() {
    let mut sys = SystemRng;

    let mut a: Vec<u32> = (0..52).collect();
    sys.shuffle(&mut a);

    a.sort_unstable();
    assert_eq!(a, (0..52).collect::<Vec<u32>>());
}

//
// TEST 5 — seed is reported back (для логов и реплея)
//
#[test]
fn seed_is_exposed() {
    assert_eq!(DeterministicRng::from_seed(77).seed(), 77);

    let clock = DeterministicRng::from_clock();
    let mut replay = DeterministicRng::from_seed(clock.seed());
    let mut original = clock;

    let mut a: Vec<u32> = (0..20).collect();
    let mut b: Vec<u32> = (0..20).collect();
    original.shuffle(&mut a);
    replay.shuffle(&mut b);

    assert_eq!(a, b, "clock seed must be replayable");
}

//
// TEST 6 — empty and 1-element slices
//
#[test]
fn shuffle_tiny_slices_ok() {
    let mut rng = DeterministicRng::from_seed(42);

    let mut empty: Vec<u32> = vec![];
    rng.shuffle(&mut empty);
    assert!(empty.is_empty());

    let mut one = vec![123];
    rng.shuffle(&mut one);
    assert_eq!(one, vec![123]);
}
