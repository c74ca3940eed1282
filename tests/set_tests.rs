//! Set behaviour tests.
//!
//! These tests verify single-pile mechanics:
//! - Draw order and atomic bulk draws
//! - Top/bottom/indexed insertion
//! - Seeded, reproducible shuffling

use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use rust_deck::core::{GameRng, RandomProvider, SharedRng};
use rust_deck::{set_default_seed, DeckError, Set};

/// Provider that replays a fixed list of offsets from the range start.
struct Scripted {
    offsets: Vec<usize>,
    next: usize,
}

impl Scripted {
    fn shared(offsets: Vec<usize>) -> SharedRng {
        Rc::new(RefCell::new(Self { offsets, next: 0 }))
    }
}

impl RandomProvider for Scripted {
    fn next_in_range(&mut self, range: Range<usize>) -> usize {
        let offset = self.offsets[self.next % self.offsets.len()];
        self.next += 1;
        (range.start + offset).min(range.end - 1)
    }

    fn next_float_in_range(&mut self, range: Range<f32>) -> f32 {
        range.start
    }

    fn set_seed(&mut self, _seed: u64) {
        self.next = 0;
    }
}

/// Test that add_all_to_top on an empty set draws back in input order.
#[test]
fn test_add_all_to_top_then_draw() {
    let mut set = Set::with_provider(Vec::<char>::new(), GameRng::new(1).into_shared());
    set.add_all_to_top(['a', 'b', 'c']);

    assert_eq!(set.draw_n(3).unwrap(), vec!['a', 'b', 'c']);
    assert!(set.is_empty());
}

/// Test that add_all_to_bottom goes under the existing items.
#[test]
fn test_add_all_to_bottom_then_draw() {
    let mut set = Set::with_provider(['x'], GameRng::new(1).into_shared());
    set.add_all_to_bottom(['a', 'b', 'c']);

    assert_eq!(set.draw_n(4).unwrap(), vec!['x', 'a', 'b', 'c']);
}

/// Test that a failed bulk draw leaves the set unchanged.
#[test]
fn test_insufficient_items() {
    let mut set = Set::with_provider([1, 2], GameRng::new(1).into_shared());

    let err = set.draw_n(3).unwrap_err();
    assert_eq!(err, DeckError::InsufficientItems { requested: 3, available: 2 });
    assert_eq!(set.to_vec(), vec![1, 2]);
}

/// Test the exact swap sequence of the forward Fisher-Yates shuffle.
#[test]
fn test_shuffle_follows_provider() {
    // i=0 picks offset 2 (index 2), i=1 picks offset 0 (stay), i=2 picks offset 1 (index 3)
    let mut set = Set::with_provider([1, 2, 3, 4], Scripted::shared(vec![2, 0, 1]));
    set.shuffle();

    // [1,2,3,4] -> swap(0,2) [3,2,1,4] -> swap(1,1) -> swap(2,3) [3,2,4,1]
    assert_eq!(set.to_vec(), vec![3, 2, 4, 1]);
}

/// Test that identity offsets leave the order alone.
#[test]
fn test_shuffle_with_zero_offsets_is_identity() {
    let mut set = Set::with_provider(0..8, Scripted::shared(vec![0]));
    set.shuffle();
    assert_eq!(set.to_vec(), (0..8).collect::<Vec<_>>());
}

/// Test that two sets with the same seed shuffle identically.
#[test]
fn test_seeded_shuffle_is_reproducible() {
    let mut a = Set::with_provider(0..52, GameRng::new(2024).into_shared());
    let mut b = Set::with_provider(0..52, GameRng::new(2024).into_shared());

    a.shuffle();
    b.shuffle();
    assert_eq!(a.to_vec(), b.to_vec());

    // Second shuffle continues the same stream.
    a.shuffle();
    b.shuffle();
    assert_eq!(a.to_vec(), b.to_vec());
}

/// Test that sets sharing one handle draw from one stream.
#[test]
fn test_shared_handle_advances_once() {
    let shared = GameRng::new(77).into_shared();
    let mut a = Set::with_provider(0..10, shared.clone());
    let mut b = Set::with_provider(0..10, shared);
    a.shuffle();
    b.shuffle();

    let mut solo = GameRng::new(77);
    let mut expected_a: Vec<i32> = (0..10).collect();
    let mut expected_b = expected_a.clone();
    rust_deck::shuffle(&mut expected_a, &mut solo);
    rust_deck::shuffle(&mut expected_b, &mut solo);

    assert_eq!(a.to_vec(), expected_a);
    assert_eq!(b.to_vec(), expected_b);
}

/// Test that a reseed of the default provider reaches sets built before it.
#[test]
fn test_default_seed_reaches_existing_sets() {
    let mut early = Set::from_items(0..20);
    set_default_seed(17);
    early.shuffle();

    set_default_seed(17);
    let mut late = Set::from_items(0..20);
    late.shuffle();
    assert_eq!(late.to_vec(), early.to_vec());

    let mut explicit = Set::with_provider(0..20, GameRng::new(17).into_shared());
    explicit.shuffle();
    assert_eq!(explicit.to_vec(), early.to_vec());
}

/// Test removal by value with duplicates and non-matching items.
#[test]
fn test_remove_all_of_duplicates() {
    let mut set: Set<&str> = ["goblin", "elf", "goblin", "orc"].into_iter().collect();

    assert_eq!(set.remove_all_of(&"goblin"), 2);
    assert_eq!(set.to_vec(), vec!["elf", "orc"]);
    assert_eq!(set.remove_all_of(&"dragon"), 0);
    assert_eq!(set.len(), 2);
}

/// Test insertion at both ends of the valid range and just past it.
#[test]
fn test_add_at_index_bounds() {
    let mut set = Set::with_provider([2, 3], GameRng::new(1).into_shared());

    set.add_at_index(0, 1).unwrap();
    set.add_at_index(3, 4).unwrap();
    assert_eq!(set.to_vec(), vec![1, 2, 3, 4]);

    assert_eq!(
        set.add_at_index(5, 6),
        Err(DeckError::IndexOutOfRange { index: 5, len: 4 })
    );
}
