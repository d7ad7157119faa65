extern crate std;

use std::{vec, vec::Vec};

use crate::RingBuffer;

/// Ring of capacity 4 whose contents `[2, 3, 4]` wrap past the end of the store.
fn wrapped() -> RingBuffer<i32> {
    let mut ring = RingBuffer::new(4).unwrap();
    for i in 0..4 {
        ring.enqueue(i).unwrap();
    }
    assert_eq!(ring.dequeue(), Some(0));
    assert_eq!(ring.dequeue(), Some(1));
    ring.enqueue(4).unwrap();
    ring
}

#[test]
fn iteration_on_empty_ring() {
    let mut ring: RingBuffer<i32> = RingBuffer::new(3).unwrap();
    assert_eq!(ring.iter().next(), None);
    assert_eq!(ring.iter_mut().next(), None);
    assert_eq!(ring.iter().len(), 0);
}

#[test]
fn iteration_follows_fifo_order_across_wrap() {
    let ring = wrapped();
    let items: Vec<i32> = ring.iter().copied().collect();
    assert_eq!(items, vec![2, 3, 4]);
}

#[test]
fn reverse_iteration_across_wrap() {
    let ring = wrapped();
    let items: Vec<i32> = ring.iter().rev().copied().collect();
    assert_eq!(items, vec![4, 3, 2]);

    let mut iter = ring.iter();
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next_back(), None);
}

#[test]
fn iter_mut_updates_in_place() {
    let mut ring = wrapped();

    for item in ring.iter_mut() {
        *item *= 10;
    }

    let items: Vec<i32> = ring.iter().copied().collect();
    assert_eq!(items, vec![20, 30, 40]);
    assert_eq!(ring.len(), 3);
}

#[test]
fn iter_mut_reverse_across_wrap() {
    let mut ring = wrapped();
    let mut iter = ring.iter_mut();
    assert_eq!(iter.next_back().map(|v| *v), Some(4));
    assert_eq!(iter.next().map(|v| *v), Some(2));
    assert_eq!(iter.size_hint(), (1, Some(1)));
}

#[test]
fn size_hint_tracks_remaining() {
    let ring = wrapped();
    let mut iter = ring.iter();
    assert_eq!(iter.size_hint(), (3, Some(3)));
    iter.next();
    assert_eq!(iter.len(), 2);
}

#[test]
fn borrowed_into_iterator() {
    let mut ring = wrapped();

    let mut sum = 0;
    for item in &ring {
        sum += item;
    }
    assert_eq!(sum, 9);

    for item in &mut ring {
        *item += 1;
    }
    assert_eq!(ring.peek(), Some(&3));
}

#[test]
fn owned_into_iterator_dequeues_in_order() {
    let ring = wrapped();
    let mut iter = ring.into_iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.collect::<Vec<_>>(), vec![3, 4]);
}

#[test]
fn get_by_position() {
    let ring = wrapped();
    assert_eq!(ring.get(0), Some(&2));
    assert_eq!(ring.get(1), Some(&3));
    assert_eq!(ring.get(2), Some(&4));
    assert_eq!(ring.get(3), None);
    assert_eq!(ring.get(usize::MAX), None);
}

#[test]
fn peek_front_and_back() {
    let mut ring = RingBuffer::new(3).unwrap();
    assert_eq!(ring.peek(), None);
    assert_eq!(ring.peek_back(), None);

    ring.enqueue(1).unwrap();
    assert_eq!(ring.peek(), Some(&1));
    assert_eq!(ring.peek_back(), Some(&1));

    ring.enqueue(2).unwrap();
    assert_eq!(ring.peek(), Some(&1));
    assert_eq!(ring.peek_back(), Some(&2));
}

#[test]
fn peek_is_idempotent() {
    let ring = wrapped();
    let full_before = ring.is_full();

    assert_eq!(ring.peek(), Some(&2));
    assert_eq!(ring.peek(), Some(&2));
    assert_eq!(ring.is_full(), full_before);
    assert!(!ring.is_empty());
}
