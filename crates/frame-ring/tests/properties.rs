//! Model-based checks of the ring's single-threaded behavior.
#![cfg(not(loom))]

use frame_ring::{Frame, RingBuffer, MIN_CAPACITY};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(Vec<u8>),
    Pop,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => prop::collection::vec(any::<u8>(), 0..32).prop_map(Op::Push),
        2 => Just(Op::Pop),
    ]
}

/// Apply `ops` to a fresh ring and to the model (newest frame since last
/// pop), checking every observation point.
fn run_against_model(capacity: usize, ops: &[Op]) -> Result<(), TestCaseError> {
    let ring = RingBuffer::new(capacity).unwrap();
    let mut newest: Option<Vec<u8>> = None;
    let mut pushed = 0u64;

    for op in ops {
        match op {
            Op::Push(bytes) => {
                ring.push(Frame::from(bytes.clone()));
                newest = Some(bytes.clone());
                pushed += 1;
            }
            Op::Pop => {
                let got = ring.pop().map(|f| f.to_vec());
                prop_assert_eq!(got, newest.take());
            }
        }

        let cursors = ring.cursors();
        prop_assert!(cursors.is_disjoint(), "cursors collided: {:?}", cursors);
        prop_assert!(cursors.write < capacity);
        prop_assert!(cursors.read.map_or(true, |r| r < capacity));
        prop_assert_eq!(cursors.pending == 0, newest.is_none());

        let stats = ring.stats();
        prop_assert_eq!(stats.pushed, pushed);
        prop_assert_eq!(stats.pushed, stats.delivered + stats.skipped + stats.pending);
        prop_assert_eq!(stats.capacity, capacity);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_pop_returns_newest(
        capacity in MIN_CAPACITY..10usize,
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        run_against_model(capacity, &ops)?;
    }

    #[test]
    fn prop_small_capacity_rejected(capacity in 0..MIN_CAPACITY) {
        prop_assert!(RingBuffer::<Frame>::new(capacity).is_err());
    }

    #[test]
    fn prop_burst_then_pop(capacity in MIN_CAPACITY..10usize, burst in 1..100usize) {
        let ring = RingBuffer::new(capacity).unwrap();
        for i in 0..burst {
            ring.push(Frame::from((i as u32).to_le_bytes()));
        }

        prop_assert_eq!(ring.capacity(), capacity);
        prop_assert_eq!(ring.pop().unwrap(), Frame::from((burst as u32 - 1).to_le_bytes()));
        prop_assert!(ring.pop().is_none());
    }
}

/// Every push/pop schedule up to a fixed length on the smallest capacities,
/// which is where the collision-skipping steps fire most often.
#[test]
fn exhaustive_schedules_small_capacities() {
    const DEPTH: u32 = 11;

    for capacity in [3usize, 4, 5] {
        for mask in 0..(1u32 << DEPTH) {
            let ops: Vec<Op> = (0..DEPTH)
                .map(|bit| {
                    if mask & (1 << bit) != 0 {
                        Op::Push(bit.to_le_bytes().to_vec())
                    } else {
                        Op::Pop
                    }
                })
                .collect();

            if let Err(err) = run_against_model(capacity, &ops) {
                panic!("capacity {capacity}, schedule {mask:#b}: {err}");
            }
        }
    }
}

#[test]
fn capacity_three_example() {
    let ring = RingBuffer::new(3).unwrap();
    ring.push(Frame::from("A"));
    ring.push(Frame::from("B"));
    ring.push(Frame::from("C"));

    assert_eq!(ring.pop().unwrap(), "C");
    assert_eq!(ring.pop(), None);
}

#[test]
fn capacity_four_example() {
    let ring = RingBuffer::new(4).unwrap();
    ring.push(Frame::from("X"));
    assert_eq!(ring.pop().unwrap(), "X");

    ring.push(Frame::from("Y"));
    ring.push(Frame::from("Z"));
    assert_eq!(ring.pop().unwrap(), "Z");
    assert_eq!(ring.pop(), None);
}
