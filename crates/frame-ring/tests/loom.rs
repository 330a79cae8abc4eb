//! Exhaustive interleaving checks under loom.
//!
//! ```bash
//! RUSTFLAGS="--cfg loom" cargo test -p frame-ring --test loom --release
//! ```
#![cfg(loom)]

use frame_ring::RingBuffer;
use loom::sync::Arc;
use loom::thread;

/// Payload whose halves must always agree; a mixed pair means the consumer
/// saw parts of two different pushes.
type Pair = (u32, u32);

fn check(capacity: usize, pushes: u32, pops: usize) {
    let mut builder = loom::model::Builder::new();
    builder.preemption_bound = Some(3);

    builder.check(move || {
        let ring: Arc<RingBuffer<Pair>> = Arc::new(RingBuffer::new(capacity).unwrap());

        let producer = {
            let ring = Arc::clone(&ring);
            thread::spawn(move || {
                for seq in 1..=pushes {
                    ring.push((seq, seq));
                    assert!(ring.cursors().is_disjoint());
                }
            })
        };

        let mut last = 0;
        for _ in 0..pops {
            if let Some((a, b)) = ring.pop() {
                assert_eq!(a, b, "payload mixed across slots");
                assert!(a > last, "went backwards from {last} to {a}");
                last = a;
            }
            assert!(ring.cursors().is_disjoint());
        }

        producer.join().unwrap();

        if let Some((a, _)) = ring.pop() {
            last = a;
        }
        assert_eq!(last, pushes, "newest frame unreachable after producer finished");

        let stats = ring.stats();
        assert_eq!(stats.pushed, stats.delivered + stats.skipped + stats.pending);
    });
}

#[test]
fn capacity_three() {
    check(3, 3, 2);
}

#[test]
fn capacity_four() {
    check(4, 3, 2);
}

#[test]
fn capacity_five() {
    check(5, 2, 2);
}
