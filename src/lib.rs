mod error;
mod heap;
mod order;

pub use error::{HeapError, Result};
pub use heap::Heap;
pub use order::Order;

#[cfg(test)]
fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!(
            "{} {:03} nanos",
            elapsed.as_micros(),
            elapsed.as_nanos() % 1000,
        );
    } else if elapsed < Duration::from_secs(1) {
        println!(
            "{} {:03} micros",
            elapsed.as_millis(),
            elapsed.as_micros() % 1000,
        );
    } else {
        println!(
            "{} {:03} millis",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
    }
}

#[test]
fn bench_heap_vs_std() {
    use rand::prelude::*;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    const N: usize = 64 * 1024;

    let mut rng = SmallRng::from_entropy();
    let values: Vec<i64> = (0..N).map(|_| rng.gen_range(-1000_000..1000_000)).collect();

    let mut std_heap = BinaryHeap::with_capacity(N);
    let mut std_sorted = Vec::with_capacity(N);
    bench("std::collections::BinaryHeap::push", 1, || {
        for &x in values.iter() {
            std_heap.push(Reverse(x));
        }
    });
    bench("std::collections::BinaryHeap::pop", 2, || {
        while let Some(Reverse(x)) = std_heap.pop() {
            std_sorted.push(x);
        }
    });
    println!();

    let mut heap = Heap::new(N, Order::Min).unwrap();
    let mut sorted = None;
    bench("Heap::push", 5, || {
        for (len, &x) in values.iter().enumerate() {
            assert_eq!(heap.len(), len);
            heap.push(x).unwrap();
        }
    });
    assert!(heap.is_full());
    assert!(heap.is_heap());
    bench("Heap::sort", 5, || sorted = heap.sort());
    assert!(heap.is_empty());

    assert_eq!(sorted, Some(std_sorted));

    let mut heap = Heap::from_vec(values, Order::Max).unwrap();
    assert!(heap.is_heap());
    let desc = heap.sort().unwrap();
    assert!(desc.windows(2).all(|w| w[0] >= w[1]));
}
