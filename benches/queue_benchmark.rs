use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use histq::queues::{DequeQueue, HistoryQueue, Queue, VecQueue};

const QUEUE_LEN: u64 = 1024;

fn fill<Q: Queue<u64> + Default>() -> Q {
    let mut queue = Q::default();
    for value in 0..QUEUE_LEN {
        queue.add(value);
    }
    queue
}

fn drain<Q: Queue<u64>>(mut queue: Q) -> u64 {
    let mut total = 0;
    while let Some(value) = queue.remove() {
        total += value;
    }
    total
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("drain vec queue", |b| {
        b.iter_batched(
            fill::<VecQueue<u64>>,
            drain::<VecQueue<u64>>,
            BatchSize::SmallInput,
        )
    });

    c.bench_function("drain deque queue", |b| {
        b.iter_batched(
            fill::<DequeQueue<u64>>,
            drain::<DequeQueue<u64>>,
            BatchSize::SmallInput,
        )
    });

    c.bench_function("replay history queue", |b| {
        b.iter_batched(
            fill::<HistoryQueue<u64>>,
            drain::<HistoryQueue<u64>>,
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
