use criterion::{black_box, criterion_group, criterion_main, Criterion};
use p2ring::RingQueue;
use std::collections::VecDeque;

const SIZE: usize = 4096;

fn ring_queue(c: &mut Criterion) {
    let mut queue = RingQueue::<usize, SIZE>::try_new().unwrap();
    c.bench_function("ring queue", |b| {
        b.iter(|| {
            for i in 0..SIZE {
                queue.enqueue(i).unwrap();
            }
            for _ in 0..SIZE {
                black_box(queue.dequeue().unwrap());
            }
        })
    });
}

fn vec_deque(c: &mut Criterion) {
    let mut queue = VecDeque::with_capacity(SIZE);
    c.bench_function("vec deque", |b| {
        b.iter(|| {
            for i in 0..SIZE {
                queue.push_back(i);
            }
            for _ in 0..SIZE {
                black_box(queue.pop_front().unwrap());
            }
        })
    });
}

fn interleaved(c: &mut Criterion) {
    let mut queue = RingQueue::<u64, 64>::try_new().unwrap();
    c.bench_function("ring queue interleaved", |b| {
        b.iter(|| {
            for i in 0..SIZE as u64 {
                let _ = queue.enqueue(i);
                if i % 2 == 1 {
                    black_box(queue.dequeue().ok());
                }
            }
            queue.reset().unwrap();
        })
    });
}

criterion_group!(ring_bench, ring_queue, vec_deque, interleaved);
criterion_main!(ring_bench);
