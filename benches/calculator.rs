// Chapter 7: Criterion benchmarks for the Calculator.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fundamentals::Calculator;

fn benchmark_add(c: &mut Criterion) {
    let calc = Calculator::new();
    let mut i = 0.0f64;

    c.bench_function("calculator_add", |b| {
        b.iter(|| {
            i += 1.0;
            calc.add(black_box(i), black_box(i))
        })
    });
}

fn benchmark_divide(c: &mut Criterion) {
    let calc = Calculator::new();
    let mut group = c.benchmark_group("calculator_divide");

    group.bench_function("ok", |b| b.iter(|| calc.divide(black_box(6.0), black_box(2.0))));
    group.bench_function("by_zero", |b| b.iter(|| calc.divide(black_box(6.0), black_box(0.0))));

    group.finish();
}

criterion_group!(benches, benchmark_add, benchmark_divide);
criterion_main!(benches);
