use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chefbyte_reconcile::{NameMatcher, similarity};

fn pantry(size: usize) -> Vec<String> {
    let staples = [
        "Whole Milk",
        "Eggs",
        "Sourdough Bread",
        "Cheddar Cheese",
        "Tomatoes",
        "Chicken Breast",
        "Basmati Rice",
        "Olive Oil",
        "Greek Yogurt",
        "Baby Spinach",
    ];
    (0..size)
        .map(|i| format!("{} {}", staples[i % staples.len()], i / staples.len()))
        .collect()
}

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");
    for (a, b) in [
        ("milk", "Milk"),
        ("tomatos", "Tomatoes"),
        ("chicken brest", "Chicken Breast"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(a), &(a, b), |bench, (a, b)| {
            bench.iter(|| similarity(black_box(a), black_box(b)));
        });
    }
    group.finish();
}

fn bench_closest(c: &mut Criterion) {
    let matcher = NameMatcher::new();
    let mut group = c.benchmark_group("closest");

    for size in [10usize, 100, 1000] {
        let names = pantry(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &names, |bench, names| {
            bench.iter(|| {
                matcher.closest(
                    black_box("chedder cheese 0"),
                    names.iter().map(String::as_str),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_similarity, bench_closest);
criterion_main!(benches);
