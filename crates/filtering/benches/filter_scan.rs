//! Benchmarks for filtering a catalog against specifications
//!
//! Run with: cargo bench --package filtering
//!
//! This will benchmark a single leaf predicate and a nested composite
//! over a synthetic 10k-product catalog.

use catalog::{Color, Product, Size};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use filtering::{ColorSpecification, Filter, LinearFilter, SizeSpecification, SpecificationExt};

const COLORS: [Color; 3] = [Color::Red, Color::Green, Color::Blue];
const SIZES: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

fn create_test_catalog(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| {
            Product::new(
                format!("Product {}", i),
                COLORS[i % COLORS.len()],
                SIZES[i % SIZES.len()],
            )
        })
        .collect()
}

fn bench_leaf_specification(c: &mut Criterion) {
    let products = create_test_catalog(10_000);
    let filter = LinearFilter;
    let spec = ColorSpecification::new(Color::Green);

    c.bench_function("filter_10k_leaf", |b| {
        b.iter(|| {
            let refs: Vec<&Product> = products.iter().collect();
            let kept = filter.filter(black_box(refs), black_box(&spec));
            black_box(kept)
        })
    });
}

fn bench_nested_composite(c: &mut Criterion) {
    let products = create_test_catalog(10_000);
    let filter = LinearFilter;

    // (green AND large) OR NOT red
    let spec = ColorSpecification::new(Color::Green)
        .and(SizeSpecification::new(Size::Large))
        .or(ColorSpecification::new(Color::Red).not());

    c.bench_function("filter_10k_nested_composite", |b| {
        b.iter(|| {
            let refs: Vec<&Product> = products.iter().collect();
            let kept = filter.filter(black_box(refs), black_box(&spec));
            black_box(kept)
        })
    });
}

criterion_group!(benches, bench_leaf_specification, bench_nested_composite);
criterion_main!(benches);
