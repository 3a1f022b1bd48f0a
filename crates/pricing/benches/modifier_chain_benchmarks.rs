use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use flexorder_pricing::{
    build_chain, BaseAmount, FlatSurcharge, ModifierSpec, PercentDiscount, PriceModifier,
};
use rust_decimal::Decimal;

/// Generic (statically dispatched) chain vs the same chain built from config.
fn bench_static_vs_configured_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("checkout_chain");
    let base = Decimal::new(2344, 1);

    group.bench_function("static", |b| {
        let chain = FlatSurcharge::new(PercentDiscount::new(BaseAmount::new(base)));
        b.iter(|| black_box(chain.resolve()));
    });

    group.bench_function("configured", |b| {
        let chain = build_chain(base, &ModifierSpec::default_chain());
        b.iter(|| black_box(chain.resolve()));
    });

    group.finish();
}

/// Resolution cost as configured chains get deeper.
fn bench_chain_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_depth");
    let base = Decimal::new(10_000, 2);

    for depth in [1usize, 8, 64] {
        let stages: Vec<ModifierSpec> = ModifierSpec::default_chain()
            .into_iter()
            .cycle()
            .take(depth)
            .collect();
        let chain = build_chain(base, &stages);

        group.bench_with_input(BenchmarkId::from_parameter(depth), &chain, |b, chain| {
            b.iter(|| black_box(chain.resolve()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_static_vs_configured_chain, bench_chain_depth);
criterion_main!(benches);
