use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use cashflow_actions::{ActionRegistry, ActionType};

fn bench_forward_lookup(c: &mut Criterion) {
    let registry = ActionRegistry::global();
    let mut group = c.benchmark_group("forward_lookup");
    group.throughput(Throughput::Elements(ActionType::COUNT as u64));

    group.bench_function("as_str", |b| {
        b.iter(|| {
            for kind in ActionType::ALL {
                black_box(black_box(kind).as_str());
            }
        });
    });

    group.bench_function("registry_value", |b| {
        b.iter(|| {
            for kind in ActionType::ALL {
                black_box(registry.value(black_box(kind)));
            }
        });
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let registry = ActionRegistry::global();
    let mut group = c.benchmark_group("resolve");

    for token in ["LOAD_USER", "NEW_EXPENSE_SUBMIT_FAIL", "LOAD_EXPENSE_COMMENTS_SUCCESS"] {
        group.bench_with_input(BenchmarkId::new("known", token), token, |b, token| {
            b.iter(|| registry.resolve(black_box(token)));
        });
    }

    group.bench_function("serde_json", |b| {
        b.iter(|| serde_json::from_str::<ActionType>(black_box("\"LOAD_COST_CENTRES_FAIL\"")));
    });

    group.finish();
}

criterion_group!(benches, bench_forward_lookup, bench_resolve);
criterion_main!(benches);
