use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rebind::config::profile::default_keyboard_map;
use rebind::core::KeyMap;
use rebind::core::reconcile;
use std::hint::black_box;

// Helper to build a pool of distinct identifiers
fn identifiers(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Key{i}")).collect()
}

// Helper to build a map with every identifier already assigned round-robin
fn populated_map(ids: &[String]) -> KeyMap {
    let mut map = KeyMap::new();
    for (i, id) in ids.iter().enumerate() {
        reconcile::assign(&mut map, id, i % map.row_count());
    }
    map
}

/// Assign churn: every identifier moves to a different row, forcing the
/// full donor-scan and removal path on each call.
fn bench_assign_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile_assign");

    for count in [8usize, 64, 256] {
        let ids = identifiers(count);
        group.bench_with_input(BenchmarkId::new("move_all", count), &ids, |b, ids| {
            b.iter(|| {
                let mut map = populated_map(ids);
                for (i, id) in ids.iter().enumerate() {
                    reconcile::assign(&mut map, black_box(id), (i + 3) % map.row_count());
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

/// Idempotent re-assignment: the target row already owns the key, so
/// every call should terminate at the early-out.
fn bench_assign_idempotent(c: &mut Criterion) {
    let ids = identifiers(64);

    c.bench_function("reconcile_assign/idempotent", |b| {
        let mut map = populated_map(&ids);
        b.iter(|| {
            for (i, id) in ids.iter().enumerate() {
                reconcile::assign(&mut map, black_box(id), i % map.row_count());
            }
        });
    });
}

/// Snapshot cost of a realistically sized map
fn bench_snapshot(c: &mut Criterion) {
    let map = default_keyboard_map();

    c.bench_function("keymap/snapshot", |b| {
        b.iter(|| black_box(map.clone()));
    });
}

criterion_group!(
    benches,
    bench_assign_churn,
    bench_assign_idempotent,
    bench_snapshot
);
criterion_main!(benches);
