//! MCTS benchmarks for performance profiling.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure:
//! - Full `update` calls with varying simulation counts
//! - Playouts from an empty board
//! - Expansion and distribution extraction on a grown tree

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use onpolicy_mcts::actor::RandomActor;
use onpolicy_mcts::core::PlayerId;
use onpolicy_mcts::games::hex::HexState;
use onpolicy_mcts::mcts::{MctsSearch, MctsTree, SearchParameters};
use onpolicy_mcts::nn::{HexEncoder, PolicyActor, UniformPolicy};

// =============================================================================
// Full Search Benchmarks
// =============================================================================

fn bench_update_simulations(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_simulations");

    for sims in [100u32, 400, 1600] {
        group.throughput(Throughput::Elements(u64::from(sims)));
        group.bench_with_input(BenchmarkId::new("hex5", sims), &sims, |b, &sims| {
            b.iter(|| {
                let mut search = MctsSearch::new(RandomActor, SearchParameters::default()).unwrap();
                let mut tree = MctsTree::new(HexState::new(5, PlayerId::FIRST));
                let root = tree.root();
                black_box(search.update(&mut tree, root, sims, PlayerId::FIRST).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_policy_actor_search(c: &mut Criterion) {
    c.bench_function("update_policy_actor_hex5_400", |b| {
        b.iter(|| {
            let actor = PolicyActor::new(UniformPolicy::new(25), HexEncoder::new(5));
            let mut search = MctsSearch::new(actor, SearchParameters::default()).unwrap();
            let mut tree = MctsTree::new(HexState::new(5, PlayerId::FIRST));
            let root = tree.root();
            black_box(search.update(&mut tree, root, 400, PlayerId::FIRST).unwrap())
        });
    });
}

// =============================================================================
// Component Benchmarks
// =============================================================================

fn bench_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("playout");

    for size in [5usize, 7, 11] {
        group.bench_with_input(BenchmarkId::new("hex", size), &size, |b, &size| {
            let mut search = MctsSearch::new(RandomActor, SearchParameters::default()).unwrap();
            let state = HexState::new(size, PlayerId::FIRST);
            b.iter(|| black_box(search.evaluate(&state).unwrap()));
        });
    }

    group.finish();
}

fn bench_distribution(c: &mut Criterion) {
    let mut search = MctsSearch::new(RandomActor, SearchParameters::default()).unwrap();
    let mut tree = MctsTree::new(HexState::new(7, PlayerId::FIRST));
    let root = tree.root();
    search.update(&mut tree, root, 2000, PlayerId::FIRST).unwrap();

    c.bench_function("dense_distribution_hex7", |b| {
        b.iter(|| black_box(tree.dense_distribution(root, 7).unwrap()));
    });

    c.bench_function("tree_search_hex7", |b| {
        b.iter(|| black_box(search.tree_search(&tree, root, PlayerId::FIRST)));
    });
}

criterion_group!(
    benches,
    bench_update_simulations,
    bench_policy_actor_search,
    bench_playout,
    bench_distribution,
);
criterion_main!(benches);
