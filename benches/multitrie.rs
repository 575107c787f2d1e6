use multitrie::trie::{Mode, Trie};

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{distributions::Uniform, thread_rng, Rng};

static POPULATION_SIZE: usize = 1000;

// Random paths of 1..=max_len segments, each segment in 0..fanout
fn make_paths(max_len: usize, fanout: u32) -> Vec<Vec<u32>> {
    let mut rng = thread_rng();
    let segments = Uniform::new(0, fanout);
    (0..POPULATION_SIZE)
        .map(|_| {
            let len = rng.gen_range(1..=max_len);
            (&mut rng).sample_iter(segments).take(len).collect()
        })
        .collect()
}

fn make_trie(paths: &[Vec<u32>]) -> Trie<u32, usize> {
    let mut trie = Trie::new();
    for (i, path) in paths.iter().enumerate() {
        trie.insert(path.iter().copied(), i);
    }
    trie
}

fn trie_insert(c: &mut Criterion) {
    let paths = make_paths(16, 8);
    c.bench_function("trie insert", |b| b.iter(|| make_trie(&paths)));
    c.bench_function("trie insert_no_overwrite", |b| {
        b.iter(|| {
            let mut trie = Trie::new();
            for (i, path) in paths.iter().enumerate() {
                let _ = trie.insert_no_overwrite(path.iter().copied(), i);
            }
            trie
        })
    });
}

fn trie_get(c: &mut Criterion) {
    let paths = make_paths(16, 8);
    let trie = make_trie(&paths);
    c.bench_function("trie get", |b| {
        b.iter(|| {
            paths
                .iter()
                .map(|p| trie.get_value(p))
                .collect::<Vec<Option<&usize>>>()
        })
    });
    c.bench_function("trie search exact", |b| {
        b.iter(|| paths.iter().filter(|p| trie.search(Mode::Exact, *p)).count())
    });
}

fn trie_remove(c: &mut Criterion) {
    let paths = make_paths(16, 8);
    c.bench_function("trie remove", |b| {
        b.iter_batched(
            || make_trie(&paths),
            |mut trie| {
                for p in &paths {
                    trie.remove(p);
                }
                trie
            },
            BatchSize::SmallInput,
        )
    });
}

fn predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("predict");
    for fanout in [2u32, 4, 8, 16, 32] {
        let paths = make_paths(8, fanout);
        let trie = make_trie(&paths);
        group.throughput(Throughput::Elements(trie.collect_all().len() as u64));
        group.bench_with_input(BenchmarkId::new("prefix (whole trie)", fanout), &trie, |b, trie| {
            b.iter(|| trie.predict(Mode::Prefix, Vec::<u32>::new()))
        });
        group.bench_with_input(BenchmarkId::new("exact (whole trie)", fanout), &trie, |b, trie| {
            b.iter(|| trie.predict(Mode::Exact, Vec::<u32>::new()))
        });
        group.bench_with_input(BenchmarkId::new("iterate", fanout), &trie, |b, trie| {
            b.iter(|| trie.iter().count())
        });
    }
    group.finish();
}

criterion_group!(benches, trie_insert, trie_get, trie_remove, predict);
criterion_main!(benches);
