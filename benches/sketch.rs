#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::hash::{BuildHasherDefault, Hash};

use cardinality_sketch::{LogLogBeta, Sketch, SketchConfig};
use criterion::measurement::WallTime;
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};
use hyperloglogplus::HyperLogLog as HyperLogLogTrait;
use pprof::criterion::{Output, PProfProfiler};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tabled::settings::{Settings, Style};
use tabled::{Table, Tabled};
use wyhash::WyHash;

/// Insert, estimate and merge operations are benchmarked against cardinalities ranging from 0 to
/// `DEFAULT_MAX_CARDINALITY` or environment variable `N` (if defined) with cardinality doubled
/// with every iteration as [0, 1, 2, ..., N].
const DEFAULT_MAX_CARDINALITY: usize = 256;

/// Precision shared by all benchmarked sketches
const PRECISION: u8 = 12;

criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Protobuf));
    targets = benchmark
}
criterion_main!(benches);

fn benchmark(c: &mut Criterion) {
    let bench_results_path = std::env::var("BENCH_RESULTS_PATH")
        .unwrap_or_else(|_| format!("{}/target", env!("CARGO_MANIFEST_DIR")));
    let max_cardinality = std::env::var("N")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_CARDINALITY);

    let cardinalities: Vec<usize> = std::iter::once(0)
        .chain((0..).map(|c| 1 << c))
        .take_while(|&c| c <= max_cardinality)
        .collect();

    let mut group = c.benchmark_group("insert");
    for &cardinality in &cardinalities {
        group.throughput(Throughput::Elements(cardinality.max(1) as u64));
        bench_insert::<SparseSketch>(&mut group, cardinality);
        bench_insert::<DenseSketch>(&mut group, cardinality);
        bench_insert::<HyperLogLogPlus>(&mut group, cardinality);
    }
    group.finish();

    let mut group = c.benchmark_group("estimate");
    group.throughput(Throughput::Elements(1));
    for &cardinality in &cardinalities {
        bench_estimate::<SparseSketch>(&mut group, cardinality);
        bench_estimate::<DenseSketch>(&mut group, cardinality);
        bench_estimate::<LogLogBetaSketch>(&mut group, cardinality);
        bench_estimate::<HyperLogLogPlus>(&mut group, cardinality);
    }
    group.finish();

    let mut group = c.benchmark_group("merge");
    group.throughput(Throughput::Elements(1));
    for &cardinality in &cardinalities {
        bench_merge::<SparseSketch>(&mut group, cardinality);
        bench_merge::<DenseSketch>(&mut group, cardinality);
        bench_merge::<HyperLogLogPlus>(&mut group, cardinality);
    }
    group.finish();

    let results: Vec<StatRecord> = cardinalities
        .iter()
        .map(|&cardinality| StatRecord {
            cardinality,
            sketch_sparse: measure_allocations::<SparseSketch>(cardinality),
            sketch_dense: measure_allocations::<DenseSketch>(cardinality),
            sketch_loglog_beta: measure_allocations::<LogLogBetaSketch>(cardinality),
            hyperloglogplus: measure_allocations::<HyperLogLogPlus>(cardinality),
        })
        .collect();

    let table_config = Settings::default().with(Style::markdown());
    std::fs::write(
        format!("{}/memory_usage.md", bench_results_path),
        Table::new(results).with(table_config).to_string(),
    )
    .unwrap();

    let results: Vec<StatRecord> = cardinalities
        .iter()
        .map(|&cardinality| StatRecord {
            cardinality,
            sketch_sparse: measure_error::<SparseSketch>(cardinality),
            sketch_dense: measure_error::<DenseSketch>(cardinality),
            sketch_loglog_beta: measure_error::<LogLogBetaSketch>(cardinality),
            hyperloglogplus: measure_error::<HyperLogLogPlus>(cardinality),
        })
        .collect();

    let table_config = Settings::default().with(Style::markdown());
    std::fs::write(
        format!("{}/relative_error.md", bench_results_path),
        Table::new(results).with(table_config).to_string(),
    )
    .unwrap();
}

/// Common operations of benchmarked sketches.
trait SketchTrait<T: Hash + ?Sized> {
    fn new() -> Self;
    fn insert(&mut self, item: &T);
    fn estimate(&mut self) -> usize;
    fn merge(&mut self, rhs: &Self);
    fn name() -> String;
}

fn bench_insert<E: SketchTrait<usize>>(group: &mut BenchmarkGroup<WallTime>, cardinality: usize) {
    group.bench_with_input(
        BenchmarkId::new(E::name(), cardinality),
        &cardinality,
        |b, &cardinality| {
            b.iter(|| {
                let mut sketch = E::new();
                for i in 0..black_box(cardinality) {
                    sketch.insert(black_box(&i));
                }
            });
        },
    );
}

fn bench_estimate<E: SketchTrait<usize>>(group: &mut BenchmarkGroup<WallTime>, cardinality: usize) {
    group.bench_with_input(
        BenchmarkId::new(E::name(), cardinality),
        &cardinality,
        |b, &cardinality| {
            let mut sketch = E::new();
            for i in 0..black_box(cardinality) {
                sketch.insert(black_box(&i));
            }
            b.iter(|| sketch.estimate());
        },
    );
}

fn bench_merge<E: SketchTrait<usize>>(group: &mut BenchmarkGroup<WallTime>, cardinality: usize) {
    group.bench_with_input(
        BenchmarkId::new(E::name(), cardinality),
        &cardinality,
        |b, &cardinality| {
            let mut rhs = E::new();
            for i in 0..black_box(cardinality) {
                rhs.insert(black_box(&i));
            }
            b.iter(|| {
                let mut lhs = E::new();
                lhs.merge(black_box(&rhs));
            });
        },
    );
}

fn measure_allocations<E: SketchTrait<usize>>(cardinality: usize) -> String {
    let _profiler = dhat::Profiler::builder().testing().build();
    let mut sketch = E::new();
    for i in 0..cardinality {
        sketch.insert(&i);
    }
    let stats = dhat::HeapStats::get();
    format!(
        "{} / {} / {}",
        std::mem::size_of::<E>(),
        stats.total_bytes,
        stats.total_blocks,
    )
}

fn measure_error<E: SketchTrait<usize>>(cardinality: usize) -> String {
    let n = 100;
    let mut total_relative_error: f64 = 0.0;
    let mut rng = StdRng::seed_from_u64(12345);
    for _ in 0..n {
        let mut sketch = E::new();
        for _ in 0..cardinality {
            sketch.insert(&rng.gen());
        }
        let relative_error = if cardinality == 0 {
            0.0
        } else {
            (sketch.estimate() as f64 - cardinality as f64).abs() / cardinality as f64
        };
        total_relative_error += relative_error;
    }
    let avg_relative_error = total_relative_error / (n as f64);

    if avg_relative_error < 1.0 {
        format!("{:.4}", avg_relative_error)
    } else {
        format!("{:.2e}", avg_relative_error)
    }
}

#[derive(Tabled)]
struct StatRecord {
    cardinality: usize,
    sketch_sparse: String,
    sketch_dense: String,
    sketch_loglog_beta: String,
    hyperloglogplus: String,
}

fn sketch_with(config: SketchConfig) -> Sketch {
    Sketch::with_config(config.with_precision(PRECISION)).unwrap()
}

struct SparseSketch(Sketch);

impl SketchTrait<usize> for SparseSketch {
    fn new() -> Self {
        Self(sketch_with(SketchConfig::default()))
    }

    fn insert(&mut self, item: &usize) {
        self.0.insert_item(item);
    }

    fn estimate(&mut self) -> usize {
        self.0.estimate() as usize
    }

    fn merge(&mut self, rhs: &Self) {
        self.0.merge(&rhs.0).unwrap();
    }

    fn name() -> String {
        "sketch-sparse".to_string()
    }
}

struct DenseSketch(Sketch);

impl SketchTrait<usize> for DenseSketch {
    fn new() -> Self {
        Self(sketch_with(SketchConfig::default().with_sparse(false)))
    }

    fn insert(&mut self, item: &usize) {
        self.0.insert_item(item);
    }

    fn estimate(&mut self) -> usize {
        self.0.estimate() as usize
    }

    fn merge(&mut self, rhs: &Self) {
        self.0.merge(&rhs.0).unwrap();
    }

    fn name() -> String {
        "sketch-dense".to_string()
    }
}

struct LogLogBetaSketch(Sketch);

impl SketchTrait<usize> for LogLogBetaSketch {
    fn new() -> Self {
        Self(sketch_with(
            SketchConfig::default()
                .with_sparse(false)
                .with_estimator(LogLogBeta),
        ))
    }

    fn insert(&mut self, item: &usize) {
        self.0.insert_item(item);
    }

    fn estimate(&mut self) -> usize {
        self.0.estimate() as usize
    }

    fn merge(&mut self, rhs: &Self) {
        self.0.merge(&rhs.0).unwrap();
    }

    fn name() -> String {
        "sketch-loglog-beta".to_string()
    }
}

struct HyperLogLogPlus(hyperloglogplus::HyperLogLogPlus<usize, BuildHasherDefault<WyHash>>);

impl SketchTrait<usize> for HyperLogLogPlus {
    fn new() -> Self {
        Self(
            hyperloglogplus::HyperLogLogPlus::new(PRECISION, BuildHasherDefault::<WyHash>::default())
                .unwrap(),
        )
    }

    fn insert(&mut self, item: &usize) {
        self.0.insert(item);
    }

    fn estimate(&mut self) -> usize {
        self.0.count() as usize
    }

    fn merge(&mut self, rhs: &Self) {
        self.0.merge(&rhs.0).unwrap();
    }

    fn name() -> String {
        "hyperloglogplus".to_string()
    }
}
