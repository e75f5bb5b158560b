use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use stabix::IntervalIndex;

use crate::intervals;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new("n_values", v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("build");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

/// Measure the time needed to build an index over `n_values` randomly
/// generated intervals.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let values = intervals(n_values);

    let bench_name = BenchName { n_values };
    g.throughput(Throughput::Elements(n_values as _)); // Intervals indexed per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || values.clone(),
            IntervalIndex::build,
            criterion::BatchSize::LargeInput,
        );
    });
}
