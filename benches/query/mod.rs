use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use stabix::IntervalIndex;

use crate::{intervals, Lfsr};

/// Number of queries issued per benchmark iteration.
const N_LOOKUPS: usize = 1_000;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("query");

    for n_values in [100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<M>, n_values: usize)
where
    M: Measurement,
{
    let t = IntervalIndex::build(intervals(n_values));

    bench_stab(n_values, g, &t);
    bench_range(n_values, g, &t);
    bench_contains(n_values, g, &t);
    bench_for_each_at(n_values, g, &t);
}

macro_rules! query_bench {
    (
        $name:ident,
        |$t:ident, $a:ident, $b:ident| $query:expr
    ) => {
        paste::paste! {
            fn [<bench_ $name>]<M>(n_values: usize, g: &mut BenchmarkGroup<M>, $t: &IntervalIndex<u16>)
            where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: stringify!($name),
                };

                g.throughput(Throughput::Elements(N_LOOKUPS as _)); // Lookups per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter_batched(
                        Lfsr::default,
                        |mut rand| {
                            for _ in 0..N_LOOKUPS {
                                let $a = i64::from(rand.next());
                                let $b = $a + i64::from(rand.next() % 512);
                                black_box($query);
                            }
                        },
                        criterion::BatchSize::SmallInput,
                    )
                });
            }
        }
    };
}

query_bench!(stab, |t, point, _unused| t.stab(point).items().len());
query_bench!(range, |t, lo, hi| t.range(lo, hi).items().len());
query_bench!(contains, |t, point, _unused| t.contains(point));
query_bench!(for_each_at, |t, point, _unused| {
    let mut n = 0_usize;
    t.for_each_at(point, |_| {
        n += 1;
        std::ops::ControlFlow::Continue(())
    });
    n
});
