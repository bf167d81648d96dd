use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gbf::config::GBFConfig;
use gbf::opt::GBFOptimizer;
use glasscut::entities::Piece;
use glasscut::fsize;

criterion_main!(benches);
criterion_group!(benches, optimize_bench);

const N_DEMAND_LINES: [usize; 3] = [10, 50, 200];

fn create_demand(n_lines: usize) -> Vec<Piece> {
    (0..n_lines)
        .filter_map(|i| {
            let w = 150.0 + ((i * 137) % 1600) as fsize;
            let h = 100.0 + ((i * 251) % 1200) as fsize;
            Piece::try_new(w, h, 1 + i % 4).ok()
        })
        .collect()
}

/// Time to compute a full cutting plan for a growing number of demand lines
fn optimize_bench(c: &mut Criterion) {
    let optimizer = GBFOptimizer::new(GBFConfig::default()).expect("default catalog is valid");

    let mut group = c.benchmark_group("gbf_optimize_cl6");
    for n_lines in N_DEMAND_LINES {
        let demand = create_demand(n_lines);
        group.bench_function(BenchmarkId::from_parameter(n_lines), |b| {
            b.iter(|| optimizer.optimize("CL6", &demand).expect("demand fits CL6"))
        });
    }
    group.finish();
}
