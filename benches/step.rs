//! Benchmarks for the flow engine tick.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use gridflow::{
    compute::{FlowEngine, Grid},
    schema::{FlowConfig, Pattern, Seed, SimulationConfig},
};

fn bench_engine_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_step");

    for size in [32, 64, 128, 256] {
        let config = SimulationConfig {
            rows: size,
            cols: size,
            cell_size: 20.0,
            flow: FlowConfig::default(),
        };

        let seed = Seed {
            pattern: Pattern::Noise {
                amplitude: 1.0,
                seed: 7,
            },
        };

        let mut grid = Grid::from_seed(&seed, &config);
        let mut engine = FlowEngine::new(config);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| {
                    engine.step(black_box(&mut grid));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_engine_step);
criterion_main!(benches);
