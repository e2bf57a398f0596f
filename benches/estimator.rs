use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use cropyield::yield_model::{Crop, Inputs, Soil, estimate};

fn slider_grid() -> Vec<Inputs> {
    let mut grid = Vec::new();
    for crop in Crop::ALL {
        for soil in Soil::ALL {
            for rainfall in (300..=1000).step_by(50) {
                for temperature in (15..=35).step_by(2) {
                    for fertilizer in (50..=200).step_by(25) {
                        grid.push(Inputs::new(
                            crop,
                            soil,
                            f64::from(rainfall),
                            f64::from(temperature),
                            f64::from(fertilizer),
                        ));
                    }
                }
            }
        }
    }
    grid
}

fn bench_estimate_grid(c: &mut Criterion) {
    let grid = slider_grid();
    c.bench_with_input(
        BenchmarkId::new("estimate_grid", grid.len()),
        &grid,
        |b, grid| {
            b.iter(|| {
                grid.iter()
                    .map(|inputs| estimate(black_box(inputs)))
                    .sum::<f64>()
            });
        },
    );
}

criterion_group!(benches, bench_estimate_grid);
criterion_main!(benches);
