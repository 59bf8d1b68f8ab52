#[macro_use]
extern crate criterion;
use criterion::{BenchmarkId, Criterion};

extern crate turfwar;
use turfwar::engine::capture::CaptureStateMachine;
use turfwar::engine::geometry::{CellCoord, LatLng};
use turfwar::engine::grid::{Grid, GridDimensions};
use turfwar::engine::settings::GridSpec;
use turfwar::engine::team::Team;
use turfwar::simulation::{simulate_walk, WalkSettings};

extern crate rand;
use rand::{thread_rng, Rng};

fn create_example_grid(cell_size: i32) -> Grid {
    let spec = GridSpec::new(40.1150, -88.2200, 40.1050, -88.2330, cell_size).unwrap();
    Grid::new(spec).unwrap()
}

fn random_points(grid: &Grid, count: usize) -> Vec<LatLng> {
    let spec = grid.spec();
    let mut rng = thread_rng();
    (0..count)
        .map(|_| LatLng::new(rng.gen_range(spec.south..spec.north), rng.gen_range(spec.west..spec.east)))
        .collect()
}

fn partition_benchmark(c: &mut Criterion) {
    let spec = *create_example_grid(50).spec();
    c.bench_function("grid dimensions", move |b| b.iter(|| GridDimensions::of(&spec)));
}

fn indexing_benchmark(c: &mut Criterion) {
    let grid = create_example_grid(50);
    let points = random_points(&grid, 1000);
    c.bench_function("index 1000 points", move |b| {
        b.iter(|| points.iter().filter_map(|p| grid.cell_at(*p)).count())
    });
}

fn capture_benchmark(c: &mut Criterion) {
    let grid = create_example_grid(10);
    let path = (0..grid.cells_x() as i32).map(|x| CellCoord::new(x, 0)).collect::<Vec<_>>();
    c.bench_function("capture a full row", move |b| {
        b.iter(|| {
            let mut captures = CaptureStateMachine::new(grid);
            for cell in &path {
                if captures.attempt_local_capture("bench@example.com", *cell, Team::Red).is_accepted() {
                    captures.apply_authoritative_capture("bench@example.com", *cell, Team::Red);
                }
            }
            captures.score_of(Team::Red)
        })
    });
}

fn walk_benchmark_against_number_of_players(c: &mut Criterion) {
    let grid = create_example_grid(50);
    let mut group = c.benchmark_group("random walk players");
    for players in [1usize, 2, 4, 8, 16].iter() {
        let settings = WalkSettings { players: *players, steps: 100 };
        group.bench_with_input(BenchmarkId::from_parameter(players), &settings, |b, settings| {
            b.iter(|| simulate_walk(&grid, settings, 7).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches,
                 partition_benchmark,
                 indexing_benchmark,
                 capture_benchmark,
                 walk_benchmark_against_number_of_players);
criterion_main!(benches);
