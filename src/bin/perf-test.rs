extern crate time;
extern crate turfwar;
use time::{Duration, OffsetDateTime};

use turfwar::engine::grid::Grid;
use turfwar::engine::settings::GridSpec;
use turfwar::simulation::{self, WalkSettings};

use std::process;

const SESSIONS_PER_BATCH: u64 = 64;

fn main() {
    let start_time = OffsetDateTime::now_utc();
    let max_time = Duration::milliseconds(1950);

    // Roughly a 1.1km square campus split into 50m cells.
    let grid = match GridSpec::new(40.1150, -88.2200, 40.1050, -88.2330, 50).and_then(Grid::new) {
        Ok(grid) => grid,
        Err(error) => {
            println!("Error while building grid: {}", error);
            process::exit(1);
        }
    };
    let settings = WalkSettings { players: 8, steps: 200 };

    let mut sessions = 0;
    let mut captures = 0;
    let mut next_seed = 0;
    while OffsetDateTime::now_utc() - start_time < max_time {
        let seeds = (next_seed..next_seed + SESSIONS_PER_BATCH).collect::<Vec<_>>();
        next_seed += SESSIONS_PER_BATCH;
        match simulation::simulate_walks(&grid, &settings, &seeds) {
            Ok(results) => {
                sessions += results.len() as u64;
                captures += results.iter().map(|r| r.captures as u64).sum::<u64>();
            }
            Err(error) => {
                println!("Error while simulating: {}", error);
                process::exit(1);
            }
        }
    }

    let elapsed = OffsetDateTime::now_utc() - start_time;
    println!("Grid: {}x{}", grid.cells_x(), grid.cells_y());
    println!("Sessions: {}", sessions);
    println!("Captures: {}", captures);
    #[cfg(feature = "benchmarking")]
    {
        let seconds = elapsed.as_seconds_f64();
        println!("Sessions per second: {:.1}", sessions as f64 / seconds);
    }
    println!("Elapsed time: {}ms", elapsed.whole_milliseconds());
}
