use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(not(feature = "single-threaded"))]
use rayon::prelude::*;

use crate::engine::area::AreaGame;
use crate::engine::capture::{CaptureApplied, CaptureStateMachine};
use crate::engine::command::Command;
use crate::engine::geometry::{CellCoord, LatLng};
use crate::engine::grid::Grid;
use crate::engine::team::Team;
use crate::engine::GameMode;
use crate::sync::{PlayerCellCapture, SyncError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkSettings {
    pub players: usize,
    pub steps: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkResult {
    pub seed: u64,
    pub requests: u32,
    pub captures: u32,
    pub scores: Vec<(Team, u32)>,
    pub winner: Team,
}

struct Walker {
    game: AreaGame,
    position: CellCoord,
    outbox: Vec<Command>,
}

/// Plays one game with `settings.players` random walkers against a simulated server that
/// checks each request and broadcasts the captures it accepts to every client.
pub fn simulate_walk(grid: &Grid, settings: &WalkSettings, seed: u64) -> Result<WalkResult, SyncError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut server = CaptureStateMachine::new(*grid);
    let teams = Team::playing();

    let mut walkers = (0..settings.players)
        .map(|i| Walker {
            game: AreaGame::new(&format!("player{}@example.com", i), teams[i % teams.len()], *grid),
            position: random_cell(grid, &mut rng),
            outbox: Vec::new(),
        })
        .collect::<Vec<_>>();

    let mut requests = 0;
    let mut captures = 0;

    for _ in 0..settings.steps {
        for i in 0..walkers.len() {
            let location = random_point_in(grid, walkers[i].position, &mut rng);
            let walker = &mut walkers[i];
            walker.game.location_updated(location, &mut walker.outbox)?;

            let email = walker.game.email().to_string();
            let team = walker.game.team();
            let requested = walker.outbox.drain(..).collect::<Vec<_>>();
            requests += requested.len() as u32;

            for Command::CellCapture { x, y } in requested {
                let cell = CellCoord::new(x, y);
                if !server.attempt_local_capture(&email, cell, team).is_accepted() {
                    continue;
                }
                if server.apply_authoritative_capture(&email, cell, team) == CaptureApplied::Applied {
                    captures += 1;
                    let broadcast = PlayerCellCapture { email: email.clone(), team, cell };
                    for client in walkers.iter_mut() {
                        client.game.apply_capture(&broadcast);
                    }
                }
            }

            walkers[i].position = random_step(grid, walkers[i].position, &mut rng);
        }
    }

    Ok(WalkResult {
        seed,
        requests,
        captures,
        scores: teams.iter().map(|t| (*t, server.score_of(*t))).collect(),
        winner: server.winning_team(),
    })
}

pub fn simulate_walks(grid: &Grid, settings: &WalkSettings, seeds: &[u64]) -> Result<Vec<WalkResult>, SyncError> {
    #[cfg(feature = "single-threaded")]
    {
        seeds.iter().map(|seed| simulate_walk(grid, settings, *seed)).collect()
    }
    #[cfg(not(feature = "single-threaded"))]
    {
        seeds.par_iter().map(|seed| simulate_walk(grid, settings, *seed)).collect()
    }
}

fn random_cell<R: Rng>(grid: &Grid, rng: &mut R) -> CellCoord {
    CellCoord::new(
        rng.gen_range(0..grid.cells_x()) as i32,
        rng.gen_range(0..grid.cells_y()) as i32,
    )
}

fn random_step<R: Rng>(grid: &Grid, from: CellCoord, rng: &mut R) -> CellCoord {
    let options = from.neighbours()
        .into_iter()
        .filter(|c| grid.contains(*c))
        .collect::<Vec<_>>();
    if options.is_empty() {
        from
    } else {
        options[rng.gen_range(0..options.len())]
    }
}

// Keeps clear of the cell's edges so the point never lands on a grid line.
fn random_point_in<R: Rng>(grid: &Grid, cell: CellCoord, rng: &mut R) -> LatLng {
    match grid.cell_bounds(cell) {
        Some(bounds) => {
            let sw = bounds.south_west;
            let ne = bounds.north_east;
            LatLng::new(
                sw.latitude + (ne.latitude - sw.latitude) * rng.gen_range(0.1..0.9),
                sw.longitude + (ne.longitude - sw.longitude) * rng.gen_range(0.1..0.9),
            )
        }
        None => LatLng::new(grid.spec().south, grid.spec().west),
    }
}
