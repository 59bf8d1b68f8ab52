extern crate turfwar;

use turfwar::config::{ReplayConfig, COMMANDS_PATH};
use turfwar::engine::grid::Grid;
use turfwar::engine::settings::GridSpec;
use turfwar::engine::team::Team;
use turfwar::simulation::{simulate_walk, simulate_walks, WalkSettings};

fn campus() -> Grid {
    Grid::new(GridSpec::new(40.1150, -88.2200, 40.1050, -88.2330, 100).unwrap()).unwrap()
}

#[test]
fn walks_are_reproducible_per_seed() {
    let grid = campus();
    let settings = WalkSettings { players: 4, steps: 50 };
    assert_eq!(simulate_walk(&grid, &settings, 11).unwrap(), simulate_walk(&grid, &settings, 11).unwrap());
}

#[test]
fn every_capture_is_scored_exactly_once() {
    let grid = campus();
    let settings = WalkSettings { players: 6, steps: 80 };
    for result in simulate_walks(&grid, &settings, &[1, 2, 3, 4]).unwrap() {
        let total = result.scores.iter().map(|(_, score)| *score).sum::<u32>();
        assert_eq!(result.captures, total);
        assert!(result.captures <= result.requests);
        assert!(result.captures > 0);
        assert_ne!(result.winner, Team::Observer);
    }
}

#[test]
fn walks_keep_seed_order() {
    let grid = campus();
    let settings = WalkSettings { players: 2, steps: 10 };
    let seeds = [9, 3, 5];
    let results = simulate_walks(&grid, &settings, &seeds).unwrap();
    assert_eq!(results.iter().map(|r| r.seed).collect::<Vec<_>>(), seeds.to_vec());
}

#[test]
fn nobody_walking_means_nobody_wins() {
    let result = simulate_walk(&campus(), &WalkSettings { players: 0, steps: 10 }, 1).unwrap();
    assert_eq!(result.requests, 0);
    assert_eq!(result.winner, Team::Observer);
}

#[test]
fn replay_config_reads_overrides() {
    let config = ReplayConfig::default().with_overrides(|key| match key {
        "TURFWAR_STATE" => Some("snap.json".to_string()),
        "TURFWAR_EMAIL" => Some("me@example.com".to_string()),
        _ => None,
    });
    assert_eq!(config.state_path, "snap.json");
    assert_eq!(config.email, "me@example.com");
    assert_eq!(config.commands_path, COMMANDS_PATH);
}
