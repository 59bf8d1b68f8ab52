use std::fs::File;
use std::io::prelude::*;
use std::io;

use serde_json::Value;
use thiserror::Error;

use crate::engine::area::AreaGame;
use crate::engine::geometry::CellCoord;
use crate::engine::grid::Grid;
use crate::engine::lifecycle::{GameSummary, PlayerSummary};
use crate::engine::settings::{GridError, GridSpec};
use crate::engine::status::{GameState, PlayerState};
use crate::engine::team::Team;
use crate::engine::ModeKind;
use crate::session::SessionEvent;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read state: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse state: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid play area: {0}")]
    Grid(#[from] GridError),
    #[error("player {email} has unknown team code {code}")]
    UnknownTeam { email: String, code: i32 },
}

pub fn read_snapshot_from_file(filename: &str) -> Result<FullState, SnapshotError> {
    let mut file = File::open(filename)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    parse_snapshot(&content)
}

pub fn parse_snapshot(content: &str) -> Result<FullState, SnapshotError> {
    Ok(serde_json::from_str(content)?)
}

/// Reads a recorded event stream: one JSON object per line, either `{"location": {...}}`,
/// `{"resync": {...}}` or a raw server message. Blank lines are skipped.
pub fn read_events_from_file(filename: &str) -> Result<Vec<SessionEvent>, SnapshotError> {
    let mut file = File::open(filename)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    parse_events(&content)
}

pub fn parse_events(content: &str) -> Result<Vec<SessionEvent>, SnapshotError> {
    content.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_event)
        .collect()
}

pub fn parse_event(line: &str) -> Result<SessionEvent, SnapshotError> {
    let mut value: Value = serde_json::from_str(line)?;
    if let Some(location) = value.get_mut("location").map(Value::take) {
        return Ok(SessionEvent::Location(serde_json::from_value(location)?));
    }
    if let Some(snapshot) = value.get_mut("resync").map(Value::take) {
        return Ok(SessionEvent::Resync(serde_json::from_value(snapshot)?));
    }
    Ok(SessionEvent::Message(value))
}

pub fn read_game_summaries(content: &str) -> Result<Vec<GameSummary>, SnapshotError> {
    let games: Vec<GameRecord> = serde_json::from_str(content)?;
    games.iter().map(|g| g.to_engine()).collect()
}

/// The "full" update the server sends when a game view opens or a connection is re-established.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullState {
    #[serde(default)]
    pub mode: ModeKind,
    pub area_north: f64,
    pub area_east: f64,
    pub area_south: f64,
    pub area_west: f64,
    pub cell_size: i32,
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub email: String,
    pub team: i32,
    #[serde(default)]
    pub path: Vec<PathCell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathCell {
    pub x: i32,
    pub y: i32,
}

#[derive(Deserialize)]
struct GameRecord {
    #[serde(alias = "ID")]
    id: String,
    #[serde(default)]
    mode: ModeKind,
    owner: String,
    state: GameState,
    #[serde(default)]
    players: Vec<GamePlayerRecord>,
}

#[derive(Deserialize)]
struct GamePlayerRecord {
    email: String,
    team: i32,
    state: PlayerState,
}

impl FullState {
    pub fn grid_spec(&self) -> GridSpec {
        GridSpec::unchecked(self.area_north, self.area_east, self.area_south, self.area_west, self.cell_size)
    }

    pub fn player(&self, email: &str) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| p.email == email)
    }

    /// Builds the area game for `email`, replaying every player's confirmed path.
    /// A signed-in user missing from the player list watches as an observer.
    pub fn to_engine(&self, email: &str) -> Result<AreaGame, SnapshotError> {
        let grid = Grid::new(self.grid_spec())?;
        let team = match self.player(email) {
            Some(player) => player.to_team()?,
            None => Team::Observer,
        };

        let mut game = AreaGame::new(email, team, grid);
        for player in &self.players {
            let team = player.to_team()?;
            game.captures_mut().seed_path(&player.email, team, player.path.iter().map(|c| c.to_engine()));
        }
        Ok(game)
    }
}

impl PlayerRecord {
    fn to_team(&self) -> Result<Team, SnapshotError> {
        Team::from_code(self.team).ok_or_else(|| SnapshotError::UnknownTeam {
            email: self.email.clone(),
            code: self.team,
        })
    }
}

impl PathCell {
    fn to_engine(&self) -> CellCoord {
        CellCoord::new(self.x, self.y)
    }
}

impl GameRecord {
    fn to_engine(&self) -> Result<GameSummary, SnapshotError> {
        let players = self.players.iter()
            .map(|p| p.to_engine())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GameSummary {
            id: self.id.clone(),
            mode: self.mode,
            owner: self.owner.clone(),
            state: self.state,
            players,
        })
    }
}

impl GamePlayerRecord {
    fn to_engine(&self) -> Result<PlayerSummary, SnapshotError> {
        let team = Team::from_code(self.team).ok_or_else(|| SnapshotError::UnknownTeam {
            email: self.email.clone(),
            code: self.team,
        })?;
        Ok(PlayerSummary {
            email: self.email.clone(),
            team,
            state: self.state,
        })
    }
}
