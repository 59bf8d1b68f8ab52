use std::collections::HashMap;

use arrayvec::ArrayVec;
use tracing::{debug, trace, warn};

use super::constants::MAX_NEIGHBOURS;
use super::geometry::CellCoord;
use super::grid::Grid;
use super::team::{Scoreboard, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureAttempt {
    Accepted,
    RejectedAlreadyOwned,
    RejectedNotAdjacent,
    RejectedOutOfBounds,
    RejectedNotPlaying,
}

impl CaptureAttempt {
    pub fn is_accepted(&self) -> bool {
        *self == CaptureAttempt::Accepted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureApplied {
    Applied,
    Ignored,
}

/// Cell ownership, per-player capture paths and team scores for one game.
///
/// Only [`apply_authoritative_capture`](CaptureStateMachine::apply_authoritative_capture)
/// changes state. Local attempts are a pre-check that saves a round trip when the
/// server would refuse anyway; they never grant ownership.
#[derive(Debug, Clone)]
pub struct CaptureStateMachine {
    grid: Grid,
    ownership: HashMap<CellCoord, Team>,
    histories: HashMap<String, Vec<CellCoord>>,
    scores: Scoreboard,
}

impl CaptureStateMachine {
    pub fn new(grid: Grid) -> CaptureStateMachine {
        CaptureStateMachine {
            grid,
            ownership: HashMap::new(),
            histories: HashMap::new(),
            scores: Scoreboard::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn attempt_local_capture(&self, email: &str, coord: CellCoord, team: Team) -> CaptureAttempt {
        let attempt = self.check_capture(email, coord, team);
        match attempt {
            CaptureAttempt::Accepted => debug!(email, cell = %coord, team = %team, "capture attempt accepted"),
            rejected => trace!(email, cell = %coord, reason = ?rejected, "capture attempt rejected"),
        }
        attempt
    }

    fn check_capture(&self, email: &str, coord: CellCoord, team: Team) -> CaptureAttempt {
        if !team.plays() {
            return CaptureAttempt::RejectedNotPlaying;
        }
        if !self.grid.contains(coord) {
            return CaptureAttempt::RejectedOutOfBounds;
        }
        if self.ownership.contains_key(&coord) {
            return CaptureAttempt::RejectedAlreadyOwned;
        }
        match self.last_capture_of(email) {
            None => CaptureAttempt::Accepted,
            Some(anchor) if anchor.is_adjacent(&coord) => CaptureAttempt::Accepted,
            Some(_) => CaptureAttempt::RejectedNotAdjacent,
        }
    }

    /// Applies a server-confirmed capture. Adjacency is not re-checked here.
    pub fn apply_authoritative_capture(&mut self, email: &str, coord: CellCoord, team: Team) -> CaptureApplied {
        if !team.plays() {
            warn!(email, cell = %coord, "ignoring capture credited to the observer team");
            return CaptureApplied::Ignored;
        }
        if !self.grid.contains(coord) {
            warn!(email, cell = %coord, "ignoring capture outside the grid");
            return CaptureApplied::Ignored;
        }
        if self.ownership.contains_key(&coord) {
            trace!(email, cell = %coord, "cell already owned, capture ignored");
            return CaptureApplied::Ignored;
        }

        self.ownership.insert(coord, team);
        self.scores.increment(team);
        self.histories.entry(email.to_string()).or_default().push(coord);
        debug!(email, cell = %coord, team = %team, score = self.scores.get(team), "capture applied");
        CaptureApplied::Applied
    }

    /// Loads a player's already-confirmed path from a full-state snapshot, in capture order.
    pub fn seed_path<I>(&mut self, email: &str, team: Team, path: I) -> usize
    where
        I: IntoIterator<Item = CellCoord>,
    {
        path.into_iter()
            .map(|coord| self.apply_authoritative_capture(email, coord, team))
            .filter(|applied| *applied == CaptureApplied::Applied)
            .count()
    }

    pub fn score_of(&self, team: Team) -> u32 {
        self.scores.get(team)
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn winning_team(&self) -> Team {
        self.scores.leader()
    }

    pub fn owner_of(&self, coord: CellCoord) -> Option<Team> {
        self.ownership.get(&coord).cloned()
    }

    pub fn owned_cells<'a>(&'a self) -> impl Iterator<Item = (CellCoord, Team)> + 'a {
        self.ownership.iter().map(|(coord, team)| (*coord, *team))
    }

    pub fn history_of(&self, email: &str) -> &[CellCoord] {
        self.histories.get(email).map_or(&[], |path| path.as_slice())
    }

    pub fn last_capture_of(&self, email: &str) -> Option<CellCoord> {
        self.history_of(email).last().cloned()
    }

    /// Unowned in-grid neighbours of the player's anchor. Empty for a player with no
    /// captures yet, who may take any unowned cell.
    pub fn capturable_cells(&self, email: &str) -> ArrayVec<CellCoord, MAX_NEIGHBOURS> {
        match self.last_capture_of(email) {
            Some(anchor) => anchor
                .neighbours()
                .into_iter()
                .filter(|coord| self.grid.contains(*coord) && !self.ownership.contains_key(coord))
                .collect(),
            None => ArrayVec::new(),
        }
    }
}
