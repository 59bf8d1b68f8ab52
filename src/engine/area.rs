use tracing::trace;

use super::capture::{CaptureApplied, CaptureStateMachine};
use super::command::Command;
use super::geometry::{CellCoord, LatLng};
use super::grid::Grid;
use super::team::Team;
use super::{GameMode, ModeKind};
use crate::sync::{Outbox, PlayerCellCapture, ServerMessage, SyncError};

/// Area mode from the signed-in player's point of view.
#[derive(Debug, Clone)]
pub struct AreaGame {
    email: String,
    team: Team,
    captures: CaptureStateMachine,
    pending: Option<CellCoord>,
}

impl AreaGame {
    pub fn new(email: &str, team: Team, grid: Grid) -> AreaGame {
        AreaGame {
            email: email.to_string(),
            team,
            captures: CaptureStateMachine::new(grid),
            pending: None,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn captures(&self) -> &CaptureStateMachine {
        &self.captures
    }

    pub fn captures_mut(&mut self) -> &mut CaptureStateMachine {
        &mut self.captures
    }

    /// Cell requested from the server and not yet confirmed or taken by someone else.
    /// Dropped once the player is seen outside that cell, so a request the server never
    /// answers is sent again on the next visit.
    pub fn pending_capture(&self) -> Option<CellCoord> {
        self.pending
    }

    pub fn apply_capture(&mut self, capture: &PlayerCellCapture) -> CaptureApplied {
        if self.pending == Some(capture.cell) {
            self.pending = None;
        }
        self.captures.apply_authoritative_capture(&capture.email, capture.cell, capture.team)
    }
}

impl GameMode for AreaGame {
    fn kind(&self) -> ModeKind {
        ModeKind::Area
    }

    fn handle_message(&mut self, message: &ServerMessage) -> bool {
        match message {
            ServerMessage::PlayerCellCapture(capture) => {
                self.apply_capture(capture);
                true
            }
            ServerMessage::Other { .. } => false,
        }
    }

    fn team_score(&self, team: Team) -> u32 {
        self.captures.score_of(team)
    }

    fn location_updated(&mut self, location: LatLng, outbox: &mut dyn Outbox) -> Result<Option<Command>, SyncError> {
        let cell = self.captures.grid().cell_at(location);
        if self.pending.is_some() && self.pending != cell {
            self.pending = None;
        }
        let cell = match cell {
            Some(cell) => cell,
            None => {
                trace!(location = %location, "location outside the play area");
                return Ok(None);
            }
        };
        if self.pending == Some(cell) {
            return Ok(None);
        }
        if !self.captures.attempt_local_capture(&self.email, cell, self.team).is_accepted() {
            return Ok(None);
        }

        let command = Command::cell_capture(cell);
        outbox.send(&command)?;
        self.pending = Some(cell);
        Ok(Some(command))
    }

    fn winning_team(&self) -> Team {
        self.captures.winning_team()
    }
}
