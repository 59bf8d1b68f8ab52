pub mod area;
pub mod capture;
pub mod command;
pub mod constants;
pub mod geometry;
pub mod grid;
pub mod lifecycle;
pub mod settings;
pub mod status;
pub mod team;

use self::command::Command;
use self::geometry::LatLng;
use self::team::Team;
use crate::sync::{Outbox, ServerMessage, SyncError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    Area,
    Target,
}

impl Default for ModeKind {
    fn default() -> ModeKind {
        ModeKind::Area
    }
}

/// What every game mode can do for a session. Modes are picked by [`ModeKind`] when the
/// session is built, not by overriding one another.
pub trait GameMode {
    fn kind(&self) -> ModeKind;

    /// Returns whether the message type belongs to this mode.
    fn handle_message(&mut self, message: &ServerMessage) -> bool;

    fn team_score(&self, team: Team) -> u32;

    /// Returns the request sent to the server, if the new location warranted one.
    fn location_updated(&mut self, location: LatLng, outbox: &mut dyn Outbox) -> Result<Option<Command>, SyncError>;

    /// Same tie-break as [`Scoreboard::leader`](team::Scoreboard::leader).
    fn winning_team(&self) -> Team;
}
