use super::status::{GameState, PlayerState};
use super::team::Team;
use super::ModeKind;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSummary {
    pub email: String,
    pub team: Team,
    pub state: PlayerState,
}

/// One entry of the server's game list, as seen by the signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub id: String,
    pub mode: ModeKind,
    pub owner: String,
    pub state: GameState,
    pub players: Vec<PlayerSummary>,
}

impl GameSummary {
    pub fn player(&self, email: &str) -> Option<&PlayerSummary> {
        self.players.iter().find(|p| p.email == email)
    }

    pub fn player_role_label(&self, email: &str) -> Option<&'static str> {
        self.player(email).map(|p| p.team.label())
    }

    pub fn is_invitation(&self, email: &str) -> bool {
        match self.player(email) {
            Some(player) => player.state == PlayerState::Invited && self.state != GameState::Ended,
            None => false,
        }
    }

    /// An ended game the player only ever accepted is not ongoing for them; every other
    /// non-invitation is.
    pub fn is_ongoing(&self, email: &str) -> bool {
        match self.player(email) {
            Some(player) => {
                let invited = player.state == PlayerState::Invited;
                let accepted_but_ended = self.state == GameState::Ended && player.state == PlayerState::Accepted;
                !invited && !accepted_but_ended
            }
            None => false,
        }
    }
}
