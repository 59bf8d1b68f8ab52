// Codes are the server's contract; anything unrecognised is carried through as `Unknown`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum GameState {
    Active,
    Paused,
    Ended,
    Unknown(i32),
}

impl From<i32> for GameState {
    fn from(code: i32) -> GameState {
        match code {
            0 => GameState::Active,
            1 => GameState::Paused,
            2 => GameState::Ended,
            other => GameState::Unknown(other),
        }
    }
}

impl From<GameState> for i32 {
    fn from(state: GameState) -> i32 {
        match state {
            GameState::Active => 0,
            GameState::Paused => 1,
            GameState::Ended => 2,
            GameState::Unknown(code) => code,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum PlayerState {
    Invited,
    Accepted,
    Playing,
    Removed,
    Declined,
    Unknown(i32),
}

impl From<i32> for PlayerState {
    fn from(code: i32) -> PlayerState {
        match code {
            0 => PlayerState::Invited,
            1 => PlayerState::Accepted,
            2 => PlayerState::Playing,
            3 => PlayerState::Removed,
            4 => PlayerState::Declined,
            other => PlayerState::Unknown(other),
        }
    }
}

impl From<PlayerState> for i32 {
    fn from(state: PlayerState) -> i32 {
        match state {
            PlayerState::Invited => 0,
            PlayerState::Accepted => 1,
            PlayerState::Playing => 2,
            PlayerState::Removed => 3,
            PlayerState::Declined => 4,
            PlayerState::Unknown(code) => code,
        }
    }
}
