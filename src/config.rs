use std::env;

pub const STATE_PATH: &str = "state.json";
pub const EVENTS_PATH: &str = "events.jsonl";
pub const COMMANDS_PATH: &str = "commands.jsonl";

/// Where the replay binary reads its inputs and writes the requests it would have sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayConfig {
    pub state_path: String,
    pub events_path: String,
    pub commands_path: String,
    pub email: String,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            state_path: STATE_PATH.to_string(),
            events_path: EVENTS_PATH.to_string(),
            commands_path: COMMANDS_PATH.to_string(),
            email: String::new(),
        }
    }
}

impl ReplayConfig {
    /// Defaults overridden by `TURFWAR_STATE`, `TURFWAR_EVENTS`, `TURFWAR_COMMANDS` and `TURFWAR_EMAIL`.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("TURFWAR_STATE") {
            self.state_path = path;
        }
        if let Some(path) = lookup("TURFWAR_EVENTS") {
            self.events_path = path;
        }
        if let Some(path) = lookup("TURFWAR_COMMANDS") {
            self.commands_path = path;
        }
        if let Some(email) = lookup("TURFWAR_EMAIL") {
            self.email = email;
        }
        self
    }
}
