//! One client's view of one running game.
//!
//! Location fixes and server broadcasts arrive from independent producers but are applied
//! by a single consumer, strictly in arrival order, so game state needs no locking.

use std::sync::mpsc::Receiver;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::engine::command::Command;
use crate::engine::geometry::LatLng;
use crate::engine::team::Team;
use crate::engine::{GameMode, ModeKind};
use crate::input::json::{FullState, SnapshotError};
use crate::sync::{FallbackHandler, Outbox, ServerMessage, SyncError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0:?} games are not supported")]
    UnsupportedMode(ModeKind),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Sync(#[from] SyncError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Location(LatLng),
    Message(Value),
    /// A fresh full-state snapshot, e.g. after reconnecting.
    Resync(FullState),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub locations: u32,
    pub messages: u32,
    pub unhandled_messages: u32,
    pub requests_sent: u32,
    pub resyncs: u32,
}

pub fn build_game(email: &str, snapshot: &FullState) -> Result<Box<dyn GameMode>, SessionError> {
    match snapshot.mode {
        ModeKind::Area => Ok(Box::new(snapshot.to_engine(email)?)),
        ModeKind::Target => Err(SessionError::UnsupportedMode(ModeKind::Target)),
    }
}

pub struct Session<O: Outbox, F: FallbackHandler> {
    email: String,
    game: Box<dyn GameMode>,
    outbox: O,
    fallback: F,
    stats: SessionStats,
}

impl<O: Outbox, F: FallbackHandler> Session<O, F> {
    pub fn new(email: &str, snapshot: &FullState, outbox: O, fallback: F) -> Result<Session<O, F>, SessionError> {
        let game = build_game(email, snapshot)?;
        info!(email, mode = ?snapshot.mode, players = snapshot.players.len(), "session started");
        Ok(Session {
            email: email.to_string(),
            game,
            outbox,
            fallback,
            stats: SessionStats::default(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn game(&self) -> &dyn GameMode {
        self.game.as_ref()
    }

    pub fn outbox(&self) -> &O {
        &self.outbox
    }

    pub fn outbox_mut(&mut self) -> &mut O {
        &mut self.outbox
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn team_score(&self, team: Team) -> u32 {
        self.game.team_score(team)
    }

    pub fn winning_team(&self) -> Team {
        self.game.winning_team()
    }

    pub fn location_updated(&mut self, location: LatLng) -> Result<Option<Command>, SessionError> {
        self.stats.locations += 1;
        let command = self.game.location_updated(location, &mut self.outbox)?;
        if let Some(command) = command {
            self.stats.requests_sent += 1;
            debug!(command = %command, "capture requested");
        }
        Ok(command)
    }

    /// Returns whether anything recognised the message. Undecodable messages are logged
    /// and reported as unhandled rather than ending the session.
    pub fn handle_message(&mut self, message: Value) -> bool {
        self.stats.messages += 1;
        let handled = match ServerMessage::from_value(message) {
            Ok(message) => self.dispatch(&message),
            Err(error) => {
                warn!(%error, "dropping undecodable server message");
                false
            }
        };
        if !handled {
            self.stats.unhandled_messages += 1;
        }
        handled
    }

    fn dispatch(&mut self, message: &ServerMessage) -> bool {
        if self.game.handle_message(message) {
            return true;
        }
        match message {
            ServerMessage::Other { kind, body } => self.fallback.handle_message(kind, body),
            ServerMessage::PlayerCellCapture(_) => false,
        }
    }

    /// Throws away all game state and rebuilds it from `snapshot`. Missed broadcasts cannot
    /// be replayed, so this is the only way back after a reconnect.
    pub fn resync(&mut self, snapshot: &FullState) -> Result<(), SessionError> {
        self.game = build_game(&self.email, snapshot)?;
        self.stats.resyncs += 1;
        info!(email = %self.email, "session rebuilt from snapshot");
        Ok(())
    }

    pub fn handle(&mut self, event: SessionEvent) -> Result<(), SessionError> {
        match event {
            SessionEvent::Location(location) => {
                self.location_updated(location)?;
            }
            SessionEvent::Message(message) => {
                self.handle_message(message);
            }
            SessionEvent::Resync(snapshot) => self.resync(&snapshot)?,
        }
        Ok(())
    }

    /// Consumes events until every sender has hung up.
    pub fn run(&mut self, events: Receiver<SessionEvent>) -> Result<SessionStats, SessionError> {
        for event in events.iter() {
            self.handle(event)?;
        }
        Ok(self.stats)
    }
}
