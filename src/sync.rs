//! Message contract with the game server.
//!
//! Outbound requests are [`Command`]s handed to an [`Outbox`]; inbound broadcasts are
//! decoded once into [`ServerMessage`]. Types this core does not own are passed to a
//! [`FallbackHandler`] untouched.

use std::io::{self, Write};
use std::sync::mpsc;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::engine::command::Command;
use crate::engine::geometry::CellCoord;
use crate::engine::team::Team;

pub const PLAYER_CELL_CAPTURE: &str = "playerCellCapture";

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("message is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("message has no string \"type\" field")]
    MissingType,
    #[error("unknown team code {0}")]
    UnknownTeam(i32),
    #[error("malformed {kind} message: {source}")]
    Malformed {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to write message: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode message: {0}")]
    Json(#[from] serde_json::Error),
    #[error("outbound channel closed")]
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCellCapture {
    pub email: String,
    pub team: Team,
    pub cell: CellCoord,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
    PlayerCellCapture(PlayerCellCapture),
    Other { kind: String, body: Value },
}

#[derive(Deserialize)]
struct PlayerCellCaptureRecord {
    email: String,
    team: i32,
    x: i32,
    y: i32,
}

impl ServerMessage {
    pub fn from_json(text: &str) -> Result<ServerMessage, ProtocolError> {
        let value: Value = serde_json::from_str(text)?;
        ServerMessage::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<ServerMessage, ProtocolError> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ProtocolError::MissingType)?
            .to_string();

        if kind == PLAYER_CELL_CAPTURE {
            let record: PlayerCellCaptureRecord =
                serde_json::from_value(value).map_err(|source| ProtocolError::Malformed { kind, source })?;
            let team = Team::from_code(record.team).ok_or(ProtocolError::UnknownTeam(record.team))?;
            Ok(ServerMessage::PlayerCellCapture(PlayerCellCapture {
                email: record.email,
                team,
                cell: CellCoord::new(record.x, record.y),
            }))
        } else {
            Ok(ServerMessage::Other { kind, body: value })
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            ServerMessage::PlayerCellCapture(_) => PLAYER_CELL_CAPTURE,
            ServerMessage::Other { kind, .. } => kind,
        }
    }
}

/// The outbound half of the duplex channel to the server.
pub trait Outbox {
    fn send(&mut self, command: &Command) -> Result<(), SyncError>;
}

impl Outbox for Vec<Command> {
    fn send(&mut self, command: &Command) -> Result<(), SyncError> {
        self.push(*command);
        Ok(())
    }
}

impl Outbox for mpsc::Sender<Command> {
    fn send(&mut self, command: &Command) -> Result<(), SyncError> {
        mpsc::Sender::send(self, *command).map_err(|_| SyncError::Closed)
    }
}

/// Writes each command as one line of JSON.
pub struct JsonLinesOutbox<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesOutbox<W> {
    pub fn new(writer: W) -> JsonLinesOutbox<W> {
        JsonLinesOutbox { writer }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Outbox for JsonLinesOutbox<W> {
    fn send(&mut self, command: &Command) -> Result<(), SyncError> {
        serde_json::to_writer(&mut self.writer, command)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Generic handler for message types outside the capture protocol.
pub trait FallbackHandler {
    /// Returns whether the message was recognised.
    fn handle_message(&mut self, kind: &str, body: &Value) -> bool;
}

pub struct Unhandled;

impl FallbackHandler for Unhandled {
    fn handle_message(&mut self, kind: &str, _body: &Value) -> bool {
        debug!(kind, "no handler for message type");
        false
    }
}
