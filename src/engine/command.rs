use std::fmt;
use super::geometry::CellCoord;

/// Requests the client sends to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    CellCapture { x: i32, y: i32 },
}

impl Command {
    pub fn cell_capture(coord: CellCoord) -> Command {
        Command::CellCapture { x: coord.x, y: coord.y }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Command::CellCapture { x, y } => write!(f, "cellCapture {},{}", x, y),
        }
    }
}
