extern crate turfwar;

use turfwar::engine::command::Command;
use turfwar::engine::geometry::CellCoord;
use turfwar::engine::team::Team;
use turfwar::sync::{JsonLinesOutbox, Outbox, PlayerCellCapture, ProtocolError, ServerMessage, PLAYER_CELL_CAPTURE};

use std::sync::mpsc;

#[test]
fn decodes_cell_captures() {
    let message = ServerMessage::from_json(
        r#"{"type": "playerCellCapture", "email": "me@example.com", "team": 4, "x": 3, "y": 1}"#,
    )
    .unwrap();
    assert_eq!(message.kind(), PLAYER_CELL_CAPTURE);
    assert_eq!(
        message,
        ServerMessage::PlayerCellCapture(PlayerCellCapture {
            email: "me@example.com".to_string(),
            team: Team::Blue,
            cell: CellCoord::new(3, 1),
        })
    );
}

#[test]
fn other_types_pass_through_untouched() {
    let message = ServerMessage::from_json(r#"{"type": "chat", "text": "hi"}"#).unwrap();
    assert_eq!(message.kind(), "chat");
    match message {
        ServerMessage::Other { body, .. } => assert_eq!(body["text"], "hi"),
        other => panic!("expected a pass-through message, got {:?}", other),
    }
}

#[test]
fn rejects_messages_it_cannot_read() {
    assert!(matches!(ServerMessage::from_json("not json"), Err(ProtocolError::Json(_))));
    assert!(matches!(ServerMessage::from_json(r#"{"x": 1}"#), Err(ProtocolError::MissingType)));
    assert!(matches!(ServerMessage::from_json(r#"{"type": 5}"#), Err(ProtocolError::MissingType)));
    assert!(matches!(
        ServerMessage::from_json(r#"{"type": "playerCellCapture", "email": "a", "team": 1}"#),
        Err(ProtocolError::Malformed { .. })
    ));
    assert!(matches!(
        ServerMessage::from_json(r#"{"type": "playerCellCapture", "email": "a", "team": 7, "x": 0, "y": 0}"#),
        Err(ProtocolError::UnknownTeam(7))
    ));
}

#[test]
fn commands_encode_with_their_type_tag() {
    let command = Command::cell_capture(CellCoord::new(2, 0));
    assert_eq!(serde_json::to_string(&command).unwrap(), r#"{"type":"cellCapture","x":2,"y":0}"#);
    assert_eq!(command.to_string(), "cellCapture 2,0");
}

#[test]
fn json_lines_outbox_writes_one_command_per_line() {
    let mut outbox = JsonLinesOutbox::new(Vec::new());
    outbox.send(&Command::CellCapture { x: 1, y: 2 }).unwrap();
    outbox.send(&Command::CellCapture { x: 1, y: 3 }).unwrap();
    let written = String::from_utf8(outbox.into_inner()).unwrap();
    assert_eq!(written, "{\"type\":\"cellCapture\",\"x\":1,\"y\":2}\n{\"type\":\"cellCapture\",\"x\":1,\"y\":3}\n");
}

#[test]
fn channel_outbox_reports_a_closed_receiver() {
    let (mut sender, receiver) = mpsc::channel::<Command>();
    Outbox::send(&mut sender, &Command::CellCapture { x: 0, y: 0 }).unwrap();
    assert_eq!(receiver.recv().unwrap(), Command::CellCapture { x: 0, y: 0 });

    drop(receiver);
    assert!(Outbox::send(&mut sender, &Command::CellCapture { x: 0, y: 1 }).is_err());
}
