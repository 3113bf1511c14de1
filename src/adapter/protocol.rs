//! Protocol module - JSON message types for headless hosts
//!
//! Line-delimited JSON: one message per line, each carrying a sequence
//! number. A host streams one `event` message per entry of a move's event
//! log and a `snapshot` message whenever a client needs to (re)sync. The
//! same format doubles as a replay log.

use serde::{Deserialize, Serialize};

use crate::core::snapshot::SessionSnapshot;
use crate::types::{CellContent, Color, Coord, Event};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "event")]
    Event,
}

impl Default for EventType {
    fn default() -> Self {
        Self::Event
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnapshotType {
    #[serde(rename = "snapshot")]
    Snapshot,
}

impl Default for SnapshotType {
    fn default() -> Self {
        Self::Snapshot
    }
}

/// A board coordinate on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WireCoord {
    pub row: i8,
    pub col: i8,
}

impl From<Coord> for WireCoord {
    fn from(value: Coord) -> Self {
        Self {
            row: value.row,
            col: value.col,
        }
    }
}

impl From<WireCoord> for Coord {
    fn from(value: WireCoord) -> Self {
        Coord::new(value.row, value.col)
    }
}

/// Cell content on the wire: the color's single-character tag, plus the
/// remaining fuse for countdown cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireContent {
    pub color: char,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining: Option<i8>,
}

impl From<CellContent> for WireContent {
    fn from(value: CellContent) -> Self {
        match value {
            CellContent::Empty => Self {
                color: '.',
                remaining: None,
            },
            CellContent::Tile(color) => Self {
                color: color.as_char(),
                remaining: None,
            },
            CellContent::Countdown { color, remaining } => Self {
                color: color.as_char(),
                remaining: Some(remaining),
            },
        }
    }
}

impl WireContent {
    pub fn to_content(self) -> Option<CellContent> {
        if self.color == '.' {
            return Some(CellContent::Empty);
        }
        let color = Color::from_char(self.color)?;
        Some(match self.remaining {
            Some(remaining) => CellContent::Countdown { color, remaining },
            None => CellContent::Tile(color),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum WireEvent {
    Moved {
        from: WireCoord,
        to: WireCoord,
    },
    Exploded {
        cells: Vec<WireCoord>,
    },
    Spawned {
        cell: WireCoord,
        content: WireContent,
    },
    ScoreChanged {
        score: u32,
    },
    CountdownTicked {
        cell: WireCoord,
        remaining: i8,
    },
    GameOver,
}

impl From<&Event> for WireEvent {
    fn from(value: &Event) -> Self {
        match value {
            Event::Moved { from, to } => Self::Moved {
                from: (*from).into(),
                to: (*to).into(),
            },
            Event::Exploded { cells } => Self::Exploded {
                cells: cells.iter().map(|&c| c.into()).collect(),
            },
            Event::Spawned { cell, content } => Self::Spawned {
                cell: (*cell).into(),
                content: (*content).into(),
            },
            Event::ScoreChanged { score } => Self::ScoreChanged { score: *score },
            Event::CountdownTicked { cell, remaining } => Self::CountdownTicked {
                cell: (*cell).into(),
                remaining: *remaining,
            },
            Event::GameOver => Self::GameOver,
        }
    }
}

/// One entry of a move's event log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: EventType,
    pub seq: u64,
    pub event: WireEvent,
}

/// Full board resync. `rows` encodes cells as color tags ('.' for empty,
/// uppercase for countdown cells); `countdowns` carries the fuses the row
/// strings cannot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: SnapshotType,
    pub seq: u64,
    pub width: u8,
    pub height: u8,
    pub rows: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub countdowns: Vec<WireCountdown>,
    pub score: u32,
    #[serde(rename = "bomb_point")]
    pub bomb_point: u32,
    pub moves: u32,
    #[serde(rename = "game_over")]
    pub game_over: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCountdown {
    pub row: i8,
    pub col: i8,
    pub remaining: i8,
}

/// Create an event message
pub fn create_event(seq: u64, event: &Event) -> EventMessage {
    EventMessage {
        msg_type: EventType::Event,
        seq,
        event: event.into(),
    }
}

/// Create a snapshot message from a captured session state
pub fn create_snapshot(seq: u64, snapshot: &SessionSnapshot) -> SnapshotMessage {
    let mut rows = Vec::with_capacity(snapshot.height as usize);
    let mut countdowns = Vec::new();
    for row in 0..snapshot.height as i8 {
        let mut line = String::with_capacity(snapshot.width as usize);
        for col in 0..snapshot.width as i8 {
            let content = snapshot
                .content_at(Coord::new(row, col))
                .unwrap_or(CellContent::Empty);
            match content {
                CellContent::Empty => line.push('.'),
                CellContent::Tile(color) => line.push(color.as_char()),
                CellContent::Countdown { color, remaining } => {
                    line.push(color.as_char().to_ascii_uppercase());
                    countdowns.push(WireCountdown {
                        row,
                        col,
                        remaining,
                    });
                }
            }
        }
        rows.push(line);
    }
    SnapshotMessage {
        msg_type: SnapshotType::Snapshot,
        seq,
        width: snapshot.width,
        height: snapshot.height,
        rows,
        countdowns,
        score: snapshot.score,
        bomb_point: snapshot.bomb_point,
        moves: snapshot.moves,
        game_over: snapshot.game_over,
    }
}

/// Encode a move's event log as line-delimited JSON, numbering entries from
/// `seq_start`. Returns the lines and the next free sequence number.
pub fn encode_events(
    seq_start: u64,
    events: &[Event],
) -> Result<(String, u64), serde_json::Error> {
    let mut out = String::new();
    let mut seq = seq_start;
    for event in events {
        out.push_str(&serde_json::to_string(&create_event(seq, event))?);
        out.push('\n');
        seq += 1;
    }
    Ok((out, seq))
}

/// Parsed incoming message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedMessage {
    Event(EventMessage),
    Snapshot(SnapshotMessage),
}

/// Parse one line of the stream
pub fn parse_message(json: &str) -> Result<ParsedMessage, serde_json::Error> {
    #[derive(Debug, Deserialize)]
    #[serde(tag = "type")]
    enum InboundMessage {
        #[serde(rename = "event")]
        Event(EventMessage),
        #[serde(rename = "snapshot")]
        Snapshot(SnapshotMessage),
    }

    match serde_json::from_str::<InboundMessage>(json)? {
        InboundMessage::Event(m) => Ok(ParsedMessage::Event(m)),
        InboundMessage::Snapshot(m) => Ok(ParsedMessage::Snapshot(m)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Session, SessionConfig};

    #[test]
    fn test_event_message_roundtrip() {
        let event = Event::Moved {
            from: Coord::new(4, 2),
            to: Coord::new(4, 3),
        };
        let msg = create_event(17, &event);
        let json = serde_json::to_string(&msg).unwrap();
        match parse_message(&json).unwrap() {
            ParsedMessage::Event(parsed) => {
                assert_eq!(parsed.seq, 17);
                assert_eq!(parsed.event, WireEvent::from(&event));
            }
            other => panic!("expected event message, got {:?}", other),
        }
    }

    #[test]
    fn test_spawned_countdown_keeps_its_fuse() {
        let event = Event::Spawned {
            cell: Coord::new(0, 3),
            content: CellContent::Countdown {
                color: Color::Blue,
                remaining: 8,
            },
        };
        let json = serde_json::to_string(&create_event(1, &event)).unwrap();
        assert!(json.contains("\"remaining\":8"));
        match parse_message(&json).unwrap() {
            ParsedMessage::Event(parsed) => match parsed.event {
                WireEvent::Spawned { content, .. } => {
                    assert_eq!(
                        content.to_content(),
                        Some(CellContent::Countdown {
                            color: Color::Blue,
                            remaining: 8
                        })
                    );
                }
                other => panic!("expected spawned, got {:?}", other),
            },
            other => panic!("expected event message, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_spawn_omits_remaining() {
        let event = Event::Spawned {
            cell: Coord::new(0, 3),
            content: CellContent::Tile(Color::Red),
        };
        let json = serde_json::to_string(&create_event(1, &event)).unwrap();
        assert!(!json.contains("remaining"));
    }

    #[test]
    fn test_encode_events_is_line_delimited() {
        let events = vec![
            Event::ScoreChanged { score: 15 },
            Event::GameOver,
        ];
        let (lines, next_seq) = encode_events(5, &events).unwrap();
        assert_eq!(next_seq, 7);
        let parsed: Vec<ParsedMessage> = lines
            .lines()
            .map(|l| parse_message(l).unwrap())
            .collect();
        assert_eq!(parsed.len(), 2);
        match &parsed[1] {
            ParsedMessage::Event(m) => {
                assert_eq!(m.seq, 6);
                assert_eq!(m.event, WireEvent::GameOver);
            }
            other => panic!("expected event message, got {:?}", other),
        }
    }

    #[test]
    fn test_snapshot_message_roundtrip() {
        let session = Session::new(SessionConfig::default()).unwrap();
        let msg = create_snapshot(42, &session.snapshot());
        assert_eq!(msg.rows.len(), 9);
        assert!(msg.rows.iter().all(|r| r.len() == 8));
        // a fresh board has no empties and no bombs
        assert!(msg.rows.iter().all(|r| !r.contains('.')));
        assert!(msg.countdowns.is_empty());

        let json = serde_json::to_string(&msg).unwrap();
        match parse_message(&json).unwrap() {
            ParsedMessage::Snapshot(parsed) => assert_eq!(parsed, msg),
            other => panic!("expected snapshot message, got {:?}", other),
        }
    }

    #[test]
    fn test_wire_content_rejects_unknown_color() {
        let bad = WireContent {
            color: 'x',
            remaining: None,
        };
        assert_eq!(bad.to_content(), None);
    }
}
