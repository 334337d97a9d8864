//! Protocol module - JSON records describing each tick
//!
//! The game server speaks binary frames in and plain text commands out; these
//! records are for observers and the wire log. Every record carries `type`
//! and `seq` (the tick number within the session).

use serde::{Deserialize, Serialize};

use crate::core::{Piece, Snapshot};
use crate::engine::{Decision, TickError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Observation,
    Decision,
    Error,
}

/// Summary of a decoded snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    pub msg_type: RecordType,
    pub seq: u64,
    pub game: String,
    pub width: u32,
    pub height: u32,
    /// Non-empty cells
    pub occupied: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub piece: Option<PieceInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub my_turn: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneInfo {
    pub meter: f64,
    pub max: f64,
    pub lines: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceInfo {
    pub x: i32,
    pub y: i32,
    pub size: u32,
    pub color: String,
    pub blocks: Vec<[u8; 2]>,
}

impl From<&Piece> for PieceInfo {
    fn from(piece: &Piece) -> Self {
        Self {
            x: piece.origin.0,
            y: piece.origin.1,
            size: piece.size,
            color: format!("{:06x}", piece.color & 0xff_ffff),
            blocks: piece.blocks.iter().map(|&(x, y)| [x, y]).collect(),
        }
    }
}

/// Chosen placement and the commands sent for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMessage {
    #[serde(rename = "type")]
    pub msg_type: RecordType,
    pub seq: u64,
    pub commands: Vec<String>,
    pub horizontal_offset: i32,
    pub rotation_count: u8,
    pub score: f64,
    pub resulting_max_height: u32,
}

/// A tick that produced no decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: RecordType,
    pub seq: u64,
    pub code: String,
    pub message: String,
}

pub fn build_observation(seq: u64, snapshot: &Snapshot) -> ObservationMessage {
    let board = snapshot.board();
    let mut msg = ObservationMessage {
        msg_type: RecordType::Observation,
        seq,
        game: snapshot.kind().as_str().to_string(),
        width: board.width(),
        height: board.height(),
        occupied: board.occupied_count(),
        zone: None,
        piece: None,
        my_turn: None,
        lines: None,
    };
    match snapshot {
        Snapshot::Place(_) => {}
        Snapshot::Tetro(s) => {
            msg.zone = Some(ZoneInfo {
                meter: s.zone.meter,
                max: s.zone.max,
                lines: s.zone.line_count(),
            });
            msg.piece = Some(PieceInfo::from(&s.piece));
        }
        Snapshot::Tttoe(s) => {
            msg.my_turn = Some(s.my_turn);
            msg.lines = Some(s.lines.len());
        }
    }
    msg
}

pub fn create_decision(seq: u64, decision: &Decision) -> DecisionMessage {
    DecisionMessage {
        msg_type: RecordType::Decision,
        seq,
        commands: decision
            .commands
            .iter()
            .map(|c| c.as_str().to_string())
            .collect(),
        horizontal_offset: decision.best.horizontal_offset,
        rotation_count: decision.best.rotation_count,
        score: decision.best.score,
        resulting_max_height: decision.best.resulting_max_height,
    }
}

pub fn create_error(seq: u64, err: &TickError) -> ErrorMessage {
    ErrorMessage {
        msg_type: RecordType::Error,
        seq,
        code: err.code().to_string(),
        message: err.to_string(),
    }
}
