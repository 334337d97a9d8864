use std::fmt;

use arrayvec::ArrayVec;
use tracing::{debug, warn};

use crate::core::{decode, FrameError, Snapshot, TetroSnapshot};
use crate::search::{best_move, MoveCandidate};
use crate::types::{GameKind, TetroCommand, SAFETY_MARGIN_ROWS, ZONE_ACTIVATION_RATIO};

/// Tunables of the falling-block bot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// Activate zone mode once `meter >= max * ratio`
    pub zone_activation_ratio: f64,
    /// Fast-fall only while the landing max height stays below `height - margin`
    pub safety_margin_rows: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            zone_activation_ratio: ZONE_ACTIVATION_RATIO,
            safety_margin_rows: SAFETY_MARGIN_ROWS,
        }
    }
}

/// Why a tick produced no decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickError {
    /// The frame could not be decoded
    Malformed(FrameError),
    /// The active piece does not fit where it spawned. No placement command
    /// is sent, but `zone` records whether the meter still asks for `Zone`.
    NoLegalMove { zone: bool },
}

impl TickError {
    pub fn code(self) -> &'static str {
        match self {
            TickError::Malformed(err) => err.code(),
            TickError::NoLegalMove { .. } => "no_legal_move",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            TickError::Malformed(err) => err.message(),
            TickError::NoLegalMove { .. } => "active piece has no legal placement",
        }
    }

    /// Zone activation that still applies when no placement exists
    pub fn zone_command(self) -> Option<TetroCommand> {
        match self {
            TickError::NoLegalMove { zone: true } => Some(TetroCommand::Zone),
            _ => None,
        }
    }
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickError::Malformed(err) => fmt::Display::fmt(err, f),
            TickError::NoLegalMove { .. } => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for TickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TickError::Malformed(err) => Some(err),
            TickError::NoLegalMove { .. } => None,
        }
    }
}

impl From<FrameError> for TickError {
    fn from(err: FrameError) -> Self {
        TickError::Malformed(err)
    }
}

/// Commands chosen for one snapshot: at most one positional, at most one zone
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub best: MoveCandidate,
    pub commands: ArrayVec<TetroCommand, 2>,
}

/// Per-tick decision maker for one falling-block snapshot
///
/// Holds nothing across ticks; build a new one for every frame.
#[derive(Debug, Clone, Copy)]
pub struct BotController<'a> {
    snapshot: &'a TetroSnapshot,
    config: ControllerConfig,
}

impl<'a> BotController<'a> {
    pub fn new(snapshot: &'a TetroSnapshot) -> Self {
        Self::with_config(snapshot, ControllerConfig::default())
    }

    pub fn with_config(snapshot: &'a TetroSnapshot, config: ControllerConfig) -> Self {
        Self { snapshot, config }
    }

    /// Search, pick the best placement and translate it into commands
    pub fn decide(&self) -> Result<Decision, TickError> {
        let snap = self.snapshot;
        let zone_lines = snap.zone.line_count();
        let zone = snap.zone.is_charged(self.config.zone_activation_ratio);
        let Some(best) = best_move(&snap.board, &snap.piece, zone_lines) else {
            warn!(
                x = snap.piece.origin.0,
                y = snap.piece.origin.1,
                zone,
                "active piece does not fit, no legal move"
            );
            return Err(TickError::NoLegalMove { zone });
        };

        let mut commands = ArrayVec::new();
        if let Some(cmd) = self.positional_command(&best) {
            commands.push(cmd);
        }
        if zone {
            commands.push(TetroCommand::Zone);
        }

        debug!(
            offset = best.horizontal_offset,
            rotation = best.rotation_count,
            score = best.score,
            max_height = best.resulting_max_height,
            ?commands,
            "tick decided"
        );
        Ok(Decision { best, commands })
    }

    /// One rotation, else one step sideways, else a fast fall if it is safe
    fn positional_command(&self, best: &MoveCandidate) -> Option<TetroCommand> {
        match best.rotation_count {
            0 => {}
            1 | 2 => return Some(TetroCommand::Cw),
            _ => return Some(TetroCommand::Ccw),
        }
        if best.horizontal_offset < 0 {
            return Some(TetroCommand::Left);
        }
        if best.horizontal_offset > 0 {
            return Some(TetroCommand::Right);
        }
        let ceiling = self.snapshot.board.height() as i64 - self.config.safety_margin_rows as i64;
        if (best.resulting_max_height as i64) < ceiling {
            return Some(TetroCommand::FastFall);
        }
        None
    }
}

/// Result of one decode-and-decide cycle
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutput {
    pub snapshot: Snapshot,
    /// Only the falling-block game has a built-in strategy
    pub decision: Option<Decision>,
}

impl TickOutput {
    /// Outbound text commands, in send order
    pub fn command_lines(&self) -> Vec<String> {
        self.decision
            .iter()
            .flat_map(|d| d.commands.iter().map(|c| c.as_str().to_string()))
            .collect()
    }
}

/// Decode `frame` and, for the falling-block game, decide this tick's commands
pub fn tick(kind: GameKind, frame: &[u8], config: ControllerConfig) -> Result<TickOutput, TickError> {
    let snapshot = decode(kind, frame)?;
    let decision = match &snapshot {
        Snapshot::Tetro(tetro) => Some(BotController::with_config(tetro, config).decide()?),
        Snapshot::Place(_) | Snapshot::Tttoe(_) => None,
    };
    Ok(TickOutput { snapshot, decision })
}
