//! Shared types - game identifiers, outbound commands and constants
//!
//! This crate defines the vocabulary shared by the decoder, the move search
//! and the session adapter. Everything here is plain data with no external
//! dependencies.
//!
//! # Games
//!
//! Three mini-games stream full snapshots of their state to bot clients:
//!
//! | Game | API name | Outbound command |
//! |------|----------|------------------|
//! | Pixel canvas | `place` | `"<x> <y> <rrggbb>"` |
//! | Falling blocks | `tetro` | one of `CW CCW Left Right Zone FastFall SlowFall` |
//! | Tic-tac-toe variant | `tttoe` | none (caller-defined) |
//!
//! # Examples
//!
//! ```
//! use newyear_bot_types::{GameKind, PixelCommand, TetroCommand};
//!
//! assert_eq!(GameKind::from_str("TETRO"), Some(GameKind::Tetro));
//! assert_eq!(TetroCommand::from_str("FastFall"), Some(TetroCommand::FastFall));
//!
//! let cmd = PixelCommand { x: 3, y: 7, color: 0xdcf5ff };
//! assert_eq!(cmd.to_string(), "3 7 dcf5ff");
//! ```

use std::fmt;

/// Cell value for an empty board cell. Also returned for out-of-range reads.
pub const EMPTY: u32 = 0;

/// Fraction of the zone maximum at which the bot activates zone mode.
pub const ZONE_ACTIVATION_RATIO: f64 = 0.4;

/// Rows kept free below the top of the board before the bot stops fast-falling.
pub const SAFETY_MARGIN_ROWS: u32 = 3;

/// Server-side command throttle. Commands above this rate are delayed, not dropped.
pub const SERVER_COMMANDS_PER_SECOND: u32 = 100;

/// Colors offered by the pixel-canvas controller, as 24-bit RGB.
pub const PALETTE: [u32; 8] = [
    0x000000, 0x55415f, 0x646964, 0xd77355, 0x508cd7, 0x64b964, 0xe6c86e, 0xdcf5ff,
];

/// The closed set of games a bot can connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    /// Collaborative pixel canvas
    Place,
    /// Falling-block puzzle with zone mode
    Tetro,
    /// Tic-tac-toe on an arbitrary board with scoring lines
    Tttoe,
}

impl GameKind {
    /// Parse game kind from its API name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use newyear_bot_types::GameKind;
    ///
    /// assert_eq!(GameKind::from_str("place"), Some(GameKind::Place));
    /// assert_eq!(GameKind::from_str("Tttoe"), Some(GameKind::Tttoe));
    /// assert_eq!(GameKind::from_str("chess"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "place" => Some(GameKind::Place),
            "tetro" => Some(GameKind::Tetro),
            "tttoe" => Some(GameKind::Tttoe),
            _ => None,
        }
    }

    /// API name used by the game server
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Place => "place",
            GameKind::Tetro => "tetro",
            GameKind::Tttoe => "tttoe",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Falling-block commands understood by the game server
///
/// Each command is sent as its own text message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetroCommand {
    /// Turn the piece clockwise
    Cw,
    /// Turn the piece counter-clockwise
    Ccw,
    /// Move the piece one cell left
    Left,
    /// Move the piece one cell right
    Right,
    /// Activate zone mode
    Zone,
    /// Hard drop while in zone mode, faster gravity otherwise
    FastFall,
    /// Back to normal gravity. The speed does not reset when a piece locks.
    SlowFall,
}

impl TetroCommand {
    /// Parse a command from its wire token (exact match)
    ///
    /// # Examples
    ///
    /// ```
    /// use newyear_bot_types::TetroCommand;
    ///
    /// assert_eq!(TetroCommand::from_str("CCW"), Some(TetroCommand::Ccw));
    /// assert_eq!(TetroCommand::from_str("Left"), Some(TetroCommand::Left));
    /// assert_eq!(TetroCommand::from_str("left"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "CW" => Some(TetroCommand::Cw),
            "CCW" => Some(TetroCommand::Ccw),
            "Left" => Some(TetroCommand::Left),
            "Right" => Some(TetroCommand::Right),
            "Zone" => Some(TetroCommand::Zone),
            "FastFall" => Some(TetroCommand::FastFall),
            "SlowFall" => Some(TetroCommand::SlowFall),
            _ => None,
        }
    }

    /// Wire token for this command
    pub fn as_str(&self) -> &'static str {
        match self {
            TetroCommand::Cw => "CW",
            TetroCommand::Ccw => "CCW",
            TetroCommand::Left => "Left",
            TetroCommand::Right => "Right",
            TetroCommand::Zone => "Zone",
            TetroCommand::FastFall => "FastFall",
            TetroCommand::SlowFall => "SlowFall",
        }
    }
}

impl fmt::Display for TetroCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paint one pixel on the shared canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelCommand {
    pub x: u32,
    pub y: u32,
    /// 24-bit RGB; higher bits are ignored when formatting
    pub color: u32,
}

impl PixelCommand {
    /// Parse `"<x> <y> <rrggbb>"`
    ///
    /// # Examples
    ///
    /// ```
    /// use newyear_bot_types::PixelCommand;
    ///
    /// let cmd = PixelCommand::from_str("12 4 508cd7").unwrap();
    /// assert_eq!((cmd.x, cmd.y, cmd.color), (12, 4, 0x508cd7));
    /// assert_eq!(PixelCommand::from_str("12 4 508cd"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let mut parts = s.split(' ');
        let x = decimal(parts.next()?)?;
        let y = decimal(parts.next()?)?;
        let hex = parts.next()?;
        if parts.next().is_some()
            || hex.len() != 6
            || !hex.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return None;
        }
        let color = u32::from_str_radix(hex, 16).ok()?;
        Some(Self { x, y, color })
    }
}

/// Digits only; `str::parse` alone would also take a leading `+`
fn decimal(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for PixelCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:06x}", self.x, self.y, self.color & 0xff_ffff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tetro_tokens_match_server_api() {
        let all = [
            TetroCommand::Cw,
            TetroCommand::Ccw,
            TetroCommand::Left,
            TetroCommand::Right,
            TetroCommand::Zone,
            TetroCommand::FastFall,
            TetroCommand::SlowFall,
        ];
        let tokens: Vec<&str> = all.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            tokens,
            ["CW", "CCW", "Left", "Right", "Zone", "FastFall", "SlowFall"]
        );
        for cmd in all {
            assert_eq!(TetroCommand::from_str(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn pixel_command_pads_and_masks_color() {
        let cmd = PixelCommand {
            x: 0,
            y: 19,
            color: 0xff00_00ff,
        };
        assert_eq!(cmd.to_string(), "0 19 0000ff");
    }

    #[test]
    fn pixel_command_rejects_extra_fields() {
        assert_eq!(PixelCommand::from_str("1 2 000000 9"), None);
        assert_eq!(PixelCommand::from_str("-1 2 000000"), None);
        assert_eq!(PixelCommand::from_str("1 2 zzzzzz"), None);
    }

    #[test]
    fn pixel_parse_rejects_signs() {
        assert_eq!(PixelCommand::from_str("+1 +2 +12345"), None);
        assert_eq!(PixelCommand::from_str("+1 2 012345"), None);
        assert_eq!(PixelCommand::from_str("1 +2 012345"), None);
        assert_eq!(PixelCommand::from_str("1 2 +12345"), None);
        assert_eq!(PixelCommand::from_str("1 2 -12345"), None);

        let cmd = PixelCommand::from_str("1 2 012345").unwrap();
        assert_eq!(cmd.to_string(), "1 2 012345");
    }

    #[test]
    fn palette_matches_canvas_controller() {
        assert_eq!(PALETTE.len(), 8);
        assert_eq!(PALETTE[0], EMPTY);
        assert_eq!(PixelCommand { x: 0, y: 0, color: PALETTE[7] }.to_string(), "0 0 dcf5ff");
    }

    #[test]
    fn tuning_defaults() {
        assert_eq!(ZONE_ACTIVATION_RATIO, 0.4);
        assert_eq!(SAFETY_MARGIN_ROWS, 3);
        assert_eq!(SERVER_COMMANDS_PER_SECOND, 100);
    }
}
