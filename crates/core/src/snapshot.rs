use crate::board::BoardState;
use crate::piece::Piece;
use crate::types::GameKind;
use crate::zone::ZoneState;

/// Pixel-canvas frame: a board of 24-bit RGB colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceSnapshot {
    pub board: BoardState,
}

/// Falling-block frame
#[derive(Debug, Clone, PartialEq)]
pub struct TetroSnapshot {
    pub board: BoardState,
    pub zone: ZoneState,
    pub piece: Piece,
}

/// A scoring line on the tic-tac-toe board: start cell and step direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine {
    pub x: u8,
    pub y: u8,
    pub dx: i8,
    pub dy: i8,
}

/// Tic-tac-toe frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TttoeSnapshot {
    pub board: BoardState,
    pub lines: Vec<WinningLine>,
    pub my_turn: bool,
}

/// One decoded frame of any game
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Place(PlaceSnapshot),
    Tetro(TetroSnapshot),
    Tttoe(TttoeSnapshot),
}

impl Snapshot {
    pub fn kind(&self) -> GameKind {
        match self {
            Snapshot::Place(_) => GameKind::Place,
            Snapshot::Tetro(_) => GameKind::Tetro,
            Snapshot::Tttoe(_) => GameKind::Tttoe,
        }
    }

    pub fn board(&self) -> &BoardState {
        match self {
            Snapshot::Place(s) => &s.board,
            Snapshot::Tetro(s) => &s.board,
            Snapshot::Tttoe(s) => &s.board,
        }
    }

    pub fn board_mut(&mut self) -> &mut BoardState {
        match self {
            Snapshot::Place(s) => &mut s.board,
            Snapshot::Tetro(s) => &mut s.board,
            Snapshot::Tttoe(s) => &mut s.board,
        }
    }

    /// Cell value at (x, y); empty when out of bounds
    pub fn get(&self, x: i32, y: i32) -> u32 {
        self.board().get(x, y)
    }

    /// Overwrite a cell locally; out-of-bounds writes are ignored
    pub fn set(&mut self, x: i32, y: i32, value: u32) {
        self.board_mut().set(x, y, value);
    }
}
