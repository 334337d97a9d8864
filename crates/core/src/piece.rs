//! Piece module - falling-block geometry
//!
//! A piece is a set of block offsets inside a `size x size` bounding square,
//! anchored at `origin` (top-left of the square, board coordinates). Rotation
//! turns the blocks inside the square; translation moves the origin. Both are
//! all-or-nothing: a move that would not [`fits`](Piece::fits) leaves the
//! piece exactly as it was and returns false.
//!
//! Coordinates use `+x` to the right and `+y` downwards, like the board.

use crate::board::BoardState;
use crate::types::EMPTY;

/// Largest bounding square whose rotated offsets still fit in a `u8`
pub const MAX_PIECE_SIZE: u32 = u8::MAX as u32 + 1;

/// The active falling-block piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    /// Top-left of the bounding square; may be negative
    pub origin: (i32, i32),
    /// Side of the bounding square, the rotation pivot
    pub size: u32,
    pub color: u32,
    /// Occupied cells relative to the bounding square
    pub blocks: Vec<(u8, u8)>,
}

impl Piece {
    /// True when every block lies strictly inside the bounding square and
    /// every rotation of it still fits single-byte offsets
    pub fn is_consistent(&self) -> bool {
        !self.blocks.is_empty()
            && self.size <= MAX_PIECE_SIZE
            && self
                .blocks
                .iter()
                .all(|&(bx, by)| (bx as u32) < self.size && (by as u32) < self.size)
    }

    /// Absolute board cells covered by the piece
    ///
    /// Coordinates that overflow `i32` saturate, which always lands outside
    /// any board.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (ox, oy) = self.origin;
        self.blocks
            .iter()
            .map(move |&(bx, by)| (ox.saturating_add(bx as i32), oy.saturating_add(by as i32)))
    }

    /// Turn the blocks inside the bounding square, without any fit check
    ///
    /// Counter-clockwise maps `(x, y) -> (y, size-1-x)`; clockwise is the
    /// inverse, `(x, y) -> (size-1-y, x)`.
    pub fn turn(&mut self, ccw: bool) {
        // Only meaningful for consistent pieces; decode rejects the rest.
        let last = self.size.saturating_sub(1).min(u8::MAX as u32) as u8;
        for block in &mut self.blocks {
            let (bx, by) = *block;
            *block = if ccw {
                (by, last.saturating_sub(bx))
            } else {
                (last.saturating_sub(by), bx)
            };
        }
    }

    /// Legality predicate against the playable region
    ///
    /// The playable region is `[0, width) x [0, height - zone_lines)`; every
    /// covered cell must be inside it and empty on `board`.
    pub fn fits(&self, board: &BoardState, zone_lines: u32) -> bool {
        let playable = board.height().saturating_sub(zone_lines);
        self.cells().all(|(x, y)| {
            x >= 0
                && y >= 0
                && (x as u32) < board.width()
                && (y as u32) < playable
                && board.get(x, y) == EMPTY
        })
    }

    /// Rotate 90 degrees if the result fits; otherwise restore and return false
    pub fn try_rotate(&mut self, board: &BoardState, zone_lines: u32, ccw: bool) -> bool {
        let before = self.blocks.clone();
        self.turn(ccw);
        if self.fits(board, zone_lines) {
            true
        } else {
            self.blocks = before;
            false
        }
    }

    /// Shift horizontally by `dx` if the result fits; otherwise restore and return false
    pub fn try_translate(&mut self, board: &BoardState, zone_lines: u32, dx: i32) -> bool {
        let before = self.origin.0;
        self.origin.0 = before.saturating_add(dx);
        if self.fits(board, zone_lines) {
            true
        } else {
            self.origin.0 = before;
            false
        }
    }

    /// Hard drop: move down one row at a time while the moved piece fits
    pub fn drop(&mut self, board: &BoardState, zone_lines: u32) {
        if self.blocks.is_empty() {
            return;
        }
        while let Some(next) = self.origin.1.checked_add(1) {
            let before = self.origin.1;
            self.origin.1 = next;
            if !self.fits(board, zone_lines) {
                self.origin.1 = before;
                break;
            }
        }
    }

    /// Mark the covered cells with the piece color
    pub fn place(&self, board: &mut BoardState) {
        for (x, y) in self.cells() {
            board.set(x, y, self.color);
        }
    }

    /// Revert the covered cells to empty, undoing [`place`](Piece::place)
    /// on cells that were empty beforehand
    pub fn unplace(&self, board: &mut BoardState) {
        for (x, y) in self.cells() {
            board.set(x, y, EMPTY);
        }
    }
}
