//! Frame module - binary snapshot decoding
//!
//! Every frame is a complete little-endian snapshot. Decoding is a single
//! forward walk with a cursor; reading past the end of the buffer fails the
//! whole frame with a [`FrameError`]. Bytes after the last field are ignored.
//!
//! # Layouts
//!
//! ```text
//! place : u32 w, u32 h, w*h x u32 rgb
//! tetro : u32 w, u32 h, w*h x u32 cell,
//!         f64 meter, f64 max, u32 n, n x f64 line,
//!         i32 x, i32 y, u32 size, u32 color, u32 k, k x (u8 bx, u8 by)
//! tttoe : u32 w, u32 h, w*h x u8 cell,
//!         u32 n, n x (u8 x, u8 y, i8 dx, i8 dy), u8 my_turn
//! ```

use std::fmt;

use crate::board::BoardState;
use crate::piece::{Piece, MAX_PIECE_SIZE};
use crate::snapshot::{PlaceSnapshot, Snapshot, TetroSnapshot, TttoeSnapshot, WinningLine};
use crate::types::GameKind;
use crate::zone::ZoneState;

/// Reasons a frame is malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// A field extends past the end of the buffer
    Truncated {
        field: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// A header count times its element size does not fit in memory
    CountOverflow { field: &'static str },
    /// The active piece has no blocks
    EmptyPiece,
    /// A block lies outside the piece's bounding square
    PieceSizeMismatch { size: u32, block: (u8, u8) },
    /// The bounding square is too big for rotated offsets to stay single-byte
    PieceTooLarge { size: u32 },
}

impl FrameError {
    pub fn code(self) -> &'static str {
        "malformed_frame"
    }

    pub fn message(self) -> &'static str {
        match self {
            FrameError::Truncated { .. } => "frame is shorter than its header implies",
            FrameError::CountOverflow { .. } => "frame declares an impossible element count",
            FrameError::EmptyPiece => "active piece has no blocks",
            FrameError::PieceSizeMismatch { .. } => "piece block lies outside its bounding square",
            FrameError::PieceTooLarge { .. } => "piece bounding square is too large",
        }
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FrameError::Truncated {
                field,
                offset,
                needed,
                available,
            } => write!(
                f,
                "{}: `{}` at byte {} needs {} bytes, {} available",
                self.message(),
                field,
                offset,
                needed,
                available
            ),
            FrameError::CountOverflow { field } => write!(f, "{}: `{}`", self.message(), field),
            FrameError::EmptyPiece => f.write_str(self.message()),
            FrameError::PieceSizeMismatch { size, block } => write!(
                f,
                "{}: block ({}, {}) with size {}",
                self.message(),
                block.0,
                block.1,
                size
            ),
            FrameError::PieceTooLarge { size } => write!(
                f,
                "{}: size {} exceeds {}",
                self.message(),
                size,
                MAX_PIECE_SIZE
            ),
        }
    }
}

impl std::error::Error for FrameError {}

/// Forward-only reader over a frame
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], FrameError> {
        let bytes = self
            .buf
            .get(self.pos..)
            .and_then(|rest| rest.get(..N))
            .ok_or(FrameError::Truncated {
                field,
                offset: self.pos,
                needed: N,
                available: self.buf.len().saturating_sub(self.pos),
            })?;
        self.pos += N;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Fail early when `count` elements of `size` bytes cannot follow
    fn ensure(&self, field: &'static str, count: usize, size: usize) -> Result<(), FrameError> {
        let needed = count
            .checked_mul(size)
            .ok_or(FrameError::CountOverflow { field })?;
        let available = self.buf.len().saturating_sub(self.pos);
        if needed > available {
            return Err(FrameError::Truncated {
                field,
                offset: self.pos,
                needed,
                available,
            });
        }
        Ok(())
    }

    fn u8(&mut self, field: &'static str) -> Result<u8, FrameError> {
        Ok(self.take::<1>(field)?[0])
    }

    fn i8(&mut self, field: &'static str) -> Result<i8, FrameError> {
        Ok(i8::from_le_bytes(self.take(field)?))
    }

    fn u32(&mut self, field: &'static str) -> Result<u32, FrameError> {
        Ok(u32::from_le_bytes(self.take(field)?))
    }

    fn i32(&mut self, field: &'static str) -> Result<i32, FrameError> {
        Ok(i32::from_le_bytes(self.take(field)?))
    }

    fn f64(&mut self, field: &'static str) -> Result<f64, FrameError> {
        Ok(f64::from_le_bytes(self.take(field)?))
    }

    fn count(&mut self, field: &'static str) -> Result<usize, FrameError> {
        usize::try_from(self.u32(field)?).map_err(|_| FrameError::CountOverflow { field })
    }
}

/// Decode one frame for the given game
pub fn decode(kind: GameKind, buf: &[u8]) -> Result<Snapshot, FrameError> {
    match kind {
        GameKind::Place => decode_place(buf).map(Snapshot::Place),
        GameKind::Tetro => decode_tetro(buf).map(Snapshot::Tetro),
        GameKind::Tttoe => decode_tttoe(buf).map(Snapshot::Tttoe),
    }
}

fn read_board(
    cur: &mut Cursor<'_>,
    cell_size: usize,
    mut read_cell: impl FnMut(&mut Cursor<'_>) -> Result<u32, FrameError>,
) -> Result<BoardState, FrameError> {
    let width = cur.u32("width")?;
    let height = cur.u32("height")?;
    let len = (width as usize)
        .checked_mul(height as usize)
        .ok_or(FrameError::CountOverflow { field: "cells" })?;
    cur.ensure("cells", len, cell_size)?;

    let mut cells = Vec::with_capacity(len);
    for _ in 0..len {
        cells.push(read_cell(cur)?);
    }
    BoardState::from_cells(width, height, cells).ok_or(FrameError::CountOverflow { field: "cells" })
}

pub fn decode_place(buf: &[u8]) -> Result<PlaceSnapshot, FrameError> {
    let mut cur = Cursor::new(buf);
    let board = read_board(&mut cur, 4, |c| c.u32("pixel"))?;
    Ok(PlaceSnapshot { board })
}

pub fn decode_tetro(buf: &[u8]) -> Result<TetroSnapshot, FrameError> {
    let mut cur = Cursor::new(buf);
    let board = read_board(&mut cur, 4, |c| c.u32("cell"))?;

    let meter = cur.f64("zone_meter")?;
    let max = cur.f64("zone_max")?;
    let line_count = cur.count("zone_lines_count")?;
    cur.ensure("zone_lines", line_count, 8)?;
    let mut penalty_lines = Vec::with_capacity(line_count);
    for _ in 0..line_count {
        penalty_lines.push(cur.f64("zone_line")?);
    }

    let x = cur.i32("piece_x")?;
    let y = cur.i32("piece_y")?;
    let size = cur.u32("piece_size")?;
    let color = cur.u32("piece_color")?;
    let block_count = cur.count("block_count")?;
    cur.ensure("blocks", block_count, 2)?;
    let mut blocks = Vec::with_capacity(block_count);
    for _ in 0..block_count {
        let bx = cur.u8("block_x")?;
        let by = cur.u8("block_y")?;
        blocks.push((bx, by));
    }

    let piece = Piece {
        origin: (x, y),
        size,
        color,
        blocks,
    };
    validate_piece(&piece)?;

    Ok(TetroSnapshot {
        board,
        zone: ZoneState {
            meter,
            max,
            penalty_lines,
        },
        piece,
    })
}

fn validate_piece(piece: &Piece) -> Result<(), FrameError> {
    if piece.blocks.is_empty() {
        return Err(FrameError::EmptyPiece);
    }
    if piece.size > MAX_PIECE_SIZE {
        return Err(FrameError::PieceTooLarge { size: piece.size });
    }
    let outside = piece
        .blocks
        .iter()
        .copied()
        .find(|&(bx, by)| bx as u32 >= piece.size || by as u32 >= piece.size);
    match outside {
        Some(block) => Err(FrameError::PieceSizeMismatch {
            size: piece.size,
            block,
        }),
        None => Ok(()),
    }
}

pub fn decode_tttoe(buf: &[u8]) -> Result<TttoeSnapshot, FrameError> {
    let mut cur = Cursor::new(buf);
    let board = read_board(&mut cur, 1, |c| c.u8("cell").map(u32::from))?;

    let line_count = cur.count("line_count")?;
    cur.ensure("lines", line_count, 4)?;
    let mut lines = Vec::with_capacity(line_count);
    for _ in 0..line_count {
        lines.push(WinningLine {
            x: cur.u8("line_x")?,
            y: cur.u8("line_y")?,
            dx: cur.i8("line_dx")?,
            dy: cur.i8("line_dy")?,
        });
    }

    let my_turn = cur.u8("my_turn")? != 0;
    Ok(TttoeSnapshot {
        board,
        lines,
        my_turn,
    })
}
