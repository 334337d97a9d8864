//! Linear board evaluation used to rank candidate placements
//!
//! Weights are the genetic-algorithm weights published by CodemyRoad
//! ("Tetris AI - The (Near) Perfect Player"). The column height term is
//! corrected for rows that the placement completes.

use crate::core::BoardState;

/// Weight of the aggregate column height
pub const WEIGHT_TOTAL_HEIGHT: f64 = -0.510066;
/// Weight of the number of completed rows
pub const WEIGHT_COMPLETE_LINES: f64 = 0.760666;
/// Weight of empty cells covered from directly above
pub const WEIGHT_HOLES: f64 = -0.35663;
/// Weight of the surface roughness
pub const WEIGHT_BUMPINESS: f64 = -0.184483;
/// The tallest column is reported, not scored
pub const WEIGHT_MAX_HEIGHT: f64 = 0.0;

/// Raw features of a board with a placement applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardFeatures {
    pub complete_lines: u32,
    pub max_height: u32,
    /// Sum of column heights minus `complete_lines` per column; can go negative
    pub total_height: i64,
    pub bumpiness: u32,
    pub holes: u32,
}

impl BoardFeatures {
    pub fn score(&self) -> f64 {
        self.max_height as f64 * WEIGHT_MAX_HEIGHT
            + self.total_height as f64 * WEIGHT_TOTAL_HEIGHT
            + self.complete_lines as f64 * WEIGHT_COMPLETE_LINES
            + self.holes as f64 * WEIGHT_HOLES
            + self.bumpiness as f64 * WEIGHT_BUMPINESS
    }
}

/// Scan `board` once per feature. Complexity O(width * height), no allocations.
pub fn compute_features(board: &BoardState) -> BoardFeatures {
    let complete_lines = (0..board.height())
        .filter(|&y| board.is_row_full(y))
        .count() as u32;

    let mut max_height = 0u32;
    let mut total_height = 0i64;
    let mut bumpiness = 0u32;
    let mut last_height: Option<u32> = None;
    for x in 0..board.width() {
        let height = column_height(board, x);
        total_height += height as i64 - complete_lines as i64;
        max_height = max_height.max(height);
        if let Some(last) = last_height {
            bumpiness += height.abs_diff(last);
        }
        last_height = Some(height);
    }

    BoardFeatures {
        complete_lines,
        max_height,
        total_height,
        bumpiness,
        holes: count_holes(board),
    }
}

/// Score a board that already carries the candidate placement
pub fn score_board(board: &BoardState) -> f64 {
    compute_features(board).score()
}

/// Height of column `x` measured from the floor; 0 when the column is empty
fn column_height(board: &BoardState, x: u32) -> u32 {
    (0..board.height())
        .find(|&y| board.is_occupied(x as i32, y as i32))
        .map_or(0, |y| board.height() - y)
}

/// Empty cells whose upper neighbour is occupied
fn count_holes(board: &BoardState) -> u32 {
    let mut holes = 0u32;
    for y in 1..board.height() {
        for x in 0..board.width() {
            let (x, y) = (x as i32, y as i32);
            if !board.is_occupied(x, y) && board.is_occupied(x, y - 1) {
                holes += 1;
            }
        }
    }
    holes
}
