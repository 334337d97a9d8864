//! Exhaustive placement search for the falling-block game
//!
//! Every reachable final placement of the active piece is simulated on one
//! working copy of the board: hard drop, lock, score, then unlock again so the
//! copy can be reused. Placements are visited rotation-major; inside each
//! rotation the piece first stays put, then sweeps left one cell at a time
//! until blocked, then sweeps right from the start column until blocked.
//! Rotation uses clockwise turns and stops at the first rejected turn.

use crate::core::{BoardState, Piece};
use crate::heuristic::compute_features;

/// Number of orientations tried, counting the current one
pub const MAX_ROTATIONS: u8 = 4;

/// One hypothetical resting placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveCandidate {
    /// Target column minus the current column
    pub horizontal_offset: i32,
    /// Clockwise quarter turns from the current orientation (0..=3)
    pub rotation_count: u8,
    pub score: f64,
    /// Tallest column after the placement locks
    pub resulting_max_height: u32,
}

/// Keep the incumbent unless `next` scores strictly higher
///
/// Equal scores keep the earlier candidate so ticks do not flip between
/// equally good placements.
pub fn prefer(best: Option<MoveCandidate>, next: MoveCandidate) -> MoveCandidate {
    match best {
        Some(best) if next.score <= best.score => best,
        _ => next,
    }
}

/// Visit every candidate in search order.
///
/// Returns false, without visiting anything, when the piece does not fit
/// where it currently is (blocked spawn).
pub fn visit_candidates(
    board: &BoardState,
    piece: &Piece,
    zone_lines: u32,
    mut visit: impl FnMut(MoveCandidate),
) -> bool {
    if !piece.fits(board, zone_lines) {
        return false;
    }

    let mut work = board.clone();
    let mut trial = piece.clone();
    let start_x = piece.origin.0;

    for rotation in 0..MAX_ROTATIONS {
        visit(simulate(&mut work, &mut trial, zone_lines, rotation, start_x));

        while trial.try_translate(&work, zone_lines, -1) {
            visit(simulate(&mut work, &mut trial, zone_lines, rotation, start_x));
        }
        trial.origin.0 = start_x;

        while trial.try_translate(&work, zone_lines, 1) {
            visit(simulate(&mut work, &mut trial, zone_lines, rotation, start_x));
        }
        trial.origin.0 = start_x;

        if !trial.try_rotate(&work, zone_lines, false) {
            break;
        }
    }

    true
}

/// All candidates in search order; None on a blocked spawn
pub fn candidates(board: &BoardState, piece: &Piece, zone_lines: u32) -> Option<Vec<MoveCandidate>> {
    let mut out = Vec::new();
    let fits = visit_candidates(board, piece, zone_lines, |c| out.push(c));
    fits.then_some(out)
}

/// Highest-scoring candidate, first found on ties; None on a blocked spawn
pub fn best_move(board: &BoardState, piece: &Piece, zone_lines: u32) -> Option<MoveCandidate> {
    let mut best = None;
    visit_candidates(board, piece, zone_lines, |c| best = Some(prefer(best, c)));
    best
}

/// Drop, lock and score `trial` on `work`, then restore both
fn simulate(
    work: &mut BoardState,
    trial: &mut Piece,
    zone_lines: u32,
    rotation: u8,
    start_x: i32,
) -> MoveCandidate {
    let start_y = trial.origin.1;
    trial.drop(work, zone_lines);
    trial.place(work);
    let features = compute_features(work);
    trial.unplace(work);
    trial.origin.1 = start_y;

    MoveCandidate {
        horizontal_offset: trial.origin.0 - start_x,
        rotation_count: rotation,
        score: features.score(),
        resulting_max_height: features.max_height,
    }
}
