//! Engine - move search and command selection for the falling-block bot
//!
//! One call to [`tick`] is one decision cycle:
//!
//! 1. decode the frame into a [`Snapshot`](crate::core::Snapshot)
//! 2. enumerate every reachable placement ([`search`])
//! 3. score each placed board ([`heuristic`])
//! 4. turn the best placement into at most one positional command plus an
//!    optional zone command ([`controller`])
//!
//! The cycle is synchronous and keeps no state between frames; the server's
//! snapshot is the only source of truth.
//!
//! # Example
//!
//! ```
//! use newyear_bot_core::{BoardState, Piece, TetroSnapshot, ZoneState};
//! use newyear_bot_engine::BotController;
//! use newyear_bot_types::TetroCommand;
//!
//! let snapshot = TetroSnapshot {
//!     board: BoardState::new(10, 20),
//!     zone: ZoneState { meter: 0.0, max: 20.0, penalty_lines: Vec::new() },
//!     piece: Piece {
//!         origin: (0, 0),
//!         size: 4,
//!         color: 0x508cd7,
//!         blocks: vec![(0, 0), (1, 0), (2, 0), (3, 0)],
//!     },
//! };
//!
//! let decision = BotController::new(&snapshot).decide().unwrap();
//! assert_eq!(decision.commands.as_slice(), &[TetroCommand::FastFall]);
//! ```

pub mod controller;
pub mod heuristic;
pub mod search;

pub use newyear_bot_core as core;
pub use newyear_bot_types as types;

pub use controller::{tick, BotController, ControllerConfig, Decision, TickError, TickOutput};
pub use heuristic::{compute_features, score_board, BoardFeatures};
pub use search::{best_move, candidates, prefer, visit_candidates, MoveCandidate};
