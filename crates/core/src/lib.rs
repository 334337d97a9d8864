//! Core module - snapshot decoding and board geometry
//!
//! This crate turns binary game frames into typed snapshots and provides the
//! board and piece operations the bots build on. It has **no** I/O, logging
//! or networking, which keeps it:
//!
//! - **Deterministic**: identical bytes always decode to identical snapshots
//! - **Total**: out-of-range board access is defined (empty read, ignored write)
//! - **Testable**: every operation is a plain function over owned values
//!
//! # Module Structure
//!
//! - [`frame`]: little-endian cursor decoder for the three frame layouts
//! - [`board`]: bounds-checked `width x height` grid of `u32` cells
//! - [`piece`]: falling-block rotation, translation, fit test and hard drop
//! - [`zone`]: zone meter and penalty lines of the falling-block game
//! - [`snapshot`]: per-game snapshot types and the [`Snapshot`] sum type
//!
//! # Example
//!
//! ```
//! use newyear_bot_core::{decode, Snapshot};
//! use newyear_bot_types::GameKind;
//!
//! let mut frame = Vec::new();
//! frame.extend_from_slice(&1u32.to_le_bytes()); // width
//! frame.extend_from_slice(&1u32.to_le_bytes()); // height
//! frame.extend_from_slice(&0x508cd7u32.to_le_bytes());
//!
//! let snapshot = decode(GameKind::Place, &frame).unwrap();
//! assert!(matches!(snapshot, Snapshot::Place(_)));
//! assert_eq!(snapshot.get(0, 0), 0x508cd7);
//! assert_eq!(snapshot.get(5, 5), 0);
//! ```

pub mod board;
pub mod frame;
pub mod piece;
pub mod snapshot;
pub mod zone;

pub use newyear_bot_types as types;

pub use board::BoardState;
pub use frame::{decode, decode_place, decode_tetro, decode_tttoe, FrameError};
pub use piece::{Piece, MAX_PIECE_SIZE};
pub use snapshot::{PlaceSnapshot, Snapshot, TetroSnapshot, TttoeSnapshot, WinningLine};
pub use zone::ZoneState;
