//! Adapter module - runs the bot as an async session
//!
//! The transport that talks to the game server (a websocket in production) is
//! outside this crate. It hands raw binary frames to the session and forwards
//! the text command lines the session emits.
//!
//! # Flow
//!
//! 1. **Frames in**: raw snapshots are queued on a bounded channel
//! 2. **Latest wins**: before each tick the session drains the queue and
//!    decodes only the newest frame
//! 3. **Decide**: [`engine::tick`] decodes and, for the falling-block game,
//!    picks commands
//! 4. **Messages out**: per tick, an observation record, a decision record
//!    (falling-block only), zero to two command lines, then a tick-complete
//!    marker. A failed tick emits an error record instead of the first three,
//!    plus a `Zone` line when a blocked spawn still has a charged meter.
//!
//! # Records
//!
//! Observation, decision and error records serialize as one-line JSON with a
//! `type` and a `seq` field, see [`protocol`]:
//!
//! ```text
//! {"type":"observation","seq":1,"game":"tetro","width":10,"height":20,"occupied":0,"zone":{...},"piece":{...}}
//! {"type":"decision","seq":1,"commands":["Left","Zone"],"horizontal_offset":-4,"rotation_count":0,...}
//! {"type":"error","seq":2,"code":"no_legal_move","message":"active piece has no legal placement"}
//! ```
//!
//! # Environment Variables
//!
//! - `NEWYEAR_BOT_GAME`: `place`, `tetro` or `tttoe` (default: tetro)
//! - `NEWYEAR_BOT_MAX_PENDING`: frame channel capacity (default: 16)
//! - `NEWYEAR_BOT_LOG_PATH`: append records as JSON lines to this file
//! - `NEWYEAR_BOT_DISABLED`: set to "1" or "true" to disable the bot entirely
//!
//! # Implementation
//!
//! - Uses **tokio** for the session task and the wire log writer
//! - [`BotRuntime`] owns a runtime so synchronous callers can push frames
//!   and poll messages
//! - See [`session`] for the tick loop

pub mod config;
pub mod protocol;
pub mod runtime;
pub mod session;

pub use newyear_bot_core as core;
pub use newyear_bot_engine as engine;
pub use newyear_bot_types as types;

pub use config::SessionConfig;
pub use protocol::*;
pub use runtime::BotRuntime;
pub use session::{process_frame, run_session, OutboundMessage, SessionStats};
