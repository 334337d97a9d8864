//! Bot runtime integration.
//!
//! Bridges synchronous callers with the async session.

use anyhow::Context;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::SessionConfig;
use crate::session::{run_session, OutboundMessage, SessionStats};

/// Running bot session on its own tokio runtime.
pub struct BotRuntime {
    rt: Runtime,
    frame_tx: mpsc::Sender<Vec<u8>>,
    out_rx: mpsc::UnboundedReceiver<OutboundMessage>,
    session: JoinHandle<anyhow::Result<SessionStats>>,
}

impl BotRuntime {
    /// Start from environment variables.
    ///
    /// Returns None if `NEWYEAR_BOT_DISABLED` is set.
    pub fn start_from_env() -> anyhow::Result<Option<Self>> {
        if SessionConfig::is_disabled() {
            return Ok(None);
        }
        Self::start(SessionConfig::from_env()).map(Some)
    }

    pub fn start(config: SessionConfig) -> anyhow::Result<Self> {
        let max_pending = config.max_pending_frames.max(1);
        let (frame_tx, frame_rx) = mpsc::channel::<Vec<u8>>(max_pending);
        let (out_tx, out_rx) = mpsc::unbounded_channel::<OutboundMessage>();

        let rt = Runtime::new().context("failed to create tokio runtime")?;
        let session = rt.spawn(run_session(config, frame_rx, out_tx));

        Ok(Self {
            rt,
            frame_tx,
            out_rx,
            session,
        })
    }

    /// Queue a raw frame, waiting while the channel is full.
    ///
    /// Must not be called from inside an async context.
    pub fn push_frame(&self, frame: Vec<u8>) -> anyhow::Result<()> {
        self.frame_tx
            .blocking_send(frame)
            .map_err(|_| anyhow::anyhow!("bot session has stopped"))
    }

    pub fn try_recv(&mut self) -> Option<OutboundMessage> {
        self.out_rx.try_recv().ok()
    }

    /// Wait for the next message; None once the session has ended.
    pub fn recv_blocking(&mut self) -> Option<OutboundMessage> {
        self.out_rx.blocking_recv()
    }

    /// Close the frame channel and wait for the session to finish.
    pub fn finish(self) -> anyhow::Result<SessionStats> {
        let Self {
            rt,
            frame_tx,
            out_rx,
            session,
        } = self;
        drop(frame_tx);
        let stats = rt.block_on(session).context("bot session panicked")?;
        drop(out_rx);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameKind;

    #[test]
    fn push_then_receive() {
        let config = SessionConfig {
            game: GameKind::Place,
            ..SessionConfig::default()
        };
        let mut bot = BotRuntime::start(config).unwrap();
        let mut frame = Vec::new();
        frame.extend_from_slice(&1u32.to_le_bytes());
        frame.extend_from_slice(&1u32.to_le_bytes());
        frame.extend_from_slice(&0xd77355u32.to_le_bytes());
        bot.push_frame(frame).unwrap();

        let first = bot.recv_blocking().unwrap();
        assert!(matches!(first, OutboundMessage::Observation(ref o) if o.occupied == 1));
        assert_eq!(
            bot.recv_blocking(),
            Some(OutboundMessage::TickComplete { seq: 1 })
        );

        let stats = bot.finish().unwrap();
        assert_eq!(stats.ticks, 1);
    }
}
