//! Async bot session.
//!
//! Frames arrive on a bounded channel. Whenever the session is ready for the
//! next tick it drains the channel and keeps only the newest frame; older ones
//! describe a board that no longer exists.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::engine::tick;
use crate::protocol::{
    build_observation, create_decision, create_error, DecisionMessage, ErrorMessage,
    ObservationMessage,
};

/// Message produced by the session, in emit order per tick
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundMessage {
    /// One text command line for the game server
    Command(String),
    Observation(ObservationMessage),
    Decision(DecisionMessage),
    Error(ErrorMessage),
    /// Last message of every processed tick
    TickComplete { seq: u64 },
}

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Ticks processed
    pub ticks: u64,
    /// Frames dropped because a newer one was already queued
    pub superseded: u64,
    pub commands: u64,
    pub errors: u64,
}

enum WireRecord {
    Observation(ObservationMessage),
    Decision(DecisionMessage),
    Error(ErrorMessage),
}

/// Decode one frame and build everything the session emits for it
pub fn process_frame(config: &SessionConfig, seq: u64, frame: &[u8]) -> Vec<OutboundMessage> {
    let mut out = Vec::new();
    match tick(config.game, frame, config.controller) {
        Ok(output) => {
            out.push(OutboundMessage::Observation(build_observation(
                seq,
                &output.snapshot,
            )));
            if let Some(decision) = &output.decision {
                out.push(OutboundMessage::Decision(create_decision(seq, decision)));
            }
            out.extend(output.command_lines().into_iter().map(OutboundMessage::Command));
        }
        Err(err) => {
            warn!(seq, code = err.code(), "tick failed: {}", err);
            out.push(OutboundMessage::Error(create_error(seq, &err)));
            if let Some(cmd) = err.zone_command() {
                out.push(OutboundMessage::Command(cmd.as_str().to_string()));
            }
        }
    }
    out.push(OutboundMessage::TickComplete { seq });
    out
}

/// Run until the frame channel closes or the outbound receiver is dropped.
pub async fn run_session(
    config: SessionConfig,
    mut frames_rx: mpsc::Receiver<Vec<u8>>,
    out_tx: mpsc::UnboundedSender<OutboundMessage>,
) -> anyhow::Result<SessionStats> {
    info!(game = %config.game, "bot session started");

    let (wire_log_tx, wire_log_task) = match config.log_path.clone() {
        Some(path) => {
            let (tx, task) = spawn_wire_log(path);
            (Some(tx), Some(task))
        }
        None => (None, None),
    };

    let mut stats = SessionStats::default();

    'frames: while let Some(mut frame) = frames_rx.recv().await {
        let mut superseded = 0u64;
        while let Ok(newer) = frames_rx.try_recv() {
            frame = newer;
            superseded += 1;
        }
        if superseded > 0 {
            debug!(superseded, "skipped stale frames");
            stats.superseded += superseded;
        }

        stats.ticks += 1;
        let seq = stats.ticks;

        for msg in process_frame(&config, seq, &frame) {
            match &msg {
                OutboundMessage::Command(_) => stats.commands += 1,
                OutboundMessage::Error(_) => stats.errors += 1,
                _ => {}
            }
            if let Some(tx) = &wire_log_tx {
                let record = match &msg {
                    OutboundMessage::Observation(v) => Some(WireRecord::Observation(v.clone())),
                    OutboundMessage::Decision(v) => Some(WireRecord::Decision(v.clone())),
                    OutboundMessage::Error(v) => Some(WireRecord::Error(v.clone())),
                    OutboundMessage::Command(_) | OutboundMessage::TickComplete { .. } => None,
                };
                if let Some(record) = record {
                    let _ = tx.send(record);
                }
            }
            if out_tx.send(msg).is_err() {
                info!("outbound receiver dropped, stopping session");
                break 'frames;
            }
        }
    }

    drop(wire_log_tx);
    if let Some(task) = wire_log_task {
        task.await?;
    }

    info!(
        ticks = stats.ticks,
        superseded = stats.superseded,
        commands = stats.commands,
        errors = stats.errors,
        "bot session finished"
    );
    Ok(stats)
}

/// Append records as JSON lines until every sender is dropped
fn spawn_wire_log(path: String) -> (mpsc::UnboundedSender<WireRecord>, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::unbounded_channel::<WireRecord>();
    let task = tokio::spawn(async move {
        use tokio::fs::OpenOptions;
        use tokio::io::AsyncWriteExt;

        let mut file = match OpenOptions::new().create(true).append(true).open(&path).await {
            Ok(f) => f,
            Err(err) => {
                warn!(%path, "cannot open wire log: {}", err);
                return;
            }
        };

        let mut buf: Vec<u8> = Vec::with_capacity(4096);

        while let Some(rec) = rx.recv().await {
            buf.clear();
            let encoded = match &rec {
                WireRecord::Observation(v) => serde_json::to_writer(&mut buf, v),
                WireRecord::Decision(v) => serde_json::to_writer(&mut buf, v),
                WireRecord::Error(v) => serde_json::to_writer(&mut buf, v),
            };
            if encoded.is_err() {
                continue;
            }
            buf.push(b'\n');
            if file.write_all(&buf).await.is_err() {
                break;
            }
        }

        let _ = file.flush().await;
    });
    (tx, task)
}
