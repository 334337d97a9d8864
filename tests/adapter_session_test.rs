mod common;

use std::time::Duration;

use tokio::sync::mpsc;

use common::{place_frame, TetroFrame};
use newyear_bot::adapter::{run_session, OutboundMessage, RecordType, SessionConfig};
use newyear_bot::types::GameKind;

async fn next_message(rx: &mut mpsc::UnboundedReceiver<OutboundMessage>) -> OutboundMessage {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("session did not respond")
        .expect("session closed")
}

#[tokio::test]
async fn session_decides_on_newest_frame_only() {
    let (frame_tx, frame_rx) = mpsc::channel::<Vec<u8>>(8);
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<OutboundMessage>();

    frame_tx.send(TetroFrame::new(10, 20).encode()).await.unwrap();
    frame_tx.send(vec![1, 2, 3]).await.unwrap();
    frame_tx
        .send(TetroFrame::new(10, 20).square(4).zone(9.0, 20.0).encode())
        .await
        .unwrap();
    drop(frame_tx);

    let stats = run_session(SessionConfig::default(), frame_rx, out_tx)
        .await
        .unwrap();
    assert_eq!(stats.ticks, 1);
    assert_eq!(stats.superseded, 2);
    assert_eq!(stats.commands, 2);
    assert_eq!(stats.errors, 0);

    let mut out = Vec::new();
    while let Some(msg) = out_rx.recv().await {
        out.push(msg);
    }
    assert_eq!(out.len(), 5);
    match &out[0] {
        OutboundMessage::Observation(o) => {
            assert_eq!(o.game, "tetro");
            assert_eq!(o.piece.as_ref().map(|p| p.x), Some(4));
        }
        other => panic!("expected observation, got {:?}", other),
    }
    match &out[1] {
        OutboundMessage::Decision(d) => {
            assert_eq!(d.commands, vec!["Left", "Zone"]);
            assert_eq!(d.horizontal_offset, -4);
        }
        other => panic!("expected decision, got {:?}", other),
    }
    assert_eq!(out[2], OutboundMessage::Command("Left".to_string()));
    assert_eq!(out[3], OutboundMessage::Command("Zone".to_string()));
    assert_eq!(out[4], OutboundMessage::TickComplete { seq: 1 });
}

#[tokio::test]
async fn session_reports_errors_and_keeps_running() {
    let path = std::env::temp_dir().join(format!("newyear-bot-wire-{}.jsonl", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let config = SessionConfig {
        log_path: Some(path.to_string_lossy().into_owned()),
        ..SessionConfig::default()
    };
    let (frame_tx, frame_rx) = mpsc::channel::<Vec<u8>>(4);
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<OutboundMessage>();
    let session = tokio::spawn(run_session(config, frame_rx, out_tx));

    frame_tx.send(vec![0u8; 5]).await.unwrap();
    match next_message(&mut out_rx).await {
        OutboundMessage::Error(e) => {
            assert_eq!(e.msg_type, RecordType::Error);
            assert_eq!(e.code, "malformed_frame");
        }
        other => panic!("expected error, got {:?}", other),
    }
    assert_eq!(
        next_message(&mut out_rx).await,
        OutboundMessage::TickComplete { seq: 1 }
    );

    frame_tx.send(TetroFrame::new(10, 20).encode()).await.unwrap();
    let mut lines = Vec::new();
    loop {
        match next_message(&mut out_rx).await {
            OutboundMessage::Command(line) => lines.push(line),
            OutboundMessage::TickComplete { seq } => {
                assert_eq!(seq, 2);
                break;
            }
            _ => {}
        }
    }
    assert_eq!(lines, vec!["FastFall"]);

    drop(frame_tx);
    let stats = session.await.unwrap().unwrap();
    assert_eq!(stats.ticks, 2);
    assert_eq!(stats.errors, 1);

    let log = std::fs::read_to_string(&path).unwrap();
    let types: Vec<String> = log
        .lines()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).unwrap();
            v["type"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(types, vec!["error", "observation", "decision"]);
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn session_stops_when_receiver_dropped() {
    let (frame_tx, frame_rx) = mpsc::channel::<Vec<u8>>(4);
    let (out_tx, out_rx) = mpsc::unbounded_channel::<OutboundMessage>();
    drop(out_rx);

    frame_tx.send(place_frame(1, 1, &[0])).await.unwrap();
    let config = SessionConfig {
        game: GameKind::Place,
        ..SessionConfig::default()
    };
    let stats = run_session(config, frame_rx, out_tx).await.unwrap();
    assert_eq!(stats.ticks, 1);
    drop(frame_tx);
}

#[test]
fn session_runs_on_block_on() {
    let (frame_tx, frame_rx) = mpsc::channel::<Vec<u8>>(4);
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<OutboundMessage>();
    frame_tx.try_send(place_frame(2, 1, &[0x646964, 0])).unwrap();
    drop(frame_tx);

    let config = SessionConfig {
        game: GameKind::Place,
        ..SessionConfig::default()
    };
    let stats = tokio_test::block_on(run_session(config, frame_rx, out_tx)).unwrap();
    assert_eq!(stats.ticks, 1);
    assert_eq!(stats.commands, 0);

    match out_rx.try_recv().unwrap() {
        OutboundMessage::Observation(o) => {
            assert_eq!(o.game, "place");
            assert_eq!(o.occupied, 1);
            assert!(o.zone.is_none());
        }
        other => panic!("expected observation, got {:?}", other),
    }
}
