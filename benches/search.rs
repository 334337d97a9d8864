use criterion::{black_box, criterion_group, criterion_main, Criterion};
use newyear_bot::core::{decode_tetro, BoardState, Piece, TetroSnapshot, ZoneState};
use newyear_bot::engine::{best_move, compute_features, tick, BotController, ControllerConfig};
use newyear_bot::types::GameKind;

fn ragged_board() -> BoardState {
    let mut board = BoardState::new(10, 20);
    for x in 0..10i32 {
        let top = 12 + (x * 7 % 5);
        for y in top..20 {
            if (x + y) % 6 != 0 {
                board.set(x, y, 1);
            }
        }
    }
    board
}

fn t_piece() -> Piece {
    Piece {
        origin: (3, 0),
        size: 3,
        color: 0xd77355,
        blocks: vec![(1, 0), (0, 1), (1, 1), (2, 1)],
    }
}

fn encode(snapshot: &TetroSnapshot) -> Vec<u8> {
    let board = &snapshot.board;
    let mut buf = Vec::new();
    buf.extend_from_slice(&board.width().to_le_bytes());
    buf.extend_from_slice(&board.height().to_le_bytes());
    for cell in board.cells() {
        buf.extend_from_slice(&cell.to_le_bytes());
    }
    buf.extend_from_slice(&snapshot.zone.meter.to_le_bytes());
    buf.extend_from_slice(&snapshot.zone.max.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());
    let piece = &snapshot.piece;
    buf.extend_from_slice(&piece.origin.0.to_le_bytes());
    buf.extend_from_slice(&piece.origin.1.to_le_bytes());
    buf.extend_from_slice(&piece.size.to_le_bytes());
    buf.extend_from_slice(&piece.color.to_le_bytes());
    buf.extend_from_slice(&(piece.blocks.len() as u32).to_le_bytes());
    for &(bx, by) in &piece.blocks {
        buf.push(bx);
        buf.push(by);
    }
    buf
}

fn snapshot() -> TetroSnapshot {
    TetroSnapshot {
        board: ragged_board(),
        zone: ZoneState {
            meter: 4.0,
            max: 20.0,
            penalty_lines: Vec::new(),
        },
        piece: t_piece(),
    }
}

fn bench_features(c: &mut Criterion) {
    let board = ragged_board();
    c.bench_function("compute_features_10x20", |b| {
        b.iter(|| compute_features(black_box(&board)))
    });
}

fn bench_search(c: &mut Criterion) {
    let board = ragged_board();
    let piece = t_piece();
    c.bench_function("best_move_t_piece", |b| {
        b.iter(|| best_move(black_box(&board), black_box(&piece), 0))
    });
}

fn bench_decide(c: &mut Criterion) {
    let snap = snapshot();
    c.bench_function("controller_decide", |b| {
        b.iter(|| BotController::new(black_box(&snap)).decide())
    });
}

fn bench_tick(c: &mut Criterion) {
    let frame = encode(&snapshot());
    c.bench_function("decode_tetro_frame", |b| {
        b.iter(|| decode_tetro(black_box(&frame)))
    });
    c.bench_function("full_tick", |b| {
        b.iter(|| tick(GameKind::Tetro, black_box(&frame), ControllerConfig::default()))
    });
}

criterion_group!(benches, bench_features, bench_search, bench_decide, bench_tick);
criterion_main!(benches);
