use super::*;
use crate::{board::Position, movegen::legal_moves, uci::parse_uci_move};

fn san(fen: &str, uci: &str) -> String {
    let pos = Position::from_fen(fen).unwrap();
    notation(&parse_uci_move(&legal_moves(&pos), uci).unwrap())
}

#[test]
fn quiet_moves() {
    let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    assert_eq!(san(start, "e2e4"), "e4");
    assert_eq!(san(start, "g1f3"), "Nf3");
}

#[test]
fn captures() {
    let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";
    assert_eq!(san(fen, "e4d5"), "exd5");
    let fen = "4k3/8/8/3r4/8/8/8/3QK3 w - - 0 1";
    assert_eq!(san(fen, "d1d5"), "Qxd5");
}

#[test]
fn castling() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
    assert_eq!(san(fen, "e1g1"), "O-O");
    assert_eq!(san(fen, "e1c1"), "O-O-O");
}

#[test]
fn promotions() {
    assert_eq!(san("3r3k/4P3/8/8/8/8/8/4K3 w - - 0 1", "e7e8"), "e8=Q");
    assert_eq!(san("3r3k/4P3/8/8/8/8/8/4K3 w - - 0 1", "e7d8r"), "exd8=R");
}

#[test]
fn en_passant_renders_as_capture() {
    let fen = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2";
    assert_eq!(san(fen, "e5d6"), "exd6");
}

#[test]
fn log_pairs_and_truncates() {
    let mut log = MoveLog::default();
    log.record(Color::White, 1, "e4".into());
    log.record(Color::Black, 1, "e5".into());
    log.record(Color::White, 2, "Nf3".into());
    assert_eq!(log.lines(), vec!["1. e4 e5", "2. Nf3"]);

    log.unrecord(Color::White);
    assert_eq!(log.lines(), vec!["1. e4 e5"]);
    log.unrecord(Color::Black);
    assert_eq!(log.lines(), vec!["1. e4"]);
    log.unrecord(Color::White);
    assert!(log.is_empty());
}

#[test]
fn log_opened_by_black() {
    let mut log = MoveLog::default();
    log.record(Color::Black, 7, "Kd7".into());
    log.record(Color::White, 8, "Ke2".into());
    assert_eq!(log.lines(), vec!["7... Kd7", "8. Ke2"]);
    log.unrecord(Color::White);
    log.unrecord(Color::Black);
    assert_eq!(log.len(), 0);
}
