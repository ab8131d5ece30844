use super::*;
use crate::{movegen::legal_moves, uci::parse_uci_move};

fn play(pos: &mut Position, moves: &[&str]) {
    for txt in moves {
        let mv = parse_uci_move(&legal_moves(pos), txt).unwrap();
        pos.make_move(mv);
    }
}

#[test]
fn startpos_state() {
    let pos = Position::startpos();
    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.king_square(Color::White), 4);
    assert_eq!(pos.king_square(Color::Black), 60);
    assert_eq!(pos.castling(), CastlingRights::all());
    assert_eq!(pos.en_passant(), None);
    assert!(pos.move_history().is_empty());
}

#[test]
fn double_push_sets_en_passant_for_one_ply() {
    let mut pos = Position::startpos();
    play(&mut pos, &["e2e4"]);
    assert_eq!(pos.en_passant(), Some(20)); // e3
    play(&mut pos, &["g8f6"]);
    assert_eq!(pos.en_passant(), None);
}

#[test]
fn scenario_e4_e5_qh5() {
    let mut pos = Position::startpos();
    play(&mut pos, &["e2e4", "e7e5", "d1h5"]);

    let log = pos.move_log();
    assert_eq!(log, vec!["1. e4 e5".to_string(), "2. Qh5".to_string()]);
    assert_eq!(pos.en_passant(), None);
    assert!(pos.castling().wk);
    assert_eq!(pos.side_to_move(), Color::Black);
}

#[test]
fn undo_restores_previous_position() {
    let mut pos = Position::startpos();
    play(&mut pos, &["e2e4", "e7e5", "g1f3"]);
    let before = pos.clone();

    play(&mut pos, &["b8c6"]);
    pos.undo_move();
    assert_eq!(pos, before);
}

#[test]
fn undo_on_empty_history_is_noop() {
    let mut pos = Position::startpos();
    pos.undo_move();
    assert_eq!(pos, Position::startpos());
}

#[test]
fn histories_stay_paired() {
    let mut pos = Position::startpos();
    play(&mut pos, &["d2d4", "d7d5", "c1f4"]);
    assert_eq!(pos.move_history().len(), 3);
    assert_eq!(pos.rights_history().len(), 3);
    pos.undo_move();
    assert_eq!(pos.move_history().len(), pos.rights_history().len());
}

#[test]
fn king_move_clears_both_rights() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    play(&mut pos, &["e1e2"]);
    let rights = pos.castling();
    assert!(!rights.wk && !rights.wq);
    assert!(rights.bk && rights.bq);
    assert_eq!(pos.king_square(Color::White), 12);
}

#[test]
fn rook_capture_on_corner_clears_right() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    play(&mut pos, &["a1a8"]);
    let rights = pos.castling();
    assert!(!rights.wq, "white rook left its corner");
    assert!(!rights.bq, "black rook was captured on its corner");
    assert!(rights.wk && rights.bk);
}

#[test]
fn castling_moves_rook_and_undo_returns_it() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let before = pos.clone();

    play(&mut pos, &["e1g1"]);
    assert_eq!(pos.piece_at(6), Some(Piece::new(Color::White, PieceKind::King)));
    assert_eq!(pos.piece_at(5), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert!(pos.is_empty(7));
    assert_eq!(pos.move_log(), vec!["1. O-O".to_string()]);

    play(&mut pos, &["e8c8"]);
    assert_eq!(pos.piece_at(58), Some(Piece::new(Color::Black, PieceKind::King)));
    assert_eq!(pos.piece_at(59), Some(Piece::new(Color::Black, PieceKind::Rook)));
    assert!(pos.is_empty(56));
    assert_eq!(pos.move_log(), vec!["1. O-O O-O-O".to_string()]);

    pos.undo_move();
    pos.undo_move();
    assert_eq!(pos, before);
}

#[test]
fn en_passant_removes_pawn_beside_destination() {
    let mut pos = Position::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1").unwrap();
    play(&mut pos, &["e2e4"]);
    let before = pos.clone();

    let mv = parse_uci_move(&legal_moves(&pos), "d4e3").unwrap();
    assert!(mv.is_en_passant);
    pos.make_move(mv);
    assert!(pos.is_empty(28), "e4 pawn captured");
    assert_eq!(pos.piece_at(20), Some(Piece::new(Color::Black, PieceKind::Pawn)));
    assert_eq!(pos.move_log(), vec!["1. e4 dxe3".to_string()]);

    pos.undo_move();
    assert_eq!(pos, before);
}

#[test]
fn promotion_defaults_to_queen_and_can_be_overridden() {
    let pos = Position::from_fen("k7/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let mv = parse_uci_move(&legal_moves(&pos), "e7e8").unwrap();
    assert_eq!(mv.promo, Some(PieceKind::Queen));

    let mut queened = pos.clone();
    queened.make_move(mv);
    assert_eq!(queened.piece_at(60), Some(Piece::new(Color::White, PieceKind::Queen)));

    let mut knighted = pos.clone();
    knighted.make_move(mv.with_promotion(PieceKind::Knight));
    assert_eq!(knighted.piece_at(60), Some(Piece::new(Color::White, PieceKind::Knight)));
    assert_eq!(knighted.move_log(), vec!["1. e8=N".to_string()]);

    knighted.undo_move();
    assert_eq!(knighted, pos);
}

#[test]
fn counters_follow_moves() {
    let mut pos = Position::startpos();
    play(&mut pos, &["g1f3", "g8f6"]);
    assert_eq!(pos.halfmove_clock(), 2);
    assert_eq!(pos.fullmove_number(), 2);
    play(&mut pos, &["e2e4"]);
    assert_eq!(pos.halfmove_clock(), 0);
    pos.undo_move();
    pos.undo_move();
    assert_eq!(pos.halfmove_clock(), 1);
    assert_eq!(pos.fullmove_number(), 1);
}

#[test]
fn trial_move_leaves_position_untouched() {
    let mut pos = Position::startpos();
    let before = pos.clone();
    let mv = parse_uci_move(&legal_moves(&pos), "e2e4").unwrap();
    let side_after = pos.with_trial_move(mv, |p| p.side_to_move());
    assert_eq!(side_after, Color::Black);
    assert_eq!(pos, before);
}

#[test]
fn square_attack_queries() {
    let pos = Position::startpos();
    assert!(pos.is_square_attacked(20, Color::White)); // e3 by pawns
    assert!(pos.is_square_attacked(21, Color::White)); // f3 by g1 knight
    assert!(!pos.is_square_attacked(28, Color::White)); // e4
    assert!(pos.is_square_attacked(44, Color::Black)); // e6
    assert!(!pos.in_check(Color::White));
}
