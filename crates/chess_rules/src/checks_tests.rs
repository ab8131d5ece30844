use super::*;

fn info(fen: &str) -> CheckInfo {
    let pos = Position::from_fen(fen).unwrap();
    check_info(&pos, pos.side_to_move())
}

#[test]
fn quiet_start_position() {
    let ctx = info("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert!(!ctx.in_check);
    assert!(ctx.pins.is_empty());
    assert!(ctx.checks.is_empty());
}

#[test]
fn rook_pins_along_file() {
    let ctx = info("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1");
    assert!(!ctx.in_check);
    assert_eq!(ctx.pins, vec![Pin { square: 12, dir: (0, 1) }]);
    assert_eq!(ctx.pin_dir(12), Some((0, 1)));
}

#[test]
fn bishop_does_not_pin_on_a_file() {
    let ctx = info("4k3/4b3/8/8/8/8/4N3/4K3 w - - 0 1");
    assert!(ctx.pins.is_empty());
}

#[test]
fn two_allies_block_a_pin() {
    let ctx = info("4k3/4r3/8/8/4P3/8/4N3/4K3 w - - 0 1");
    assert!(ctx.pins.is_empty());
}

#[test]
fn slider_check_has_direction() {
    let ctx = info("4k3/8/8/8/8/8/8/q3K3 w - - 0 1");
    assert!(ctx.in_check);
    assert_eq!(ctx.checks, vec![Check { square: 0, dir: Some((-1, 0)) }]);
}

#[test]
fn knight_check_has_no_direction() {
    let ctx = info("4k3/8/8/8/8/5n2/8/4K3 w - - 0 1");
    assert_eq!(ctx.checks, vec![Check { square: 21, dir: None }]);
}

#[test]
fn pawn_checks_only_toward_its_capture_side() {
    // Black pawn on d2 attacks e1.
    assert!(info("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1").in_check);
    // Black pawn on d1 beside the king gives no check.
    assert!(!info("4k3/8/8/8/8/8/8/3pK3 w - - 0 1").in_check);
    // White pawn on d7 attacks the black king on e8.
    assert!(info("4k3/3P4/8/8/8/8/8/4K3 b - - 0 1").in_check);
    // A distant pawn on the diagonal does not.
    assert!(!info("4k3/8/8/8/8/2p5/8/4K3 w - - 0 1").in_check);
}

#[test]
fn double_check_detected() {
    let ctx = info("4k3/8/3N4/8/8/8/8/4RK2 b - - 0 1");
    assert!(ctx.in_check);
    assert!(ctx.is_double_check());
}
