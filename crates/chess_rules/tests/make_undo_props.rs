//! Property tests: undo is the exact inverse of make along random games.

use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use chess_rules::{Color, GameStatus, Piece, PieceKind, Position, legal_moves_into};

const FENS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: every legal move followed by undo restores the position exactly,
    /// at every step of a random game.
    #[test]
    fn prop_make_undo_restores_state(
        seed in any::<u64>(),
        fen_idx in 0..FENS.len(),
        num_moves in 1usize..40,
    ) {
        let mut pos = Position::from_fen(FENS[fen_idx]).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut moves = Vec::new();
        let mut snapshots = Vec::new();

        for _ in 0..num_moves {
            let status = legal_moves_into(&mut pos, &mut moves);
            if status != GameStatus::Ongoing {
                prop_assert!(moves.is_empty());
                break;
            }

            for &mv in &moves {
                let before = pos.clone();
                pos.make_move(mv);
                pos.undo_move();
                prop_assert_eq!(&pos, &before);
            }

            let mv = *moves.choose(&mut rng).unwrap();
            snapshots.push(pos.clone());
            pos.make_move(mv);

            prop_assert_eq!(pos.move_history().len(), pos.rights_history().len());
            for color in [Color::White, Color::Black] {
                let ksq = pos.king_square(color);
                prop_assert_eq!(
                    pos.piece_at(ksq),
                    Some(Piece::new(color, PieceKind::King))
                );
            }
        }

        // Unwinding the whole game walks back through every snapshot.
        while let Some(expected) = snapshots.pop() {
            pos.undo_move();
            prop_assert_eq!(&pos, &expected);
        }
    }
}
