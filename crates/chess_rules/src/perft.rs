use crate::{
    board::Position,
    movegen::legal_moves_into,
    types::{Move, PieceKind},
};

const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
///
/// The generator emits one move per promotion square; perft plays each of the
/// four promotion choices so totals match published tables.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(pos: &mut Position, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        legal_moves_into(pos, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            if mv.is_promotion() {
                for kind in PROMOTIONS {
                    let choice = mv.with_promotion(kind);
                    pos.make_move(choice);
                    nodes += inner(pos, depth - 1, rest);
                    pos.undo_move();
                }
            } else {
                pos.make_move(mv);
                nodes += inner(pos, depth - 1, rest);
                pos.undo_move();
            }
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, depth, &mut layers[..])
}
