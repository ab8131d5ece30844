use crate::{
    board::{GameStatus, Position},
    checks::{CheckInfo, check_info},
    types::*,
};

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls,
/// and classify the position.
///
/// `pos` is checked with trial moves and comes back unchanged.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) -> GameStatus {
    out.clear();
    let mover = pos.side_to_move();
    let ctx = check_info(pos, mover);

    if ctx.is_double_check() {
        // Only the king can answer two checks at once.
        let king = pos.king_square(mover);
        gen_king(pos, king, mover, out);
    } else {
        pseudo_moves(pos, &ctx, out);
        match ctx.checks.first() {
            None => out.retain(|&mv| {
                mv.piece.kind == PieceKind::King || leaves_king_safe(pos, mv)
            }),
            Some(check) => {
                let targets = blocking_squares(pos, mover, check.square, check.dir);
                out.retain(|&mv| {
                    if mv.piece.kind == PieceKind::King {
                        return true;
                    }
                    if mv.is_en_passant {
                        let resolves = targets.contains(&mv.to)
                            || targets.contains(&mv.en_passant_victim());
                        return resolves && leaves_king_safe(pos, mv);
                    }
                    targets.contains(&mv.to)
                });
            }
        }
    }

    status_of(out.is_empty(), ctx.in_check)
}

/// Terminal classification given whether any legal move exists.
pub fn status_of(no_moves: bool, in_check: bool) -> GameStatus {
    match (no_moves, in_check) {
        (false, _) => GameStatus::Ongoing,
        (true, true) => GameStatus::Checkmate,
        (true, false) => GameStatus::Stalemate,
    }
}

impl Position {
    /// Legal moves and the resulting status in one call.
    pub fn legal_moves_with_status(&mut self) -> (Vec<Move>, GameStatus) {
        let mut out = Vec::with_capacity(64);
        let status = legal_moves_into(self, &mut out);
        (out, status)
    }

    pub fn status(&mut self) -> GameStatus {
        self.legal_moves_with_status().1
    }
}

fn leaves_king_safe(pos: &mut Position, mv: Move) -> bool {
    let mover = mv.piece.color;
    !pos.with_trial_move(mv, |p| p.in_check(mover))
}

/// Squares a non-king move may land on to resolve a single check: the checker's
/// square, plus for sliding checks every square between king and checker.
fn blocking_squares(pos: &Position, mover: Color, checker: u8, dir: Option<Direction>) -> Vec<u8> {
    let Some(dir) = dir else {
        return vec![checker];
    };
    let king = pos.king_square(mover);
    let mut squares = Vec::with_capacity(7);
    let mut i = 1;
    while let Some(s) = offset(king, dir, i) {
        squares.push(s);
        if s == checker {
            break;
        }
        i += 1;
    }
    squares
}

fn pseudo_moves(pos: &mut Position, ctx: &CheckInfo, out: &mut Vec<Move>) {
    let side = pos.side_to_move();
    for sq in 0..64u8 {
        let pc = match pos.piece_at(sq) {
            Some(p) => p,
            None => continue,
        };
        if pc.color != side {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, sq, pc.color, ctx, out),
            PieceKind::Knight => gen_knight(pos, sq, pc.color, ctx, out),
            PieceKind::Bishop => gen_slider(pos, sq, pc.color, ctx, &DIAGONAL, out),
            PieceKind::Rook => gen_slider(pos, sq, pc.color, ctx, &ORTHOGONAL, out),
            PieceKind::Queen => {
                gen_slider(pos, sq, pc.color, ctx, &ORTHOGONAL, out);
                gen_slider(pos, sq, pc.color, ctx, &DIAGONAL, out);
            }
            PieceKind::King => {
                gen_king(pos, sq, pc.color, out);
                if !ctx.in_check {
                    gen_castle(pos, sq, pc.color, out);
                }
            }
        }
    }
}

/// True when a piece pinned along `pin` may travel in direction `d`.
fn along_pin(pin: Option<Direction>, d: Direction) -> bool {
    match pin {
        None => true,
        Some(p) => p == d || p == (-d.0, -d.1),
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, ctx: &CheckInfo, out: &mut Vec<Move>) {
    let pin = ctx.pin_dir(from);
    let fwd = c.forward();
    let start_rank = c.back_rank() + fwd;

    // pushes
    if along_pin(pin, (0, fwd))
        && let Some(to) = offset(from, (0, fwd), 1)
        && pos.is_empty(to)
    {
        out.extend(Move::new(from, to, pos));
        if rank_of(from) == start_rank
            && let Some(to2) = offset(from, (0, fwd), 2)
            && pos.is_empty(to2)
        {
            out.extend(Move::new(from, to2, pos));
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        if !along_pin(pin, (df, fwd)) {
            continue;
        }
        let Some(to) = offset(from, (df, fwd), 1) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(tpc) if tpc.color != c => out.extend(Move::new(from, to, pos)),
            None if pos.en_passant() == Some(to) => out.extend(Move::en_passant(from, to, pos)),
            _ => {}
        }
    }
}

fn gen_knight(pos: &Position, from: u8, c: Color, ctx: &CheckInfo, out: &mut Vec<Move>) {
    // Any knight jump leaves the pin line.
    if ctx.pin_dir(from).is_some() {
        return;
    }
    for d in KNIGHT_JUMPS {
        if let Some(to) = offset(from, d, 1) {
            match pos.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => out.extend(Move::new(from, to, pos)),
            }
        }
    }
}

fn gen_slider(
    pos: &Position,
    from: u8,
    c: Color,
    ctx: &CheckInfo,
    dirs: &[Direction],
    out: &mut Vec<Move>,
) {
    let pin = ctx.pin_dir(from);
    for &d in dirs {
        if !along_pin(pin, d) {
            continue;
        }
        let mut i = 1;
        while let Some(to) = offset(from, d, i) {
            match pos.piece_at(to) {
                None => out.extend(Move::new(from, to, pos)),
                Some(pc) if pc.color != c => {
                    out.extend(Move::new(from, to, pos));
                    break;
                }
                _ => break,
            }
            i += 1;
        }
    }
}

/// King steps, each kept only if the king is safe on the destination.
fn gen_king(pos: &mut Position, from: u8, c: Color, out: &mut Vec<Move>) {
    for d in KING_STEPS {
        let Some(to) = offset(from, d, 1) else {
            continue;
        };
        if pos.piece_at(to).is_some_and(|pc| pc.color == c) {
            continue;
        }
        if let Some(mv) = Move::new(from, to, pos)
            && leaves_king_safe(pos, mv)
        {
            out.push(mv);
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let rank = c.back_rank();
    // Must be on original king square
    if sq(4, rank) != Some(from) {
        return;
    }
    let rights = pos.castling();
    let enemy = c.other();
    let rook = Some(Piece::new(c, PieceKind::Rook));
    let square = |file: i8| rank as u8 * 8 + file as u8;
    let empty = |files: &[i8]| files.iter().all(|&f| pos.is_empty(square(f)));
    let safe = |files: &[i8]| files.iter().all(|&f| !pos.is_square_attacked(square(f), enemy));

    // King side: f and g empty, e f g not attacked
    if rights.kingside(c) && pos.piece_at(square(7)) == rook && empty(&[5, 6]) && safe(&[4, 5, 6])
    {
        out.extend(Move::castle(from, square(6), pos));
    }
    // Queen side: b c d empty, e d c not attacked
    if rights.queenside(c)
        && pos.piece_at(square(0)) == rook
        && empty(&[1, 2, 3])
        && safe(&[4, 3, 2])
    {
        out.extend(Move::castle(from, square(2), pos));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
