use crate::notation::{MoveLog, notation};
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }

    pub fn kingside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }

    pub fn queenside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }

    fn clear(&mut self, c: Color) {
        match c {
            Color::White => {
                self.wk = false;
                self.wq = false;
            }
            Color::Black => {
                self.bk = false;
                self.bq = false;
            }
        }
    }

    /// Drops the right tied to the rook corner `corner`, if it is one of `c`'s.
    fn clear_corner(&mut self, c: Color, corner: u8) {
        if rank_of(corner) != c.back_rank() {
            return;
        }
        match (c, file_of(corner)) {
            (Color::White, 0) => self.wq = false,
            (Color::White, 7) => self.wk = false,
            (Color::Black, 0) => self.bq = false,
            (Color::Black, 7) => self.bk = false,
            _ => {}
        }
    }
}

/// State captured before a move so that undo can restore it verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Undo {
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Outcome derived from the legal-move set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) king_sq: [u8; 2],
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    move_history: Vec<Move>,
    rights_history: Vec<Undo>,
    move_log: MoveLog,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        let mut board = [None; 64];

        // Pawns
        for f in 0..8 {
            board[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            board[f] = Some(Piece::new(Color::White, kind));
            board[56 + f] = Some(Piece::new(Color::Black, kind));
        }

        Self::from_parts(board, Color::White, CastlingRights::all(), None, 0, 1)
    }

    /// Assembles a position whose board is known to hold exactly one king per side.
    pub(crate) fn from_parts(
        board: [Option<Piece>; 64],
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<u8>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        let mut king_sq = [0u8; 2];
        for (i, pc) in board.iter().enumerate() {
            if let Some(pc) = pc
                && pc.kind == PieceKind::King
            {
                king_sq[pc.color.idx()] = i as u8;
            }
        }
        Position {
            board,
            side_to_move,
            king_sq,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            move_history: Vec::new(),
            rights_history: Vec::new(),
            move_log: MoveLog::default(),
        }
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn is_empty(&self, sq: u8) -> bool {
        self.board[sq as usize].is_none()
    }
    fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
    pub fn king_square(&self, c: Color) -> u8 {
        self.king_sq[c.idx()]
    }
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }
    pub fn en_passant(&self) -> Option<u8> {
        self.en_passant
    }
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }
    pub fn rights_history(&self) -> &[Undo] {
        &self.rights_history
    }

    /// Move log lines, one per move pair.
    pub fn move_log(&self) -> Vec<String> {
        self.move_log.lines()
    }

    pub fn in_check(&self, c: Color) -> bool {
        self.is_square_attacked(self.king_square(c), c.other())
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        // A pawn of `by` attacks `target` from one rank behind it (from by's point of view).
        for df in [-1, 1] {
            if let Some(s) = offset(target, (df, -by.forward()), 1)
                && self.piece_at(s) == Some(Piece::new(by, PieceKind::Pawn))
            {
                return true;
            }
        }

        for d in KNIGHT_JUMPS {
            if let Some(s) = offset(target, d, 1)
                && self.piece_at(s) == Some(Piece::new(by, PieceKind::Knight))
            {
                return true;
            }
        }

        for d in KING_STEPS {
            if let Some(s) = offset(target, d, 1)
                && self.piece_at(s) == Some(Piece::new(by, PieceKind::King))
            {
                return true;
            }
        }

        // Sliding: bishop/rook/queen
        for d in KING_STEPS {
            let slider = if is_diagonal(d) {
                PieceKind::Bishop
            } else {
                PieceKind::Rook
            };
            let mut i = 1;
            while let Some(s) = offset(target, d, i) {
                if let Some(pc) = self.piece_at(s) {
                    if pc.color == by && (pc.kind == slider || pc.kind == PieceKind::Queen) {
                        return true;
                    }
                    break;
                }
                i += 1;
            }
        }

        false
    }

    /// Applies `mv` without checking legality.
    pub fn make_move(&mut self, mv: Move) {
        let from = mv.from;
        let to = mv.to;
        let moved = mv.piece;
        debug_assert_eq!(self.piece_at(from), Some(moved), "move does not match board");

        self.set_piece(from, None);
        if mv.is_en_passant {
            self.set_piece(mv.en_passant_victim(), None);
        }
        let placed = match mv.promo {
            Some(kind) => Piece::new(moved.color, kind),
            None => moved,
        };
        self.set_piece(to, Some(placed));

        if mv.is_castle {
            let (rf, rt) = castle_rook_squares(mv);
            let rook = self.piece_at(rf);
            self.set_piece(rf, None);
            self.set_piece(rt, rook);
        }

        if moved.kind == PieceKind::King {
            self.king_sq[moved.color.idx()] = to;
        }

        self.rights_history.push(Undo {
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });

        // Update castling rights if king/rook moved or rook captured
        match moved.kind {
            PieceKind::King => self.castling.clear(moved.color),
            PieceKind::Rook => self.castling.clear_corner(moved.color, from),
            _ => {}
        }
        if let Some(cp) = mv.captured
            && cp.kind == PieceKind::Rook
        {
            self.castling.clear_corner(cp.color, to);
        }

        // Double pawn push sets en-passant square
        self.en_passant = None;
        if moved.kind == PieceKind::Pawn && (rank_of(to) - rank_of(from)).abs() == 2 {
            self.en_passant = sq(file_of(from), (rank_of(from) + rank_of(to)) / 2);
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || mv.captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };

        self.move_log
            .record(moved.color, self.fullmove_number, notation(&mv));
        self.move_history.push(mv);

        if moved.color == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();
    }

    /// Reverts the last move. Does nothing when no move has been made.
    pub fn undo_move(&mut self) {
        let (Some(mv), Some(undo)) = (self.move_history.pop(), self.rights_history.pop()) else {
            return;
        };

        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        self.set_piece(mv.from, Some(mv.piece));
        if mv.is_en_passant {
            self.set_piece(mv.to, None);
            self.set_piece(mv.en_passant_victim(), mv.captured);
        } else {
            self.set_piece(mv.to, mv.captured);
        }

        if mv.is_castle {
            let (rf, rt) = castle_rook_squares(mv);
            let rook = self.piece_at(rt);
            self.set_piece(rt, None);
            self.set_piece(rf, rook);
        }

        if mv.piece.kind == PieceKind::King {
            self.king_sq[mv.piece.color.idx()] = mv.from;
        }

        self.move_log.unrecord(mv.piece.color);
    }

    /// Plays `mv`, hands the resulting position to `inspect`, then takes the move back.
    pub fn with_trial_move<R>(&mut self, mv: Move, inspect: impl FnOnce(&Self) -> R) -> R {
        self.make_move(mv);
        let out = inspect(self);
        self.undo_move();
        out
    }
}

/// (rook_from, rook_to) for a castling move.
fn castle_rook_squares(mv: Move) -> (u8, u8) {
    let rank = rank_of(mv.from);
    let (rf, rt) = if file_of(mv.to) > file_of(mv.from) {
        (7, 5)
    } else {
        (0, 3)
    };
    (rank as u8 * 8 + rf, rank as u8 * 8 + rt)
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
