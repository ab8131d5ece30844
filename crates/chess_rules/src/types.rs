use crate::board::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Rank step of a pawn push for this color.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
    pub fn back_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case letter used by algebraic notation and FEN.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Piece a pawn may promote to, from either case of its letter.
    pub fn promotion_from_letter(ch: char) -> Option<PieceKind> {
        match PieceKind::from_letter(ch)? {
            PieceKind::Pawn | PieceKind::King => None,
            kind => Some(kind),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN character: upper case for White, lower case for Black.
    pub fn fen_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

/// A single ply.
///
/// Built against a position so the moved and captured pieces are resolved once.
/// Identity is the start square, end square and moved piece: a bare two-square
/// candidate compares equal to the fully annotated legal move it names.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub from: u8, // 0..63
    pub to: u8,   // 0..63
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub promo: Option<PieceKind>,
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.piece == other.piece
    }
}
impl Eq for Move {}

impl Move {
    /// Builds a move from `from` to `to` as it stands on `pos`.
    /// Returns `None` when the start square is empty.
    ///
    /// A pawn landing on its last rank promotes to a queen unless
    /// [`Move::with_promotion`] picks something else.
    pub fn new(from: u8, to: u8, pos: &Position) -> Option<Self> {
        let piece = pos.piece_at(from)?;
        let promotes = piece.kind == PieceKind::Pawn
            && rank_of(to) == piece.color.other().back_rank();
        Some(Self {
            from,
            to,
            piece,
            captured: pos.piece_at(to),
            is_en_passant: false,
            is_castle: false,
            promo: promotes.then_some(PieceKind::Queen),
        })
    }

    /// En-passant capture; the captured pawn sits beside the destination.
    pub fn en_passant(from: u8, to: u8, pos: &Position) -> Option<Self> {
        let mut mv = Self::new(from, to, pos)?;
        mv.is_en_passant = true;
        mv.captured = Some(Piece::new(mv.piece.color.other(), PieceKind::Pawn));
        Some(mv)
    }

    pub fn castle(from: u8, to: u8, pos: &Position) -> Option<Self> {
        let mut mv = Self::new(from, to, pos)?;
        mv.is_castle = true;
        Some(mv)
    }

    /// Same move with another promotion piece. No effect on non-promotions.
    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        if self.promo.is_some() && !matches!(kind, PieceKind::Pawn | PieceKind::King) {
            self.promo = Some(kind);
        }
        self
    }

    pub fn is_promotion(&self) -> bool {
        self.promo.is_some()
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Square of the pawn removed by an en-passant capture.
    pub fn en_passant_victim(&self) -> u8 {
        rank_of(self.from) as u8 * 8 + file_of(self.to) as u8
    }
}

/// Ray step as (file delta, rank delta).
pub type Direction = (i8, i8);

pub const ORTHOGONAL: [Direction; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const KING_STEPS: [Direction; 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
pub const KNIGHT_JUMPS: [Direction; 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub fn is_diagonal(d: Direction) -> bool {
    d.0 != 0 && d.1 != 0
}

// Helpers
pub fn file_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn rank_of(sq: u8) -> i8 {
    (sq / 8) as i8
}
pub fn sq(file: i8, rank: i8) -> Option<u8> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank as u8) * 8 + (file as u8))
    } else {
        None
    }
}

/// Square reached by stepping `steps` times along `d`, if still on the board.
pub fn offset(from: u8, d: Direction, steps: i8) -> Option<u8> {
    sq(file_of(from) + d.0 * steps, rank_of(from) + d.1 * steps)
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    let file = f - b'a';
    let rank = r - b'1';
    Some(rank * 8 + file)
}
