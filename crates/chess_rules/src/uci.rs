use thiserror::Error;

use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("move must be 4-5 characters, found {0}")]
    InvalidLength(usize),
    #[error("invalid square in '{0}'")]
    InvalidSquare(String),
    #[error("invalid promotion piece '{0}'")]
    InvalidPromotion(char),
    #[error("'{0}' is not a legal move here")]
    NotLegal(String),
}

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::new();
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(p.letter().to_ascii_lowercase());
    }
    s
}

/// Resolves a coordinate move (`e2e4`, `e7e8n`) against an already generated legal list.
///
/// The returned move is always one of `legal` (with its promotion piece possibly
/// overridden), so castling and en-passant flags come from the generator. A king
/// stepping two files only ever resolves to a castling entry of that list.
pub fn parse_uci_move(legal: &[Move], txt: &str) -> Result<Move, MoveParseError> {
    let txt = txt.trim();
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return Err(MoveParseError::InvalidLength(txt.len()));
    }
    let square = |s: &str| coord_to_sq(s).ok_or_else(|| MoveParseError::InvalidSquare(txt.into()));
    let from = square(&txt[0..2])?;
    let to = square(&txt[2..4])?;
    let promo = match txt[4..].chars().next() {
        None => None,
        Some(ch) => Some(
            PieceKind::promotion_from_letter(ch).ok_or(MoveParseError::InvalidPromotion(ch))?,
        ),
    };

    let castling_shape = (file_of(from) - file_of(to)).abs() == 2;
    let found = legal.iter().copied().find(|m| {
        m.from == from
            && m.to == to
            && (!(castling_shape && m.piece.kind == PieceKind::King) || m.is_castle)
    });

    match (found, promo) {
        (Some(m), Some(kind)) => Ok(m.with_promotion(kind)),
        (Some(m), None) => Ok(m),
        (None, _) => Err(MoveParseError::NotLegal(txt.into())),
    }
}

/// Finds the legal move a user named by picking two squares.
pub fn match_candidate(legal: &[Move], from: u8, to: u8) -> Option<Move> {
    legal.iter().copied().find(|m| m.from == from && m.to == to)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
