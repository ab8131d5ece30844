//! Forsyth-Edwards Notation import and export.

use thiserror::Error;

use crate::{
    board::{CastlingRights, Position},
    types::*,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN must have at least 4 fields, found {0}")]
    TooFewFields(usize),
    #[error("FEN board must have 8 ranks, found {0}")]
    RankCount(usize),
    #[error("invalid piece character '{0}' in FEN")]
    InvalidPiece(char),
    #[error("rank {rank} describes {files} files instead of 8")]
    FileCount { rank: usize, files: usize },
    #[error("invalid side to move '{0}', expected 'w' or 'b'")]
    InvalidSideToMove(String),
    #[error("invalid castling character '{0}'")]
    InvalidCastling(char),
    #[error("invalid en passant square '{0}'")]
    InvalidEnPassant(String),
    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
    #[error("expected exactly one {0:?} king, found {1}")]
    KingCount(Color, usize),
}

impl Position {
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewFields(parts.len()));
        }

        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts[2];
        let ep_part = parts[3];
        let halfmove_part = parts.get(4).copied().unwrap_or("0");
        let fullmove_part = parts.get(5).copied().unwrap_or("1");

        let mut board = [None; 64];
        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                    if file > 8 {
                        return Err(FenError::FileCount {
                            rank: 8 - rank_idx,
                            files: file as usize,
                        });
                    }
                } else {
                    let kind = PieceKind::from_letter(ch).ok_or(FenError::InvalidPiece(ch))?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let at = sq(file, rank).ok_or(FenError::FileCount {
                        rank: 8 - rank_idx,
                        files: file as usize + 1,
                    })?;
                    board[at as usize] = Some(Piece::new(color, kind));
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::FileCount {
                    rank: 8 - rank_idx,
                    files: file as usize,
                });
            }
        }

        for color in [Color::White, Color::Black] {
            let kings = board
                .iter()
                .filter(|pc| **pc == Some(Piece::new(color, PieceKind::King)))
                .count();
            if kings != 1 {
                return Err(FenError::KingCount(color, kings));
            }
        }

        let side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::none();
        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::InvalidCastling(c)),
                }
            }
        }

        let en_passant = if ep_part == "-" {
            None
        } else {
            match coord_to_sq(ep_part) {
                Some(target) if en_passant_plausible(&board, side_to_move, target) => {
                    Some(target)
                }
                _ => return Err(FenError::InvalidEnPassant(ep_part.into())),
            }
        };

        let counter = |s: &str| -> Result<u32, FenError> {
            s.parse().map_err(|_| FenError::InvalidCounter(s.to_string()))
        };
        let halfmove_clock = counter(halfmove_part)?;
        let fullmove_number = counter(fullmove_part)?.max(1);

        Ok(Position::from_parts(
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        ))
    }

    /// Six-field FEN of the current position.
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);

        for rank in (0..8i8).rev() {
            let mut empty = 0;
            for file in 0..8i8 {
                let at = rank as u8 * 8 + file as u8;
                match self.piece_at(at) {
                    None => empty += 1,
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.fen_char());
                    }
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let rights = self.castling();
        let before = out.len();
        for (flag, ch) in [
            (rights.wk, 'K'),
            (rights.wq, 'Q'),
            (rights.bk, 'k'),
            (rights.bq, 'q'),
        ] {
            if flag {
                out.push(ch);
            }
        }
        if out.len() == before {
            out.push('-');
        }

        out.push(' ');
        match self.en_passant() {
            Some(ep) => out.push_str(&sq_to_coord(ep)),
            None => out.push('-'),
        }

        out.push_str(&format!(
            " {} {}",
            self.halfmove_clock(),
            self.fullmove_number()
        ));
        out
    }
}

/// The target must be empty, on the pusher's third rank, with the pusher's pawn
/// directly in front of it and the pawn's start square vacated.
fn en_passant_plausible(board: &[Option<Piece>; 64], mover: Color, target: u8) -> bool {
    let pusher = mover.other();
    let fwd = pusher.forward();
    if rank_of(target) != pusher.back_rank() + 2 * fwd {
        return false;
    }
    let pawn = offset(target, (0, fwd), 1);
    let origin = offset(target, (0, -fwd), 1);
    let (Some(pawn), Some(origin)) = (pawn, origin) else {
        return false;
    };
    board[target as usize].is_none()
        && board[origin as usize].is_none()
        && board[pawn as usize] == Some(Piece::new(pusher, PieceKind::Pawn))
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
