//! Check and pin detection from the side-to-move king.
//!
//! The result is a read-only [`CheckInfo`] computed once per legal-move query and
//! shared by every generator.

use crate::{board::Position, types::*};

/// An ally piece that may only move along `dir` (pointing away from the king) or its opposite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    pub square: u8,
    pub dir: Direction,
}

/// A piece giving check. Knight checks have no direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Check {
    pub square: u8,
    pub dir: Option<Direction>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckInfo {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl CheckInfo {
    pub fn pin_dir(&self, square: u8) -> Option<Direction> {
        self.pins.iter().find(|p| p.square == square).map(|p| p.dir)
    }

    pub fn is_double_check(&self) -> bool {
        self.checks.len() >= 2
    }
}

/// Whether `kind` standing `distance` squares from the king along `dir` attacks it.
/// `dir` points from the king towards the piece.
fn attacks_king_along(kind: PieceKind, owner: Color, dir: Direction, distance: i8) -> bool {
    match kind {
        PieceKind::Queen => true,
        PieceKind::Rook => !is_diagonal(dir),
        PieceKind::Bishop => is_diagonal(dir),
        // A pawn captures toward its own forward rank, i.e. toward the king.
        PieceKind::Pawn => distance == 1 && is_diagonal(dir) && dir.1 == -owner.forward(),
        PieceKind::King => distance == 1,
        PieceKind::Knight => false,
    }
}

/// Scans outward from `color`'s king for pins and checks.
pub fn check_info(pos: &Position, color: Color) -> CheckInfo {
    let king = pos.king_square(color);
    let mut info = CheckInfo::default();

    for dir in KING_STEPS {
        let mut candidate: Option<u8> = None;
        let mut i = 1;
        while let Some(s) = offset(king, dir, i) {
            if let Some(pc) = pos.piece_at(s) {
                if pc.color == color {
                    if pc.kind == PieceKind::King || candidate.is_some() {
                        break;
                    }
                    candidate = Some(s);
                } else {
                    if attacks_king_along(pc.kind, pc.color, dir, i) {
                        match candidate {
                            Some(pinned) => info.pins.push(Pin { square: pinned, dir }),
                            None => info.checks.push(Check {
                                square: s,
                                dir: Some(dir),
                            }),
                        }
                    }
                    break;
                }
            }
            i += 1;
        }
    }

    for jump in KNIGHT_JUMPS {
        if let Some(s) = offset(king, jump, 1)
            && pos.piece_at(s) == Some(Piece::new(color.other(), PieceKind::Knight))
        {
            info.checks.push(Check {
                square: s,
                dir: None,
            });
        }
    }

    info.in_check = !info.checks.is_empty();
    info
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod checks_tests;
