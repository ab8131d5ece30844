//! Algebraic notation and the numbered move log.

use std::fmt;

use crate::types::*;

/// Short algebraic notation for `mv`: `e4`, `Nf3`, `exd5`, `Qxh7`, `e8=Q`, `O-O`.
///
/// No check or disambiguation suffixes are emitted.
pub fn notation(mv: &Move) -> String {
    if mv.is_castle {
        return if file_of(mv.to) > file_of(mv.from) {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    }

    let mut s = String::with_capacity(8);
    if mv.piece.kind != PieceKind::Pawn {
        s.push(mv.piece.kind.letter());
    }
    // En-passant moves carry the captured pawn, so they take this branch too.
    if mv.is_capture() {
        if mv.piece.kind == PieceKind::Pawn {
            s.push((b'a' + file_of(mv.from) as u8) as char);
        }
        s.push('x');
    }
    s.push_str(&sq_to_coord(mv.to));
    if let Some(kind) = mv.promo {
        s.push('=');
        s.push(kind.letter());
    }
    s
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct LogEntry {
    number: u32,
    white: Option<String>,
    black: Option<String>,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.white, &self.black) {
            (Some(w), Some(b)) => write!(f, "{}. {} {}", self.number, w, b),
            (Some(w), None) => write!(f, "{}. {}", self.number, w),
            (None, Some(b)) => write!(f, "{}... {}", self.number, b),
            (None, None) => write!(f, "{}.", self.number),
        }
    }
}

/// Move pairs in play order. White opens an entry, Black completes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveLog {
    entries: Vec<LogEntry>,
}

impl MoveLog {
    pub fn record(&mut self, mover: Color, number: u32, san: String) {
        match mover {
            Color::White => self.entries.push(LogEntry {
                number,
                white: Some(san),
                black: None,
            }),
            Color::Black => match self.entries.last_mut() {
                Some(open) if open.black.is_none() && open.number == number => {
                    open.black = Some(san);
                }
                // Game set up with Black to move: the first entry has no White half.
                _ => self.entries.push(LogEntry {
                    number,
                    white: None,
                    black: Some(san),
                }),
            },
        }
    }

    /// Removes the most recent half-move recorded for `mover`.
    pub fn unrecord(&mut self, mover: Color) {
        let Some(last) = self.entries.last_mut() else {
            return;
        };
        match mover {
            Color::White => {
                self.entries.pop();
            }
            Color::Black => {
                last.black = None;
                if last.white.is_none() {
                    self.entries.pop();
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
