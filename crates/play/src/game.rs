//! Game session driven by the terminal loop

use anyhow::{anyhow, bail, Result};
use chess_rules::{coord_to_sq, match_candidate, Color, GameStatus, Move, PieceKind, Position};

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A single square: first or second half of a selection
    Square(u8),
    /// Both squares at once, with an optional promotion letter
    Move {
        from: u8,
        to: u8,
        promo: Option<PieceKind>,
    },
    Undo,
    Reset,
    Moves,
    Help,
    Quit,
}

/// Parse `e2`, `e2e4`, `e2 e4`, `e7e8n` or a keyword.
pub fn parse_command(line: &str) -> Result<Command> {
    let text: String = line.split_whitespace().collect::<Vec<_>>().concat();
    let text = text.to_ascii_lowercase();
    match text.as_str() {
        "undo" | "u" => return Ok(Command::Undo),
        "reset" | "new" => return Ok(Command::Reset),
        "moves" | "m" => return Ok(Command::Moves),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let square = |s: &str| coord_to_sq(s).ok_or_else(|| anyhow!("bad square {s:?}"));
    match text.len() {
        2 => Ok(Command::Square(square(&text)?)),
        4 | 5 if text.is_ascii() => {
            let from = square(&text[0..2])?;
            let to = square(&text[2..4])?;
            let promo = match text[4..].chars().next() {
                None => None,
                Some(ch) => match PieceKind::promotion_from_letter(ch) {
                    Some(kind) => Some(kind),
                    None => bail!("bad promotion piece {ch:?}"),
                },
            };
            Ok(Command::Move { from, to, promo })
        }
        _ => bail!("unrecognised input {line:?}"),
    }
}

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

/// Two-step square selection: a first square, then a destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    first: Option<u8>,
}

impl Selection {
    pub fn first(&self) -> Option<u8> {
        self.first
    }

    pub fn clear(&mut self) {
        self.first = None;
    }
}

/// What happened after a square was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Picked(u8),
    /// The same square twice
    Cleared,
    Played(Move),
    /// The pair named no legal move; the selection starts over
    Rejected { from: u8, to: u8 },
}

/// Position plus the cached legal moves and status for the side to move.
pub struct Session {
    start: Position,
    position: Position,
    legal: Vec<Move>,
    status: GameStatus,
    selection: Selection,
    /// Whether the current position has been shown
    announced: bool,
}

impl Session {
    pub fn new(start: Position) -> Self {
        let mut session = Self {
            position: start.clone(),
            start,
            legal: Vec::new(),
            status: GameStatus::Ongoing,
            selection: Selection::default(),
            announced: false,
        };
        session.refresh();
        session
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn legal(&self) -> &[Move] {
        &self.legal
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn select(&mut self, sq: u8) -> SelectOutcome {
        let Some(from) = self.selection.first else {
            self.selection.first = Some(sq);
            return SelectOutcome::Picked(sq);
        };
        self.selection.clear();
        if from == sq {
            return SelectOutcome::Cleared;
        }
        match self.play_squares(from, sq, None) {
            Some(mv) => SelectOutcome::Played(mv),
            None => SelectOutcome::Rejected { from, to: sq },
        }
    }

    /// Play the legal move from `from` to `to`, if there is one.
    pub fn play_squares(&mut self, from: u8, to: u8, promo: Option<PieceKind>) -> Option<Move> {
        self.selection.clear();
        let mut mv = match_candidate(&self.legal, from, to)?;
        if let Some(kind) = promo {
            mv = mv.with_promotion(kind);
        }
        self.play(mv);
        Some(mv)
    }

    /// Apply a move taken from [`Session::legal`].
    pub fn play(&mut self, mv: Move) {
        debug_assert!(self.legal.contains(&mv), "move not in the legal list");
        self.position.make_move(mv);
        self.refresh();
    }

    /// Take back the last move; false when there is none.
    pub fn undo(&mut self) -> bool {
        self.selection.clear();
        if self.position.move_history().is_empty() {
            return false;
        }
        self.position.undo_move();
        self.refresh();
        true
    }

    /// Take back the last move, and the one before it when that leaves a
    /// computer side to move. Returns the number of plies taken back.
    pub fn take_back(&mut self, is_computer: impl Fn(Color) -> bool) -> usize {
        if !self.undo() {
            return 0;
        }
        if is_computer(self.position.side_to_move()) && self.undo() {
            2
        } else {
            1
        }
    }

    pub fn reset(&mut self) {
        self.position = self.start.clone();
        self.selection.clear();
        self.refresh();
    }

    fn refresh(&mut self) {
        let (legal, status) = self.position.legal_moves_with_status();
        self.legal = legal;
        self.status = status;
        self.announced = false;
    }

    /// Checkmate or stalemate line; `None` while the game goes on.
    pub fn result_text(&self) -> Option<String> {
        let side = self.position.side_to_move();
        match self.status {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate => Some(format!("Checkmate. {} wins.", color_name(side.other()))),
            GameStatus::Stalemate => Some("Stalemate.".to_string()),
        }
    }

    /// Board, last log line and result, handed out once per new position.
    pub fn take_announcement(&mut self) -> Option<String> {
        if self.announced {
            return None;
        }
        self.announced = true;
        let mut text = self.render();
        if let Some(last) = self.position.move_log().last() {
            text.push('\n');
            text.push_str(last);
        }
        if let Some(result) = self.result_text() {
            text.push('\n');
            text.push_str(&result);
        }
        Some(text)
    }

    /// Board from White's side, rank 8 on top.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for rank in (0..8u8).rev() {
            out.push((b'1' + rank) as char);
            for file in 0..8u8 {
                out.push(' ');
                out.push(self.position.piece_at(rank * 8 + file).map_or('.', |p| p.fen_char()));
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h");
        out
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
