use draughts_core::{legal_moves, Board, Color, Engine, Move, Piece, Rank};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;

pub const MIN_DEPTH: u8 = 1;
pub const MAX_DEPTH: u8 = 6;

const ILLEGAL_COMMAND: &str = "Illegal command, please try again";
const INVALID_POSITION: &str = "Invalid position on the board";
const ILLEGAL_MOVE: &str = "Illegal move";
const WRONG_DEPTH: &str = "Wrong value for minimax depth. The value should be between 1 to 6";
const WRONG_BOARD: &str = "Wrong board initialization";

#[derive(Debug)]
pub enum SettingsOutcome {
    Handled,
    Start,
    Quit,
}

#[derive(Debug)]
pub enum TurnOutcome {
    Played,
    Winner(Color),
    Quit,
}

/// The whole mutable state of one sitting: the live board, who plays
/// which side, the search depth, and the engine behind the automated
/// side. The core stays stateless; this is the only owner of the
/// authoritative board.
pub struct GameSession {
    board: Board,
    user: Color,
    turn: Color,
    depth: u8,
    engine: Box<dyn Engine>,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            user: Color::White,
            turn: Color::White,
            depth: MIN_DEPTH,
            engine: Box::new(MinimaxEngine::new()),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn user(&self) -> Color {
        self.user
    }

    pub fn is_user_turn(&self) -> bool {
        self.turn == self.user
    }

    /// Handles one settings-phase command line.
    pub fn settings_command(&mut self, line: &str) -> Result<SettingsOutcome, String> {
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        let command = match parts.first() {
            Some(c) => *c,
            None => return Ok(SettingsOutcome::Handled),
        };
        match command {
            "quit" => Ok(SettingsOutcome::Quit),
            "start" => {
                self.board
                    .require_playable()
                    .map_err(|_| WRONG_BOARD.to_string())?;
                Ok(SettingsOutcome::Start)
            }
            "clear" => {
                self.board.clear();
                Ok(SettingsOutcome::Handled)
            }
            "print" => {
                print!("{}", self.board);
                Ok(SettingsOutcome::Handled)
            }
            "minimax_depth" => {
                match parts.get(1).and_then(|p| p.parse::<u8>().ok()) {
                    Some(d) if (MIN_DEPTH..=MAX_DEPTH).contains(&d) => {
                        self.depth = d;
                        Ok(SettingsOutcome::Handled)
                    }
                    _ => Err(WRONG_DEPTH.to_string()),
                }
            }
            "user_color" => match parts.get(1) {
                Some(&"white") => {
                    self.user = Color::White;
                    Ok(SettingsOutcome::Handled)
                }
                Some(&"black") => {
                    self.user = Color::Black;
                    Ok(SettingsOutcome::Handled)
                }
                _ => Err(ILLEGAL_COMMAND.to_string()),
            },
            "engine" => match parts.get(1) {
                Some(&"minimax") => {
                    self.engine = Box::new(MinimaxEngine::new());
                    Ok(SettingsOutcome::Handled)
                }
                Some(&"random") => {
                    self.engine = Box::new(RandomEngine::new());
                    Ok(SettingsOutcome::Handled)
                }
                _ => Err(ILLEGAL_COMMAND.to_string()),
            },
            "rm" => {
                let (col, row) = parts
                    .get(1)
                    .and_then(|t| parse_coords(t))
                    .ok_or_else(|| ILLEGAL_COMMAND.to_string())?;
                self.board
                    .remove(col, row)
                    .map_err(|_| INVALID_POSITION.to_string())?;
                Ok(SettingsOutcome::Handled)
            }
            "set" => {
                let (col, row) = parts
                    .get(1)
                    .and_then(|t| parse_coords(t))
                    .ok_or_else(|| ILLEGAL_COMMAND.to_string())?;
                let piece = parts
                    .get(2)
                    .and_then(|c| parse_piece(c, parts.get(3).copied()))
                    .ok_or_else(|| ILLEGAL_COMMAND.to_string())?;
                self.board
                    .set(col, row, piece)
                    .map_err(|_| INVALID_POSITION.to_string())?;
                Ok(SettingsOutcome::Handled)
            }
            _ => Err(ILLEGAL_COMMAND.to_string()),
        }
    }

    /// Handles the user's game-phase input: `quit` or a move command.
    /// The submitted move must appear in the generated legal list; the
    /// session never "corrects" an illegal move.
    pub fn user_move(&mut self, line: &str) -> Result<TurnOutcome, String> {
        let trimmed = line.trim();
        if trimmed == "quit" {
            return Ok(TurnOutcome::Quit);
        }
        let (start, steps) =
            parse_move_command(trimmed).ok_or_else(|| ILLEGAL_COMMAND.to_string())?;
        let start = self
            .board
            .try_tile(start.0, start.1)
            .map_err(|_| INVALID_POSITION.to_string())?;
        let mut tiles = Vec::with_capacity(steps.len());
        for (col, row) in steps {
            tiles.push(
                self.board
                    .try_tile(col, row)
                    .map_err(|_| INVALID_POSITION.to_string())?,
            );
        }
        let candidate =
            Move::new(start, tiles, &self.board).map_err(|_| ILLEGAL_MOVE.to_string())?;
        if !legal_moves(&self.board, self.user).contains(&candidate) {
            return Err(ILLEGAL_MOVE.to_string());
        }
        self.board = candidate.into_board();
        self.turn = self.turn.other();
        Ok(self.outcome_after_move())
    }

    /// Lets the engine move for the automated side, announcing its choice.
    pub fn computer_move(&mut self) -> TurnOutcome {
        let color = self.turn;
        let result = self.engine.search(&self.board, color, self.depth);
        match result.best_move {
            None => TurnOutcome::Winner(color.other()),
            Some(mv) => {
                println!("Computer: {mv}");
                self.board = mv.into_board();
                self.turn = self.turn.other();
                self.outcome_after_move()
            }
        }
    }

    /// A side with no legal reply has lost.
    fn outcome_after_move(&self) -> TurnOutcome {
        if legal_moves(&self.board, self.turn).is_empty() {
            TurnOutcome::Winner(self.turn.other())
        } else {
            TurnOutcome::Played
        }
    }
}

/// Parses a `<x,y>` token into 1-based (column, row).
fn parse_coords(token: &str) -> Option<(u8, u8)> {
    let inner = token.strip_prefix('<')?.strip_suffix('>')?;
    let (col_str, row_str) = inner.split_once(',')?;
    let col_str = col_str.trim();
    let row_str = row_str.trim();
    if col_str.len() != 1 {
        return None;
    }
    let col = col_str.as_bytes()[0];
    if !col.is_ascii_lowercase() {
        return None;
    }
    let row: u8 = row_str.parse().ok()?;
    Some((col - b'a' + 1, row))
}

/// Parses `move <x,y> to <i,j>[<k,l>...]` into a start coordinate and the
/// destination steps. Steps may be juxtaposed or space-separated.
fn parse_move_command(line: &str) -> Option<((u8, u8), Vec<(u8, u8)>)> {
    let rest = line.strip_prefix("move")?.trim_start();
    let (from, to) = rest.split_once(" to ")?;
    let start = parse_coords(from.trim())?;
    let mut steps = Vec::new();
    for part in to.split('>') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        steps.push(parse_coords(&format!("{part}>"))?);
    }
    if steps.is_empty() {
        return None;
    }
    Some((start, steps))
}

fn parse_piece(color: &str, rank: Option<&str>) -> Option<Piece> {
    let color = match color {
        "white" => Color::White,
        "black" => Color::Black,
        _ => return None,
    };
    let rank = match rank {
        None | Some("m") => Rank::Man,
        Some("k") => Rank::King,
        _ => return None,
    };
    Some(Piece::new(color, rank))
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
