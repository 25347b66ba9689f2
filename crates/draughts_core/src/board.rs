use std::fmt;

use crate::error::{Error, Result};
use crate::types::{Color, Piece, Rank, Tile};

pub const DEFAULT_SIZE: u8 = 10;

/// An N×N draughts board. Cells are 1-based (column, row); pieces only
/// ever occupy dark squares, light squares stay `None` for the lifetime of
/// the board. `Clone` is the deep copy used for move snapshots: clones
/// never share state with their source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Creates an empty board. `size` must be even and at least 4.
    pub fn new(size: u8) -> Self {
        assert!(
            size >= 4 && size % 2 == 0,
            "board size must be even and at least 4"
        );
        Self {
            size,
            cells: vec![None; size as usize * size as usize],
        }
    }

    /// Populates the board in the standard way: the outer `(size - 2) / 2`
    /// rows of dark squares on each end, White on the low rows, Black on
    /// the high rows (four rows and 20 men per side on the default board).
    pub fn standard(size: u8) -> Self {
        let mut board = Self::new(size);
        let filled = (size - 2) / 2;
        for row in 1..=size {
            let piece = if row <= filled {
                Piece::man(Color::White)
            } else if row > size - filled {
                Piece::man(Color::Black)
            } else {
                continue;
            };
            for col in 1..=size {
                if let Some(tile) = board.tile(col as i16, row as i16) {
                    board.set_piece(tile, Some(piece));
                }
            }
        }
        board
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Removes every piece from the board.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn index(&self, tile: Tile) -> usize {
        (tile.row() as usize - 1) * self.size as usize + (tile.col() as usize - 1)
    }

    /// Validates a possibly off-board coordinate, returning a tile only if
    /// it is in range and on a dark square. Signed arguments let move
    /// generation probe past the edges without wrapping.
    pub fn tile(&self, col: i16, row: i16) -> Option<Tile> {
        let n = self.size as i16;
        if (1..=n).contains(&col) && (1..=n).contains(&row) && Tile::is_dark(col as u8, row as u8)
        {
            Some(Tile::new(col as u8, row as u8))
        } else {
            None
        }
    }

    /// `Result` form of [`tile`](Self::tile) for the command-layer
    /// boundary, reporting the offending coordinate.
    pub fn try_tile(&self, col: u8, row: u8) -> Result<Tile> {
        self.tile(col as i16, row as i16)
            .ok_or(Error::OutOfRange { col, row })
    }

    pub fn is_valid_position(&self, col: u8, row: u8) -> bool {
        self.tile(col as i16, row as i16).is_some()
    }

    pub fn piece_at(&self, tile: Tile) -> Option<Piece> {
        self.cells[self.index(tile)]
    }

    pub fn set_piece(&mut self, tile: Tile, piece: Option<Piece>) {
        let idx = self.index(tile);
        self.cells[idx] = piece;
    }

    /// Reads a cell by coordinate, rejecting invalid positions.
    pub fn get(&self, col: u8, row: u8) -> Result<Option<Piece>> {
        Ok(self.piece_at(self.try_tile(col, row)?))
    }

    /// Places a piece by coordinate, rejecting invalid positions.
    pub fn set(&mut self, col: u8, row: u8, piece: Piece) -> Result<()> {
        let tile = self.try_tile(col, row)?;
        self.set_piece(tile, Some(piece));
        Ok(())
    }

    /// Clears a cell by coordinate, returning whatever occupied it.
    pub fn remove(&mut self, col: u8, row: u8) -> Result<Option<Piece>> {
        let tile = self.try_tile(col, row)?;
        let piece = self.piece_at(tile);
        self.set_piece(tile, None);
        Ok(piece)
    }

    /// True for a valid position holding no piece. Invalid coordinates are
    /// never empty.
    pub fn is_empty(&self, col: u8, row: u8) -> bool {
        match self.tile(col as i16, row as i16) {
            Some(tile) => self.piece_at(tile).is_none(),
            None => false,
        }
    }

    /// Iterates every occupied tile in a stable row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Tile, Piece)> + '_ {
        (1..=self.size).flat_map(move |row| {
            (1..=self.size).filter_map(move |col| {
                let tile = self.tile(col as i16, row as i16)?;
                Some((tile, self.piece_at(tile)?))
            })
        })
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }

    /// Most pieces a color may field: the two starting regions of the
    /// standard setup, 20 on the default board.
    pub fn max_pieces(&self) -> usize {
        2 * self.size as usize
    }

    /// A game may only start from a board where both colors have at least
    /// one piece and neither exceeds [`max_pieces`](Self::max_pieces).
    pub fn is_playable(&self) -> bool {
        let white = self.count(Color::White);
        let black = self.count(Color::Black);
        white >= 1 && black >= 1 && white <= self.max_pieces() && black <= self.max_pieces()
    }

    /// `Result` form of [`is_playable`](Self::is_playable) for the
    /// command-layer boundary: gates starting a game.
    pub fn require_playable(&self) -> Result<()> {
        if self.is_playable() {
            Ok(())
        } else {
            Err(Error::NotPlayable)
        }
    }

    /// Promotes every man standing on the row farthest from its own edge:
    /// White men on the top row, Black men on the bottom row.
    pub fn crown(&mut self) {
        for col in 1..=self.size {
            for row in [1, self.size] {
                if let Some(tile) = self.tile(col as i16, row as i16) {
                    if let Some(piece) = self.piece_at(tile) {
                        if piece.rank == Rank::Man && piece.color.crowning_row(self.size) == row {
                            self.set_piece(tile, Some(Piece::king(piece.color)));
                        }
                    }
                }
            }
        }
    }

    /// Clears every occupied square strictly between two tiles on the same
    /// diagonal: the pieces jumped over by a capture from `from` to `to`.
    /// Steps one square at a time in the sign direction of each axis.
    pub fn remove_captured(&mut self, from: Tile, to: Tile) {
        let dc = (to.col() as i16 - from.col() as i16).signum();
        let dr = (to.row() as i16 - from.row() as i16).signum();
        let mut col = from.col() as i16 + dc;
        let mut row = from.row() as i16 + dr;
        while (col, row) != (to.col() as i16, to.row() as i16) {
            if let Some(tile) = self.tile(col, row) {
                self.set_piece(tile, None);
            }
            col += dc;
            row += dr;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard(DEFAULT_SIZE)
    }
}

impl fmt::Display for Board {
    /// ASCII grid in the classic console layout: rows top-down with their
    /// numbers on the left, column letters underneath.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = format!("  |{}|", "-".repeat(self.size as usize * 4 - 1));
        writeln!(f, "{line}")?;
        for row in (1..=self.size).rev() {
            write!(f, "{row:2}")?;
            for col in 1..=self.size {
                let ch = match self.tile(col as i16, row as i16).and_then(|t| self.piece_at(t)) {
                    Some(piece) => piece.to_char(),
                    None => ' ',
                };
                write!(f, "| {ch} ")?;
            }
            writeln!(f, "|")?;
            writeln!(f, "{line}")?;
        }
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, " {}  ", (b'a' + col) as char)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
