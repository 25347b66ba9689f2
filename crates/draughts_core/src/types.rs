use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
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

    /// Row direction this color's men advance in: White starts on the low
    /// rows and moves up, Black starts on the high rows and moves down.
    pub fn forward(self) -> i16 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The row farthest from this color's starting edge on a board of the
    /// given size; a man standing there is crowned.
    pub fn crowning_row(self, size: u8) -> u8 {
        match self {
            Color::White => size,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rank {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    pub fn man(color: Color) -> Self {
        Self::new(color, Rank::Man)
    }

    pub fn king(color: Color) -> Self {
        Self::new(color, Rank::King)
    }

    /// Board character in the classic console encoding:
    /// white man/king are `m`/`k`, black man/king are `M`/`K`.
    pub fn to_char(self) -> char {
        match (self.color, self.rank) {
            (Color::White, Rank::Man) => 'm',
            (Color::White, Rank::King) => 'k',
            (Color::Black, Rank::Man) => 'M',
            (Color::Black, Rank::King) => 'K',
        }
    }
}

/// A 1-based (column, row) coordinate on a dark square.
///
/// Tiles are handed out by [`Board::tile`](crate::board::Board::tile) and
/// [`Board::try_tile`](crate::board::Board::try_tile), which enforce the
/// range and dark-square checks, so holding a `Tile` means the coordinate
/// was valid for the board that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    col: u8,
    row: u8,
}

impl Tile {
    pub(crate) fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn row(self) -> u8 {
        self.row
    }

    /// Dark squares are where `(col + row)` is even; pieces only ever sit
    /// on these. The sum is taken in u16 so coordinates above 127 do not
    /// overflow.
    pub fn is_dark(col: u8, row: u8) -> bool {
        (col as u16 + row as u16) % 2 == 0
    }
}

impl fmt::Display for Tile {
    /// Prints in the console notation `<a,5>` (column letter, row number).
    /// Column letters only cover boards up to 26 columns, which is also
    /// the bound of the command parser's `a..z` notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = (b'a' + self.col - 1) as char;
        write!(f, "<{},{}>", c, self.row)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
