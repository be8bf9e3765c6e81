use std::fmt;

/// Side length of the fixed board.
pub const BOARD_SIDE: u8 = 4;
/// Number of cells on the board.
pub const CELL_COUNT: u8 = BOARD_SIDE * BOARD_SIDE;

/// The two color classes of a checkerboard cell.
///
/// Pattern strings use the original glyphs: `b` (blanca/light) and `n`
/// (negra/dark).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Color::Light => 'b',
            Color::Dark => 'n',
        }
    }

    #[inline]
    pub fn from_glyph(ch: char) -> Option<Color> {
        match ch {
            'b' => Some(Color::Light),
            'n' => Some(Color::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A cell of the 4×4 board, identified by `1..=16` in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    /// Construct from a raw identifier, `None` if out of range.
    #[inline]
    pub fn new(id: u8) -> Option<Cell> {
        (1..=CELL_COUNT).contains(&id).then_some(Cell(id))
    }

    /// Construct from a known-good identifier (board literals).
    ///
    /// An out-of-range id is a programming error, not a runtime condition.
    #[inline]
    pub const fn new_unchecked(id: u8) -> Cell {
        debug_assert!(1 <= id && id <= CELL_COUNT);
        Cell(id)
    }

    #[inline]
    pub const fn id(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn row(self) -> u8 {
        (self.0 - 1) / BOARD_SIDE
    }

    #[inline]
    pub const fn col(self) -> u8 {
        (self.0 - 1) % BOARD_SIDE
    }

    #[inline]
    pub const fn from_row_col(row: u8, col: u8) -> Cell {
        debug_assert!(row < BOARD_SIDE && col < BOARD_SIDE);
        Cell(row * BOARD_SIDE + col + 1)
    }

    #[inline]
    pub const fn color(self) -> Color {
        if (self.row() + self.col()) % 2 == 0 {
            Color::Light
        } else {
            Color::Dark
        }
    }

    /// All cells in id order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (1..=CELL_COUNT).map(Cell)
    }

    /// King-move neighbors inside the board, in the natural row-major scan
    /// order (dr outer, dc inner). No wraparound.
    pub fn neighbors(self) -> Vec<Cell> {
        let r = self.row() as i8;
        let c = self.col() as i8;
        let side = BOARD_SIDE as i8;

        let mut out = Vec::with_capacity(8);
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let nr = r + dr;
                let nc = c + dc;
                if (0..side).contains(&nr) && (0..side).contains(&nc) {
                    out.push(Cell::from_row_col(nr as u8, nc as u8));
                }
            }
        }
        out
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
