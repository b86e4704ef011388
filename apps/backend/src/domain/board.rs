//! Board representation and the win detector.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_CELLS: usize = 9;

/// Winning line indices on the row-major 3x3 board.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// One of the two player symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single board cell. Serialized as `""`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Taken(mark) => Some(mark),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Empty => serializer.serialize_str(""),
            Cell::Taken(mark) => serializer.serialize_str(mark.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "" => Ok(Cell::Empty),
            "X" => Ok(Cell::Taken(Mark::X)),
            "O" => Ok(Cell::Taken(Mark::O)),
            other => Err(serde::de::Error::custom(format!(
                "invalid cell '{other}' (expected \"\", \"X\" or \"O\")"
            ))),
        }
    }
}

/// Nine cells, index 0..=8 row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board(pub [Cell; BOARD_CELLS]);

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Cell at `position`, or `None` when the index is off the board.
    pub fn get(&self, position: usize) -> Option<Cell> {
        self.0.get(position).copied()
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.0
    }

    pub fn occupied(&self) -> usize {
        self.0.iter().filter(|c| !c.is_empty()).count()
    }

    /// Returns a copy with `mark` placed at `position`. Callers validate
    /// bounds and vacancy first.
    pub(crate) fn with_mark(mut self, position: usize, mark: Mark) -> Self {
        self.0[position] = Cell::Taken(mark);
        self
    }

    /// The mark filling a complete line, if any.
    ///
    /// A line counts only when all three cells hold the same non-empty mark.
    pub fn winning_mark(&self) -> Option<Mark> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.0[a].mark()?;
            (self.0[b] == Cell::Taken(mark) && self.0[c] == Cell::Taken(mark)).then_some(mark)
        })
    }
}
