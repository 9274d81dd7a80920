use std::fmt;

pub const CELL_COUNT: usize = 9;

/// One of the nine addressable board positions, numbered 1-9 row by row:
///
/// ```text
/// 1 | 2 | 3
/// 4 | 5 | 6
/// 7 | 8 | 9
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    #[rustfmt::skip]
    pub const ALL: [Cell; CELL_COUNT] = [
        Cell(1), Cell(2), Cell(3),
        Cell(4), Cell(5), Cell(6),
        Cell(7), Cell(8), Cell(9),
    ];

    pub fn new(number: i64) -> Option<Self> {
        if (1..=CELL_COUNT as i64).contains(&number) {
            Some(Self(number as u8))
        } else {
            None
        }
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn position(&self) -> Position {
        let index = (self.0 - 1) as usize;
        Position::new(index % 3, index / 3)
    }

    pub(crate) fn bit(&self) -> u16 {
        1 << self.0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Side of the match. `O` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    O,
    X,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::O => "O",
            Mark::X => "X",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    HumanVsHuman,
    #[default]
    HumanVsAi,
}

impl GameMode {
    pub fn from_wire(value: i64) -> Option<Self> {
        match value {
            0 => Some(GameMode::HumanVsHuman),
            1 => Some(GameMode::HumanVsAi),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfRange(i64),
    AlreadyClaimed(Cell),
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::OutOfRange(number) => write!(f, "Cell {} is out of range 1-9", number),
            InvalidMove::AlreadyClaimed(cell) => write!(f, "Cell {} is already claimed", cell),
        }
    }
}

impl std::error::Error for InvalidMove {}
