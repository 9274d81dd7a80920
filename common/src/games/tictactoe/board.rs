use super::types::{CELL_COUNT, Cell, Mark};

/// Set of cells, one bit per cell number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellSet(u16);

impl CellSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, cell: Cell) {
        self.0 |= cell.bit();
    }

    pub fn remove(&mut self, cell: Cell) {
        self.0 &= !cell.bit();
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.0 & cell.bit() != 0
    }

    pub fn contains_all(&self, cells: &[Cell]) -> bool {
        cells.iter().all(|&cell| self.contains(cell))
    }

}

impl FromIterator<Cell> for CellSet {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        let mut set = CellSet::empty();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

/// Cells in the order they were claimed. Owner of each cell is derived from
/// its index: even indices belong to `O`, odd ones to `X`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    moves: Vec<Cell>,
    claimed: CellSet,
}

impl Board {
    pub fn new() -> Self {
        Self {
            moves: Vec::with_capacity(CELL_COUNT),
            claimed: CellSet::empty(),
        }
    }

    /// Builds a board from a sequence of cell numbers. Returns `None` if any
    /// number is out of range or repeated.
    pub fn from_numbers(numbers: &[i64]) -> Option<Self> {
        let mut board = Board::new();
        for &number in numbers {
            let cell = Cell::new(number)?;
            if board.contains(cell) {
                return None;
            }
            board.push(cell);
        }
        Some(board)
    }

    pub fn moves(&self) -> &[Cell] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.moves.len() == CELL_COUNT
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.claimed.contains(cell)
    }

    /// 1 when the number of claimed cells is odd, 0 otherwise.
    pub fn parity(&self) -> u8 {
        (self.moves.len() % 2) as u8
    }

    pub fn owner_of(index: usize) -> Mark {
        if index % 2 == 0 { Mark::O } else { Mark::X }
    }

    pub fn next_mark(&self) -> Mark {
        Self::owner_of(self.moves.len())
    }

    pub fn last_mover(&self) -> Option<Mark> {
        self.moves.len().checked_sub(1).map(Self::owner_of)
    }

    pub fn cells_of(&self, mark: Mark) -> CellSet {
        self.moves
            .iter()
            .enumerate()
            .filter(|(index, _)| Self::owner_of(*index) == mark)
            .map(|(_, &cell)| cell)
            .collect()
    }

    pub fn available_moves(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|&cell| !self.contains(cell))
            .collect()
    }

    /// Caller guarantees `cell` is unclaimed.
    pub(crate) fn push(&mut self, cell: Cell) {
        debug_assert!(!self.contains(cell));
        self.moves.push(cell);
        self.claimed.insert(cell);
    }

    pub(crate) fn pop(&mut self) -> Option<Cell> {
        let cell = self.moves.pop()?;
        self.claimed.remove(cell);
        Some(cell)
    }

    pub(crate) fn clear(&mut self) {
        self.moves.clear();
        self.claimed = CellSet::empty();
    }

    /// Human-readable move history, one `O: 5` line per move.
    pub fn history_lines(&self) -> Vec<String> {
        self.moves
            .iter()
            .enumerate()
            .map(|(index, cell)| format!("{}: {}", Self::owner_of(index), cell))
            .collect()
    }
}
