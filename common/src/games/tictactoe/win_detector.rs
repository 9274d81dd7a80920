use super::board::{Board, CellSet};
use super::types::{Cell, Mark};

pub type WinLine = [Cell; 3];

const fn line(a: u8, b: u8, c: u8) -> WinLine {
    [Cell::ALL[a as usize - 1], Cell::ALL[b as usize - 1], Cell::ALL[c as usize - 1]]
}

pub const WIN_LINES: [WinLine; 8] = [
    line(1, 2, 3),
    line(4, 5, 6),
    line(7, 8, 9),
    line(1, 4, 7),
    line(2, 5, 8),
    line(3, 6, 9),
    line(1, 5, 9),
    line(3, 5, 7),
];

/// Fewest claimed cells for which any side can hold a complete line.
pub const MIN_WINNING_LENGTH: usize = 5;

pub fn has_won(cells: &CellSet) -> bool {
    WIN_LINES.iter().any(|win_line| cells.contains_all(win_line))
}

pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::O, Mark::X]
        .into_iter()
        .find(|&mark| has_won(&board.cells_of(mark)))
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_line_wins_on_its_own() {
        for win_line in WIN_LINES {
            let cells = CellSet::from_iter(win_line);
            assert!(has_won(&cells), "line {:?} should win", win_line);
        }
    }

    #[test]
    fn test_line_with_filler_still_wins() {
        for win_line in WIN_LINES {
            let filler = Cell::ALL
                .into_iter()
                .find(|cell| !win_line.contains(cell))
                .unwrap();
            let cells = CellSet::from_iter(win_line.into_iter().chain([filler]));
            assert!(has_won(&cells));
        }
    }

    #[test]
    fn test_no_complete_line_does_not_win() {
        let board = Board::from_numbers(&[1, 2, 6, 3, 7, 4, 8]).unwrap();
        assert!(!has_won(&board.cells_of(Mark::O)));
        assert!(!has_won(&board.cells_of(Mark::X)));
        assert!(!has_won(&CellSet::empty()));
    }

    #[test]
    fn test_winner_reports_owner_of_line() {
        let board = Board::from_numbers(&[4, 1, 7, 5, 3, 9]).unwrap();
        assert_eq!(winner(&board), Some(Mark::X));

        let board = Board::from_numbers(&[1, 2, 5, 6, 9]).unwrap();
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // O X O
        // O X X
        // X O O
        let board = Board::from_numbers(&[1, 2, 3, 5, 4, 6, 8, 7, 9]).unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let board = Board::from_numbers(&[1, 4, 2, 5, 7, 8, 6, 9, 3]).unwrap();
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
