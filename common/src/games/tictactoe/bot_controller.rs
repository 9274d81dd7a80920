use super::board::Board;
use super::types::{Cell, Mark};
use super::win_detector::winner;

/// Terminal score for a won position. Not scaled by depth, so every win
/// ranks equally above every draw.
pub const WIN_SCORE: i32 = 100;

/// Best move for the side to move on `board`, found by exhaustive negamax.
///
/// Candidates are tried in ascending cell order and the first one reaching
/// the best score is kept. Returns `None` when no cell is free. The search
/// works on its own copy of the board; `board` is never modified.
///
/// The AI only ever plays `X`, so callers invoke this once `O` has moved.
pub fn best_move(board: &Board) -> Option<Cell> {
    let side = board.next_mark();
    let mut scratch = board.clone();

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for cell in board.available_moves() {
        scratch.push(cell);
        let score = -negamax(&mut scratch, side.opponent());
        scratch.pop();

        if score > best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    best_move
}

/// Score of `board` from the point of view of `side`, which is to move.
fn negamax(board: &mut Board, side: Mark) -> i32 {
    if let Some(winning_mark) = winner(board) {
        return if winning_mark == side { WIN_SCORE } else { -WIN_SCORE };
    }
    if board.is_full() {
        return 0;
    }

    let mut best = i32::MIN;
    for cell in board.available_moves() {
        board.push(cell);
        let score = -negamax(board, side.opponent());
        board.pop();
        if score > best {
            best = score;
            if best == WIN_SCORE {
                return best;
            }
        }
    }
    best
}
