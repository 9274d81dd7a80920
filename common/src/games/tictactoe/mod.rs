mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CellSet};
pub use bot_controller::{WIN_SCORE, best_move};
pub use game_state::{GameEngine, MatchState, MoveOutcome, RESET_NUMBER};
pub use types::{CELL_COUNT, Cell, GameMode, InvalidMove, Mark, Position};
pub use win_detector::{MIN_WINNING_LENGTH, WIN_LINES, WinLine, has_won, is_draw, winner};
