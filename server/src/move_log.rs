use std::path::PathBuf;

use common::games::tictactoe::Board;

/// Write-only record of the current match.
pub trait MoveLog: Send + Sync {
    fn record(&self, board: &Board) -> Result<(), String>;
}

/// Rewrites a text file with the whole move sequence, one `O: 5` line per
/// move. An empty board truncates the file.
pub struct FileMoveLog {
    path: PathBuf,
}

impl FileMoveLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MoveLog for FileMoveLog {
    fn record(&self, board: &Board) -> Result<(), String> {
        let mut content = board.history_lines().join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        std::fs::write(&self.path, content)
            .map_err(|e| format!("Failed to write move log {}: {}", self.path.display(), e))
    }
}
