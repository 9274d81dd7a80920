use std::sync::Arc;

use common::games::tictactoe::{GameEngine, GameMode, RESET_NUMBER, best_move, is_draw};
use common::{InfoRequest, ServerMessage, UpdateNotification, log};
use tokio::sync::Mutex;

use crate::broadcaster::Broadcaster;
use crate::move_log::MoveLog;

/// Drives the shared match from client events. The engine lock is held
/// across a pick, the AI reply and their broadcasts, so updates from
/// different connections never interleave.
#[derive(Clone)]
pub struct SessionHandler {
    engine: Arc<Mutex<GameEngine>>,
    broadcaster: Broadcaster,
    move_log: Arc<dyn MoveLog>,
}

impl SessionHandler {
    pub fn new(engine: GameEngine, broadcaster: Broadcaster, move_log: Arc<dyn MoveLog>) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            broadcaster,
            move_log,
        }
    }

    /// Applies a pick and broadcasts every resulting update in order.
    /// Returns the updates that were broadcast.
    pub async fn handle_info(&self, request: InfoRequest) -> Vec<UpdateNotification> {
        let mut engine = self.engine.lock().await;
        let updates = play_pick(&mut engine, &request, self.move_log.as_ref());
        for update in &updates {
            self.broadcaster
                .broadcast_to_all(ServerMessage::Update(update.clone()))
                .await;
        }
        updates
    }

    pub async fn handle_disconnect(&self) {
        let mut engine = self.engine.lock().await;
        engine.reset();
        record_moves(&engine, self.move_log.as_ref());
        log!("Client disconnected, match reset");
    }
}

fn play_pick(
    engine: &mut GameEngine,
    request: &InfoRequest,
    move_log: &dyn MoveLog,
) -> Vec<UpdateNotification> {
    if engine.board().is_empty()
        && let Some(raw_mode) = request.game_mode
    {
        match GameMode::from_wire(raw_mode) {
            Some(mode) => {
                engine.set_mode(mode);
                log!("Game mode set to {:?}", mode);
            }
            None => log!("Ignoring unknown game mode {}", raw_mode),
        }
    }

    let Some(number) = request.number else {
        log!("Pick without a number ignored");
        return Vec::new();
    };

    let outcome = match engine.apply_move(number) {
        Ok(outcome) => outcome,
        Err(e) => {
            log!("Rejected pick {}: {}", number, e);
            return Vec::new();
        }
    };

    let mut updates = vec![UpdateNotification::from(outcome)];
    record_moves(engine, move_log);

    if number == RESET_NUMBER {
        log!("Match reset by client");
        return updates;
    }

    log!(
        "{} took cell {} (moves: {}, won: {:?})",
        engine.board().last_mover().map_or("?", |mark| mark.symbol()),
        number,
        engine.board().len(),
        outcome.won
    );

    if is_draw(engine.board()) {
        log!("Match drawn");
    }

    if engine.mode() != GameMode::HumanVsAi || outcome.parity != 1 {
        return updates;
    }

    // A full board leaves the AI nothing to answer with.
    let Some(cell) = best_move(engine.board()) else {
        return updates;
    };

    match engine.apply_move(cell.number() as i64) {
        Ok(reply) => {
            let position = cell.position();
            log!(
                "AI took cell {} at ({}, {}) (won: {:?})",
                cell,
                position.x,
                position.y,
                reply.won
            );
            updates.push(UpdateNotification::from(reply));
            record_moves(engine, move_log);
        }
        Err(e) => log!("AI move {} rejected: {}", cell, e),
    }

    updates
}

fn record_moves(engine: &GameEngine, move_log: &dyn MoveLog) {
    if let Err(e) = move_log.record(engine.board()) {
        log!("{}", e);
    }
}
