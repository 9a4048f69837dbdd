//! Plays a scripted match against the rules engine.

use crate::script::{MatchScript, ScriptedMove};
use kuba_core::{Coord, Game, GameError, GameEvent, GameStatus, MarbleCount};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Cannot start match: {0}")]
    Setup(#[from] GameError),

    #[error("Move {index} rejected: {reason}")]
    Rejected { index: usize, reason: String },
}

/// A move the game refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Position of the move in the script
    pub index: usize,
    pub player: String,
    pub reason: String,
}

/// Captures made by one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureSummary {
    pub player: String,
    pub neutral: usize,
    pub opponent: usize,
}

/// Outcome of a scripted match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub applied: usize,
    pub rejected: Vec<Rejection>,
    pub status: GameStatus,
    pub winner: Option<String>,
    pub next_turn: Option<String>,
    pub remaining: MarbleCount,
    pub captures: Vec<CaptureSummary>,
}

/// Run every move in `script`, in order.
///
/// Rejected moves are recorded and skipped, or end the run with an error
/// when `stop_on_reject` is set. Moves after the game is won are rejected
/// by the game itself.
pub fn run_match(script: &MatchScript, stop_on_reject: bool) -> Result<MatchReport, RunnerError> {
    let [first, second] = script.players.clone();
    let mut game = Game::new(first, second)?;
    info!(
        first = %game.players()[0].name,
        second = %game.players()[1].name,
        moves = script.moves.len(),
        "match started"
    );

    let mut applied = 0;
    let mut rejected = Vec::new();

    for (index, mv) in script.moves.iter().enumerate() {
        match play(&mut game, mv) {
            Ok(events) => {
                applied += 1;
                for event in &events {
                    log_event(&game, event);
                }
            }
            Err(reason) => {
                warn!(index, player = %mv.player, %reason, "move rejected");
                if stop_on_reject {
                    return Err(RunnerError::Rejected { index, reason });
                }
                rejected.push(Rejection {
                    index,
                    player: mv.player.clone(),
                    reason,
                });
            }
        }
    }

    Ok(report(&game, applied, rejected))
}

fn play(game: &mut Game, mv: &ScriptedMove) -> Result<Vec<GameEvent>, String> {
    game.apply_text_move(&mv.player, Coord::new(mv.row, mv.col), &mv.direction)
        .map_err(|e| e.to_string())
}

fn log_event(game: &Game, event: &GameEvent) {
    let name = |id| game.get_player(id).map_or("?", |p| p.name.as_str());
    match event {
        GameEvent::MarblesPushed {
            player,
            origin,
            direction,
            line_length,
        } => info!(player = name(*player), %origin, %direction, line_length, "pushed"),
        GameEvent::MarbleCaptured { player, color, from } => {
            info!(player = name(*player), %color, %from, "captured")
        }
        GameEvent::TurnPassed { next } => info!(next = name(*next), "turn passed"),
        GameEvent::GameWon { winner, reason } => {
            info!(winner = name(*winner), ?reason, "game over")
        }
    }
}

fn report(game: &Game, applied: usize, rejected: Vec<Rejection>) -> MatchReport {
    MatchReport {
        applied,
        rejected,
        status: game.status(),
        winner: game.winner().map(str::to_string),
        next_turn: game.current_turn().map(str::to_string),
        remaining: game.marble_count(),
        captures: game
            .players()
            .iter()
            .map(|p| CaptureSummary {
                player: p.name.clone(),
                neutral: p.captured_neutral().len(),
                opponent: p.captured_opponent().len(),
            })
            .collect(),
    }
}
