//! Game session control
//!
//! Explicit transition functions over the three-phase game flag. The shell's
//! one-second interval drives [`tick_second`]; the simulation frame feeds
//! collection and hit signals through [`record_pickup`] and [`record_hit`].

use super::state::{GamePhase, GameState};
use crate::consts::{PICKUP_SCORE, SESSION_SECONDS};

/// Start (or restart) a session: full reset of score, timer, player and
/// entity layout, then enter Playing. Valid from any phase.
pub fn start(state: &mut GameState) {
    state.score = 0;
    state.time_left = SESSION_SECONDS;
    state.elapsed = 0.0;
    state.player.pos = glam::Vec3::ZERO;
    state.pending_respawns.clear();
    state.spawn_entities();
    state.phase = GamePhase::Playing;
    log::info!("session started (seed {})", state.seed);
}

/// One countdown tick. Decrements the remaining time while Playing; at zero
/// the phase is forced to GameOver. A no-op in any other phase, so a driver
/// interval that keeps firing after the session ends cannot decrement
/// further or re-fire the transition.
pub fn tick_second(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    if state.time_left <= 1 {
        state.time_left = 0;
        state.phase = GamePhase::GameOver;
        log::info!("time up, final score {}", state.score);
    } else {
        state.time_left -= 1;
    }
}

/// A pickup was collected this frame
pub fn record_pickup(state: &mut GameState) {
    if state.phase == GamePhase::Playing {
        state.score += PICKUP_SCORE;
    }
}

/// An obstacle was touched this frame. Idempotent: an already-over session
/// stays over.
pub fn record_hit(state: &mut GameState) {
    if state.phase == GamePhase::Playing {
        state.phase = GamePhase::GameOver;
        log::info!("obstacle hit, final score {}", state.score);
    }
}
