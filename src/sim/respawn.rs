//! Pickup respawn scheduling
//!
//! Collected pickups reappear after a fixed delay at a fresh random position.
//! Instead of leaning on environment timers, pending respawns are an explicit
//! list of (pickup id, due time) pairs against the session clock, expired by
//! the simulation tick. That keeps the "session ended before the respawn
//! fired" case deterministic: a late expiry just flips a pickup visible in a
//! session that is already over, and a restart clears the list.

use super::state::GameState;
use crate::consts::{PICKUP_Y, RESPAWN_DELAY};

/// A scheduled pickup reappearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingRespawn {
    pub pickup_id: u32,
    /// Session time (seconds) at which the pickup reappears
    pub due: f64,
}

/// Schedule a collected pickup to reappear after the fixed delay
pub fn schedule(state: &mut GameState, pickup_id: u32) {
    let due = state.elapsed + RESPAWN_DELAY;
    state.pending_respawns.push(PendingRespawn { pickup_id, due });
}

/// Apply every respawn whose due time has passed: the pickup becomes visible
/// again at a fresh uniform in-bounds position. Safe to call in any phase.
pub fn expire_due(state: &mut GameState) {
    let now = state.elapsed;
    let mut i = 0;
    while i < state.pending_respawns.len() {
        if state.pending_respawns[i].due <= now {
            let entry = state.pending_respawns.swap_remove(i);
            let pos = state.random_ground_pos(PICKUP_Y);
            if let Some(pickup) = state.pickup_mut(entry.pickup_id) {
                pickup.visible = true;
                pickup.pos = pos;
            }
        } else {
            i += 1;
        }
    }
}
