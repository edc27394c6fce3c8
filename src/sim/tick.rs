//! Per-frame simulation step
//!
//! Driven once per rendered frame with the elapsed delta in seconds. Movement
//! is applied before the collision scans, so both scans see the post-movement
//! position. The delta is used as given: a zero delta is a no-op frame and a
//! very large one (tab was backgrounded) may tunnel the player through
//! entities, which is accepted behavior.

use crate::consts::*;
use crate::input::InputFlags;

use super::respawn;
use super::session;
use super::state::{GameEvent, GamePhase, GameState};
use crate::planar_distance;

/// Advance the simulation by one frame.
///
/// Returns the signals emitted this frame. Score and phase effects are
/// already applied to the session when this returns; the event list exists
/// for the shell (HUD flashes, audio).
pub fn tick(state: &mut GameState, flags: &InputFlags, dt: f32) -> Vec<GameEvent> {
    if state.phase != GamePhase::Playing {
        return Vec::new();
    }

    state.elapsed += dt as f64;

    // Movement: each held flag contributes independently, so opposite flags
    // cancel and diagonals run ~1.41x faster. Intentional, not a bug.
    let step = PLAYER_SPEED * dt;
    let pos = &mut state.player.pos;
    if flags.forward {
        pos.z -= step;
    }
    if flags.backward {
        pos.z += step;
    }
    if flags.left {
        pos.x -= step;
    }
    if flags.right {
        pos.x += step;
    }
    pos.x = pos.x.clamp(-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT);
    pos.z = pos.z.clamp(-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT);

    respawn::expire_due(state);

    let mut events = Vec::new();
    let player_pos = state.player.pos;

    // Pickup scan: invisible pickups are skipped, so a pickup collected this
    // frame cannot be collected again before it respawns.
    let collected: Vec<u32> = state
        .pickups
        .iter()
        .filter(|p| p.visible && planar_distance(player_pos, p.pos) < COLLECT_RADIUS)
        .map(|p| p.id)
        .collect();
    for id in collected {
        if let Some(pickup) = state.pickup_mut(id) {
            pickup.visible = false;
        }
        session::record_pickup(state);
        respawn::schedule(state, id);
        log::debug!("pickup {} collected, score {}", id, state.score);
        events.push(GameEvent::PickupCollected { id });
    }

    // Obstacle scan: every obstacle in range fires its own hit signal; the
    // session treats repeats as idempotent.
    let hits: Vec<u32> = state
        .obstacles
        .iter()
        .filter(|o| planar_distance(player_pos, o.pos) < COLLECT_RADIUS)
        .map(|o| o.id)
        .collect();
    for id in hits {
        session::record_hit(state);
        log::debug!("obstacle {} hit", id);
        events.push(GameEvent::ObstacleHit { id });
    }

    events
}
