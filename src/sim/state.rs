//! Game state and core simulation types

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::respawn::PendingRespawn;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Waiting for the start command
    Ready,
    /// Active gameplay
    Playing,
    /// Session ended (timer expired or obstacle hit)
    GameOver,
}

/// The player avatar. Only the position matters to the simulation; the 3D
/// model attached to it is the host renderer's concern.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec3,
}

impl Player {
    pub fn new() -> Self {
        Self { pos: Vec3::ZERO }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A collectible star
#[derive(Debug, Clone, Copy)]
pub struct Pickup {
    pub id: u32,
    pub pos: Vec3,
    pub visible: bool,
}

/// A deadly obstacle. Position is fixed for the session.
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec3,
}

/// Signals emitted by a simulation frame, consumed by the session controller
/// and surfaced to the shell for HUD/audio hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A visible pickup came within collection range
    PickupCollected { id: u32 },
    /// An obstacle came within collision range. One event per obstacle in
    /// range per frame; consumers must treat repeats as idempotent.
    ObstacleHit { id: u32 },
}

/// Camera eye and look-at target, recomputed after each frame's movement.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

/// Per-frame scene description handed to the host renderer as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub phase: GamePhase,
    pub player: Vec3,
    pub camera: CameraPose,
    pub pickups: Vec<PickupSnapshot>,
    pub obstacles: Vec<ObstacleSnapshot>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PickupSnapshot {
    pub id: u32,
    pub pos: Vec3,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ObstacleSnapshot {
    pub id: u32,
    pub pos: Vec3,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Score accumulator
    pub score: u32,
    /// Countdown seconds remaining, decremented by the session controller
    pub time_left: u32,
    /// Session time accumulated from frame deltas, drives respawn due-times
    pub elapsed: f64,
    /// Player avatar
    pub player: Player,
    /// Pickups (sorted by id for deterministic iteration)
    pub pickups: Vec<Pickup>,
    /// Obstacles (sorted by id)
    pub obstacles: Vec<Obstacle>,
    /// Scheduled pickup respawns, expired by the tick
    pub pending_respawns: Vec<PendingRespawn>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new game state in the Ready phase with the given seed.
    /// Entities are placed immediately so the ready screen has a scene to
    /// show; starting a session re-rolls them.
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::Ready,
            score: 0,
            time_left: SESSION_SECONDS,
            elapsed: 0.0,
            player: Player::new(),
            pickups: Vec::with_capacity(PICKUP_COUNT),
            obstacles: Vec::with_capacity(OBSTACLE_COUNT),
            pending_respawns: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        state.spawn_entities();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Uniform position on the ground square at the given height
    pub(crate) fn random_ground_pos(&mut self, y: f32) -> Vec3 {
        let x = self.rng.random_range(-ARENA_HALF_EXTENT..=ARENA_HALF_EXTENT);
        let z = self.rng.random_range(-ARENA_HALF_EXTENT..=ARENA_HALF_EXTENT);
        Vec3::new(x, y, z)
    }

    /// Discard and re-roll all pickups and obstacles
    pub(crate) fn spawn_entities(&mut self) {
        self.pickups.clear();
        self.obstacles.clear();
        for _ in 0..PICKUP_COUNT {
            let id = self.next_entity_id();
            let pos = self.random_ground_pos(PICKUP_Y);
            self.pickups.push(Pickup {
                id,
                pos,
                visible: true,
            });
        }
        for _ in 0..OBSTACLE_COUNT {
            let id = self.next_entity_id();
            let pos = self.random_ground_pos(OBSTACLE_Y);
            self.obstacles.push(Obstacle { id, pos });
        }
    }

    pub fn pickup_mut(&mut self, id: u32) -> Option<&mut Pickup> {
        self.pickups.iter_mut().find(|p| p.id == id)
    }

    /// Camera trails the player at a fixed offset and looks at it
    pub fn camera_pose(&self) -> CameraPose {
        let p = self.player.pos;
        CameraPose {
            eye: Vec3::new(p.x, CAMERA_HEIGHT, p.z + CAMERA_TRAIL_Z),
            target: p,
        }
    }

    /// Build the per-frame snapshot for the host renderer
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            phase: self.phase,
            player: self.player.pos,
            camera: self.camera_pose(),
            pickups: self
                .pickups
                .iter()
                .map(|p| PickupSnapshot {
                    id: p.id,
                    pos: p.pos,
                    visible: p.visible,
                })
                .collect(),
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleSnapshot { id: o.id, pos: o.pos })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_ready_with_full_roster() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_left, SESSION_SECONDS);
        assert_eq!(state.pickups.len(), PICKUP_COUNT);
        assert_eq!(state.obstacles.len(), OBSTACLE_COUNT);
        assert!(state.pickups.iter().all(|p| p.visible));
    }

    #[test]
    fn entities_spawn_in_bounds() {
        let state = GameState::new(7);
        for p in &state.pickups {
            assert!(p.pos.x.abs() <= ARENA_HALF_EXTENT);
            assert!(p.pos.z.abs() <= ARENA_HALF_EXTENT);
            assert_eq!(p.pos.y, PICKUP_Y);
        }
        for o in &state.obstacles {
            assert!(o.pos.x.abs() <= ARENA_HALF_EXTENT);
            assert!(o.pos.z.abs() <= ARENA_HALF_EXTENT);
            assert_eq!(o.pos.y, OBSTACLE_Y);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = GameState::new(99999);
        let b = GameState::new(99999);
        for (pa, pb) in a.pickups.iter().zip(&b.pickups) {
            assert_eq!(pa.id, pb.id);
            assert_eq!(pa.pos, pb.pos);
        }
        for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(oa.pos, ob.pos);
        }
    }

    #[test]
    fn entity_ids_are_unique() {
        let state = GameState::new(3);
        let mut ids: Vec<u32> = state
            .pickups
            .iter()
            .map(|p| p.id)
            .chain(state.obstacles.iter().map(|o| o.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PICKUP_COUNT + OBSTACLE_COUNT);
    }

    #[test]
    fn camera_trails_player() {
        let mut state = GameState::new(1);
        state.player.pos = Vec3::new(3.0, 0.0, -4.0);
        let pose = state.camera_pose();
        assert_eq!(pose.eye, Vec3::new(3.0, CAMERA_HEIGHT, -4.0 + CAMERA_TRAIL_Z));
        assert_eq!(pose.target, state.player.pos);
    }

    #[test]
    fn snapshot_serializes() {
        let state = GameState::new(5);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"ready\""));
        assert!(json.contains("\"pickups\""));
    }
}
