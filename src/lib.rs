//! Duck Dash - a browser-based 3D collection game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, session state)
//! - `input`: Keyboard state tracking
//!
//! Rendering is delegated to the host page: each frame the WASM shell hands
//! it a serialized scene snapshot and lets it draw the 3D scene however it
//! likes.

pub mod input;
pub mod sim;

pub use input::InputFlags;
pub use sim::{GamePhase, GameState};

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Player movement speed (units per second)
    pub const PLAYER_SPEED: f32 = 10.0;
    /// Half-extent of the playable square on x and z
    pub const ARENA_HALF_EXTENT: f32 = 20.0;

    /// Collision radius shared by pickups and obstacles
    pub const COLLECT_RADIUS: f32 = 1.5;

    /// Entity counts per session
    pub const PICKUP_COUNT: usize = 10;
    pub const OBSTACLE_COUNT: usize = 5;

    /// Points awarded per collected pickup
    pub const PICKUP_SCORE: u32 = 10;
    /// Session length in seconds
    pub const SESSION_SECONDS: u32 = 60;
    /// Delay before a collected pickup reappears (seconds)
    pub const RESPAWN_DELAY: f64 = 3.0;

    /// Resting heights above the ground plane
    pub const PICKUP_Y: f32 = 0.5;
    pub const OBSTACLE_Y: f32 = 1.0;

    /// Camera trails the player at this z offset, from this height
    pub const CAMERA_TRAIL_Z: f32 = 15.0;
    pub const CAMERA_HEIGHT: f32 = 15.0;
}

/// Distance between two points projected onto the x-z ground plane.
/// Entity heights differ (player on the ground, pickups and obstacles
/// hovering), so all gameplay collision tests ignore y.
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}
