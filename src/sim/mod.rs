//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies
//!
//! The shell drives it from three callback sources that interleave on one
//! logical thread: the frame loop calls [`tick`] with the elapsed delta, a
//! one-second interval calls [`session::tick_second`], and key events mutate
//! the input flags between frames.

pub mod respawn;
pub mod session;
pub mod state;
pub mod tick;

pub use respawn::PendingRespawn;
pub use state::{
    CameraPose, GameEvent, GamePhase, GameState, Obstacle, Pickup, Player, SceneSnapshot,
};
pub use tick::tick;
