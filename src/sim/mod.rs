//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod input;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use difficulty::{Difficulty, SpeedRamp};
pub use input::{BindingPreset, InputState};
pub use state::{
    Deferred, DeferredAction, GameEvent, GamePhase, GameState, Player, Projectile,
    ProjectileKind, Shot, Warning,
};
pub use tick::{TickInput, tick};
