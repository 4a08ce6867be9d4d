//! Block Dodge - an 800x600 bullet-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input, physics, spawning, collisions, game state)
//! - `renderer`: Backend-agnostic draw-command frames
//! - `driver`: Host-facing game loop (frame pacing, key events, teardown)
//! - `settings`: Persisted preferences
//! - `highscores`: Local leaderboard

pub mod driver;
pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{FrameControl, GameDriver};
pub use highscores::HighScores;
pub use settings::Settings;
pub use sim::BindingPreset;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the tuned per-tick constants)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest wall-clock delta a single frame is allowed to contribute (seconds)
    pub const MAX_FRAME_DELTA: f32 = 0.1;

    /// Field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    pub const PLAYER_START_LIVES: u8 = 3;
    /// Maximum player speed per axis (px/s, 7 px per 60 Hz tick)
    pub const MAX_SPEED: f32 = 420.0;
    /// Acceleration applied while a movement key is held (px/s^2)
    pub const ACCEL: f32 = 720.0;
    /// Per-tick velocity damping on axes with no input
    pub const FRICTION: f32 = 0.92;
    /// Velocity retained (and inverted) when the player bounces off a wall
    pub const WALL_RESTITUTION: f32 = 0.8;
    /// Impulse added along a projectile's travel direction when it hits the player (px/s)
    pub const KNOCKBACK: f32 = 180.0;

    /// Projectiles are culled once fully past a field edge by this margin (px)
    pub const CULL_MARGIN: f32 = 100.0;

    /// Player shots
    pub const SHOT_WIDTH: f32 = 16.0;
    pub const SHOT_HEIGHT: f32 = 8.0;
    pub const SHOT_SPEED: f32 = 600.0;
    pub const SHOT_COOLDOWN: f32 = 0.25;

    /// Pre-start countdown steps (one per second)
    pub const COUNTDOWN_STEPS: u8 = 3;
    /// Hit flash visual feedback duration (seconds)
    pub const HIT_FLASH_SECS: f32 = 0.5;
    /// Delay between a sniper warning marker and the actual projectile (seconds)
    pub const SNIPER_DELAY_SECS: f32 = 1.0;
    /// Delay between game over and the exit request to the host (seconds)
    pub const AUTO_CLOSE_SECS: f32 = 2.0;

    /// Survival score accrual: one point per interval survived (seconds)
    pub const SCORE_INTERVAL: f32 = 0.1;
    /// Bonus for destroying an enemy projectile with a player shot
    pub const SHOT_DOWN_SCORE: u64 = 25;
}
