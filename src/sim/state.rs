//! Game state and core simulation types
//!
//! All per-run state lives in `GameState`. The whole simulation is a single
//! owned struct threaded by reference through each tick phase - no globals,
//! no host timers closing over snapshots.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::difficulty::Difficulty;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pre-start overlay counting down 3, 2, 1 (one step per second)
    Countdown,
    /// Active gameplay
    Running,
    /// Run ended; nothing mutates until the auto-close fires
    GameOver,
}

/// Enemy projectile category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Wide block drifting in from the left edge
    Standard,
    /// Mirrored pair entering from both edges at the same row
    Spread,
    /// Telegraphed fast bolt fired from the right edge
    Sniper,
}

impl ProjectileKind {
    /// All categories, in unlock order
    pub const ALL: [ProjectileKind; 3] = [
        ProjectileKind::Standard,
        ProjectileKind::Spread,
        ProjectileKind::Sniper,
    ];

    /// Collision extent (width, height) in pixels
    pub fn extent(&self) -> Vec2 {
        match self {
            ProjectileKind::Standard => Vec2::new(40.0, 20.0),
            ProjectileKind::Spread => Vec2::new(22.0, 22.0),
            ProjectileKind::Sniper => Vec2::new(56.0, 14.0),
        }
    }

    /// Difficulty scalar (elapsed seconds) at which the category starts spawning
    pub fn unlock_at(&self) -> f32 {
        match self {
            ProjectileKind::Standard => 0.0,
            ProjectileKind::Spread => 15.0,
            ProjectileKind::Sniper => 30.0,
        }
    }

    /// Expected spawn events per second once unlocked
    pub fn spawn_rate(&self) -> f32 {
        match self {
            ProjectileKind::Standard => 1.2,
            ProjectileKind::Spread => 0.5,
            ProjectileKind::Sniper => 0.35,
        }
    }

    /// HUD name
    pub fn label(&self) -> &'static str {
        match self {
            ProjectileKind::Standard => "standard",
            ProjectileKind::Spread => "spread",
            ProjectileKind::Sniper => "sniper",
        }
    }
}

/// An enemy projectile moving in a straight line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub kind: ProjectileKind,
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Projectile {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_extent(self.pos, self.kind.extent())
    }
}

/// A player-owned shot, fired rightward by the action key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shot {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Shot {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_extent(self.pos, Vec2::new(SHOT_WIDTH, SHOT_HEIGHT))
    }
}

/// Sniper telegraph: shown for a fixed delay before the projectile spawns
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Warning {
    pub id: u32,
    /// Target row (top edge of the incoming projectile)
    pub y: f32,
}

/// The player square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub lives: u8,
    pub score: u64,
    /// Brief visual feedback after a hit; cleared by a deferred action
    pub hit_flash: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vel: Vec2::ZERO,
            lives: PLAYER_START_LIVES,
            score: 0,
            hit_flash: false,
        }
    }
}

impl Player {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_extent(self.pos, Vec2::splat(PLAYER_SIZE))
    }
}

/// One-shot actions the simulation owes itself at a later clock value
///
/// These replace host-side timers: the queue is checked at the top of every
/// tick, and each action is idempotent if its referent is already gone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DeferredAction {
    /// Advance the pre-start countdown by one second
    CountdownStep,
    /// End the post-hit flash
    ClearHitFlash,
    /// Replace a sniper warning marker with the actual projectile
    SniperFire { warning_id: u32 },
    /// Ask the host to close the game after the game-over delay
    AutoClose,
}

/// A scheduled [`DeferredAction`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Deferred {
    /// Simulation clock value at which the action fires
    pub due: f32,
    pub action: DeferredAction,
}

/// Things that happened during a tick, for host sound/UI hooks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    CountdownStep { remaining: u8 },
    Started,
    PlayerHit { lives_left: u8 },
    ShotFired,
    ShotDown { kind: ProjectileKind },
    CategoryUnlocked { kind: ProjectileKind },
    GameOver { score: u64 },
    ExitRequested,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG, owned by the run
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Accumulated simulated seconds
    pub clock: f32,
    /// Countdown seconds remaining while in `Countdown`
    pub countdown: u8,
    /// Player record; persists through game over for final-score display
    pub player: Player,
    /// Enemy projectiles (sorted by id for determinism)
    pub projectiles: Vec<Projectile>,
    /// Player shots (sorted by id for determinism)
    pub shots: Vec<Shot>,
    /// Pending sniper telegraphs
    pub warnings: Vec<Warning>,
    /// Speed ramps and unlock gating
    pub difficulty: Difficulty,
    /// Scheduled one-shot actions
    pub deferred: Vec<Deferred>,
    /// Set once the host should cancel the frame callback and close
    pub exit_requested: bool,
    /// Seconds until the action key may fire again
    pub fire_cooldown: f32,
    /// Fractional survival-score accumulator
    pub score_accum: f32,
    /// Per-tick event log (cleared at tick start, never serialized)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a fresh run: countdown pending, player centered, three lives
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Countdown,
            clock: 0.0,
            countdown: COUNTDOWN_STEPS,
            player: Player::default(),
            projectiles: Vec::new(),
            shots: Vec::new(),
            warnings: Vec::new(),
            difficulty: Difficulty::new(),
            deferred: Vec::new(),
            exit_requested: false,
            fire_cooldown: 0.0,
            score_accum: 0.0,
            events: Vec::new(),
            next_id: 1,
        };
        state.schedule(1.0, DeferredAction::CountdownStep);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Schedule a one-shot action `delay` seconds from now
    pub fn schedule(&mut self, delay: f32, action: DeferredAction) {
        self.deferred.push(Deferred {
            due: self.clock + delay,
            action,
        });
    }

    /// Remove and return every deferred action that is due, oldest first
    pub(crate) fn take_due(&mut self) -> Vec<Deferred> {
        let clock = self.clock;
        let mut due: Vec<Deferred> = Vec::new();
        self.deferred.retain(|d| {
            if d.due <= clock {
                due.push(*d);
                false
            } else {
                true
            }
        });
        // retain preserves insertion order; sort by due time for same-tick batches
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
