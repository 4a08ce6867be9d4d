//! Difficulty progression: per-category speed ramps and unlock gating
//!
//! The difficulty scalar is elapsed running time. It only ever increases, and
//! each ramp only ever rises toward its ceiling - nothing resets mid-run.

use serde::{Deserialize, Serialize};

use super::state::ProjectileKind;

/// A monotonically rising speed value with a hard ceiling
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpeedRamp {
    current: f32,
    ceiling: f32,
    /// px/s gained per second of play
    rate: f32,
}

impl SpeedRamp {
    pub fn new(base: f32, ceiling: f32, rate: f32) -> Self {
        Self {
            current: base,
            ceiling,
            rate,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.current = (self.current + self.rate * dt).min(self.ceiling);
    }

    pub fn speed(&self) -> f32 {
        self.current
    }

    pub fn ceiling(&self) -> f32 {
        self.ceiling
    }
}

/// Elapsed-time scalar plus one speed ramp per projectile category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Difficulty {
    /// Seconds of `Running` play so far
    pub elapsed: f32,
    standard: SpeedRamp,
    spread: SpeedRamp,
    sniper: SpeedRamp,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}

impl Difficulty {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            // 216 px/s is the original 3.6 px/frame at 60 Hz; ceiling 14 px/frame
            standard: SpeedRamp::new(216.0, 840.0, 3.6),
            spread: SpeedRamp::new(150.0, 620.0, 2.4),
            // The fast category tops out at 18 px/frame
            sniper: SpeedRamp::new(540.0, 1080.0, 6.0),
        }
    }

    fn ramp(&self, kind: ProjectileKind) -> &SpeedRamp {
        match kind {
            ProjectileKind::Standard => &self.standard,
            ProjectileKind::Spread => &self.spread,
            ProjectileKind::Sniper => &self.sniper,
        }
    }

    /// Advance the scalar and every ramp by `dt`, returning categories that
    /// crossed their unlock threshold this tick.
    pub fn advance(&mut self, dt: f32) -> Vec<ProjectileKind> {
        let before = self.elapsed;
        self.elapsed += dt;
        self.standard.advance(dt);
        self.spread.advance(dt);
        self.sniper.advance(dt);

        ProjectileKind::ALL
            .into_iter()
            .filter(|kind| {
                let at = kind.unlock_at();
                at > before && at <= self.elapsed
            })
            .collect()
    }

    pub fn unlocked(&self, kind: ProjectileKind) -> bool {
        self.elapsed >= kind.unlock_at()
    }

    /// Current speed for a category (px/s)
    pub fn speed_of(&self, kind: ProjectileKind) -> f32 {
        self.ramp(kind).speed()
    }

    /// Human-readable unlocked-categories HUD label
    pub fn label(&self) -> String {
        ProjectileKind::ALL
            .into_iter()
            .filter(|kind| self.unlocked(*kind))
            .map(|kind| kind.label())
            .collect::<Vec<_>>()
            .join("+")
    }
}
