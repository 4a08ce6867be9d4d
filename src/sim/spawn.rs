//! Projectile spawn policy
//!
//! Once per tick, each unlocked category gets an independent Bernoulli draw
//! with probability `rate * dt`. Standard enters from the left edge, spread
//! as a mirrored pair from both edges, and sniper telegraphs the player's
//! current row for a fixed delay before the bolt actually fires.

use glam::Vec2;
use rand::Rng;

use super::state::{DeferredAction, GamePhase, GameState, Projectile, ProjectileKind, Warning};
use crate::consts::*;

/// Run the spawn draws for one tick
pub fn run_spawner(state: &mut GameState, dt: f32) {
    for kind in ProjectileKind::ALL {
        if !state.difficulty.unlocked(kind) {
            continue;
        }
        let draw: f32 = state.rng.random();
        if draw >= kind.spawn_rate() * dt {
            continue;
        }
        match kind {
            ProjectileKind::Standard => spawn_standard(state),
            ProjectileKind::Spread => spawn_spread_pair(state),
            ProjectileKind::Sniper => telegraph_sniper(state),
        }
    }
}

fn spawn_standard(state: &mut GameState) {
    let extent = ProjectileKind::Standard.extent();
    let y = state.rng.random_range(0.0..FIELD_HEIGHT - extent.y);
    let speed = state.difficulty.speed_of(ProjectileKind::Standard);
    let id = state.next_entity_id();
    state.projectiles.push(Projectile {
        id,
        kind: ProjectileKind::Standard,
        pos: Vec2::new(-extent.x, y),
        vel: Vec2::new(speed, 0.0),
    });
}

/// One projectile from each edge at the same row, converging on the field
fn spawn_spread_pair(state: &mut GameState) {
    let extent = ProjectileKind::Spread.extent();
    let y = state.rng.random_range(0.0..FIELD_HEIGHT - extent.y);
    let speed = state.difficulty.speed_of(ProjectileKind::Spread);

    let left_id = state.next_entity_id();
    state.projectiles.push(Projectile {
        id: left_id,
        kind: ProjectileKind::Spread,
        pos: Vec2::new(-extent.x, y),
        vel: Vec2::new(speed, 0.0),
    });
    let right_id = state.next_entity_id();
    state.projectiles.push(Projectile {
        id: right_id,
        kind: ProjectileKind::Spread,
        pos: Vec2::new(FIELD_WIDTH, y),
        vel: Vec2::new(-speed, 0.0),
    });
}

/// Drop a warning marker on the player's current row and defer the bolt
fn telegraph_sniper(state: &mut GameState) {
    let extent = ProjectileKind::Sniper.extent();
    let center = state.player.pos.y + PLAYER_SIZE / 2.0;
    let y = (center - extent.y / 2.0).clamp(0.0, FIELD_HEIGHT - extent.y);
    let id = state.next_entity_id();
    state.warnings.push(Warning { id, y });
    state.schedule(SNIPER_DELAY_SECS, DeferredAction::SniperFire { warning_id: id });
}

/// Deferred half of the sniper telegraph: swap the marker for the bolt.
///
/// A no-op if the run has ended or the marker is already gone.
pub(crate) fn fire_sniper(state: &mut GameState, warning_id: u32) {
    if state.phase != GamePhase::Running {
        return;
    }
    let Some(index) = state.warnings.iter().position(|w| w.id == warning_id) else {
        return;
    };
    let warning = state.warnings.remove(index);
    let speed = state.difficulty.speed_of(ProjectileKind::Sniper);
    let id = state.next_entity_id();
    state.projectiles.push(Projectile {
        id,
        kind: ProjectileKind::Sniper,
        pos: Vec2::new(FIELD_WIDTH, warning.y),
        vel: Vec2::new(-speed, 0.0),
    });
}
