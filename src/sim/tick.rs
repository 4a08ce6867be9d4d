//! Fixed timestep simulation tick
//!
//! Orchestrates one step of the run: deferred actions, player physics,
//! projectile motion, collisions, spawning, and the difficulty ramp, in that
//! order. Rendering reads the resulting state separately and never mutates.

use glam::Vec2;

use super::state::{DeferredAction, GameEvent, GamePhase, GameState, Shot};
use super::{collision, physics, spawn};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Horizontal acceleration intent in {-1, 0, +1}
    pub move_x: i8,
    /// Vertical acceleration intent in {-1, 0, +1}; positive is down
    pub move_y: i8,
    /// One-shot fire request
    pub fire: bool,
}

/// Advance the game state by one tick of duration `dt`
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    // A stale scheduled callback must not resurrect a closed run
    if state.exit_requested {
        return;
    }

    state.clock += dt;
    for deferred in state.take_due() {
        apply_deferred(state, deferred.action);
    }

    if state.phase != GamePhase::Running {
        return;
    }

    physics::integrate(&mut state.player, input.move_x, input.move_y, dt);

    state.fire_cooldown -= dt;
    if input.fire && state.fire_cooldown <= 0.0 {
        fire_shot(state);
    }

    advance_projectiles(state, dt);

    collision::run_collisions(state);
    if state.phase != GamePhase::Running {
        // Lives ran out this tick; nothing else may mutate
        return;
    }

    spawn::run_spawner(state, dt);

    for kind in state.difficulty.advance(dt) {
        state.push_event(GameEvent::CategoryUnlocked { kind });
        log::info!("unlocked {} projectiles", kind.label());
    }

    state.score_accum += dt;
    while state.score_accum >= SCORE_INTERVAL {
        state.score_accum -= SCORE_INTERVAL;
        state.player.score += 1;
    }
}

fn apply_deferred(state: &mut GameState, action: DeferredAction) {
    match action {
        DeferredAction::CountdownStep => {
            if state.phase != GamePhase::Countdown {
                return;
            }
            state.countdown -= 1;
            if state.countdown == 0 {
                state.phase = GamePhase::Running;
                state.push_event(GameEvent::Started);
                log::info!("run started (seed {})", state.seed);
            } else {
                state.push_event(GameEvent::CountdownStep {
                    remaining: state.countdown,
                });
                state.schedule(1.0, DeferredAction::CountdownStep);
            }
        }
        DeferredAction::ClearHitFlash => {
            state.player.hit_flash = false;
        }
        DeferredAction::SniperFire { warning_id } => {
            spawn::fire_sniper(state, warning_id);
        }
        DeferredAction::AutoClose => {
            if !state.exit_requested {
                state.exit_requested = true;
                state.push_event(GameEvent::ExitRequested);
            }
        }
    }
}

fn fire_shot(state: &mut GameState) {
    let origin = Vec2::new(
        state.player.pos.x + PLAYER_SIZE,
        state.player.pos.y + (PLAYER_SIZE - SHOT_HEIGHT) / 2.0,
    );
    let id = state.next_entity_id();
    state.shots.push(Shot {
        id,
        pos: origin,
        vel: Vec2::new(SHOT_SPEED, 0.0),
    });
    state.fire_cooldown = SHOT_COOLDOWN;
    state.push_event(GameEvent::ShotFired);
}

/// Straight-line motion for projectiles and shots, then edge culling
fn advance_projectiles(state: &mut GameState, dt: f32) {
    for projectile in &mut state.projectiles {
        projectile.pos += projectile.vel * dt;
    }
    state
        .projectiles
        .retain(|p| within_cull_bounds(p.pos, p.kind.extent()));

    for shot in &mut state.shots {
        shot.pos += shot.vel * dt;
    }
    state
        .shots
        .retain(|s| within_cull_bounds(s.pos, Vec2::new(SHOT_WIDTH, SHOT_HEIGHT)));
}

/// An entity survives until fully past a field edge by the cull margin
fn within_cull_bounds(pos: Vec2, extent: Vec2) -> bool {
    pos.x <= FIELD_WIDTH + CULL_MARGIN
        && pos.x + extent.x >= -CULL_MARGIN
        && pos.y <= FIELD_HEIGHT + CULL_MARGIN
        && pos.y + extent.y >= -CULL_MARGIN
}
