//! Axis-aligned collision detection and hit resolution
//!
//! Everything here is rectangles: the player, enemy projectiles, and player
//! shots all collide via the standard AABB overlap test. Boundary contact
//! (zero overlap) is a miss.

use glam::Vec2;

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build from a top-left corner and an extent
    pub fn from_pos_extent(pos: Vec2, extent: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + extent,
        }
    }

    /// Strict overlap on both axes simultaneously
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Resolve all collisions for one tick, after motion has been applied.
///
/// First pass: enemy projectiles against the player. Each overlapping
/// projectile is removed, costs one life, flashes the player, and knocks the
/// player along the projectile's travel direction. Second pass: player shots
/// against enemy projectiles, removing both and awarding bonus score.
///
/// Transitions to `GameOver` in the same tick lives reach zero.
pub fn run_collisions(state: &mut GameState) {
    let player_box = state.player.aabb();

    let mut hits: u8 = 0;
    let mut knockback = Vec2::ZERO;
    state.projectiles.retain(|p| {
        if p.aabb().overlaps(&player_box) {
            hits += 1;
            knockback += p.vel.normalize_or_zero() * KNOCKBACK;
            false
        } else {
            true
        }
    });

    for _ in 0..hits {
        state.player.lives = state.player.lives.saturating_sub(1);
        state.push_event(GameEvent::PlayerHit {
            lives_left: state.player.lives,
        });
    }
    if hits > 0 {
        state.player.vel += knockback;
        state.player.hit_flash = true;
        state.schedule(HIT_FLASH_SECS, super::state::DeferredAction::ClearHitFlash);
    }

    // Player shots vs enemy projectiles: first overlap wins, both are removed
    let mut shots = std::mem::take(&mut state.shots);
    let mut killed: Vec<u32> = Vec::new();
    shots.retain(|shot| {
        let shot_box = shot.aabb();
        let victim = state
            .projectiles
            .iter()
            .find(|p| !killed.contains(&p.id) && p.aabb().overlaps(&shot_box))
            .map(|p| (p.id, p.kind));
        match victim {
            Some((id, kind)) => {
                killed.push(id);
                state.player.score += SHOT_DOWN_SCORE;
                state.events.push(GameEvent::ShotDown { kind });
                false
            }
            None => true,
        }
    });
    state.shots = shots;
    if !killed.is_empty() {
        state.projectiles.retain(|p| !killed.contains(&p.id));
    }

    if state.player.lives == 0 && state.phase == GamePhase::Running {
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::GameOver {
            score: state.player.score,
        });
        state.schedule(AUTO_CLOSE_SECS, super::state::DeferredAction::AutoClose);
        log::info!(
            "game over at {:.1}s with score {}",
            state.clock,
            state.player.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Projectile, ProjectileKind, Shot};

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_pos_extent(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn deep_overlap_hits() {
        let a = rect(0.0, 0.0, 50.0, 50.0);
        let b = rect(25.0, 25.0, 40.0, 20.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn boundary_touch_is_a_miss() {
        let a = rect(0.0, 0.0, 50.0, 50.0);
        // Touching on the right edge: intervals share only the point x=50
        let b = rect(50.0, 10.0, 40.0, 20.0);
        assert!(!a.overlaps(&b));
        // Touching on the bottom edge
        let c = rect(10.0, 50.0, 40.0, 20.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn overlap_on_one_axis_only_is_a_miss() {
        let a = rect(0.0, 0.0, 50.0, 50.0);
        let b = rect(20.0, 200.0, 40.0, 20.0);
        assert!(!a.overlaps(&b));
    }

    fn running_state() -> GameState {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Running;
        state
    }

    fn projectile_on_player(state: &mut GameState) -> u32 {
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            kind: ProjectileKind::Standard,
            pos: state.player.pos,
            vel: Vec2::new(300.0, 0.0),
        });
        id
    }

    #[test]
    fn hit_costs_a_life_and_removes_the_projectile() {
        let mut state = running_state();
        projectile_on_player(&mut state);

        run_collisions(&mut state);

        assert_eq!(state.player.lives, 2);
        assert!(state.projectiles.is_empty());
        assert!(state.player.hit_flash);
        assert!(
            state
                .events
                .contains(&GameEvent::PlayerHit { lives_left: 2 })
        );
    }

    #[test]
    fn knockback_points_along_projectile_travel() {
        let mut state = running_state();
        projectile_on_player(&mut state);

        run_collisions(&mut state);

        // Projectile was moving +x, so the player is pushed +x
        assert!(state.player.vel.x > 0.0);
        assert_eq!(state.player.vel.y, 0.0);
    }

    #[test]
    fn three_hits_end_the_run() {
        let mut state = running_state();
        for _ in 0..3 {
            projectile_on_player(&mut state);
        }

        run_collisions(&mut state);

        assert_eq!(state.player.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::GameOver { .. }))
        );
    }

    #[test]
    fn lives_never_go_below_zero() {
        let mut state = running_state();
        for _ in 0..5 {
            projectile_on_player(&mut state);
        }

        run_collisions(&mut state);

        assert_eq!(state.player.lives, 0);
    }

    #[test]
    fn shot_destroys_projectile_and_awards_bonus() {
        let mut state = running_state();
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            kind: ProjectileKind::Spread,
            pos: Vec2::new(600.0, 100.0),
            vel: Vec2::new(-200.0, 0.0),
        });
        let shot_id = state.next_entity_id();
        state.shots.push(Shot {
            id: shot_id,
            pos: Vec2::new(605.0, 105.0),
            vel: Vec2::new(SHOT_SPEED, 0.0),
        });

        run_collisions(&mut state);

        assert!(state.projectiles.is_empty());
        assert!(state.shots.is_empty());
        assert_eq!(state.player.score, SHOT_DOWN_SCORE);
        assert!(state.events.contains(&GameEvent::ShotDown {
            kind: ProjectileKind::Spread
        }));
    }

    #[test]
    fn shot_misses_leave_everything_alone() {
        let mut state = running_state();
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            kind: ProjectileKind::Standard,
            pos: Vec2::new(100.0, 500.0),
            vel: Vec2::new(300.0, 0.0),
        });
        let shot_id = state.next_entity_id();
        state.shots.push(Shot {
            id: shot_id,
            pos: Vec2::new(600.0, 100.0),
            vel: Vec2::new(SHOT_SPEED, 0.0),
        });

        run_collisions(&mut state);

        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.shots.len(), 1);
        assert_eq!(state.player.score, 0);
    }
}
