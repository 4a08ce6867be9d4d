//! Player kinematic integrator
//!
//! The only place player position changes. Order per tick: acceleration from
//! input intent, friction on idle axes, speed clamp, move, wall response.
//!
//! Wall policy: clamp to the edge and invert the offending velocity component
//! scaled by `WALL_RESTITUTION`.

use super::state::Player;
use crate::consts::*;

/// Advance the player by one tick of duration `dt`.
///
/// `intent_x`/`intent_y` are the per-axis acceleration intents in {-1, 0, +1}
/// produced by the input handler. Friction is a fixed per-tick damping factor,
/// tuned for the 60 Hz timestep.
pub fn integrate(player: &mut Player, intent_x: i8, intent_y: i8, dt: f32) {
    player.vel.x += intent_x as f32 * ACCEL * dt;
    player.vel.y += intent_y as f32 * ACCEL * dt;

    if intent_x == 0 {
        player.vel.x *= FRICTION;
    }
    if intent_y == 0 {
        player.vel.y *= FRICTION;
    }

    player.vel.x = player.vel.x.clamp(-MAX_SPEED, MAX_SPEED);
    player.vel.y = player.vel.y.clamp(-MAX_SPEED, MAX_SPEED);

    player.pos += player.vel * dt;

    let max_x = FIELD_WIDTH - PLAYER_SIZE;
    let max_y = FIELD_HEIGHT - PLAYER_SIZE;
    if player.pos.x < 0.0 {
        player.pos.x = 0.0;
        player.vel.x *= -WALL_RESTITUTION;
    } else if player.pos.x > max_x {
        player.pos.x = max_x;
        player.vel.x *= -WALL_RESTITUTION;
    }
    if player.pos.y < 0.0 {
        player.pos.y = 0.0;
        player.vel.y *= -WALL_RESTITUTION;
    } else if player.pos.y > max_y {
        player.pos.y = max_y;
        player.vel.y *= -WALL_RESTITUTION;
    }
}
