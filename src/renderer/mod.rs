//! Frame building
//!
//! A pure read of the current [`GameState`]: background, player, projectiles,
//! warning markers, HUD, and the countdown / game-over overlays. Performs no
//! mutation; the host executes the resulting command list.

pub mod frame;

pub use frame::{Color, DrawCommand, Frame, TextAlign};

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GamePhase, GameState, ProjectileKind};

/// Field background
pub const BG_COLOR: Color = Color::from_rgb_u8(0x1f, 0x1f, 0x1f);
/// Player square
pub const PLAYER_COLOR: Color = Color::from_rgb_u8(0x00, 0x78, 0xfa);
/// Player square while the hit flash is active
pub const PLAYER_HIT_COLOR: Color = Color::from_rgb_u8(0xff, 0xff, 0xff);
/// Standard projectile
pub const STANDARD_COLOR: Color = Color::from_rgb_u8(0xff, 0xff, 0xff);
/// Spread projectile
pub const SPREAD_COLOR: Color = Color::from_rgb_u8(0xff, 0xa0, 0x28);
/// Sniper projectile
pub const SNIPER_COLOR: Color = Color::from_rgb_u8(0xff, 0x3c, 0x3c);
/// Sniper warning marker (translucent row strip)
pub const WARNING_COLOR: Color = Color::from_rgb_u8(0xff, 0x00, 0x00).with_alpha(0.35);
/// HUD text
pub const HUD_COLOR: Color = Color::from_rgb_u8(0xff, 0x00, 0x00);
/// Overlay dim and its text
pub const OVERLAY_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.7);
pub const OVERLAY_TEXT_COLOR: Color = Color::from_rgb_u8(0xff, 0xff, 0xff);

fn kind_color(kind: ProjectileKind) -> Color {
    match kind {
        ProjectileKind::Standard => STANDARD_COLOR,
        ProjectileKind::Spread => SPREAD_COLOR,
        ProjectileKind::Sniper => SNIPER_COLOR,
    }
}

/// Produce one frame for the current state
pub fn render(state: &GameState) -> Frame {
    let mut frame = Frame::new();
    frame.push(DrawCommand::Clear { color: BG_COLOR });

    let player_color = if state.player.hit_flash {
        PLAYER_HIT_COLOR
    } else {
        PLAYER_COLOR
    };
    frame.push(DrawCommand::Rect {
        pos: state.player.pos,
        extent: Vec2::splat(PLAYER_SIZE),
        color: player_color,
    });

    for projectile in &state.projectiles {
        frame.push(DrawCommand::Rect {
            pos: projectile.pos,
            extent: projectile.kind.extent(),
            color: kind_color(projectile.kind),
        });
    }

    for shot in &state.shots {
        frame.push(DrawCommand::Rect {
            pos: shot.pos,
            extent: Vec2::new(SHOT_WIDTH, SHOT_HEIGHT),
            color: PLAYER_COLOR,
        });
    }

    for warning in &state.warnings {
        frame.push(DrawCommand::Rect {
            pos: Vec2::new(0.0, warning.y),
            extent: Vec2::new(FIELD_WIDTH, ProjectileKind::Sniper.extent().y),
            color: WARNING_COLOR,
        });
    }

    hud(state, &mut frame);

    match state.phase {
        GamePhase::Countdown => {
            frame.push(DrawCommand::Overlay {
                color: OVERLAY_COLOR,
            });
            frame.push(DrawCommand::Text {
                pos: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
                size: 48.0,
                color: OVERLAY_TEXT_COLOR,
                align: TextAlign::Center,
                text: format!("Starting in {}", state.countdown),
            });
        }
        GamePhase::GameOver => {
            frame.push(DrawCommand::Overlay {
                color: OVERLAY_COLOR,
            });
            frame.push(DrawCommand::Text {
                pos: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
                size: 48.0,
                color: OVERLAY_TEXT_COLOR,
                align: TextAlign::Center,
                text: "GAME OVER".to_string(),
            });
            frame.push(DrawCommand::Text {
                pos: Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0 + 60.0),
                size: 48.0,
                color: OVERLAY_TEXT_COLOR,
                align: TextAlign::Center,
                text: format!("Final Score: {}", state.player.score),
            });
        }
        GamePhase::Running => {}
    }

    frame
}

fn hud(state: &GameState, frame: &mut Frame) {
    frame.push(DrawCommand::Text {
        pos: Vec2::new(20.0, 30.0),
        size: 20.0,
        color: HUD_COLOR,
        align: TextAlign::Left,
        text: format!("Lives: {}", state.player.lives),
    });
    frame.push(DrawCommand::Text {
        pos: Vec2::new(20.0, 60.0),
        size: 20.0,
        color: HUD_COLOR,
        align: TextAlign::Left,
        text: format!("Score: {}", state.player.score),
    });
    frame.push(DrawCommand::Text {
        pos: Vec2::new(20.0, 90.0),
        size: 20.0,
        color: HUD_COLOR,
        align: TextAlign::Left,
        text: format!("Threats: {}", state.difficulty.label()),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Projectile, Warning};

    fn overlay_count(frame: &Frame) -> usize {
        frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Overlay { .. }))
            .count()
    }

    fn texts(frame: &Frame) -> Vec<&str> {
        frame
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn countdown_frame_shows_the_overlay() {
        let state = GameState::new(1);
        let frame = render(&state);
        assert_eq!(overlay_count(&frame), 1);
        assert!(texts(&frame).contains(&"Starting in 3"));
    }

    #[test]
    fn running_frame_has_no_overlay() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Running;
        let frame = render(&state);
        assert_eq!(overlay_count(&frame), 0);
        assert!(texts(&frame).contains(&"Lives: 3"));
        assert!(texts(&frame).contains(&"Score: 0"));
        assert!(texts(&frame).contains(&"Threats: standard"));
    }

    #[test]
    fn game_over_frame_shows_the_final_score() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        state.player.score = 321;
        let frame = render(&state);
        assert_eq!(overlay_count(&frame), 1);
        assert!(texts(&frame).contains(&"GAME OVER"));
        assert!(texts(&frame).contains(&"Final Score: 321"));
    }

    #[test]
    fn hit_flash_swaps_the_player_color() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Running;
        state.player.hit_flash = true;
        let frame = render(&state);
        let player_rect = frame
            .commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Rect { .. }))
            .unwrap();
        match player_rect {
            DrawCommand::Rect { color, .. } => assert_eq!(*color, PLAYER_HIT_COLOR),
            _ => unreachable!(),
        }
    }

    #[test]
    fn every_entity_gets_a_rect() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Running;
        state.projectiles.push(Projectile {
            id: 1,
            kind: ProjectileKind::Standard,
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(216.0, 0.0),
        });
        state.warnings.push(Warning { id: 2, y: 250.0 });

        let frame = render(&state);
        let rects = frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        // Player + projectile + warning strip
        assert_eq!(rects, 3);
    }
}
