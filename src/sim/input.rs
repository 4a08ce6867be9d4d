//! Key event translation: raw key names to per-axis acceleration intent
//!
//! Held movement keys net to an intent in {-1, 0, +1} per axis; simultaneous
//! opposite keys cancel to zero. The action key queues a one-shot fire that
//! the next tick consumes.

use serde::{Deserialize, Serialize};

/// Which movement keys the player uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BindingPreset {
    /// `w`/`a`/`s`/`d`
    #[default]
    Wasd,
    /// `ArrowUp`/`ArrowLeft`/`ArrowDown`/`ArrowRight`
    Arrows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Movement {
    Left,
    Right,
    Up,
    Down,
}

impl BindingPreset {
    fn movement(&self, key: &str) -> Option<Movement> {
        match self {
            BindingPreset::Wasd => match key {
                "a" => Some(Movement::Left),
                "d" => Some(Movement::Right),
                "w" => Some(Movement::Up),
                "s" => Some(Movement::Down),
                _ => None,
            },
            BindingPreset::Arrows => match key {
                "ArrowLeft" => Some(Movement::Left),
                "ArrowRight" => Some(Movement::Right),
                "ArrowUp" => Some(Movement::Up),
                "ArrowDown" => Some(Movement::Down),
                _ => None,
            },
        }
    }
}

/// Currently-held movement keys plus the queued fire flag
#[derive(Debug, Clone, Default)]
pub struct InputState {
    preset: BindingPreset,
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    fire_queued: bool,
}

impl InputState {
    pub fn new(preset: BindingPreset) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    /// Record a raw key-down event by symbolic key name
    pub fn key_down(&mut self, key: &str) {
        match self.preset.movement(key) {
            Some(Movement::Left) => self.left = true,
            Some(Movement::Right) => self.right = true,
            Some(Movement::Up) => self.up = true,
            Some(Movement::Down) => self.down = true,
            None => {
                if key == " " {
                    self.fire_queued = true;
                }
            }
        }
    }

    /// Record a raw key-up event by symbolic key name
    pub fn key_up(&mut self, key: &str) {
        match self.preset.movement(key) {
            Some(Movement::Left) => self.left = false,
            Some(Movement::Right) => self.right = false,
            Some(Movement::Up) => self.up = false,
            Some(Movement::Down) => self.down = false,
            None => {}
        }
    }

    /// Net horizontal intent; opposite keys cancel
    pub fn intent_x(&self) -> i8 {
        (self.right as i8) - (self.left as i8)
    }

    /// Net vertical intent (positive is down, matching field coordinates)
    pub fn intent_y(&self) -> i8 {
        (self.down as i8) - (self.up as i8)
    }

    /// Consume the queued fire, if any
    pub fn take_fire(&mut self) -> bool {
        std::mem::take(&mut self.fire_queued)
    }

    /// Drop all held state (used at teardown so stale keys can't act later)
    pub fn clear(&mut self) {
        *self = Self::new(self.preset);
    }
}
