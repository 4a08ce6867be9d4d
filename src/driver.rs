//! Host-facing game loop driver
//!
//! The host owns the surface, the repeating per-frame callback, and the raw
//! keyboard events; the driver owns everything else. Contract:
//! - construct on mount, call `frame(now_ms)` from the repeating callback
//! - stop scheduling as soon as `frame` returns [`FrameControl::Exit`]
//! - forward key events to `key_down` / `key_up`
//! - call `teardown` on unmount so nothing pending can fire afterwards

use crate::consts::*;
use crate::renderer::{self, Frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, InputState, TickInput, tick};

/// What the host should do with its frame callback after this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    /// Keep scheduling frames
    Continue,
    /// Cancel the callback and invoke the close action
    Exit,
}

/// Owns the simulation, input state, and frame pacing for one run
#[derive(Debug)]
pub struct GameDriver {
    state: GameState,
    input: InputState,
    accumulator: f32,
    last_time_ms: Option<f64>,
    frame_events: Vec<GameEvent>,
    torn_down: bool,
}

impl GameDriver {
    /// New run with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, &Settings::default())
    }

    pub fn with_settings(seed: u64, settings: &Settings) -> Self {
        log::info!("game mounted with seed {seed}");
        Self {
            state: GameState::new(seed),
            input: InputState::new(settings.bindings),
            accumulator: 0.0,
            last_time_ms: None,
            frame_events: Vec::new(),
            torn_down: false,
        }
    }

    /// Forward a raw key-down event. `Escape` dismisses the game.
    pub fn key_down(&mut self, key: &str) {
        if self.torn_down {
            return;
        }
        if key == "Escape" {
            self.request_exit();
            return;
        }
        self.input.key_down(key);
    }

    /// Forward a raw key-up event
    pub fn key_up(&mut self, key: &str) {
        if self.torn_down {
            return;
        }
        self.input.key_up(key);
    }

    /// Run the simulation up to `now_ms` (host wall clock, milliseconds).
    ///
    /// Converts the wall-clock delta into fixed-timestep ticks through an
    /// accumulator, capped to avoid the spiral of death after a long stall.
    pub fn frame(&mut self, now_ms: f64) -> FrameControl {
        if self.torn_down || self.state.exit_requested {
            return FrameControl::Exit;
        }

        let dt = match self.last_time_ms {
            Some(last) => (((now_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DELTA),
            None => SIM_DT,
        };
        self.last_time_ms = Some(now_ms);
        self.accumulator += dt;

        self.frame_events.clear();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = TickInput {
                move_x: self.input.intent_x(),
                move_y: self.input.intent_y(),
                fire: self.input.take_fire(),
            };
            tick(&mut self.state, &input, SIM_DT);
            self.frame_events.extend(self.state.events.iter().copied());
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        if self.state.exit_requested {
            FrameControl::Exit
        } else {
            FrameControl::Continue
        }
    }

    /// Build the draw-command list for the current state
    pub fn render(&self) -> Frame {
        renderer::render(&self.state)
    }

    /// Everything that happened during the most recent `frame` call
    pub fn events(&self) -> &[GameEvent] {
        &self.frame_events
    }

    /// Host-initiated dismissal (close button, `Escape`)
    pub fn request_exit(&mut self) {
        if !self.state.exit_requested {
            log::info!("exit requested (score {})", self.state.player.score);
            self.state.exit_requested = true;
        }
    }

    /// Cancel everything pending. Later `frame`/key calls are no-ops.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.state.deferred.clear();
        self.input.clear();
        log::info!("game torn down");
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
