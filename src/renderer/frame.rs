//! Draw-command primitives
//!
//! The renderer describes a frame as an ordered command list; the host owns
//! the actual 800x600 surface and executes the commands however it likes.

use glam::Vec2;

/// RGBA color with channels in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color from byte RGB values
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Horizontal anchor for text commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// One drawing instruction, executed in list order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear { color: Color },
    /// Axis-aligned filled rectangle; `pos` is the top-left corner
    Rect {
        pos: Vec2,
        extent: Vec2,
        color: Color,
    },
    /// Text at a baseline position
    Text {
        pos: Vec2,
        size: f32,
        color: Color,
        align: TextAlign,
        text: String,
    },
    /// Translucent full-surface overlay (countdown / game over)
    Overlay { color: Color },
}

/// An ordered list of draw commands describing one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
