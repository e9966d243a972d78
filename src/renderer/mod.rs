//! Frame rendering
//!
//! Turns a `GameState` into draw calls on any `Surface`.

pub mod scene;

use serde::{Deserialize, Serialize};

pub use scene::draw_frame;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}
