//! Fish and rod parameter bundles
//!
//! Both are plain immutable values. Everything the simulation needs from
//! them is derived through the pure functions below.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::Color;

/// Random impulse magnitude for a fish of the given resilience
pub fn movement_amplitude(resilience: f32) -> f32 {
    (MAX_AMPLITUDE * (1.0 - resilience)).max(MIN_AMPLITUDE)
}

/// Per-frame velocity multiplier for a fish of the given resilience
pub fn damping(resilience: f32) -> f32 {
    BASE_DAMPING + (1.0 - resilience).max(0.15) * 0.1
}

/// Progress gained per second of contact
pub fn progress_rate(progress_modifier: f32) -> f32 {
    (1.0 + progress_modifier).max(MIN_FILL_RATE)
}

/// Player bar width for a rod with the given control bonus
pub fn bar_width(control: f32, base: f32) -> f32 {
    (base * (1.0 + control)).max(MIN_BAR_WIDTH)
}

/// A catchable fish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fish {
    pub name: String,
    /// 0.0 = thrashes wildly, 1.0 = barely moves
    pub resilience: f32,
    /// Added to the base fill rate; negative makes the fish harder to reel
    pub progress_modifier: f32,
    pub color: Color,
}

impl Fish {
    pub fn new(
        name: impl Into<String>,
        resilience: f32,
        progress_modifier: f32,
        color: Color,
    ) -> Self {
        Self {
            name: name.into(),
            resilience,
            progress_modifier,
            color,
        }
    }

    pub fn movement_amplitude(&self) -> f32 {
        movement_amplitude(self.resilience)
    }

    pub fn damping(&self) -> f32 {
        damping(self.resilience)
    }

    pub fn progress_rate(&self) -> f32 {
        progress_rate(self.progress_modifier)
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self::new("Bluegill", 0.5, 0.0, Color::rgb(0, 150, 220))
    }
}

/// A fishing rod
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rod {
    pub name: String,
    /// Fractional bar width bonus (0.25 = 25% wider)
    pub control: f32,
}

impl Rod {
    pub fn new(name: impl Into<String>, control: f32) -> Self {
        Self {
            name: name.into(),
            control,
        }
    }

    pub fn bar_width(&self, base: f32) -> f32 {
        bar_width(self.control, base)
    }
}

impl Default for Rod {
    fn default() -> Self {
        Self::new("Flimsy Rod", 0.0)
    }
}

/// Built-in fish, easiest first
pub fn fish_catalog() -> Vec<Fish> {
    vec![
        Fish::new("Bluegill", 0.5, 0.0, Color::rgb(0, 150, 220)),
        Fish::new("Carp", 0.8, 0.2, Color::rgb(190, 140, 60)),
        Fish::new("Trout", 0.35, -0.1, Color::rgb(170, 120, 170)),
        Fish::new("Pike", 0.2, -0.3, Color::rgb(90, 140, 70)),
        Fish::new("Sturgeon", 0.05, -0.6, Color::rgb(80, 80, 100)),
    ]
}

/// Built-in rods, weakest first
pub fn rod_catalog() -> Vec<Rod> {
    vec![
        Rod::new("Heavy Rod", -0.2),
        Rod::new("Flimsy Rod", 0.0),
        Rod::new("Carbon Rod", 0.1),
        Rod::new("Training Rod", 0.25),
    ]
}
