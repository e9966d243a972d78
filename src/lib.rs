//! Fisching - a hold-to-reel fishing minigame
//!
//! Core modules:
//! - `sim`: Seeded simulation (bar, fish motion, progress meter)
//! - `game`: Frame loop driving the simulation against a surface
//! - `renderer`: Translates game state into draw calls
//! - `platform`: Renderer/input surface abstraction and frame pacing
//! - `settings`: Immutable game configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameStatus, GameLoop, Outcome};
pub use settings::{GameMode, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Window dimensions
    pub const WINDOW_WIDTH: u32 = 800;
    pub const WINDOW_HEIGHT: u32 = 300;
    pub const WINDOW_TITLE: &str = "Fisching - Minigame";

    /// Target frame rate
    pub const TARGET_FPS: u32 = 60;
    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_DT: f32 = 0.1;

    /// Track (the span both bar and fish live in)
    pub const TRACK_WIDTH: f32 = 600.0;
    pub const TRACK_HEIGHT: f32 = 50.0;
    pub const TRACK_OUTLINE_WIDTH: f32 = 3.0;

    /// Player bar
    pub const PLAYER_BAR_WIDTH: f32 = 120.0;
    pub const PLAYER_SPEED: f32 = 260.0;
    /// Base bar width before the rod's control bonus
    pub const ROD_BASE_BAR_WIDTH: f32 = 160.0;
    /// Narrowest bar a rod can produce
    pub const MIN_BAR_WIDTH: f32 = 60.0;

    /// Fish marker
    pub const FISH_WIDTH: f32 = 36.0;
    pub const FISH_HEIGHT: f32 = 20.0;
    pub const FISH_SPEED_MIN: f32 = 60.0;
    pub const FISH_SPEED_MAX: f32 = 160.0;
    pub const FISH_DIR_CHANGE_MIN: f32 = 0.4;
    pub const FISH_DIR_CHANGE_MAX: f32 = 1.2;
    /// Width of the thin zone around the fish center that counts as contact
    pub const CATCH_ZONE_WIDTH: f32 = 10.0;

    /// Random walk tuning
    pub const MAX_AMPLITUDE: f32 = 120.0;
    pub const MIN_AMPLITUDE: f32 = 10.0;
    pub const BASE_DAMPING: f32 = 0.85;

    /// Progress meter
    pub const SUCCESS_THRESHOLD: f32 = 6.0;
    pub const MIN_FILL_RATE: f32 = 0.2;
    pub const DRAIN_RATE: f32 = 0.6;
    pub const PROGRESS_BAR_HEIGHT: f32 = 10.0;
    pub const PROGRESS_BAR_GAP: f32 = 14.0;
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike `f32::clamp` this never panics: when the range is inverted the
/// lower bound wins, and NaN maps to `min`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        return min;
    }
    min.max(value.min(max))
}

/// Frame delta safe to integrate: negative or non-finite becomes zero.
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() { dt.max(0.0) } else { 0.0 }
}
