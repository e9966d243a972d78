//! Game settings
//!
//! One immutable value built at startup and threaded through the loop.
//! Nothing here is read from disk or the environment.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::Color;
use crate::sim::Rect;

/// Colors used when drawing a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub track: Color,
    pub track_outline: Color,
    pub player_bar: Color,
    pub eye: Color,
    pub pupil: Color,
    pub progress_fill: Color,
    pub progress_back: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(250, 250, 250),
            track: Color::rgb(200, 200, 200),
            track_outline: Color::rgb(120, 120, 120),
            // Translucent so the fish stays visible underneath
            player_bar: Color::rgba(0, 0, 0, 150),
            eye: Color::rgb(255, 255, 255),
            pupil: Color::rgb(0, 0, 0),
            progress_fill: Color::rgb(60, 180, 90),
            progress_back: Color::rgb(220, 220, 220),
            text: Color::rgb(40, 40, 40),
        }
    }
}

/// Which encounter the binary sets up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Bouncing fish and a fixed bar, runs until the window closes
    FreeRoam,
    /// Random catalog fish and rod, ends when the progress meter fills
    #[default]
    Catch,
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Session ===
    pub mode: GameMode,

    // === Window ===
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Frame rate cap for the loop clock
    pub target_fps: u32,
    /// Largest dt handed to the simulation (seconds)
    pub max_dt: f32,

    // === Track ===
    pub track_width: f32,
    pub track_height: f32,
    pub track_outline_width: f32,

    // === Player bar ===
    /// Bar width used when the encounter has no rod
    pub bar_width: f32,
    /// Bar width a rod's control bonus is applied to
    pub rod_base_bar_width: f32,
    /// Bar speed in pixels per second
    pub player_speed: f32,

    // === Fish marker ===
    pub fish_width: f32,
    pub fish_height: f32,
    pub fish_speed_min: f32,
    pub fish_speed_max: f32,
    /// Bounds of the random interval between bounce re-rolls (seconds)
    pub fish_turn_min: f32,
    pub fish_turn_max: f32,
    /// Width of the contact zone centered on the fish
    pub catch_zone_width: f32,

    // === Progress ===
    pub success_threshold: f32,

    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),

            window_title: WINDOW_TITLE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            target_fps: TARGET_FPS,
            max_dt: MAX_DT,

            track_width: TRACK_WIDTH,
            track_height: TRACK_HEIGHT,
            track_outline_width: TRACK_OUTLINE_WIDTH,

            bar_width: PLAYER_BAR_WIDTH,
            rod_base_bar_width: ROD_BASE_BAR_WIDTH,
            player_speed: PLAYER_SPEED,

            fish_width: FISH_WIDTH,
            fish_height: FISH_HEIGHT,
            fish_speed_min: FISH_SPEED_MIN,
            fish_speed_max: FISH_SPEED_MAX,
            fish_turn_min: FISH_DIR_CHANGE_MIN,
            fish_turn_max: FISH_DIR_CHANGE_MAX,
            catch_zone_width: CATCH_ZONE_WIDTH,

            success_threshold: SUCCESS_THRESHOLD,

            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Track rectangle, centered in the window on whole pixels
    pub fn track_rect(&self) -> Rect {
        let left = (self.window_width as f32 - self.track_width).div_euclid(2.0);
        let top = (self.window_height as f32 - self.track_height).div_euclid(2.0);
        Rect::new(left, top, self.track_width, self.track_height)
    }

    /// Reject layouts the simulation cannot honor.
    ///
    /// Rod-derived bar widths are clamped to the track when the state is
    /// built, so only the rodless `bar_width` is checked here.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.target_fps == 0 {
            return Err(SettingsError::ZeroFrameRate);
        }
        for (name, value) in [
            ("max_dt", self.max_dt),
            ("track_width", self.track_width),
            ("track_height", self.track_height),
            ("bar_width", self.bar_width),
            ("rod_base_bar_width", self.rod_base_bar_width),
            ("player_speed", self.player_speed),
            ("fish_width", self.fish_width),
            ("fish_height", self.fish_height),
            ("catch_zone_width", self.catch_zone_width),
            ("success_threshold", self.success_threshold),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(SettingsError::NotPositive(name));
            }
        }
        if self.track_width > self.window_width as f32
            || self.track_height > self.window_height as f32
        {
            return Err(SettingsError::TrackExceedsWindow {
                track: (self.track_width, self.track_height),
                window: (self.window_width, self.window_height),
            });
        }
        if self.bar_width > self.track_width {
            return Err(SettingsError::ExceedsTrack("bar_width"));
        }
        if self.fish_width > self.track_width {
            return Err(SettingsError::ExceedsTrack("fish_width"));
        }
        // Negated comparisons so NaN fails too; both ranges feed `random_range`
        let (speed_min, speed_max) = (self.fish_speed_min, self.fish_speed_max);
        if !(speed_min >= 0.0 && speed_min <= speed_max && speed_max.is_finite()) {
            return Err(SettingsError::InvertedRange("fish_speed"));
        }
        let (turn_min, turn_max) = (self.fish_turn_min, self.fish_turn_max);
        if !(turn_min > 0.0 && turn_min <= turn_max && turn_max.is_finite()) {
            return Err(SettingsError::InvertedRange("fish_turn"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    ZeroFrameRate,
    NotPositive(&'static str),
    TrackExceedsWindow { track: (f32, f32), window: (u32, u32) },
    ExceedsTrack(&'static str),
    InvertedRange(&'static str),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::ZeroFrameRate => write!(f, "target_fps must be at least 1"),
            SettingsError::NotPositive(name) => {
                write!(f, "{} must be a positive finite number", name)
            }
            SettingsError::TrackExceedsWindow { track, window } => write!(
                f,
                "track {}x{} does not fit in window {}x{}",
                track.0, track.1, window.0, window.1
            ),
            SettingsError::ExceedsTrack(name) => write!(f, "{} is wider than the track", name),
            SettingsError::InvertedRange(name) => {
                write!(f, "{} range is inverted or non-positive", name)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
