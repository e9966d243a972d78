//! Platform abstraction layer
//!
//! Handles backend differences for:
//! - Input events (button down/up, close requests)
//! - Drawing primitives and presenting a frame
//! - Frame pacing

pub mod headless;

use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;

use crate::renderer::Color;
use crate::sim::Rect;

pub use headless::HeadlessSurface;

/// Mouse buttons the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A polled input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close / quit request
    Quit,
    MouseDown(MouseButton),
    MouseUp(MouseButton),
}

/// Last-known input, the only thing carried between frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Primary button is down
    pub held: bool,
    pub quit_requested: bool,
}

impl InputState {
    /// Fold this frame's events into the state
    pub fn apply(&mut self, events: &[InputEvent]) {
        for event in events {
            match event {
                InputEvent::Quit => self.quit_requested = true,
                InputEvent::MouseDown(MouseButton::Left) => self.held = true,
                InputEvent::MouseUp(MouseButton::Left) => self.held = false,
                InputEvent::MouseDown(_) | InputEvent::MouseUp(_) => {}
            }
        }
    }
}

/// Renderer/input collaborator the game loop drives.
///
/// Creating the window is the backend's constructor.
pub trait Surface {
    /// Non-blocking poll of everything that happened since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    fn clear(&mut self, color: Color);

    /// `outline_width` of 0 fills the rectangle
    fn draw_rect(&mut self, rect: Rect, color: Color, outline_width: f32);

    /// Ellipse inscribed in `rect`
    fn draw_ellipse(&mut self, rect: Rect, color: Color);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);

    /// `position` is the top-left of the text
    fn draw_text(&mut self, text: &str, position: Vec2, color: Color);

    /// Flip the back buffer
    fn present(&mut self);

    /// Block until the frame budget for `target_fps` elapses and return the
    /// seconds since the previous call
    fn tick(&mut self, target_fps: u32) -> f32;
}

/// Sleep-based frame rate cap
#[derive(Debug)]
pub struct FrameLimiter {
    last_frame: Instant,
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLimiter {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Sleep out the rest of the frame budget, then return elapsed seconds
    pub fn tick(&mut self, target_fps: u32) -> f32 {
        let budget = Duration::from_secs_f64(1.0 / target_fps.max(1) as f64);
        let spent = self.last_frame.elapsed();
        if spent < budget {
            thread::sleep(budget - spent);
        }

        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        dt
    }
}
