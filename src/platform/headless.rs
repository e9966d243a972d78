//! Window-less surface that replays scripted input
//!
//! Each call to `poll_events` hands out the next scripted frame; once the
//! script runs out, frames are empty. Time advances by a fixed `dt`.

use std::collections::VecDeque;

use glam::Vec2;

use super::{InputEvent, Surface};
use crate::renderer::Color;
use crate::sim::Rect;

#[derive(Debug, Default)]
pub struct HeadlessSurface {
    script: VecDeque<Vec<InputEvent>>,
    dt: f32,
    /// Draw calls issued since creation
    pub draw_calls: usize,
    /// Frames presented
    pub presented: usize,
    /// Times `tick` was called
    pub ticks: usize,
    /// Text drawn during the most recent frame
    pub last_texts: Vec<String>,
    pub last_clear: Option<Color>,
}

impl HeadlessSurface {
    /// Surface advancing `dt` seconds per frame with no scripted input
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            ..Default::default()
        }
    }

    /// Surface that replays `script`, one entry per frame
    pub fn with_script(dt: f32, script: Vec<Vec<InputEvent>>) -> Self {
        Self {
            script: script.into(),
            dt,
            ..Default::default()
        }
    }
}

impl Surface for HeadlessSurface {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.script.pop_front().unwrap_or_default()
    }

    fn clear(&mut self, color: Color) {
        self.last_clear = Some(color);
        self.last_texts.clear();
    }

    fn draw_rect(&mut self, _rect: Rect, _color: Color, _outline_width: f32) {
        self.draw_calls += 1;
    }

    fn draw_ellipse(&mut self, _rect: Rect, _color: Color) {
        self.draw_calls += 1;
    }

    fn draw_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {
        self.draw_calls += 1;
    }

    fn draw_line(&mut self, _from: Vec2, _to: Vec2, _color: Color, _width: f32) {
        self.draw_calls += 1;
    }

    fn draw_text(&mut self, text: &str, _position: Vec2, _color: Color) {
        self.draw_calls += 1;
        self.last_texts.push(text.to_string());
    }

    fn present(&mut self) {
        self.presented += 1;
    }

    fn tick(&mut self, _target_fps: u32) -> f32 {
        self.ticks += 1;
        self.dt
    }
}
