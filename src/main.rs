//! Fisching entry point
//!
//! Opens the window, sets up the encounter for the configured mode and runs
//! the loop until the fish is caught or the window is closed.

use glam::Vec2;
use macroquad::color::Color as MqColor;
use macroquad::input::{
    MouseButton as MqMouseButton, is_mouse_button_pressed, is_mouse_button_released,
    is_quit_requested, prevent_quit,
};
use macroquad::window::{Conf, clear_background, next_frame};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use fisching::platform::{FrameLimiter, InputEvent, MouseButton, Surface};
use fisching::renderer::Color;
use fisching::sim::{Encounter, Rect};
use fisching::{FrameStatus, GameLoop, Settings};

const FONT_SIZE: f32 = 24.0;

/// `Surface` backed by macroquad's immediate-mode drawing.
///
/// Frames are paced twice: `tick` sleeps on a `FrameLimiter` to hold the
/// configured frame rate and measure dt, and `next_frame().await` then
/// waits for the swap, which may add vsync on top. The limiter keeps dt
/// and the cap the same as in headless runs whatever the display rate is.
struct MacroquadSurface {
    limiter: FrameLimiter,
}

impl MacroquadSurface {
    /// The window itself is opened by macroquad from `window_conf`
    fn new() -> Self {
        prevent_quit();
        Self {
            limiter: FrameLimiter::new(),
        }
    }
}

fn mq_color(color: Color) -> MqColor {
    MqColor::from_rgba(color.r, color.g, color.b, color.a)
}

impl Surface for MacroquadSurface {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if is_quit_requested() {
            events.push(InputEvent::Quit);
        }
        for (mq, button) in [
            (MqMouseButton::Left, MouseButton::Left),
            (MqMouseButton::Right, MouseButton::Right),
            (MqMouseButton::Middle, MouseButton::Middle),
        ] {
            if is_mouse_button_pressed(mq) {
                events.push(InputEvent::MouseDown(button));
            }
            if is_mouse_button_released(mq) {
                events.push(InputEvent::MouseUp(button));
            }
        }
        events
    }

    fn clear(&mut self, color: Color) {
        clear_background(mq_color(color));
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, outline_width: f32) {
        if outline_width > 0.0 {
            macroquad::shapes::draw_rectangle_lines(
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                outline_width,
                mq_color(color),
            );
        } else {
            let color = mq_color(color);
            macroquad::shapes::draw_rectangle(rect.x, rect.y, rect.width, rect.height, color);
        }
    }

    fn draw_ellipse(&mut self, rect: Rect, color: Color) {
        let center = rect.center();
        macroquad::shapes::draw_ellipse(
            center.x,
            center.y,
            rect.width / 2.0,
            rect.height / 2.0,
            0.0,
            mq_color(color),
        );
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        macroquad::shapes::draw_circle(center.x, center.y, radius, mq_color(color));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        macroquad::shapes::draw_line(from.x, from.y, to.x, to.y, width, mq_color(color));
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Color) {
        // macroquad positions text by its baseline
        let baseline = position.y + FONT_SIZE * 0.75;
        macroquad::text::draw_text(text, position.x, baseline, FONT_SIZE, mq_color(color));
    }

    fn present(&mut self) {
        // Flipped by `next_frame().await` in the main loop
    }

    fn tick(&mut self, target_fps: u32) -> f32 {
        self.limiter.tick(target_fps)
    }
}

fn window_conf() -> Conf {
    let settings = Settings::default();
    Conf {
        window_title: settings.window_title,
        window_width: settings.window_width as i32,
        window_height: settings.window_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Fisching starting...");

    let settings = Settings::default();
    match serde_json::to_string(&settings) {
        Ok(json) => log::debug!("Settings: {}", json),
        Err(e) => log::warn!("Could not serialize settings: {}", e),
    }

    let seed: u64 = rand::random();
    let mut rng = Pcg32::seed_from_u64(seed);
    let encounter = Encounter::for_mode(settings.mode, &mut rng);
    log::info!("Mode: {:?}", settings.mode);

    let target_fps = settings.target_fps;
    let mut game = match GameLoop::new(settings, encounter, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid settings: {}", e);
            std::process::exit(1);
        }
    };
    let mut surface = MacroquadSurface::new();

    loop {
        let dt = surface.tick(target_fps);
        if let FrameStatus::Finished(outcome) = game.frame(&mut surface, dt) {
            log::info!("Session over: {:?}", outcome);
            break;
        }
        next_frame().await;
    }
}
