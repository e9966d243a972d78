//! Draw order for one frame: background, track, fish, bar, HUD

use glam::Vec2;

use crate::consts::{PROGRESS_BAR_GAP, PROGRESS_BAR_HEIGHT};
use crate::platform::Surface;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, Rect};

/// Eye offset from the fish's right edge / vertical center
const EYE_INSET: f32 = 8.0;
const EYE_RISE: f32 = 2.0;
const EYE_RADIUS: f32 = 3.0;
const PUPIL_RADIUS: f32 = 1.0;

/// Draw the current state and present it
pub fn draw_frame<S: Surface + ?Sized>(state: &GameState, settings: &Settings, surface: &mut S) {
    let palette = &settings.palette;
    let track = state.track.rect();

    surface.clear(palette.background);

    // Track
    surface.draw_rect(track, palette.track, 0.0);
    surface.draw_rect(track, palette.track_outline, settings.track_outline_width);

    // Fish
    let fish = state.fish_rect();
    surface.draw_ellipse(fish, state.encounter.fish.color);
    let eye = Vec2::new(fish.right() - EYE_INSET, fish.center().y - EYE_RISE);
    surface.draw_circle(eye, EYE_RADIUS, palette.eye);
    surface.draw_circle(eye, PUPIL_RADIUS, palette.pupil);

    // Player bar
    surface.draw_rect(state.player_rect(), palette.player_bar, 0.0);

    match &state.progress {
        Some(meter) => {
            // Contact zone marker
            let zone = state.catch_zone();
            let zone_color = if state.contact {
                palette.progress_fill
            } else {
                palette.track_outline
            };
            surface.draw_line(
                Vec2::new(zone.center().x, track.top()),
                Vec2::new(zone.center().x, track.bottom()),
                zone_color,
                1.0,
            );

            // Meter under the track
            let back = Rect::new(
                track.left(),
                track.bottom() + PROGRESS_BAR_GAP,
                track.width,
                PROGRESS_BAR_HEIGHT,
            );
            surface.draw_rect(back, palette.progress_back, 0.0);
            surface.draw_rect(
                back.with_width(back.width * meter.fraction()),
                palette.progress_fill,
                0.0,
            );
            surface.draw_rect(back, palette.track_outline, 1.0);

            let label = match state.phase {
                GamePhase::Caught => format!("Caught a {}!", state.encounter.fish.name),
                _ => format!(
                    "{} - {:.0}%",
                    state.encounter.fish.name,
                    meter.fraction() * 100.0
                ),
            };
            surface.draw_text(&label, hud_anchor(track), palette.text);
        }
        None => {
            surface.draw_text(
                "Hold the left mouse button to move right",
                hud_anchor(track),
                palette.text,
            );
        }
    }

    surface.present();
}

/// Top-left of the HUD text line, above the track
fn hud_anchor(track: Rect) -> Vec2 {
    Vec2::new(track.left(), track.top() - 36.0)
}
