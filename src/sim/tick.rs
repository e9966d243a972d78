//! Per-frame simulation update
//!
//! Advances bar, fish and progress meter by one variable timestep.

use super::motion::FishMotion;
use super::state::{GameEvent, GamePhase, GameState};
use crate::sanitize_dt;

/// Input sampled for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Primary mouse button is down
    pub held: bool,
}

/// Advance the game state by `dt` seconds.
///
/// Negative or non-finite `dt` is treated as zero. Does nothing once the
/// session is over.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.is_over() {
        return;
    }

    let dt = sanitize_dt(dt);
    state.frames += 1;
    state.elapsed += dt;

    // Bar
    state.player.advance(input.held, dt, &state.track);

    // Fish
    let bounds = state.track.span_for(state.fish.width);
    state
        .motion
        .step(&mut state.fish, bounds, &mut state.rng, dt, &mut state.events);

    // Contact
    let contact = state.player_rect().overlaps_x(&state.catch_zone());
    if contact != state.contact {
        state.events.push(if contact {
            GameEvent::ContactGained
        } else {
            GameEvent::ContactLost
        });
        state.contact = contact;
    }

    // Progress
    if let Some(meter) = state.progress.as_mut() {
        if meter.update(contact, dt) {
            state.phase = GamePhase::Caught;
            state.events.push(GameEvent::Caught {
                elapsed: state.elapsed,
            });
        }
    }
}
