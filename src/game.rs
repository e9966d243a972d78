//! Frame loop
//!
//! `GameLoop` owns the settings, the simulation state and the last-known
//! input. Each frame it polls the surface, advances the simulation and
//! draws the result.

use crate::platform::{InputState, Surface};
use crate::renderer::draw_frame;
use crate::settings::{Settings, SettingsError};
use crate::sim::{Encounter, GameEvent, GamePhase, GameState, TickInput, tick};

/// How a session ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The progress meter filled
    Caught { fish: String, elapsed: f32 },
    /// The window was closed first
    Quit { elapsed: f32 },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Caught { .. })
    }
}

/// Result of a single frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameStatus {
    Running,
    Finished(Outcome),
}

/// Drives one session: poll input, tick, draw
pub struct GameLoop {
    settings: Settings,
    state: GameState,
    input: InputState,
}

impl GameLoop {
    /// Fails without logging a session start if `settings` is invalid
    pub fn new(
        settings: Settings,
        encounter: Encounter,
        seed: u64,
    ) -> Result<Self, SettingsError> {
        let state = GameState::new(&settings, encounter, seed)?;
        log::info!(
            "Session start: seed={} fish={} rod={} motion={}",
            seed,
            state.encounter.fish.name,
            state
                .encounter
                .rod
                .as_ref()
                .map(|rod| rod.name.as_str())
                .unwrap_or("none"),
            state.encounter.motion.as_str()
        );
        Ok(Self {
            settings,
            state,
            input: InputState::default(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run one frame with an already-measured `dt`.
    ///
    /// A quit request ends the session before the simulation is touched.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, dt: f32) -> FrameStatus {
        let events = surface.poll_events();
        self.input.apply(&events);
        if self.input.quit_requested {
            log::info!("Quit after {:.2}s", self.state.elapsed);
            return FrameStatus::Finished(Outcome::Quit {
                elapsed: self.state.elapsed,
            });
        }

        let dt = dt.min(self.settings.max_dt);
        tick(
            &mut self.state,
            &TickInput {
                held: self.input.held,
            },
            dt,
        );

        for event in self.state.drain_events() {
            match event {
                GameEvent::Caught { elapsed } => {
                    log::info!("Caught {} after {:.2}s", self.state.encounter.fish.name, elapsed)
                }
                other => log::debug!("{:?}", other),
            }
        }

        draw_frame(&self.state, &self.settings, surface);

        if self.state.phase == GamePhase::Caught {
            return FrameStatus::Finished(Outcome::Caught {
                fish: self.state.encounter.fish.name.clone(),
                elapsed: self.state.elapsed,
            });
        }
        FrameStatus::Running
    }

    /// Pace, poll, update and draw until the session ends
    pub fn run<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Outcome {
        loop {
            let dt = surface.tick(self.settings.target_fps);
            if let FrameStatus::Finished(outcome) = self.frame(surface, dt) {
                return outcome;
            }
        }
    }
}
