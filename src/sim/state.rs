//! Game state and core simulation types
//!
//! Everything the minigame mutates per frame lives in `GameState`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::gear::{Fish, Rod, fish_catalog, rod_catalog};
use super::geometry::Rect;
use super::motion::{Motion, MotionKind};
use crate::{clamp, sanitize_dt};
use crate::consts::DRAIN_RATE;
use crate::settings::{GameMode, Settings, SettingsError};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bar and fish are moving
    Playing,
    /// Progress reached the threshold
    Caught,
}

/// Track edge the fish ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
}

/// Things that happened during a tick, drained by the loop for logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    FishTurned { edge: Edge },
    FishRerolled { direction: f32, speed: f32 },
    ContactGained,
    ContactLost,
    Caught { elapsed: f32 },
}

/// The horizontal span the bar and the fish live in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackRegion {
    rect: Rect,
}

impl TrackRegion {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Allowed range for the left edge of something `width` wide
    pub fn span_for(&self, width: f32) -> (f32, f32) {
        (self.rect.left(), self.rect.right() - width)
    }

    pub fn center_y(&self) -> f32 {
        self.rect.center().y
    }
}

/// The player-controlled bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBar {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per second
    pub speed: f32,
}

impl PlayerBar {
    /// Move right while `held`, drift left otherwise
    pub fn advance(&mut self, held: bool, dt: f32, track: &TrackRegion) {
        let direction = if held { 1.0 } else { -1.0 };
        let (min_x, max_x) = track.span_for(self.width);
        let dx = direction * self.speed * sanitize_dt(dt);
        self.x = clamp(self.x + dx, min_x, max_x);
    }

    pub fn rect(&self, track: &TrackRegion) -> Rect {
        Rect::new(self.x, track.rect().top(), self.width, self.height)
    }
}

/// The moving fish indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishMarker {
    /// Left edge
    pub x: f32,
    /// Pixels per second, signed
    pub velocity: f32,
    pub width: f32,
    pub height: f32,
}

impl FishMarker {
    /// Marker rectangle, vertically centered on the track
    pub fn rect(&self, track: &TrackRegion) -> Rect {
        Rect::new(
            self.x,
            track.center_y() - self.height / 2.0,
            self.width,
            self.height,
        )
    }

    /// Thin full-height zone centered on the marker that counts as contact
    pub fn catch_zone(&self, track: &TrackRegion, zone_width: f32) -> Rect {
        let center_x = self.x + self.width / 2.0;
        let track_rect = track.rect();
        Rect::new(
            center_x - zone_width / 2.0,
            track_rect.top(),
            zone_width,
            track_rect.height,
        )
    }
}

/// Seconds-in-contact meter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressMeter {
    pub value: f32,
    pub threshold: f32,
    /// Gained per second of contact
    pub fill_rate: f32,
    /// Lost per second without contact
    pub drain_rate: f32,
}

impl ProgressMeter {
    pub fn new(threshold: f32, fill_rate: f32) -> Self {
        Self {
            value: 0.0,
            threshold,
            fill_rate,
            drain_rate: DRAIN_RATE,
        }
    }

    /// Fill or drain for one frame, returning true once the threshold is hit
    pub fn update(&mut self, contact: bool, dt: f32) -> bool {
        let dt = sanitize_dt(dt);
        let delta = if contact {
            dt * self.fill_rate
        } else {
            -dt * self.drain_rate
        };
        self.value = clamp(self.value + delta, 0.0, self.threshold);
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.value >= self.threshold
    }

    /// Fill level in [0, 1] for drawing
    pub fn fraction(&self) -> f32 {
        if self.threshold > 0.0 {
            clamp(self.value / self.threshold, 0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// What the player is fishing for this session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub fish: Fish,
    /// Without a rod the bar uses `Settings::bar_width`
    pub rod: Option<Rod>,
    pub motion: MotionKind,
    /// Whether a progress meter decides the session
    pub catchable: bool,
}

impl Encounter {
    /// Bouncing fish, fixed bar, no progress meter
    pub fn free_roam() -> Self {
        Self {
            fish: Fish::default(),
            rod: None,
            motion: MotionKind::Bounce,
            catchable: false,
        }
    }

    /// Random-walking fish, rod-sized bar, ends when the meter fills
    pub fn catch(fish: Fish, rod: Rod) -> Self {
        Self {
            fish,
            rod: Some(rod),
            motion: MotionKind::DampedWalk,
            catchable: true,
        }
    }

    /// Encounter for a configured mode; catch mode draws from the catalogs
    pub fn for_mode<R: Rng>(mode: GameMode, rng: &mut R) -> Self {
        match mode {
            GameMode::FreeRoam => Self::free_roam(),
            GameMode::Catch => {
                let mut fishes = fish_catalog();
                let mut rods = rod_catalog();
                let fish = fishes.swap_remove(rng.random_range(0..fishes.len()));
                let rod = rods.swap_remove(rng.random_range(0..rods.len()));
                Self::catch(fish, rod)
            }
        }
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub encounter: Encounter,
    pub track: TrackRegion,
    pub player: PlayerBar,
    pub fish: FishMarker,
    pub motion: Motion,
    /// Present only for catchable encounters
    pub progress: Option<ProgressMeter>,
    pub phase: GamePhase,
    /// Whether the bar covered the catch zone last tick
    pub contact: bool,
    /// Simulated seconds
    pub elapsed: f32,
    pub frames: u64,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    /// Width of the contact zone centered on the fish
    pub catch_zone_width: f32,
}

impl GameState {
    /// Build the starting state for an encounter.
    ///
    /// Fails if `settings` does not validate, since motion setup samples
    /// from the configured speed and turn ranges.
    pub fn new(
        settings: &Settings,
        encounter: Encounter,
        seed: u64,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let track = TrackRegion::new(settings.track_rect());

        let bar_width = encounter
            .rod
            .as_ref()
            .map(|rod| rod.bar_width(settings.rod_base_bar_width))
            .unwrap_or(settings.bar_width)
            .min(settings.track_width);
        let player = PlayerBar {
            x: track.rect().left(),
            width: bar_width,
            height: settings.track_height,
            speed: settings.player_speed,
        };

        let (fish_min, fish_max) = track.span_for(settings.fish_width);
        let fish = FishMarker {
            x: clamp(
                track.rect().left() + track.rect().width * 0.5,
                fish_min,
                fish_max,
            ),
            velocity: 0.0,
            width: settings.fish_width,
            height: settings.fish_height,
        };

        let motion = Motion::new(encounter.motion, &encounter.fish, settings, &mut rng);
        let fill_rate = encounter.fish.progress_rate();
        let progress = encounter
            .catchable
            .then(|| ProgressMeter::new(settings.success_threshold, fill_rate));

        Ok(Self {
            seed,
            rng,
            encounter,
            track,
            player,
            fish,
            motion,
            progress,
            phase: GamePhase::Playing,
            contact: false,
            elapsed: 0.0,
            frames: 0,
            events: Vec::new(),
            catch_zone_width: settings.catch_zone_width,
        })
    }

    pub fn player_rect(&self) -> Rect {
        self.player.rect(&self.track)
    }

    pub fn fish_rect(&self) -> Rect {
        self.fish.rect(&self.track)
    }

    pub fn catch_zone(&self) -> Rect {
        self.fish.catch_zone(&self.track, self.catch_zone_width)
    }

    pub fn is_over(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
