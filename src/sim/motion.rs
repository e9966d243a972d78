//! Fish motion strategies
//!
//! Two interchangeable policies move the fish marker along the track:
//! - `BoundedBounce`: constant speed, bounces off the track edges and
//!   re-rolls direction/speed on a random timer
//! - `DampedWalk`: random velocity impulses scaled by the fish's
//!   resilience, damped every frame
//!
//! The strategy is chosen once when the game state is built.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::gear::Fish;
use super::state::{Edge, FishMarker, GameEvent};
use crate::clamp;
use crate::settings::Settings;

/// Which motion policy an encounter uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MotionKind {
    #[default]
    Bounce,
    DampedWalk,
}

impl MotionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionKind::Bounce => "Bounce",
            MotionKind::DampedWalk => "DampedWalk",
        }
    }
}

/// Moves a fish marker one frame forward.
///
/// `bounds` is the allowed range for the marker's left edge. Implementations
/// must leave `fish.x` inside it.
pub trait FishMotion {
    fn step<R: Rng>(
        &mut self,
        fish: &mut FishMarker,
        bounds: (f32, f32),
        rng: &mut R,
        dt: f32,
        events: &mut Vec<GameEvent>,
    );
}

/// Constant-speed movement that turns around at the track edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundedBounce {
    /// +1.0 (right) or -1.0 (left)
    pub direction: f32,
    pub speed: f32,
    /// Seconds until the next re-roll
    pub timer: f32,
    speed_range: (f32, f32),
    turn_range: (f32, f32),
}

impl BoundedBounce {
    pub fn new<R: Rng>(settings: &Settings, rng: &mut R) -> Self {
        let mut motion = Self {
            direction: 1.0,
            speed: settings.fish_speed_min,
            timer: 0.0,
            speed_range: (settings.fish_speed_min, settings.fish_speed_max),
            turn_range: (settings.fish_turn_min, settings.fish_turn_max),
        };
        motion.reroll(rng);
        motion
    }

    /// Pick a fresh direction, speed and timer
    pub fn reroll<R: Rng>(&mut self, rng: &mut R) {
        self.speed = rng.random_range(self.speed_range.0..=self.speed_range.1);
        self.direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.timer = rng.random_range(self.turn_range.0..=self.turn_range.1);
    }
}

impl FishMotion for BoundedBounce {
    fn step<R: Rng>(
        &mut self,
        fish: &mut FishMarker,
        bounds: (f32, f32),
        rng: &mut R,
        dt: f32,
        events: &mut Vec<GameEvent>,
    ) {
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.reroll(rng);
            events.push(GameEvent::FishRerolled {
                direction: self.direction,
                speed: self.speed,
            });
        }

        let (min_x, max_x) = bounds;
        fish.x += self.direction * self.speed * dt;

        // Only turn when heading into the wall, so one contact = one flip
        if fish.x <= min_x {
            fish.x = min_x;
            if self.direction < 0.0 {
                self.direction = 1.0;
                events.push(GameEvent::FishTurned { edge: Edge::Left });
            }
        } else if fish.x >= max_x {
            fish.x = max_x;
            if self.direction > 0.0 {
                self.direction = -1.0;
                events.push(GameEvent::FishTurned { edge: Edge::Right });
            }
        }

        fish.velocity = self.direction * self.speed;
    }
}

/// Jittery movement driven by random velocity impulses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DampedWalk {
    /// Largest impulse added to the velocity in one frame (px/s)
    pub amplitude: f32,
    /// Velocity multiplier applied every frame
    pub damping: f32,
}

impl DampedWalk {
    pub fn new(fish: &Fish) -> Self {
        Self {
            amplitude: fish.movement_amplitude(),
            damping: fish.damping(),
        }
    }
}

impl FishMotion for DampedWalk {
    fn step<R: Rng>(
        &mut self,
        fish: &mut FishMarker,
        bounds: (f32, f32),
        rng: &mut R,
        dt: f32,
        _events: &mut Vec<GameEvent>,
    ) {
        let impulse = rng.random_range(-self.amplitude..=self.amplitude);
        fish.velocity = (fish.velocity + impulse) * self.damping;
        // Clamp position only; the velocity keeps pushing until damped out
        fish.x = clamp(fish.x + fish.velocity * dt, bounds.0, bounds.1);
    }
}

/// The strategy selected for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    Bounce(BoundedBounce),
    Walk(DampedWalk),
}

impl Motion {
    pub fn new<R: Rng>(kind: MotionKind, fish: &Fish, settings: &Settings, rng: &mut R) -> Self {
        match kind {
            MotionKind::Bounce => Motion::Bounce(BoundedBounce::new(settings, rng)),
            MotionKind::DampedWalk => Motion::Walk(DampedWalk::new(fish)),
        }
    }

    pub fn kind(&self) -> MotionKind {
        match self {
            Motion::Bounce(_) => MotionKind::Bounce,
            Motion::Walk(_) => MotionKind::DampedWalk,
        }
    }
}

impl FishMotion for Motion {
    fn step<R: Rng>(
        &mut self,
        fish: &mut FishMarker,
        bounds: (f32, f32),
        rng: &mut R,
        dt: f32,
        events: &mut Vec<GameEvent>,
    ) {
        match self {
            Motion::Bounce(m) => m.step(fish, bounds, rng, dt, events),
            Motion::Walk(m) => m.step(fish, bounds, rng, dt, events),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BOUNDS: (f32, f32) = (100.0, 664.0);

    fn marker(x: f32) -> FishMarker {
        FishMarker {
            x,
            velocity: 0.0,
            width: 36.0,
            height: 20.0,
        }
    }

    fn bounce(direction: f32, speed: f32, timer: f32) -> BoundedBounce {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut m = BoundedBounce::new(&Settings::default(), &mut rng);
        m.direction = direction;
        m.speed = speed;
        m.timer = timer;
        m
    }

    #[test]
    fn test_motion_kind_names() {
        assert_eq!(MotionKind::Bounce.as_str(), "Bounce");
        assert_eq!(MotionKind::DampedWalk.as_str(), "DampedWalk");
    }

    #[test]
    fn test_reroll_stays_in_ranges() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut m = BoundedBounce::new(&settings, &mut rng);
        for _ in 0..200 {
            m.reroll(&mut rng);
            assert!(m.speed >= settings.fish_speed_min && m.speed <= settings.fish_speed_max);
            assert!(m.timer >= settings.fish_turn_min && m.timer <= settings.fish_turn_max);
            assert!(m.direction == 1.0 || m.direction == -1.0);
        }
    }

    #[test]
    fn test_bounce_turns_once_at_right_edge() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut m = bounce(1.0, 100.0, 10.0);
        let mut fish = marker(660.0);
        let mut events = Vec::new();

        m.step(&mut fish, BOUNDS, &mut rng, 0.1, &mut events);
        assert_eq!(fish.x, BOUNDS.1);
        assert_eq!(m.direction, -1.0);
        assert_eq!(events, vec![GameEvent::FishTurned { edge: Edge::Right }]);

        // Next frame moves away from the wall without another flip
        events.clear();
        m.step(&mut fish, BOUNDS, &mut rng, 0.1, &mut events);
        assert!(fish.x < BOUNDS.1);
        assert_eq!(m.direction, -1.0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_bounce_turns_at_left_edge() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut m = bounce(-1.0, 150.0, 10.0);
        let mut fish = marker(105.0);
        let mut events = Vec::new();

        m.step(&mut fish, BOUNDS, &mut rng, 0.1, &mut events);
        assert_eq!(fish.x, BOUNDS.0);
        assert_eq!(m.direction, 1.0);
        assert_eq!(fish.velocity, 150.0);
    }

    #[test]
    fn test_bounce_zero_dt_at_edge_does_not_flip_twice() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut m = bounce(1.0, 100.0, 10.0);
        let mut fish = marker(BOUNDS.1 + 5.0);
        let mut events = Vec::new();

        m.step(&mut fish, BOUNDS, &mut rng, 0.0, &mut events);
        m.step(&mut fish, BOUNDS, &mut rng, 0.0, &mut events);
        assert_eq!(events.len(), 1);
        assert_eq!(m.direction, -1.0);
    }

    #[test]
    fn test_bounce_timer_rerolls() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut m = bounce(1.0, 100.0, 0.05);
        let mut fish = marker(300.0);
        let mut events = Vec::new();

        m.step(&mut fish, BOUNDS, &mut rng, 0.1, &mut events);
        assert!(matches!(events[0], GameEvent::FishRerolled { .. }));
        assert!(m.timer >= 0.4);
    }

    #[test]
    fn test_walk_uses_fish_parameters() {
        let fish = Fish::new("Rock", 1.0, 0.0, Default::default());
        let walk = DampedWalk::new(&fish);
        assert_eq!(walk.amplitude, 10.0);
        assert!((walk.damping - 0.865).abs() < 1e-6);
    }

    #[test]
    fn test_walk_clamp_keeps_velocity() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut walk = DampedWalk {
            amplitude: 10.0,
            damping: 0.9,
        };
        let mut fish = marker(BOUNDS.1);
        fish.velocity = 5000.0;
        let mut events = Vec::new();

        walk.step(&mut fish, BOUNDS, &mut rng, 1.0 / 60.0, &mut events);
        assert_eq!(fish.x, BOUNDS.1);
        assert!(fish.velocity > 4000.0);
    }

    #[test]
    fn test_motion_dispatch_reports_kind() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let fish = Fish::default();
        assert_eq!(
            Motion::new(MotionKind::Bounce, &fish, &settings, &mut rng).kind(),
            MotionKind::Bounce
        );
        assert_eq!(
            Motion::new(MotionKind::DampedWalk, &fish, &settings, &mut rng).kind(),
            MotionKind::DampedWalk
        );
    }

    proptest! {
        #[test]
        fn prop_bounce_stays_on_track(
            seed in any::<u64>(),
            start in 100.0f32..664.0,
            dts in prop::collection::vec(0.0f32..0.5, 1..200),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut m = BoundedBounce::new(&Settings::default(), &mut rng);
            let mut fish = marker(start);
            let mut events = Vec::new();
            for dt in dts {
                m.step(&mut fish, BOUNDS, &mut rng, dt, &mut events);
                prop_assert!(fish.x >= BOUNDS.0 && fish.x <= BOUNDS.1);
            }
        }

        #[test]
        fn prop_walk_stays_on_track(
            seed in any::<u64>(),
            resilience in 0.0f32..=1.0,
            dts in prop::collection::vec(0.0f32..2.0, 1..200),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let fish = Fish::new("Any", resilience, 0.0, Default::default());
            let mut walk = DampedWalk::new(&fish);
            let mut fish = marker(382.0);
            let mut events = Vec::new();
            for dt in dts {
                walk.step(&mut fish, BOUNDS, &mut rng, dt, &mut events);
                prop_assert!(fish.x >= BOUNDS.0 && fish.x <= BOUNDS.1);
            }
        }
    }
}
