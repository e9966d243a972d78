//! Seeded simulation module
//!
//! All gameplay logic lives here:
//! - Variable timestep, clamped by the caller
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod gear;
pub mod geometry;
pub mod motion;
pub mod state;
pub mod tick;

pub use gear::{
    Fish, Rod, bar_width, damping, fish_catalog, movement_amplitude, progress_rate, rod_catalog,
};
pub use geometry::Rect;
pub use motion::{BoundedBounce, DampedWalk, FishMotion, Motion, MotionKind};
pub use state::{
    Edge, Encounter, FishMarker, GameEvent, GamePhase, GameState, PlayerBar, ProgressMeter,
    TrackRegion,
};
pub use tick::{TickInput, tick};
