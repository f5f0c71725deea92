//! Rocks - a falling-rocks arcade game where shooting steers the camera
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, steering, collisions, lifecycle)
//! - `session`: Wall-clock tick driver, pointer input gateway, reset lifecycle
//!
//! Rendering and event plumbing live outside the crate; `sim::frame` exposes
//! the read-only snapshot a renderer consumes.

pub mod session;
pub mod sim;

pub use session::Session;
pub use sim::frame::Frame;
pub use sim::state::{GamePhase, GameState, Viewport};

use glam::Vec2;

/// Game configuration constants. Speeds are per millisecond: the sim was
/// tuned at a 20 ms tick and its deltas stay in wall-clock ms.
pub mod consts {
    /// Recommended fixed tick interval (50 Hz)
    pub const TICK_INTERVAL_MS: f32 = 20.0;

    /// Simulation viewport height; width follows the display aspect
    pub const GAME_HEIGHT: f32 = 700.0;
    /// Ship sits this far above the bottom edge, horizontally centered
    pub const SHIP_BOTTOM_MARGIN: f32 = 70.0;

    /// Rock fall speed (px/ms, world space)
    pub const ROCK_FALL_SPEED: f32 = 0.08;
    /// Projectile speed (px/ms)
    pub const PROJECTILE_SPEED: f32 = 0.16;

    /// Camera rotation hard bound (radians)
    pub const MAX_VIEW_ROTATION: f32 = 0.25;
    /// Camera rotation speed cap (radians/ms)
    pub const MAX_VIEW_ROTATE_SPEED: f32 = 0.001;
    /// Recoil on rotation speed per unit of horizontal shot direction per ms
    pub const STEER_IMPULSE: f32 = 1.0 / 100_000.0;
    /// Rebound speed band after hitting the rotation bound (fractions of the speed cap)
    pub const BOUNCE_MIN_FRAC: f32 = 0.11;
    pub const BOUNCE_MAX_FRAC: f32 = 0.33;

    /// Weapon cooldown between shots (wall-clock ms)
    pub const RELOAD_MS: f64 = 500.0;

    /// Rock size range: ROCK_MIN_SIZE + rand * ROCK_SIZE_SPREAD
    pub const ROCK_MIN_SIZE: f32 = 11.0;
    pub const ROCK_SIZE_SPREAD: f32 = 17.0;
    /// Outline angular step range: ROCK_SHAPE_MIN + rand * ROCK_SHAPE_SPREAD
    pub const ROCK_SHAPE_MIN: f32 = 1.0;
    pub const ROCK_SHAPE_SPREAD: f32 = 0.35;
    /// Horizontal spawn band width as a multiple of viewport width
    pub const SPAWN_BAND_FACTOR: f32 = 2.8;
    /// Initial rock target = viewport area / this
    pub const ROCK_DENSITY_DIVISOR: f32 = 20_000.0;
    /// Rock target growth per ms = viewport area / this
    pub const ROCK_GROWTH_DIVISOR: f32 = 100_000_000.0;

    /// Goodbye shrink: size loses size * dt / SHRINK_DIVISOR per tick
    pub const SHRINK_DIVISOR: f32 = 100.0;
    /// Goodbye fade: opacity loses dt / FADE_DIVISOR per tick
    pub const FADE_DIVISOR: f32 = 200.0;
    /// Rocks faded below this opacity are removed
    pub const FADE_FLOOR: f32 = 0.1;

    /// Ship hit box half extents, each padded by size / HIT_SIZE_FACTOR
    pub const SHIP_HIT_HALF_WIDTH: f32 = 20.0;
    pub const SHIP_HIT_HALF_HEIGHT: f32 = 10.0;
    pub const HIT_SIZE_FACTOR: f32 = 4.0;
    /// Rocks below height + PRUNE_SIZE_FACTOR * size (view space) are dropped
    pub const PRUNE_SIZE_FACTOR: f32 = 4.0;

    /// Radius a renderer draws projectiles at
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    /// Ship outline tilts by rotation * SHIP_TILT_FACTOR
    pub const SHIP_TILT_FACTOR: f32 = 0.04;
    /// Edge warning shows past this fraction of MAX_VIEW_ROTATION
    pub const EDGE_WARN_FRAC: f32 = 0.9;
}

/// Rotate a point about the origin by `angle` radians.
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
