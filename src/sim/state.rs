//! Game state and core simulation types
//!
//! Everything needed to reproduce a session lives here; the whole struct
//! round-trips through serde, RNG included.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn;
use super::view::ViewState;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first shot: the world is drawn but time stands still
    Idle,
    /// Active gameplay
    Playing,
    /// A rock reached the ship
    GameOver,
}

/// Simulation viewport in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Fit the fixed-height game viewport to a display. Returns the viewport
    /// and the display scaling factor; divide display-space pointer
    /// coordinates by the factor to land in simulation coordinates.
    pub fn from_display(display_w: f32, display_h: f32) -> (Self, f32) {
        let height = GAME_HEIGHT;
        let width = height * display_w / display_h;
        let scale = (display_h / height).min(display_w / width);
        (Self { width, height }, scale)
    }

    /// Map a display-space point into simulation coordinates
    pub fn to_sim(point: Vec2, scale: f32) -> Vec2 {
        point / scale
    }

    /// Where the ship sits. It never moves; only the view rotates around it.
    pub fn ship_pos(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height - SHIP_BOTTOM_MARGIN)
    }

    /// Rock population target at session start
    pub fn initial_rock_target(&self) -> f32 {
        self.width * self.height / ROCK_DENSITY_DIVISOR
    }

    /// Rock population target growth over `dt` ms
    pub fn rock_target_growth(&self, dt: f32) -> f32 {
        self.width * self.height / ROCK_GROWTH_DIVISOR * dt
    }
}

/// A falling rock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rock {
    /// World-space position; the view rotation is applied on every read
    pub pos: Vec2,
    /// Spin phase reserved for the outline; current logic never reads it
    pub angle: f32,
    /// Half extent of the hit square, and the outline radius
    pub size: f32,
    /// Angular step of the outline polygon; lower is rounder
    pub shape: f32,
    /// Set when shot: the rock fades out instead of colliding
    pub goodbye: bool,
    /// Render opacity, 1 down to 0 once goodbye
    pub opacity: f32,
}

impl Rock {
    /// Advance the fade-out: shrink and lose opacity
    pub fn fade(&mut self, dt: f32) {
        self.size -= self.size * dt / SHRINK_DIVISOR;
        self.opacity = (self.opacity - dt / FADE_DIVISOR).max(0.0);
    }

    /// Faded far enough to leave the active set
    pub fn is_faded(&self) -> bool {
        self.goodbye && self.opacity < FADE_FLOOR
    }
}

/// A shot in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Ship position at fire time
    pub from: Vec2,
    /// Click position at fire time
    pub to: Vec2,
    /// Current position (view rotation is never applied to projectiles)
    pub pos: Vec2,
    /// Normalized firing direction, fixed at fire time
    pub dir: Vec2,
    /// Set on a hit; compacted away at end of tick
    pub spent: bool,
}

impl Projectile {
    /// Aim from the ship toward a click point. The direction is computed
    /// once and never changes; its vertical component is taken absolute, so
    /// shots always travel upward (a click below the ship still fires up).
    pub fn aim(from: Vec2, to: Vec2) -> Self {
        let dir = Vec2::new(to.x - from.x, (to.y - from.y).abs()).normalize_or(Vec2::Y);
        Self {
            from,
            to,
            pos: from,
            dir,
            spent: false,
        }
    }

    /// Step along the firing direction; the vertical step always moves up
    pub fn advance(&mut self, dt: f32) {
        self.pos.x += self.dir.x * PROJECTILE_SPEED * dt;
        self.pos.y -= self.dir.y * PROJECTILE_SPEED * dt;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Simulation viewport
    pub viewport: Viewport,
    /// Current phase
    pub phase: GamePhase,
    /// Camera rotation state
    pub view: ViewState,
    /// Falling rocks; insertion order is the collision scan order
    pub rocks: Vec<Rock>,
    /// Shots in flight
    pub projectiles: Vec<Projectile>,
    /// Rock population target; fractional, grows with play time
    pub rock_target: f32,
    /// Session RNG; serialized so a saved state replays identically
    pub rng: Pcg32,
}

impl GameState {
    /// Create a fresh session state with the given seed. Seeds the intro
    /// title formation, which starts out over the population target; the
    /// ambient spawner takes over once rocks fall away.
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        let mut state = Self {
            seed,
            viewport,
            phase: GamePhase::Idle,
            view: ViewState::default(),
            rocks: Vec::new(),
            projectiles: Vec::new(),
            rock_target: viewport.initial_rock_target(),
            rng: Pcg32::seed_from_u64(seed),
        };

        spawn::intro_rocks(&mut state);

        state
    }

    /// Rocks still participating in collisions (not fading out)
    pub fn live_rocks(&self) -> usize {
        self.rocks.iter().filter(|r| !r.goodbye).count()
    }
}
