//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time advances only by the delta the caller hands in
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod frame;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod view;

pub use frame::{Edge, Frame, Overlay, RockSprite};
pub use state::{GamePhase, GameState, Projectile, Rock, Viewport};
pub use tick::{TickInput, tick};
pub use view::{ViewState, view_point, view_pos};
