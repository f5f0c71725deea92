//! Collision predicates
//!
//! All tests run in view space: rock positions go through the view rotation
//! first (see `view::view_pos`); ship and projectile positions are compared
//! as stored. Every bound is a strict inequality.

use glam::Vec2;

use crate::consts::*;

/// Rock vs ship: a fixed box around the ship, padded by a quarter of the
/// rock size on each side.
pub fn rock_hits_ship(rock_view: Vec2, size: f32, ship: Vec2) -> bool {
    (rock_view.x - ship.x).abs() < SHIP_HIT_HALF_WIDTH + size / HIT_SIZE_FACTOR
        && (rock_view.y - ship.y).abs() < SHIP_HIT_HALF_HEIGHT + size / HIT_SIZE_FACTOR
}

/// Rock vs projectile: square overlap with the rock size as both half extents
pub fn rock_hits_projectile(rock_view: Vec2, size: f32, projectile: Vec2) -> bool {
    (rock_view.x - projectile.x).abs() < size && (rock_view.y - projectile.y).abs() < size
}

/// Rock drifted fully past the bottom edge; a compaction bound, not a hit
pub fn rock_past_bottom(rock_view_y: f32, size: f32, height: f32) -> bool {
    rock_view_y >= height + size * PRUNE_SIZE_FACTOR
}
