//! Read-only render snapshot
//!
//! Rendering runs on its own cadence and never mutates the sim. A `Frame`
//! carries everything one drawing pass needs, with outlines already mapped
//! through the view rotation, so hits land where things are drawn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState, Rock};
use super::view::view_point;
use crate::consts::*;

/// Overlay the drawing pass should put on top of the playfield
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    /// Pre-start help text ("Steer by shooting." / "Shoot to start (click).")
    Intro,
    /// Nothing over the playfield
    None,
    /// Session summary ("Click to play again...") with the elapsed time
    GameOver { elapsed: String },
}

/// Which screen edge to flag as the rotation nears its bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
}

/// One rock ready to draw
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RockSprite {
    /// Outline polygon in view space
    pub outline: Vec<Vec2>,
    /// Stroke opacity, fading once the rock is goodbye
    pub opacity: f32,
}

/// Everything a drawing pass needs, captured after the tick completes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    /// Current view rotation in radians, for background effects
    pub rotation: f32,
    /// Ship triangle in view space, nose first
    pub ship: [Vec2; 3],
    /// Rock outlines in draw order
    pub rocks: Vec<RockSprite>,
    /// Projectile centers; each draws as a disc of `PROJECTILE_RADIUS`
    pub projectiles: Vec<Vec2>,
    /// Overlay to show, if any
    pub overlay: Overlay,
    /// Edge to flag, if the rotation is close to its bound
    pub edge_warning: Option<Edge>,
}

impl Frame {
    /// Snapshot the state for a drawing pass. `elapsed` is the formatted
    /// session time, shown only on the game-over overlay.
    pub fn capture(state: &GameState, elapsed: String) -> Self {
        let rotation = state.view.rotation;

        let rocks = state
            .rocks
            .iter()
            .map(|rock| RockSprite {
                outline: rock_outline(rock, rotation),
                opacity: rock.opacity,
            })
            .collect();

        let overlay = match state.phase {
            GamePhase::Idle => Overlay::Intro,
            GamePhase::Playing => Overlay::None,
            GamePhase::GameOver => Overlay::GameOver { elapsed },
        };

        Self {
            rotation,
            ship: ship_outline(state.viewport.ship_pos(), rotation),
            rocks,
            projectiles: state.projectiles.iter().map(|p| p.pos).collect(),
            overlay,
            edge_warning: edge_warning(rotation),
        }
    }

    /// JSON rendition for out-of-process consumers
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Sample a rock's outline polygon in view space. The angular step is the
/// rock's `shape`: a lower step gives more vertices and a rounder rock.
pub fn rock_outline(rock: &Rock, rotation: f32) -> Vec<Vec2> {
    let mut points = Vec::new();
    let mut i = 0.0f32;
    while i < std::f32::consts::TAU {
        let offset = Vec2::new(i.sin(), i.cos()) * rock.size;
        points.push(view_point(rock.pos, offset, rotation));
        i += rock.shape;
    }
    points
}

/// The ship triangle in view space. The ship tilts by only a damped
/// fraction of the view rotation, which reads as parallax against the
/// swinging rock field.
pub fn ship_outline(ship: Vec2, rotation: f32) -> [Vec2; 3] {
    let tilt = rotation * SHIP_TILT_FACTOR;
    [
        view_point(ship, Vec2::ZERO, tilt),
        view_point(ship, Vec2::new(-20.0, 30.0), tilt),
        view_point(ship, Vec2::new(20.0, 30.0), tilt),
    ]
}

fn edge_warning(rotation: f32) -> Option<Edge> {
    if rotation > EDGE_WARN_FRAC * MAX_VIEW_ROTATION {
        Some(Edge::Right)
    } else if rotation < -EDGE_WARN_FRAC * MAX_VIEW_ROTATION {
        Some(Edge::Left)
    } else {
        None
    }
}
