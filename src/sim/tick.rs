//! Per-tick simulation update
//!
//! One call advances everything by the wall-clock delta the driver hands in.
//! A zero delta freezes motion, steering, and target growth, but the rock
//! field still tops up to its (unchanged) target.

use glam::Vec2;

use super::collision::{rock_hits_projectile, rock_hits_ship, rock_past_bottom};
use super::spawn;
use super::state::{GamePhase, GameState, Projectile};
use super::view::view_pos;
use crate::consts::*;

/// Input for a single tick. At most one shot materializes per tick; the
/// reload gate lives upstream in the session driver.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Click position (simulation coordinates) to fire at this tick
    pub shoot: Option<Vec2>,
}

/// Advance the game state by one tick of `dt` milliseconds.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    // Population target grows with play time and viewport area
    state.rock_target += state.viewport.rock_target_growth(dt);
    spawn::generate_rocks(state);

    // Materialize the pending shot; its horizontal direction recoils the view
    if let Some(target) = input.shoot {
        let projectile = Projectile::aim(state.viewport.ship_pos(), target);
        state.view.steer(projectile.dir.x, dt);
        state.projectiles.push(projectile);
    }

    state.view.integrate(dt);

    // Rock pass: fade the goodbye ones, ship-test the live ones against
    // their pre-movement view position, then let each one fall. The first
    // rock to reach the ship ends the scan; the rest of the tick still runs.
    let ship = state.viewport.ship_pos();
    for rock in &mut state.rocks {
        let at = view_pos(rock.pos, state.view.rotation);

        if rock.goodbye {
            rock.fade(dt);
        } else if rock_hits_ship(at, rock.size, ship) {
            state.phase = GamePhase::GameOver;
            log::info!("rock struck the ship at ({:.0}, {:.0})", at.x, at.y);
            break;
        }

        rock.pos.y += ROCK_FALL_SPEED * dt;
    }

    // Projectile pass: move, then sweep the live rocks. No break on a hit:
    // one shot may take out several overlapping rocks in the same tick. The
    // spent flag marks it for the compaction below.
    for projectile in &mut state.projectiles {
        if projectile.spent {
            continue;
        }

        projectile.advance(dt);

        for rock in &mut state.rocks {
            if rock.goodbye {
                continue;
            }

            let at = view_pos(rock.pos, state.view.rotation);
            if rock_hits_projectile(at, rock.size, projectile.pos) {
                rock.goodbye = true;
                projectile.spent = true;
            }
        }
    }

    // Compaction: faded rocks, rocks fully past the bottom edge, and spent
    // projectiles drop out here, never mid-scan.
    let rotation = state.view.rotation;
    let height = state.viewport.height;
    state
        .rocks
        .retain(|r| !r.is_faded() && !rock_past_bottom(view_pos(r.pos, rotation).y, r.size, height));
    state.projectiles.retain(|p| !p.spent);
}
