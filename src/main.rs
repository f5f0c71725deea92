//! Headless autoplayer entry point
//!
//! Drives a session in real time the way a host shell would: a 20ms tick
//! loop against the wall clock, with scripted pointer presses aimed at
//! whichever live rock hangs lowest over the ship. Useful for watching the
//! log output and for exercising the simulation without a renderer.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use glam::Vec2;

use rocks::consts::TICK_INTERVAL_MS;
use rocks::sim::view_pos;
use rocks::{GameState, Session, Viewport};

/// Give up after two minutes if the autoplayer refuses to die.
const DEMO_LIMIT_MS: f64 = 120_000.0;

fn main() {
    env_logger::init();

    let (viewport, scale) = Viewport::from_display(1280.0, 800.0);
    log::info!(
        "rocks starting: {:.0}x{:.0} sim units at display scale {:.2}",
        viewport.width,
        viewport.height,
        scale
    );

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let start = Instant::now();
    let mut session = Session::new(viewport, seed, 0.0);
    let mut ticks: u64 = 0;

    loop {
        let now = start.elapsed().as_secs_f64() * 1000.0;
        session.on_tick(now);

        if session.is_over() {
            break;
        }
        if now > DEMO_LIMIT_MS {
            log::info!("demo limit reached, stopping");
            break;
        }

        if !session.is_reloading(now) {
            if let Some(target) = lowest_threat(session.state()) {
                session.pointer_down(target, now);
            }
        }

        ticks += 1;
        if ticks % 50 == 0 {
            let frame = session.frame(now);
            log::info!(
                "t={} rocks={} projectiles={} rotation={:+.3}",
                session.elapsed_label(now),
                frame.rocks.len(),
                frame.projectiles.len(),
                frame.rotation
            );
        }

        thread::sleep(Duration::from_millis(TICK_INTERVAL_MS as u64));
    }

    let now = start.elapsed().as_secs_f64() * 1000.0;
    println!(
        "survived {} over {} ticks, {} rocks on screen at the end",
        session.elapsed_label(now),
        ticks,
        session.state().rocks.len()
    );
}

/// Pick the live rock whose on-screen position hangs lowest above the ship.
/// Shots aim at view coordinates, the same space collisions run in.
fn lowest_threat(state: &GameState) -> Option<Vec2> {
    let ship_y = state.viewport.ship_pos().y;
    state
        .rocks
        .iter()
        .filter(|rock| !rock.goodbye)
        .map(|rock| view_pos(rock.pos, state.view.rotation))
        .filter(|view| view.y < ship_y)
        .max_by(|a, b| a.y.total_cmp(&b.y))
}
