//! Rock spawning: the ambient drip feed and the one-time title formation

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Rock};
use crate::consts::*;

/// Top the rock population up to the current target. The target is
/// fractional, so a partial deficit still yields a whole rock; the field
/// never sits under target for more than a tick.
pub fn generate_rocks(state: &mut GameState) {
    let deficit = state.rock_target - state.rocks.len() as f32;
    if deficit <= 0.0 {
        return;
    }

    let count = deficit.ceil() as usize;
    let (w, h) = (state.viewport.width, state.viewport.height);
    let half_band = w * SPAWN_BAND_FACTOR / 2.0;

    for _ in 0..count {
        let size = state.rng.random_range(ROCK_MIN_SIZE..ROCK_MIN_SIZE + ROCK_SIZE_SPREAD);
        // Centered band wider than the viewport: off-screen spawns keep the
        // edges populated when the view swings.
        let x = state.rng.random_range(-half_band..half_band);
        // Strictly above the viewport, staggered so rocks enter gradually.
        let y = -(size * 4.0 + state.rng.random_range(0.0..h)) - h / 2.0;

        state.rocks.push(Rock {
            pos: Vec2::new(x, y),
            angle: state.rng.random_range(0.0..10.0),
            size,
            shape: state.rng.random_range(ROCK_SHAPE_MIN..ROCK_SHAPE_MIN + ROCK_SHAPE_SPREAD),
            goodbye: false,
            opacity: 1.0,
        });
    }
}

/// Title glyphs, one cell per byte. The grid gets one blank border row
/// above and below and one pad column on the right.
const TITLE_ROWS: [&str; 5] = [
    "**  *** ***   *  * ***",
    "* * * * *     * *  *",
    "**  * * *     **   ***",
    "* * * * *     * *    *",
    "* * *** ***   *  * ***",
];

/// Seed the title formation. Runs once per session reset; each non-blank
/// glyph cell becomes an ordinary rock that drifts and can be shot like
/// any other, so the title breaks apart once time starts.
pub fn intro_rocks(state: &mut GameState) {
    let rows = TITLE_ROWS.len() as f32 + 2.0;
    let cols = TITLE_ROWS.iter().fold(0, |m, r| m.max(r.len())) as f32 + 1.0;

    // The 2.2 packs the glyph grid into the upper part of the viewport
    let cell_h = state.viewport.height / rows / 2.2;
    let cell_w = state.viewport.width / cols;
    let cell = cell_w.min(cell_h);

    for (row, line) in TITLE_ROWS.iter().enumerate() {
        for (col, glyph) in line.bytes().enumerate() {
            if glyph == b' ' {
                continue;
            }

            state.rocks.push(Rock {
                pos: Vec2::new(cell + col as f32 * cell_w, cell + row as f32 * cell_h),
                angle: 10.0,
                size: cell / 2.2 + state.rng.random_range(0.0..cell / 10.0),
                shape: 1.0,
                goodbye: false,
                opacity: 1.0,
            });
        }
    }

    log::debug!("intro formation seeded: {} rocks", state.rocks.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Viewport;

    fn test_state() -> GameState {
        GameState::new(Viewport::new(1000.0, 700.0), 7)
    }

    #[test]
    fn test_intro_rocks_match_glyph_cells() {
        let state = test_state();
        let glyphs: usize = TITLE_ROWS
            .iter()
            .map(|r| r.bytes().filter(|&b| b != b' ').count())
            .sum();
        assert_eq!(state.rocks.len(), glyphs);
        assert!(state.rocks.iter().all(|r| !r.goodbye && r.opacity == 1.0));
    }

    #[test]
    fn test_intro_rocks_sit_inside_the_viewport() {
        let state = test_state();
        for rock in &state.rocks {
            assert!(rock.pos.x > 0.0 && rock.pos.x < state.viewport.width);
            assert!(rock.pos.y > 0.0 && rock.pos.y < state.viewport.height / 2.0);
        }
    }

    #[test]
    fn test_generate_rocks_fills_the_deficit() {
        // The intro formation alone can exceed the initial target, so force
        // a known deficit first.
        let mut state = test_state();
        state.rocks.clear();
        state.rock_target = 12.3;

        generate_rocks(&mut state);
        assert_eq!(state.rocks.len(), 13, "a fractional deficit rounds up");

        // At or above target, another pass adds nothing
        generate_rocks(&mut state);
        assert_eq!(state.rocks.len(), 13);
    }

    #[test]
    fn test_intro_formation_can_exceed_the_target() {
        let state = test_state();
        assert!(state.rocks.len() as f32 > state.rock_target);

        let mut state = state;
        let before = state.rocks.len();
        generate_rocks(&mut state);
        assert_eq!(state.rocks.len(), before);
    }

    #[test]
    fn test_generated_rocks_spawn_above_the_viewport() {
        let mut state = test_state();
        state.rocks.clear();
        state.rock_target = 40.0;
        generate_rocks(&mut state);
        assert_eq!(state.rocks.len(), 40);

        let half_band = state.viewport.width * SPAWN_BAND_FACTOR / 2.0;
        for rock in &state.rocks {
            assert!(rock.pos.y < -state.viewport.height / 2.0);
            assert!(rock.pos.x >= -half_band && rock.pos.x < half_band);
            assert!(rock.size >= ROCK_MIN_SIZE && rock.size < ROCK_MIN_SIZE + ROCK_SIZE_SPREAD);
            assert!(rock.shape >= ROCK_SHAPE_MIN && rock.shape < ROCK_SHAPE_MIN + ROCK_SHAPE_SPREAD);
        }
    }

    #[test]
    fn test_same_seed_spawns_identically() {
        let mut a = test_state();
        let mut b = test_state();
        for state in [&mut a, &mut b] {
            state.rocks.clear();
            state.rock_target = 25.0;
            generate_rocks(state);
        }

        assert_eq!(a.rocks.len(), b.rocks.len());
        for (ra, rb) in a.rocks.iter().zip(&b.rocks) {
            assert_eq!(ra.pos, rb.pos);
            assert_eq!(ra.size, rb.size);
            assert_eq!(ra.shape, rb.shape);
        }
    }
}
