//! Per-frame simulation step and pipe spawning
//!
//! One `tick` runs per repaint callback. Within a tick the order is fixed:
//! flap input, gravity integration, collision, scoring, pipe advance.
//! Collision is evaluated before scoring so a lethal frame can never award
//! a pass for a pipe the bird did not survive.

use rand::Rng;

use crate::Tuning;
use crate::bird_left;
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};

use super::collision::bird_collides;
use super::state::{GameState, Pipe};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap requested since the previous tick
    pub flap: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Pipes passed this tick
    pub scored: u32,
    /// The run ended this tick
    pub collided: bool,
}

/// Advance the run by one frame
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) -> TickReport {
    let mut report = TickReport::default();
    if !state.active {
        return report;
    }

    // A flap replaces the velocity outright; rapid repeats don't stack.
    if input.flap {
        state.bird.velocity = tuning.flap_impulse;
    }
    state.bird.velocity += tuning.gravity;
    state.bird.y += state.bird.velocity;

    if bird_collides(&state.bird, &state.pipes, WORLD_HEIGHT) {
        state.active = false;
        report.collided = true;
        return report;
    }

    for pipe in &mut state.pipes {
        if !pipe.scored && pipe.right() < bird_left() {
            pipe.scored = true;
            state.score += 1;
            report.scored += 1;
        }
    }

    for pipe in &mut state.pipes {
        pipe.x -= tuning.pipe_speed;
    }
    state.pipes.retain(|pipe| pipe.right() >= 0.0);

    report
}

/// Append a new pipe at the world's right edge with a randomized top height.
///
/// Called from the wall-clock spawn timer, independent of the frame tick.
/// The timer may fire once more after the run has ended but before the
/// interval is cleared, so the `active` flag is the gate, not the timer.
pub fn spawn_pipe(state: &mut GameState, tuning: &Tuning) {
    if !state.active {
        return;
    }
    let top_height = tuning.pipe_min_top + state.rng.random::<f32>() * tuning.pipe_top_range;
    state.pipes.push(Pipe {
        x: WORLD_WIDTH,
        top_height,
        bottom_height: WORLD_HEIGHT - top_height - tuning.pipe_gap,
        scored: false,
    });
}
