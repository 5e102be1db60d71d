//! Game state and core simulation types
//!
//! Everything a single run owns lives here. A run is discarded and rebuilt
//! on restart; nothing is reused across runs.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// The controllable actor. Fixed horizontal position, fixed hitbox size;
/// only the vertical position and velocity change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Vertical center of the hitbox
    pub y: f32,
    /// Vertical velocity, positive is downward
    pub velocity: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            y: BIRD_START_Y,
            velocity: 0.0,
        }
    }
}

impl Bird {
    /// Top edge of the hitbox
    #[inline]
    pub fn top(&self) -> f32 {
        self.y - BIRD_HALF_SIZE
    }

    /// Bottom edge of the hitbox
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + BIRD_HALF_SIZE
    }
}

/// A pipe pair: a top segment `[0, top_height]` and a bottom segment
/// `[WORLD_HEIGHT - bottom_height, WORLD_HEIGHT]`, both PIPE_WIDTH wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Left edge; starts at the world's right edge and decreases each tick
    pub x: f32,
    pub top_height: f32,
    pub bottom_height: f32,
    /// Set once when the bird clears the pipe's right edge
    pub scored: bool,
}

impl Pipe {
    /// Right edge of the pipe
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// Top edge of the gap
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.top_height
    }

    /// Bottom edge of the gap
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        WORLD_HEIGHT - self.bottom_height
    }
}

/// Complete state of one run. Owns the bird, the pipe field and the score.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub bird: Bird,
    /// Pipes ordered oldest (leftmost) first
    pub pipes: Vec<Pipe>,
    pub score: u32,
    /// Cleared on collision. Spawn callbacks check this flag because the
    /// spawn timer may fire once more between collision and cancellation.
    pub active: bool,
    /// Pipe height RNG, seeded per run
    pub rng: Pcg32,
}

impl GameState {
    /// Create a fresh run with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            bird: Bird::default(),
            pipes: Vec::new(),
            score: 0,
            active: true,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state = GameState::new(7);
        assert_eq!(state.bird, Bird::default());
        assert!(state.pipes.is_empty());
        assert_eq!(state.score, 0);
        assert!(state.active);
    }

    #[test]
    fn test_bird_extents() {
        let bird = Bird {
            y: 300.0,
            velocity: 0.0,
        };
        assert_eq!(bird.top(), 280.0);
        assert_eq!(bird.bottom(), 320.0);
    }

    #[test]
    fn test_pipe_gap_edges() {
        let pipe = Pipe {
            x: 200.0,
            top_height: 50.0,
            bottom_height: 250.0,
            scored: false,
        };
        assert_eq!(pipe.right(), 260.0);
        assert_eq!(pipe.gap_top(), 50.0);
        assert_eq!(pipe.gap_bottom(), 350.0);
    }
}
