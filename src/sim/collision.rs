//! Collision detection
//!
//! Pure predicates over the bird's axis-aligned hitbox. Overlap tests are
//! strict: an exactly touching edge does not collide. Changing that would
//! change the game's difficulty, so the inequalities below are load-bearing.

use crate::{bird_left, bird_right};

use super::state::{Bird, Pipe};

/// True if the bird's hitbox leaves the world vertically or intrudes into
/// the solid part of any horizontally overlapping pipe.
pub fn bird_collides(bird: &Bird, pipes: &[Pipe], world_height: f32) -> bool {
    if bird.bottom() > world_height || bird.top() < 0.0 {
        return true;
    }
    pipes.iter().any(|pipe| hits_pipe(bird, pipe))
}

/// Pipe test: the hitbox must horizontally overlap the pipe span and be
/// outside the gap on either side.
fn hits_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    let overlapping = bird_right() > pipe.x && bird_left() < pipe.right();
    if !overlapping {
        return false;
    }
    bird.top() < pipe.gap_top() || bird.bottom() > pipe.gap_bottom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::WORLD_HEIGHT;

    fn pipe_at(x: f32, top_height: f32, bottom_height: f32) -> Pipe {
        Pipe {
            x,
            top_height,
            bottom_height,
            scored: false,
        }
    }

    #[test]
    fn test_safe_inside_gap() {
        // World 600, gap 300, top 50 => gap spans [50, 350]; bird at 300
        // overlaps the pipe horizontally but sits fully inside the gap.
        let bird = Bird {
            y: 300.0,
            velocity: 0.0,
        };
        let pipes = [pipe_at(90.0, 50.0, 250.0)];
        assert!(!bird_collides(&bird, &pipes, WORLD_HEIGHT));
    }

    #[test]
    fn test_hits_top_segment() {
        let bird = Bird {
            y: 60.0,
            velocity: 0.0,
        };
        // bird.top() = 40 < 50
        let pipes = [pipe_at(90.0, 50.0, 250.0)];
        assert!(bird_collides(&bird, &pipes, WORLD_HEIGHT));
    }

    #[test]
    fn test_hits_bottom_segment() {
        let bird = Bird {
            y: 340.0,
            velocity: 0.0,
        };
        // bird.bottom() = 360 > 350
        let pipes = [pipe_at(90.0, 50.0, 250.0)];
        assert!(bird_collides(&bird, &pipes, WORLD_HEIGHT));
    }

    #[test]
    fn test_boundary_touch_is_not_overlap() {
        // Pipe left edge exactly at the bird's right edge (120): strict
        // comparison means no horizontal overlap yet.
        let bird = Bird {
            y: 60.0,
            velocity: 0.0,
        };
        let pipes = [pipe_at(120.0, 50.0, 250.0)];
        assert!(!bird_collides(&bird, &pipes, WORLD_HEIGHT));

        // One half-pixel further left and the overlap is real.
        let pipes = [pipe_at(119.5, 50.0, 250.0)];
        assert!(bird_collides(&bird, &pipes, WORLD_HEIGHT));
    }

    #[test]
    fn test_world_bounds() {
        let high = Bird {
            y: 19.0,
            velocity: 0.0,
        };
        assert!(bird_collides(&high, &[], WORLD_HEIGHT));

        let low = Bird {
            y: 581.0,
            velocity: 0.0,
        };
        assert!(bird_collides(&low, &[], WORLD_HEIGHT));

        // Exactly touching either bound is still safe.
        let top_touch = Bird {
            y: 20.0,
            velocity: 0.0,
        };
        let bottom_touch = Bird {
            y: 580.0,
            velocity: 0.0,
        };
        assert!(!bird_collides(&top_touch, &[], WORLD_HEIGHT));
        assert!(!bird_collides(&bottom_touch, &[], WORLD_HEIGHT));
    }

    #[test]
    fn test_gap_pass_does_not_depend_on_far_pipes() {
        let bird = Bird {
            y: 300.0,
            velocity: 0.0,
        };
        // A second pipe far to the right must not affect the result.
        let pipes = [pipe_at(90.0, 50.0, 250.0), pipe_at(390.0, 340.0, -40.0)];
        assert!(!bird_collides(&bird, &pipes, WORLD_HEIGHT));
    }
}
