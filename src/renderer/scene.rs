//! Scene painter
//!
//! Draws one frame of the playfield: sky, bird sprite, pipes. The sprite is
//! procedural pixel art sized independently of the hitbox; pipes paint over
//! the bird, matching the playfield's layering.

use crate::consts::*;
use crate::sim::GameState;

use super::frame::{FrameBuffer, Rgb};

const SKY: Rgb = Rgb(0x70, 0xc5, 0xce);
const PIPE: Rgb = Rgb(0x4b, 0xae, 0x4e);
const BIRD_BODY: Rgb = Rgb(245, 200, 66);
const BIRD_WING: Rgb = Rgb(215, 165, 35);
const BIRD_EYE: Rgb = Rgb(255, 255, 255);
const BIRD_PUPIL: Rgb = Rgb(20, 20, 20);
const BIRD_BEAK: Rgb = Rgb(225, 75, 35);

/// Paint the full playfield for the current state
pub fn draw_frame(frame: &mut FrameBuffer, state: &GameState) {
    frame.clear(SKY);
    draw_bird(frame, state.bird.y);
    for pipe in &state.pipes {
        draw_pipe(frame, pipe.x, pipe.top_height, pipe.bottom_height);
    }
}

/// Two filled rectangles; a non-positive segment height draws nothing
fn draw_pipe(frame: &mut FrameBuffer, x: f32, top_height: f32, bottom_height: f32) {
    let x = x.round() as i32;
    let w = PIPE_WIDTH as i32;
    frame.fill_rect(x, 0, w, top_height.round() as i32, PIPE);
    frame.fill_rect(
        x,
        (WORLD_HEIGHT - bottom_height).round() as i32,
        w,
        bottom_height.round() as i32,
        PIPE,
    );
}

/// The bird sprite, centered on the hitbox center (BIRD_X, y)
fn draw_bird(frame: &mut FrameBuffer, y: f32) {
    let cx = BIRD_X as i32;
    let cy = y.round() as i32;
    let half = BIRD_SPRITE_SIZE / 2;
    let body_r = BIRD_SPRITE_SIZE * 2 / 5;

    fill_circle(frame, cx, cy, body_r, BIRD_BODY);
    fill_circle(frame, cx - 16, cy + 10, 15, BIRD_WING);
    fill_circle(frame, cx + 16, cy - 12, 10, BIRD_EYE);
    fill_circle(frame, cx + 19, cy - 12, 4, BIRD_PUPIL);
    // Beak pokes out to the sprite's right edge
    frame.fill_rect(cx + body_r - 10, cy - 2, half - body_r + 10, 10, BIRD_BEAK);
}

fn fill_circle(frame: &mut FrameBuffer, cx: i32, cy: i32, r: i32, c: Rgb) {
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                frame.set(cx + dx, cy + dy, c);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Pipe;

    fn world_frame() -> FrameBuffer {
        FrameBuffer::new(WORLD_WIDTH as u32, WORLD_HEIGHT as u32)
    }

    #[test]
    fn test_empty_scene_is_sky_and_bird() {
        let state = GameState::new(1);
        let mut frame = world_frame();
        draw_frame(&mut frame, &state);

        assert_eq!(frame.get(5, 5), SKY);
        // Hitbox center sits inside the body.
        assert_eq!(frame.get(BIRD_X as u32, BIRD_START_Y as u32), BIRD_BODY);
    }

    #[test]
    fn test_pipe_segments_and_gap() {
        let mut state = GameState::new(1);
        state.pipes.push(Pipe {
            x: 200.0,
            top_height: 100.0,
            bottom_height: 200.0,
            scored: false,
        });
        let mut frame = world_frame();
        draw_frame(&mut frame, &state);

        // Top segment, gap, bottom segment at x=210.
        assert_eq!(frame.get(210, 50), PIPE);
        assert_eq!(frame.get(210, 250), SKY);
        assert_eq!(frame.get(210, 450), PIPE);
        // Outside the pipe's width.
        assert_eq!(frame.get(270, 50), SKY);
    }

    #[test]
    fn test_negative_bottom_height_draws_nothing_below() {
        let mut state = GameState::new(1);
        state.pipes.push(Pipe {
            x: 200.0,
            top_height: 340.0,
            bottom_height: -40.0,
            scored: false,
        });
        let mut frame = world_frame();
        draw_frame(&mut frame, &state);

        assert_eq!(frame.get(210, 100), PIPE);
        // No bottom segment anywhere in the column.
        assert_eq!(frame.get(210, 599), SKY);
    }

    #[test]
    fn test_sprite_exceeds_hitbox() {
        let state = GameState::new(1);
        let mut frame = world_frame();
        draw_frame(&mut frame, &state);

        // 30px above the hitbox top edge is still bird body.
        let above_hitbox = (BIRD_START_Y - BIRD_HALF_SIZE - 10.0) as u32;
        assert_eq!(frame.get(BIRD_X as u32, above_hitbox), BIRD_BODY);
    }
}
