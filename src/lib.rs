//! Flavicon - Flappy Bird played inside the browser tab's favicon
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, session)
//! - `renderer`: CPU pixel pipeline (frame buffer, scene painter, downsampler)
//! - `platform`: Browser/native seams (storage, favicon sink)
//! - `highscore`: Persistent best-score tracking
//! - `tuning`: Data-driven game balance

pub mod highscore;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use highscore::HighScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (the hidden full-size canvas)
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// The bird's hitbox is a fixed square centered at (BIRD_X, y)
    pub const BIRD_X: f32 = 100.0;
    pub const BIRD_HALF_SIZE: f32 = 20.0;
    pub const BIRD_START_Y: f32 = 300.0;
    /// Sprite render size; intentionally larger than the hitbox
    pub const BIRD_SPRITE_SIZE: i32 = 100;

    /// Pipe geometry
    pub const PIPE_WIDTH: f32 = 60.0;

    /// Favicon dimensions
    pub const ICON_SIZE: u32 = 32;

    /// Tab titles
    pub const DEFAULT_TITLE: &str = "Flav-Icon";
    pub const GAME_OVER_TITLE: &str = "\u{1f480} GAME OVER!";
    /// Title blink period while the run is over (ms)
    pub const GAME_OVER_BLINK_MS: i32 = 500;
}

/// Left edge of the bird's hitbox
#[inline]
pub fn bird_left() -> f32 {
    consts::BIRD_X - consts::BIRD_HALF_SIZE
}

/// Right edge of the bird's hitbox
#[inline]
pub fn bird_right() -> f32 {
    consts::BIRD_X + consts::BIRD_HALF_SIZE
}
