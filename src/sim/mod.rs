//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per repaint callback, fixed per-tick constants
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::bird_collides;
pub use session::{Phase, SessionController};
pub use state::{Bird, GameState, Pipe};
pub use tick::{TickInput, TickReport, spawn_pipe, tick};
