//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per host frame (velocities are per-frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{paddle_rebound, rects_overlap};
pub use state::{Ball, GameState, Paddle};
pub use tick::tick;
