//! Net Pong - classic Pong against a tracking AI
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, scoring, AI)
//! - `render`: Pure projection of game state onto a 2D drawing surface
//!
//! The browser supplies the canvas, the pointer events, and the frame
//! scheduler; everything in this crate is plain single-threaded Rust.

pub mod render;
pub mod sim;

/// Game configuration constants
///
/// Velocities are in pixels per frame: the simulation advances one step per
/// `requestAnimationFrame` callback with no timestep decoupling.
pub mod consts {
    /// Paddle dimensions (both paddles)
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;

    /// Ball is an axis-aligned square of this side length
    pub const BALL_SIZE: f32 = 14.0;

    /// Horizontal inset of each paddle from its wall
    pub const PADDLE_MARGIN: f32 = 24.0;

    /// Horizontal serve speed; also scales the rebound angle off a paddle
    pub const BALL_SPEED: f32 = 6.0;

    /// Maximum distance the AI paddle may move per frame
    pub const AI_MAX_SPEED: f32 = 5.0;

    /// The AI holds still while its center is within this distance of the
    /// ball center (prevents jitter when near-aligned)
    pub const AI_DEAD_ZONE: f32 = 10.0;

    /// Playfield size used when the host does not dictate one (tests, docs)
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 500.0;
}
