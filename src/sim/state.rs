//! Game state and core simulation types
//!
//! The entire game is a handful of mutable scalars; they all live in
//! [`GameState`] so the update and render passes take an explicit state
//! argument instead of touching globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// A paddle: fixed horizontal position, mobile vertical position
///
/// `y` is the top edge. Invariant: `0 <= y <= field_height - PADDLE_HEIGHT`,
/// restored by [`Paddle::clamp_y`] after every mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
}

impl Paddle {
    /// Paddle at the given column, vertically centered in the field
    pub fn centered(x: f32, field_height: f32) -> Self {
        Self {
            x,
            y: (field_height - PADDLE_HEIGHT) / 2.0,
        }
    }

    /// Vertical center of the paddle
    pub fn center_y(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    /// Clamp the paddle back inside the playfield
    pub fn clamp_y(&mut self, field_height: f32) {
        self.y = self.y.clamp(0.0, field_height - PADDLE_HEIGHT);
    }
}

/// The ball: an axis-aligned square, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Center of the ball square
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(BALL_SIZE / 2.0)
    }
}

/// Complete game state
///
/// Same-seed states evolve identically under [`tick`](super::tick): the only
/// randomness is the serve, drawn from the owned RNG.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Playfield dimensions, fixed for the session
    pub width: f32,
    pub height: f32,
    /// Left paddle, driven by pointer events
    pub player: Paddle,
    /// Right paddle, driven by the tracking AI
    pub ai: Paddle,
    pub ball: Ball,
    pub player_score: u32,
    pub ai_score: u32,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game: paddles centered, ball served in a random
    /// direction from the playfield center
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        let mut state = Self {
            width,
            height,
            player: Paddle::centered(PADDLE_MARGIN, height),
            ai: Paddle::centered(width - PADDLE_WIDTH - PADDLE_MARGIN, height),
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
            },
            player_score: 0,
            ai_score: 0,
            rng: Pcg32::seed_from_u64(seed),
        };

        let direction = if state.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        state.reset_ball(direction);
        state
    }

    /// Re-serve the ball from the playfield center
    ///
    /// `direction` is ±1: the sign of the new horizontal velocity. After a
    /// score the caller passes the sign toward the side that just conceded.
    /// Vertical velocity is uniform in `[-BALL_SPEED, BALL_SPEED]`.
    pub fn reset_ball(&mut self, direction: f32) {
        self.ball.pos = Vec2::new(
            (self.width - BALL_SIZE) / 2.0,
            (self.height - BALL_SIZE) / 2.0,
        );
        self.ball.vel = Vec2::new(
            BALL_SPEED * direction,
            self.rng.random_range(-BALL_SPEED..=BALL_SPEED),
        );
    }

    /// Position the player paddle from a pointer event
    ///
    /// `y` is the pointer's vertical position relative to the playfield
    /// origin; it becomes the paddle's center, clamped into bounds. Called
    /// per event, not per frame; the latest event wins.
    pub fn set_player_center(&mut self, y: f32) {
        self.player.y = y - PADDLE_HEIGHT / 2.0;
        self.player.clamp_y(self.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_centered() {
        let state = GameState::new(1, DEFAULT_WIDTH, DEFAULT_HEIGHT);

        assert_eq!(state.player.x, PADDLE_MARGIN);
        assert_eq!(state.ai.x, DEFAULT_WIDTH - PADDLE_WIDTH - PADDLE_MARGIN);
        assert_eq!(state.player.center_y(), DEFAULT_HEIGHT / 2.0);
        assert_eq!(state.ai.center_y(), DEFAULT_HEIGHT / 2.0);
        assert_eq!(state.ball.center(), Vec2::new(400.0, 250.0));
        assert_eq!(state.player_score, 0);
        assert_eq!(state.ai_score, 0);
    }

    #[test]
    fn test_reset_ball_bounds() {
        let mut state = GameState::new(7, DEFAULT_WIDTH, DEFAULT_HEIGHT);

        for &dir in &[1.0, -1.0] {
            state.reset_ball(dir);
            assert_eq!(state.ball.center(), Vec2::new(400.0, 250.0));
            assert_eq!(state.ball.vel.x, BALL_SPEED * dir);
            assert!(state.ball.vel.y.abs() <= BALL_SPEED);
        }
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed serve identically
        let a = GameState::new(99999, DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let b = GameState::new(99999, DEFAULT_WIDTH, DEFAULT_HEIGHT);
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_player_center_clamped() {
        let mut state = GameState::new(1, DEFAULT_WIDTH, DEFAULT_HEIGHT);

        state.set_player_center(250.0);
        assert_eq!(state.player.center_y(), 250.0);

        // Pointer above the field pins the paddle to the top edge
        state.set_player_center(-500.0);
        assert_eq!(state.player.y, 0.0);

        // And below pins it to the bottom edge
        state.set_player_center(DEFAULT_HEIGHT + 500.0);
        assert_eq!(state.player.y, DEFAULT_HEIGHT - PADDLE_HEIGHT);
    }
}
