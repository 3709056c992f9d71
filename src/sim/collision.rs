//! Collision detection and response
//!
//! Everything here is axis-aligned rectangles: the ball is a square and both
//! paddles are fixed-size boxes, so overlap is a plain AABB test and the
//! only interesting part is the rebound angle off a paddle.

use glam::Vec2;

use crate::consts::*;
use super::state::{Ball, Paddle};

/// Axis-aligned rectangle overlap test
///
/// Rectangles are given by top-left corner and size. Touching edges count as
/// overlap.
pub fn rects_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    !(b_pos.x > a_pos.x + a_size.x
        || b_pos.x + b_size.x < a_pos.x
        || b_pos.y > a_pos.y + a_size.y
        || b_pos.y + b_size.y < a_pos.y)
}

/// Does the ball overlap this paddle?
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    rects_overlap(
        ball.pos,
        Vec2::splat(BALL_SIZE),
        Vec2::new(paddle.x, paddle.y),
        Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
    )
}

/// Rebound velocity for a ball striking a paddle
///
/// The horizontal component flips sign; the vertical component is recomputed
/// from the impact offset: ball center minus paddle center, normalized by
/// half the paddle height, in `[-1, 1]` for on-paddle hits. Center strikes
/// rebound flat, edge strikes rebound steep. Deterministic: the same
/// geometry always yields the same velocity.
pub fn paddle_rebound(ball: &Ball, paddle: &Paddle) -> Vec2 {
    let offset = (ball.center().y - paddle.center_y()) / (PADDLE_HEIGHT / 2.0);
    Vec2::new(-ball.vel.x, BALL_SPEED * offset)
}
