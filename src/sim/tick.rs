//! Per-frame simulation step
//!
//! One call to [`tick`] advances the whole game by one frame: ball
//! translation, wall and paddle collision, scoring, AI tracking. The host
//! calls it once per animation frame; velocities are per-frame, so there is
//! no dt parameter.

use crate::consts::*;

use super::collision::{ball_hits_paddle, paddle_rebound};
use super::state::GameState;

/// Advance the game state by one frame
///
/// Step order is fixed: translate, walls, player paddle, AI paddle, scoring,
/// AI movement. The wall and paddle checks are independent `if`s, not a
/// prioritized state machine; at the shipped speeds at most one fires per
/// frame.
pub fn tick(state: &mut GameState) {
    state.ball.pos += state.ball.vel;

    // Top and bottom walls: clamp flush and invert vertical velocity. Both
    // checks run every frame.
    if state.ball.pos.y <= 0.0 {
        state.ball.pos.y = 0.0;
        state.ball.vel.y = -state.ball.vel.y;
    }
    if state.ball.pos.y + BALL_SIZE >= state.height {
        state.ball.pos.y = state.height - BALL_SIZE;
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Player paddle: reposition flush against the face so the ball cannot
    // sink in and re-collide next frame, then rebound.
    if ball_hits_paddle(&state.ball, &state.player) {
        state.ball.vel = paddle_rebound(&state.ball, &state.player);
        state.ball.pos.x = state.player.x + PADDLE_WIDTH;
    }

    // AI paddle, same treatment on its near face
    if ball_hits_paddle(&state.ball, &state.ai) {
        state.ball.vel = paddle_rebound(&state.ball, &state.ai);
        state.ball.pos.x = state.ai.x - BALL_SIZE;
    }

    // Scoring: the branches are mutually exclusive, and the serve goes back
    // toward the side that just conceded.
    if state.ball.pos.x < 0.0 {
        state.ai_score += 1;
        state.reset_ball(-1.0);
    } else if state.ball.pos.x + BALL_SIZE > state.width {
        state.player_score += 1;
        state.reset_ball(1.0);
    }

    // AI tracking: chase the ball center, but hold still inside the
    // dead-zone and never move more than AI_MAX_SPEED per frame, so the
    // paddle neither jitters nor overshoots.
    let target = state.ball.center().y;
    let ai_center = state.ai.center_y();
    if ai_center < target - AI_DEAD_ZONE {
        state.ai.y += AI_MAX_SPEED.min(target - ai_center);
    } else if ai_center > target + AI_DEAD_ZONE {
        state.ai.y -= AI_MAX_SPEED.min(ai_center - target);
    }
    state.ai.clamp_y(state.height);
}
