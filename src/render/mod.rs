//! Render pass
//!
//! A pure projection of [`GameState`] onto an abstract 2D surface. The
//! simulation never depends on anything here; a failed or absent surface
//! only costs the visuals. [`DrawSurface`] is the seam the host fills in
//! with a canvas 2D context, and tests fill in with a recorder.

use crate::consts::*;
use crate::sim::GameState;

/// Dash pattern for the center net: pixels on, pixels off
pub const NET_DASH: [f32; 2] = [10.0, 15.0];

/// Font for the score counters
pub const SCORE_FONT: &str = "bold 36px Arial";

/// Baseline height of the score counters
pub const SCORE_BASELINE: f32 = 48.0;

/// The 2D drawing surface the host must supply
///
/// Coordinates are playfield pixels, top-left origin. Implementations draw
/// in the current (host-chosen) style; this crate only dictates geometry.
pub trait DrawSurface {
    /// Erase the given region
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Stroke a dashed line between two points
    fn dashed_line(&mut self, from: (f32, f32), to: (f32, f32), dash: &[f32]);
    /// Draw a filled rectangle
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Draw text with its anchor at the given baseline position
    fn text(&mut self, s: &str, x: f32, y: f32);
}

/// Draw one frame of the current state: net, scores, paddles, ball
pub fn draw_frame(state: &GameState, surface: &mut impl DrawSurface) {
    surface.clear(0.0, 0.0, state.width, state.height);

    // Center net
    surface.dashed_line(
        (state.width / 2.0, 0.0),
        (state.width / 2.0, state.height),
        &NET_DASH,
    );

    // Scores, one per half
    surface.text(
        &state.player_score.to_string(),
        state.width / 4.0,
        SCORE_BASELINE,
    );
    surface.text(
        &state.ai_score.to_string(),
        state.width * 3.0 / 4.0,
        SCORE_BASELINE,
    );

    // Paddles
    for paddle in [&state.player, &state.ai] {
        surface.fill_rect(paddle.x, paddle.y, PADDLE_WIDTH, PADDLE_HEIGHT);
    }

    // Ball
    surface.fill_rect(state.ball.pos.x, state.ball.pos.y, BALL_SIZE, BALL_SIZE);
}
