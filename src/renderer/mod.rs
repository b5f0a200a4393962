//! Frame rendering against a host-provided drawing surface
//!
//! The render pass is a pure read of the simulation state: it never
//! mutates entities, and the draw order is fixed (clear, net, scores,
//! paddles, ball) so later shapes paint over earlier ones.

use crate::consts::*;
use crate::sim::GameState;

/// Drawing capability the host must supply.
///
/// `width`/`height` report the surface size, queried once at startup to
/// fix the playfield bounds. Colors are straight RGBA in `[0, 1]`.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: [f32; 4]);
    fn draw_centered_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        color: [f32; 4],
        font_size: f32,
        bold: bool,
    );
}

/// Draw one frame of the current state.
pub fn render(state: &GameState, surface: &mut impl Surface) {
    let field = state.field;

    // Clear to the background
    surface.fill_rect(0.0, 0.0, field.width, field.height, COLOR_BLACK);

    draw_net(surface, field.width, field.height);

    // Scores at quarter-width, half-height
    surface.draw_centered_text(
        &state.player.score.to_string(),
        field.width / 4.0,
        field.height / 2.0,
        COLOR_GRAY,
        SCORE_FONT_SIZE,
        true,
    );
    surface.draw_centered_text(
        &state.computer.score.to_string(),
        3.0 * field.width / 4.0,
        field.height / 2.0,
        COLOR_GRAY,
        SCORE_FONT_SIZE,
        true,
    );

    for paddle in [&state.player, &state.computer] {
        surface.fill_rect(
            paddle.pos.x,
            paddle.pos.y,
            paddle.size.x,
            paddle.size.y,
            paddle.color,
        );
    }

    surface.fill_circle(
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.radius,
        state.ball.color,
    );
}

/// Dashed vertical net down the field midline.
fn draw_net(surface: &mut impl Surface, width: f32, height: f32) {
    let x = width / 2.0 - NET_WIDTH / 2.0;
    let mut y = 0.0;
    while y < height {
        surface.fill_rect(x, y, NET_WIDTH, NET_SEGMENT_HEIGHT, COLOR_WHITE);
        y += NET_SPACING;
    }
}
