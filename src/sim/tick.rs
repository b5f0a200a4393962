//! Fixed-rate simulation tick
//!
//! One tick advances the game by exactly one frame. There is no delta
//! time anywhere in the update: velocities are in pixels per tick, so
//! the host's tick rate (nominally 60 Hz) sets the play speed.

use super::collision::{bounce_angle, collides, deflect, hits_horizontal_wall};
use super::state::{GameState, Side};
use crate::consts::{BALL_MAX_SPEED, PADDLE_HEIGHT, SPEED_INCREMENT};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Player paddle top-left y, already mapped from the latest pointer
    /// event via [`pointer_to_paddle_y`]. `None` leaves the paddle where
    /// it is.
    pub player_y: Option<f32>,
}

/// Map a pointer-move event to the player paddle's top-left y.
///
/// Centers the paddle on the pointer. The result is intentionally not
/// clamped to the field: the paddle may sit partly or fully off-screen.
pub fn pointer_to_paddle_y(client_y: f32, surface_top: f32) -> f32 {
    client_y - surface_top - PADDLE_HEIGHT / 2.0
}

/// Advance the game state by one tick.
///
/// The steps run in a fixed order, each seeing the effects of the one
/// before it: scoring, position integration, computer tracking, wall
/// bounce, paddle bounce.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if let Some(y) = input.player_y {
        state.player.pos.y = y;
    }
    state.time_ticks += 1;

    // A point is scored once the ball's leading edge clears a vertical
    // boundary; the serve then goes back toward the scorer.
    if state.ball.pos.x - state.ball.radius < 0.0 {
        state.award_point(Side::Right);
    } else if state.ball.pos.x + state.ball.radius > state.field.width {
        state.award_point(Side::Left);
    }

    // Euler step, one tick = one frame
    let vel = state.ball.vel;
    state.ball.pos += vel;

    // The computer closes a fixed fraction of the vertical gap each
    // tick. First-order lag, never instantaneous tracking.
    let gap = state.ball.pos.y - state.computer.center_y();
    state.computer.pos.y += gap * crate::consts::COMPUTER_TRACK_RATE;

    // Wall bounce is a sign flip only; the ball may poke past the edge
    // for a frame before the flipped velocity carries it back.
    if hits_horizontal_wall(&state.ball, &state.field) {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // The candidate paddle is picked by which half the ball occupies,
    // not by travel direction.
    let side = if state.ball.pos.x + state.ball.radius < state.field.width / 2.0 {
        Side::Left
    } else {
        Side::Right
    };
    let (hit, angle) = {
        let paddle = match side {
            Side::Left => &state.player,
            Side::Right => &state.computer,
        };
        (
            collides(&state.ball, paddle),
            bounce_angle(state.ball.pos.y, paddle),
        )
    };
    if hit {
        let direction = match side {
            Side::Left => 1.0,
            Side::Right => -1.0,
        };
        state.ball.vel = deflect(state.ball.speed, angle, direction);
        // No contact cooldown: while the ball overlaps a paddle this
        // fires every tick, re-aiming and speeding up each time.
        state.ball.speed = (state.ball.speed + SPEED_INCREMENT).min(BALL_MAX_SPEED);
        log::trace!(
            "{} paddle hit: angle {:.3} rad, speed now {:.1}",
            side.as_str(),
            angle,
            state.ball.speed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{
        BALL_MAX_SPEED, BALL_START_SPEED, MAX_BOUNCE_ANGLE, PADDLE_HEIGHT, SPEED_INCREMENT,
    };
    use glam::Vec2;
    use proptest::prelude::*;

    fn new_game() -> GameState {
        GameState::new(800.0, 600.0, 1)
    }

    fn still_ball(state: &mut GameState, pos: Vec2) {
        state.ball.pos = pos;
        state.ball.vel = Vec2::ZERO;
    }

    #[test]
    fn pointer_maps_to_centered_paddle() {
        assert_eq!(pointer_to_paddle_y(350.0, 50.0), 300.0 - PADDLE_HEIGHT / 2.0);
    }

    #[test]
    fn pointer_input_moves_player_without_clamping() {
        let mut state = new_game();
        still_ball(&mut state, Vec2::new(400.0, 300.0));

        tick(&mut state, &TickInput { player_y: Some(-500.0) });

        // Fully off-screen is allowed
        assert_eq!(state.player.pos.y, -500.0);
    }

    #[test]
    fn scores_hold_while_ball_stays_in_bounds() {
        let mut state = new_game();
        still_ball(&mut state, Vec2::new(400.0, 300.0));

        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }

        assert_eq!(state.player.score, 0);
        assert_eq!(state.computer.score, 0);
    }

    #[test]
    fn ball_past_left_edge_scores_for_computer_and_reserves() {
        let mut state = new_game();
        state.ball.pos = Vec2::new(-13.0, 300.0);
        state.ball.vel = Vec2::new(-10.0, 0.0);
        state.ball.speed = 25.0;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.computer.score, 1);
        assert_eq!(state.player.score, 0);
        // Reset recentered the ball, then the same tick integrated the
        // flipped serve velocity.
        assert_eq!(state.ball.pos.x, 400.0 + 10.0);
        assert_eq!(state.ball.vel.x, 10.0);
        assert_eq!(state.ball.speed, BALL_START_SPEED);
        assert!(state.ball.pos.y >= state.ball.radius);
        assert!(state.ball.pos.y <= 600.0 - state.ball.radius);
    }

    #[test]
    fn ball_past_right_edge_scores_for_player() {
        let mut state = new_game();
        state.ball.pos = Vec2::new(813.0, 300.0);
        state.ball.vel = Vec2::new(10.0, 0.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.player.score, 1);
        assert_eq!(state.ball.vel.x, -10.0);
    }

    #[test]
    fn center_hit_on_right_paddle_leaves_flat_at_full_speed() {
        let mut state = new_game();
        // Overlapping the computer paddle, dead on its vertical center
        still_ball(&mut state, Vec2::new(775.0, 300.0));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.vel, Vec2::new(-BALL_START_SPEED, 0.0));
        assert!((state.ball.speed - (BALL_START_SPEED + SPEED_INCREMENT)).abs() < 1e-5);
    }

    #[test]
    fn offset_hit_on_left_paddle_angles_upfield() {
        let mut state = new_game();
        state.ball.pos = Vec2::new(25.0, 330.0);
        state.ball.vel = Vec2::new(-2.0, 0.0);

        tick(&mut state, &TickInput::default());

        // Half-way down the lower half of the paddle: half the max angle
        let angle = MAX_BOUNCE_ANGLE / 2.0;
        assert!((state.ball.vel.x - BALL_START_SPEED * angle.cos()).abs() < 1e-4);
        assert!((state.ball.vel.y - BALL_START_SPEED * angle.sin()).abs() < 1e-4);
    }

    #[test]
    fn candidate_paddle_is_positional_not_directional() {
        let mut state = new_game();
        // In the left half but moving right; the player paddle is still
        // the one tested.
        state.ball.pos = Vec2::new(25.0, 300.0);
        state.ball.vel = Vec2::new(2.0, 0.0);

        tick(&mut state, &TickInput::default());

        assert!(state.ball.vel.x > 0.0);
        assert!((state.ball.speed - (BALL_START_SPEED + SPEED_INCREMENT)).abs() < 1e-5);
    }

    #[test]
    fn sustained_contact_fires_every_tick() {
        let mut state = new_game();
        still_ball(&mut state, Vec2::new(785.0, 300.0));

        tick(&mut state, &TickInput::default());
        tick(&mut state, &TickInput::default());

        // Two contact ticks, two increments
        assert!((state.ball.speed - (BALL_START_SPEED + 2.0 * SPEED_INCREMENT)).abs() < 1e-5);
        // Second bounce rebuilt velocity from the once-incremented speed
        assert!((state.ball.vel.x + (BALL_START_SPEED + SPEED_INCREMENT)).abs() < 1e-5);
    }

    #[test]
    fn speed_clamps_at_max() {
        let mut state = new_game();
        still_ball(&mut state, Vec2::new(775.0, 300.0));
        state.ball.speed = BALL_MAX_SPEED - 0.1;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.speed, BALL_MAX_SPEED);
    }

    #[test]
    fn bottom_wall_flips_vy_only() {
        let mut state = new_game();
        state.ball.pos = Vec2::new(400.0, 595.0);
        state.ball.vel = Vec2::new(3.0, 10.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.vel, Vec2::new(3.0, -10.0));
        assert_eq!(state.player.score, 0);
        assert_eq!(state.computer.score, 0);
        // No position correction: the ball stays past the edge this tick
        assert_eq!(state.ball.pos.y, 605.0);
    }

    #[test]
    fn top_wall_flips_vy_only() {
        let mut state = new_game();
        state.ball.pos = Vec2::new(400.0, 5.0);
        state.ball.vel = Vec2::new(-4.0, -9.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.vel, Vec2::new(-4.0, 9.0));
    }

    #[test]
    fn computer_closes_a_tenth_of_the_gap() {
        let mut state = new_game();
        still_ball(&mut state, Vec2::new(400.0, 500.0));
        let before = state.computer.center_y();

        tick(&mut state, &TickInput::default());

        let closed = state.computer.center_y() - before;
        assert!((closed - (500.0 - before) * 0.1).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn speed_stays_within_bounds(seed in any::<u64>(), ticks in 0usize..300) {
            let mut state = GameState::new(800.0, 600.0, seed);
            let input = TickInput::default();
            for _ in 0..ticks {
                tick(&mut state, &input);
                prop_assert!(state.ball.speed >= BALL_START_SPEED);
                prop_assert!(state.ball.speed <= BALL_MAX_SPEED);
            }
        }

        #[test]
        fn scores_only_step_up_by_one(
            seed in any::<u64>(),
            ticks in 1usize..300,
            pointer in -300.0f32..900.0,
        ) {
            let mut state = GameState::new(800.0, 600.0, seed);
            let input = TickInput { player_y: Some(pointer) };
            for _ in 0..ticks {
                let before = (state.player.score, state.computer.score);
                tick(&mut state, &input);
                let gained =
                    (state.player.score - before.0) + (state.computer.score - before.1);
                prop_assert!(gained <= 1);
            }
        }
    }
}
