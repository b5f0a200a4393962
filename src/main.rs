//! Retro Pong entry point
//!
//! Demo loop driver: runs the simulation at a fixed 60 Hz cadence with
//! an autopilot pointer and a headless surface that counts draw calls.
//! A real host supplies a canvas-backed [`Surface`] and forwards
//! pointer-move events instead.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use retro_pong::Settings;
use retro_pong::consts::{PADDLE_HEIGHT, TICKS_PER_SECOND};
use retro_pong::renderer::{Surface, render};
use retro_pong::sim::{GameState, TickInput, tick};

/// Game instance: simulation state plus the latest input snapshot.
///
/// The pointer handler writes `input` between frames; each frame runs
/// update then render, unconditionally.
struct Game {
    state: GameState,
    input: TickInput,
}

impl Game {
    fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            state: GameState::new(width, height, seed),
            input: TickInput::default(),
        }
    }

    fn frame(&mut self, surface: &mut impl Surface) {
        tick(&mut self.state, &self.input);
        render(&self.state, surface);
    }
}

/// Surface that draws nowhere, keeping only a draw-call count.
struct HeadlessSurface {
    width: f32,
    height: f32,
    draw_calls: u64,
}

impl HeadlessSurface {
    fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            draw_calls: 0,
        }
    }
}

impl Surface for HeadlessSurface {
    fn width(&self) -> f32 {
        self.width
    }
    fn height(&self) -> f32 {
        self.height
    }
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: [f32; 4]) {
        self.draw_calls += 1;
    }
    fn fill_circle(&mut self, _cx: f32, _cy: f32, _radius: f32, _color: [f32; 4]) {
        self.draw_calls += 1;
    }
    fn draw_centered_text(
        &mut self,
        _text: &str,
        _x: f32,
        _y: f32,
        _color: [f32; 4],
        _font_size: f32,
        _bold: bool,
    ) {
        self.draw_calls += 1;
    }
}

fn main() {
    env_logger::init();

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let mut surface = HeadlessSurface::new(settings.field_width, settings.field_height);
    let mut game = Game::new(surface.width(), surface.height(), seed);

    log::info!(
        "Retro Pong starting: {}x{} field, seed {seed}, {} ticks",
        settings.field_width,
        settings.field_height,
        settings.demo_ticks
    );

    let tick_period = Duration::from_secs_f64(1.0 / f64::from(TICKS_PER_SECOND));
    for _ in 0..settings.demo_ticks {
        let started = Instant::now();

        // Autopilot: the demo pointer keeps the paddle centered on the
        // ball, standing in for real pointer-move events.
        game.input.player_y = Some(game.state.ball.pos.y - PADDLE_HEIGHT / 2.0);

        game.frame(&mut surface);

        if let Some(rest) = tick_period.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }

    log::info!(
        "Final score {} - {} after {} ticks ({} draw calls)",
        game.state.player.score,
        game.state.computer.score,
        game.state.time_ticks,
        surface.draw_calls
    );
}
