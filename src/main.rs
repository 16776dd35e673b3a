use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{info, warn};
use sdl2::ttf::{Font, Sdl2TtfContext};

use road_crossing::input::{print_controls, InputHandler};
use road_crossing::rendering::SdlSurface;
use road_crossing::{GameConfig, GameError, GameLoop, GameState, InputAction};

fn main() -> Result<(), GameError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::resolve(std::env::args().nth(1).map(PathBuf::from))?;
    info!("=== Road Crossing ===");

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let ttf_context = sdl2::ttf::init().map_err(|e| GameError::Font(e.to_string()))?;

    let window = video_subsystem
        .window("Road Crossing", config.window_width, config.window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| e.to_string())?;

    let font = load_font(&ttf_context, &config);
    let surface = SdlSurface::new(canvas, font)?;

    let tick_period = Duration::from_millis(config.tick_period_ms);
    let max_ticks = config.max_ticks_per_frame;

    let mut game = GameLoop::new(config, surface)?;
    let input = InputHandler::new();
    let mut event_pump = sdl_context.event_pump()?;

    print_controls();
    game.redraw()?;

    let mut accumulator = Duration::ZERO;
    let mut last_frame = Instant::now();

    'running: loop {
        let frame_start = Instant::now();

        for event in event_pump.poll_iter() {
            match input.process_event(&event) {
                InputAction::Game(event) => game.handle_input(event)?,
                InputAction::ShowStatistics => game.statistics().log_summary(),
                InputAction::ShowHelp => print_controls(),
                InputAction::Exit => break 'running,
                InputAction::None => {}
            }
        }

        accumulator += frame_start.duration_since(last_frame);
        last_frame = frame_start;

        let mut ticks = 0;
        while accumulator >= tick_period && ticks < max_ticks {
            game.tick()?;
            accumulator -= tick_period;
            ticks += 1;
        }
        if ticks == max_ticks && accumulator >= tick_period {
            warn!("Running behind; dropping {:?} of simulation time", accumulator);
            accumulator = Duration::ZERO;
        }
        if needs_idle_redraw(ticks, game.state()) {
            game.redraw()?;
        }

        let frame_time = frame_start.elapsed();
        if frame_time < tick_period {
            std::thread::sleep(tick_period - frame_time);
        }
    }

    info!("=== Final statistics ===");
    game.statistics().log_summary();
    Ok(())
}

/// Ticks only repaint while playing, so a frame without a tick or with a
/// finished round repaints explicitly.
fn needs_idle_redraw(ticks_run: u32, state: GameState) -> bool {
    ticks_run == 0 || state != GameState::Playing
}

/// Without a usable font the game still runs; status banners show no text.
fn load_font<'ttf>(ttf_context: &'ttf Sdl2TtfContext, config: &GameConfig) -> Option<Font<'ttf, 'static>> {
    let path = config.font_path.as_ref()?;
    match ttf_context.load_font(path, config.font_point_size) {
        Ok(font) => Some(font),
        Err(e) => {
            warn!("Could not load font {}: {}", path.display(), e);
            None
        }
    }
}
