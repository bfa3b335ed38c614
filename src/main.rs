//! Terminal memory game runner (default binary).
//!
//! It uses crossterm for mouse/keyboard input and a custom framebuffer-based
//! renderer, driven by a fixed 30 Hz loop.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use log::info;

use memory_match::core::GameState;
use memory_match::term::{FrameBuffer, TerminalRenderer, Viewport};
use memory_match::types::TICK_MS;
use memory_match::{logging, Controller, Flow, FrameClock, Settings};

fn main() -> Result<()> {
    let settings = Settings::from_env();
    logging::init(settings.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, settings: &Settings) -> Result<()> {
    let seed = settings.resolve_seed();
    let state = GameState::with_config(seed, settings.game_config());

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut controller = Controller::new(state, Viewport::new(w, h));
    let mut fb = FrameBuffer::new(w, h);

    let mut frames = FrameClock::new(Duration::from_millis(TICK_MS as u64), Instant::now());

    info!("started with seed {seed}");

    loop {
        // Input until the next tick.
        if event::poll(frames.timeout(Instant::now()))? {
            match controller.handle_event(&event::read()?) {
                Flow::Quit => {
                    info!("quit");
                    return Ok(());
                }
                Flow::Resized => term.invalidate(),
                Flow::Continue => {}
            }
        }

        // Tick with the wall-clock time that actually passed, then draw.
        if let Some(dt_ms) = frames.due(Instant::now()) {
            controller.tick(dt_ms);
            controller.render_into(&mut fb);
            term.present(&mut fb)?;
        }
    }
}
