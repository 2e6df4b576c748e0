//! Arena Tetris terminal runner (default binary).
//!
//! Frames are driven at a fixed `TICK_MS` cadence. Key events arriving between
//! frames are queued and applied at the start of the next frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use arena_tetris::core::{GameLoop, GameState};
use arena_tetris::input::{handle_key_event, should_quit, ActionQueue};
use arena_tetris::term::{TermPresenter, Viewport};
use arena_tetris::types::{GameConfig, TICK_MS};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    eprintln!(
        "[Arena] board {}x{}, drop every {}ms, seed {}",
        config.board_width, config.board_height, config.drop_interval_ms, config.seed
    );

    let mut game = GameState::new(config);
    game.start();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut presenter = TermPresenter::new(Viewport::new(w, h));
    presenter.renderer_mut().enter()?;

    let result = run(&mut game, &mut presenter);

    // Always try to restore terminal state.
    let _ = presenter.renderer_mut().exit();

    eprintln!(
        "[Arena] final score {}, board resets {}",
        game.score(),
        game.episode_id()
    );
    result
}

fn run(game: &mut GameState, presenter: &mut TermPresenter) -> Result<()> {
    let mut game_loop = GameLoop::new();
    let mut queue = ActionQueue::new();

    let started = Instant::now();
    let frame_duration = Duration::from_millis(TICK_MS as u64);
    let mut next_frame = started;

    loop {
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        queue.push(action);
                    }
                }
                Event::Resize(w, h) => presenter.resize(w, h),
                _ => {}
            }
        }

        if Instant::now() < next_frame {
            continue;
        }

        let now_ms = started.elapsed().as_millis() as u64;
        game_loop.frame(game, now_ms, queue.drain(), presenter);
        presenter.take_error()?;

        next_frame += frame_duration;
        if next_frame < Instant::now() {
            next_frame = Instant::now() + frame_duration;
        }
    }
}
