//! Terminal runner (default binary).
//!
//! Drives the engine from a fixed-period frame loop: read input until the
//! frame is due, tick the scheduler, hand events to the feedback layer and
//! redraw through the framebuffer renderer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use blockfall::core::{Engine, GameSnapshot, RandomSource, Scheduler, SimpleRng, ThreadRandom};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{Feedback, FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Falling-block puzzle game for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for a reproducible piece sequence (random when omitted)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Frame period in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn new_engine(seed: Option<u32>) -> Engine<Box<dyn RandomSource>> {
    let rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SimpleRng::new(seed)),
        None => Box::new(ThreadRandom),
    };
    Engine::new(rng)
}

fn run(term: &mut TerminalRenderer, args: &Args) -> Result<()> {
    let mut engine = new_engine(args.seed);
    info!(seed = ?args.seed, frame_ms = args.frame_ms, "game started");

    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut scheduler = Scheduler::new(now_ms());
    let mut feedback = Feedback::new();
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(args.frame_ms.max(1));
    let mut last_frame = Instant::now();

    loop {
        // Input until the next frame is due.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout).context("poll terminal events")? {
            match event::read().context("read terminal event")? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(score = engine.score(), lines = engine.lines(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let applied = engine.apply_action(action);
                        debug!(action = action.as_str(), applied, "input");
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            scheduler.tick(&mut engine, now_ms());
            feedback.update(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
        feedback.extend(engine.drain_events());

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        engine.snapshot_into(&mut snap);
        view.render_into_with_feedback(&snap, Some(&feedback), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
