//! Terminal reaction game runner (default binary).
//!
//! Drives fixed-period frames: tick the round engine, arbitrate device and
//! keyboard input, judge, render, sleep the remainder. The device listener
//! runs on its own thread and only ever talks to this loop through the
//! event channel.

use std::sync::mpsc::Receiver;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tui_reflex::config::{self, RunConfig};
use tui_reflex::core::RoundEngine;
use tui_reflex::device::{serial_opener, DeviceListener};
use tui_reflex::input::{poll_frame, CrosstermKeys, KeyPoll};
use tui_reflex::term::{GameView, TerminalRenderer, Viewport};
use tui_reflex::types::{InputEvent, KeyCommand, GAME_OVER_POLL_MS, SHUTDOWN_TIMEOUT_MS};

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = config::parse_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let seed = config.seed.unwrap_or_else(seed_from_clock);
    let mut engine = RoundEngine::new(config.reaction_window, seed);

    let device: Option<(DeviceListener, Receiver<InputEvent>)> = config
        .port
        .clone()
        .map(|port| DeviceListener::start(serial_opener(port, config.baud)));

    let view = GameView::new();
    let mut keys = CrosstermKeys::new();
    let mut error_msg: Option<String> = None;

    loop {
        let frame_start = Instant::now();
        engine.tick(frame_start);

        if engine.game_over() {
            term.draw(&view.render(&engine.snapshot(), error_msg.as_deref(), viewport()))?;
            if matches!(keys.poll(), Some(KeyCommand::Quit)) {
                break;
            }
            thread::sleep(Duration::from_millis(GAME_OVER_POLL_MS));
            continue;
        }

        let decision = poll_frame(device.as_ref().map(|(_, rx)| rx), &mut keys);
        if let Some(msg) = decision.error {
            error_msg = Some(msg);
        }
        if decision.quit {
            break;
        }
        if let Some(action) = decision.action {
            engine.judge(action, frame_start);
        }

        term.draw(&view.render(&engine.snapshot(), error_msg.as_deref(), viewport()))?;

        if let Some(rest) = config.frame_period.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    if let Some((listener, _)) = device {
        listener.shutdown(Duration::from_millis(SHUTDOWN_TIMEOUT_MS));
    }
    Ok(())
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Log to stderr when RUST_LOG is set (redirect stderr to a file to keep
/// the alternate screen clean); otherwise stay silent.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
