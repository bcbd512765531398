//! Round engine - the prompt/response state machine
//!
//! Owns round number, score, lives and the current prompt. The engine is
//! driven from the main loop only: `tick` starts rounds and applies
//! timeouts, `judge` scores a submitted action. Within one frame the loop
//! calls `tick` first and `judge` second with the same `now`, and `judge`
//! clears the prompt, so an action landing exactly on the window boundary
//! is scored in-window and never also penalized as a timeout.

use std::time::{Duration, Instant};

use crate::core::rng::SimpleRng;
use crate::types::{Direction, STARTING_LIVES};

/// The active prompt. Target and start instant always travel together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Prompt {
    target: Direction,
    at: Instant,
}

/// Per-frame render snapshot of the round state.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSnapshot {
    pub round_no: u32,
    pub score: u32,
    pub lives: u32,
    pub target: Option<Direction>,
    pub window: Duration,
    pub info: String,
    pub game_over: bool,
}

/// The round state machine.
///
/// `lives == 0` is terminal: `tick` and `judge` become no-ops and
/// round_no/score/target are frozen.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    round_no: u32,
    score: u32,
    lives: u32,
    prompt: Option<Prompt>,
    window: Duration,
    rng: SimpleRng,
    info: String,
}

impl RoundEngine {
    pub fn new(window: Duration, seed: u32) -> Self {
        Self {
            round_no: 0,
            score: 0,
            lives: STARTING_LIVES,
            prompt: None,
            window,
            rng: SimpleRng::new(seed),
            info: String::new(),
        }
    }

    pub fn round_no(&self) -> u32 {
        self.round_no
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn target(&self) -> Option<Direction> {
        self.prompt.map(|p| p.target)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Last round/result message (shown on the info line).
    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn game_over(&self) -> bool {
        self.lives == 0
    }

    /// Advance the round clock: start a new round when none is active,
    /// apply the timeout when the window has elapsed.
    ///
    /// A round started by this call cannot time out in the same call; the
    /// timeout comparison is strict (`now > prompt + window`), so an exact
    /// boundary instant is still in-window for `judge`.
    pub fn tick(&mut self, now: Instant) {
        if self.lives == 0 {
            return;
        }

        if self.prompt.is_none() {
            let target = Direction::ALL[self.rng.next_range(4) as usize];
            self.prompt = Some(Prompt { target, at: now });
            self.round_no += 1;
            self.info = format!("Round {}! Press {}!", self.round_no, target.as_str());
            return;
        }

        if let Some(prompt) = self.prompt {
            if now.duration_since(prompt.at) > self.window {
                self.lives -= 1;
                self.info = format!("Too slow! It was {}.", prompt.target.as_str());
                self.prompt = None;
            }
        }
    }

    /// Score a submitted action against the active prompt.
    ///
    /// No-op without an active prompt. The prompt is cleared in every
    /// judged case; the next `tick` starts a fresh round.
    pub fn judge(&mut self, action: Direction, now: Instant) {
        if self.lives == 0 {
            return;
        }
        let Some(prompt) = self.prompt else {
            return;
        };

        if now.duration_since(prompt.at) <= self.window {
            if action == prompt.target {
                self.score += 1;
                self.info = format!("Nice! {} was correct.", action.as_str());
            } else {
                self.lives -= 1;
                self.info = format!(
                    "Oops! You pressed {}, it was {}.",
                    action.as_str(),
                    prompt.target.as_str()
                );
            }
        } else {
            // The window elapsed between this frame's tick and the input
            // arriving; the press counts as a miss regardless of direction.
            self.lives -= 1;
            self.info = format!(
                "Too late! You pressed {}, but the timer ran out.",
                action.as_str()
            );
        }

        self.prompt = None;
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            round_no: self.round_no,
            score: self.score,
            lives: self.lives,
            target: self.target(),
            window: self.window,
            info: self.info.clone(),
            game_over: self.game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(window_ms: u64) -> RoundEngine {
        RoundEngine::new(Duration::from_millis(window_ms), 1)
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = engine(1500);
        assert_eq!(engine.round_no(), 0);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.lives(), STARTING_LIVES);
        assert_eq!(engine.target(), None);
        assert!(!engine.game_over());
    }

    #[test]
    fn test_tick_starts_round() {
        let mut engine = engine(1500);
        let now = Instant::now();
        engine.tick(now);
        assert_eq!(engine.round_no(), 1);
        assert!(engine.target().is_some());
        assert!(engine.info().starts_with("Round 1! Press "));
    }

    #[test]
    fn test_round_start_cannot_time_out_same_tick() {
        let mut engine = engine(0);
        engine.tick(Instant::now());
        // Even a zero-length window leaves the fresh prompt standing.
        assert!(engine.target().is_some());
        assert_eq!(engine.lives(), STARTING_LIVES);
    }
}
