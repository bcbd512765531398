//! GameView: maps a `RoundSnapshot` into positioned terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::round::RoundSnapshot;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    Bold,
    Standout,
}

/// One positioned run of text, clipped to the viewport by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub x: u16,
    pub y: u16,
    pub text: String,
    pub emphasis: Emphasis,
}

const TITLE: &str = "TUI Reflex";
const HELP: &str =
    "Controls: 4 pad buttons (UP/DOWN/LEFT/RIGHT) or arrow keys. Press 'q' to quit.";

/// Lays the round state out on the screen.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the current round state into a list of lines.
    pub fn render(
        &self,
        snap: &RoundSnapshot,
        error: Option<&str>,
        viewport: Viewport,
    ) -> Vec<TextLine> {
        let mut lines = Vec::new();
        let width = viewport.width;
        let height = viewport.height;
        if width == 0 || height == 0 {
            return lines;
        }

        push_centered(&mut lines, 1, width, TITLE, Emphasis::Bold);

        let status = format!(
            "Score: {}   Lives: {}   Reaction window: {:.1}s",
            snap.score,
            snap.lives,
            snap.window.as_secs_f64()
        );
        push_centered(&mut lines, 3, width, &status, Emphasis::Plain);

        let big = match snap.target {
            Some(target) => format!(">>> {} <<<", target.as_str()),
            None => "Get ready...".to_string(),
        };
        push_centered(&mut lines, height / 2, width, &big, Emphasis::Standout);

        if !snap.info.is_empty() {
            push_at(&mut lines, 2, height.saturating_sub(4), width, &snap.info);
        }
        if let Some(error) = error {
            let text = format!("Error: {}", error);
            push_at(&mut lines, 2, height.saturating_sub(3), width, &text);
        }
        push_centered(
            &mut lines,
            height.saturating_sub(2),
            width,
            HELP,
            Emphasis::Plain,
        );

        if snap.game_over {
            let msg = format!(
                "Game over! Final score: {}. Press 'q' to quit.",
                snap.score
            );
            push_centered(&mut lines, height / 2 + 2, width, &msg, Emphasis::Plain);
        }

        lines.retain(|line| line.y < height && !line.text.is_empty());
        lines
    }
}

fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn push_centered(lines: &mut Vec<TextLine>, y: u16, width: u16, text: &str, emphasis: Emphasis) {
    let text = clip(text, width as usize);
    let x = (width as usize).saturating_sub(text.chars().count()) / 2;
    lines.push(TextLine {
        x: x as u16,
        y,
        text,
        emphasis,
    });
}

fn push_at(lines: &mut Vec<TextLine>, x: u16, y: u16, width: u16, text: &str) {
    let max = (width as usize).saturating_sub(x as usize + 2);
    lines.push(TextLine {
        x,
        y,
        text: clip(text, max),
        emphasis: Emphasis::Plain,
    });
}
