//! TerminalRenderer: flushes positioned text lines to a real terminal.
//!
//! The screen is a handful of lines, so every frame is a full clear and
//! redraw; there is no diffing layer.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::term::game_view::{Emphasis, TextLine};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame: clear, queue every line, flush once.
    pub fn draw(&mut self, lines: &[TextLine]) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        for line in lines {
            self.stdout.queue(cursor::MoveTo(line.x, line.y))?;
            match line.emphasis {
                Emphasis::Plain => {}
                Emphasis::Bold => {
                    self.stdout.queue(SetAttribute(Attribute::Bold))?;
                }
                Emphasis::Standout => {
                    self.stdout.queue(SetAttribute(Attribute::Reverse))?;
                }
            }
            self.stdout.queue(Print(&line.text))?;
            self.stdout.queue(SetAttribute(Attribute::Reset))?;
        }

        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
