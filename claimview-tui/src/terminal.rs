//! Terminal lifecycle guard.
//!
//! [`TerminalGuard`] enables raw mode, enters the alternate screen and
//! optionally captures the mouse. Dropping it undoes all of that, so an early
//! `?` return between setup and the event loop still leaves a usable shell.

use std::io::{self, Stdout, Write};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

pub struct TerminalGuard<W: Write = Stdout> {
    out: W,
    /// Whether this guard switched raw mode on and must switch it off.
    raw_mode: bool,
    active: bool,
}

impl TerminalGuard<Stdout> {
    /// Enter raw mode and the alternate screen on stdout.
    pub fn enter(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        Self::start(io::stdout(), true, mouse)
    }
}

impl<W: Write> TerminalGuard<W> {
    fn start(out: W, raw_mode: bool, mouse: bool) -> io::Result<Self> {
        // Built before the first write so a failure below is restored on drop.
        let mut guard = Self {
            out,
            raw_mode,
            active: true,
        };
        execute!(guard.out, EnterAlternateScreen)?;
        if mouse {
            execute!(guard.out, EnableMouseCapture)?;
        }
        Ok(guard)
    }

    /// Leave the alternate screen, release the mouse and disable raw mode.
    /// Only the first call does anything.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let raw = if self.raw_mode {
            disable_raw_mode()
        } else {
            Ok(())
        };
        execute!(self.out, DisableMouseCapture, LeaveAlternateScreen)?;
        raw
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
