//! Terminal acquisition
//!
//! Raw mode, the alternate screen, mouse capture and bracketed paste are
//! enabled together and released together when the guard is dropped, on the
//! normal exit path as well as on errors and panics unwinding through it.

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Take over the terminal
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled or the terminal does not
    /// accept the setup sequences. Anything already enabled is rolled back.
    pub fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        ) {
            restore();
            return Err(e.into());
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(e) => {
                restore();
                return Err(e.into());
            }
        };

        tracing::debug!("terminal acquired");
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
        if let Err(e) = self.terminal.show_cursor() {
            tracing::warn!("Failed to show cursor: {}", e);
        }
        tracing::debug!("terminal released");
    }
}

fn restore() {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!("Failed to disable raw mode: {}", e);
    }
    if let Err(e) = execute!(
        io::stdout(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    ) {
        tracing::warn!("Failed to restore terminal: {}", e);
    }
}
