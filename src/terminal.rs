//! Terminal setup and restoration.
//!
//! Raw mode, the alternate screen and mouse capture are undone when the
//! guard drops, on a panic, or when setup fails halfway.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Restores the terminal when dropped.
#[derive(Debug)]
pub struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    /// Switch the terminal into TUI mode.
    ///
    /// # Arguments
    /// * `mouse` - Whether to enable mouse capture
    ///
    /// # Returns
    /// * `Result<(TerminalGuard, Tui)>` - Guard and ready terminal
    ///
    /// # Details
    /// The guard exists before the first setup step, so an error in any later
    /// step still restores whatever was already switched on.
    pub fn enter(mouse: bool) -> anyhow::Result<(Self, Tui)> {
        install_panic_hook(mouse);
        let guard = Self { mouse };

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok((guard, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(self.mouse);
    }
}

/// Undo every TUI setup step.
///
/// # Details
/// Each step runs even if an earlier one failed; failures are logged.
pub fn restore_terminal(mouse: bool) {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!(error = %e, "failed to disable raw mode");
    }
    let mut stdout = io::stdout();
    if mouse && let Err(e) = execute!(stdout, DisableMouseCapture) {
        tracing::warn!(error = %e, "failed to disable mouse capture");
    }
    if let Err(e) = execute!(stdout, LeaveAlternateScreen) {
        tracing::warn!(error = %e, "failed to leave alternate screen");
    }
    if let Err(e) = execute!(stdout, Show) {
        tracing::warn!(error = %e, "failed to show cursor");
    }
}

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook(mouse: bool) {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal(mouse);
        hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_terminal_runs_every_step_without_tty() {
        // Outside a TTY the individual steps may fail; none of them may panic.
        restore_terminal(true);
        restore_terminal(false);
    }

    #[test]
    fn test_guard_restores_on_drop() {
        let guard = TerminalGuard { mouse: false };
        drop(guard);
    }
}
