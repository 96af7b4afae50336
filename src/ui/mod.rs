pub mod components;
pub mod theme;

use crate::app::{event::handle_key_event, AppState};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::time::Duration;
use tracing::info;

const TICK: Duration = Duration::from_millis(100);

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = disable_raw_mode();
        let _ = execute!(stdout, LeaveAlternateScreen);
        let _ = stdout.flush();
    }
}

/// Run the page until the user quits. The copy controls inside `state`
/// need the tokio runtime they were created on to stay alive meanwhile.
pub fn run_tui(mut state: AppState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("page mounted");
    let result = run_app(&mut terminal, &mut state);
    terminal.show_cursor()?;

    // Unmount: dropping the state cancels pending acknowledgment timers.
    drop(state);
    info!("page unmounted");

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    loop {
        state.clear_expired_status_message();
        state.drain_copy_failures();

        terminal.draw(|f| {
            components::render(f, state);
        })?;

        // Poll with a short timeout so timer-driven state changes get drawn.
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(key, state);
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
