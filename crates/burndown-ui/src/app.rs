//! Application state and TUI event loop for wekan-burndown.
//!
//! [`App`] owns the theme and drives the chart event loop: draw once per
//! tick, exit on `q` / `Ctrl+C`, restore the terminal unconditionally.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::chart_view::{self, ChartViewData};
use crate::themes::Theme;

/// Root application state for the wekan-burndown TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
}

impl App {
    /// Construct a new application with the named theme.
    pub fn new(theme_name: &str) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
        }
    }

    /// Run the static chart view, then wait for `q` / `Ctrl+C`.
    ///
    /// Uses `crossterm::event::poll` with a 250 ms timeout so redraws keep up
    /// with terminal resizes without busy-looping.
    pub async fn run_chart(self, data: ChartViewData) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                let area = frame.area();
                if data.timeline.is_empty() {
                    chart_view::render_no_data(frame, area, &data, &self.theme);
                } else {
                    chart_view::render_chart_view(frame, area, &data, &self.theme);
                }
            })?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break;
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => break,
                        _ => {}
                    }
                }
            }
        }

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
