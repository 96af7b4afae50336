pub mod buttons;
pub mod features;
pub mod footer;
pub mod hero;
pub mod quick_start;
pub mod status_bar;

use crate::app::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_page(f, state, chunks[0]);
    status_bar::render(f, state, chunks[1]);

    if state.show_help {
        render_help_overlay(f, state);
    }
}

/// The whole page as lines, top to bottom, for a viewport `width` cells wide.
pub fn page_lines(state: &AppState, width: usize) -> Vec<Line<'static>> {
    let mut lines = hero::lines(state, width);
    lines.extend(features::lines(state, width));
    lines.extend(quick_start::lines(state, width));
    lines.extend(footer::lines(state, width));
    lines
}

fn render_page(f: &mut Frame, state: &AppState, area: Rect) {
    let lines = page_lines(state, area.width as usize);

    let max_scroll = lines.len().saturating_sub(area.height as usize);
    let scroll = (state.scroll as usize).min(max_scroll) as u16;

    let page = Paragraph::new(lines)
        .style(Style::default().bg(state.theme.background))
        .scroll((scroll, 0));

    f.render_widget(page, area);
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let help_text = r#"
    Tingly Box Help

    Tab / ↓ / j           Focus next control
    Shift+Tab / ↑ / k     Focus previous control
    Enter or Space        Activate focused control
    c                     Copy install command
    y                     Copy code
    g                     Open GitHub
    d                     Open documentation
    PgUp / PgDn / Home    Scroll
    ?                     Toggle help
    q or Esc              Quit
    "#;

    // Center the help popup
    let area = centered_rect(60, 60, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::MemoryClipboard;
    use crate::content::{CopyTarget, DEFAULT_REPOSITORY_URL, Page};
    use crate::ui::theme::Theme;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;
    use std::time::Duration;

    fn state() -> AppState {
        AppState::new(
            Page::for_year(DEFAULT_REPOSITORY_URL, 2025),
            Theme::default(),
            Arc::new(MemoryClipboard::default()),
        )
        .unwrap()
    }

    fn draw(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..height {
            for x in 0..width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    fn line_texts(state: &AppState, width: usize) -> Vec<String> {
        page_lines(state, width)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[tokio::test]
    async fn test_renders_all_sections() {
        let state = state();
        let screen = draw(&state, 100, 70);

        assert!(screen.contains("Tingly Box"));
        assert!(screen.contains("Provider-agnostic AI model proxy with unified API"));
        assert!(screen.contains("$ pip install tingly-box"));
        assert!(screen.contains("Features"));
        assert!(screen.contains("Config-Based Routing"));
        assert!(screen.contains("Quick Start"));
        assert!(screen.contains("tingly-box serve --config config.yaml"));
        assert!(screen.contains("MIT License © 2025 Tingly Box"));
        assert!(screen.contains("Copy install command"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_icon_flips_for_window() {
        let mut state = state();
        assert_eq!(draw(&state, 100, 70).matches("[⧉ copy]").count(), 2);

        state.copy(CopyTarget::Install);
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        let screen = draw(&state, 100, 70);
        assert_eq!(screen.matches("[✓ copied]").count(), 1);
        assert_eq!(screen.matches("[⧉ copy]").count(), 1);

        tokio::time::sleep(Duration::from_millis(2001)).await;
        assert_eq!(draw(&state, 100, 70).matches("[⧉ copy]").count(), 2);
    }

    #[tokio::test]
    async fn test_features_use_two_columns_when_wide() {
        let state = state();
        let wide = line_texts(&state, 100);
        let narrow = line_texts(&state, 60);

        assert!(wide.iter().any(|l| l.contains("Multi-Provider Support") && l.contains("Unified API")));
        assert!(!narrow.iter().any(|l| l.contains("Multi-Provider Support") && l.contains("Unified API")));
        assert!(narrow.len() > wide.len());
    }

    #[tokio::test]
    async fn test_status_message_replaces_focus_hint() {
        let mut state = state();
        assert!(draw(&state, 100, 70).lines().last().unwrap().contains("Copy install command"));

        state.set_status_message("Copy code failed: denied".to_string());
        assert!(draw(&state, 100, 70).lines().last().unwrap().contains("Copy code failed"));
    }

    #[tokio::test]
    async fn test_help_overlay() {
        let mut state = state();
        state.show_help = true;
        assert!(draw(&state, 100, 40).contains("Tingly Box Help"));
    }

    #[tokio::test]
    async fn test_scroll_is_clamped() {
        let mut state = state();
        state.scroll = u16::MAX;
        let screen = draw(&state, 100, 20);
        assert!(screen.contains("MIT License"));
    }
}
