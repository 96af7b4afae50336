use super::buttons::link_button;
use crate::app::{AppState, Focus};
use crate::utils::unicode::gap_between;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

pub fn lines(state: &AppState, width: usize) -> Vec<Line<'static>> {
    let theme = &state.theme;
    let license = state.page.license.clone();
    let link = link_button(
        state.page.github.label,
        state.focus == Focus::FooterGithub,
        theme,
    );

    let mut lines = vec![Line::styled("─".repeat(width), Style::default().fg(theme.border))];

    let gap = gap_between(&license, &link.content, width.saturating_sub(2));
    if gap >= 2 {
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(license, Style::default().fg(theme.muted)),
            Span::raw(" ".repeat(gap)),
            link,
        ]));
    } else {
        // too narrow for one row
        lines.push(Line::styled(license, Style::default().fg(theme.muted)).centered());
        lines.push(Line::from(link).centered());
    }

    lines
}
