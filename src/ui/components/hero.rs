use super::buttons::{copy_button, link_button};
use crate::app::{AppState, Focus};
use crate::utils::unicode::wrap_text;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

pub fn lines(state: &AppState, width: usize) -> Vec<Line<'static>> {
    let theme = &state.theme;
    let page = &state.page;
    let (brand, rest) = page.name.split_once(' ').unwrap_or((page.name, ""));

    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled(
                brand.to_string(),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {rest}"),
                Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD),
            ),
        ])
        .centered(),
        Line::default(),
    ];

    for row in wrap_text(page.tagline, width) {
        lines.push(Line::styled(row, Style::default().fg(theme.muted)).centered());
    }
    lines.push(Line::default());

    lines.push(
        Line::from(vec![
            Span::styled("$ ", Style::default().fg(theme.muted)),
            Span::styled(page.install_command, Style::default().fg(theme.foreground)),
            Span::raw("  "),
            copy_button(&state.install_copy, state.focus == Focus::CopyInstall, theme),
        ])
        .centered(),
    );
    lines.push(Line::default());

    lines.push(
        Line::from(vec![
            link_button(page.github.label, state.focus == Focus::Github, theme),
            Span::raw("  "),
            link_button(page.docs.label, state.focus == Focus::Docs, theme),
        ])
        .centered(),
    );
    lines.push(Line::default());

    lines
}
