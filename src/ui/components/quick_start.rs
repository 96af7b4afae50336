use super::buttons::copy_button;
use crate::app::{AppState, Focus};
use crate::utils::unicode::{pad_to_width, truncate_to_width};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

const MAX_BOX_WIDTH: usize = 76;

pub fn lines(state: &AppState, width: usize) -> Vec<Line<'static>> {
    let theme = &state.theme;
    let box_width = width.min(MAX_BOX_WIDTH);
    let margin = " ".repeat((width - box_width) / 2);
    let inner = box_width.saturating_sub(4);
    let border = Style::default().fg(theme.border);

    let mut lines = vec![
        Line::styled(
            "Quick Start",
            Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD),
        )
        .centered(),
        Line::default(),
    ];

    let button = copy_button(&state.code_copy, state.focus == Focus::CopyCode, theme);
    let title = "╭─ terminal ";
    let fill = box_width.saturating_sub(title.chars().count() + button.width() + 4);
    lines.push(Line::from(vec![
        Span::raw(margin.clone()),
        Span::styled(title, border),
        Span::styled(format!("{} ", "─".repeat(fill)), border),
        button,
        Span::styled(" ─╮", border),
    ]));

    for code in state.page.quick_start.lines() {
        let style = if code.starts_with('#') {
            Style::default().fg(theme.muted)
        } else {
            Style::default().fg(theme.foreground).bg(theme.code_background)
        };
        let text = pad_to_width(&truncate_to_width(code, inner), inner);

        lines.push(Line::from(vec![
            Span::raw(margin.clone()),
            Span::styled("│ ", border),
            Span::styled(text, style),
            Span::styled(" │", border),
        ]));
    }

    lines.push(Line::from(vec![
        Span::raw(margin),
        Span::styled(format!("╰{}╯", "─".repeat(box_width.saturating_sub(2))), border),
    ]));
    lines.push(Line::default());

    lines
}
