use crate::app::AppState;
use crate::utils::unicode::{gap_between, truncate_to_width};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let nav_hint = "Tab focus  Enter activate  ? help  q quit";
    let version_text = format!("v{VERSION}");
    let right_content = format!("{nav_hint}  {version_text} ");

    let (message, has_message) = match &state.status_message {
        Some((message, _)) => (message.clone(), true),
        None => (state.focus.to_string(), false),
    };
    let left_content = format!(" {message}");

    let width = area.width as usize;
    let (left_content, right_content) = if gap_between(&left_content, &right_content, width) == 0 {
        (truncate_to_width(&left_content, width), String::new())
    } else {
        (left_content, right_content)
    };
    let padding = gap_between(&left_content, &right_content, width);

    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let message_style = if has_message {
        base_style.add_modifier(Modifier::BOLD)
    } else {
        base_style
    };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(left_content, message_style),
        Span::styled(" ".repeat(padding), base_style),
        Span::styled(right_content, base_style),
    ]));

    f.render_widget(status, area);
}
