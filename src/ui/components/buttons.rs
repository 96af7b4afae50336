use crate::copy::CopyControl;
use crate::ui::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

/// Copy icon while idle, check icon for the acknowledgment window.
pub fn copy_button(control: &CopyControl, focused: bool, theme: &Theme) -> Span<'static> {
    let state = control.state();
    let text = format!("[{} {}]", state.icon(), state);

    let style = if state.is_acknowledged() {
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };

    Span::styled(text, focus_style(style, focused))
}

pub fn link_button(label: &str, focused: bool, theme: &Theme) -> Span<'static> {
    let style = Style::default().fg(theme.foreground);
    Span::styled(format!("[ ↗ {label} ]"), focus_style(style, focused))
}

fn focus_style(style: Style, focused: bool) -> Style {
    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::MemoryClipboard;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_copy_button_follows_state() {
        let clipboard = Arc::new(MemoryClipboard::default());
        let mut control = CopyControl::new("Copy code", "x", clipboard).unwrap();
        let theme = Theme::default();

        let idle = copy_button(&control, false, &theme);
        assert_eq!(idle.content, "[⧉ copy]");
        assert_eq!(idle.style.fg, Some(theme.muted));

        control.activate().await.unwrap();
        let copied = copy_button(&control, true, &theme);
        assert_eq!(copied.content, "[✓ copied]");
        assert_eq!(copied.style.fg, Some(theme.primary));
        assert!(copied.style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_link_button() {
        let theme = Theme::default();
        let span = link_button("GitHub", false, &theme);
        assert_eq!(span.content, "[ ↗ GitHub ]");
        assert!(!span.style.add_modifier.contains(Modifier::REVERSED));
    }
}
