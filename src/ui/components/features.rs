use crate::app::AppState;
use crate::content::Feature;
use crate::ui::theme::Theme;
use crate::utils::unicode::{pad_to_width, wrap_text};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

const TWO_COLUMN_MIN_WIDTH: usize = 80;
const MAX_CONTENT_WIDTH: usize = 100;
const GUTTER: usize = 2;

type Row = Vec<Span<'static>>;

pub fn lines(state: &AppState, width: usize) -> Vec<Line<'static>> {
    let theme = &state.theme;
    let content_width = width.min(MAX_CONTENT_WIDTH);
    let margin = " ".repeat((width - content_width) / 2);

    let mut lines = vec![
        Line::styled(
            "Features",
            Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD),
        )
        .centered(),
        Line::default(),
    ];

    if content_width >= TWO_COLUMN_MIN_WIDTH {
        let column = (content_width - GUTTER) / 2;
        for pair in state.page.features.chunks(2) {
            let left = card(&pair[0], column, theme);
            let right = pair.get(1).map(|f| card(f, column, theme)).unwrap_or_default();

            for i in 0..left.len().max(right.len()) {
                let mut spans = vec![Span::raw(margin.clone())];
                spans.extend(cell(&left, i, column));
                spans.push(Span::raw(" ".repeat(GUTTER)));
                spans.extend(cell(&right, i, column));
                lines.push(Line::from(spans));
            }
        }
    } else {
        for feature in &state.page.features {
            for row in card(feature, content_width, theme) {
                let mut spans = vec![Span::raw(margin.clone())];
                spans.extend(row);
                lines.push(Line::from(spans));
            }
        }
    }

    lines.push(Line::default());
    lines
}

/// A bordered card exactly `width` cells wide.
fn card(feature: &Feature, width: usize, theme: &Theme) -> Vec<Row> {
    let border = Style::default().fg(theme.border);
    let inner = width.saturating_sub(4);
    let horizontal = "─".repeat(width.saturating_sub(2));

    let mut rows = vec![vec![Span::styled(format!("╭{horizontal}╮"), border)]];

    let title = format!("{} {}", feature.icon, feature.title);
    rows.push(framed(
        vec![Span::styled(
            pad_to_width(&title, inner),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )],
        border,
    ));

    for line in wrap_text(feature.description, inner) {
        rows.push(framed(
            vec![Span::styled(pad_to_width(&line, inner), Style::default().fg(theme.muted))],
            border,
        ));
    }

    rows.push(vec![Span::styled(format!("╰{horizontal}╯"), border)]);
    rows
}

fn framed(content: Row, border: Style) -> Row {
    let mut row = vec![Span::styled("│ ", border)];
    row.extend(content);
    row.push(Span::styled(" │", border));
    row
}

fn cell(card: &[Row], index: usize, width: usize) -> Row {
    match card.get(index) {
        Some(row) => row.clone(),
        None => vec![Span::raw(" ".repeat(width))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FEATURES;

    fn row_width(row: &Row) -> usize {
        row.iter().map(|s| s.width()).sum()
    }

    #[test]
    fn test_card_rows_have_fixed_width() {
        let theme = Theme::default();
        for feature in &FEATURES {
            let rows = card(feature, 40, &theme);
            assert!(rows.len() >= 4);
            for row in &rows {
                assert_eq!(row_width(row), 40);
            }
        }
    }

    #[test]
    fn test_card_wraps_description() {
        let theme = Theme::default();
        let narrow = card(&FEATURES[3], 30, &theme);
        let wide = card(&FEATURES[3], 90, &theme);
        assert!(narrow.len() > wide.len());
    }

    #[test]
    fn test_missing_cell_is_blank() {
        let blank = cell(&[], 0, 5);
        assert_eq!(row_width(&blank), 5);
    }
}
