use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` so it fits in `max_width` terminal cells, marking the cut with `…`.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Number of blank cells between two strings so that together they span `width`.
pub fn gap_between(left: &str, right: &str, width: usize) -> usize {
    width.saturating_sub(left.width() + right.width())
}

/// Greedy word wrap into lines of at most `max_width` cells.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_line.is_empty() {
            current_line = word.to_string();
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(current_line);
            current_line = word.to_string();
            current_width = word_width;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Right-pad `s` with spaces to exactly `width` cells (no-op if already wider).
pub fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate_to_width("hello", 5), "hello");
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_cuts() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("hello", 1), "…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // each CJK char is two cells wide
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("Connect to OpenAI, Anthropic, Google", 12),
            vec!["Connect to", "OpenAI,", "Anthropic,", "Google"]
        );
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("unbreakableword", 5), vec!["unbreakableword"]);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
    }

    #[test]
    fn test_gap_between() {
        assert_eq!(gap_between("ab", "cd", 10), 6);
        assert_eq!(gap_between("abcdef", "ghijkl", 10), 0);
    }
}
