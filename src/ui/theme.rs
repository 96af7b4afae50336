use crate::config::Config;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub muted: Color,
    pub border: Color,
    pub code_background: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            primary: Color::Cyan,
            muted: Color::Gray,
            border: Color::DarkGray,
            code_background: Color::Reset,
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::White,
            primary: Color::LightGreen,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            code_background: Color::Rgb(24, 24, 27),
            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            primary: Color::Blue,
            muted: Color::DarkGray,
            border: Color::Gray,
            code_background: Color::Rgb(244, 244, 245),
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.theme.as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        assert_eq!(Theme::from_config(&config).background, Color::Reset);

        config.theme = "light".to_string();
        assert_eq!(Theme::from_config(&config).background, Color::White);

        config.theme = "dark".to_string();
        assert_eq!(Theme::from_config(&config).background, Color::Black);

        config.theme = "neon".to_string();
        assert_eq!(Theme::from_config(&config).primary, Color::Cyan);
    }
}
