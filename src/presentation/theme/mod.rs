//! Color theme derived from the configured accent color.

mod palette;

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub button: Style,
    pub button_focused: Style,
    pub button_disabled: Style,
    pub label: Style,
    pub key: Style,
    pub dimmed: Style,
    pub row: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(Color::Cyan)
    }
}

impl Theme {
    #[must_use]
    pub fn new(accent_color: &str) -> Self {
        Self::from_color(parse_color(accent_color))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let accent_bg = palette::tint(accent, 0.12, 0.5);

        Self {
            accent,
            button: Style::default().fg(accent).bg(accent_bg),
            button_focused: Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            button_disabled: Style::default().fg(Color::DarkGray),
            label: Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            key: Style::default().fg(Color::White).bg(accent_bg),
            dimmed: Style::default().fg(Color::DarkGray),
            row: Style::default().fg(Color::Reset),
        }
    }
}

fn parse_color(s: &str) -> Color {
    let s = s.trim();
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if let Some(hex) = s.strip_prefix('#')
        && let Some((r, g, b)) = parse_hex_color(hex)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => {
            tracing::warn!(color = s, "Unrecognized accent color, using cyan");
            Color::Cyan
        }
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.is_ascii() {
        return None;
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Red", Color::Red ; "named")]
    #[test_case("magenta", Color::Magenta ; "lowercase_named")]
    #[test_case("#FF8800", Color::Rgb(255, 136, 0) ; "long_hex")]
    #[test_case("#0f0", Color::Rgb(0, 255, 0) ; "short_hex")]
    #[test_case("Orange", Color::Indexed(208) ; "orange_alias")]
    #[test_case("not-a-color", Color::Cyan ; "fallback")]
    fn test_parse_color(input: &str, expected: Color) {
        assert_eq!(parse_color(input), expected);
    }

    #[test]
    fn test_theme_uses_accent() {
        let theme = Theme::new("Yellow");

        assert_eq!(theme.accent, Color::Yellow);
        assert_eq!(theme.button_focused.bg, Some(Color::Yellow));
        assert_eq!(theme.label.bg, Some(Color::Yellow));
    }
}
