use ratatui::style::{Color, Modifier, Style};

use crate::ui::builtin_themes::{find_builtin_theme, ThemeSpec};

#[derive(Debug, Clone)]
pub struct Theme {
    // Painted over the full frame before widgets land.
    pub background_color: Color,

    // Chrome
    pub title_style: Style,
    pub tab_active_style: Style,
    pub tab_inactive_style: Style,

    // Browse screens
    pub heading_style: Style,
    pub accent_style: Style,
    pub muted_style: Style,

    // Chat transcript
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub assistant_text_style: Style,
    pub notice_text_style: Style,
    pub thinking_indicator_style: Style,

    // Form + input
    pub error_text_style: Style,
    pub input_border_style: Style,
    pub input_title_style: Style,
    pub input_text_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        if let Some(spec) = find_builtin_theme("dark") {
            return Self::from_spec(&spec);
        }
        // Palette fallback in case the embedded spec ever goes missing.
        Theme {
            background_color: Color::Black,
            title_style: Style::default().fg(Color::Gray),
            tab_active_style: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive_style: Style::default().fg(Color::DarkGray),
            heading_style: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            accent_style: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            muted_style: Style::default().fg(Color::DarkGray),
            user_prefix_style: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Cyan),
            assistant_text_style: Style::default().fg(Color::White),
            notice_text_style: Style::default().fg(Color::DarkGray),
            thinking_indicator_style: Style::default().fg(Color::White),
            error_text_style: Style::default().fg(Color::Red),
            input_border_style: Style::default().fg(Color::Gray),
            input_title_style: Style::default().fg(Color::Gray),
            input_text_style: Style::default().fg(Color::White),
        }
    }

    pub fn light() -> Self {
        if let Some(spec) = find_builtin_theme("light") {
            return Self::from_spec(&spec);
        }
        Theme {
            background_color: Color::White,
            title_style: Style::default().fg(Color::DarkGray),
            tab_active_style: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive_style: Style::default().fg(Color::Gray),
            heading_style: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            accent_style: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            muted_style: Style::default().fg(Color::Gray),
            user_prefix_style: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Blue),
            assistant_text_style: Style::default().fg(Color::Black),
            notice_text_style: Style::default().fg(Color::Gray),
            thinking_indicator_style: Style::default().fg(Color::Black),
            error_text_style: Style::default().fg(Color::Red),
            input_border_style: Style::default().fg(Color::Black),
            input_title_style: Style::default().fg(Color::DarkGray),
            input_text_style: Style::default().fg(Color::Black),
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark_default(),
        }
    }

    pub fn from_spec(spec: &ThemeSpec) -> Self {
        let background_color = spec
            .background
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(Color::Black);

        Theme {
            background_color,
            title_style: parse_style(&spec.title),
            tab_active_style: parse_style(&spec.tab_active),
            tab_inactive_style: parse_style(&spec.tab_inactive),
            heading_style: parse_style(&spec.heading),
            accent_style: parse_style(&spec.accent),
            muted_style: parse_style(&spec.muted),
            user_prefix_style: parse_style(&spec.user_prefix),
            user_text_style: parse_style(&spec.user_text),
            assistant_text_style: parse_style(&spec.assistant_text),
            notice_text_style: parse_style(&spec.notice_text),
            thinking_indicator_style: parse_style(&spec.thinking_indicator),
            error_text_style: parse_style(&spec.error_text),
            input_border_style: parse_style(&spec.input_border),
            input_title_style: parse_style(&spec.input_title),
            input_text_style: parse_style(&spec.input_text),
        }
    }
}

/// The id the toggle switches to from `current`.
pub fn toggled_theme_id(current: &str) -> &'static str {
    if current.eq_ignore_ascii_case("dark") {
        "light"
    } else {
        "dark"
    }
}

fn parse_color(token: &str) -> Option<Color> {
    let lower = token.trim().to_ascii_lowercase();
    if let Some(color) = parse_hex_color(&lower) {
        return Some(color);
    }
    match lower.as_str() {
        "black" => Some(Color::Black),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "dark-gray" | "darkgray" => Some(Color::DarkGray),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "blue" => Some(Color::Blue),
        "cyan" => Some(Color::Cyan),
        "magenta" => Some(Color::Magenta),
        "yellow" => Some(Color::Yellow),
        "reset" => Some(Color::Reset),
        _ => None,
    }
}

fn parse_hex_color(token: &str) -> Option<Color> {
    let hex = token.strip_prefix('#')?;
    match hex.len() {
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1].repeat(2), 16).ok();
            Some(Color::Rgb(channel(0)?, channel(1)?, channel(2)?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

fn parse_style(spec: &Option<String>) -> Style {
    let mut style = Style::default();
    let Some(spec) = spec else {
        return style;
    };
    for token in spec.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if let Some(color) = parse_color(token) {
            style = style.fg(color);
        } else {
            match token {
                "bold" => style = style.add_modifier(Modifier::BOLD),
                "italic" => style = style.add_modifier(Modifier::ITALIC),
                "reversed" => style = style.add_modifier(Modifier::REVERSED),
                _ => {}
            }
        }
    }
    style
}
