pub mod activity;
pub mod auth;
pub mod employees;
pub mod footer;
pub mod header;
pub mod teams;

use ratatui::style::{Color, Modifier, Style};

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn selected_style() -> Style {
    Style::default()
        .bg(Color::Rgb(30, 35, 50))
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// First row to draw so `selected` stays visible in `height` rows.
pub fn scroll_offset(selected: usize, height: usize) -> usize {
    if height > 0 && selected >= height {
        selected - height + 1
    } else {
        0
    }
}
