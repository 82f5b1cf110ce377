use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::formatting::truncate;
use crate::interactive::app::InteractiveApp;
use crate::routes::Route;

/// Top bar: app name on the left, loading state and greeting on the right.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let width = area.width as usize;

    let left = vec![Span::styled(
        " Evallo",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    let mut right = Vec::new();
    if app.loading {
        right.push(Span::styled("loading… ", Style::default().fg(Color::Yellow)));
    }
    if app.route() == Route::Dashboard {
        if let Some(profile) = &app.dashboard.profile {
            right.push(Span::styled(
                format!("Welcome, {} ", truncate(&profile.name, width / 2)),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
        }
    }

    let right_len: usize = right.iter().map(|s| s.content.chars().count()).sum();
    let left_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(left_len + right_len);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.extend(right);

    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(20, 22, 30)));
    frame.render_widget(header, area);
}

/// "Organization - <name>" line above the dashboard panels.
pub fn draw_organization(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let org = app.dashboard.organization_name();
    let text = if org.is_empty() {
        " Organization".to_string()
    } else {
        format!(" Organization - {}", org)
    };
    let line = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(line, area);
}
