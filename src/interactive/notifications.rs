use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::NOTIFICATION_TTL_SECS;
use crate::interactive::app::{InteractiveApp, NotificationKind};

/// Toast strip above the footer. Shows up to three live notifications.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    if area.height == 0 || app.visible_notification_count() == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .notifications
        .iter()
        .filter(|n| !n.dismissed)
        .take(3)
        .map(|n| {
            let (icon, color) = match n.kind {
                NotificationKind::Success => ("✓", Color::Green),
                NotificationKind::Info => ("i", Color::Blue),
            };
            let remaining = NOTIFICATION_TTL_SECS.saturating_sub(n.created_at.elapsed().as_secs());
            let countdown = format!("[{}s]", remaining);
            Line::from(vec![
                Span::styled(format!(" {} ", icon), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(n.message.clone(), Style::default().fg(color)),
                Span::styled(format!("  {}", countdown), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
