use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::border_style;
use crate::formatting::format_relative_time;
use crate::interactive::app::{Focus, InteractiveApp};

pub fn draw_activity(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let focused = app.focus == Focus::Activity;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Activity Log ")
        .border_style(border_style(focused));

    let logs = &app.dashboard.logs;
    if logs.is_empty() {
        let empty = Paragraph::new("No activity yet")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = logs
        .iter()
        .skip(app.log_scroll)
        .map(|entry| {
            let mut spans = Vec::new();
            if let Some(at) = &entry.created_at {
                spans.push(Span::styled(
                    format!("{:>8} ", format_relative_time(at)),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::styled(entry.message.clone(), Style::default().fg(Color::Gray)));
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}
