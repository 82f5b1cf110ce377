use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::layout::centered_popup;

const DASHBOARD_KEYS: &[(&str, &str)] = &[
    ("j/k", "Move selection"),
    ("Tab", "Next panel"),
    ("a", "Add employee"),
    ("t", "Create team"),
    ("e/Enter", "Edit selected"),
    ("d/Del", "Delete selected"),
    ("r", "Refresh"),
    ("x", "Dismiss notification"),
    ("L", "Logout"),
    ("q", "Quit"),
];

const FORM_KEYS: &[(&str, &str)] = &[
    ("Tab/↓", "Next field"),
    ("S-Tab/↑", "Previous field"),
    ("←/→", "Change team"),
    ("Enter", "Submit"),
    ("Esc", "Cancel"),
];

/// Keyboard shortcuts for the dashboard and its forms.
pub fn draw(frame: &mut Frame, area: Rect) {
    let rows = DASHBOARD_KEYS.len().max(FORM_KEYS.len()) as u16;
    let popup_area = centered_popup(64, rows + 5, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let header_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{:<30}", "Dashboard"), header_style),
        Span::styled("Forms", header_style),
    ])];
    for i in 0..rows as usize {
        let mut spans = Vec::new();
        match DASHBOARD_KEYS.get(i) {
            Some((key, desc)) => {
                spans.push(Span::styled(format!("{:<9}", key), key_style));
                spans.push(Span::styled(format!("{:<21}", desc), desc_style));
            }
            None => spans.push(Span::raw(" ".repeat(30))),
        }
        if let Some((key, desc)) = FORM_KEYS.get(i) {
            spans.push(Span::styled(format!("{:<9}", key), key_style));
            spans.push(Span::styled(*desc, desc_style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines),
        Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height.saturating_sub(1)),
    );

    let footer = Paragraph::new(Span::styled("Press ? or Esc to close", Style::default().fg(Color::DarkGray)));
    frame.render_widget(
        footer,
        Rect::new(inner.x + 1, inner.y + inner.height.saturating_sub(1), inner.width, 1),
    );
}
