use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::interactive::app::{ConfirmAction, InteractiveApp, Popup};
use crate::interactive::layout::centered_popup;

pub fn confirm_message(action: ConfirmAction, app: &InteractiveApp) -> String {
    match action {
        ConfirmAction::DeleteTeam(id) => {
            let name = app.dashboard.teams.iter().find(|t| t.id == id).map(|t| t.name.as_str());
            format!("Delete team \"{}\"?", name.unwrap_or("this team"))
        }
        ConfirmAction::DeleteEmployee(id) => {
            let name = app.dashboard.employees.iter().find(|e| e.id == id).map(|e| e.name.as_str());
            format!("Delete employee \"{}\"?", name.unwrap_or("this employee"))
        }
        ConfirmAction::Logout => "Log out of the dashboard?".to_string(),
    }
}

/// Yes/no dialog guarding deletes and logout.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let Some(Popup::Confirmation(action)) = app.popup else {
        return;
    };

    let popup_area = centered_popup(48, 6, area);
    frame.render_widget(Clear, popup_area);

    let accent = match action {
        ConfirmAction::Logout => Color::Yellow,
        ConfirmAction::DeleteTeam(_) | ConfirmAction::DeleteEmployee(_) => Color::Red,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm ")
        .border_style(Style::default().fg(accent));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let message = Paragraph::new(Span::styled(
        confirm_message(action, app),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(message, Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 2));

    let key = |k: &'static str, color: Color| Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD));
    let dim = |t: &'static str| Span::styled(t, Style::default().fg(Color::DarkGray));
    let options = Paragraph::new(Line::from(vec![
        key("y", Color::Green),
        dim(" confirm    "),
        key("n", Color::Red),
        dim(" cancel"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(
        options,
        Rect::new(inner.x, inner.y + inner.height.saturating_sub(1), inner.width, 1),
    );
}
