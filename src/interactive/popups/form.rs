use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::forms::{FieldKind, FormFields, FormState};
use crate::interactive::app::{InteractiveApp, Popup};
use crate::interactive::layout::centered_popup;

/// Rows per field: label, value, error.
const FIELD_ROWS: u16 = 3;

pub fn form_height<F: FormFields>() -> u16 {
    F::field_count() as u16 * FIELD_ROWS
}

/// Team and employee forms share one popup; title and button follow the form mode.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    match app.popup {
        Some(Popup::TeamForm) => draw_popup(frame, area, &app.dashboard.team_form, None),
        Some(Popup::EmployeeForm) => {
            let hint = app.dashboard.teams.is_empty().then_some("No teams yet. Create a team first.");
            draw_popup(frame, area, &app.dashboard.employee_form, hint)
        }
        _ => {}
    }
}

fn draw_popup<F: FormFields>(frame: &mut Frame, area: Rect, form: &FormState<F>, hint: Option<&str>) {
    let height = form_height::<F>() + 5;
    let popup_area = centered_popup(60, height, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", form.title()))
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if form.loading {
        let loading = Paragraph::new("Loading current values…")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(loading, Rect::new(inner.x, inner.y + 1, inner.width, 1));
        return;
    }

    let fields_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), form_height::<F>());
    draw_fields(frame, fields_area, form, hint);

    let button_y = inner.y + inner.height.saturating_sub(1);
    let button = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("[Enter] {}", form.mode.verb()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  [Esc] Cancel", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(button, Rect::new(inner.x, button_y, inner.width, 1));
}

/// Render each field as label, value and inline error. Secrets are masked.
pub fn draw_fields<F: FormFields>(frame: &mut Frame, area: Rect, form: &FormState<F>, choice_hint: Option<&str>) {
    for (index, rule) in F::rules().iter().enumerate() {
        let y = area.y + index as u16 * FIELD_ROWS;
        if y + 1 >= area.y + area.height {
            break;
        }
        let active = index == form.active_field;

        let label_style = if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(rule.label, label_style)),
            Rect::new(area.x, y, area.width, 1),
        );

        let raw = form.fields.value(index);
        let value_line = match rule.kind {
            FieldKind::Secret => value_spans("*".repeat(raw.chars().count()), active),
            FieldKind::Choice => {
                let shown = if raw.is_empty() {
                    choice_hint.unwrap_or("Select a team").to_string()
                } else {
                    raw.to_string()
                };
                Line::from(vec![
                    Span::styled("< ", Style::default().fg(Color::DarkGray)),
                    Span::styled(shown, Style::default().fg(Color::LightBlue)),
                    Span::styled(" >", Style::default().fg(Color::DarkGray)),
                ])
            }
            FieldKind::Text | FieldKind::Email => value_spans(raw.to_string(), active),
        };
        frame.render_widget(Paragraph::new(value_line), Rect::new(area.x, y + 1, area.width, 1));

        if let Some(error) = form.error_for(index) {
            if y + 2 < area.y + area.height {
                frame.render_widget(
                    Paragraph::new(Span::styled(error, Style::default().fg(Color::Red))),
                    Rect::new(area.x, y + 2, area.width, 1),
                );
            }
        }
    }
}

fn value_spans(text: String, active: bool) -> Line<'static> {
    let mut spans = vec![Span::styled("> ", Style::default().fg(Color::DarkGray)), Span::raw(text)];
    if active {
        spans.push(Span::styled(
            "_",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}
