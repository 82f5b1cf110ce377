use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::block::{Position, Title},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::{border_style, scroll_offset, selected_style};
use crate::formatting::truncate;
use crate::interactive::app::{Focus, InteractiveApp};

pub fn draw_employees(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let focused = app.focus == Focus::Employees;
    let employees = &app.dashboard.employees;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Employees ({}) ", employees.len()))
        .title(
            Title::from(" [a] Add Employee ")
                .position(Position::Bottom)
                .alignment(Alignment::Right),
        )
        .border_style(border_style(focused));

    if employees.is_empty() {
        let empty = Paragraph::new("No employees record found")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Header row plus borders
    let visible = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(app.employee_index, visible);
    let name_width = (area.width as usize / 4).max(10);

    let header = Row::new(["Name", "Email", "Designation", "Team"]).style(
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = employees
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, employee)| {
            let style = if i == app.employee_index && focused {
                selected_style()
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                Cell::from(truncate(&employee.name, name_width)),
                Cell::from(truncate(&employee.email, name_width + 6)),
                Cell::from(truncate(&employee.designation, name_width)),
                Cell::from(truncate(&employee.team_name, name_width)).style(Style::default().fg(Color::LightBlue)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(25),
        Constraint::Percentage(32),
        Constraint::Percentage(23),
        Constraint::Percentage(20),
    ];
    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
