use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::block::{Position, Title},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::{border_style, scroll_offset, selected_style};
use crate::interactive::app::{Focus, InteractiveApp};

pub fn draw_teams(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let focused = app.focus == Focus::Teams;
    let teams = &app.dashboard.teams;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Teams ({}) ", teams.len()))
        .title(
            Title::from(" [t] Create Team ")
                .position(Position::Bottom)
                .alignment(Alignment::Right),
        )
        .border_style(border_style(focused));

    if teams.is_empty() {
        let empty = Paragraph::new("No teams found")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Each team takes two rows
    let visible = (area.height.saturating_sub(2) / 2) as usize;
    let offset = scroll_offset(app.team_index, visible);

    let items: Vec<ListItem> = teams
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, team)| {
            let name_style = if i == app.team_index && focused {
                selected_style()
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };
            ListItem::new(vec![
                Line::from(Span::styled(format!(" {}", team.name), name_style)),
                Line::from(Span::styled(
                    format!("   Members: {}", team.member_count),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                )),
            ])
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
