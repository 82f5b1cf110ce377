use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::interactive::app::{InteractiveApp, Popup};
use crate::routes::Route;

pub fn draw_footer(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let help_text = match (app.popup, app.route()) {
        (Some(Popup::TeamForm), _) => " [Enter] Submit  [Esc] Cancel",
        (Some(Popup::EmployeeForm), _) => " [Tab/↑↓] Field  [←/→] Team  [Enter] Submit  [Esc] Cancel",
        (Some(Popup::Confirmation(_)), _) => " [y] Confirm  [n/Esc] Cancel",
        (Some(Popup::Help), _) => " [?/Esc] Close help",
        (None, Route::Login) => " [Tab] Next field  [Enter] Login  [F2] Register  [Esc] Quit",
        (None, Route::Register) => " [Tab] Next field  [Enter] Register  [F2] Login  [Esc] Quit",
        (None, Route::Dashboard) => {
            " [j/k] Move  [Tab] Panel  [a] Add employee  [t] Create team  [e] Edit  [d] Delete  [r] Refresh  [L] Logout  [?] Help  [q] Quit"
        }
    };

    let footer = Paragraph::new(help_text).style(Style::default().bg(Color::Rgb(20, 22, 30)).fg(Color::DarkGray));
    frame.render_widget(footer, area);
}
