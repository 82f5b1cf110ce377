use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::forms::{FormFields, FormState};
use crate::interactive::app::InteractiveApp;
use crate::interactive::layout::centered_popup;
use crate::interactive::popups::form::{draw_fields, form_height};
use crate::routes::Route;

/// Login or register screen, centered in the main area.
pub fn draw_auth(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    match app.route() {
        Route::Register => draw_screen(
            frame,
            area,
            &app.register_form,
            "Create your account",
            "Register",
            "Already have an account? Press F2 to log in",
        ),
        _ => draw_screen(
            frame,
            area,
            &app.login_form,
            "Login to your account",
            "Login",
            "Don't have an account? Press F2 to register",
        ),
    }
}

fn draw_screen<F: FormFields>(
    frame: &mut Frame,
    area: Rect,
    form: &FormState<F>,
    heading: &str,
    submit_label: &str,
    switch_hint: &str,
) {
    let height = form_height::<F>() + 6;
    let box_area = centered_popup(56, height, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", heading))
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let fields_area = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), form_height::<F>());
    draw_fields(frame, fields_area, form, None);

    let button_y = fields_area.y + fields_area.height + 1;
    if button_y < inner.y + inner.height {
        let button = Paragraph::new(Line::from(Span::styled(
            format!("[ {} ]", submit_label),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(button, Rect::new(inner.x, button_y, inner.width, 1));
    }

    let hint_y = inner.y + inner.height.saturating_sub(1);
    let hint = Paragraph::new(Span::styled(switch_hint, Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center);
    frame.render_widget(hint, Rect::new(inner.x, hint_y, inner.width, 1));
}
