use ratatui::Frame;

use super::app::InteractiveApp;
use super::layout::{app_layout, dashboard_layout};
use super::notifications;
use super::panels::{activity, auth, employees, footer, header, teams};
use super::popups::draw_popup;
use crate::routes::Route;

/// Draw the current route, then notifications and any popup on top.
pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let layout = app_layout(frame.size(), app.visible_notification_count());

    header::draw_header(frame, layout.header, app);

    match app.route() {
        Route::Login | Route::Register => auth::draw_auth(frame, layout.main, app),
        Route::Dashboard => {
            let body = dashboard_layout(layout.main);
            header::draw_organization(frame, body.title, app);
            employees::draw_employees(frame, body.employees, app);
            teams::draw_teams(frame, body.teams, app);
            activity::draw_activity(frame, body.activity, app);
        }
    }

    notifications::draw(frame, layout.notifications, app);
    footer::draw_footer(frame, layout.footer, app);
    draw_popup(frame, frame.size(), app);
}
