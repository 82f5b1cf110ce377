use std::io;
use std::panic;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::{ConfirmAction, Focus, InteractiveApp, Popup};
use super::event::{Event, EventHandler};
use super::keys::{map_key, Action};
use crate::client::ApiClient;
use crate::context::AppContext;
use crate::error::{DashboardError, DashboardResult};
use crate::forms::EmployeeFields;
use crate::logging::{log_debug, log_error, log_info, log_panic_info};
use crate::routes::Route;

pub async fn run_interactive_mode(context: AppContext) -> DashboardResult<()> {
    log_info("Starting interactive mode");

    // Restore the terminal before the default hook prints the panic
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        log_panic_info(info);
        default_hook(info);
    }));

    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(terminal_error)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(terminal_error)?;
    log_debug("Terminal initialized");

    let mut app = InteractiveApp::new(context);
    let events = EventHandler::new(100);
    let result = event_loop(&mut terminal, &mut app, &events).await;

    log_info("Exiting interactive mode");
    disable_raw_mode().map_err(terminal_error)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut InteractiveApp,
    events: &EventHandler,
) -> DashboardResult<()> {
    loop {
        app.prune_notifications();
        terminal.draw(|f| super::ui::draw(f, app)).map_err(terminal_error)?;

        if app.needs_mount {
            app.mount_dashboard().await;
            continue;
        }

        let event = events
            .recv()
            .map_err(|e| DashboardError::TerminalError(format!("Event channel closed: {}", e)))?;
        match event {
            Event::Key(key) => {
                let action = map_key(key, app.route(), app.popup);
                if action != Action::None {
                    log_debug(&format!("Key {:?} -> {:?} on {}", key.code, action, app.route()));
                }
                apply_action(app, action).await;
            }
            Event::Resize | Event::Tick => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn terminal_error(e: io::Error) -> DashboardError {
    DashboardError::TerminalError(e.to_string())
}

/// A client carrying the session, or a redirect to login when there is none.
fn session_client(app: &mut InteractiveApp) -> Option<ApiClient> {
    let client = app.context.verified_client().ok().cloned();
    if client.is_none() {
        app.go_to(Route::Login);
    }
    client
}

/// Network failures are logged; validation failures already sit on the form.
fn report(result: DashboardResult<String>, app: &mut InteractiveApp) {
    match result {
        Ok(message) => app.notify_success(message),
        Err(e) if e.is_validation() => log_debug(&format!("Form rejected: {}", e)),
        Err(DashboardError::NotAuthenticated) => app.go_to(Route::Login),
        Err(e) => log_error(&format!("Request failed: {}", e)),
    }
}

pub async fn apply_action(app: &mut InteractiveApp, action: Action) {
    if action == Action::Quit {
        app.should_quit = true;
        return;
    }

    match app.popup {
        Some(Popup::TeamForm) => team_form_action(app, action).await,
        Some(Popup::EmployeeForm) => employee_form_action(app, action).await,
        Some(Popup::Confirmation(pending)) => confirm_action(app, pending, action).await,
        Some(Popup::Help) => {
            if action == Action::Cancel {
                app.popup = None;
            }
        }
        None => match app.route() {
            Route::Login | Route::Register => auth_action(app, action).await,
            Route::Dashboard => dashboard_action(app, action).await,
        },
    }
}

async fn auth_action(app: &mut InteractiveApp, action: Action) {
    let on_login = app.route() == Route::Login;
    match action {
        Action::SwitchAuthScreen => {
            app.go_to(if on_login { Route::Register } else { Route::Login });
        }
        Action::Submit if on_login => {
            if app.context.login(&mut app.login_form).await.is_ok() {
                app.notify_success("Login successfully");
                app.needs_mount = true;
                app.go_to(Route::Dashboard);
            }
        }
        Action::Submit => {
            if app.context.register(&mut app.register_form).await.is_ok() {
                app.notify_success("Registered successfully. Please log in.");
                app.go_to(Route::Login);
            }
        }
        Action::NextField if on_login => app.login_form.next_field(),
        Action::NextField => app.register_form.next_field(),
        Action::PrevField if on_login => app.login_form.prev_field(),
        Action::PrevField => app.register_form.prev_field(),
        Action::TypeChar(c) if on_login => app.login_form.type_char(c),
        Action::TypeChar(c) => app.register_form.type_char(c),
        Action::Backspace if on_login => app.login_form.backspace(),
        Action::Backspace => app.register_form.backspace(),
        _ => {}
    }
}

async fn dashboard_action(app: &mut InteractiveApp, action: Action) {
    match action {
        Action::MoveDown => app.move_selection(true),
        Action::MoveUp => app.move_selection(false),
        Action::NextPanel => app.focus = app.focus.next(),
        Action::PrevPanel => app.focus = app.focus.prev(),
        Action::NewTeam => {
            app.dashboard.open_create_team();
            app.popup = Some(Popup::TeamForm);
        }
        Action::NewEmployee => {
            app.dashboard.open_create_employee();
            app.popup = Some(Popup::EmployeeForm);
        }
        Action::EditSelected => edit_selected(app).await,
        Action::DeleteSelected => {
            let pending = match app.focus {
                Focus::Employees => app.selected_employee().map(|e| ConfirmAction::DeleteEmployee(e.id)),
                Focus::Teams => app.selected_team().map(|t| ConfirmAction::DeleteTeam(t.id)),
                Focus::Activity => None,
            };
            if let Some(pending) = pending {
                app.popup = Some(Popup::Confirmation(pending));
            }
        }
        Action::Refresh => app.needs_mount = true,
        Action::Logout => app.popup = Some(Popup::Confirmation(ConfirmAction::Logout)),
        Action::DismissNotification => app.dismiss_notification(),
        Action::Help => app.popup = Some(Popup::Help),
        _ => {}
    }
}

async fn edit_selected(app: &mut InteractiveApp) {
    match app.focus {
        Focus::Employees => {
            let Some(id) = app.selected_employee().map(|e| e.id) else { return };
            let Some(client) = session_client(app) else { return };
            app.popup = Some(Popup::EmployeeForm);
            if let Err(e) = app.dashboard.open_edit_employee(&client, id).await {
                log_error(&format!("Failed to load employee {}: {}", id, e));
                app.dashboard.employee_form.close();
                app.popup = None;
            }
        }
        Focus::Teams => {
            let Some(id) = app.selected_team().map(|t| t.id) else { return };
            let Some(client) = session_client(app) else { return };
            app.popup = Some(Popup::TeamForm);
            if let Err(e) = app.dashboard.open_edit_team(&client, id).await {
                log_error(&format!("Failed to load team {}: {}", id, e));
                app.dashboard.team_form.close();
                app.popup = None;
            }
        }
        Focus::Activity => {}
    }
}

async fn team_form_action(app: &mut InteractiveApp, action: Action) {
    let form = &mut app.dashboard.team_form;
    match action {
        Action::Cancel => {
            form.close();
            app.popup = None;
        }
        Action::TypeChar(c) => form.type_char(c),
        Action::Backspace => form.backspace(),
        Action::NextField => form.next_field(),
        Action::PrevField => form.prev_field(),
        Action::Submit => {
            let Some(client) = session_client(app) else { return };
            let result = app.dashboard.submit_team(&client).await;
            if result.is_ok() {
                app.popup = None;
                app.clamp_selection();
            }
            report(result, app);
        }
        _ => {}
    }
}

async fn employee_form_action(app: &mut InteractiveApp, action: Action) {
    let form = &mut app.dashboard.employee_form;
    match action {
        Action::Cancel => {
            form.close();
            app.popup = None;
        }
        Action::TypeChar(c) => form.type_char(c),
        Action::Backspace => form.backspace(),
        Action::NextField => form.next_field(),
        Action::PrevField => form.prev_field(),
        Action::CycleChoice(step) => {
            if form.active_field == EmployeeFields::TEAM_FIELD {
                app.dashboard.cycle_employee_team(step);
            }
        }
        Action::Submit => {
            let Some(client) = session_client(app) else { return };
            let result = app.dashboard.submit_employee(&client).await;
            if result.is_ok() {
                app.popup = None;
                app.clamp_selection();
            }
            report(result, app);
        }
        _ => {}
    }
}

async fn confirm_action(app: &mut InteractiveApp, pending: ConfirmAction, action: Action) {
    match action {
        Action::Cancel => app.popup = None,
        Action::Confirm => {
            app.popup = None;
            if pending == ConfirmAction::Logout {
                app.logout();
                return;
            }
            let Some(client) = session_client(app) else { return };
            let result = match pending {
                ConfirmAction::DeleteTeam(id) => app.dashboard.delete_team(&client, id).await,
                ConfirmAction::DeleteEmployee(id) => app.dashboard.delete_employee(&client, id).await,
                ConfirmAction::Logout => return,
            };
            app.clamp_selection();
            report(result, app);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::AppContextBuilder;
    use crate::models::Team;
    use crate::session::SessionStore;

    fn signed_in_app(dir: &tempfile::TempDir) -> InteractiveApp {
        let path = dir.path().join("session.json");
        SessionStore::open(&path).set_token("token-1").unwrap();
        let context = AppContextBuilder::new()
            .with_session_file(path)
            .with_api_url("http://127.0.0.1:9")
            .build()
            .unwrap();
        let mut app = InteractiveApp::new(context);
        app.needs_mount = false;
        app
    }

    #[tokio::test]
    async fn new_team_opens_create_form() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = signed_in_app(&dir);

        apply_action(&mut app, Action::NewTeam).await;
        assert_eq!(app.popup, Some(Popup::TeamForm));
        assert_eq!(app.dashboard.team_form.title(), "Create Team");

        apply_action(&mut app, Action::TypeChar('Q')).await;
        assert_eq!(app.dashboard.team_form.fields.team_name, "Q");

        apply_action(&mut app, Action::Cancel).await;
        assert_eq!(app.popup, None);
        assert!(!app.dashboard.team_form.open);
    }

    #[tokio::test]
    async fn empty_team_submit_stays_open_with_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = signed_in_app(&dir);

        apply_action(&mut app, Action::NewTeam).await;
        apply_action(&mut app, Action::Submit).await;
        assert_eq!(app.popup, Some(Popup::TeamForm));
        assert_eq!(app.dashboard.team_form.error_for(0), Some("Please enter team name"));
        assert!(app.notifications.is_empty());
    }

    #[tokio::test]
    async fn new_employee_cycles_through_teams() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = signed_in_app(&dir);
        app.dashboard.teams = vec![
            Team { id: 1, name: "Alpha".into(), member_count: 0 },
            Team { id: 2, name: "Beta".into(), member_count: 0 },
        ];

        apply_action(&mut app, Action::NewEmployee).await;
        assert_eq!(app.dashboard.employee_form.fields.team_name, "Alpha");

        app.dashboard.employee_form.active_field = EmployeeFields::TEAM_FIELD;
        apply_action(&mut app, Action::CycleChoice(1)).await;
        assert_eq!(app.dashboard.employee_form.fields.team_name, "Beta");
        apply_action(&mut app, Action::TypeChar('z')).await;
        assert_eq!(app.dashboard.employee_form.fields.team_name, "Beta");
    }

    #[tokio::test]
    async fn delete_asks_for_confirmation_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = signed_in_app(&dir);
        app.dashboard.teams = vec![Team { id: 7, name: "Ops".into(), member_count: 2 }];
        app.focus = Focus::Teams;

        apply_action(&mut app, Action::DeleteSelected).await;
        assert_eq!(app.popup, Some(Popup::Confirmation(ConfirmAction::DeleteTeam(7))));

        apply_action(&mut app, Action::Cancel).await;
        assert_eq!(app.popup, None);
        assert_eq!(app.dashboard.teams.len(), 1);
    }

    #[tokio::test]
    async fn confirmed_logout_returns_to_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = signed_in_app(&dir);

        apply_action(&mut app, Action::Logout).await;
        apply_action(&mut app, Action::Confirm).await;
        assert_eq!(app.route(), Route::Login);
        assert!(!app.context.is_authenticated());
    }

    #[tokio::test]
    async fn auth_screens_switch_with_f2() {
        let dir = tempfile::tempdir().unwrap();
        let context = AppContextBuilder::new()
            .with_session_file(dir.path().join("session.json"))
            .with_api_url("http://127.0.0.1:9")
            .build()
            .unwrap();
        let mut app = InteractiveApp::new(context);

        apply_action(&mut app, Action::SwitchAuthScreen).await;
        assert_eq!(app.route(), Route::Register);
        apply_action(&mut app, Action::TypeChar('a')).await;
        assert_eq!(app.register_form.fields.name, "a");

        apply_action(&mut app, Action::Submit).await;
        assert_eq!(app.route(), Route::Register);
        assert!(app.register_form.errors.get("email").is_some());
    }
}
