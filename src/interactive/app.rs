use std::time::{Duration, Instant};

use crate::constants::NOTIFICATION_TTL_SECS;
use crate::context::AppContext;
use crate::dashboard::Dashboard;
use crate::forms::{FormState, LoginFields, RegisterFields};
use crate::logging::{log_error, log_info};
use crate::models::{Employee, Team};
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Employees,
    Teams,
    Activity,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Employees => Focus::Teams,
            Focus::Teams => Focus::Activity,
            Focus::Activity => Focus::Employees,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Employees => Focus::Activity,
            Focus::Teams => Focus::Employees,
            Focus::Activity => Focus::Teams,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTeam(i64),
    DeleteEmployee(i64),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    TeamForm,
    EmployeeForm,
    Confirmation(ConfirmAction),
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub dismissed: bool,
}

/// Everything the terminal dashboard draws from.
pub struct InteractiveApp {
    pub context: AppContext,
    pub dashboard: Dashboard,
    pub login_form: FormState<LoginFields>,
    pub register_form: FormState<RegisterFields>,
    pub focus: Focus,
    pub employee_index: usize,
    pub team_index: usize,
    pub log_scroll: usize,
    pub popup: Option<Popup>,
    pub notifications: Vec<Notification>,
    pub should_quit: bool,
    pub loading: bool,
    /// Set when the dashboard screen needs its initial load.
    pub needs_mount: bool,
}

impl InteractiveApp {
    pub fn new(context: AppContext) -> Self {
        let needs_mount = context.route() == Route::Dashboard;
        let mut login_form = FormState::new();
        login_form.open_create();
        let mut register_form = FormState::new();
        register_form.open_create();

        Self {
            context,
            dashboard: Dashboard::new(),
            login_form,
            register_form,
            focus: Focus::Employees,
            employee_index: 0,
            team_index: 0,
            log_scroll: 0,
            popup: None,
            notifications: Vec::new(),
            should_quit: false,
            loading: false,
            needs_mount,
        }
    }

    pub fn route(&self) -> Route {
        self.context.route()
    }

    /// Navigate through the route guards, resetting per-screen state on the way.
    pub fn go_to(&mut self, requested: Route) {
        let previous = self.context.route();
        let landed = self.context.navigate(requested);
        if landed == Route::Dashboard && previous != Route::Dashboard {
            self.needs_mount = true;
        }
        match landed {
            Route::Login => self.login_form.open_create(),
            Route::Register => self.register_form.open_create(),
            Route::Dashboard => {}
        }
        self.popup = None;
    }

    /// Initial dashboard load. Failures are logged by the dashboard.
    pub async fn mount_dashboard(&mut self) {
        self.needs_mount = false;
        self.loading = true;

        let Some(client) = self.context.verified_client().ok().cloned() else {
            self.loading = false;
            self.go_to(Route::Login);
            return;
        };
        self.dashboard.mount(&client).await;

        if let Some(profile) = self.dashboard.profile.clone() {
            if let Err(e) = self.context.set_user(profile) {
                log_error(&format!("Failed to persist profile: {}", e));
            }
        }
        self.clamp_selection();
        self.loading = false;
    }

    /// Sign out and reset dashboard state.
    pub fn logout(&mut self) {
        if let Err(e) = self.context.logout() {
            log_error(&format!("Logout failed: {}", e));
        }
        self.dashboard = Dashboard::new();
        self.employee_index = 0;
        self.team_index = 0;
        self.log_scroll = 0;
        self.focus = Focus::Employees;
        self.go_to(Route::Login);
        self.notify(NotificationKind::Info, "Logged out");
        log_info("Returned to login after logout");
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        self.dashboard.employees.get(self.employee_index)
    }

    pub fn selected_team(&self) -> Option<&Team> {
        self.dashboard.teams.get(self.team_index)
    }

    pub fn move_selection(&mut self, down: bool) {
        match self.focus {
            Focus::Employees => {
                self.employee_index = step_index(self.employee_index, self.dashboard.employees.len(), down);
            }
            Focus::Teams => {
                self.team_index = step_index(self.team_index, self.dashboard.teams.len(), down);
            }
            Focus::Activity => {
                if down {
                    let max = self.dashboard.logs.len().saturating_sub(1);
                    self.log_scroll = (self.log_scroll + 1).min(max);
                } else {
                    self.log_scroll = self.log_scroll.saturating_sub(1);
                }
            }
        }
    }

    /// Keep selections inside the lists after they change size.
    pub fn clamp_selection(&mut self) {
        self.employee_index = self
            .employee_index
            .min(self.dashboard.employees.len().saturating_sub(1));
        self.team_index = self.team_index.min(self.dashboard.teams.len().saturating_sub(1));
        self.log_scroll = self.log_scroll.min(self.dashboard.logs.len().saturating_sub(1));
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notifications.push(Notification {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            dismissed: false,
        });
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message);
    }

    pub fn dismiss_notification(&mut self) {
        if let Some(n) = self.notifications.iter_mut().find(|n| !n.dismissed) {
            n.dismissed = true;
        }
    }

    /// Drop dismissed and expired notifications.
    pub fn prune_notifications(&mut self) {
        let ttl = Duration::from_secs(NOTIFICATION_TTL_SECS);
        self.notifications
            .retain(|n| !n.dismissed && n.created_at.elapsed() < ttl);
    }

    pub fn visible_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.dismissed).count()
    }
}

fn step_index(current: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if down {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::AppContextBuilder;

    #[test]
    fn step_index_wraps() {
        assert_eq!(step_index(0, 3, true), 1);
        assert_eq!(step_index(2, 3, true), 0);
        assert_eq!(step_index(0, 3, false), 2);
        assert_eq!(step_index(0, 0, true), 0);
    }

    fn test_app(dir: &tempfile::TempDir) -> InteractiveApp {
        let context = AppContextBuilder::new()
            .with_session_file(dir.path().join("session.json"))
            .with_api_url("http://127.0.0.1:9")
            .build()
            .unwrap();
        InteractiveApp::new(context)
    }

    #[test]
    fn starts_on_login_without_session() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);
        assert_eq!(app.route(), Route::Login);
        assert!(!app.needs_mount);
    }

    #[test]
    fn expired_and_dismissed_notifications_are_pruned() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.notify_success("fresh");
        app.notify(NotificationKind::Info, "dismissed");
        app.notifications[1].dismissed = true;
        if let Some(old) = Instant::now().checked_sub(Duration::from_secs(NOTIFICATION_TTL_SECS + 1)) {
            app.notify_success("old");
            app.notifications[2].created_at = old;
        }

        app.prune_notifications();
        assert_eq!(app.notifications.len(), 1);
        assert_eq!(app.notifications[0].message, "fresh");
    }

    #[test]
    fn dismiss_hides_oldest_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.notify_success("first");
        app.notify_success("second");
        app.dismiss_notification();
        assert_eq!(app.visible_notification_count(), 1);
        assert!(app.notifications[0].dismissed);
    }

    #[test]
    fn focus_cycles_both_ways() {
        assert_eq!(Focus::Employees.next(), Focus::Teams);
        assert_eq!(Focus::Activity.next(), Focus::Employees);
        assert_eq!(Focus::Employees.prev(), Focus::Activity);
    }
}
