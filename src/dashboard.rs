use crate::client::ApiClient;
use crate::error::{DashboardError, DashboardResult};
use crate::forms::{EmployeeFields, FieldErrors, FormFields, FormMode, FormState, TeamFields};
use crate::logging::{log_error, log_info};
use crate::models::{ActivityLog, Employee, EmployeePayload, MemberCount, Team, UserProfile};

impl From<&Team> for TeamFields {
    fn from(team: &Team) -> Self {
        TeamFields {
            team_name: team.name.clone(),
        }
    }
}

impl From<&Employee> for EmployeeFields {
    fn from(employee: &Employee) -> Self {
        EmployeeFields {
            name: employee.name.clone(),
            email: employee.email.clone(),
            designation: employee.designation.clone(),
            team_name: employee.team_name.clone(),
        }
    }
}

/// Server state mirrored by the dashboard plus the two entity forms.
///
/// Lists only ever hold what the API last returned: every mutation is followed
/// by a re-fetch of teams, employees and the activity log.
#[derive(Debug, Default)]
pub struct Dashboard {
    pub profile: Option<UserProfile>,
    pub teams: Vec<Team>,
    pub employees: Vec<Employee>,
    pub member_counts: Vec<MemberCount>,
    pub logs: Vec<ActivityLog>,
    pub team_form: FormState<TeamFields>,
    pub employee_form: FormState<EmployeeFields>,
}

/// Slices that failed to load during a mount or refresh.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub failures: Vec<(&'static str, DashboardError)>,
}

impl FetchReport {
    fn record<T>(&mut self, what: &'static str, result: DashboardResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                log_error(&format!("Error fetching {}: {}", what, e));
                self.failures.push((what, e));
                None
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed(&self, what: &str) -> bool {
        self.failures.iter().any(|(name, _)| *name == what)
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial load: profile, logs, teams, employees and member counts, all independent.
    pub async fn mount(&mut self, client: &ApiClient) -> FetchReport {
        let (profile, logs, teams, employees, counts) = tokio::join!(
            client.get_profile(),
            client.get_logs(),
            client.get_teams(),
            client.get_employees(),
            client.get_member_counts(),
        );

        let mut report = FetchReport::default();
        if let Some(profile) = report.record("profile", profile) {
            self.profile = Some(profile);
        }
        if let Some(logs) = report.record("logs", logs) {
            self.logs = logs;
        }
        if let Some(counts) = report.record("member counts", counts) {
            self.member_counts = counts;
        }
        if let Some(teams) = report.record("teams", teams) {
            self.teams = teams;
        }
        if let Some(employees) = report.record("employees", employees) {
            self.employees = employees;
        }
        Team::apply_member_counts(&mut self.teams, &self.member_counts);

        log_info(&format!(
            "Dashboard loaded: {} teams, {} employees, {} log entries",
            self.teams.len(),
            self.employees.len(),
            self.logs.len()
        ));
        report
    }

    /// Team list together with fresh member counts.
    pub async fn refresh_teams(&mut self, client: &ApiClient) -> DashboardResult<()> {
        let (teams, counts) = tokio::join!(client.get_teams(), client.get_member_counts());
        let mut teams = teams?;
        match counts {
            Ok(counts) => self.member_counts = counts,
            Err(e) => log_error(&format!("Error fetching member counts: {}", e)),
        }
        Team::apply_member_counts(&mut teams, &self.member_counts);
        self.teams = teams;
        Ok(())
    }

    pub async fn refresh_employees(&mut self, client: &ApiClient) -> DashboardResult<()> {
        self.employees = client.get_employees().await?;
        Ok(())
    }

    pub async fn refresh_logs(&mut self, client: &ApiClient) -> DashboardResult<()> {
        self.logs = client.get_logs().await?;
        Ok(())
    }

    /// Re-fetch the three views a mutation can change.
    pub async fn refresh_after_mutation(&mut self, client: &ApiClient) -> FetchReport {
        let (teams, counts, employees, logs) = tokio::join!(
            client.get_teams(),
            client.get_member_counts(),
            client.get_employees(),
            client.get_logs(),
        );

        let mut report = FetchReport::default();
        if let Some(counts) = report.record("member counts", counts) {
            self.member_counts = counts;
        }
        if let Some(teams) = report.record("teams", teams) {
            self.teams = teams;
        }
        Team::apply_member_counts(&mut self.teams, &self.member_counts);
        if let Some(employees) = report.record("employees", employees) {
            self.employees = employees;
        }
        if let Some(logs) = report.record("logs", logs) {
            self.logs = logs;
        }
        report
    }

    pub fn organization_name(&self) -> &str {
        self.profile
            .as_ref()
            .and_then(|p| p.org_name.as_deref())
            .unwrap_or("")
    }

    // Teams

    pub fn open_create_team(&mut self) {
        self.team_form.open_create();
    }

    /// Enter edit mode for a team and load its current values from the API.
    pub async fn open_edit_team(&mut self, client: &ApiClient, team_id: i64) -> DashboardResult<()> {
        self.team_form.open_edit(team_id);
        let team = client.get_team(team_id).await.inspect_err(|_| {
            self.team_form.loading = false;
        })?;
        self.team_form.populate(TeamFields::from(&team));
        Ok(())
    }

    /// Validate and send the team form. Returns the success message.
    pub async fn submit_team(&mut self, client: &ApiClient) -> DashboardResult<String> {
        self.team_form.validate()?;
        let name = self.team_form.fields.team_name.trim().to_string();

        let message = match self.team_form.mode {
            FormMode::Create => {
                client.create_team(&name).await?;
                "Team created successfully"
            }
            FormMode::Edit(team_id) => {
                client.update_team(team_id, &name).await?;
                "Team updated successfully"
            }
        };

        self.team_form.complete_submit();
        self.refresh_after_mutation(client).await;
        Ok(message.to_string())
    }

    pub async fn delete_team(&mut self, client: &ApiClient, team_id: i64) -> DashboardResult<String> {
        client.delete_team(team_id).await?;
        if self.team_form.edit_target() == Some(team_id) {
            self.team_form.reset_target();
        }
        self.refresh_after_mutation(client).await;
        Ok("Team deleted successfully".to_string())
    }

    // Employees

    pub fn open_create_employee(&mut self) {
        self.employee_form.open_create();
        if let Some(first) = self.teams.first() {
            self.employee_form.fields.team_name = first.name.clone();
        }
    }

    pub async fn open_edit_employee(&mut self, client: &ApiClient, employee_id: i64) -> DashboardResult<()> {
        self.employee_form.open_edit(employee_id);
        let employee = client.get_employee(employee_id).await.inspect_err(|_| {
            self.employee_form.loading = false;
        })?;
        self.employee_form.populate(EmployeeFields::from(&employee));
        Ok(())
    }

    /// Step the employee form's team through the loaded team names.
    pub fn cycle_employee_team(&mut self, step: isize) {
        if self.teams.is_empty() {
            return;
        }
        let len = self.teams.len() as isize;
        let current = self
            .teams
            .iter()
            .position(|t| t.name == self.employee_form.fields.team_name)
            .map(|i| i as isize)
            .unwrap_or(-1);
        let next = if current < 0 && step < 0 {
            len - 1
        } else {
            (current + step).rem_euclid(len)
        };
        self.employee_form.fields.team_name = self.teams[next as usize].name.clone();
    }

    /// Validate, resolve the team name to its id, then create or update.
    pub async fn submit_employee(&mut self, client: &ApiClient) -> DashboardResult<String> {
        self.employee_form.validate()?;

        let fields = self.employee_form.fields.clone();
        let Some(team) = Team::find_by_name(&self.teams, &fields.team_name) else {
            let mut errors = FieldErrors::new();
            let rule = &EmployeeFields::rules()[EmployeeFields::TEAM_FIELD];
            errors.insert(rule.key, rule.required_message);
            self.employee_form.errors = errors.clone();
            return Err(DashboardError::Validation(errors));
        };

        let mut payload = EmployeePayload {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            designation: fields.designation.trim().to_string(),
            team_name: team.name.clone(),
            team_id: team.id,
            employee_id: None,
        };

        let message = match self.employee_form.mode {
            FormMode::Create => {
                client.create_employee(&payload).await?;
                "Employee created successfully"
            }
            FormMode::Edit(employee_id) => {
                payload.employee_id = Some(employee_id);
                client.update_employee(&payload).await?;
                "Employee updated successfully"
            }
        };

        self.employee_form.complete_submit();
        self.refresh_after_mutation(client).await;
        Ok(message.to_string())
    }

    pub async fn delete_employee(&mut self, client: &ApiClient, employee_id: i64) -> DashboardResult<String> {
        client.delete_employee(employee_id).await?;
        if self.employee_form.edit_target() == Some(employee_id) {
            self.employee_form.reset_target();
        }
        self.refresh_after_mutation(client).await;
        Ok("Employee deleted successfully".to_string())
    }
}
