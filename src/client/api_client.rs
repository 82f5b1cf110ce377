use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::constants::*;
use crate::error::{DashboardError, DashboardResult};
use crate::logging::log_debug;
use crate::models::*;

/// REST client for the organization API. Holds the bearer token once logged in.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> DashboardResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.set_token(Some(token.into()));
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.is_empty());
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> DashboardResult<RequestBuilder> {
        let token = self.token.as_ref().ok_or(DashboardError::NotAuthenticated)?;
        Ok(builder.bearer_auth(token))
    }

    async fn send(
        &self,
        request: RequestBuilder,
        endpoint: &str,
        expected: &[StatusCode],
    ) -> DashboardResult<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();
        log_debug(&format!("{} -> {}", endpoint, status));

        if !expected.contains(&status) {
            return Err(DashboardError::UnexpectedStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
        expected: &[StatusCode],
    ) -> DashboardResult<T> {
        let response = self.send(request, endpoint, expected).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn login(&self, credentials: &Credentials) -> DashboardResult<String> {
        let request = self.client.post(self.url(LOGIN_PATH)).json(credentials);
        let data: LoginResponse = self.send_json(request, LOGIN_PATH, &[StatusCode::OK]).await?;

        if data.token.is_empty() {
            return Err(DashboardError::ApiError("Login response carried an empty token".to_string()));
        }
        Ok(data.token)
    }

    pub async fn register(&self, registration: &Registration) -> DashboardResult<()> {
        let request = self.client.post(self.url(REGISTER_PATH)).json(registration);
        self.send(request, REGISTER_PATH, &[StatusCode::CREATED, StatusCode::OK]).await?;
        Ok(())
    }

    pub async fn get_profile(&self) -> DashboardResult<UserProfile> {
        let request = self.authorized(self.client.get(self.url(PROFILE_PATH)))?;
        let data: ProfileResponse = self.send_json(request, PROFILE_PATH, &[StatusCode::OK]).await?;
        Ok(data.user)
    }

    pub async fn get_teams(&self) -> DashboardResult<Vec<Team>> {
        let request = self.authorized(self.client.get(self.url(TEAMS_PATH)))?;
        let data: TeamsResponse = self.send_json(request, TEAMS_PATH, &[StatusCode::OK]).await?;
        Ok(data.teams)
    }

    pub async fn get_team(&self, team_id: i64) -> DashboardResult<Team> {
        let path = format!("{}/{}", TEAMS_PATH, team_id);
        let request = self.authorized(self.client.get(self.url(&path)))?;
        let data: TeamResponse = self.send_json(request, &path, &[StatusCode::OK]).await?;
        Ok(data.team)
    }

    pub async fn create_team(&self, team_name: &str) -> DashboardResult<()> {
        let payload = TeamPayload {
            team_name: team_name.to_string(),
            team_id: None,
        };
        let request = self.authorized(self.client.post(self.url(CREATE_TEAM_PATH)).json(&payload))?;
        self.send(request, CREATE_TEAM_PATH, &[StatusCode::CREATED]).await?;
        Ok(())
    }

    pub async fn update_team(&self, team_id: i64, team_name: &str) -> DashboardResult<()> {
        let payload = TeamPayload {
            team_name: team_name.to_string(),
            team_id: Some(team_id),
        };
        let request = self.authorized(self.client.put(self.url(UPDATE_TEAM_PATH)).json(&payload))?;
        self.send(request, UPDATE_TEAM_PATH, &[StatusCode::OK]).await?;
        Ok(())
    }

    pub async fn delete_team(&self, team_id: i64) -> DashboardResult<()> {
        let path = format!("{}/{}", TEAMS_PATH, team_id);
        let request = self.authorized(self.client.delete(self.url(&path)))?;
        self.send(request, &path, &[StatusCode::OK]).await?;
        Ok(())
    }

    pub async fn get_employees(&self) -> DashboardResult<Vec<Employee>> {
        let request = self.authorized(self.client.get(self.url(EMPLOYEES_PATH)))?;
        let data: EmployeesResponse = self.send_json(request, EMPLOYEES_PATH, &[StatusCode::OK]).await?;
        Ok(data.employee)
    }

    pub async fn get_employee(&self, employee_id: i64) -> DashboardResult<Employee> {
        let path = format!("{}/{}", EMPLOYEES_PATH, employee_id);
        let request = self.authorized(self.client.get(self.url(&path)))?;
        let data: EmployeeResponse = self.send_json(request, &path, &[StatusCode::OK]).await?;
        Ok(data.employee)
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> DashboardResult<()> {
        let request = self.authorized(self.client.post(self.url(CREATE_EMPLOYEE_PATH)).json(payload))?;
        self.send(request, CREATE_EMPLOYEE_PATH, &[StatusCode::CREATED]).await?;
        Ok(())
    }

    pub async fn update_employee(&self, payload: &EmployeePayload) -> DashboardResult<()> {
        if payload.employee_id.is_none() {
            return Err(DashboardError::InvalidInput("Employee update requires an employee id".to_string()));
        }
        let request = self.authorized(self.client.put(self.url(UPDATE_EMPLOYEE_PATH)).json(payload))?;
        self.send(request, UPDATE_EMPLOYEE_PATH, &[StatusCode::OK]).await?;
        Ok(())
    }

    pub async fn delete_employee(&self, employee_id: i64) -> DashboardResult<()> {
        let path = format!("{}/{}", EMPLOYEES_PATH, employee_id);
        let request = self.authorized(self.client.delete(self.url(&path)))?;
        self.send(request, &path, &[StatusCode::OK]).await?;
        Ok(())
    }

    pub async fn get_member_counts(&self) -> DashboardResult<Vec<MemberCount>> {
        let request = self.authorized(self.client.get(self.url(MEMBER_COUNTS_PATH)))?;
        let data: MemberCountsResponse =
            self.send_json(request, MEMBER_COUNTS_PATH, &[StatusCode::OK]).await?;
        Ok(data.counts)
    }

    pub async fn get_logs(&self) -> DashboardResult<Vec<ActivityLog>> {
        let request = self.authorized(self.client.get(self.url(LOGS_PATH)))?;
        let data: LogsResponse = self.send_json(request, LOGS_PATH, &[StatusCode::OK]).await?;
        Ok(data.logs)
    }
}
