use serde::Deserialize;

use super::{ActivityLog, Employee, MemberCount, Team, UserProfile};

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub user: UserProfile,
}

#[derive(Debug, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, Deserialize)]
pub struct TeamResponse {
    pub team: Team,
}

#[derive(Debug, Deserialize)]
pub struct EmployeesResponse {
    #[serde(default, alias = "employees")]
    pub employee: Vec<Employee>,
}

#[derive(Debug, Deserialize)]
pub struct EmployeeResponse {
    pub employee: Employee,
}

#[derive(Debug, Deserialize)]
pub struct MemberCountsResponse {
    #[serde(default, alias = "employeeTeam", alias = "teams")]
    pub counts: Vec<MemberCount>,
}

#[derive(Debug, Deserialize)]
pub struct LogsResponse {
    #[serde(default)]
    pub logs: Vec<ActivityLog>,
}
