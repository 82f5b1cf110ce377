use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_email")]
    pub email: String,
    #[serde(rename = "employee_designation")]
    pub designation: String,
    #[serde(rename = "employee_platform", default)]
    pub team_name: String,
}

/// Body of the create and update employee requests.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EmployeePayload {
    #[serde(rename = "employeeName")]
    pub name: String,
    #[serde(rename = "employeeEmail")]
    pub email: String,
    #[serde(rename = "employeeDesignation")]
    pub designation: String,
    #[serde(rename = "employeePlatform")]
    pub team_name: String,
    #[serde(rename = "teamId")]
    pub team_id: i64,
    #[serde(rename = "employeeId", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
}
