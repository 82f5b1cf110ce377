use serde::{Deserialize, Serialize};

use super::lenient_count;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Team {
    pub id: i64,
    #[serde(rename = "team_name")]
    pub name: String,
    #[serde(rename = "teams_count", default, deserialize_with = "lenient_count")]
    pub member_count: u32,
}

/// Body of the create and update team requests.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TeamPayload {
    #[serde(rename = "teamName")]
    pub team_name: String,
    #[serde(rename = "teamId", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
}

/// One row of the employee/team membership endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MemberCount {
    #[serde(alias = "teamId", alias = "id")]
    pub team_id: i64,
    #[serde(default, alias = "teamName")]
    pub team_name: Option<String>,
    #[serde(
        default,
        alias = "members",
        alias = "employee_count",
        alias = "teams_count",
        deserialize_with = "lenient_count"
    )]
    pub count: u32,
}

impl Team {
    /// Overwrite member counts from the membership endpoint. Teams without a row keep theirs.
    pub fn apply_member_counts(teams: &mut [Team], counts: &[MemberCount]) {
        for team in teams.iter_mut() {
            if let Some(row) = counts.iter().find(|c| c.team_id == team.id) {
                team.member_count = row.count;
            }
        }
    }

    /// First team whose name matches exactly.
    pub fn find_by_name<'a>(teams: &'a [Team], name: &str) -> Option<&'a Team> {
        teams.iter().find(|team| team.name == name)
    }
}
