pub mod activity;
pub mod employee;
pub mod responses;
pub mod team;
pub mod user;

// Re-export commonly used types
pub use activity::ActivityLog;
pub use employee::{Employee, EmployeePayload};
pub use responses::*;
pub use team::{MemberCount, Team, TeamPayload};
pub use user::{Credentials, Registration, UserProfile};

use serde::{Deserialize, Deserializer};

/// Counts arrive as JSON numbers or, from SQL aggregates, as numeric strings.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u32),
        Text(String),
        Missing(()),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        Count::Missing(()) => Ok(0),
    }
}

/// Identifiers that may be serialized as numbers or strings.
pub(crate) fn lenient_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(i64),
        Text(String),
    }

    Ok(Option::<Id>::deserialize(deserializer)?.map(|id| match id {
        Id::Number(n) => n.to_string(),
        Id::Text(s) => s,
    }))
}
