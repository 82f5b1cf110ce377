use std::fmt;

use serde::{Deserialize, Serialize};

use crate::formatting::parse_timestamp;

/// A human-readable entry of the organization's activity log.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(from = "RawLog")]
pub struct ActivityLog {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLog {
    Text(String),
    Entry {
        #[serde(alias = "action", alias = "log", alias = "description")]
        message: String,
        #[serde(default, alias = "timestamp", alias = "createdAt")]
        created_at: Option<String>,
    },
}

impl From<RawLog> for ActivityLog {
    fn from(raw: RawLog) -> Self {
        match raw {
            RawLog::Text(message) => ActivityLog { message, created_at: None },
            RawLog::Entry { message, created_at } => ActivityLog { message, created_at },
        }
    }
}

impl fmt::Display for ActivityLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.created_at {
            Some(ts) => match parse_timestamp(ts) {
                Some(parsed) => write!(f, "[{}] {}", parsed.format("%Y-%m-%d %H:%M"), self.message),
                None => write!(f, "[{}] {}", ts, self.message),
            },
            None => write!(f, "{}", self.message),
        }
    }
}
