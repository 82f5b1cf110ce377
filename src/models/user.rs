use serde::{Deserialize, Serialize};

use super::lenient_opt_id;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_id", skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl UserProfile {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}
