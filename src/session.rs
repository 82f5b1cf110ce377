use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::session_file_path;
use crate::error::DashboardResult;
use crate::logging::{log_info, log_warn};
use crate::models::UserProfile;

/// Token and profile of the signed-in user.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub user: UserProfile,
}

impl Session {
    pub fn is_empty(&self) -> bool {
        self.token.is_empty() && self.user.is_empty()
    }
}

/// File-backed session storage.
///
/// The session starts empty (or as last persisted), is populated on login and
/// cleared on logout. Every write goes straight to disk so a restart keeps it.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    session: Session,
}

impl SessionStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let session = read_session(&path).unwrap_or_default();
        Self { path, session }
    }

    pub fn open_default() -> DashboardResult<Self> {
        Ok(Self::open(session_file_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> &UserProfile {
        &self.session.user
    }

    /// In-memory token, if any.
    pub fn token(&self) -> Option<&str> {
        Some(self.session.token.as_str()).filter(|t| !t.is_empty())
    }

    /// Token as currently persisted, re-read from storage.
    pub fn persisted_token(&self) -> Option<String> {
        read_session(&self.path)
            .map(|session| session.token)
            .filter(|t| !t.is_empty())
    }

    /// True iff a non-empty token is present in persisted storage.
    pub fn is_authenticated(&self) -> bool {
        self.persisted_token().is_some()
    }

    pub fn set_token(&mut self, token: impl Into<String>) -> DashboardResult<()> {
        self.session.token = token.into();
        self.persist()
    }

    pub fn set_user(&mut self, user: UserProfile) -> DashboardResult<()> {
        self.session.user = user;
        self.persist()
    }

    /// Drop the token and profile, in memory and on disk.
    pub fn clear(&mut self) -> DashboardResult<()> {
        self.session = Session::default();
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log_info("Session cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&self) -> DashboardResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(&self.session)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

fn read_session(path: &Path) -> Option<Session> {
    let contents = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(session) => Some(session),
        Err(e) => {
            log_warn(&format!("Ignoring unreadable session file {}: {}", path.display(), e));
            None
        }
    }
}
