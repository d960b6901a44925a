use std::{fs, io, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::api::Role;

/// The locally persisted authentication state: token and role together.
/// Written on login, removed on logout, read fresh before every gated
/// navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

/// Storage backend for the session. File-backed in the real application,
/// swappable in tests.
pub trait SessionStore: std::fmt::Debug {
    /// Persist the token and role as one unit.
    fn set(&self, session: &Session) -> anyhow::Result<()>;
    /// Remove the stored session. Clearing an absent session is fine.
    fn clear(&self) -> anyhow::Result<()>;
    /// The current session, or `None` when unset or unreadable.
    fn read(&self) -> Option<Session>;
}

/// Session persisted as a small JSON document on disk.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn set(&self, session: &Session) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, body)?;
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn read(&self) -> Option<Session> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::debug!(path = %self.path.display(), error = %e, "session file unreadable");
                }
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                // A half-written or hand-edited file counts as logged out.
                tracing::debug!(path = %self.path.display(), error = %e, "session file malformed");
                None
            }
        }
    }
}
