use serde::{Deserialize, Serialize};

use crate::core::api::error::ApiError;

/// Account role as stored in the session and on user records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account as returned by the server. Read-only on the client;
/// instances only exist by deserializing server payloads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "member_role")]
    pub role: Role,
    #[serde(skip)]
    pub(super) _guard: (),
}

fn member_role() -> Role {
    Role::Member
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct UsersEnvelope {
    pub users: Vec<User>,
}

pub trait UserRepository {
    /// Users with the member role, for the assignee selector. The server
    /// returns every account; filtering happens here.
    fn list_members(&self) -> impl Future<Output = Result<Vec<User>, ApiError>>;
}
