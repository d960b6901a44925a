use mockito::{Server, ServerGuard};
use serde_json::json;
use tempfile::TempDir;

use quicktask::{ApiClient, FileSessionStore, Role, Session, Task};

/// Starts a mock API server and a client pointed at it.
/// Returns both; the server guard must be kept alive for the mocks to serve.
pub async fn mock_api() -> (ServerGuard, ApiClient) {
    let server = Server::new_async().await;
    let api = ApiClient::new(&server.url()).expect("mock server URL should parse");
    (server, api)
}

/// Creates a session store backed by a file in a fresh temp directory.
/// Returns both the store and the directory (which must be kept alive).
pub fn temp_session_store() -> (FileSessionStore, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let store = FileSessionStore::new(dir.path().join("session.json"));
    (store, dir)
}

pub fn admin_session() -> Session {
    Session {
        token: "admin-token".to_string(),
        role: Role::Admin,
    }
}

pub fn member_session() -> Session {
    Session {
        token: "member-token".to_string(),
        role: Role::Member,
    }
}

/// A task payload shaped like the server's responses, assigned to the
/// standard test member with an RFC 3339 due date.
pub fn task_json(id: &str, title: &str, status: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "title": title,
        "description": "test task",
        "assignedTo": member_user_json(),
        "dueDate": "2026-09-01T00:00:00.000Z",
        "status": status,
    })
}

pub fn member_user_json() -> serde_json::Value {
    json!({
        "_id": "u1",
        "name": "Mia Member",
        "email": "mia@example.com",
        "role": "member",
    })
}

pub fn admin_user_json() -> serde_json::Value {
    json!({
        "_id": "u0",
        "name": "Ada Admin",
        "email": "ada@example.com",
        "role": "admin",
    })
}

/// Tasks only exist by deserializing server payloads; tests build them the
/// same way.
pub fn task_from_value(value: serde_json::Value) -> Task {
    serde_json::from_value(value).expect("task payload should deserialize")
}

pub fn tasks_from_values(values: Vec<serde_json::Value>) -> Vec<Task> {
    values.into_iter().map(task_from_value).collect()
}
