//! Integration tests for the HTTP API client against a mock server.
//!
//! Tests cover:
//! - Login success and failure, including the server's rejection message
//! - The bearer token being attached once set
//! - The user list being filtered to members
//! - Task create/update/delete request shapes
//! - Transport failures surfacing as client errors

mod common;

use common::*;
use mockito::Matcher;
use serde_json::json;
use time::macros::date;

#[tokio::test]
async fn test_login_returns_token_and_role() -> anyhow::Result<()> {
    // 1. Server accepts the credentials
    let (mut server, api) = mock_api().await;
    let mock = server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(json!({
            "email": "ada@example.com",
            "password": "hunter2",
        })))
        .with_status(200)
        .with_body(json!({"token": "jwt-abc", "role": "admin"}).to_string())
        .create_async()
        .await;

    // 2. Client gets a typed response back
    let response = api
        .login(&Credentials {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await?;
    assert_eq!(response.token, "jwt-abc");
    assert_eq!(response.role, Role::Admin);

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_login_failure_surfaces_server_message() -> anyhow::Result<()> {
    let (mut server, api) = mock_api().await;
    server
        .mock("POST", "/auth/login")
        .with_status(401)
        .with_body(json!({"message": "Invalid credentials"}).to_string())
        .create_async()
        .await;

    let result = api
        .login(&Credentials {
            email: "ada@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await;

    match result {
        Err(ApiError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("expected server rejection, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_bearer_token_attached_after_login() -> anyhow::Result<()> {
    // 1. The tasks endpoint only matches with the bearer header present
    let (mut server, mut api) = mock_api().await;
    let mock = server
        .mock("GET", "/tasks")
        .match_header("authorization", "Bearer jwt-abc")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    // 2. Client carries the token from then on
    api.set_token(Some("jwt-abc".to_string()));
    let tasks = api.list_tasks().await?;
    assert!(tasks.is_empty());

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_users_filtered_to_members() -> anyhow::Result<()> {
    let (mut server, api) = mock_api().await;
    server
        .mock("GET", "/auth/users")
        .with_status(200)
        .with_body(json!({"users": [admin_user_json(), member_user_json()]}).to_string())
        .create_async()
        .await;

    let members = api.list_members().await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, "u1");
    assert_eq!(members[0].role, Role::Member);
    Ok(())
}

#[tokio::test]
async fn test_create_task_posts_expected_payload() -> anyhow::Result<()> {
    // 1. Due date goes out date-only; no extra fields
    let (mut server, api) = mock_api().await;
    let mock = server
        .mock("POST", "/tasks")
        .match_body(Matcher::Json(json!({
            "title": "Ship release",
            "description": "cut and tag",
            "assignedTo": "u1",
            "dueDate": "2026-09-01",
        })))
        .with_status(201)
        .with_body(task_json("t1", "Ship release", "todo").to_string())
        .create_async()
        .await;

    let created = api
        .create_task(&NewTask {
            title: "Ship release".to_string(),
            description: "cut and tag".to_string(),
            assigned_to: "u1".to_string(),
            due_date: Some(date!(2026 - 09 - 01)),
        })
        .await?;

    // 2. The server's task comes back typed, timestamp normalized
    assert_eq!(created.id, "t1");
    assert_eq!(created.due_date, Some(date!(2026 - 09 - 01)));

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_create_task_without_due_date_omits_field() -> anyhow::Result<()> {
    let (mut server, api) = mock_api().await;
    let mock = server
        .mock("POST", "/tasks")
        .match_body(Matcher::Json(json!({
            "title": "Untimed",
            "description": "",
            "assignedTo": "u1",
        })))
        .with_status(201)
        .with_body(
            json!({
                "_id": "t9",
                "title": "Untimed",
                "description": "",
                "assignedTo": member_user_json(),
                "dueDate": null,
                "status": "todo",
            })
            .to_string(),
        )
        .create_async()
        .await;

    let created = api
        .create_task(&NewTask {
            title: "Untimed".to_string(),
            description: String::new(),
            assigned_to: "u1".to_string(),
            due_date: None,
        })
        .await?;
    assert_eq!(created.due_date, None);

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_status_change_sends_exactly_one_put() -> anyhow::Result<()> {
    let (mut server, api) = mock_api().await;
    let mock = server
        .mock("PUT", "/tasks/t1")
        .match_body(Matcher::Json(json!({"status": "done"})))
        .with_status(200)
        .with_body(task_json("t1", "Ship release", "done").to_string())
        .expect(1)
        .create_async()
        .await;

    let update = TaskUpdate {
        status: Some(TaskStatus::Done),
        ..TaskUpdate::default()
    };
    let updated = api.update_task("t1", &update).await?;
    assert_eq!(updated.status, TaskStatus::Done);

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_delete_task() -> anyhow::Result<()> {
    let (mut server, api) = mock_api().await;
    let mock = server
        .mock("DELETE", "/tasks/t1")
        .with_status(200)
        .with_body(json!({"message": "Task deleted"}).to_string())
        .expect(1)
        .create_async()
        .await;

    api.delete_task("t1").await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_register_posts_account_details() -> anyhow::Result<()> {
    let (mut server, api) = mock_api().await;
    let mock = server
        .mock("POST", "/auth/register")
        .match_body(Matcher::Json(json!({
            "name": "Nia New",
            "email": "nia@example.com",
            "password": "s3cret",
        })))
        .with_status(201)
        .with_body(json!({"message": "User registered"}).to_string())
        .create_async()
        .await;

    api.register(&Registration {
        name: "Nia New".to_string(),
        email: "nia@example.com".to_string(),
        password: "s3cret".to_string(),
    })
    .await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_transport_failure_is_not_a_server_rejection() {
    // Nothing listens here; the client reports a transport error
    let api = ApiClient::new("http://127.0.0.1:1").expect("URL should parse");
    let result = api.list_tasks().await;
    assert!(matches!(result, Err(ApiError::Http(_))));
}
