//! Tests for the task list snapshot and re-fetch-after-write flow.
//!
//! Tests cover:
//! - Client-side status filtering over the snapshot
//! - The filter persisting across snapshot replacements
//! - A failed refresh leaving the previous snapshot intact
//! - Create/delete/status-change each reflected by a full re-fetch

mod common;

use common::*;
use serde_json::json;

fn sample_tasks() -> Vec<Task> {
    tasks_from_values(vec![
        task_json("t1", "Write docs", "todo"),
        task_json("t2", "Fix login", "in progress"),
        task_json("t3", "Cut release", "done"),
        task_json("t4", "Triage bugs", "todo"),
    ])
}

#[test]
fn test_filter_shows_only_matching_status() {
    let mut list = TaskList::default();
    list.replace(sample_tasks());

    list.set_filter(StatusFilter::Only(TaskStatus::Todo));
    let visible: Vec<_> = list.visible().map(|t| t.id.as_str()).collect();
    assert_eq!(visible, ["t1", "t4"]);
}

#[test]
fn test_all_restores_full_list() {
    let mut list = TaskList::default();
    list.replace(sample_tasks());

    list.set_filter(StatusFilter::Only(TaskStatus::Done));
    assert_eq!(list.visible().count(), 1);

    list.set_filter(StatusFilter::All);
    assert_eq!(list.visible().count(), 4);
}

#[test]
fn test_filter_persists_across_replace() {
    let mut list = TaskList::default();
    list.set_filter(StatusFilter::Only(TaskStatus::Todo));

    list.replace(sample_tasks());
    assert_eq!(list.filter(), StatusFilter::Only(TaskStatus::Todo));
    assert_eq!(list.visible().count(), 2);
}

#[tokio::test]
async fn test_failed_refresh_leaves_snapshot_intact() -> anyhow::Result<()> {
    // 1. A good snapshot is on screen
    let mut list = TaskList::default();
    list.replace(sample_tasks());

    // 2. The refresh fails; replace is never called
    let (mut server, api) = mock_api().await;
    server
        .mock("GET", "/tasks")
        .with_status(500)
        .with_body(json!({"message": "boom"}).to_string())
        .create_async()
        .await;
    let result = api.list_tasks().await;
    assert!(result.is_err());

    // 3. The stale snapshot is still displayed
    assert_eq!(list.len(), 4);
    Ok(())
}

#[tokio::test]
async fn test_created_task_appears_once_after_refetch() -> anyhow::Result<()> {
    let (mut server, api) = mock_api().await;
    let create = server
        .mock("POST", "/tasks")
        .with_status(201)
        .with_body(task_json("t5", "New work", "todo").to_string())
        .expect(1)
        .create_async()
        .await;
    server
        .mock("GET", "/tasks")
        .with_status(200)
        .with_body(
            json!([
                task_json("t1", "Write docs", "todo"),
                task_json("t5", "New work", "todo"),
            ])
            .to_string(),
        )
        .create_async()
        .await;

    // 1. Create, discarding the returned task
    api.create_task(&NewTask {
        title: "New work".to_string(),
        description: String::new(),
        assigned_to: "u1".to_string(),
        due_date: None,
    })
    .await?;

    // 2. Re-fetch and replace the snapshot
    let mut list = TaskList::default();
    list.replace(api.list_tasks().await?);

    // 3. With no filter, the new task shows up exactly once
    let count = list.visible().filter(|t| t.id == "t5").count();
    assert_eq!(count, 1);

    create.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_deleted_task_absent_after_refetch() -> anyhow::Result<()> {
    let (mut server, api) = mock_api().await;
    server
        .mock("DELETE", "/tasks/t2")
        .with_status(200)
        .with_body(json!({"message": "Task deleted"}).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/tasks")
        .with_status(200)
        .with_body(json!([task_json("t1", "Write docs", "todo")]).to_string())
        .create_async()
        .await;

    let mut list = TaskList::default();
    list.replace(sample_tasks());

    api.delete_task("t2").await?;
    list.replace(api.list_tasks().await?);

    assert!(list.visible().all(|t| t.id != "t2"));
    Ok(())
}

#[tokio::test]
async fn test_status_change_reflected_after_refetch() -> anyhow::Result<()> {
    let (mut server, api) = mock_api().await;
    server
        .mock("PUT", "/tasks/t1")
        .with_status(200)
        .with_body(task_json("t1", "Write docs", "done").to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/tasks")
        .with_status(200)
        .with_body(json!([task_json("t1", "Write docs", "done")]).to_string())
        .create_async()
        .await;

    let update = TaskUpdate {
        status: Some(TaskStatus::Done),
        ..TaskUpdate::default()
    };
    api.update_task("t1", &update).await?;

    let mut list = TaskList::default();
    list.replace(api.list_tasks().await?);
    let task = list.visible().next().expect("task should be present");
    assert_eq!(task.status, TaskStatus::Done);
    Ok(())
}
