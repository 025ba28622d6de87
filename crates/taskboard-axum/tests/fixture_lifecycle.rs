//! End-to-end checks of the test fixture lifecycle: store provisioning,
//! sessions, per-case resets and schema teardown, driven through the HTTP
//! client the way API tests use them.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use taskboard_core::{NewTask, Task};
use taskboard_db::{SCHEMA, TestHarness};

use common::client::{TestClient, with_client};

#[tokio::test]
async fn full_run_lifecycle() {
    let harness = TestHarness::start().await.unwrap();
    let path = harness.path().to_path_buf();
    assert!(path.exists());

    // Fresh run starts empty
    let mut session = harness.sessions().open().await.unwrap();
    assert_eq!(session.count_tasks().await.unwrap(), 0);
    session.close().await.unwrap();

    // Committed session writes are visible to the app
    let mut session = harness.sessions().open().await.unwrap();
    let seeded = session
        .insert_task(&NewTask::new("seeded directly"))
        .await
        .unwrap();
    session.commit().await.unwrap();

    let client = TestClient::new(&harness);
    let listed: Vec<Task> = client.get("/api/tasks").await.json();
    assert_eq!(listed, vec![seeded]);
    drop(client);

    // Reset empties the table
    harness.reset_data().await.unwrap();
    let mut session = harness.sessions().open().await.unwrap();
    assert_eq!(session.count_tasks().await.unwrap(), 0);
    session.close().await.unwrap();

    // App writes are visible to sessions
    with_client(&harness, |client, h| async move {
        let response = client
            .post_json("/api/tasks", &json!({ "title": "via http" }))
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        let created: Task = response.json();

        let mut session = h.sessions().open().await?;
        assert_eq!(session.list_tasks().await?, vec![created]);
        session.close().await?;
        Ok(())
    })
    .await
    .unwrap();

    // After teardown the table is gone
    assert!(harness.drop_schema().await.unwrap());
    assert_eq!(SCHEMA.missing_tables(harness.pool()).await.unwrap(), vec!["tasks"]);

    let mut session = harness.sessions().open().await.unwrap();
    let err = session.count_tasks().await.unwrap_err();
    assert!(format!("{err:#}").contains("no such table"), "got {err:#}");
    drop(session);

    let client = TestClient::new(&harness);
    let response = client.get("/api/tasks").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    drop(client);

    harness.finish().await.unwrap();
    assert!(!path.exists());
}

#[tokio::test]
async fn rows_never_leak_between_cases() {
    let harness = TestHarness::start().await.unwrap();

    for round in 0..3 {
        let seen = with_client(&harness, |client, _| async move {
            let before: Vec<Task> = client.get("/api/tasks").await.json();

            for n in 0..=round {
                let response = client
                    .post_json("/api/tasks", &json!({ "title": format!("task {n}") }))
                    .await;
                assert_eq!(response.status, StatusCode::CREATED);
            }
            Ok(before.len())
        })
        .await
        .unwrap();

        assert_eq!(seen, 0, "round {round} started with leftover rows");
    }

    harness.finish().await.unwrap();
}

#[tokio::test]
async fn committed_session_rows_are_cleared_for_next_case() {
    let harness = TestHarness::start().await.unwrap();

    with_client(&harness, |_, h| async move {
        let mut session = h.sessions().open().await?;
        session.insert_task(&NewTask::new("one")).await?;
        session.insert_task(&NewTask::new("two")).await?;
        session.commit().await?;
        Ok(())
    })
    .await
    .unwrap();

    let listed = with_client(&harness, |client, _| async move {
        Ok(client.get("/api/tasks").await.json::<Vec<Task>>())
    })
    .await
    .unwrap();
    assert!(listed.is_empty());

    harness.finish().await.unwrap();
}

#[tokio::test]
async fn uncommitted_session_writes_stay_invisible() {
    let harness = TestHarness::start().await.unwrap();

    with_client(&harness, |client, h| async move {
        let mut session = h.sessions().open().await?;
        session.insert_task(&NewTask::new("never committed")).await?;
        session.close().await?;

        let listed: Vec<Task> = client.get("/api/tasks").await.json();
        assert!(listed.is_empty());
        Ok(())
    })
    .await
    .unwrap();

    harness.finish().await.unwrap();
}

#[tokio::test]
async fn each_case_gets_its_own_app() {
    let harness = TestHarness::start().await.unwrap();

    // A client kept from an earlier case keeps working against the same
    // store, independently of the client the next case builds.
    let first = with_client(&harness, |client, _| async move { Ok(client) })
        .await
        .unwrap();

    with_client(&harness, |client, _| async move {
        let created: Task = client
            .post_json("/api/tasks", &json!({ "title": "shared store" }))
            .await
            .json();

        let seen: Vec<Task> = first.get("/api/tasks").await.json();
        assert_eq!(seen, vec![created]);
        Ok(())
    })
    .await
    .unwrap();

    harness.finish().await.unwrap();
}

#[tokio::test]
async fn separate_runs_use_separate_stores() {
    let first = TestHarness::start().await.unwrap();
    let second = TestHarness::start().await.unwrap();
    assert_ne!(first.path(), second.path());

    let mut session = first.sessions().open().await.unwrap();
    session.insert_task(&NewTask::new("only in first")).await.unwrap();
    session.commit().await.unwrap();

    let listed: Vec<Task> = TestClient::new(&second).get("/api/tasks").await.json();
    assert!(listed.is_empty());

    first.finish().await.unwrap();
    second.finish().await.unwrap();
}

#[tokio::test]
async fn health_survives_schema_teardown() {
    let harness = TestHarness::start().await.unwrap();
    harness.drop_schema().await.unwrap();

    let response = TestClient::new(&harness).get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "OK");

    harness.finish().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn store_is_shared_across_worker_threads() {
    let harness = TestHarness::start().await.unwrap();
    harness.reset_data().await.unwrap();
    let client = TestClient::new(&harness);

    let handles: Vec<_> = (0..16)
        .map(|n| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .post_json("/api/tasks", &json!({ "title": format!("worker task {n}") }))
                    .await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        let response = handle.await.unwrap();
        assert_eq!(response.status, StatusCode::CREATED);
        ids.push(response.json::<Task>().id);
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 16);

    let mut session = harness.sessions().open().await.unwrap();
    assert_eq!(session.count_tasks().await.unwrap(), 16);
    session.close().await.unwrap();

    harness.finish().await.unwrap();
}
