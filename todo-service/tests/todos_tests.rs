mod common;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

async fn create_todo(app: &TestApp, token: &str, title: &str, description: &str, state: &str) -> Value {
    let response = app
        .post_authenticated("/todos/", token)
        .json(&json!({
            "title": title,
            "description": description,
            "state": state,
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

async fn list_todos(app: &TestApp, token: &str, query: &str) -> Vec<Value> {
    let response = app
        .get_authenticated(&format!("/todos/{}", query), token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["todos"].as_array().expect("todos missing").clone()
}

#[tokio::test]
async fn test_create_todo() {
    let app = TestApp::spawn().await;
    let (_, token) = app.user_with_token("test", "test").await;

    let body = create_todo(&app, &token, "test todo", "test", "draft").await;

    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "test todo");
    assert_eq!(body["description"], "test");
    assert_eq!(body["state"], "draft");
    assert!(body["created_at"].is_string());
    assert_eq!(body["created_at"], body["updated_at"]);
}

#[tokio::test]
async fn test_create_todo_unknown_state() {
    let app = TestApp::spawn().await;
    let (_, token) = app.user_with_token("test", "test").await;

    let response = app
        .post_authenticated("/todos/", &token)
        .json(&json!({
            "title": "test todo",
            "description": "test",
            "state": "archived",
        }))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_create_todo_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/todos/")
        .json(&json!({"title": "t", "description": "d", "state": "draft"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_todos_should_return_5_todos() {
    let app = TestApp::spawn().await;
    let (_, token) = app.user_with_token("test", "test").await;
    for _ in 0..5 {
        create_todo(&app, &token, "todo", "description", "todo").await;
    }

    assert_eq!(list_todos(&app, &token, "").await.len(), 5);
}

#[tokio::test]
async fn test_list_todos_pagination() {
    let app = TestApp::spawn().await;
    let (_, token) = app.user_with_token("test", "test").await;
    for i in 0..5 {
        create_todo(&app, &token, &format!("todo {}", i), "description", "todo").await;
    }

    let todos = list_todos(&app, &token, "?offset=1&limit=2").await;

    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0]["title"], "todo 1");
    assert_eq!(todos[1]["title"], "todo 2");
}

#[tokio::test]
async fn test_list_todos_filter_title() {
    let app = TestApp::spawn().await;
    let (_, token) = app.user_with_token("test", "test").await;
    for _ in 0..5 {
        create_todo(&app, &token, "Test todo", "description", "todo").await;
    }
    for _ in 0..2 {
        create_todo(&app, &token, "Special todo", "description", "todo").await;
    }

    assert_eq!(list_todos(&app, &token, "?title=Special").await.len(), 2);
}

#[tokio::test]
async fn test_list_todos_filter_description() {
    let app = TestApp::spawn().await;
    let (_, token) = app.user_with_token("test", "test").await;
    for _ in 0..5 {
        create_todo(&app, &token, "todo", "description", "todo").await;
    }
    for _ in 0..2 {
        create_todo(&app, &token, "todo", "lorem ipsum", "todo").await;
    }

    assert_eq!(list_todos(&app, &token, "?description=ipsum").await.len(), 2);
}

#[tokio::test]
async fn test_list_todos_filter_state() {
    let app = TestApp::spawn().await;
    let (_, token) = app.user_with_token("test", "test").await;
    for _ in 0..5 {
        create_todo(&app, &token, "todo", "description", "doing").await;
    }
    for _ in 0..2 {
        create_todo(&app, &token, "todo", "description", "done").await;
    }

    assert_eq!(list_todos(&app, &token, "?state=doing").await.len(), 5);
}

#[tokio::test]
async fn test_list_todos_only_returns_own_todos() {
    let app = TestApp::spawn().await;
    let (_, other_token) = app.user_with_token("other", "other").await;
    let (_, token) = app.user_with_token("test", "test").await;
    create_todo(&app, &other_token, "theirs", "description", "todo").await;
    create_todo(&app, &token, "mine", "description", "todo").await;

    let todos = list_todos(&app, &token, "").await;

    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["title"], "mine");
}

#[tokio::test]
async fn test_get_todo() {
    let app = TestApp::spawn().await;
    let (_, token) = app.user_with_token("test", "test").await;
    let created = create_todo(&app, &token, "test", "test", "done").await;

    let response = app
        .get_authenticated(&format!("/todos/{}", created["id"]), &token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "test");
    assert_eq!(body["description"], "test");
    assert_eq!(body["state"], "done");
}

#[tokio::test]
async fn test_get_todo_not_found() {
    let app = TestApp::spawn().await;
    let (_, token) = app.user_with_token("test", "test").await;

    let response = app
        .get_authenticated("/todos/111", &token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"detail": "task not found"}));
}

#[tokio::test]
async fn test_get_todo_of_other_user_forbidden() {
    let app = TestApp::spawn().await;
    let (_, other_token) = app.user_with_token("other", "other").await;
    let (_, token) = app.user_with_token("test", "test").await;
    let theirs = create_todo(&app, &other_token, "theirs", "description", "todo").await;

    let response = app
        .get_authenticated(&format!("/todos/{}", theirs["id"]), &token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"detail": "not enough permissions"}));
}

#[tokio::test]
async fn test_patch_todo() {
    let app = TestApp::spawn().await;
    let (_, token) = app.user_with_token("test", "test").await;
    let created = create_todo(&app, &token, "test todo", "test", "draft").await;

    let response = app
        .patch_authenticated(&format!("/todos/{}", created["id"]), &token)
        .json(&json!({"title": "test update"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "test update");
    assert_eq!(body["description"], "test");
    assert_eq!(body["state"], "draft");
    assert_eq!(body["created_at"], created["created_at"]);

    let created_at: DateTime<Utc> = serde_json::from_value(body["created_at"].clone()).unwrap();
    let updated_at: DateTime<Utc> = serde_json::from_value(body["updated_at"].clone()).unwrap();
    assert!(updated_at >= created_at);
    assert!(updated_at - created_at < Duration::minutes(1));
}

#[tokio::test]
async fn test_patch_todo_not_found() {
    let app = TestApp::spawn().await;
    let (_, token) = app.user_with_token("test", "test").await;

    let response = app
        .patch_authenticated("/todos/10", &token)
        .json(&json!({"title": "title update"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"detail": "task not found"}));
}

#[tokio::test]
async fn test_patch_todo_of_other_user_forbidden() {
    let app = TestApp::spawn().await;
    let (_, other_token) = app.user_with_token("other", "other").await;
    let (_, token) = app.user_with_token("test", "test").await;
    let theirs = create_todo(&app, &other_token, "theirs", "description", "todo").await;

    let response = app
        .patch_authenticated(&format!("/todos/{}", theirs["id"]), &token)
        .json(&json!({"state": "trash"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_todo() {
    let app = TestApp::spawn().await;
    let (_, token) = app.user_with_token("test", "test").await;
    let created = create_todo(&app, &token, "test todo", "test", "draft").await;

    let response = app
        .delete_authenticated(&format!("/todos/{}", created["id"]), &token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "task deleted"}));
    assert!(list_todos(&app, &token, "").await.is_empty());
}

#[tokio::test]
async fn test_delete_todo_not_found() {
    let app = TestApp::spawn().await;
    let (_, token) = app.user_with_token("test", "test").await;

    let response = app
        .delete_authenticated("/todos/10", &token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"detail": "task not found"}));
}

#[tokio::test]
async fn test_delete_todo_of_other_user_forbidden() {
    let app = TestApp::spawn().await;
    let (_, other_token) = app.user_with_token("other", "other").await;
    let (_, token) = app.user_with_token("test", "test").await;
    let theirs = create_todo(&app, &other_token, "theirs", "description", "todo").await;

    let response = app
        .delete_authenticated(&format!("/todos/{}", theirs["id"]), &token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"detail": "not enough permissions"}));

    let response = app
        .get_authenticated(&format!("/todos/{}", theirs["id"]), &other_token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, theirs);
}

#[tokio::test]
async fn test_deleting_user_removes_their_todos() {
    let app = TestApp::spawn().await;
    let (user_id, token) = app.user_with_token("test", "test").await;
    let created = create_todo(&app, &token, "test todo", "test", "draft").await;

    app.delete_authenticated(&format!("/users/{}", user_id), &token)
        .send()
        .await
        .unwrap();

    let (_, other_token) = app.user_with_token("other", "other").await;
    let response = app
        .get_authenticated(&format!("/todos/{}", created["id"]), &other_token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
