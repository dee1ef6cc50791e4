//! Integration tests for project CRUD over the API and the workspace pages.

mod helpers;

use chrono::Duration;
use http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_create_and_list_projects() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;

    let me = app
        .request("GET", "/api/v1/auth/me", None, Some(&cookie))
        .await;
    let user_id = me.body["data"]["user"]["id"].clone();

    let created = app
        .request(
            "POST",
            "/api/v1/projects",
            Some(serde_json::json!({
                "name": "  Kanban  ",
                "description": "Boards and cards",
                "features": [{ "name": "Drag and drop" }],
            })),
            Some(&cookie),
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["name"], "Kanban");
    assert_eq!(created.body["data"]["owner_id"], user_id);
    assert_eq!(
        created.body["data"]["created_at"],
        created.body["data"]["updated_at"]
    );

    let list = app
        .request("GET", "/api/v1/projects", None, Some(&cookie))
        .await;
    assert_eq!(list.status, StatusCode::OK);
    let items = list.body["data"].as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], created.body["data"]["id"]);
}

#[tokio::test]
async fn test_create_project_owner_is_always_caller() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;
    let other = uuid_like();

    let created = app
        .request(
            "POST",
            "/api/v1/projects",
            Some(serde_json::json!({ "name": "Mine", "owner_id": other })),
            Some(&cookie),
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_ne!(created.body["data"]["owner_id"], other);
}

#[tokio::test]
async fn test_create_project_rejects_bad_names() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;
    let long = "x".repeat(201);

    for name in ["", "   ", long.as_str()] {
        let response = app
            .request(
                "POST",
                "/api/v1/projects",
                Some(serde_json::json!({ "name": name })),
                Some(&cookie),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "name {name:?}");
        assert_eq!(response.body["error"], "invalid_input");
    }

    let list = app
        .request("GET", "/api/v1/projects", None, Some(&cookie))
        .await;
    assert_eq!(list.body["data"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_create_project_missing_body_field() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;

    let response = app
        .request(
            "POST",
            "/api/v1/projects",
            Some(serde_json::json!({ "description": "no name" })),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "invalid_input");
}

#[tokio::test]
async fn test_update_project() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;
    let id = app.create_project(&cookie, "Draft").await;
    let path = format!("/api/v1/projects/{id}");

    let before = app.request("GET", &path, None, Some(&cookie)).await;
    app.advance(Duration::minutes(5));

    let updated = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "name": "Final", "owner_id": uuid_like() })),
            Some(&cookie),
        )
        .await;

    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["name"], "Final");
    assert_eq!(updated.body["data"]["owner_id"], before.body["data"]["owner_id"]);
    assert_eq!(updated.body["data"]["created_at"], before.body["data"]["created_at"]);
    assert_ne!(updated.body["data"]["updated_at"], before.body["data"]["updated_at"]);

    let blank = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "name": " " })),
            Some(&cookie),
        )
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);

    let after = app.request("GET", &path, None, Some(&cookie)).await;
    assert_eq!(after.body["data"]["name"], "Final");
}

#[tokio::test]
async fn test_delete_project() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;
    let id = app.create_project(&cookie, "Throwaway").await;
    let path = format!("/api/v1/projects/{id}");

    let deleted = app.request("DELETE", &path, None, Some(&cookie)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app.request("GET", &path, None, Some(&cookie)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body["error"], "not_found");

    let again = app.request("DELETE", &path, None, Some(&cookie)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_project_id() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;

    let response = app
        .request("GET", "/api/v1/projects/not-an-id", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "invalid_input");
}

#[tokio::test]
async fn test_project_api_requires_session() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/projects",
            Some(serde_json::json!({ "name": "Anon" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "not_authenticated");
}

#[tokio::test]
async fn test_create_project_from_page_form() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;

    let response = app
        .form(
            "/projects",
            &[("name", "<Blog>"), ("description", "Posts & comments")],
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let location = response.location().expect("redirect").to_string();
    assert!(location.starts_with("/projects/"));

    let detail = app.request("GET", &location, None, Some(&cookie)).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.text.contains("&lt;Blog&gt;"));
    assert!(detail.text.contains("Posts &amp; comments"));
}

#[tokio::test]
async fn test_page_form_blank_name_returns_to_list() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;

    let response = app
        .form("/projects", &[("name", "  ")], Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert!(
        response
            .location()
            .is_some_and(|l| l.starts_with("/projects?error="))
    );
}

#[tokio::test]
async fn test_dashboard_shows_three_most_recent() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;

    for name in ["Alpha", "Bravo", "Charlie", "Delta"] {
        app.create_project(&cookie, name).await;
        app.advance(Duration::seconds(1));
    }

    let dashboard = app.request("GET", "/", None, Some(&cookie)).await;

    assert_eq!(dashboard.status, StatusCode::OK);
    let delta = dashboard.text.find("Delta").expect("Delta listed");
    let charlie = dashboard.text.find("Charlie").expect("Charlie listed");
    let bravo = dashboard.text.find("Bravo").expect("Bravo listed");
    assert!(delta < charlie && charlie < bravo);
    assert!(!dashboard.text.contains("Alpha"));
}

#[tokio::test]
async fn test_feature_pages() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;
    let id = app.create_project(&cookie, "Planner").await;

    let enabled = app
        .request("GET", &format!("/projects/{id}/task_hub"), None, Some(&cookie))
        .await;
    assert_eq!(enabled.status, StatusCode::OK);
    assert!(enabled.text.contains("Planner"));

    let unknown = app
        .request("GET", &format!("/projects/{id}/billing"), None, Some(&cookie))
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_disabled_feature_is_not_found() {
    let mut config = untie_core::config::AppConfig::default();
    config.features.0.insert("task_hub".to_string(), false);
    let app = TestApp::with_config(config);
    let cookie = app.register("alice@example.com", "Alice").await;
    let id = app.create_project(&cookie, "Planner").await;

    let response = app
        .request("GET", &format!("/projects/{id}/task_hub"), None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_status_reports_workspace() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;
    app.create_project(&cookie, "One").await;
    app.create_project(&cookie, "Two").await;

    let response = app
        .request("GET", "/api/v1/status", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["project_count"], 2);
    assert_eq!(response.body["data"]["environment"], "development");
    assert_eq!(response.body["data"]["user"]["email"], "alice@example.com");
    assert!(
        response.body["data"]["features"]
            .as_array()
            .is_some_and(|f| f.iter().any(|v| v == "task_hub"))
    );
}

fn uuid_like() -> String {
    untie_core::types::UserId::new().to_string()
}
