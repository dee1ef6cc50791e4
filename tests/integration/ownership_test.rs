//! Integration tests for project ownership between two accounts.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

struct TwoUsers {
    app: TestApp,
    alice: String,
    bob: String,
    project_id: String,
}

async fn setup() -> TwoUsers {
    let app = TestApp::new();
    let alice = app.register("alice@example.com", "Alice").await;
    let bob = app.register("bob@example.com", "Bob").await;
    let project_id = app.create_project(&alice, "Alice's secret").await;

    TwoUsers {
        app,
        alice,
        bob,
        project_id,
    }
}

#[tokio::test]
async fn test_other_user_cannot_read_project() {
    let t = setup().await;

    let response = t
        .app
        .request(
            "GET",
            &format!("/api/v1/projects/{}", t.project_id),
            None,
            Some(&t.bob),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "forbidden");
    assert!(!response.text.contains("Alice's secret"));
}

#[tokio::test]
async fn test_other_user_cannot_update_project() {
    let t = setup().await;
    let path = format!("/api/v1/projects/{}", t.project_id);

    let response = t
        .app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "name": "Hijacked" })),
            Some(&t.bob),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let owner_view = t.app.request("GET", &path, None, Some(&t.alice)).await;
    assert_eq!(owner_view.status, StatusCode::OK);
    assert_eq!(owner_view.body["data"]["name"], "Alice's secret");
    assert_eq!(
        owner_view.body["data"]["created_at"],
        owner_view.body["data"]["updated_at"]
    );
}

#[tokio::test]
async fn test_other_user_cannot_delete_project() {
    let t = setup().await;
    let path = format!("/api/v1/projects/{}", t.project_id);

    let response = t.app.request("DELETE", &path, None, Some(&t.bob)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let owner_view = t.app.request("GET", &path, None, Some(&t.alice)).await;
    assert_eq!(owner_view.status, StatusCode::OK);
}

#[tokio::test]
async fn test_lists_are_scoped_to_owner() {
    let t = setup().await;
    t.app.create_project(&t.bob, "Bob's plan").await;

    let alice_list = t
        .app
        .request("GET", "/api/v1/projects", None, Some(&t.alice))
        .await;
    let bob_list = t
        .app
        .request("GET", "/api/v1/projects", None, Some(&t.bob))
        .await;

    let alice_names: Vec<_> = alice_list.body["data"]
        .as_array()
        .expect("array")
        .iter()
        .map(|p| p["name"].clone())
        .collect();
    let bob_names: Vec<_> = bob_list.body["data"]
        .as_array()
        .expect("array")
        .iter()
        .map(|p| p["name"].clone())
        .collect();

    assert_eq!(alice_names, vec!["Alice's secret"]);
    assert_eq!(bob_names, vec!["Bob's plan"]);
}

#[tokio::test]
async fn test_other_user_page_is_forbidden() {
    let t = setup().await;

    let detail = t
        .app
        .request(
            "GET",
            &format!("/projects/{}", t.project_id),
            None,
            Some(&t.bob),
        )
        .await;
    assert_eq!(detail.status, StatusCode::FORBIDDEN);
    assert!(!detail.text.contains("Alice&#x27;s secret"));

    let feature = t
        .app
        .request(
            "GET",
            &format!("/projects/{}/task_hub", t.project_id),
            None,
            Some(&t.bob),
        )
        .await;
    assert_eq!(feature.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_missing_project_is_not_found_for_everyone() {
    let t = setup().await;
    let missing = untie_core::types::ProjectId::new();

    for cookie in [&t.alice, &t.bob] {
        let response = t
            .app
            .request(
                "GET",
                &format!("/api/v1/projects/{missing}"),
                None,
                Some(cookie),
            )
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body["error"], "not_found");
    }
}
