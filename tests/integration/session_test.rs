//! Integration tests for session lifetime, cookies, and resume-after-login.

mod helpers;

use chrono::Duration;
use http::StatusCode;

use helpers::{PASSWORD, SESSION_COOKIE, TestApp};

#[tokio::test]
async fn test_short_session_expires_after_an_hour() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;

    app.advance(Duration::minutes(59));
    let fresh = app
        .request("GET", "/api/v1/auth/me", None, Some(&cookie))
        .await;
    assert_eq!(fresh.status, StatusCode::OK);

    app.advance(Duration::minutes(2));
    let stale = app
        .request("GET", "/api/v1/auth/me", None, Some(&cookie))
        .await;
    assert_eq!(stale.status, StatusCode::UNAUTHORIZED);
    assert_eq!(stale.body["error"], "not_authenticated");
    assert!(stale.clears_cookie(SESSION_COOKIE));
}

#[tokio::test]
async fn test_activity_does_not_extend_session() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;

    for _ in 0..3 {
        app.advance(Duration::minutes(20));
        let _ = app
            .request("GET", "/api/v1/auth/me", None, Some(&cookie))
            .await;
    }

    app.advance(Duration::seconds(1));
    let response = app
        .request("GET", "/api/v1/auth/me", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_remember_me_issues_long_session() {
    let app = TestApp::new();
    app.register("alice@example.com", "Alice").await;

    let login = app.api_login("alice@example.com", PASSWORD, true).await;
    assert_eq!(login.status, StatusCode::OK);

    let set_cookie = login.set_cookie(SESSION_COOKIE).expect("session cookie");
    assert!(set_cookie.contains("Max-Age=2592000"));

    let cookie = login.cookie_pair(SESSION_COOKIE).expect("cookie pair");
    app.advance(Duration::days(29));
    let me = app
        .request("GET", "/api/v1/auth/me", None, Some(&cookie))
        .await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["session"]["remember_me"], true);

    app.advance(Duration::days(2));
    let expired = app
        .request("GET", "/api/v1/auth/me", None, Some(&cookie))
        .await;
    assert_eq!(expired.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_token_is_cleared() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/", None, Some("session_token=forged"))
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/auth/login"));
    assert!(response.clears_cookie(SESSION_COOKIE));
}

#[tokio::test]
async fn test_public_page_clears_stale_cookie() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;
    app.advance(Duration::hours(2));

    let response = app.request("GET", "/auth/login", None, Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.clears_cookie(SESSION_COOKIE));
}

#[tokio::test]
async fn test_anonymous_page_redirects_and_resumes_after_login() {
    let app = TestApp::new();
    app.register("alice@example.com", "Alice").await;

    let blocked = app.request("GET", "/projects", None, None).await;
    assert_eq!(blocked.status, StatusCode::SEE_OTHER);
    assert_eq!(blocked.location(), Some("/auth/login"));

    let return_to = blocked.cookie_pair("return_to").expect("return_to cookie");
    let set_cookie = blocked.set_cookie("return_to").expect("return_to header");
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Max-Age=300"));

    let login = app
        .form(
            "/auth/login",
            &[("email", "alice@example.com"), ("password", PASSWORD)],
            Some(&return_to),
        )
        .await;

    assert_eq!(login.status, StatusCode::SEE_OTHER);
    assert_eq!(login.location(), Some("/projects"));
    assert!(login.clears_cookie("return_to"));
    assert!(login.cookie_pair(SESSION_COOKIE).is_some());
}

#[tokio::test]
async fn test_login_without_return_to_goes_home() {
    let app = TestApp::new();
    app.register("alice@example.com", "Alice").await;

    let login = app
        .form(
            "/auth/login",
            &[
                ("email", "alice@example.com"),
                ("password", PASSWORD),
                ("remember_me", "on"),
            ],
            None,
        )
        .await;

    assert_eq!(login.status, StatusCode::SEE_OTHER);
    assert_eq!(login.location(), Some("/"));
    let set_cookie = login.set_cookie(SESSION_COOKIE).expect("session cookie");
    assert!(set_cookie.contains("Max-Age=2592000"));
}

#[tokio::test]
async fn test_offsite_return_to_is_ignored() {
    let app = TestApp::new();
    app.register("alice@example.com", "Alice").await;

    for target in ["return_to=%2F%2Fevil.example", "return_to=https%3A%2F%2Fevil.example"] {
        let login = app
            .form(
                "/auth/login",
                &[("email", "alice@example.com"), ("password", PASSWORD)],
                Some(target),
            )
            .await;

        assert_eq!(login.status, StatusCode::SEE_OTHER);
        assert_eq!(login.location(), Some("/"), "target {target}");
    }
}

#[tokio::test]
async fn test_delete_account_revokes_every_session() {
    let app = TestApp::new();
    let first = app.register("alice@example.com", "Alice").await;
    let second = app
        .api_login("alice@example.com", PASSWORD, false)
        .await
        .cookie_pair(SESSION_COOKIE)
        .expect("second session");

    let deleted = app
        .request("DELETE", "/api/v1/users/me", None, Some(&first))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert!(deleted.clears_cookie(SESSION_COOKIE));

    let me = app
        .request("GET", "/api/v1/auth/me", None, Some(&second))
        .await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);

    let login = app.api_login("alice@example.com", PASSWORD, false).await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_update_visible_through_existing_session() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;
    app.register("bob@example.com", "Bob").await;

    let updated = app
        .request(
            "PUT",
            "/api/v1/users/me",
            Some(serde_json::json!({ "name": "Alice Liddell" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let me = app
        .request("GET", "/api/v1/auth/me", None, Some(&cookie))
        .await;
    assert_eq!(me.body["data"]["user"]["name"], "Alice Liddell");

    let taken = app
        .request(
            "PUT",
            "/api/v1/users/me",
            Some(serde_json::json!({ "email": "BOB@example.com" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(taken.status, StatusCode::CONFLICT);
    assert_eq!(taken.body["error"], "duplicate_email");
}
