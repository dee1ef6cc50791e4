//! Integration tests for registration, login, and logout.

mod helpers;

use http::StatusCode;

use helpers::{PASSWORD, SESSION_COOKIE, TestApp};

#[tokio::test]
async fn test_register_signs_in_and_redirects() {
    let app = TestApp::new();

    let response = app
        .form(
            "/auth/register",
            &[
                ("email", "alice@example.com"),
                ("name", "Alice"),
                ("password", PASSWORD),
            ],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));

    let set_cookie = response
        .set_cookie(SESSION_COOKIE)
        .expect("session cookie missing");
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Max-Age=3600"));

    let cookie = response.cookie_pair(SESSION_COOKIE).expect("cookie pair");
    let dashboard = app.request("GET", "/", None, Some(&cookie)).await;
    assert_eq!(dashboard.status, StatusCode::OK);
    assert!(dashboard.text.contains("Welcome, Alice"));
}

#[tokio::test]
async fn test_register_duplicate_email_returns_to_form() {
    let app = TestApp::new();
    app.register("alice@example.com", "Alice").await;

    let response = app
        .form(
            "/auth/register",
            &[
                ("email", "ALICE@example.com"),
                ("name", "Impostor"),
                ("password", PASSWORD),
            ],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert!(
        response
            .location()
            .is_some_and(|l| l.starts_with("/auth/register?error="))
    );
    assert!(response.cookie_pair(SESSION_COOKIE).is_none());
}

#[tokio::test]
async fn test_register_weak_password_returns_to_form() {
    let app = TestApp::new();

    let response = app
        .form(
            "/auth/register",
            &[
                ("email", "alice@example.com"),
                ("name", "Alice"),
                ("password", "short"),
            ],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert!(
        response
            .location()
            .is_some_and(|l| l.starts_with("/auth/register?error="))
    );

    let login = app.api_login("alice@example.com", "short", false).await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_api_login_and_me() {
    let app = TestApp::new();
    app.register("alice@example.com", "Alice").await;

    let login = app.api_login("Alice@Example.com", PASSWORD, false).await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.body["status"], "success");
    assert_eq!(login.body["data"]["user"]["email"], "alice@example.com");
    assert!(login.body["data"]["user"].get("password_hash").is_none());
    assert!(login.body["data"]["user"]["last_login_at"].is_string());

    let cookie = login.cookie_pair(SESSION_COOKIE).expect("session cookie");
    let token = cookie.trim_start_matches("session_token=");

    let me = app
        .request("GET", "/api/v1/auth/me", None, Some(&cookie))
        .await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["user"]["name"], "Alice");
    assert_eq!(me.body["data"]["session"]["remember_me"], false);
    assert!(!me.text.contains(token));
}

#[tokio::test]
async fn test_invalid_credentials_do_not_reveal_which_part_failed() {
    let app = TestApp::new();
    app.register("alice@example.com", "Alice").await;

    let wrong_password = app
        .api_login("alice@example.com", "not-the-password", false)
        .await;
    let unknown_email = app.api_login("nobody@example.com", PASSWORD, false).await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["error"], "invalid_credentials");
    assert_eq!(unknown_email.body["error"], "invalid_credentials");
    assert_eq!(wrong_password.body["message"], unknown_email.body["message"]);
    assert!(wrong_password.cookie_pair(SESSION_COOKIE).is_none());
}

#[tokio::test]
async fn test_api_login_rejects_empty_fields() {
    let app = TestApp::new();

    let response = app.api_login("", "", false).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "invalid_input");
}

#[tokio::test]
async fn test_page_login_failure_redirects_to_form() {
    let app = TestApp::new();
    app.register("alice@example.com", "Alice").await;

    let response = app
        .form(
            "/auth/login",
            &[("email", "alice@example.com"), ("password", "nope-nope")],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert!(
        response
            .location()
            .is_some_and(|l| l.starts_with("/auth/login?error="))
    );
    assert!(response.cookie_pair(SESSION_COOKIE).is_none());
}

#[tokio::test]
async fn test_login_page_shows_error_escaped() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/auth/login?error=%3Cb%3Eoops%3C%2Fb%3E", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("&lt;b&gt;oops&lt;/b&gt;"));
}

#[tokio::test]
async fn test_login_page_redirects_signed_in_user() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;

    let response = app.request("GET", "/auth/login", None, Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));
}

#[tokio::test]
async fn test_me_requires_session() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["status"], "error");
    assert_eq!(response.body["error"], "not_authenticated");
}

#[tokio::test]
async fn test_api_logout_invalidates_session() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;

    let logout = app
        .request("POST", "/api/v1/auth/logout", None, Some(&cookie))
        .await;
    assert_eq!(logout.status, StatusCode::OK);
    assert!(logout.clears_cookie(SESSION_COOKIE));

    let me = app
        .request("GET", "/api/v1/auth/me", None, Some(&cookie))
        .await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);

    let again = app
        .request("POST", "/api/v1/auth/logout", None, Some(&cookie))
        .await;
    assert_eq!(again.status, StatusCode::OK);
}

#[tokio::test]
async fn test_page_logout_redirects_to_login() {
    let app = TestApp::new();
    let cookie = app.register("alice@example.com", "Alice").await;

    let response = app.request("GET", "/auth/logout", None, Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/auth/login"));
    assert!(response.clears_cookie(SESSION_COOKIE));

    let dashboard = app.request("GET", "/", None, Some(&cookie)).await;
    assert_eq!(dashboard.status, StatusCode::SEE_OTHER);
    assert_eq!(dashboard.location(), Some("/auth/login"));
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
    assert_eq!(response.body["data"]["status"], "ok");
}
