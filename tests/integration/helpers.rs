//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use untie_api::AppState;
use untie_auth::PasswordHasher;
use untie_core::clock::ManualClock;
use untie_core::config::AppConfig;

/// Name of the session cookie under the default configuration.
pub const SESSION_COOKIE: &str = "session_token";

/// Password that satisfies the default policy.
pub const PASSWORD: &str = "correct-horse-42";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Clock shared with the session registry and services
    pub clock: Arc<ManualClock>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with the default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new test application with a custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let clock = Arc::new(ManualClock::starting_now());
        let hasher = PasswordHasher::with_params(8, 1, 1).expect("Failed to build hasher");
        let state = AppState::with_parts(config.clone(), clock.clone(), hasher)
            .expect("Failed to build state");

        Self {
            router: untie_api::build_app(state),
            clock,
            config,
        }
    }

    /// Move the application clock forward
    pub fn advance(&self, by: chrono::Duration) {
        self.clock.advance(by);
    }

    /// Make a JSON (or body-less) request with an optional `Cookie` header
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(CONTENT_TYPE, "application/json");

        if let Some(cookie) = cookie {
            req = req.header(COOKIE, cookie);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Submit an HTML form with an optional `Cookie` header
    pub async fn form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        cookie: Option<&str>,
    ) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let mut req = Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");

        if let Some(cookie) = cookie {
            req = req.header(COOKIE, cookie);
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");
        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }

    /// Register through the HTML form and return the session `Cookie` header
    pub async fn register(&self, email: &str, name: &str) -> String {
        let response = self
            .form(
                "/auth/register",
                &[("email", email), ("name", name), ("password", PASSWORD)],
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(response.location(), Some("/"));
        response
            .cookie_pair(SESSION_COOKIE)
            .expect("Registration did not set a session cookie")
    }

    /// Log in through the JSON API and return the whole response
    pub async fn api_login(&self, email: &str, password: &str, remember_me: bool) -> TestResponse {
        self.request(
            "POST",
            "/api/v1/auth/login",
            Some(serde_json::json!({
                "email": email,
                "password": password,
                "remember_me": remember_me,
            })),
            None,
        )
        .await
    }

    /// Create a project through the JSON API and return its id
    pub async fn create_project(&self, cookie: &str, name: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/projects",
                Some(serde_json::json!({ "name": name })),
                Some(cookie),
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED);
        response.body["data"]["id"]
            .as_str()
            .expect("Project id missing")
            .to_string()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, `Null` for HTML and empty bodies
    pub body: Value,
    /// Raw body text
    pub text: String,
}

impl TestResponse {
    /// The redirect target, if any
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }

    /// All `Set-Cookie` header values
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }

    /// The full `Set-Cookie` value for `name`
    pub fn set_cookie(&self, name: &str) -> Option<String> {
        let prefix = format!("{name}=");
        self.set_cookies()
            .into_iter()
            .find(|c| c.starts_with(&prefix))
    }

    /// The `name=value` pair of a set cookie, ready for a `Cookie` header
    pub fn cookie_pair(&self, name: &str) -> Option<String> {
        self.set_cookie(name)
            .and_then(|c| c.split(';').next().map(str::to_string))
            .filter(|pair| pair.len() > name.len() + 1)
    }

    /// Whether the response clears cookie `name`
    pub fn clears_cookie(&self, name: &str) -> bool {
        self.set_cookie(name)
            .is_some_and(|c| c.starts_with(&format!("{name}=;")) && c.contains("Max-Age=0"))
    }
}
