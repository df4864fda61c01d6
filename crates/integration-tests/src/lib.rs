//! Integration tests for the Easy Cebu back office.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p easy-cebu-integration-tests
//! ```
//!
//! Tests drive the admin router in-process through [`TestApp`]; no listener
//! or browser is involved. Each [`TestApp`] carries its own cookie jar, so
//! [`TestApp::other_client`] behaves like a second browser on the same
//! server.

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

use easy_cebu_admin::{config::AdminConfig, state::AppState};
use easy_cebu_core::ShellSnapshot;

/// A client of an in-process admin app, with its own session cookie.
#[derive(Clone)]
pub struct TestApp {
    router: Router,
    cookie: Arc<Mutex<Option<String>>>,
}

/// The parts of a response the tests look at.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestApp {
    /// App with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AdminConfig::default())
    }

    /// App with the given configuration.
    #[must_use]
    pub fn with_config(config: AdminConfig) -> Self {
        Self {
            router: easy_cebu_admin::app(AppState::new(config)),
            cookie: Arc::default(),
        }
    }

    /// Another client of the same app, starting without cookies.
    #[must_use]
    pub fn other_client(&self) -> Self {
        Self {
            router: self.router.clone(),
            cookie: Arc::default(),
        }
    }

    /// The session cookie this client currently holds, if any.
    #[must_use]
    pub fn session_cookie(&self) -> Option<String> {
        self.cookie.lock().expect("cookie jar lock").clone()
    }

    /// Send a GET request.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty())).await
    }

    /// Send a form-encoded POST request.
    pub async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_owned())),
        )
        .await
    }

    /// Send a JSON POST request.
    pub async fn post_json(&self, uri: &str, body: &serde_json::Value) -> TestResponse {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
        )
        .await
    }

    /// Submit the login form for `role`.
    pub async fn login(&self, role: &str) -> TestResponse {
        self.post_form("/login", &format!("username=cashier&password=pw&role={role}"))
            .await
    }

    /// Click a sidebar link.
    pub async fn navigate(&self, view: &str) -> TestResponse {
        self.post_form("/navigate", &format!("view={view}")).await
    }

    /// Current snapshot via the JSON API.
    pub async fn snapshot(&self) -> ShellSnapshot {
        let response = self.get("/api/shell").await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);
        serde_json::from_str(&response.body).expect("snapshot should be valid JSON")
    }

    async fn send(&self, request: Result<Request<Body>, axum::http::Error>) -> TestResponse {
        let mut request = request.expect("request should build");
        if let Some(cookie) = self.session_cookie() {
            let value = cookie.parse().expect("cookie should be a valid header");
            request.headers_mut().insert(header::COOKIE, value);
        }

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        self.store_cookie(&response);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// Keep the `name=value` part of a `Set-Cookie`; an expired cookie
    /// empties the jar.
    fn store_cookie(&self, response: &axum::response::Response) {
        let Some(set_cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
        else {
            return;
        };

        let expired = set_cookie.contains("Max-Age=0");
        let pair = set_cookie.split(';').next().map(str::trim).map(str::to_owned);
        *self.cookie.lock().expect("cookie jar lock") = if expired { None } else { pair };
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
