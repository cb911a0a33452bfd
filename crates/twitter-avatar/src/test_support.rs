//! In-process fake of the Twitter `users/show` endpoint

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

pub const TEST_TOKEN: &str = "test-token";
pub const IMAGE_URL: &str =
    "https://pbs.twimg.com/profile_images/1180040914695327744/qTSU9ZXI_normal.jpg";

const NOT_FOUND_BODY: &str = r#"{"errors":[{"code":50,"message":"User not found."}]}"#;

#[derive(Default)]
struct FakeState {
    responses: HashMap<String, (StatusCode, String)>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

/// Handle to a running fake upstream
pub struct FakeTwitter {
    pub base_url: String,
    state: Arc<FakeState>,
}

impl FakeTwitter {
    pub fn builder() -> FakeTwitterBuilder {
        FakeTwitterBuilder::default()
    }

    /// Number of `users/show` requests served
    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    /// Screen names in request order
    pub fn requested(&self) -> Vec<String> {
        self.state.requested.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub struct FakeTwitterBuilder {
    state: FakeState,
}

impl FakeTwitterBuilder {
    /// Respond 200 with the given body for a screen name
    pub fn profile(self, screen_name: &str, body: &str) -> Self {
        self.respond(screen_name, StatusCode::OK, body)
    }

    pub fn respond(mut self, screen_name: &str, status: StatusCode, body: &str) -> Self {
        self.state
            .responses
            .insert(screen_name.to_string(), (status, body.to_string()));
        self
    }

    /// Delay every response
    pub fn delay(mut self, delay: Duration) -> Self {
        self.state.delay = Some(delay);
        self
    }

    pub async fn spawn(self) -> FakeTwitter {
        let state = Arc::new(self.state);
        let router = Router::new()
            .route("/1.1/users/show.json", get(users_show))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        FakeTwitter {
            base_url: format!("http://{addr}"),
            state,
        }
    }
}

async fn users_show(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.calls.fetch_add(1, Ordering::SeqCst);
    let screen_name = params.get("screen_name").cloned().unwrap_or_default();
    state.requested.lock().unwrap().push(screen_name.clone());

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    let expected = format!("Bearer {TEST_TOKEN}");
    if headers.get("Authorization").and_then(|v| v.to_str().ok()) != Some(expected.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            r#"{"errors":[{"code":89,"message":"Invalid or expired token."}]}"#,
        )
            .into_response();
    }

    match state.responses.get(&screen_name) {
        Some((status, body)) => (*status, body.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
    }
}

/// A `users/show` body carrying the https image field
pub fn profile_body(image_url: &str) -> String {
    format!(r#"{{"screen_name":"charlyx","profile_image_url_https":"{image_url}"}}"#)
}
