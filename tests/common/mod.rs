//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use mock_backend::{CapturedRequest, MockBackend, MockResponse};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};
use tempfile::TempDir;
use userdeck::api::{ApiClient, User};
use userdeck::config::{ApiConfig, Config};
use userdeck::session::{MemoryTokenStorage, SessionStore};
use userdeck::ui::app::App;
use userdeck::ui::events::AppEvent;
use userdeck::worker::spawn_worker;

// -- Fixtures -----------------------------------------------------------------

pub fn user(id: u64, first_name: &str, last_name: &str) -> User {
    User {
        id,
        email: format!(
            "{}.{}@reqres.in",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        avatar: format!("https://reqres.in/img/faces/{}-image.jpg", id),
    }
}

/// JSON body of a `GET /api/users?page=N` response.
pub fn page_json(page: u32, total_pages: u32, users: &[User]) -> String {
    serde_json::json!({
        "page": page,
        "per_page": 6,
        "total": users.len(),
        "total_pages": total_pages,
        "data": users,
    })
    .to_string()
}

/// Page body without pagination metadata.
pub fn bare_page_json(users: &[User]) -> String {
    serde_json::json!({ "data": users }).to_string()
}

pub fn single_user_json(user: &User) -> String {
    serde_json::json!({ "data": user }).to_string()
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    }
}

// -- App harness --------------------------------------------------------------

/// An `App` wired to a real worker talking to a [`MockBackend`].
///
/// The test thread plays the UI thread: it calls `App` methods directly and
/// feeds API results back with [`Harness::pump`].
pub struct Harness {
    pub app: App,
    pub storage: MemoryTokenStorage,
    pub backend: MockBackend,
    events: Receiver<AppEvent>,
    runtime: tokio::runtime::Runtime,
}

impl Harness {
    pub fn start(token: Option<&str>) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("Failed to build runtime");
        let backend = runtime.block_on(MockBackend::start());

        let mut config = Config::default();
        config.api = api_config(&backend.base_url());
        let client = ApiClient::new(&config.api).expect("Failed to build client");

        let storage = match token {
            Some(token) => MemoryTokenStorage::with_token(token),
            None => MemoryTokenStorage::new(),
        };
        let session = SessionStore::open(Box::new(storage.clone())).expect("open session");

        let (tx, events) = mpsc::channel();
        let commands = spawn_worker(runtime.handle(), client, tx);
        let mut app = App::new(config, session);
        app.set_command_sender(commands);

        Self {
            app,
            storage,
            backend,
            events,
            runtime,
        }
    }

    pub fn enqueue(&self, response: MockResponse) {
        self.runtime
            .block_on(self.backend.enqueue_response(response));
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.runtime.block_on(self.backend.captured_requests())
    }

    /// Wait for the next API result and hand it to the app.
    pub fn pump(&mut self) {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.events.recv_timeout(remaining) {
                Ok(AppEvent::Api(event)) => {
                    self.app.on_api_event(event);
                    return;
                }
                Ok(_) => continue,
                Err(RecvTimeoutError::Timeout) => panic!("Timed out waiting for API event"),
                Err(RecvTimeoutError::Disconnected) => panic!("Worker went away"),
            }
        }
    }

    /// Assert that no API result arrives within `window`.
    pub fn assert_idle(&self, window: Duration) {
        match self.events.recv_timeout(window) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(event) => panic!("Unexpected event: {:?}", event),
            Err(RecvTimeoutError::Disconnected) => panic!("Worker went away"),
        }
    }

    /// Start the app and let the first page load.
    pub fn start_with_page(&mut self, users: &[User], total_pages: u32) {
        self.enqueue(MockResponse::json(&page_json(1, total_pages, users)));
        self.app.start();
        self.pump();
    }
}

pub fn type_text(app: &mut App, text: &str, dispatch: impl Fn(&mut App, char)) {
    for ch in text.chars() {
        dispatch(app, ch);
    }
}
