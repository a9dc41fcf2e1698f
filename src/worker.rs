//! Async executor for API calls.
//!
//! The UI thread sends [`ApiCommand`]s over a bounded channel; every command
//! runs as its own task on the tokio runtime and its outcome comes back as an
//! [`ApiEvent`] on the UI event channel. Page fetches are abandonable: a new
//! `FetchPage` aborts the previous one if it is still running.

use std::sync::mpsc;

use tokio::runtime::Handle;
use tokio::sync::mpsc as async_mpsc;
use tokio::task::JoinHandle;

use crate::api::{ApiClient, ApiError, User, UserPage};
use crate::config::SecureString;
use crate::ui::events::AppEvent;

const COMMAND_BUFFER: usize = 16;

pub type ApiCommandSender = async_mpsc::Sender<ApiCommand>;

#[derive(Debug)]
pub enum ApiCommand {
    FetchPage { page: u32, generation: u64 },
    FetchUser { id: u64 },
    Login { email: String, password: SecureString },
    UpdateUser { user: User },
    DeleteUser { id: u64 },
}

#[derive(Debug)]
pub enum ApiEvent {
    PageLoaded {
        generation: u64,
        page: u32,
        result: Result<UserPage, ApiError>,
    },
    UserLoaded {
        id: u64,
        result: Result<User, ApiError>,
    },
    LoggedIn {
        result: Result<String, ApiError>,
    },
    /// Carries the user that was sent; the session keeps that copy on success.
    UserUpdated {
        user: User,
        result: Result<(), ApiError>,
    },
    UserDeleted {
        id: u64,
        result: Result<(), ApiError>,
    },
}

impl ApiEvent {
    fn operation(&self) -> &'static str {
        match self {
            ApiEvent::PageLoaded { .. } => "list_users",
            ApiEvent::UserLoaded { .. } => "get_user",
            ApiEvent::LoggedIn { .. } => "login",
            ApiEvent::UserUpdated { .. } => "update_user",
            ApiEvent::UserDeleted { .. } => "delete_user",
        }
    }

    fn error(&self) -> Option<&ApiError> {
        match self {
            ApiEvent::PageLoaded { result, .. } => result.as_ref().err(),
            ApiEvent::UserLoaded { result, .. } => result.as_ref().err(),
            ApiEvent::LoggedIn { result } => result.as_ref().err(),
            ApiEvent::UserUpdated { result, .. } => result.as_ref().err(),
            ApiEvent::UserDeleted { result, .. } => result.as_ref().err(),
        }
    }
}

/// Start the worker on `runtime`, posting results to `events`.
pub fn spawn_worker(
    runtime: &Handle,
    client: ApiClient,
    events: mpsc::Sender<AppEvent>,
) -> ApiCommandSender {
    let (sender, receiver) = async_mpsc::channel(COMMAND_BUFFER);
    runtime.spawn(run(client, receiver, events));
    sender
}

async fn run(
    client: ApiClient,
    mut commands: async_mpsc::Receiver<ApiCommand>,
    events: mpsc::Sender<AppEvent>,
) {
    let mut page_fetch: Option<JoinHandle<()>> = None;

    while let Some(command) = commands.recv().await {
        let is_page_fetch = matches!(command, ApiCommand::FetchPage { .. });
        if is_page_fetch {
            if let Some(previous) = page_fetch.take() {
                previous.abort();
            }
        }

        let client = client.clone();
        let events = events.clone();
        let task = tokio::spawn(async move {
            let event = execute(&client, command).await;
            match event.error() {
                Some(err) => tracing::warn!(operation = event.operation(), error = %err, "Request failed"),
                None => tracing::info!(operation = event.operation(), "Request completed"),
            }
            if events.send(AppEvent::Api(event)).is_err() {
                tracing::trace!("API result dropped (UI gone)");
            }
        });

        if is_page_fetch {
            page_fetch = Some(task);
        }
    }

    tracing::debug!("API worker stopped: command channel closed");
}

async fn execute(client: &ApiClient, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::FetchPage { page, generation } => ApiEvent::PageLoaded {
            generation,
            page,
            result: client.list_users(page).await,
        },
        ApiCommand::FetchUser { id } => ApiEvent::UserLoaded {
            id,
            result: client.get_user(id).await,
        },
        ApiCommand::Login { email, password } => ApiEvent::LoggedIn {
            result: client.login(&email, password.expose()).await,
        },
        ApiCommand::UpdateUser { user } => {
            let result = client.update_user(&user).await;
            ApiEvent::UserUpdated { user, result }
        }
        ApiCommand::DeleteUser { id } => ApiEvent::UserDeleted {
            id,
            result: client.delete_user(id).await,
        },
    }
}
