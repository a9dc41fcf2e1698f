use crate::api::ApiClient;
use crate::config::Config;
use crate::session::SessionStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker::spawn_worker;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

const TICK_RATE: Duration = Duration::from_millis(120);

/// Run the interactive UI until the user quits.
///
/// API calls execute on `runtime`; this thread only draws and dispatches.
/// `edit` opens the editor for that user id right after startup.
pub fn run(
    config: Config,
    session: SessionStore,
    edit: Option<u64>,
    runtime: &Handle,
) -> io::Result<()> {
    let client = ApiClient::new(&config.api)
        .map_err(|err| io::Error::other(err.to_string()))?;

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);
    let commands = spawn_worker(runtime, client, events.sender());

    let mut app = App::new(config, session);
    app.set_command_sender(commands);
    app.start();
    if let Some(id) = edit {
        app.open_edit(id);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(..)) => {}
            Ok(AppEvent::Api(event)) => app.on_api_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("Application exiting");
    drop(guard);
    Ok(())
}
