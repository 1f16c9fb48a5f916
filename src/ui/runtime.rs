use crate::config::Config;
use crate::lookup::{
    command_channel, run_fetch_worker, CompletionSink, LookupCompletion, PokeApiClient,
};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

/// How long in-flight fetches get to wind down on exit.
const RUNTIME_SHUTDOWN_GRACE: Duration = Duration::from_millis(200);

/// Run the TUI until the user quits.
///
/// The UI loop runs on the calling thread: render the latest snapshot, then
/// wait for one event and apply it. Fetches run on a separate tokio runtime
/// and come back as [`AppEvent::Lookup`].
pub fn run(config: Config, initial_name: Option<String>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("pokelookup-fetch")
        .enable_all()
        .build()?;

    let client = PokeApiClient::new(&config.api)?;
    tracing::info!(base_url = client.base_url(), "Using PokeAPI");

    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = command_channel();
    let completion_tx = events.sender();
    let on_complete: CompletionSink = Arc::new(move |completion: LookupCompletion| {
        if completion_tx.send(AppEvent::Lookup(completion)).is_err() {
            tracing::trace!("Lookup completion dropped (UI loop gone)");
        }
    });
    runtime.spawn(run_fetch_worker(command_rx, Arc::new(client), on_complete));

    let mut app = App::new(&config.ui);
    app.set_fetch_sender(command_tx);
    if let Some(name) = initial_name {
        app.submit(&name);
    }

    let (mut terminal, guard) = setup_terminal()?;

    loop {
        let screen = app.view();
        terminal.draw(|frame| draw(frame, &app, &screen))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::Lookup(completion)) => app.on_lookup_complete(completion),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // Dropping the app closes the command channel, which stops the worker.
    drop(app);
    runtime.shutdown_timeout(RUNTIME_SHUTDOWN_GRACE);
    Ok(())
}
