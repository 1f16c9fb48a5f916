//! Background fetch worker.
//!
//! Receives [`FetchCommand`]s from the UI loop, runs at most one fetch at a
//! time on the tokio runtime, and reports each outcome through a
//! [`CompletionSink`]. A new command aborts the fetch it supersedes, so a
//! stale lookup is cancelled rather than merely ignored.

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::command::{FetchCommand, FetchRequest, LookupCompletion};
use super::fetcher::PokemonFetcher;

/// Capacity of the UI → worker command channel.
pub const COMMAND_CHANNEL_SIZE: usize = 32;

pub type FetchCommandSender = mpsc::Sender<FetchCommand>;

/// Where finished lookups are delivered (usually the UI event channel).
pub type CompletionSink = Arc<dyn Fn(LookupCompletion) + Send + Sync>;

/// Create the command channel used between the UI loop and the worker.
pub fn command_channel() -> (FetchCommandSender, mpsc::Receiver<FetchCommand>) {
    mpsc::channel(COMMAND_CHANNEL_SIZE)
}

/// Run until every command sender is dropped.
pub async fn run_fetch_worker(
    mut commands: mpsc::Receiver<FetchCommand>,
    fetcher: Arc<dyn PokemonFetcher>,
    on_complete: CompletionSink,
) {
    tracing::debug!(fetcher = fetcher.name(), "Fetch worker started");
    let mut in_flight: Option<JoinHandle<()>> = None;

    while let Some(command) = commands.recv().await {
        abort_in_flight(&mut in_flight);

        match command {
            FetchCommand::Cancel => {
                tracing::debug!("Lookup cleared, nothing to fetch");
            }
            FetchCommand::Fetch(request) => {
                tracing::debug!(
                    key = %request.key,
                    generation = request.generation,
                    "Starting lookup"
                );
                in_flight = Some(spawn_fetch(
                    request,
                    Arc::clone(&fetcher),
                    Arc::clone(&on_complete),
                ));
            }
        }
    }

    abort_in_flight(&mut in_flight);
    tracing::debug!("Fetch worker stopped");
}

fn spawn_fetch(
    request: FetchRequest,
    fetcher: Arc<dyn PokemonFetcher>,
    on_complete: CompletionSink,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let completion = match fetcher.fetch(&request.key).await {
            Ok(pokemon) => LookupCompletion::resolved(&request, pokemon),
            Err(failure) => {
                tracing::info!(key = %request.key, error = %failure, "Lookup rejected");
                LookupCompletion::rejected(&request, failure)
            }
        };
        on_complete(completion);
    })
}

fn abort_in_flight(in_flight: &mut Option<JoinHandle<()>>) {
    if let Some(task) = in_flight.take() {
        if !task.is_finished() {
            tracing::debug!("Aborting superseded lookup");
            task.abort();
        }
    }
}
