//! Fetch worker behavior on a real tokio runtime with a scripted fetcher.

mod common;

use common::*;
use pokelookup::lookup::{
    command_channel, run_fetch_worker, CompletionSink, FetchCommand, FetchRequest,
    LookupCompletion, LookupFailure, PokemonFetcher,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;

fn request(key: &str, generation: u64) -> FetchCommand {
    FetchCommand::Fetch(FetchRequest {
        key: key.to_string(),
        generation,
    })
}

fn collecting_sink() -> (CompletionSink, mpsc::UnboundedReceiver<LookupCompletion>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let sink: CompletionSink = Arc::new(move |completion: LookupCompletion| {
        let _ = tx.send(completion);
    });
    (sink, rx)
}

async fn next_completion(rx: &mut mpsc::UnboundedReceiver<LookupCompletion>) -> LookupCompletion {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("Timed out waiting for completion")
        .expect("Completion channel closed")
}

#[tokio::test]
async fn delivers_resolved_completion() {
    let fetcher = Arc::new(
        ScriptedFetcher::new().with("pikachu", Script::resolve(pokemon("pikachu", 35))),
    );
    let (tx, rx) = command_channel();
    let (sink, mut completions) = collecting_sink();
    let worker = tokio::spawn(run_fetch_worker(rx, fetcher.clone(), sink));

    tx.send(request("pikachu", 1)).await.unwrap();
    let completion = next_completion(&mut completions).await;

    assert_eq!(completion.key, "pikachu");
    assert_eq!(completion.generation, 1);
    assert_eq!(completion.outcome, Ok(pokemon("pikachu", 35)));

    drop(tx);
    worker.await.unwrap();
}

#[tokio::test]
async fn delivers_rejected_completion() {
    let fetcher = Arc::new(
        ScriptedFetcher::new().with("missingno", Script::reject("Pokemon not found")),
    );
    let (tx, rx) = command_channel();
    let (sink, mut completions) = collecting_sink();
    let worker = tokio::spawn(run_fetch_worker(rx, fetcher, sink));

    tx.send(request("missingno", 4)).await.unwrap();
    let completion = next_completion(&mut completions).await;

    assert_eq!(completion.generation, 4);
    assert_eq!(
        completion.outcome,
        Err(LookupFailure::new("Pokemon not found"))
    );

    drop(tx);
    worker.await.unwrap();
}

#[tokio::test]
async fn new_request_aborts_superseded_fetch() {
    let fetcher = Arc::new(
        ScriptedFetcher::new()
            .with(
                "charizard",
                Script::resolve(pokemon("charizard", 78)).after(Duration::from_millis(500)),
            )
            .with("pikachu", Script::resolve(pokemon("pikachu", 35))),
    );
    let (tx, rx) = command_channel();
    let (sink, mut completions) = collecting_sink();
    let worker = tokio::spawn(run_fetch_worker(rx, fetcher.clone(), sink));

    tx.send(request("charizard", 1)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    tx.send(request("pikachu", 2)).await.unwrap();

    let completion = next_completion(&mut completions).await;
    assert_eq!(completion.key, "pikachu");
    assert_eq!(completion.generation, 2);

    // Give the aborted fetch time to have finished, had it survived.
    tokio::time::sleep(Duration::from_millis(700)).await;
    assert!(completions.try_recv().is_err());
    assert_eq!(fetcher.calls(), 2);
    assert_eq!(fetcher.finished(), 1);

    drop(tx);
    worker.await.unwrap();
}

#[tokio::test]
async fn cancel_aborts_in_flight_fetch() {
    let fetcher = Arc::new(ScriptedFetcher::new().with(
        "mew",
        Script::resolve(pokemon("mew", 100)).after(Duration::from_millis(300)),
    ));
    let (tx, rx) = command_channel();
    let (sink, mut completions) = collecting_sink();
    let worker = tokio::spawn(run_fetch_worker(rx, fetcher.clone(), sink));

    tx.send(request("mew", 1)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    tx.send(FetchCommand::Cancel).await.unwrap();

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(completions.try_recv().is_err());
    assert_eq!(fetcher.calls(), 1);
    assert_eq!(fetcher.finished(), 0);

    drop(tx);
    worker.await.unwrap();
}

#[tokio::test]
async fn worker_stops_when_senders_drop() {
    let fetcher: Arc<dyn PokemonFetcher> = Arc::new(ScriptedFetcher::new());
    let (tx, rx) = command_channel();
    let (sink, _completions) = collecting_sink();
    let worker = tokio::spawn(run_fetch_worker(rx, fetcher, sink));

    drop(tx);
    timeout(Duration::from_secs(1), worker)
        .await
        .expect("Worker did not stop")
        .unwrap();
}

#[tokio::test]
async fn completions_feed_the_app_state_machine() {
    let fetcher = Arc::new(
        ScriptedFetcher::new().with("pikachu", Script::resolve(pokemon("pikachu", 35))),
    );
    let (worker_tx, worker_rx) = command_channel();
    let (sink, mut completions) = collecting_sink();
    let worker = tokio::spawn(run_fetch_worker(worker_rx, fetcher, sink));

    let (mut app, mut app_rx) = make_app();
    app.submit("pikachu");
    let command = next_command(&mut app_rx).expect("Expected a command");
    worker_tx.send(command).await.unwrap();

    let completion = next_completion(&mut completions).await;
    app.on_lookup_complete(completion);
    assert_eq!(
        app.view(),
        pokelookup::ui::app::Screen::Data(pokemon("pikachu", 35))
    );

    drop(worker_tx);
    worker.await.unwrap();
}
