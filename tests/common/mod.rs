//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use async_trait::async_trait;
use pokelookup::config::UiConfig;
use pokelookup::lookup::{
    command_channel, FetchCommand, FetchRequest, LookupCompletion, LookupFailure, Pokemon,
    PokemonFetcher,
};
use pokelookup::ui::app::App;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub fn pokemon(name: &str, hp: u32) -> Pokemon {
    Pokemon {
        name: name.to_string(),
        hp,
        ..Default::default()
    }
}

/// App wired to a command channel; the receiver stands in for the worker.
pub fn make_app() -> (App, mpsc::Receiver<FetchCommand>) {
    let (tx, rx) = command_channel();
    let mut app = App::new(&UiConfig::default());
    app.set_fetch_sender(tx);
    (app, rx)
}

/// Pop the next command the app sent, if any.
pub fn next_command(rx: &mut mpsc::Receiver<FetchCommand>) -> Option<FetchCommand> {
    rx.try_recv().ok()
}

/// Pop the next command and insist it is a fetch.
pub fn next_fetch(rx: &mut mpsc::Receiver<FetchCommand>) -> FetchRequest {
    match next_command(rx) {
        Some(FetchCommand::Fetch(request)) => request,
        other => panic!("Expected fetch command, got {:?}", other),
    }
}

/// What a [`ScriptedFetcher`] does for one name.
#[derive(Clone)]
pub struct Script {
    pub delay: Duration,
    pub outcome: Result<Pokemon, LookupFailure>,
}

impl Script {
    pub fn resolve(pokemon: Pokemon) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Ok(pokemon),
        }
    }

    pub fn reject(message: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Err(LookupFailure::new(message)),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Fetcher answering from a fixed script, counting calls per name.
#[derive(Default)]
pub struct ScriptedFetcher {
    scripts: HashMap<String, Script>,
    calls: AtomicUsize,
    finished: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, script: Script) -> Self {
        self.scripts.insert(name.to_string(), script);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Fetches that ran to completion (not aborted).
    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PokemonFetcher for ScriptedFetcher {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch(&self, name: &str) -> Result<Pokemon, LookupFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let script = self
            .scripts
            .get(name)
            .cloned()
            .unwrap_or_else(|| Script::reject("unscripted"));
        if !script.delay.is_zero() {
            tokio::time::sleep(script.delay).await;
        }
        self.finished.fetch_add(1, Ordering::SeqCst);
        script.outcome
    }
}
