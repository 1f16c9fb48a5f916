//! Pokemon lookups: the payload model, the fetcher seam, the PokeAPI
//! client, and the background worker that runs fetches off the UI loop.

mod client;
mod command;
mod error;
mod fetcher;
mod pokemon;
pub mod worker;

pub use client::PokeApiClient;
pub use command::{FetchCommand, FetchRequest, LookupCompletion};
pub use error::LookupFailure;
pub use fetcher::PokemonFetcher;
pub use pokemon::Pokemon;
pub use worker::{command_channel, run_fetch_worker, CompletionSink, FetchCommandSender};
