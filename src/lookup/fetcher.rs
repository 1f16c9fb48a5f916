//! The seam between the UI state machine and whatever performs lookups.

use async_trait::async_trait;

use super::error::LookupFailure;
use super::pokemon::Pokemon;

/// Asynchronous lookup of a pokemon by name.
///
/// The fetch worker only knows this trait, so tests can substitute a
/// scripted implementation for the HTTP client.
#[async_trait]
pub trait PokemonFetcher: Send + Sync {
    /// Returns the name of this fetcher for logging.
    fn name(&self) -> &'static str;

    /// Resolve `name` to a pokemon or a displayable failure.
    async fn fetch(&self, name: &str) -> Result<Pokemon, LookupFailure>;
}
