//! PokeAPI client.
//!
//! Talks to the public REST API (`/api/v2/pokemon/{name}`). Transport,
//! status and decode problems all collapse into a [`LookupFailure`] with a
//! message the fallback view can show as-is.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use std::time::{Duration, Instant};

use crate::config::ApiConfig;

use super::error::LookupFailure;
use super::fetcher::PokemonFetcher;
use super::pokemon::{ApiPokemon, Pokemon};

pub struct PokeApiClient {
    client: Client,
    base_url: Url,
    artificial_delay: Duration,
}

impl PokeApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, LookupFailure> {
        let base_url = Url::parse(config.base_url.trim()).map_err(|e| {
            LookupFailure::new(format!(
                "Invalid PokeAPI base URL '{}': {}",
                config.base_url, e
            ))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(LookupFailure::new(format!(
                "Invalid PokeAPI base URL '{}'",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url,
            artificial_delay: config.artificial_delay(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// URL of the pokemon resource for an already normalized name.
    pub fn endpoint(&self, name: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["api", "v2", "pokemon", name]);
        }
        url
    }
}

/// PokeAPI resource names are lowercase.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[async_trait]
impl PokemonFetcher for PokeApiClient {
    fn name(&self) -> &'static str {
        "pokeapi"
    }

    async fn fetch(&self, name: &str) -> Result<Pokemon, LookupFailure> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(LookupFailure::new("A pokemon name is required"));
        }

        if !self.artificial_delay.is_zero() {
            tokio::time::sleep(self.artificial_delay).await;
        }

        let url = self.endpoint(&name);
        tracing::debug!(url = %url, "Sending pokemon lookup");

        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::info!(name = %name, latency_ms, "Pokemon not found");
            return Err(LookupFailure::not_found(&name));
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                status = %status,
                error = %error_text,
                "PokeAPI error"
            );

            return Err(LookupFailure::upstream(status.as_u16(), &error_text));
        }

        let body: ApiPokemon = response.json().await?;
        let pokemon = Pokemon::from_api(body, chrono::Local::now());

        tracing::info!(
            name = %pokemon.name,
            id = pokemon.id,
            latency_ms,
            "Pokemon lookup resolved"
        );

        Ok(pokemon)
    }
}
