//! The single failure kind a lookup can produce.

use thiserror::Error;

/// Suggestions offered when a name does not resolve.
const NOT_FOUND_HINT: &str = r#"Try "pikachu", "charizard", or "mew""#;

/// A failed lookup, carrying a message fit for display.
///
/// Cloneable so it can be stored in UI state and handed to the recovery
/// boundary's fallback view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LookupFailure {
    message: String,
}

impl LookupFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The API has no pokemon under `name`.
    pub fn not_found(name: &str) -> Self {
        Self::new(format!(
            "No pokemon with the name \"{}\". {}",
            name, NOT_FOUND_HINT
        ))
    }

    /// The API answered with an unexpected status.
    pub fn upstream(status: u16, body: &str) -> Self {
        let body = body.trim();
        if body.is_empty() {
            Self::new(format!("PokeAPI returned status {}", status))
        } else {
            Self::new(format!(
                "PokeAPI returned status {}: {}",
                status,
                truncate(body, 120)
            ))
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for LookupFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new("The lookup timed out")
        } else if err.is_connect() {
            Self::new(format!("Could not reach PokeAPI: {}", err))
        } else if err.is_decode() {
            Self::new(format!("PokeAPI sent an unreadable response: {}", err))
        } else {
            Self::new(format!("Lookup request failed: {}", err))
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}
