use clap::Parser;
use std::path::PathBuf;

/// Look up a pokemon from the terminal.
#[derive(Debug, Parser)]
#[command(name = "pokelookup", version, about)]
pub struct Cli {
    /// Pokemon to look up on start.
    pub name: Option<String>,

    /// Config file (defaults to the platform config dir).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The start-up name, ignoring blank input.
    pub fn initial_name(&self) -> Option<String> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}
