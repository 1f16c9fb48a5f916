use clap::Parser;
use pokelookup::cli::Cli;
use pokelookup::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    pokelookup::logging::init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    pokelookup::ui::runtime::run(config, cli.initial_name())
}
