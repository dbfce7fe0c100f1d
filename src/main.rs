use anyhow::Result;
use awxctl::actions;
use awxctl::api::client::AwxClient;
use awxctl::cli::Cli;
use awxctl::config::Config;
use awxctl::hostpattern::expand_hostname_pattern;
use awxctl::prompt::InteractivePrompt;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    // verbose in the config selects the default filter; RUST_LOG still
    // overrides it
    let default_filter = if config.verbose { "debug" } else { "info" };
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, default_filter),
    );

    run(cli, config).await
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    // Pattern errors are reported before any network interaction
    let hostnames = expand_hostname_pattern(&cli.name)?;

    let client = AwxClient::new(&config)?;
    let prompt = InteractivePrompt::new();

    actions::run(cli.action, &hostnames, &cli.inventories, &client, &prompt).await
}
