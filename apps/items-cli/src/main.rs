mod cli;
mod commands;

use clap::Parser;
use core_config::tracing::install_color_eyre;
use items_client::ItemsClient;
use tracing_subscriber::EnvFilter;

use cli::Cli;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let cli = Cli::parse();

    // stdout carries the JSON output; logs go to stderr.
    if cli.verbose {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("items_client=debug,items_cli=debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let client = ItemsClient::new(&cli.url);
    tracing::debug!(url = %client.base_url(), "Using Items API");

    let output = commands::execute(&client, cli.command).await?;
    println!("{output}");

    Ok(())
}
