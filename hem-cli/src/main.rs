//! HEM CLI - command line tool for querying the home energy backend.

use clap::Parser;

#[derive(Parser)]
#[command(name = "hem-cli", version, about = "Home energy monitor toolkit")]
struct Cli {
    /// Backend base URL; falls back to HEM_API_URL, then localhost
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: hem_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let base_url = hem_cmd::resolve_base_url(cli.base_url);
    hem_cmd::run(base_url, cli.command).await
}
