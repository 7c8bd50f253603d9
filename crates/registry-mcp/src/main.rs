mod cli;
mod commands;

use crate::cli::{Commands, RegistryCli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = RegistryCli::parse_args();

    match cli.command {
        Commands::Server(args) => commands::server::run(args).await,
        Commands::Search(args) => commands::lookup::search(args).await,
        Commands::Details(args) => commands::lookup::details(args).await,
    }
}
