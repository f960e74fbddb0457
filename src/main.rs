use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vitrine::app::AppContext;
use vitrine::cli::commands::{self, ListOptions};
use vitrine::cli::{Cli, Commands};
use vitrine::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; silent unless RUST_LOG is set
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let ctx = AppContext::new(config, cli.source.as_deref());

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            vitrine::tui::run(&ctx).await?;
        }
        Commands::List {
            category,
            search,
            sort,
            page,
            json,
        } => {
            let options = ListOptions {
                category,
                search,
                sort,
                page,
            };
            commands::list_entries(&ctx, &options, json).await?;
        }
        Commands::Show { id } => {
            commands::show_entry(&ctx, &id).await?;
        }
    }

    Ok(())
}
