use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pocketfeed::app::AppContext;
use pocketfeed::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::load(cli.config.as_deref(), cli.data_dir.as_deref())?;

    match cli.command {
        Commands::Add { url } => {
            commands::add_feed(&ctx, &url).await?;
        }
        Commands::Remove { url, yes } => {
            commands::remove_feed(&ctx, &url, yes).await?;
        }
        Commands::List => {
            commands::list_feeds(&ctx).await?;
        }
        Commands::Articles { feed } => {
            commands::list_articles(&ctx, &feed).await?;
        }
        Commands::Toggle { feed, link } => {
            commands::toggle_offline(&ctx, &feed, &link).await?;
        }
        Commands::Read { feed, link } => {
            commands::read_article(&ctx, &feed, &link).await?;
        }
        Commands::Offline { feed } => {
            commands::list_offline(&ctx, &feed).await?;
        }
    }

    Ok(())
}
