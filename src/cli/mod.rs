pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pocketfeed")]
#[command(about = "An RSS/Atom reader with offline article copies", long_about = None)]
pub struct Cli {
    /// Directory holding feeds.json and offline articles
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new feed
    Add {
        /// URL of the feed to add (https:// is assumed when no scheme is given)
        url: String,
    },
    /// Remove a feed
    Remove {
        /// URL of the feed to remove
        url: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// List feeds
    List,
    /// List the articles of a feed
    Articles {
        /// URL of the feed
        feed: String,
    },
    /// Save an article offline, or delete its offline copy
    Toggle {
        /// URL of the feed the article belongs to
        feed: String,
        /// Link of the article
        link: String,
    },
    /// Show the readable content of an article
    Read {
        /// URL of the feed the article belongs to
        feed: String,
        /// Link of the article
        link: String,
    },
    /// List the articles of a feed that are saved offline
    Offline {
        /// URL of the feed
        feed: String,
    },
}
