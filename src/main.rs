//! CLI entry point for folio-rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::{Folio, Mode};

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version)]
#[command(about = "Content backend for a portfolio and blog site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Run in production mode (cache content); also set by FOLIO_ENV=production
    #[arg(long, global = true)]
    production: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// List the articles of a category
    List {
        /// Type of content to list (post, project)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only show the N most recent articles
        #[arg(short, long)]
        recent: Option<usize>,
    },

    /// Print a resolved article
    Show {
        /// Type of content (post, project)
        r#type: String,

        /// Article slug
        slug: String,

        /// Print the chapter list instead of the body
        #[arg(long)]
        chapters: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let mode = Mode::detect(cli.production);

    match cli.command {
        Commands::Server { port, ip } => {
            let folio = Folio::new(&base_dir, mode)?;
            tracing::info!(
                "Serving {:?} in {:?} mode at http://{}:{}",
                folio.public_dir,
                mode,
                ip,
                port
            );
            folio_rs::server::start(&folio, &ip, port).await?;
        }

        Commands::List { r#type, recent } => {
            let folio = Folio::new(&base_dir, mode)?;
            folio_rs::commands::list::run(&folio, &r#type, recent).await?;
        }

        Commands::Show {
            r#type,
            slug,
            chapters,
        } => {
            let folio = Folio::new(&base_dir, mode)?;
            folio_rs::commands::show::run(&folio, &r#type, &slug, chapters).await?;
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
