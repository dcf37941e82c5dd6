//! CLI entry point for lizz-blog

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lizz-blog")]
#[command(author = "Lizz")]
#[command(version)]
#[command(about = "A small server-rendered personal blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the blog server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// List all posts, newest first
    List,

    /// Create a new post dated today
    New {
        /// Title of the new post
        title: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "lizz_blog=debug,tower_http=debug,info"
    } else {
        "lizz_blog=info"
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
        None => std::env::current_dir().context("Cannot determine the current directory")?,
    };

    match cli.command {
        Commands::Server { port, ip } => {
            let blog = lizz_blog::Blog::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            lizz_blog::server::start(&blog, &ip, port).await?;
        }

        Commands::List => {
            let blog = lizz_blog::Blog::new(&base_dir)?;
            lizz_blog::commands::list::run(&blog)?;
        }

        Commands::New { title } => {
            let blog = lizz_blog::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            lizz_blog::commands::new::run(&blog, &title)?;
        }

        Commands::Version => {
            println!("lizz-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
