//! CLI entry point for postbox

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use postbox::commands::{self, OutputFormat};

#[derive(Parser)]
#[command(name = "postbox")]
#[command(version)]
#[command(about = "A content store and validation tool for front-matter blog documents", long_about = None)]
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
    /// List documents in the store
    #[command(alias = "ls")]
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Show a single document
    Show {
        /// Storage identifier (e.g. 2014-02-20-utilities.md)
        id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },

    /// Validate every document in the store
    #[command(alias = "c")]
    Check {
        /// Re-run the check when files change
        #[arg(short, long)]
        watch: bool,
    },

    /// Create a new post
    New {
        /// Layout to use
        #[arg(short, long)]
        layout: Option<String>,

        /// Title of the new post
        title: String,

        /// Filename for the new post (overrides the configured pattern)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postbox=debug,info"
    } else {
        "postbox=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::List { format } => {
            let postbox = postbox::Postbox::new(&base_dir)?;
            commands::list::run(&postbox, format)?;
        }

        Commands::Show { id, format } => {
            let postbox = postbox::Postbox::new(&base_dir)?;
            commands::show::run(&postbox, &id, format)?;
        }

        Commands::Check { watch } => {
            let postbox = postbox::Postbox::new(&base_dir)?;
            if watch {
                commands::check::watch(&postbox)?;
            } else {
                commands::check::run(&postbox)?;
            }
        }

        Commands::New {
            layout,
            title,
            path,
        } => {
            let postbox = postbox::Postbox::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            commands::new::create_post(&postbox, &title, layout.as_deref(), path.as_deref())?;
        }

        Commands::Version => {
            println!("postbox version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
