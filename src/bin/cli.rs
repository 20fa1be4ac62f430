//! curator CLI
//!
//! Maintains the blog's daily-links ledgers and imports Medium posts as
//! site pages. Intended to run both locally and from CI workflows.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use curator::{
    config::SitePaths,
    error::Result,
    models::RawLink,
    pipeline::{self, SyncOptions, DEFAULT_MAX_POSTS},
    utils::outputs,
};

/// curator - daily links and Medium import for the blog
#[derive(Parser, Debug)]
#[command(
    name = "curator",
    version,
    about = "Content-pipeline utilities for the blog"
)]
struct Cli {
    /// Path to the site root (the directory holding _data/ and _posts/)
    #[arg(short = 'C', long, default_value = ".")]
    site_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a link straight to the daily ledger
    Add {
        #[command(flatten)]
        link: LinkArgs,
    },

    /// Queue a link for a later publish run
    Queue {
        #[command(flatten)]
        link: LinkArgs,
    },

    /// Publish the oldest queued link into the daily ledger
    Publish,

    /// Import new Medium posts as site pages
    Sync {
        /// Medium username (default: author.medium from _config.yml)
        #[arg(long)]
        username: Option<String>,

        /// Explicit RSS feed URL; overrides --username
        #[arg(long)]
        feed_url: Option<String>,

        /// Maximum number of posts to import per run
        #[arg(long, default_value_t = DEFAULT_MAX_POSTS)]
        max_posts: usize,
    },
}

/// Link fields shared by `add` and `queue`.
#[derive(Args, Debug)]
struct LinkArgs {
    /// Link title
    #[arg(long)]
    title: String,

    /// Full http/https URL
    #[arg(long)]
    url: String,

    /// One-line description
    #[arg(long)]
    description: String,

    /// Link kind: article, video or tool
    #[arg(long = "type")]
    kind: String,

    /// Publish date as YYYY-MM-DD (defaults to today when omitted)
    #[arg(long)]
    date: Option<String>,
}

impl From<LinkArgs> for RawLink {
    fn from(args: LinkArgs) -> Self {
        RawLink {
            title: args.title,
            url: args.url,
            description: args.description,
            kind: args.kind,
            date: args.date,
        }
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        log::error!("{e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let paths = SitePaths::new(&cli.site_dir);

    match cli.command {
        Command::Add { link } => {
            pipeline::run_add(&paths, &link.into())?;
        }

        Command::Queue { link } => {
            pipeline::run_queue(&paths, &link.into())?;
        }

        Command::Publish => match pipeline::run_publish(&paths)? {
            Some(entry) => {
                outputs::set_output("changed", "true");
                outputs::set_output("published_date", &entry.date.to_string());
                // Keep the output single-line for the workflow file.
                outputs::set_output("published_title", &entry.title.replace('\n', " "));
            }
            None => {
                outputs::set_output("changed", "false");
            }
        },

        Command::Sync {
            username,
            feed_url,
            max_posts,
        } => {
            let options = SyncOptions {
                username,
                feed_url,
                max_posts,
            };
            let report = pipeline::run_sync(&paths, &options).await?;
            outputs::set_output("changed", if report.changed() { "true" } else { "false" });
            outputs::set_output("imported_count", &report.imported.to_string());
        }
    }

    Ok(())
}
