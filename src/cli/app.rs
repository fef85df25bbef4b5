//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use devfinder::config::GlobalConfig;
use devfinder::output::OutputMode;

use super::commands;

/// devfinder - browse and filter developer profiles
#[derive(Parser, Debug)]
#[command(
    name = "devfinder",
    version,
    about = "Browse and filter developer profiles from the terminal",
    long_about = "Fetch developer profiles from an HTTP endpoint and narrow them\n\
                  by name search and programming language tags.\n\n\
                  Name search is case- and accent-insensitive; language tags can\n\
                  be combined with ANY (overlap) or ALL (exact match) logic."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Override the profiles endpoint URL
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch profiles and print the cards matching the given filters
    List {
        /// Name query (case- and accent-insensitive substring)
        #[arg(short, long)]
        name: Option<String>,

        /// Language tag to select; repeatable (default: all tags selected)
        #[arg(short, long)]
        lang: Vec<String>,

        /// Combine mode for selected tags: any, all
        #[arg(short, long, default_value = "any")]
        mode: String,
    },

    /// Interactive session: adjust filters and re-render after every command
    Repl,

    /// List the supported language tags
    Languages,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    // Endpoint resolution: flag, then config file, then built-in default.
    let endpoint = cli
        .url
        .unwrap_or_else(|| GlobalConfig::load().source.endpoint);

    match cli.command {
        Some(Command::List { name, lang, mode }) => {
            commands::list(&endpoint, name.as_deref(), &lang, &mode, output_mode)
        },
        Some(Command::Repl) => commands::repl(&endpoint, output_mode),
        Some(Command::Languages) => commands::languages(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("devfinder v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("devfinder v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'devfinder --help' for usage");
                println!("Run 'devfinder list' to fetch and show profiles");
            }
            Ok(())
        },
    }
}
