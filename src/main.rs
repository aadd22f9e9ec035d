//! Binary entrypoint for the escaperoom CLI.
//!
//! Commands:
//! - `play` - start an interactive game session
//! - `init` - create a starter `config.toml`
//! - `status` - print version and the resolved configuration summary
//!
//! See the library crate docs for module-level details: `escaperoom::`.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn, LevelFilter};

use escaperoom::config::Config;
use escaperoom::game::{RustylineInput, Session, ITEM_CATALOG};

#[derive(Parser)]
#[command(name = "escaperoom")]
#[command(about = "A terminal escape-room game")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive game session
    Play,
    /// Initialize a starter configuration file
    Init,
    /// Show version and resolved configuration
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config early to configure logging (except for Init which writes it)
    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).ok(),
    };
    if !matches!(cli.command, Commands::Init) {
        init_logging(&pre_config, cli.verbose);
    }

    match cli.command {
        Commands::Play => {
            let config = match pre_config {
                Some(config) => config,
                None => {
                    warn!(
                        "config file '{}' missing or invalid; using built-in defaults",
                        cli.config
                    );
                    Config::default()
                }
            };
            let input = RustylineInput::new()?;
            let session = Session::new(config, input, rand::thread_rng(), std::io::stdout());
            let summary = session.run()?;
            info!(
                "session over: player='{}' points={} escapes={} plays={}",
                summary.player, summary.points, summary.escapes, summary.plays
            );
        }
        Commands::Init => {
            Config::create_default(&cli.config)?;
            println!("Created starter configuration at {}", cli.config);
        }
        Commands::Status => {
            let loaded = pre_config.is_some();
            let config = pre_config.unwrap_or_default();
            println!("escaperoom v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "config: {} ({})",
                cli.config,
                if loaded { "loaded" } else { "defaults" }
            );
            println!("item catalog: {} items", ITEM_CATALOG.len());
            println!(
                "room size: {}..={} items, match cutoff {}",
                config.room.min_items, config.room.max_items, config.room.match_cutoff
            );
            println!(
                "scoring: {} points per find; badges at {}/{}/{}",
                config.scoring.points_per_find,
                config.scoring.beginner,
                config.scoring.intermediate,
                config.scoring.expert
            );
            println!(
                "hints: {}",
                if config.hints.enabled { "enabled" } else { "disabled" }
            );
        }
    }

    Ok(())
}

/// Configure env_logger from CLI verbosity and the config file.
///
/// Verbosity overrides the configured level. On an interactive terminal with
/// no `-v` the level is capped at warnings so diagnostics stay off the game
/// screen; redirected output gets the configured level unchanged.
fn init_logging(config: &Option<Config>, verbosity: u8) {
    let mut builder = env_logger::Builder::new();

    let configured = config
        .as_ref()
        .map(|c| c.logging.level.to_lowercase())
        .unwrap_or_else(|| "info".to_string());
    let configured = match configured.as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    let level = match verbosity {
        0 => {
            if atty::is(atty::Stream::Stderr) && configured > LevelFilter::Warn {
                LevelFilter::Warn
            } else {
                configured
            }
        }
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    builder.filter_level(level);

    if let Some(cfg) = config {
        if let Some(ref file) = cfg.logging.file {
            match std::fs::OpenOptions::new().create(true).append(true).open(file) {
                Ok(f) => {
                    builder.target(env_logger::Target::Pipe(Box::new(f)));
                }
                Err(e) => {
                    eprintln!("could not open log file {}: {}; logging to stderr", file, e);
                }
            }
        }
    }

    builder.init();
}
