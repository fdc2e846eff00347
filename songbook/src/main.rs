use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use tracing::info;

mod app;
mod prompt;
mod table;

#[derive(Parser, Debug)]
#[command(author, version, about = "songbook - interactive song and playlist catalog", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Directory holding the JSON stores
    #[arg(short, long)]
    data_dir: Option<Utf8PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; diagnostics go to stderr so they never mix
    // with the interactive menu on stdout
    let log_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting songbook v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = if let Some(config_path) = args.config {
        songbook_core::config::Config::load_from_path(config_path)?
    } else {
        songbook_core::config::Config::load_or_default()
    };

    // Override with CLI arguments
    if let Some(data_dir) = args.data_dir {
        config.general.data_directory = data_dir;
    }

    info!("Data directory: {}", config.general.data_directory);

    app::run(config)?;

    Ok(())
}
