use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use text2slide_common::{FileSettingsStore, MemorySettingsStore, SettingsStore};
use text2slide_core::share::build_share_link;
use text2slide_core::{split_slides, Config, Slide, SlideSessionController};
use text2slide_tui::TerminalPlatform;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "text2slide")]
#[command(about = "Turn pasted text into slides and present them in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Location to open; a `slides` parameter opens that deck
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Keep text and theme in memory only
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Configuration file (JSON or TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Leave bare URLs as plain text
    #[arg(long, global = true)]
    pub no_linkify: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Edit and present slides (default)
    Present {
        /// Share link to open
        link: Option<String>,
    },
    /// Print the slides a text splits into
    Split {
        /// Input file, or `-` for stdin
        input: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a share link for a text
    Share {
        /// Input file, or `-` for stdin
        input: PathBuf,
        /// Base location of the link
        #[arg(long)]
        base: Option<String>,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?
            .with_env_overrides(),
        None => Config::load_with_fallback(),
    };
    if cli.no_linkify {
        config.linkify = false;
    }

    match cli.command {
        Some(Commands::Split { ref input, json }) => {
            init_stderr_logging(cli.debug)?;
            split_command(&config, input, json).await
        }
        Some(Commands::Share {
            ref input,
            ref base,
        }) => {
            init_stderr_logging(cli.debug)?;
            let base = base
                .clone()
                .or_else(|| cli.url.clone())
                .unwrap_or_else(|| config.share_base_url.clone());
            share_command(&config, input, &base).await
        }
        Some(Commands::Present { ref link }) => {
            let location = link.clone().or_else(|| cli.url.clone());
            present(&cli, &config, location).await
        }
        None => {
            let location = cli.url.clone();
            present(&cli, &config, location).await
        }
    }
}

async fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let text = tokio::task::spawn_blocking(|| std::io::read_to_string(std::io::stdin()))
            .await??;
        Ok(text)
    } else {
        tokio::fs::read_to_string(input)
            .await
            .with_context(|| format!("reading {}", input.display()))
    }
}

async fn split_command(config: &Config, input: &Path, json: bool) -> Result<()> {
    let text = read_input(input).await?;
    let slides = split_slides(&text, config.split_options())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&slides_json(&slides))?);
    } else {
        let total = slides.len();
        for (i, slide) in slides.iter().enumerate() {
            println!("--- {}/{total} ---", i + 1);
            println!("{slide}");
        }
    }
    Ok(())
}

fn slides_json(slides: &[Slide]) -> serde_json::Value {
    serde_json::Value::Array(
        slides
            .iter()
            .enumerate()
            .map(|(i, slide)| {
                serde_json::json!({
                    "index": i,
                    "text": slide.source(),
                    "lines": slide.lines().iter().map(|l| l.text()).collect::<Vec<_>>(),
                    "links": slide.links().collect::<Vec<_>>(),
                })
            })
            .collect(),
    )
}

async fn share_command(config: &Config, input: &Path, base: &str) -> Result<()> {
    let text = read_input(input).await?;
    let slides = split_slides(&text, config.split_options())?;
    println!("{}", build_share_link(base, &slides));
    Ok(())
}

fn open_store(cli: &Cli, config: &Config) -> Box<dyn SettingsStore> {
    if cli.no_persist {
        return Box::new(MemorySettingsStore::new());
    }
    let opened = match cli.settings.as_ref().or(config.settings_path.as_ref()) {
        Some(path) => FileSettingsStore::open(path),
        None => FileSettingsStore::open_default(),
    };
    match opened {
        Ok(store) => {
            tracing::info!("Using settings file {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!("Settings unavailable, keeping them in memory: {e}");
            Box::new(MemorySettingsStore::new())
        }
    }
}

async fn present(cli: &Cli, config: &Config, location: Option<String>) -> Result<()> {
    start_file_logging(config.resolved_log_path().as_deref(), cli.debug);

    let location = location.unwrap_or_else(|| config.share_base_url.clone());
    let store = open_store(cli, config);
    let platform = TerminalPlatform::new(location);
    let controller = SlideSessionController::start(store, platform, config.split_options());

    text2slide_tui::run_app(controller).await
}

fn env_filter(debug: bool, default: &str) -> EnvFilter {
    if debug {
        return EnvFilter::new("text2slide=debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Logging problems never keep the editor from starting. This runs before raw
/// mode, so the message is still readable.
fn start_file_logging(path: Option<&Path>, debug: bool) -> bool {
    match init_file_logging(path, debug) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("text2slide: logging disabled: {e:#}");
            false
        }
    }
}

/// The TUI owns the terminal, so logs go to a file (or nowhere).
fn init_file_logging(path: Option<&Path>, debug: bool) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug, "text2slide=info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn init_stderr_logging(debug: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug, "text2slide=warn"))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
