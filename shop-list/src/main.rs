//! shop-list - shopping list page driven from the console
//!
//! Reads one command per line from stdin, turns it into the page event a
//! user would trigger, and prints the re-rendered list after each one.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use libshoplist::logging::{LogFormat, LoggingConfig};
use libshoplist::{Config, HeadlessPage, IdStrategy, ShopListError};
use shop_list::console::{run_session, OutputFormat, SessionOptions};
use shop_list::{AppError, AppState};

#[derive(Parser, Debug)]
#[command(name = "shop-list")]
#[command(about = "Shopping list with a full re-render loop, driven from stdin", long_about = None)]
struct Cli {
    /// Config file (defaults to $SHOPLIST_CONFIG, then the XDG config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rewrite the full HTML page to this file after every render
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// What to print after each command
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markup)]
    format: OutputFormat,

    /// Use sequential ids instead of random UUIDs
    #[arg(long)]
    sequential_ids: bool,

    /// Start with an empty list instead of the configured seed
    #[arg(long)]
    empty: bool,

    /// Accept submissions that are blank after trimming
    #[arg(long)]
    allow_empty_names: bool,

    /// Log format (text, json or pretty)
    #[arg(long, env = "SHOPLIST_LOG_FORMAT", default_value = "text")]
    log_format: LogFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = std::env::var("SHOPLIST_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    LoggingConfig::new(cli.log_format, level, cli.verbose).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load()?,
    };

    if cli.sequential_ids {
        config.ids.strategy = IdStrategy::Sequential;
    }
    if cli.empty {
        config.list.seed.clear();
    }
    if cli.allow_empty_names {
        config.input.allow_empty_names = true;
    }

    let options = SessionOptions {
        format: cli.format,
        output: cli.output.or_else(|| config.output_path()),
    };

    let mut app = AppState::from_config(&config, HeadlessPage::new());
    app.bootstrap()?;
    tracing::info!(items = app.store().len(), "shopping list ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_session(
        &mut app,
        stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
        &options,
    )
    .context("console session failed")?;

    Ok(())
}

fn exit_code(error: &anyhow::Error) -> i32 {
    if let Some(e) = error.downcast_ref::<AppError>() {
        return e.exit_code();
    }
    if let Some(e) = error.downcast_ref::<ShopListError>() {
        return e.exit_code();
    }
    1
}
