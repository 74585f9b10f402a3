use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use pookiecalc::calculator::parse_keys;
use pookiecalc::config::Config;
use pookiecalc::display::format_display;
use pookiecalc::history::load_descriptions;
use pookiecalc::responses::{FileResource, Responder};
use pookiecalc::settings::Theme;
use pookiecalc::store::FileStore;
use pookiecalc::{Calculator, Mode};

/// Keypad calculator with a novelty mode.
///
/// Type keys separated by spaces, e.g. `3 + 4 × 2 =`. Lines starting with
/// `:` are commands: `:mode`, `:theme <light|dark|pookie>`, `:history`,
/// `:clear-history`, `:quit`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lines file with novelty responses
    #[arg(long)]
    lines: Option<PathBuf>,

    /// JSON store for history and settings
    #[arg(long)]
    store: Option<PathBuf>,

    /// Start in this mode instead of the saved one
    #[arg(long, value_enum)]
    mode: Option<CliMode>,

    /// Seed for response selection
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliMode {
    Normal,
    Novelty,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    if cli.lines.is_some() {
        config.lines_path = cli.lines.clone();
    }
    if cli.store.is_some() {
        config.store_path = cli.store.clone();
    }

    let store = FileStore::open_or_empty(config.store_path());
    tracing::debug!(path = %store.path().display(), "Using store");

    let responder = Responder::initialize(&FileResource::new(config.lines_path.clone()));
    let descriptions = load_descriptions(&FileResource::new(config.history_lines_path.clone()));
    let mut calc =
        Calculator::new(Box::new(store), responder).with_history_descriptions(descriptions);
    if let Some(seed) = cli.seed {
        calc = calc.with_seed(seed);
    }

    match cli.mode {
        Some(CliMode::Normal) if calc.mode() == Mode::Novelty => calc.apply_theme(Theme::Light),
        Some(CliMode::Novelty) if calc.mode() == Mode::Normal => calc.apply_theme(Theme::Pookie),
        _ => {}
    }

    run(&mut calc)
}

fn run(calc: &mut Calculator) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    render(calc, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();

        if let Some(command) = line.strip_prefix(':') {
            let mut parts = command.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some("quit" | "q"), _) => break,
                (Some("mode"), _) => calc.toggle_novelty(),
                (Some("theme"), Some(name)) => match name.parse::<Theme>() {
                    Ok(theme) => calc.apply_theme(theme),
                    Err(e) => writeln!(stdout, "{e}")?,
                },
                (Some("history"), _) => {
                    let items = calc.history_items();
                    if items.is_empty() {
                        writeln!(stdout, "No calculations yet!")?;
                    }
                    for item in items {
                        writeln!(stdout, "{}  ({})", item.calculation, item.description)?;
                    }
                    continue;
                }
                (Some("clear-history"), _) => calc.clear_history(),
                _ => writeln!(stdout, "unknown command: {command}")?,
            }
        } else {
            match parse_keys(line) {
                Ok(keys) => keys.into_iter().for_each(|key| calc.press(key)),
                Err(e) => writeln!(stdout, "{e}")?,
            }
        }

        render(calc, &mut stdout)?;
    }

    Ok(())
}

fn render(calc: &Calculator, out: &mut impl Write) -> Result<()> {
    let mode = match calc.mode() {
        Mode::Normal => "",
        Mode::Novelty => " 💕",
    };
    writeln!(
        out,
        "[{}]{} {}",
        calc.clear_label().as_str(),
        mode,
        format_display(calc.display())
    )?;
    out.flush()?;
    Ok(())
}
