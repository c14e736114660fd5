use anyhow::{Context, Result, bail};
use calcdeck::calculator::{Session, Variant, parse_script};
use calcdeck::config::Config;
use calcdeck::ui::{App, ThemePreference};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "calcdeck", version, about = "Basic and advanced calculator for the terminal")]
struct Args {
    /// Page to open (overrides the config file)
    #[arg(short, long, value_enum)]
    page: Option<Variant>,

    /// Color theme (overrides the config file)
    #[arg(short, long, value_enum)]
    theme: Option<ThemePreference>,

    /// Config file [default: <config dir>/calcdeck/config.toml]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run a key script such as "12+3=" and print the display
    #[arg(short, long)]
    keys: Option<String>,

    /// Write logs to this file (the interactive view does not log otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref(), args.keys.is_some())?;

    let config_path = args.config.clone().or_else(Config::default_path);
    let mut config = match &config_path {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(page) = args.page {
        config.start_page = page;
    }
    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    debug!(?config, "effective config");

    if let Some(keys) = &args.keys {
        let display = run_script(keys, &config)?;
        println!("{}", display);
        return Ok(());
    }

    App::new(config, config_path).run()
}

/// Run a key script against a fresh session and return the display value.
fn run_script(keys: &str, config: &Config) -> Result<String> {
    let events = parse_script(keys).context("parsing key script")?;
    let mut session = Session::new(config.start_page, config.history_limit);

    for event in events {
        if !session.dispatch(event) {
            bail!(
                "{:?} is not available on the {} page",
                event,
                session.variant().label()
            );
        }
    }

    info!(keys, display = session.display(), "key script finished");
    Ok(session.display().to_string())
}

fn init_logging(log_file: Option<&Path>, script_mode: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("calcdeck=info"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if script_mode {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    // The interactive view owns the terminal, so it only logs to a file

    Ok(())
}
