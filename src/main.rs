use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zcalc::config::Config;
use zcalc::session::{Mode, Session};
use zcalc::terminal::Terminal;
use zcalc::ui::Presenter;

/// Keypad calculator for the terminal.
///
/// Keys are digits, `.`, `+ - * / ^`, `=`, and named keys such as `Enter`,
/// `Escape`, `Backspace`, `mode`, `sin`, `sqrt`. Without KEYS, lines are
/// read from stdin until EOF or `quit`.
#[derive(Parser)]
#[command(name = "zcalc", version, about)]
struct Cli {
    /// Keys to press, in order (batch mode)
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start in scientific mode
    #[arg(short, long)]
    scientific: bool,

    /// Disable thousands separators
    #[arg(long)]
    no_group: bool,

    /// Print JSON snapshots instead of display lines
    #[arg(long)]
    json: bool,

    /// Log verbosity level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    config.scientific |= cli.scientific;
    config.group_digits &= !cli.no_group;
    config.json |= cli.json;
    info!(?config, "starting");

    let mode = if config.scientific {
        Mode::Scientific
    } else {
        Mode::Basic
    };
    let session = Session::new(mode, Presenter::new(config.group_digits));
    let mut terminal = Terminal::new(session, config.json);

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();

    if cli.keys.is_empty() {
        terminal.print_display(&mut stdout)?;
        terminal.run_interactive(io::stdin().lock(), &mut stdout, &mut stderr)?;
    } else {
        for keys in &cli.keys {
            terminal.feed_line(keys, &mut stderr)?;
        }
        terminal.print_display(&mut stdout)?;
    }

    Ok(())
}
