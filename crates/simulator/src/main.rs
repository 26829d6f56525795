// Desktop tooling binary: printing to stdout is its job.
#![allow(clippy::print_stdout)]
#![allow(missing_docs)]

mod script;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use input::ButtonMode;
use panel_emulator::PanelConfig;
use tracing_subscriber::EnvFilter;

use crate::script::Action;

#[derive(Parser)]
#[command(name = "panel-sim")]
#[command(about = "Drive the emulated front panel and print the UI events it emits", long_about = None)]
#[command(version)]
struct Cli {
    /// Panel layout and listener settings (JSON). Defaults to one USER button.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listener mode, overriding the config file
    #[arg(long, value_parser = parse_mode)]
    mode: Option<ButtonMode>,

    /// File with one action per line
    #[arg(long, conflicts_with = "actions")]
    script: Option<PathBuf>,

    /// Actions to run in order: press:<button>, release:<button>, click:<button>
    #[arg(required_unless_present = "script")]
    actions: Vec<Action>,
}

fn parse_mode(s: &str) -> Result<ButtonMode, String> {
    s.parse()
        .map_err(|_| format!("unknown mode '{s}' (expected button, command or home)"))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PanelConfig::load(path)
            .with_context(|| format!("loading panel config {}", path.display()))?,
        None => PanelConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config = config.with_mode(mode);
    }

    let actions = match &cli.script {
        Some(path) => script::load(path)?,
        None => cli.actions,
    };

    let (mut panel, mut events) = config.build().context("building front panel")?;
    tracing::info!(mode = %config.listener.mode, actions = actions.len(), "running");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (n, action) in actions.iter().enumerate() {
        action
            .apply(&mut panel)
            .with_context(|| format!("action {} `{action}`", n.saturating_add(1)))?;
        // Drain after every gesture so the bounded queue never overflows.
        for event in events.drain() {
            writeln!(out, "{event}")?;
        }
    }
    out.flush()?;
    Ok(())
}
