use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use event_bus::EventBus;
use shared::protocol::DomainEvent;
use ticket_editor::{Clock, ScreenCoordinator, SystemClock};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod adapters;
mod config;

use adapters::Shell;
use config::load_settings;

/// Replays a JSON-lines script of ticket editor events and reports which
/// screens the coordinator put up.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "pos_shell.toml")]
    config: PathBuf,
    /// Event script; read from stdin when omitted.
    #[arg(long)]
    script: Option<PathBuf>,
    #[arg(long)]
    display_old_tickets: bool,
    /// Text typed at the terminal after the script ran.
    #[arg(long = "text")]
    texts: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(&args.config);
    if args.display_old_tickets {
        settings.display_old_tickets = true;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let raw_script = read_script(args.script.as_deref())?;
    let events = parse_script(&raw_script)?;

    let shell = Shell::open(&settings, SystemClock.now());
    let bus = EventBus::new();
    let mut coordinator = ScreenCoordinator::new(shell.collaborators(), &bus)?;
    info!(events = events.len(), "replaying event script");

    for (index, event) in events.into_iter().enumerate() {
        let envelope = bus.publish(event);
        coordinator.pump().with_context(|| {
            format!(
                "event #{} (sequence {}) failed",
                index + 1,
                envelope.sequence
            )
        })?;
    }

    for text in &args.texts {
        let consumed = coordinator.handle_text_input(text);
        println!("text {text:?}: {}", if consumed { "consumed" } else { "ignored" });
    }

    for (region, view) in shell.navigation.requests() {
        println!("{region} -> {view}");
    }
    if let Some(range) = shell.explorer.range() {
        println!("explorer range: {} .. {}", range.start, range.end);
    }
    for ticket_id in shell.tickets.closed() {
        println!("closed ticket {}", ticket_id.0);
    }
    match shell.departments.selected() {
        Some(department_id) => println!("department filter: {}", department_id.0),
        None => println!("department filter: cleared"),
    }
    println!("final screen: {}", coordinator.current_screen());
    Ok(())
}

fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read script '{}'", path.display())),
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read script from stdin")?;
            Ok(raw)
        }
    }
}

/// One `DomainEvent` per line; blank lines and `#` comments are skipped.
fn parse_script(raw: &str) -> Result<Vec<DomainEvent>> {
    raw.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str::<DomainEvent>(line)
                .with_context(|| format!("script line {}: invalid event", index + 1))
        })
        .collect()
}
