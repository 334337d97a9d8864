//! Frame replay runner (default binary).
//!
//! Feeds captured binary frames through a bot session, one tick per file,
//! and prints the command lines the bot would send to the game server.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use newyear_bot::adapter::{BotRuntime, OutboundMessage, SessionConfig};
use newyear_bot::types::GameKind;

#[derive(Parser, Debug)]
#[command(name = "newyear-bot", version, about = "Replay captured game frames through the bot")]
struct Cli {
    /// Game the frames belong to: place, tetro or tttoe [env: NEWYEAR_BOT_GAME]
    #[arg(short, long, value_parser = parse_game)]
    game: Option<GameKind>,

    /// Append observation, decision and error records as JSON lines [env: NEWYEAR_BOT_LOG_PATH]
    #[arg(long)]
    log_path: Option<String>,

    /// Print every record as JSON, not just command lines
    #[arg(long)]
    json: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Frame files, replayed in order
    #[arg(required = true)]
    frames: Vec<PathBuf>,
}

fn parse_game(s: &str) -> Result<GameKind, String> {
    GameKind::from_str(s).ok_or_else(|| format!("unknown game `{}` (expected place, tetro or tttoe)", s))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();

    if SessionConfig::is_disabled() {
        info!("bot disabled via NEWYEAR_BOT_DISABLED");
        return Ok(());
    }

    let mut config = SessionConfig::from_env();
    if let Some(game) = cli.game {
        config.game = game;
    }
    if cli.log_path.is_some() {
        config.log_path = cli.log_path.clone();
    }

    let mut bot = BotRuntime::start(config)?;

    for path in &cli.frames {
        let frame = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        bot.push_frame(frame)?;
        drain_tick(&mut bot, cli.json)?;
    }

    let stats = bot.finish()?;
    info!(
        ticks = stats.ticks,
        commands = stats.commands,
        errors = stats.errors,
        "replay finished"
    );
    Ok(())
}

/// Print messages until the current tick completes
fn drain_tick(bot: &mut BotRuntime, json: bool) -> Result<()> {
    while let Some(msg) = bot.recv_blocking() {
        match msg {
            OutboundMessage::Command(line) => println!("{}", line),
            OutboundMessage::Observation(v) if json => println!("{}", serde_json::to_string(&v)?),
            OutboundMessage::Decision(v) if json => println!("{}", serde_json::to_string(&v)?),
            OutboundMessage::Error(v) if json => println!("{}", serde_json::to_string(&v)?),
            OutboundMessage::TickComplete { .. } => return Ok(()),
            _ => {}
        }
    }
    anyhow::bail!("bot session ended mid-tick")
}
