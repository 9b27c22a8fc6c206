//! Headless solo-game driver.
mod config;
mod sim;

use std::path::Path;

use anyhow::{Context, Result};
use config::SimConfig;
use showdown_content::{Deck, DeckLoader, RulesLoader};
use showdown_core::{GameEngine, GameState, PcgDice, RulesConfig, Side};
use sim::SimOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = SimConfig::from_env();

    setup_logging(config.log_dir.as_deref())?;

    let deck = load_deck(config.roster.as_deref())?;
    let rules = load_rules(config.rules.as_deref())?;

    let issues = deck.validate(&rules);
    for issue in &issues {
        tracing::warn!("deck issue: {}", issue);
    }

    let seed = config.resolve_seed();
    tracing::info!(
        seed,
        half_innings = config.half_innings,
        auto_steal = config.auto_steal,
        fatigue = rules.fatigue,
        "starting solo game"
    );

    let mut dice = PcgDice::new(seed);
    let mut engine = GameEngine::with_dice(&rules, &mut dice);
    let state = GameState::new_game(deck.team(Side::Home), deck.team(Side::Away));

    let options = SimOptions::new(config.half_innings, config.auto_steal);
    let state = sim::play(&mut engine, state, options, |line| println!("{line}"))?;

    println!(
        "Final after {}: Away {} - Home {}",
        state.inning, state.score.away, state.score.home
    );

    if config.dump_state {
        let json = serde_json::to_string_pretty(&state).context("Failed to serialize game state")?;
        println!("{json}");
    }

    Ok(())
}

fn load_deck(path: Option<&Path>) -> Result<Deck> {
    match path {
        Some(path) => {
            tracing::info!("Loading deck from {}", path.display());
            DeckLoader::load(path)
        }
        None => DeckLoader::solo().context("Bundled solo deck is invalid"),
    }
}

fn load_rules(path: Option<&Path>) -> Result<RulesConfig> {
    match path {
        Some(path) => {
            tracing::info!("Loading rules from {}", path.display());
            RulesLoader::load(path)
        }
        None => Ok(RulesConfig::default()),
    }
}

/// Setup logging to stderr and, when a directory is configured, to a file.
fn setup_logging(log_dir: Option<&Path>) -> Result<()> {
    // Create env filter
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let file_appender = tracing_appender::rolling::never(dir, "showdown.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            // Leak the guard to keep file writer alive
            std::mem::forget(guard);

            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking_file)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/showdown.log", dir.display());
    }

    Ok(())
}
