//! Roster engine - demo entry point.
//!
//! Builds an in-memory roster, seeds it, exercises a few use cases and logs
//! the resulting statistics.

use anyhow::Context;
use roster_domain::PlainCharacter;
use roster_engine::{config, App, EngineConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    let config = EngineConfig::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting roster engine");

    let app = App::in_memory();
    let roster = &app.use_cases;

    let seed = match config.load_seed()? {
        Some(records) => {
            tracing::info!(path = ?config.seed_file, count = records.len(), "Loaded seed file");
            records
        }
        None => demo_roster(),
    };
    roster
        .management
        .import_characters(seed)
        .context("Failed to import seed characters")?;

    for character in roster.queries.list_characters()? {
        tracing::info!(character = %character.describe(), "Roster entry");
    }

    if let Some(first) = roster.queries.list_characters()?.into_iter().next() {
        match roster.management.level_up_character(first.name()) {
            Ok(leveled) => tracing::info!(
                character = %leveled.character.describe(),
                "Level up applied"
            ),
            Err(e) => tracing::warn!(name = %first.name(), error = %e, code = e.code(), "Level up skipped"),
        }
    }

    let warriors = roster.queries.powerful_warriors(config.power_threshold)?;
    tracing::info!(
        threshold = config.power_threshold,
        count = warriors.len(),
        "Powerful warriors"
    );

    let names: Vec<_> = roster
        .queries
        .list_characters()?
        .into_iter()
        .map(|c| c.name().clone())
        .collect();
    if let [challenger, opponent, ..] = names.as_slice() {
        match roster.combat.arrange_duel(challenger, opponent) {
            Ok(pairing) => tracing::info!(
                challenger = %pairing.challenger.name(),
                opponent = %pairing.opponent.name(),
                level_gap = pairing.level_gap,
                favoured = ?pairing.favoured.as_ref().map(|n| n.as_str()),
                "Duel check passed"
            ),
            Err(e) => tracing::info!(error = %e, code = e.code(), "Duel check refused"),
        }
    }

    let stats = roster.statistics.get_character_statistics()?;
    tracing::info!(
        statistics = %serde_json::to_string(&stats)?,
        "Roster statistics"
    );

    Ok(())
}

fn demo_roster() -> Vec<PlainCharacter> {
    [
        ("Rex", "Guerreiro", 95),
        ("Merlin", "Mago", 40),
        ("Robin", "Arqueiro", 19),
        ("Arthur", "Paladino", 60),
        ("Conan", "Guerreiro", 30),
    ]
    .into_iter()
    .map(|(name, class, level)| PlainCharacter {
        name: name.to_string(),
        class: class.to_string(),
        level,
    })
    .collect()
}
