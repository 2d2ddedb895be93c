//! Героі Беларусі Bot (Rust)
//!
//! Telegram бот проекта «Героі Беларусі»: по команде /start предлагает
//! открыть мини-приложение, показать случайного героя или интересный факт.
//!
//! Usage:
//!   HEROES_BOT_TOKEN=... cargo run --bin heroibelarus_bot

use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use teloxide::prelude::*;
use tracing::info;

use heroibelarus_bot::bot::{run, AppState};
use heroibelarus_bot::config::Config;
use heroibelarus_bot::data::Catalog;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env().context("Failed to load configuration")?;

    // Datasets are fatal before any handler is registered
    let catalog = Catalog::load(&config.heroes_file, &config.facts_file)
        .context("Failed to load datasets")?;

    info!(
        heroes = catalog.heroes().len(),
        facts = catalog.facts().len(),
        "✅ Бот запущен. Нажми Ctrl+C для остановки."
    );

    let bot = Bot::new(&config.token);
    let state = AppState {
        catalog: Arc::new(catalog),
        miniapp_url: config.miniapp_url.clone(),
    };

    run(bot, state).await;

    Ok(())
}
