//! Hero and fact datasets
//!
//! Two read-only collections loaded once at process start from JSON arrays
//! and held in memory until exit. There is no write path.

use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// One historical figure: display name plus a short biography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroEntry {
    pub name: String,
    pub bio: String,
}

impl HeroEntry {
    /// Two-line Markdown block: title line + body line.
    pub fn as_markdown(&self) -> String {
        format!("🎖️ *{}*\n{}", self.name, self.bio)
    }
}

/// One trivia item, associated with a hero by name string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactEntry {
    pub hero: String,
    pub fact: String,
}

impl FactEntry {
    pub fn as_markdown(&self) -> String {
        format!("💡 *{}*\n{}", self.hero, self.fact)
    }
}

/// Immutable in-memory datasets shared read-only into handlers.
#[derive(Debug, Clone)]
pub struct Catalog {
    heroes: Vec<HeroEntry>,
    facts: Vec<FactEntry>,
}

impl Catalog {
    /// Load both datasets from JSON files.
    ///
    /// Unreadable or malformed files are fatal. Empty arrays load fine but
    /// are reported, since every selection against them will fail.
    pub fn load(heroes_path: &Path, facts_path: &Path) -> Result<Self> {
        let heroes: Vec<HeroEntry> = load_entries(heroes_path)?;
        let facts: Vec<FactEntry> = load_entries(facts_path)?;

        if heroes.is_empty() {
            warn!(path = %heroes_path.display(), "Heroes dataset is empty");
        }
        if facts.is_empty() {
            warn!(path = %facts_path.display(), "Facts dataset is empty");
        }

        Ok(Self { heroes, facts })
    }

    /// Build a catalog from already loaded entries.
    pub fn new(heroes: Vec<HeroEntry>, facts: Vec<FactEntry>) -> Self {
        Self { heroes, facts }
    }

    pub fn heroes(&self) -> &[HeroEntry] {
        &self.heroes
    }

    pub fn facts(&self) -> &[FactEntry] {
        &self.facts
    }

    /// Uniform random draw over the hero collection, with replacement.
    pub fn random_hero(&self) -> Result<&HeroEntry> {
        self.heroes
            .choose(&mut thread_rng())
            .ok_or(Error::EmptyDataset("heroes"))
    }

    /// Uniform random draw over the fact collection, with replacement.
    pub fn random_fact(&self) -> Result<&FactEntry> {
        self.facts
            .choose(&mut thread_rng())
            .ok_or(Error::EmptyDataset("facts"))
    }
}

/// Read a JSON array of entries from a file.
fn load_entries<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::DataFileNotFound(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&content).map_err(|e| Error::InvalidDataFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
