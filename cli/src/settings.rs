use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use serde::Deserialize;
use sweeper_core::{CellCount, Coord, GameConfig};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::BEGINNER,
            Self::Intermediate => GameConfig::INTERMEDIATE,
            Self::Expert => GameConfig::EXPERT,
        }
    }
}

/// Board settings, every field optional so sources can be layered.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub difficulty: Option<Difficulty>,
    pub rows: Option<Coord>,
    pub columns: Option<Coord>,
    pub mines: Option<CellCount>,
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read settings from {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("could not parse settings in {}", path.display()))
    }

    /// Fields set in `other` win over the ones in `self`.
    pub fn overlay(self, other: Settings) -> Settings {
        Settings {
            difficulty: other.difficulty.or(self.difficulty),
            rows: other.rows.or(self.rows),
            columns: other.columns.or(self.columns),
            mines: other.mines.or(self.mines),
        }
    }

    /// Starts from the preset (or the default board) and applies explicit sizes on top.
    pub fn resolve(&self) -> sweeper_core::Result<GameConfig> {
        let base = self.difficulty.map(Difficulty::config).unwrap_or_default();
        GameConfig::new(
            self.rows.unwrap_or(base.rows()),
            self.columns.unwrap_or(base.columns()),
            self.mines.unwrap_or(base.mines),
        )
    }
}
