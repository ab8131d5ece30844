//! Front-end configuration (TOML)

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chess_rules::Color;
use serde::Deserialize;
use uci_client::UciEngineConfig;

/// File read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "chess_play.toml";

/// Who moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Human,
    Computer,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    pub white: Player,
    pub black: Player,
    /// Computer-only games stop after this many full moves
    pub max_moves: u32,
    pub engine: UciEngineConfig,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            white: Player::Human,
            black: Player::Computer,
            max_moves: 200,
            engine: UciEngineConfig::default(),
        }
    }
}

impl PlayConfig {
    /// Load `path`, or [`DEFAULT_CONFIG_FILE`] if it exists, or the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
            None => return Ok(Self::default()),
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn player(&self, color: Color) -> Player {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub fn has_computer(&self) -> bool {
        self.white == Player::Computer || self.black == Player::Computer
    }

    pub fn has_human(&self) -> bool {
        self.white == Player::Human || self.black == Player::Human
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
