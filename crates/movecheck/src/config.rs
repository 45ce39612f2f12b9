//! Game configuration: player names and their tags.

use super::error::ConfigError;
use super::types::{Cell, Tag};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Players and tags for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name of the player who moves first.
    player1_name: String,

    /// Name of the player who moves second.
    player2_name: String,

    /// Tag written for the first player's moves.
    #[serde(default = "default_player1_tag")]
    player1_tag: Tag,

    /// Tag written for the second player's moves.
    #[serde(default = "default_player2_tag")]
    player2_tag: Tag,
}

fn default_player1_tag() -> Tag {
    Tag::FIRST
}

fn default_player2_tag() -> Tag {
    Tag::SECOND
}

impl GameConfig {
    /// Creates a configuration with the default tags.
    #[instrument(skip(player1_name, player2_name))]
    pub fn new(player1_name: impl Into<String>, player2_name: impl Into<String>) -> Self {
        Self {
            player1_name: player1_name.into(),
            player2_name: player2_name.into(),
            player1_tag: default_player1_tag(),
            player2_tag: default_player2_tag(),
        }
    }

    /// Replaces both tags.
    pub fn with_tags(mut self, player1_tag: Tag, player2_tag: Tag) -> Self {
        self.player1_tag = player1_tag;
        self.player2_tag = player2_tag;
        self
    }

    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            player1 = %config.player1_name,
            player2 = %config.player2_name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that names and tags can identify both players unambiguously.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player1_name.trim().is_empty() || self.player2_name.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty"));
        }
        if self.player1_name == self.player2_name {
            return Err(ConfigError::new(format!(
                "Both players are named {:?}",
                self.player1_name
            )));
        }
        if self.player1_tag == self.player2_tag {
            return Err(ConfigError::new(format!(
                "Both players use tag {}",
                self.player1_tag
            )));
        }
        for tag in [self.player1_tag, self.player2_tag] {
            if Cell::from_char(tag.as_char()).is_some() {
                return Err(ConfigError::new(format!(
                    "Tag {} collides with a cell id",
                    tag
                )));
            }
        }
        Ok(())
    }
}
