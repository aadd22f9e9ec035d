//! # Configuration Management Module
//!
//! This module handles all configuration aspects of the escaperoom game,
//! providing a centralized configuration system with validation, defaults,
//! and a starter-file generator.
//!
//! ## Configuration Structure
//!
//! The configuration is organized into logical sections:
//!
//! - [`GameSettings`] - Welcome text, default skill, name limits
//! - [`RoomSettings`] - Room generation bounds and the fuzzy-match cutoff
//! - [`ScoringSettings`] - Points per find and badge thresholds
//! - [`HintSettings`] - Hint availability
//! - [`LoggingSettings`] - Log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use escaperoom::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load configuration from file (validated on load)
//!     let config = Config::load("config.toml")?;
//!     println!("Welcome line: {}", config.game.welcome_message);
//!
//!     // Or write a starter configuration
//!     Config::create_default("config.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! Escaperoom uses TOML format for human-readable configuration:
//!
//! ```toml
//! [room]
//! min_items = 4
//! max_items = 10
//! match_cutoff = 0.6
//!
//! [scoring]
//! points_per_find = 10
//! beginner = 50
//! intermediate = 100
//! expert = 150
//! ```
//!
//! Every field is optional; omitted sections fall back to defaults. All
//! values are validated on load, so a min/max inversion or non-increasing
//! badge thresholds fail fast instead of surfacing mid-game.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::game::badges::BadgeTier;
use crate::game::room::ITEM_CATALOG;
use crate::game::types::SkillLevel;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameSettings,
    #[serde(default)]
    pub room: RoomSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub hints: HintSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Session-level settings: greeting and player-name handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
    /// When set, the skill-level prompt is skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_skill: Option<SkillLevel>,
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

/// Room generation bounds and fuzzy matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSettings {
    #[serde(default = "default_min_items")]
    pub min_items: usize,
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    /// Similarity cutoff for fuzzy item search, in (0, 1].
    #[serde(default = "default_match_cutoff")]
    pub match_cutoff: f64,
}

/// Points per find and the badge thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_points_per_find")]
    pub points_per_find: u32,
    #[serde(default = "default_beginner_threshold")]
    pub beginner: u32,
    #[serde(default = "default_intermediate_threshold")]
    pub intermediate: u32,
    #[serde(default = "default_expert_threshold")]
    pub expert: u32,
}

impl ScoringSettings {
    /// Points required to earn the given badge tier.
    pub fn threshold(&self, tier: BadgeTier) -> u32 {
        match tier {
            BadgeTier::Beginner => self.beginner,
            BadgeTier::Intermediate => self.intermediate,
            BadgeTier::Expert => self.expert,
        }
    }
}

/// Hint availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HintSettings {
    #[serde(default = "default_hints_enabled")]
    pub enabled: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default log level when no `-v` flags are given: error, warn, info,
    /// debug, or trace.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file; diagnostics go to stderr when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_welcome_message() -> String {
    "Welcome to the Escape Room!".to_string()
}

fn default_max_name_length() -> usize {
    32
}

fn default_min_items() -> usize {
    4
}

fn default_max_items() -> usize {
    10
}

fn default_match_cutoff() -> f64 {
    0.6
}

fn default_points_per_find() -> u32 {
    10
}

fn default_beginner_threshold() -> u32 {
    50
}

fn default_intermediate_threshold() -> u32 {
    100
}

fn default_expert_threshold() -> u32 {
    150
}

fn default_hints_enabled() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            welcome_message: default_welcome_message(),
            default_skill: None,
            max_name_length: default_max_name_length(),
        }
    }
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            min_items: default_min_items(),
            max_items: default_max_items(),
            match_cutoff: default_match_cutoff(),
        }
    }
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            points_per_find: default_points_per_find(),
            beginner: default_beginner_threshold(),
            intermediate: default_intermediate_threshold(),
            expert: default_expert_threshold(),
        }
    }
}

impl Default for HintSettings {
    fn default() -> Self {
        Self {
            enabled: default_hints_enabled(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write a commented starter configuration. Refuses to overwrite an
    /// existing file.
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if path.exists() {
            bail!(
                "config file {} already exists; remove it first to regenerate",
                path.display()
            );
        }
        let body = toml::to_string_pretty(&Config::default())
            .context("failed to serialize default config")?;
        let contents = format!(
            "# Escaperoom configuration.\n\
             # Every field is optional; missing values fall back to these defaults.\n\n{}",
            body
        );
        fs::write(path, contents)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.game.welcome_message.trim().is_empty() {
            bail!("game.welcome_message must not be empty");
        }
        if self.game.max_name_length == 0 {
            bail!("game.max_name_length must be at least 1");
        }
        if self.room.min_items == 0 {
            bail!("room.min_items must be at least 1");
        }
        if self.room.min_items > self.room.max_items {
            bail!(
                "room.min_items ({}) must not exceed room.max_items ({})",
                self.room.min_items,
                self.room.max_items
            );
        }
        if self.room.max_items > ITEM_CATALOG.len() {
            bail!(
                "room.max_items ({}) exceeds the item catalog size ({})",
                self.room.max_items,
                ITEM_CATALOG.len()
            );
        }
        if !(self.room.match_cutoff > 0.0 && self.room.match_cutoff <= 1.0) {
            bail!(
                "room.match_cutoff ({}) must be in (0, 1]",
                self.room.match_cutoff
            );
        }
        if self.scoring.points_per_find == 0 {
            bail!("scoring.points_per_find must be at least 1");
        }
        if self.scoring.beginner >= self.scoring.intermediate
            || self.scoring.intermediate >= self.scoring.expert
        {
            bail!(
                "scoring thresholds must be strictly increasing (beginner {} < intermediate {} < expert {})",
                self.scoring.beginner,
                self.scoring.intermediate,
                self.scoring.expert
            );
        }
        if !VALID_LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            bail!(
                "logging.level '{}' is not one of {:?}",
                self.logging.level,
                VALID_LOG_LEVELS
            );
        }
        Ok(())
    }
}
