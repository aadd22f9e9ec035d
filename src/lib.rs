//! # Escaperoom - A Terminal Escape-Room Game
//!
//! Escaperoom drops a single player into a randomly generated room full of
//! curious objects. The player searches for items by typing free text that is
//! fuzzily matched against the item names, asks for hints tuned to a chosen
//! skill level, and racks up points and badges along the way. Escaping takes
//! finding enough items and then solving the puzzle.
//!
//! ## Features
//!
//! - **Free-Text Search**: Player input is normalized and fuzzily matched
//!   against item names, so "locked saf" still finds the Locked safe.
//! - **Skill Tiers**: Beginner, intermediate, and expert skill levels change
//!   both the hints offered and how many items an escape requires.
//! - **Points & Badges**: Every find awards points; badge tiers unlock at
//!   configurable thresholds, at most one per find.
//! - **Adaptive Flavor**: On repeat plays the room escalates its flavor text
//!   as the player's score climbs.
//! - **TOML Configuration**: Room size, scoring thresholds, hints, and
//!   logging are all configurable; `escaperoom init` writes a starter file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use escaperoom::config::Config;
//! use escaperoom::game::{RustylineInput, Session};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").unwrap_or_default();
//!     let input = RustylineInput::new()?;
//!     let session = Session::new(config, input, rand::thread_rng(), std::io::stdout());
//!     let summary = session.run()?;
//!     println!("{} finished with {} points", summary.player, summary.points);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - Core game logic: rooms, fuzzy resolution, hints, badges, and
//!   the interactive session loop
//! - [`config`] - Configuration management and validation
//! - [`logutil`] - Log sanitization helpers for free-text player input

pub mod config;
pub mod game;
pub mod logutil;
