//! Core game data types: skill levels and parsed player commands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player skill level, chosen at the start of a session.
///
/// The skill level selects which hint pool the game draws from and how many
/// distinct items must be found before the puzzle can be solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl SkillLevel {
    /// Number of distinct items that must be found before `solve` succeeds.
    pub fn required_finds(&self) -> usize {
        match self {
            SkillLevel::Beginner => 2,
            SkillLevel::Intermediate => 3,
            SkillLevel::Expert => 4,
        }
    }
}

impl FromStr for SkillLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "expert" => Ok(SkillLevel::Expert),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Expert => "expert",
        };
        write!(f, "{}", name)
    }
}

/// A parsed line of player input.
///
/// Keyword commands are matched case-insensitively; anything else is treated
/// as a free-text item search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask for a skill-tiered hint.
    Hint,
    /// Attempt to solve the puzzle.
    Solve,
    /// Re-describe the room.
    Look,
    /// Show points and earned badges.
    Score,
    /// Leave the game without escaping.
    Quit,
    /// Free-text search for an item.
    Search(String),
}

impl Command {
    /// Parse a raw input line. Returns `None` for blank input.
    pub fn parse(input: &str) -> Option<Command> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.to_lowercase().as_str() {
            "hint" => Some(Command::Hint),
            "solve" => Some(Command::Solve),
            "look" => Some(Command::Look),
            "score" | "badges" => Some(Command::Score),
            "quit" | "exit" => Some(Command::Quit),
            _ => Some(Command::Search(trimmed.to_string())),
        }
    }
}
