//! Room generation and state.
//!
//! A room is a random subset of the built-in item catalog, each item paired
//! with a flavor detail drawn at random from the detail pool. The room tracks
//! which items have been found, whether the puzzle is solved, and a staged
//! difficulty flavor that escalates with the player's score on repeat plays.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{RoomSettings, ScoringSettings};

use super::types::SkillLevel;

/// Item names a room can contain.
pub const ITEM_CATALOG: [&str; 10] = [
    "Key under the doormat",
    "Locked safe",
    "Mysterious painting",
    "Strange code written on the wall",
    "Hidden message in a book",
    "Locked chest",
    "Cryptic riddle",
    "Broken clock",
    "Strange potion",
    "Old map",
];

/// Flavor details paired with items at generation time. Details are drawn
/// from the pool at random, not index-matched to names; a potion may well
/// "depict a mysterious figure in a dark forest".
const ITEM_DETAILS: [&str; 10] = [
    "The key is rusty but still fits the door.",
    "The safe appears to have a combination lock.",
    "The painting depicts a mysterious figure in a dark forest.",
    "The code on the wall seems to be written in a strange language.",
    "The hidden message reveals a date: 1823.",
    "The chest is adorned with intricate carvings.",
    "The riddle reads: 'What has keys but can't open locks?'",
    "The clock's hands are frozen at midnight.",
    "The potion emits a faint, eerie glow.",
    "The map shows a marked location deep within the forest.",
];

/// A single item placed in a room.
#[derive(Debug, Clone)]
pub struct RoomItem {
    pub name: &'static str,
    pub detail: &'static str,
    pub found: bool,
}

/// Difficulty flavor stages, announced once each as the score climbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum DifficultyStage {
    Base,
    Challenging,
    Rearranged,
}

/// The state of one generated room.
#[derive(Debug, Clone)]
pub struct Room {
    items: Vec<RoomItem>,
    skill: SkillLevel,
    solved: bool,
    stage: DifficultyStage,
}

/// Outcome of a solve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Enough items found; the room is now solved.
    Solved,
    /// Not enough items found yet; the attempt fizzles.
    NotYet,
}

impl Room {
    /// Generate a room: a uniform-size random subset of the catalog, sampled
    /// without replacement, each item paired with a random detail.
    pub fn generate<R: Rng>(rng: &mut R, skill: SkillLevel, settings: &RoomSettings) -> Room {
        let count = rng.gen_range(settings.min_items..=settings.max_items);
        let items = ITEM_CATALOG
            .choose_multiple(rng, count)
            .map(|name| RoomItem {
                name: *name,
                detail: ITEM_DETAILS[rng.gen_range(0..ITEM_DETAILS.len())],
                found: false,
            })
            .collect();
        Room {
            items,
            skill,
            solved: false,
            stage: DifficultyStage::Base,
        }
    }

    /// Room intro plus one line per item.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        out.push_str("You are in a mysterious room. There are several items scattered around the room.\n");
        out.push_str("To escape, you must find the items that will help you solve the puzzle.\n");
        out.push_str("Items in the room:\n");
        for item in &self.items {
            out.push_str(&format!("- {} - {}\n", item.name, item.detail));
        }
        out
    }

    pub fn skill(&self) -> SkillLevel {
        self.skill
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn found_count(&self) -> usize {
        self.items.iter().filter(|i| i.found).count()
    }

    /// Names of items not yet found, in room order. Search candidates.
    pub fn unfound_names(&self) -> Vec<&'static str> {
        self.items
            .iter()
            .filter(|i| !i.found)
            .map(|i| i.name)
            .collect()
    }

    /// Mark an item as found. Returns false when the name is not in the room
    /// or the item was already found (repeat finds award nothing).
    pub fn mark_found(&mut self, name: &str) -> bool {
        match self.items.iter_mut().find(|i| i.name == name) {
            Some(item) if !item.found => {
                item.found = true;
                true
            }
            _ => false,
        }
    }

    /// Attempt to solve the puzzle. Succeeds once enough distinct items have
    /// been found for the room's skill level; `solved` never reverts.
    pub fn attempt_solve(&mut self) -> SolveOutcome {
        if self.solved || self.found_count() >= self.skill.required_finds() {
            self.solved = true;
            SolveOutcome::Solved
        } else {
            SolveOutcome::NotYet
        }
    }

    /// Escalate the difficulty flavor based on the player's score.
    ///
    /// Stages reuse the beginner/intermediate badge thresholds and each
    /// announces exactly once; `None` means nothing new to say.
    pub fn adapt_difficulty(
        &mut self,
        points: u32,
        scoring: &ScoringSettings,
    ) -> Option<&'static str> {
        if points >= scoring.intermediate && self.stage < DifficultyStage::Rearranged {
            self.stage = DifficultyStage::Rearranged;
            Some("The room seems to have rearranged itself, presenting new challenges.")
        } else if points >= scoring.beginner && self.stage < DifficultyStage::Challenging {
            self.stage = DifficultyStage::Challenging;
            Some("You've become quite skilled at this! Let's make things a bit more challenging.")
        } else {
            None
        }
    }
}
