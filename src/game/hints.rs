//! Skill-tiered hint pools.
//!
//! Stateless hint provider in the spirit of a fortune database: three small
//! pools of canned hints, one per skill tier, drawn from uniformly at random.

use rand::Rng;

use super::types::SkillLevel;

const BEGINNER_HINTS: [&str; 3] = [
    "Try looking around the room for clues.",
    "The solution might be simpler than you think. Check the obvious places first.",
    "Remember to interact with objects in the room. They might provide valuable hints.",
];

const INTERMEDIATE_HINTS: [&str; 3] = [
    "You're making good progress. Keep exploring!",
    "Think logically. Sometimes the answer is right in front of you.",
    "Remember, not everything is as it seems. Keep an eye out for hidden clues.",
];

const EXPERT_HINTS: [&str; 3] = [
    "You're doing great! Keep challenging yourself.",
    "Try to think outside the box. The solution might not be straightforward.",
    "Don't forget to revisit previous clues. Sometimes they become relevant later.",
];

/// Provides hints tuned to the player's skill level.
#[derive(Debug, Clone, Copy)]
pub struct HintProvider {
    enabled: bool,
}

impl HintProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Pick a random hint for the given skill level.
    ///
    /// Returns `None` when hints are disabled in the configuration.
    pub fn offer<R: Rng>(&self, rng: &mut R, skill: SkillLevel) -> Option<&'static str> {
        if !self.enabled {
            return None;
        }
        let pool: &[&'static str] = match skill {
            SkillLevel::Beginner => &BEGINNER_HINTS,
            SkillLevel::Intermediate => &INTERMEDIATE_HINTS,
            SkillLevel::Expert => &EXPERT_HINTS,
        };
        Some(pool[rng.gen_range(0..pool.len())])
    }
}
