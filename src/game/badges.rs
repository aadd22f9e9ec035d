//! Points and badge progression.
//!
//! The scorecard tracks points earned from finds and awards badge tiers at
//! configured thresholds. A single check awards at most one badge, walking
//! tiers in ascending order, and an earned badge is never announced twice.

use std::fmt;

use crate::config::ScoringSettings;

/// Badge tiers, in ascending order of the points required to earn them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BadgeTier {
    Beginner,
    Intermediate,
    Expert,
}

impl BadgeTier {
    const ALL: [BadgeTier; 3] = [
        BadgeTier::Beginner,
        BadgeTier::Intermediate,
        BadgeTier::Expert,
    ];
}

impl fmt::Display for BadgeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BadgeTier::Beginner => "Beginner",
            BadgeTier::Intermediate => "Intermediate",
            BadgeTier::Expert => "Expert",
        };
        write!(f, "{}", name)
    }
}

/// Session-scoped points counter and badge book.
#[derive(Debug, Clone, Default)]
pub struct Scorecard {
    points: u32,
    earned: [bool; 3],
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn award_points(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }

    pub fn has_badge(&self, tier: BadgeTier) -> bool {
        self.earned[tier as usize]
    }

    /// Earned badges in ascending tier order.
    pub fn earned_badges(&self) -> Vec<BadgeTier> {
        BadgeTier::ALL
            .into_iter()
            .filter(|t| self.has_badge(*t))
            .collect()
    }

    /// Check the current score against the badge thresholds.
    ///
    /// Awards and returns at most ONE newly earned badge, lowest unearned
    /// tier first. Already-earned badges are skipped.
    pub fn check_badges(&mut self, scoring: &ScoringSettings) -> Option<BadgeTier> {
        for tier in BadgeTier::ALL {
            if self.has_badge(tier) {
                continue;
            }
            if self.points >= scoring.threshold(tier) {
                self.earned[tier as usize] = true;
                return Some(tier);
            }
            // Lower tiers gate higher ones; stop at the first unearned tier.
            return None;
        }
        None
    }

    /// One-line score summary for the `score` command.
    pub fn summary(&self) -> String {
        let badges = self.earned_badges();
        if badges.is_empty() {
            format!("Points: {}. No badges earned yet.", self.points)
        } else {
            let names: Vec<String> = badges.iter().map(|b| b.to_string()).collect();
            format!("Points: {}. Badges: {}.", self.points, names.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scoring() -> ScoringSettings {
        ScoringSettings::default()
    }

    #[test]
    fn one_badge_per_check_in_tier_order() {
        let mut card = Scorecard::new();
        card.award_points(200);
        // Well past every threshold, but each check still awards one tier.
        assert_eq!(card.check_badges(&scoring()), Some(BadgeTier::Beginner));
        assert_eq!(card.check_badges(&scoring()), Some(BadgeTier::Intermediate));
        assert_eq!(card.check_badges(&scoring()), Some(BadgeTier::Expert));
        assert_eq!(card.check_badges(&scoring()), None);
    }

    #[test]
    fn below_threshold_awards_nothing() {
        let mut card = Scorecard::new();
        card.award_points(40);
        assert_eq!(card.check_badges(&scoring()), None);
        assert!(card.earned_badges().is_empty());
    }

    #[test]
    fn threshold_walk_matches_find_cadence() {
        let mut card = Scorecard::new();
        let mut announced = Vec::new();
        for _ in 0..15 {
            card.award_points(10);
            if let Some(tier) = card.check_badges(&scoring()) {
                announced.push((card.points(), tier));
            }
        }
        assert_eq!(
            announced,
            vec![
                (50, BadgeTier::Beginner),
                (100, BadgeTier::Intermediate),
                (150, BadgeTier::Expert),
            ]
        );
    }

    #[test]
    fn summary_lists_earned_badges() {
        let mut card = Scorecard::new();
        assert_eq!(card.summary(), "Points: 0. No badges earned yet.");
        card.award_points(60);
        card.check_badges(&scoring());
        assert_eq!(card.summary(), "Points: 60. Badges: Beginner.");
    }
}
