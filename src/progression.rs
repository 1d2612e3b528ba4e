//! Scoring and budget rules: how answers, hints, and skips move the score,
//! and how the session-wide hint budget drains.

use crate::difficulty::DifficultySettings;
use crate::player::Player;
use serde::{Deserialize, Serialize};

/// The score/penalty economy for one session, captured from
/// [`DifficultySettings`] at session start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionRules {
    correct_points: i64,
    wrong_penalty: i64,
    hint_penalty: i64,
    skip_penalty: i64,
    allow_skipping: bool,
    max_hints: u32,
    pub hints_remaining: u32,
}

impl ProgressionRules {
    pub fn new(settings: &DifficultySettings) -> Self {
        Self {
            correct_points: settings.correct_points,
            wrong_penalty: settings.wrong_penalty,
            hint_penalty: settings.hint_penalty,
            skip_penalty: settings.skip_penalty,
            allow_skipping: settings.allow_skipping,
            max_hints: settings.max_hints,
            hints_remaining: settings.max_hints,
        }
    }

    pub fn award_correct(&self, player: &mut Player) {
        player.score += self.correct_points;
        player.questions_answered += 1;
    }

    pub fn penalize_wrong(&self, player: &mut Player) {
        player.score -= self.wrong_penalty;
    }

    pub fn hint_available(&self) -> bool {
        self.hints_remaining > 0
    }

    /// Spend one hint from the budget and apply its score penalty.
    /// Callers must check [`hint_available`](Self::hint_available) first.
    pub fn charge_hint(&mut self, player: &mut Player) {
        self.hints_remaining = self.hints_remaining.saturating_sub(1);
        player.score -= self.hint_penalty;
        player.hints_used += 1;
    }

    pub fn can_skip(&self) -> bool {
        self.allow_skipping
    }

    pub fn charge_skip(&self, player: &mut Player) {
        player.score -= self.skip_penalty;
    }

    /// Refill the hint budget for a fresh run.
    pub fn reset(&mut self) {
        self.hints_remaining = self.max_hints;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::DifficultySettings;

    fn rules() -> ProgressionRules {
        let settings = DifficultySettings::builder()
            .correct_points(10)
            .wrong_penalty(5)
            .hint_penalty(3)
            .skip_penalty(8)
            .max_hints(2)
            .build();
        ProgressionRules::new(&settings)
    }

    #[test]
    fn test_scoring_sequence() {
        let mut player = Player::new();
        let rules = rules();

        rules.award_correct(&mut player);
        assert_eq!(player.score, 10);
        assert_eq!(player.questions_answered, 1);

        rules.penalize_wrong(&mut player);
        assert_eq!(player.score, 5);
        assert_eq!(player.questions_answered, 1);
    }

    #[test]
    fn test_score_can_go_negative() {
        let mut player = Player::new();
        let rules = rules();
        rules.penalize_wrong(&mut player);
        assert_eq!(player.score, -5);
    }

    #[test]
    fn test_hint_budget_drains() {
        let mut player = Player::new();
        let mut rules = rules();

        assert!(rules.hint_available());
        rules.charge_hint(&mut player);
        rules.charge_hint(&mut player);
        assert!(!rules.hint_available());
        assert_eq!(player.score, -6);
        assert_eq!(player.hints_used, 2);
    }

    #[test]
    fn test_skip_charge() {
        let mut player = Player::new();
        let rules = rules();
        assert!(rules.can_skip());
        rules.charge_skip(&mut player);
        assert_eq!(player.score, -8);
    }

    #[test]
    fn test_reset_refills_hints() {
        let mut player = Player::new();
        let mut rules = rules();
        rules.charge_hint(&mut player);
        rules.reset();
        assert_eq!(rules.hints_remaining, 2);
    }
}
