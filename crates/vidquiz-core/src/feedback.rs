/// Qualitative feedback bucket for a scored attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Mastery,
    Strong,
    Moderate,
    NeedsReview,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Mastery => "mastery",
            Tier::Strong => "strong",
            Tier::Moderate => "moderate",
            Tier::NeedsReview => "needs review",
        }
    }

    /// The encouragement line shown alongside the score.
    pub fn message(&self) -> &'static str {
        match self {
            Tier::Mastery => "Excellent! You have mastered this content!",
            Tier::Strong => "Great job! You understand most of the concepts!",
            Tier::Moderate => "Good effort! Review the key points to improve!",
            Tier::NeedsReview => "Keep learning! Review the summary and try again!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreFeedback {
    pub percentage: f64,
    pub tier: Tier,
}

/// Map a score onto a percentage and tier. `total` is guaranteed non-zero by
/// the completion gate. Computed in floating point so exact boundaries
/// (9/10 = 90%) land in the right tier.
pub fn feedback(correct: usize, total: usize) -> ScoreFeedback {
    let percentage = 100.0 * correct as f64 / total as f64;

    let tier = if percentage >= 90.0 {
        Tier::Mastery
    } else if percentage >= 70.0 {
        Tier::Strong
    } else if percentage >= 50.0 {
        Tier::Moderate
    } else {
        Tier::NeedsReview
    };

    ScoreFeedback { percentage, tier }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_score_is_mastery() {
        let fb = feedback(3, 3);
        assert_eq!(fb.percentage, 100.0);
        assert_eq!(fb.tier, Tier::Mastery);
    }

    #[test]
    fn lower_bounds_are_inclusive() {
        assert_eq!(feedback(9, 10).tier, Tier::Mastery);
        assert_eq!(feedback(7, 10).tier, Tier::Strong);
        assert_eq!(feedback(5, 10).tier, Tier::Moderate);
    }

    #[test]
    fn just_under_a_boundary_falls_to_the_lower_tier() {
        assert_eq!(feedback(89, 100).tier, Tier::Strong);
        assert_eq!(feedback(69, 100).tier, Tier::Moderate);
        assert_eq!(feedback(49, 100).tier, Tier::NeedsReview);
    }

    #[test]
    fn six_of_ten_is_moderate() {
        let fb = feedback(6, 10);
        assert_eq!(fb.percentage, 60.0);
        assert_eq!(fb.tier, Tier::Moderate);
    }

    #[test]
    fn zero_correct_needs_review() {
        assert_eq!(feedback(0, 4).tier, Tier::NeedsReview);
    }
}
