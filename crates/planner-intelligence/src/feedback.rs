// ABOUTME: Feedback adjuster classifying weekly adherence and rescaling future volume targets
// ABOUTME: Threshold rule table over adherence ratio, fatigue and soreness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use planner_core::constants::feedback::{
    DEFAULT_SCORE, HOLD, HOLD_ADHERENCE_MAX, HOLD_MAX_SCORE, INCREASE_MAX_SCORE,
    MODERATE_REDUCTION, MODERATE_REDUCTION_ADHERENCE, MODERATE_REDUCTION_FATIGUE,
    PLANNED_VOLUME_EPSILON, SLIGHT_INCREASE, STRONG_REDUCTION, STRONG_REDUCTION_ADHERENCE,
    STRONG_REDUCTION_SCORE,
};
use planner_core::models::{AdherenceBucket, FeedbackAdjustment, WeeklyFeedback};
use tracing::{debug, info};

/// Derives volume and quality multipliers from weekly feedback
pub struct FeedbackAdjuster;

impl FeedbackAdjuster {
    /// Completed over planned volume, planned floored at a small epsilon
    #[must_use]
    pub fn adherence(feedback: &WeeklyFeedback) -> f64 {
        feedback.completed_volume_km / feedback.planned_volume_km.max(PLANNED_VOLUME_EPSILON)
    }

    /// Bucket for a week; missing fatigue or soreness counts as 5
    #[must_use]
    pub fn classify(feedback: &WeeklyFeedback) -> AdherenceBucket {
        let adherence = Self::adherence(feedback);
        let fatigue = feedback.fatigue_score.unwrap_or(DEFAULT_SCORE);
        let soreness = feedback.soreness_score.unwrap_or(DEFAULT_SCORE);

        if adherence < STRONG_REDUCTION_ADHERENCE
            || fatigue >= STRONG_REDUCTION_SCORE
            || soreness >= STRONG_REDUCTION_SCORE
        {
            AdherenceBucket::StrongReduction
        } else if adherence < MODERATE_REDUCTION_ADHERENCE || fatigue >= MODERATE_REDUCTION_FATIGUE
        {
            AdherenceBucket::ModerateReduction
        } else if adherence <= HOLD_ADHERENCE_MAX
            && fatigue <= HOLD_MAX_SCORE
            && soreness <= HOLD_MAX_SCORE
        {
            AdherenceBucket::Hold
        } else if adherence > HOLD_ADHERENCE_MAX
            && fatigue <= INCREASE_MAX_SCORE
            && soreness <= INCREASE_MAX_SCORE
        {
            AdherenceBucket::SlightIncrease
        } else {
            AdherenceBucket::HoldFallback
        }
    }

    /// Adjustment derived from one week
    #[must_use]
    pub fn compute_adjustment(feedback: &WeeklyFeedback) -> FeedbackAdjustment {
        let bucket = Self::classify(feedback);
        let (volume_factor, quality_bias) = match bucket {
            AdherenceBucket::StrongReduction => STRONG_REDUCTION,
            AdherenceBucket::ModerateReduction => MODERATE_REDUCTION,
            AdherenceBucket::Hold | AdherenceBucket::HoldFallback => HOLD,
            AdherenceBucket::SlightIncrease => SLIGHT_INCREASE,
        };

        debug!(
            week = feedback.week,
            adherence = Self::adherence(feedback),
            ?bucket,
            volume_factor,
            "Classified weekly feedback"
        );

        FeedbackAdjustment {
            week: feedback.week,
            bucket,
            volume_factor,
            quality_bias,
            comment: bucket.comment().to_owned(),
        }
    }

    /// Multiply every target strictly after `after_week` (1-based) by the volume factor
    #[must_use]
    pub fn apply_to_targets(
        targets: &[f64],
        adjustment: &FeedbackAdjustment,
        after_week: u32,
    ) -> Vec<f64> {
        (1_u32..)
            .zip(targets)
            .map(|(week, target)| {
                if week > after_week {
                    target * adjustment.volume_factor
                } else {
                    *target
                }
            })
            .collect()
    }

    /// Apply each week's adjustment, in week order, to all later weeks
    ///
    /// Adjustments compound: two reductions in a row both apply to the
    /// weeks after the second one.
    #[must_use]
    pub fn apply_history(targets: &[f64], history: &[WeeklyFeedback]) -> Vec<f64> {
        let mut ordered: Vec<&WeeklyFeedback> = history.iter().collect();
        ordered.sort_by_key(|feedback| feedback.week);

        let adjusted = ordered.into_iter().fold(targets.to_vec(), |current, feedback| {
            let adjustment = Self::compute_adjustment(feedback);
            Self::apply_to_targets(&current, &adjustment, feedback.week)
        });

        info!(
            weeks = targets.len(),
            feedback_weeks = history.len(),
            "Applied feedback history to weekly targets"
        );
        adjusted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_adherence_and_fatigue_is_strong_reduction() {
        let week = WeeklyFeedback::new(2, 40.0, 20.0).with_scores(Some(9), None);
        let adjustment = FeedbackAdjuster::compute_adjustment(&week);
        assert_eq!(adjustment.bucket, AdherenceBucket::StrongReduction);
        assert!((adjustment.volume_factor - 0.8).abs() < f64::EPSILON);
        assert!((adjustment.quality_bias - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_on_plan_and_fresh_is_hold() {
        let week = WeeklyFeedback::new(2, 40.0, 40.0).with_scores(Some(3), Some(3));
        let adjustment = FeedbackAdjuster::compute_adjustment(&week);
        assert_eq!(adjustment.bucket, AdherenceBucket::Hold);
        assert!((adjustment.volume_factor - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_above_plan_with_soreness_six_falls_back() {
        let week = WeeklyFeedback::new(1, 30.0, 36.0).with_scores(Some(4), Some(6));
        assert_eq!(FeedbackAdjuster::classify(&week), AdherenceBucket::HoldFallback);
    }

    #[test]
    fn test_zero_planned_volume_does_not_divide_by_zero() {
        let week = WeeklyFeedback::new(1, 0.0, 5.0);
        assert!(FeedbackAdjuster::adherence(&week).is_finite());
        assert_eq!(FeedbackAdjuster::classify(&week), AdherenceBucket::SlightIncrease);
    }

    #[test]
    fn test_apply_only_after_cutoff() {
        let adjustment = FeedbackAdjuster::compute_adjustment(
            &WeeklyFeedback::new(2, 40.0, 30.0).with_scores(Some(5), Some(5)),
        );
        let adjusted = FeedbackAdjuster::apply_to_targets(&[30.0, 35.0, 40.0, 45.0], &adjustment, 2);
        assert_eq!(adjusted[..2], [30.0, 35.0]);
        assert!((adjusted[2] - 36.0).abs() < 1e-9);
        assert!((adjusted[3] - 40.5).abs() < 1e-9);
    }
}
