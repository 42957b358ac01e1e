// ABOUTME: Phase sequencer allocating plan weeks to the seven 5K training phases
// ABOUTME: Proportional allocation with priority-ordered rounding correction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use planner_core::constants::phase_allocation;
use planner_core::errors::{PlanError, PlanResult};
use planner_core::models::{PhaseLabel, PhaseSequence};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::iter;
use tracing::{debug, warn};

/// Nominal share of the plan and tie-break priority for one phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseAllocation {
    /// Phase
    pub phase: PhaseLabel,
    /// Nominal proportion, normalized against the other allocations
    pub proportion: f64,
    /// Lower values give weeks away first and receive them last
    pub priority: u32,
}

impl PhaseAllocation {
    /// Allocation entry for a phase
    #[must_use]
    pub const fn new(phase: PhaseLabel, proportion: f64, priority: u32) -> Self {
        Self {
            phase,
            proportion,
            priority,
        }
    }

    const fn preset(phase: PhaseLabel, (proportion, priority): (f64, u32)) -> Self {
        Self::new(phase, proportion, priority)
    }

    const fn sort_key(&self) -> (u32, usize) {
        (self.priority, self.phase.canonical_index())
    }
}

/// Splits a plan of N weeks into contiguous phases
#[derive(Debug, Clone)]
pub struct PhaseSequencer {
    allocations: Vec<PhaseAllocation>,
}

impl Default for PhaseSequencer {
    fn default() -> Self {
        Self::five_k()
    }
}

impl PhaseSequencer {
    /// The 5K build: Base 30%, EarlyQ 15%, Threshold 20%, Interval 30%,
    /// Repetition 20%, RS 5%, Taper 5% (normalized)
    #[must_use]
    pub fn five_k() -> Self {
        Self::with_allocations(vec![
            PhaseAllocation::preset(PhaseLabel::Base, phase_allocation::BASE),
            PhaseAllocation::preset(PhaseLabel::EarlyQ, phase_allocation::EARLY_QUALITY),
            PhaseAllocation::preset(PhaseLabel::Threshold, phase_allocation::THRESHOLD),
            PhaseAllocation::preset(PhaseLabel::Interval, phase_allocation::INTERVAL),
            PhaseAllocation::preset(PhaseLabel::Repetition, phase_allocation::REPETITION),
            PhaseAllocation::preset(PhaseLabel::RaceSpecific, phase_allocation::RACE_SPECIFIC),
            PhaseAllocation::preset(PhaseLabel::Taper, phase_allocation::TAPER),
        ])
    }

    /// Sequencer over a custom allocation table
    #[must_use]
    pub const fn with_allocations(allocations: Vec<PhaseAllocation>) -> Self {
        Self { allocations }
    }

    /// Weeks per phase after rounding correction
    ///
    /// Each phase first gets `max(1, round(share x total_weeks))`, rounding
    /// half to even. Surplus weeks are then taken one at a time from phases
    /// holding more than one week, lowest priority first; missing weeks are
    /// added highest priority first. When every phase is down to one week
    /// the surplus is left in place and trimmed by [`Self::build_sequence`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidDuration` when `total_weeks` is zero
    pub fn allocate(&self, total_weeks: u32) -> PlanResult<BTreeMap<PhaseLabel, u32>> {
        if total_weeks == 0 {
            return Err(PlanError::invalid_duration(0));
        }

        let total_share: f64 = self.allocations.iter().map(|a| a.proportion).sum();
        if !(total_share.is_finite() && total_share > 0.0) {
            return Err(PlanError::invalid_input(
                "phase proportions must sum to a positive number",
            ));
        }

        let mut weeks: BTreeMap<PhaseLabel, u32> = self
            .allocations
            .iter()
            .map(|a| {
                let raw = (a.proportion / total_share * f64::from(total_weeks)).round_ties_even();
                (a.phase, (raw as u32).max(1))
            })
            .collect();

        let allocated: u32 = weeks.values().sum();
        debug!(total_weeks, allocated, "Initial phase allocation");

        let mut ascending = self.allocations.clone();
        ascending.sort_by_key(PhaseAllocation::sort_key);

        if allocated > total_weeks {
            let mut surplus = allocated - total_weeks;
            while surplus > 0 {
                let mut removed_any = false;
                for allocation in &ascending {
                    if let Some(count) = weeks.get_mut(&allocation.phase) {
                        if *count > 1 {
                            *count -= 1;
                            surplus -= 1;
                            removed_any = true;
                            if surplus == 0 {
                                break;
                            }
                        }
                    }
                }
                if !removed_any {
                    warn!(
                        total_weeks,
                        surplus, "Fewer weeks than phases; trailing phases will be dropped"
                    );
                    break;
                }
            }
        } else if allocated < total_weeks {
            let mut missing = total_weeks - allocated;
            'fill: while missing > 0 {
                for allocation in ascending.iter().rev() {
                    *weeks.entry(allocation.phase).or_insert(0) += 1;
                    missing -= 1;
                    if missing == 0 {
                        break 'fill;
                    }
                }
            }
        }

        Ok(weeks)
    }

    /// One phase label per week, phases contiguous in canonical order
    ///
    /// # Errors
    ///
    /// Returns `InvalidDuration` when `total_weeks` is zero
    pub fn build_sequence(&self, total_weeks: u32) -> PlanResult<PhaseSequence> {
        let weeks = self.allocate(total_weeks)?;

        let mut sequence: Vec<PhaseLabel> = PhaseLabel::CANONICAL_ORDER
            .iter()
            .flat_map(|phase| {
                let count = weeks.get(phase).copied().unwrap_or(0) as usize;
                iter::repeat(*phase).take(count)
            })
            .collect();
        sequence.truncate(total_weeks as usize);

        debug!(total_weeks, phases = ?sequence, "Built phase sequence");
        Ok(PhaseSequence::new(sequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::ErrorCode;

    #[test]
    fn test_eight_weeks() {
        let sequence = PhaseSequencer::five_k().build_sequence(8).unwrap();
        assert_eq!(
            sequence.as_slice(),
            &[
                PhaseLabel::Base,
                PhaseLabel::EarlyQ,
                PhaseLabel::Threshold,
                PhaseLabel::Interval,
                PhaseLabel::Interval,
                PhaseLabel::Repetition,
                PhaseLabel::RaceSpecific,
                PhaseLabel::Taper,
            ]
        );
    }

    #[test]
    fn test_surplus_taken_from_lowest_priority_first() {
        // 12 weeks: 2.88, 1.44, 1.92, 2.88, 1.92, 0.48, 0.48 -> 3,1,2,3,2,1,1 = 13
        let weeks = PhaseSequencer::five_k().allocate(12).unwrap();
        assert_eq!(weeks.values().sum::<u32>(), 12);
        assert_eq!(weeks[&PhaseLabel::Base], 2);
    }

    #[test]
    fn test_shortfall_given_to_highest_priority_first() {
        // 26 weeks: 6.24, 3.12, 4.16, 6.24, 4.16, 1.04, 1.04 -> 6,3,4,6,4,1,1 = 25
        let weeks = PhaseSequencer::five_k().allocate(26).unwrap();
        assert_eq!(weeks.values().sum::<u32>(), 26);
        assert_eq!(weeks[&PhaseLabel::Taper], 2);
        assert_eq!(weeks[&PhaseLabel::RaceSpecific], 1);
    }

    #[test]
    fn test_zero_weeks_is_invalid_duration() {
        let err = PhaseSequencer::five_k().build_sequence(0).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDuration);
    }

    #[test]
    fn test_short_plan_truncates_trailing_phases() {
        let sequence = PhaseSequencer::five_k().build_sequence(4).unwrap();
        assert_eq!(
            sequence.as_slice(),
            &[
                PhaseLabel::Base,
                PhaseLabel::EarlyQ,
                PhaseLabel::Threshold,
                PhaseLabel::Interval,
            ]
        );
    }
}
