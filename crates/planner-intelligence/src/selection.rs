// ABOUTME: Weekly session selection and weekday scheduling over a phase sequence
// ABOUTME: Deterministic catalog rotation with cursors held in an explicit SelectorState
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session selection.
//!
//! Each week draws its quality sessions from the phase's catalog list and its
//! easy sessions from the easy-only Base templates. Both draws rotate through
//! their lists with cursors that persist from week to week. The cursors live
//! in a [`SelectorState`] value that is passed in and handed back on every
//! call, so a selector can be reused across plan builds without sharing
//! rotation state between them.

use planner_core::constants::weekdays::{MAX_FREQUENCY, QUALITY_PREFERENCE, TRAINING_DAYS};
use planner_core::models::{
    AthleteProfile, PhaseLabel, PhaseSequence, ScheduledSession, SessionCatalog, SessionTemplate,
    WeeklyPlanEntry,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Rotation cursors carried from one week to the next
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorState {
    phase_cursors: BTreeMap<PhaseLabel, usize>,
    easy_cursor: usize,
}

impl SelectorState {
    /// All cursors at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor into a phase's template list
    #[must_use]
    pub fn phase_cursor(&self, phase: PhaseLabel) -> usize {
        self.phase_cursors.get(&phase).copied().unwrap_or(0)
    }

    /// Cursor into the easy template pool
    #[must_use]
    pub const fn easy_cursor(&self) -> usize {
        self.easy_cursor
    }
}

/// Quality sessions required for a phase at a given weekly frequency
#[must_use]
pub const fn quality_sessions_per_week(phase: PhaseLabel, frequency: u8) -> usize {
    match phase {
        PhaseLabel::Base | PhaseLabel::Taper => {
            if frequency >= 5 {
                1
            } else {
                0
            }
        }
        PhaseLabel::EarlyQ | PhaseLabel::RaceSpecific => 1,
        PhaseLabel::Threshold | PhaseLabel::Repetition => {
            if frequency >= 5 {
                2
            } else {
                1
            }
        }
        PhaseLabel::Interval => {
            if frequency <= 3 {
                1
            } else {
                2
            }
        }
    }
}

/// Weekdays (1 = Monday) trained at a given frequency, at most `frequency` of them
#[must_use]
pub fn training_days(frequency: u8) -> &'static [u8] {
    let frequency = frequency.min(MAX_FREQUENCY);
    let days = TRAINING_DAYS[usize::from(frequency)];
    &days[..days.len().min(usize::from(frequency))]
}

/// Place quality sessions on preferred days, then fill remaining days with easy sessions
///
/// Returns `(weekday, template)` pairs sorted by weekday.
#[must_use]
pub fn schedule_week(
    frequency: u8,
    quality: Vec<Arc<SessionTemplate>>,
    easy: Vec<Arc<SessionTemplate>>,
) -> Vec<(u8, Arc<SessionTemplate>)> {
    let days = training_days(frequency);
    let mut slots: BTreeMap<u8, Option<Arc<SessionTemplate>>> =
        days.iter().map(|day| (*day, None)).collect();

    for session in quality {
        let preferred = QUALITY_PREFERENCE
            .iter()
            .find(|day| matches!(slots.get(*day), Some(None)))
            .copied();
        let day = preferred.or_else(|| {
            days.iter()
                .find(|day| matches!(slots.get(*day), Some(None)))
                .copied()
        });
        if let Some(day) = day {
            slots.insert(day, Some(session));
        }
    }

    let mut easy = easy.into_iter();
    for day in days {
        if matches!(slots.get(day), Some(None)) {
            let Some(session) = easy.next() else {
                break;
            };
            slots.insert(*day, Some(session));
        }
    }

    slots
        .into_iter()
        .filter_map(|(day, session)| session.map(|s| (day, s)))
        .collect()
}

/// Picks and schedules sessions week by week from a shared catalog
pub struct SessionSelector<'a> {
    catalog: &'a SessionCatalog,
    easy_pool: Vec<Arc<SessionTemplate>>,
}

impl<'a> SessionSelector<'a> {
    /// Selector over a catalog
    ///
    /// The easy pool is the Base templates whose only main zone is E, or all
    /// Base templates when none qualifies.
    #[must_use]
    pub fn new(catalog: &'a SessionCatalog) -> Self {
        let base = catalog.templates(PhaseLabel::Base);
        let easy_only: Vec<Arc<SessionTemplate>> =
            base.iter().filter(|t| t.is_easy_only()).cloned().collect();
        let easy_pool = if easy_only.is_empty() {
            base.to_vec()
        } else {
            easy_only
        };
        Self { catalog, easy_pool }
    }

    /// Select and schedule one week
    ///
    /// Consumes the incoming cursors and returns the advanced ones alongside
    /// the week. A phase with no templates contributes no quality sessions.
    #[must_use]
    pub fn select_week(
        &self,
        mut state: SelectorState,
        week: u32,
        phase: PhaseLabel,
        frequency: u8,
    ) -> (WeeklyPlanEntry, SelectorState) {
        let quality_count = quality_sessions_per_week(phase, frequency);
        let easy_count = usize::from(frequency).saturating_sub(quality_count);

        let templates = self.catalog.templates(phase);
        let quality = if templates.is_empty() || quality_count == 0 {
            Vec::new()
        } else {
            let cursor = state.phase_cursors.entry(phase).or_insert(0);
            rotate(templates, cursor, quality_count)
        };

        let easy = if self.easy_pool.is_empty() {
            Vec::new()
        } else {
            rotate(&self.easy_pool, &mut state.easy_cursor, easy_count)
        };

        debug!(
            week,
            phase = %phase,
            quality = quality.len(),
            easy = easy.len(),
            "Selected sessions"
        );

        let sessions = schedule_week(frequency, quality, easy)
            .into_iter()
            .map(|(day, template)| ScheduledSession::new(day, template))
            .collect();

        (
            WeeklyPlanEntry {
                week,
                phase,
                sessions,
            },
            state,
        )
    }

    /// Select every week of a sequence starting from `state`
    ///
    /// Returns the weekly entries and the cursors after the last week.
    #[must_use]
    pub fn build_weekly_plan_from(
        &self,
        state: SelectorState,
        athlete: &AthleteProfile,
        sequence: &PhaseSequence,
    ) -> (Vec<WeeklyPlanEntry>, SelectorState) {
        let mut state = state;
        let mut plan = Vec::with_capacity(sequence.len());
        for (week, phase) in (1..).zip(sequence.iter()) {
            let (entry, next) = self.select_week(state, week, phase, athlete.frequency_per_week);
            plan.push(entry);
            state = next;
        }
        (plan, state)
    }

    /// Select every week of a sequence from fresh cursors
    #[must_use]
    pub fn build_weekly_plan(
        &self,
        athlete: &AthleteProfile,
        sequence: &PhaseSequence,
    ) -> Vec<WeeklyPlanEntry> {
        self.build_weekly_plan_from(SelectorState::new(), athlete, sequence)
            .0
    }
}

fn rotate(
    templates: &[Arc<SessionTemplate>],
    cursor: &mut usize,
    count: usize,
) -> Vec<Arc<SessionTemplate>> {
    let chosen = (0..count)
        .map(|offset| Arc::clone(&templates[(*cursor + offset) % templates.len()]))
        .collect();
    *cursor += count;
    chosen
}
