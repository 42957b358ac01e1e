// ABOUTME: Pace annotation of session templates and projection of scheduled weeks into workouts
// ABOUTME: Annotated copies carry pace bounds; shared catalog templates are never modified
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pace annotation.
//!
//! Templates in a catalog are shared behind `Arc` and stay untouched. The
//! annotator produces an [`AnnotatedSession`], a per-run value pairing each
//! segment with the pace bounds of its zone, and renders it as text.

use crate::zones::{ZoneRow, ZoneTable};
use planner_core::errors::PlanResult;
use planner_core::models::plan::weekday_name;
use planner_core::models::{
    AthleteProfile, ContinuousSegment, Extent, IntervalBlock, Segment, SessionTemplate,
    WeeklyPlanEntry, Workout, ZoneCode,
};
use serde::Serialize;
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::debug;

/// Slow and fast pace of a zone, raw and formatted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaceBounds {
    /// Zone the bounds belong to
    pub zone: ZoneCode,
    /// Slow pace (min/km)
    pub slow_min_km: f64,
    /// Fast pace (min/km)
    pub fast_min_km: f64,
    /// Slow pace `mm:ss`
    pub slow: String,
    /// Fast pace `mm:ss`
    pub fast: String,
}

impl From<&ZoneRow> for PaceBounds {
    fn from(row: &ZoneRow) -> Self {
        Self {
            zone: row.zone,
            slow_min_km: row.pace_slow_min_km,
            fast_min_km: row.pace_fast_min_km,
            slow: row.pace_slow_str.clone(),
            fast: row.pace_fast_str.clone(),
        }
    }
}

impl PaceBounds {
    fn render(&self) -> String {
        format!("@ {}–{} ({})", self.slow, self.fast, self.zone)
    }
}

/// Continuous segment with its pace bounds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedContinuous {
    /// Source segment
    pub segment: ContinuousSegment,
    /// Bounds for the segment's zone
    pub pace: PaceBounds,
}

/// Interval block with work and recovery pace bounds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedInterval {
    /// Source block
    pub block: IntervalBlock,
    /// Bounds for the work zone
    pub work_pace: PaceBounds,
    /// Bounds for the recovery zone
    pub recovery_pace: PaceBounds,
}

/// Annotated element of a main set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnnotatedSegment {
    /// Continuous segment
    Continuous(AnnotatedContinuous),
    /// Interval block
    Interval(AnnotatedInterval),
}

/// Per-run annotated view of a shared template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedSession {
    /// Shared template
    pub template: Arc<SessionTemplate>,
    /// Annotated warm-up
    pub warmup: Vec<AnnotatedContinuous>,
    /// Annotated main set
    pub main: Vec<AnnotatedSegment>,
    /// Annotated cool-down
    pub cooldown: Vec<AnnotatedContinuous>,
}

impl AnnotatedSession {
    /// Multi-line description: header, goal, zones, then each block's items
    #[must_use]
    pub fn describe(&self) -> String {
        let template = &self.template;
        let mut lines = vec![format!("{} · phase {}", template.name, template.phase)];
        if !template.description.is_empty() {
            lines.push(format!("   Goal: {}", template.description));
        }
        let zones: Vec<&str> = template.main_zones.iter().map(ZoneCode::code).collect();
        lines.push(format!("   Main zones: {}", zones.join("/")));

        if !self.warmup.is_empty() {
            lines.push("   Warm-up:".to_owned());
            lines.extend(self.warmup.iter().map(|s| item(&describe_continuous(s))));
        }
        if !self.main.is_empty() {
            lines.push("   Main set:".to_owned());
            lines.extend(self.main.iter().map(|segment| {
                item(&match segment {
                    AnnotatedSegment::Continuous(s) => describe_continuous(s),
                    AnnotatedSegment::Interval(b) => describe_interval(b),
                })
            }));
        }
        if !self.cooldown.is_empty() {
            lines.push("   Cool-down:".to_owned());
            lines.extend(self.cooldown.iter().map(|s| item(&describe_continuous(s))));
        }

        lines.join("\n")
    }
}

fn item(text: &str) -> String {
    format!("      • {text}")
}

fn with_note(mut text: String, note: &str) -> String {
    if !note.is_empty() {
        let _ = write!(text, " · {note}");
    }
    text
}

fn describe_continuous(annotated: &AnnotatedContinuous) -> String {
    let amount = match annotated.segment.extent {
        Extent::Distance { meters } => format!("{:.1} km", meters / 1000.0),
        Extent::Duration { minutes } => format!("{minutes:.0} min"),
    };
    with_note(
        format!("{amount} {}", annotated.pace.render()),
        &annotated.segment.note,
    )
}

fn describe_interval(annotated: &AnnotatedInterval) -> String {
    let block = &annotated.block;
    with_note(
        format!(
            "{} x {} {} | rec {} {}",
            block.reps,
            interval_extent(block.work),
            annotated.work_pace.render(),
            interval_extent(block.recovery),
            annotated.recovery_pace.render(),
        ),
        &block.note,
    )
}

fn interval_extent(extent: Extent) -> String {
    match extent {
        Extent::Distance { meters } => format!("{meters:.0} m"),
        Extent::Duration { minutes } => format!("{minutes:.0} min"),
    }
}

/// Attaches zone paces to sessions
pub struct PaceAnnotator<'a> {
    zones: &'a ZoneTable,
}

impl<'a> PaceAnnotator<'a> {
    /// Annotator over a zone table
    #[must_use]
    pub const fn new(zones: &'a ZoneTable) -> Self {
        Self { zones }
    }

    fn bounds(&self, zone: ZoneCode) -> PlanResult<PaceBounds> {
        self.zones.get(zone).map(PaceBounds::from)
    }

    fn annotate_continuous(&self, segment: &ContinuousSegment) -> PlanResult<AnnotatedContinuous> {
        Ok(AnnotatedContinuous {
            pace: self.bounds(segment.zone)?,
            segment: segment.clone(),
        })
    }

    fn annotate_interval(&self, block: &IntervalBlock) -> PlanResult<AnnotatedInterval> {
        Ok(AnnotatedInterval {
            work_pace: self.bounds(block.work_zone)?,
            recovery_pace: self.bounds(block.recovery_zone)?,
            block: block.clone(),
        })
    }

    /// Annotate every segment of a template
    ///
    /// # Errors
    ///
    /// Returns `UnknownZone` when a segment's zone is missing from the table
    pub fn annotate(&self, template: &Arc<SessionTemplate>) -> PlanResult<AnnotatedSession> {
        let warmup = template
            .warmup
            .iter()
            .map(|s| self.annotate_continuous(s))
            .collect::<PlanResult<Vec<_>>>()?;
        let main = template
            .main
            .iter()
            .map(|segment| match segment {
                Segment::Continuous(s) => self.annotate_continuous(s).map(AnnotatedSegment::Continuous),
                Segment::Interval(b) => self.annotate_interval(b).map(AnnotatedSegment::Interval),
            })
            .collect::<PlanResult<Vec<_>>>()?;
        let cooldown = template
            .cooldown
            .iter()
            .map(|s| self.annotate_continuous(s))
            .collect::<PlanResult<Vec<_>>>()?;

        Ok(AnnotatedSession {
            template: Arc::clone(template),
            warmup,
            main,
            cooldown,
        })
    }

    /// Annotate and render a template
    ///
    /// # Errors
    ///
    /// Returns `UnknownZone` when a segment's zone is missing from the table
    pub fn describe(&self, template: &Arc<SessionTemplate>) -> PlanResult<String> {
        Ok(self.annotate(template)?.describe())
    }

    /// Flatten scheduled weeks into workouts sorted by week, then weekday
    ///
    /// # Errors
    ///
    /// Returns `UnknownZone` when a scheduled template uses a zone missing
    /// from the table
    pub fn project_workouts(
        &self,
        athlete: &AthleteProfile,
        weeks: &[WeeklyPlanEntry],
    ) -> PlanResult<Vec<Workout>> {
        let mut workouts = Vec::with_capacity(weeks.iter().map(|w| w.sessions.len()).sum());
        for week in weeks {
            for session in &week.sessions {
                let template = &session.template;
                workouts.push(Workout {
                    athlete_name: athlete.name.clone(),
                    week: week.week,
                    day_of_week: session.day_of_week,
                    weekday_name: weekday_name(session.day_of_week),
                    phase: week.phase,
                    session_code: template.code.clone(),
                    session_name: template.name.clone(),
                    main_zones: template.main_zones.clone(),
                    is_quality: template.is_quality(),
                    planned_distance_km: session.planned_distance_km,
                    description: self.describe(template)?,
                });
            }
        }
        workouts.sort_by_key(|w| (w.week, w.day_of_week));
        debug!(workouts = workouts.len(), "Projected workouts");
        Ok(workouts)
    }
}
