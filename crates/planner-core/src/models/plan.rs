// ABOUTME: Weekly plan structures: scheduled sessions, weekly entries and output workouts
// ABOUTME: Workouts are the flattened, consumer-facing projection of a scheduled session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::phase::PhaseLabel;
use super::session::SessionTemplate;
use super::zone::ZoneCode;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Template placed on a weekday, with the distance planned for this occurrence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledSession {
    /// 1 = Monday .. 7 = Sunday
    pub day_of_week: u8,
    /// Shared template
    pub template: Arc<SessionTemplate>,
    /// Distance planned for this occurrence (km)
    pub planned_distance_km: f64,
}

impl ScheduledSession {
    /// Schedule a template; the planned distance starts at its nominal distance
    #[must_use]
    pub fn new(day_of_week: u8, template: Arc<SessionTemplate>) -> Self {
        let planned_distance_km = template.base_distance_km;
        Self {
            day_of_week,
            template,
            planned_distance_km,
        }
    }
}

/// One week of the plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPlanEntry {
    /// 1-based week number
    pub week: u32,
    /// Phase of the week
    pub phase: PhaseLabel,
    /// Sessions sorted by weekday, weekdays unique
    pub sessions: Vec<ScheduledSession>,
}

impl WeeklyPlanEntry {
    /// Sum of planned distances (km)
    #[must_use]
    pub fn planned_volume_km(&self) -> f64 {
        self.sessions.iter().map(|s| s.planned_distance_km).sum()
    }

    /// Sum of positive nominal distances (km)
    #[must_use]
    pub fn nominal_volume_km(&self) -> f64 {
        self.sessions
            .iter()
            .map(|s| s.template.base_distance_km)
            .filter(|km| *km > 0.0)
            .sum()
    }
}

/// Output record for one scheduled session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Athlete display name
    pub athlete_name: String,
    /// 1-based week number
    pub week: u32,
    /// 1 = Monday .. 7 = Sunday
    pub day_of_week: u8,
    /// Three-letter weekday name
    pub weekday_name: String,
    /// Phase of the week
    pub phase: PhaseLabel,
    /// Template code
    pub session_code: String,
    /// Template name
    pub session_name: String,
    /// Primary zones
    pub main_zones: Vec<ZoneCode>,
    /// Whether the session works in T, I or R
    pub is_quality: bool,
    /// Planned distance (km)
    pub planned_distance_km: f64,
    /// Rendered multi-line description
    pub description: String,
}

/// Map a 1-7 weekday number to `chrono::Weekday`
#[must_use]
pub fn weekday_from_number(day_of_week: u8) -> Option<Weekday> {
    match day_of_week {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}

/// Three-letter weekday name, `Day<n>` outside 1-7
#[must_use]
pub fn weekday_name(day_of_week: u8) -> String {
    weekday_from_number(day_of_week)
        .map_or_else(|| format!("Day{day_of_week}"), |day| day.to_string())
}
