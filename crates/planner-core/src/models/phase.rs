// ABOUTME: Training phase labels and the week-by-week phase sequence of a plan
// ABOUTME: Canonical phase ordering plus per-phase week counting helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::PlanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::slice;
use std::str::FromStr;

/// Named multi-week block of a plan, declared in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PhaseLabel {
    /// Aerobic base
    Base,
    /// First quality touches
    EarlyQ,
    /// Lactate threshold emphasis
    Threshold,
    /// VO2max interval emphasis
    Interval,
    /// Speed and economy emphasis
    Repetition,
    /// Race-pace specific work
    #[serde(rename = "RS", alias = "RaceSpecific")]
    RaceSpecific,
    /// Pre-race taper
    Taper,
}

impl PhaseLabel {
    /// Canonical phase ordering
    pub const CANONICAL_ORDER: [Self; 7] = [
        Self::Base,
        Self::EarlyQ,
        Self::Threshold,
        Self::Interval,
        Self::Repetition,
        Self::RaceSpecific,
        Self::Taper,
    ];

    /// Position in the canonical ordering
    #[must_use]
    pub const fn canonical_index(&self) -> usize {
        match self {
            Self::Base => 0,
            Self::EarlyQ => 1,
            Self::Threshold => 2,
            Self::Interval => 3,
            Self::Repetition => 4,
            Self::RaceSpecific => 5,
            Self::Taper => 6,
        }
    }

    /// Short label used in catalogs and output
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::EarlyQ => "EarlyQ",
            Self::Threshold => "Threshold",
            Self::Interval => "Interval",
            Self::Repetition => "Repetition",
            Self::RaceSpecific => "RS",
            Self::Taper => "Taper",
        }
    }
}

impl fmt::Display for PhaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PhaseLabel {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Base" => Ok(Self::Base),
            "EarlyQ" => Ok(Self::EarlyQ),
            "Threshold" => Ok(Self::Threshold),
            "Interval" => Ok(Self::Interval),
            "Repetition" => Ok(Self::Repetition),
            "RS" | "RaceSpecific" => Ok(Self::RaceSpecific),
            "Taper" => Ok(Self::Taper),
            other => Err(PlanError::invalid_input(format!(
                "Unknown phase: '{other}'"
            ))),
        }
    }
}

/// Ordered phase-per-week sequence; index 0 is week 1
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhaseSequence(Vec<PhaseLabel>);

impl PhaseSequence {
    /// Wrap an existing list of phases
    #[must_use]
    pub const fn new(phases: Vec<PhaseLabel>) -> Self {
        Self(phases)
    }

    /// Number of weeks
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no weeks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Phase of a 1-based week number
    #[must_use]
    pub fn phase_of_week(&self, week: usize) -> Option<PhaseLabel> {
        week.checked_sub(1).and_then(|index| self.0.get(index).copied())
    }

    /// Iterate phases in week order
    pub fn iter(&self) -> impl Iterator<Item = PhaseLabel> + '_ {
        self.0.iter().copied()
    }

    /// Borrow as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[PhaseLabel] {
        &self.0
    }

    /// Number of weeks allocated to a phase
    #[must_use]
    pub fn weeks_in(&self, phase: PhaseLabel) -> usize {
        self.0.iter().filter(|p| **p == phase).count()
    }
}

impl From<Vec<PhaseLabel>> for PhaseSequence {
    fn from(phases: Vec<PhaseLabel>) -> Self {
        Self(phases)
    }
}

impl<'a> IntoIterator for &'a PhaseSequence {
    type Item = &'a PhaseLabel;
    type IntoIter = slice::Iter<'a, PhaseLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
