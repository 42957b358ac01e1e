// ABOUTME: Built-in 5K session library, one submodule per training phase
// ABOUTME: Built once into a shared SessionCatalog and handed out through Arc
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Built-in 5K session catalog
//!
//! Every phase module exposes a `sessions()` function returning its templates
//! in selection order. The order matters: the selector rotates through each
//! phase list from the front, so reordering a table changes generated plans.
//!
//! Use [`global_catalog`] in production code. Tests that need an isolated
//! instance can call [`build_5k_catalog`] directly.

/// Easy-running base phase
pub mod base;
/// First quality sessions after the base block
pub mod early_quality;
/// VO2max intervals
pub mod interval;
/// Race-specific sessions
pub mod race_specific;
/// Fast repetitions for speed and economy
pub mod repetition;
/// Taper sessions before race day
pub mod taper;
/// Lactate-threshold sessions
pub mod threshold;

use planner_core::models::{ContinuousSegment, Extent, IntervalBlock, SessionCatalog, ZoneCode};
use std::sync::{Arc, OnceLock};
use tracing::info;

static CATALOG: OnceLock<Arc<SessionCatalog>> = OnceLock::new();

/// Build a fresh copy of the 5K catalog
#[must_use]
pub fn build_5k_catalog() -> SessionCatalog {
    let mut catalog = SessionCatalog::new();
    catalog.extend(base::sessions());
    catalog.extend(early_quality::sessions());
    catalog.extend(threshold::sessions());
    catalog.extend(interval::sessions());
    catalog.extend(repetition::sessions());
    catalog.extend(race_specific::sessions());
    catalog.extend(taper::sessions());
    catalog
}

/// Shared 5K catalog, built on first use
#[must_use]
pub fn global_catalog() -> Arc<SessionCatalog> {
    CATALOG
        .get_or_init(|| {
            let catalog = build_5k_catalog();
            info!(templates = catalog.len(), "Built 5K session catalog");
            Arc::new(catalog)
        })
        .clone()
}

/// Timed segment in the easy zone
pub(crate) const fn easy(minutes: f64) -> ContinuousSegment {
    ContinuousSegment::minutes(minutes, ZoneCode::Easy)
}

/// Repetitions with easy-zone recovery
pub(crate) const fn repeats(
    reps: u32,
    work: Extent,
    work_zone: ZoneCode,
    recovery: Extent,
) -> IntervalBlock {
    IntervalBlock::new(reps, work, work_zone, recovery, ZoneCode::Easy)
}

/// Display name for a table-driven session without an explicit one
pub(crate) fn name_from_code(code: &str) -> String {
    code.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::models::PhaseLabel;
    use std::collections::HashSet;

    #[test]
    fn test_phase_counts() {
        let catalog = build_5k_catalog();
        let expected = [
            (PhaseLabel::Base, 5),
            (PhaseLabel::EarlyQ, 3),
            (PhaseLabel::Threshold, 50),
            (PhaseLabel::Interval, 50),
            (PhaseLabel::Repetition, 50),
            (PhaseLabel::RaceSpecific, 4),
            (PhaseLabel::Taper, 4),
        ];
        for (phase, count) in expected {
            assert_eq!(catalog.templates(phase).len(), count, "{phase:?}");
        }
        assert_eq!(catalog.len(), 166);
    }

    #[test]
    fn test_codes_are_unique() {
        let catalog = build_5k_catalog();
        let mut seen = HashSet::new();
        for phase in PhaseLabel::CANONICAL_ORDER {
            for template in catalog.templates(phase) {
                assert!(seen.insert(template.code.clone()), "{}", template.code);
            }
        }
    }

    #[test]
    fn test_templates_filed_under_own_phase() {
        let catalog = build_5k_catalog();
        for phase in PhaseLabel::CANONICAL_ORDER {
            assert!(catalog
                .templates(phase)
                .iter()
                .all(|template| template.phase == phase));
        }
    }

    #[test]
    fn test_every_template_has_positive_distance() {
        let catalog = build_5k_catalog();
        for phase in PhaseLabel::CANONICAL_ORDER {
            for template in catalog.templates(phase) {
                assert!(template.base_distance_km > 0.0, "{}", template.code);
            }
        }
    }

    #[test]
    fn test_global_catalog_is_shared() {
        assert!(Arc::ptr_eq(&global_catalog(), &global_catalog()));
    }
}
