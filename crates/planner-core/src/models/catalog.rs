// ABOUTME: Read-only session catalog mapping each phase to an ordered template list
// ABOUTME: Shared across plan builds through Arc; loadable from JSON for external catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::phase::PhaseLabel;
use super::session::SessionTemplate;
use crate::errors::PlanResult;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Ordered session templates per phase
///
/// Templates are wrapped in `Arc` so that scheduled sessions can point at
/// them without copying; nothing mutates a template after insertion.
#[derive(Debug, Clone, Default)]
pub struct SessionCatalog {
    by_phase: BTreeMap<PhaseLabel, Vec<Arc<SessionTemplate>>>,
}

impl SessionCatalog {
    /// Empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a template to its phase list
    pub fn insert(&mut self, template: SessionTemplate) {
        self.by_phase
            .entry(template.phase)
            .or_default()
            .push(Arc::new(template));
    }

    /// Append many templates
    pub fn extend(&mut self, templates: impl IntoIterator<Item = SessionTemplate>) {
        for template in templates {
            self.insert(template);
        }
    }

    /// Templates for a phase; empty slice when the phase has none
    #[must_use]
    pub fn templates(&self, phase: PhaseLabel) -> &[Arc<SessionTemplate>] {
        self.by_phase.get(&phase).map_or(&[], Vec::as_slice)
    }

    /// Look a template up by code
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Arc<SessionTemplate>> {
        self.by_phase
            .values()
            .flat_map(|templates| templates.iter())
            .find(|template| template.code == code)
    }

    /// Total template count
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_phase.values().map(Vec::len).sum()
    }

    /// Whether the catalog holds no templates
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a `{ phase: [template, ...] }` JSON document
    ///
    /// Templates without a positive `base_distance_km` get one estimated from
    /// their segments. Each template is filed under the key it appears in.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` for malformed JSON; segment extents that set
    /// neither or both of distance and duration are rejected as well
    pub fn from_json(json: &str) -> PlanResult<Self> {
        let raw: BTreeMap<PhaseLabel, Vec<SessionTemplate>> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for (phase, templates) in raw {
            for mut template in templates {
                template.phase = phase;
                if template.base_distance_km <= 0.0 {
                    template.base_distance_km = template.estimated_distance_km();
                }
                catalog.insert(template);
            }
        }
        debug!(templates = catalog.len(), "Loaded session catalog from JSON");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::zone::ZoneCode;

    #[test]
    fn test_missing_phase_yields_empty_slice() {
        let catalog = SessionCatalog::new();
        assert!(catalog.templates(PhaseLabel::Taper).is_empty());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_from_json_estimates_missing_distance() {
        let json = r#"{
            "Base": [{
                "code": "BASE_EASY_30",
                "name": "Easy 30'",
                "phase": "Base",
                "main_zones": ["E"],
                "main": [{"kind": "continuous", "duration_min": 30, "zone": "E"}]
            }]
        }"#;
        let catalog = SessionCatalog::from_json(json).unwrap();
        let template = catalog.find("BASE_EASY_30").unwrap();
        assert!((template.base_distance_km - 5.0).abs() < 1e-9);
        assert_eq!(template.main_zones, vec![ZoneCode::Easy]);
    }

    #[test]
    fn test_from_json_rejects_ambiguous_segment() {
        let json = r#"{
            "Base": [{
                "code": "BAD",
                "name": "Bad",
                "phase": "Base",
                "main_zones": ["E"],
                "main": [{"kind": "continuous", "distance_m": 1000, "duration_min": 5, "zone": "E"}]
            }]
        }"#;
        assert!(SessionCatalog::from_json(json).is_err());
    }
}
