// ABOUTME: Early-quality templates bridging easy base work and threshold sessions
// ABOUTME: Progressive runs and a controlled threshold fartlek
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{easy, repeats};
use planner_core::models::{ContinuousSegment, Extent, PhaseLabel, SessionTemplate, ZoneCode};

const E: ZoneCode = ZoneCode::Easy;
const M: ZoneCode = ZoneCode::Marathon;
const T: ZoneCode = ZoneCode::Threshold;

/// Early-quality templates in selection order
#[must_use]
pub fn sessions() -> Vec<SessionTemplate> {
    vec![
        SessionTemplate::new(
            "EQ_PROGRESSIVE_40",
            "Progressive 40' (E to light T)",
            PhaseLabel::EarlyQ,
            vec![E, T],
        )
        .warmup(vec![easy(10.0)])
        .main(vec![
            easy(15.0).note("Opening in E").into(),
            ContinuousSegment::minutes(10.0, T)
                .note("Light finish in T")
                .into(),
        ])
        .cooldown(vec![easy(5.0)])
        .base_distance_km(9.0)
        .description("Progressive run finishing at a light threshold effort."),
        SessionTemplate::new(
            "EQ_FARTLEK_6x3T",
            "Fartlek 6 x 3' @ T / 2' E",
            PhaseLabel::EarlyQ,
            vec![T, E],
        )
        .warmup(vec![easy(12.0)])
        .main(vec![repeats(6, Extent::minutes(3.0), T, Extent::minutes(2.0))
            .note("Controlled fartlek at threshold pace")
            .into()])
        .cooldown(vec![easy(10.0)])
        .base_distance_km(10.0)
        .description("Gentle step into threshold training through pace changes."),
        SessionTemplate::new(
            "EQ_PROGRESSIVE_55",
            "Progressive 55' (E to M/T)",
            PhaseLabel::EarlyQ,
            vec![E, M, T],
        )
        .warmup(vec![easy(10.0)])
        .main(vec![
            easy(25.0).note("Controlled start").into(),
            ContinuousSegment::minutes(12.0, M)
                .note("Moderate middle section")
                .into(),
            ContinuousSegment::minutes(8.0, T)
                .note("Finish at light T")
                .into(),
        ])
        .cooldown(vec![easy(5.0)])
        .base_distance_km(11.5)
        .description("Long progression building endurance and a feel for pace."),
    ]
}
