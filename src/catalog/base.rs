// ABOUTME: Base-phase templates: easy continuous runs plus light hill and stride work
// ABOUTME: The easy-only entries double as the easy-day pool for every phase
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{easy, repeats};
use planner_core::models::{Extent, PhaseLabel, SessionTemplate, ZoneCode};

const E: ZoneCode = ZoneCode::Easy;
const R: ZoneCode = ZoneCode::Repetition;

/// Base-phase templates in selection order
#[must_use]
pub fn sessions() -> Vec<SessionTemplate> {
    vec![
        SessionTemplate::new("BASE_EASY_40", "Easy Run 40'", PhaseLabel::Base, vec![E])
            .warmup(vec![easy(10.0).note("Easy")])
            .main(vec![easy(20.0).note("Steady easy running").into()])
            .cooldown(vec![easy(10.0).note("Relaxed easy")])
            .base_distance_km(8.0)
            .description("Continuous easy run of about 40 minutes."),
        SessionTemplate::new("BASE_EASY_30", "Easy Run 30'", PhaseLabel::Base, vec![E])
            .warmup(vec![easy(8.0).note("Gentle warm-up")])
            .main(vec![easy(14.0).note("Steady easy running").into()])
            .cooldown(vec![easy(8.0).note("Shake out")])
            .base_distance_km(6.0)
            .description("Short session that adds frequency and active recovery."),
        SessionTemplate::new("BASE_EASY_60", "Easy Long 60'", PhaseLabel::Base, vec![E])
            .warmup(vec![easy(10.0)])
            .main(vec![easy(40.0).into()])
            .cooldown(vec![easy(10.0)])
            .base_distance_km(12.0)
            .description("Continuous easy run (~60') for aerobic development."),
        SessionTemplate::new(
            "BASE_HILLS_DRILLS",
            "Easy 45' + 6x20\" hill strides",
            PhaseLabel::Base,
            vec![E, R],
        )
        .warmup(vec![easy(15.0)])
        .main(vec![
            easy(25.0).note("Steady easy running").into(),
            repeats(6, Extent::minutes(0.33), R, Extent::minutes(1.5))
                .note("Uphill strides for form and strength")
                .into(),
        ])
        .cooldown(vec![easy(10.0)])
        .base_distance_km(9.0)
        .description("Hill strides for strength and running economy."),
        SessionTemplate::new("BASE_EASY_STRIDES", "Easy + Strides", PhaseLabel::Base, vec![E, R])
            .warmup(vec![easy(15.0)])
            .main(vec![easy(20.0).note("Continuous easy block").into()])
            .cooldown(vec![easy(10.0)])
            .base_distance_km(8.5)
            .description("Easy running with short strides to introduce speed gently."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easy_pool_members() {
        let easy_codes: Vec<String> = sessions()
            .into_iter()
            .filter(SessionTemplate::is_easy_only)
            .map(|template| template.code)
            .collect();
        assert_eq!(easy_codes, ["BASE_EASY_40", "BASE_EASY_30", "BASE_EASY_60"]);
    }
}
