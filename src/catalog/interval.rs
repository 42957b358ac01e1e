// ABOUTME: Interval-phase (VO2max) templates generated from distance, timed and mixed preset tables
// ABOUTME: Fifty sessions; nominal distance estimated from each session's segments
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{easy, name_from_code, repeats};
use planner_core::models::{Extent, IntervalBlock, PhaseLabel, Segment, SessionTemplate, ZoneCode};

const I: ZoneCode = ZoneCode::Interval;

/// Standard distance repeats: (code, reps, work m, recovery m)
const DISTANCE_SETS: [(&str, u32, f64, f64); 19] = [
    ("I_8x400", 8, 400.0, 200.0),
    ("I_10x400", 10, 400.0, 200.0),
    ("I_12x400", 12, 400.0, 200.0),
    ("I_6x600", 6, 600.0, 300.0),
    ("I_8x600", 8, 600.0, 300.0),
    ("I_10x600", 10, 600.0, 300.0),
    ("I_7x800", 7, 800.0, 300.0),
    ("I_8x800", 8, 800.0, 300.0),
    ("I_10x800", 10, 800.0, 300.0),
    ("I_6x1000", 6, 1000.0, 300.0),
    ("I_7x1000", 7, 1000.0, 400.0),
    ("I_8x1000", 8, 1000.0, 400.0),
    ("I_4x1200", 4, 1200.0, 400.0),
    ("I_6x1200", 6, 1200.0, 400.0),
    ("I_4x1400", 4, 1400.0, 400.0),
    ("I_5x1400", 5, 1400.0, 400.0),
    ("I_4x1600", 4, 1600.0, 400.0),
    ("I_5x1600", 5, 1600.0, 400.0),
    ("I_3x2000", 3, 2000.0, 600.0),
];

/// Distance repeats with adjusted recoveries, run after a longer warm-up
const VARIED_DISTANCE_SETS: [(&str, u32, f64, f64); 14] = [
    ("I_5x1000_LONGREC", 5, 1000.0, 600.0),
    ("I_4x1200_LONGREC", 4, 1200.0, 600.0),
    ("I_6x800_FASTREC", 6, 800.0, 200.0),
    ("I_8x500", 8, 500.0, 250.0),
    ("I_10x500", 10, 500.0, 300.0),
    ("I_12x500", 12, 500.0, 300.0),
    ("I_6x700", 6, 700.0, 300.0),
    ("I_8x700", 8, 700.0, 300.0),
    ("I_5x1100", 5, 1100.0, 350.0),
    ("I_6x1100", 6, 1100.0, 350.0),
    ("I_7x900", 7, 900.0, 300.0),
    ("I_8x900", 8, 900.0, 300.0),
    ("I_3x2000_PROGRESSIVE", 3, 2000.0, 800.0),
    ("I_2x2400", 2, 2400.0, 600.0),
];

/// Timed repeats: (code, reps, work minutes, recovery minutes)
const TIMED_SETS: [(&str, u32, f64, f64); 8] = [
    ("I_8x3min", 8, 3.0, 2.0),
    ("I_6x4min", 6, 4.0, 2.0),
    ("I_5x5min", 5, 5.0, 2.5),
    ("I_4x6min", 4, 6.0, 3.0),
    ("I_10x2min", 10, 2.0, 1.5),
    ("I_12x90s", 12, 1.5, 1.5),
    ("I_15x1min", 15, 1.0, 1.0),
    ("I_20x45s", 20, 0.75, 0.75),
];

/// Interval templates in selection order
#[must_use]
pub fn sessions() -> Vec<SessionTemplate> {
    signature_sessions()
        .into_iter()
        .chain(distance_sessions(
            &DISTANCE_SETS,
            15.0,
            "Classic VO2max repeats",
            "Volume variations for I pace with controlled recoveries.",
        ))
        .chain(distance_sessions(
            &VARIED_DISTANCE_SETS,
            16.0,
            "Distance variation at I pace",
            "Volume and recovery adjusted for different needs.",
        ))
        .chain(timed_sessions())
        .chain(mixed_sessions())
        .map(SessionTemplate::with_estimated_distance)
        .collect()
}

fn interval(code: &str, name: impl Into<String>) -> SessionTemplate {
    SessionTemplate::new(code, name, PhaseLabel::Interval, vec![I])
}

/// Single work/recovery pair by distance
fn step(work_m: f64, recovery_m: f64) -> IntervalBlock {
    repeats(1, Extent::meters(work_m), I, Extent::meters(recovery_m))
}

fn signature_sessions() -> Vec<SessionTemplate> {
    let pyramid: Vec<Segment> = [
        (400.0, "Pyramid start"),
        (800.0, "Climb"),
        (1200.0, "Pyramid peak"),
        (800.0, "Descent"),
        (400.0, "Close"),
    ]
    .into_iter()
    .map(|(work, note)| step(work, 200.0).note(note).into())
    .collect();

    vec![
        interval("I_5x1000", "5 x 1000m @ I")
            .warmup(vec![easy(15.0)])
            .main(vec![repeats(5, Extent::meters(1000.0), I, Extent::meters(400.0))
                .note("Classic 5x1000m @ I")
                .into()])
            .cooldown(vec![easy(10.0)])
            .description("Classic VO2max session for the 5K."),
        interval("I_5x1200", "5 x 1200m @ I")
            .warmup(vec![easy(15.0)])
            .main(vec![repeats(5, Extent::meters(1200.0), I, Extent::meters(400.0))
                .note("Slightly longer VO2max repeats")
                .into()])
            .cooldown(vec![easy(10.0)])
            .description("More total time at I while keeping recoveries short."),
        interval("I_6x800", "6 x 800m @ I")
            .warmup(vec![easy(15.0)])
            .main(vec![repeats(6, Extent::meters(800.0), I, Extent::meters(400.0))
                .note("6x800m @ I")
                .into()])
            .cooldown(vec![easy(10.0)])
            .description("Alternative to 5x1000m @ I."),
        interval("I_3x1600", "3 x 1600m @ I")
            .warmup(vec![easy(15.0)])
            .main(vec![repeats(3, Extent::meters(1600.0), I, Extent::minutes(3.0))
                .note("Long blocks to maximise time at VO2max")
                .into()])
            .cooldown(vec![easy(10.0)])
            .description("Three long repeats to mature 5K rhythm."),
        interval("I_PYRAMID", "Pyramid 400-800-1200-800-400 @ I")
            .warmup(vec![easy(15.0)])
            .main(pyramid)
            .cooldown(vec![easy(10.0)])
            .description("Progressive pyramid varying cadence under a VO2max stimulus."),
    ]
}

fn distance_sessions(
    presets: &'static [(&'static str, u32, f64, f64)],
    warmup_minutes: f64,
    note: &'static str,
    description: &'static str,
) -> impl Iterator<Item = SessionTemplate> {
    presets.iter().map(move |&(code, reps, work, recovery)| {
        interval(code, format!("{reps} x {work:.0}m @ I"))
            .warmup(vec![easy(warmup_minutes)])
            .main(vec![repeats(reps, Extent::meters(work), I, Extent::meters(recovery))
                .note(note)
                .into()])
            .cooldown(vec![easy(10.0)])
            .description(description)
    })
}

fn timed_sessions() -> impl Iterator<Item = SessionTemplate> {
    TIMED_SETS.into_iter().map(|(code, reps, work, recovery)| {
        interval(code, format!("{reps} x {:.0}s @ I", work * 60.0))
            .warmup(vec![easy(12.0)])
            .main(vec![repeats(reps, Extent::minutes(work), I, Extent::minutes(recovery))
                .note("Timed VO2max blocks")
                .into()])
            .cooldown(vec![easy(8.0)])
            .description("Pace governed by time to focus on the physiological stimulus.")
    })
}

fn mixed_sessions() -> impl Iterator<Item = SessionTemplate> {
    let blocks: Vec<(&str, Vec<Segment>)> = vec![
        (
            "I_MIX_400_800",
            vec![
                repeats(4, Extent::meters(400.0), I, Extent::meters(200.0))
                    .note("Opening")
                    .into(),
                repeats(3, Extent::meters(800.0), I, Extent::meters(300.0))
                    .note("Middle")
                    .into(),
                repeats(4, Extent::meters(400.0), I, Extent::meters(200.0))
                    .note("Close")
                    .into(),
            ],
        ),
        (
            "I_MIX_600_1000",
            vec![
                repeats(3, Extent::meters(600.0), I, Extent::meters(300.0))
                    .note("Specific warm-up")
                    .into(),
                repeats(4, Extent::meters(1000.0), I, Extent::meters(400.0))
                    .note("Core")
                    .into(),
                repeats(3, Extent::meters(600.0), I, Extent::meters(300.0))
                    .note("Close")
                    .into(),
            ],
        ),
        (
            "I_PROGRESSIVE_400_1600",
            vec![
                step(400.0, 200.0).note("Ramp up").into(),
                step(800.0, 200.0).into(),
                step(1200.0, 200.0).into(),
                step(1600.0, 400.0).into(),
            ],
        ),
        (
            "I_LADDER_600_1200",
            [
                (600.0, 200.0),
                (800.0, 200.0),
                (1000.0, 200.0),
                (1200.0, 400.0),
                (1000.0, 200.0),
                (800.0, 200.0),
                (600.0, 200.0),
            ]
            .into_iter()
            .map(|(work, recovery)| step(work, recovery).into())
            .collect(),
        ),
    ];

    blocks.into_iter().map(|(code, main)| {
        interval(code, name_from_code(code))
            .warmup(vec![easy(15.0)])
            .main(main)
            .cooldown(vec![easy(10.0)])
            .description("Pyramids and mixes for I pace with a varied stimulus.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_session_distance() {
        // 15' E + 5 x (1000 m + 400 m) + 10' E
        let classic = sessions()
            .into_iter()
            .find(|t| t.code == "I_5x1000")
            .unwrap();
        let expected = ((25.0 / 6.0 + 7.0) * 10.0_f64).round() / 10.0;
        assert!((classic.base_distance_km - expected).abs() < 1e-9);
    }

    #[test]
    fn test_timed_names_in_seconds() {
        let names: Vec<String> = sessions()
            .into_iter()
            .filter(|t| t.code == "I_12x90s" || t.code == "I_8x3min")
            .map(|t| t.name)
            .collect();
        assert_eq!(names, ["8 x 180s @ I", "12 x 90s @ I"].map(String::from));
    }
}
