// ABOUTME: Integration tests for proportional phase allocation and sequence building
// ABOUTME: Covers allocation sums, minimum weeks per phase, canonical order and truncation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_planner::{ErrorCode, PhaseAllocation, PhaseLabel, PhaseSequencer};

#[test]
fn test_allocation_sums_to_total_weeks() {
    common::init_test_logging();
    let sequencer = PhaseSequencer::five_k();

    for weeks in 7..=52 {
        let allocation = sequencer.allocate(weeks).unwrap();
        assert_eq!(allocation.values().sum::<u32>(), weeks, "{weeks} weeks");
        assert!(allocation.values().all(|count| *count >= 1), "{weeks} weeks");
        assert_eq!(allocation.len(), 7);
    }
}

#[test]
fn test_sequence_length_and_canonical_order() {
    let sequencer = PhaseSequencer::five_k();

    for weeks in 1..=40 {
        let sequence = sequencer.build_sequence(weeks).unwrap();
        assert_eq!(sequence.len(), weeks as usize);

        let indices: Vec<usize> = sequence.iter().map(|p| p.canonical_index()).collect();
        assert!(indices.windows(2).all(|w| w[0] <= w[1]), "{weeks} weeks");
        assert_eq!(sequence.phase_of_week(1), Some(PhaseLabel::Base));
    }
}

#[test]
fn test_eight_week_sequence() {
    let sequence = PhaseSequencer::five_k().build_sequence(8).unwrap();
    assert_eq!(
        sequence.as_slice(),
        [
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
fn test_long_plan_covers_every_phase() {
    let sequence = PhaseSequencer::five_k().build_sequence(16).unwrap();
    for phase in PhaseLabel::CANONICAL_ORDER {
        assert!(sequence.iter().any(|p| p == phase), "{phase:?}");
    }
}

#[test]
fn test_short_plan_keeps_leading_phases() {
    let sequence = PhaseSequencer::five_k().build_sequence(3).unwrap();
    assert_eq!(
        sequence.as_slice(),
        [PhaseLabel::Base, PhaseLabel::EarlyQ, PhaseLabel::Threshold]
    );
}

#[test]
fn test_zero_weeks_is_invalid_duration() {
    let err = PhaseSequencer::five_k().build_sequence(0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidDuration);
}

#[test]
fn test_custom_allocation_table() {
    let sequencer = PhaseSequencer::with_allocations(vec![
        PhaseAllocation::new(PhaseLabel::Base, 0.5, 1),
        PhaseAllocation::new(PhaseLabel::Taper, 0.5, 2),
    ]);
    let allocation = sequencer.allocate(6).unwrap();
    assert_eq!(allocation.get(&PhaseLabel::Base), Some(&3));
    assert_eq!(allocation.get(&PhaseLabel::Taper), Some(&3));
}
