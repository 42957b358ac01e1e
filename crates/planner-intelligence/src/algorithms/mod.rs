// ABOUTME: Algorithm selection for plan generation
// ABOUTME: Enum-dispatched race-time-to-VDOT estimators and the Daniels oxygen-cost model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Selection Module
//!
//! Algorithms are enums rather than strings or flags, so that the choice is
//! checked at compile time and dispatched without a vtable.
//!
//! # Example
//!
//! ```rust
//! use planner_intelligence::algorithms::VdotAlgorithm;
//!
//! let vdot = VdotAlgorithm::DanielsGilbert.estimate(5.0, 20.0)?;
//! assert!(vdot > 49.0 && vdot < 51.0);
//! # Ok::<(), planner_core::PlanError>(())
//! ```

pub mod vdot;

pub use vdot::{oxygen_cost, velocity_for_oxygen_cost, VdotAlgorithm};
