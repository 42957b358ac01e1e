// ABOUTME: Core types and constants for the Pierre training planner
// ABOUTME: Foundation crate with error handling, planning constants, and plan data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Planner Core
//!
//! Foundation crate providing shared types and constants for the Pierre
//! running-plan generator. The planning engine and the plan-build facade both
//! depend on it, so it is kept free of algorithmic code.
//!
//! ## Modules
//!
//! - **errors**: `PlanError`, `ErrorCode` and `ConfigError`
//! - **constants**: physiological and planning constants organized by domain
//! - **models**: athletes, phases, zones, session templates, plans and feedback

/// Unified error handling with standard error codes
pub mod errors;

/// Planning constants organized by domain
pub mod constants;

/// Core data models (athlete, phases, sessions, plans, feedback)
pub mod models;

pub use errors::{ConfigError, ErrorCode, PlanError, PlanResult};
