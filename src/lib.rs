// ABOUTME: Strength progression and prediction engine for the LiftLog platform
// ABOUTME: Pure, synchronous analysis over workout log histories; no storage, UI, or network
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

//! # LiftLog Intelligence
//!
//! Strength analytics over a flat collection of workout log entries:
//! one-rep-max estimation, training intensity zones, progression trend
//! analysis, future-capacity projection, and milestone date forecasting.
//!
//! Every operation is a deterministic, side-effect-free function of its
//! inputs. The engine borrows the log collection for the duration of a
//! call, returns owned result values, and retains nothing across calls,
//! so callers may invoke it concurrently without coordination.
//!
//! ```
//! use chrono::{Duration, Utc};
//! use liftlog_intelligence::{ProgressionAnalyzer, WorkoutEntry};
//!
//! let now = Utc::now();
//! let logs = vec![
//!     WorkoutEntry::new(now - Duration::days(60), "bench_press", 8, Some(40.0)),
//!     WorkoutEntry::new(now - Duration::days(2), "bench_press", 5, Some(50.0)),
//! ];
//!
//! let analysis = ProgressionAnalyzer::new().analyze(&logs, "bench_press");
//! assert!(analysis.has_enough_data);
//! assert!(analysis.historical_peak_1rm_kg > 50.0);
//! ```

/// Strength estimation algorithms
pub mod algorithms;
/// Analysis configuration with environment overrides
pub mod config;
/// Error types
pub mod errors;
/// Insight generation for the presentation layer
pub mod insights;
/// Input data model
pub mod models;
/// Strength-science constants
pub mod physiological_constants;
/// Forecasting: future max and milestone dates
pub mod prediction;
/// Progression trend analysis
pub mod progression_analyzer;
/// Training intensity zones
pub mod training_zones;

pub use algorithms::{estimate_one_rm, OneRmAlgorithm};
pub use config::ProgressionConfig;
pub use errors::{AppError, AppResult, ErrorCode};
pub use insights::{generate_progression_insights, InsightSeverity, ProgressionInsight};
pub use models::{ExerciseCatalog, ExerciseDefinition, WorkoutEntry};
pub use prediction::{MilestoneDate, MilestoneForecast, StrengthPredictor};
pub use progression_analyzer::{ProgressionAnalysis, ProgressionAnalyzer, TimeOfDay};
pub use training_zones::{training_zones, TrainingZone, ZoneLabel};
