// ABOUTME: One-rep-max estimation from submaximal sets via Epley and Brzycki formulas
// ABOUTME: Total functions over (weight, reps) with explicit formula-breakdown fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use crate::errors::AppError;
use crate::physiological_constants::one_rm::{
    BRZYCKI_DENOMINATOR_BASE, BRZYCKI_MAX_REPS, BRZYCKI_NUMERATOR, EPLEY_REP_DIVISOR,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One-rep-max estimation algorithm selection
///
/// Empirical formulas mapping a submaximal set (weight, reps) to an
/// estimated single-repetition maximum:
///
/// - `Epley`: linear rep penalty, tends to over-estimate at high reps
/// - `Brzycki`: hyperbolic rep penalty, valid below 37 reps
/// - `Average`: arithmetic mean of both, the estimate the progression
///   analyzer uses, balancing the two formulas' biases
///
/// # Scientific References
///
/// - Epley, B. (1985). "Poundage Chart". Boyd Epley Workout. Lincoln, NE.
/// - Brzycki, M. (1993). "Strength testing: predicting a one-rep max from
///   reps-to-fatigue". *Journal of Physical Education, Recreation & Dance*, 64(1), 88-90.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OneRmAlgorithm {
    /// Epley formula
    ///
    /// Formula: `1RM = weight × (1 + reps / 30)`
    ///
    /// Pros: simple, well-known, behaves sanely at moderate rep counts
    /// Cons: over-estimates for very high rep sets
    Epley,

    /// Brzycki formula
    ///
    /// Formula: `1RM = weight × 36 / (37 - reps)`
    ///
    /// Pros: accurate in the 2-10 rep range used for strength work
    /// Cons: denominator reaches zero at 37 reps; undefined beyond
    Brzycki,

    /// Average of Epley and Brzycki
    ///
    /// The default estimate used throughout progression analysis.
    #[default]
    Average,
}

impl OneRmAlgorithm {
    /// Estimate a one-rep max from a single set.
    ///
    /// This is a total function: degenerate observations yield a defined
    /// fallback instead of an error (the engine treats malformed sets as
    /// non-contributing, never as failures):
    ///
    /// - zero or non-finite weight, or zero reps → `0.0` (no observation)
    /// - exactly one rep → the weight itself (a 1-rep set *is* the max)
    /// - 37+ reps → the Brzycki term falls back to the raw weight rather
    ///   than extrapolating the formula beyond its validity range
    ///
    /// The result is always finite and non-negative.
    #[must_use]
    pub fn estimate(self, weight_kg: f64, reps: u32) -> f64 {
        if !weight_kg.is_finite() || weight_kg <= 0.0 || reps == 0 {
            return 0.0;
        }

        if reps == 1 {
            return weight_kg;
        }

        match self {
            Self::Epley => epley(weight_kg, reps),
            Self::Brzycki => brzycki(weight_kg, reps),
            Self::Average => f64::midpoint(epley(weight_kg, reps), brzycki(weight_kg, reps)),
        }
    }

    /// Get algorithm name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Epley => "epley",
            Self::Brzycki => "brzycki",
            Self::Average => "average",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::Epley => "1RM = weight x (1 + reps / 30)",
            Self::Brzycki => "1RM = weight x 36 / (37 - reps)",
            Self::Average => "1RM = (Epley + Brzycki) / 2",
        }
    }

    /// Get algorithm description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Epley => "Epley linear rep-penalty formula",
            Self::Brzycki => "Brzycki hyperbolic formula (valid below 37 reps)",
            Self::Average => "Mean of Epley and Brzycki estimates",
        }
    }
}

impl FromStr for OneRmAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "epley" => Ok(Self::Epley),
            "brzycki" => Ok(Self::Brzycki),
            "average" | "avg" => Ok(Self::Average),
            other => Err(AppError::invalid_input(format!(
                "Unknown 1RM algorithm: '{other}'. Valid options: epley, brzycki, average"
            ))),
        }
    }
}

/// Estimate a one-rep max with the default (averaged) algorithm.
///
/// Convenience entry point used by the progression analyzer; see
/// [`OneRmAlgorithm::estimate`] for the fallback semantics.
#[must_use]
pub fn estimate_one_rm(weight_kg: f64, reps: u32) -> f64 {
    OneRmAlgorithm::Average.estimate(weight_kg, reps)
}

fn epley(weight_kg: f64, reps: u32) -> f64 {
    weight_kg * (1.0 + f64::from(reps) / EPLEY_REP_DIVISOR)
}

fn brzycki(weight_kg: f64, reps: u32) -> f64 {
    if reps > BRZYCKI_MAX_REPS {
        // Formula breakdown: denominator hits zero at 37 reps
        return weight_kg;
    }
    weight_kg * (BRZYCKI_NUMERATOR / (BRZYCKI_DENOMINATOR_BASE - f64::from(reps)))
}
