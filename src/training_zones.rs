// ABOUTME: Training intensity zone table derived from an estimated one-rep max
// ABOUTME: Fixed descending ladder of %1RM rungs with semantic training-goal labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use crate::physiological_constants::intensity_zones::{
    ENDURANCE_PERCENT, HYPERTROPHY_HIGH_PERCENT, HYPERTROPHY_LOW_PERCENT, POWER_HIGH_PERCENT,
    POWER_LOW_PERCENT, STRENGTH_HIGH_PERCENT, STRENGTH_LOW_PERCENT, WARMUP_PERCENT,
};
use serde::{Deserialize, Serialize};

/// Semantic label for a training intensity zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneLabel {
    /// Maximal/near-maximal neural work (1-3 reps)
    Power,
    /// Heavy strength work (3-6 reps)
    Strength,
    /// Muscle growth range (6-12 reps)
    Hypertrophy,
    /// Muscular endurance (12-20 reps)
    Endurance,
    /// Warmup and technique work
    Warmup,
}

impl ZoneLabel {
    /// Human-readable label
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Power => "Power",
            Self::Strength => "Strength",
            Self::Hypertrophy => "Hypertrophy",
            Self::Endurance => "Endurance",
            Self::Warmup => "Warmup",
        }
    }

    /// Typical rep range trained in this zone
    #[must_use]
    pub const fn typical_reps(self) -> &'static str {
        match self {
            Self::Power => "1-3",
            Self::Strength => "3-6",
            Self::Hypertrophy => "6-12",
            Self::Endurance => "12-20",
            Self::Warmup => "15+",
        }
    }
}

/// One rung of the intensity ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingZone {
    /// Percentage of 1RM
    pub percent: u8,
    /// Training goal served at this intensity
    pub label: ZoneLabel,
    /// Working weight at this intensity (storage units, kg)
    pub weight_kg: f64,
}

/// The fixed ladder, descending by intensity. Order is significant for
/// presentation and must be preserved.
const ZONE_LADDER: [(u8, ZoneLabel); 8] = [
    (POWER_HIGH_PERCENT, ZoneLabel::Power),
    (POWER_LOW_PERCENT, ZoneLabel::Power),
    (STRENGTH_HIGH_PERCENT, ZoneLabel::Strength),
    (STRENGTH_LOW_PERCENT, ZoneLabel::Strength),
    (HYPERTROPHY_HIGH_PERCENT, ZoneLabel::Hypertrophy),
    (HYPERTROPHY_LOW_PERCENT, ZoneLabel::Hypertrophy),
    (ENDURANCE_PERCENT, ZoneLabel::Endurance),
    (WARMUP_PERCENT, ZoneLabel::Warmup),
];

/// Build the training intensity table for an estimated one-rep max.
///
/// Returns eight zones in strictly descending `percent` order with
/// `weight_kg = one_rm_kg × percent / 100` exactly.
#[must_use]
pub fn training_zones(one_rm_kg: f64) -> Vec<TrainingZone> {
    ZONE_LADDER
        .iter()
        .map(|&(percent, label)| TrainingZone {
            percent,
            label,
            weight_kg: one_rm_kg * f64::from(percent) / 100.0,
        })
        .collect()
}
