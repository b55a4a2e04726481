// ABOUTME: Human-readable insight generation from a progression analysis
// ABOUTME: Produces trend, staleness, and behavioral messages for the presentation layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

use crate::progression_analyzer::{ProgressionAnalysis, TimeOfDay};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Weekly rate (kg/week) below which the trend reads as flat
const FLAT_WEEKLY_RATE_KG: f64 = 0.05;

/// Severity of a generated insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSeverity {
    /// Informational, no action needed
    Info,
    /// Worth the lifter's attention
    Warning,
}

/// A single human-readable observation about an exercise's progression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionInsight {
    /// Machine-readable category (e.g. `"strength_trend"`)
    pub insight_type: String,
    /// Human-readable message
    pub message: String,
    /// Severity level
    pub severity: InsightSeverity,
    /// Supporting data for the insight
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Generate presentation-ready insights from a progression analysis.
///
/// Insufficient histories yield a single limited-data note; full analyses
/// yield a trend message plus staleness and behavioral observations.
#[must_use]
pub fn generate_progression_insights(analysis: &ProgressionAnalysis) -> Vec<ProgressionInsight> {
    let mut insights = Vec::new();

    if !analysis.has_enough_data {
        insights.push(ProgressionInsight {
            insight_type: "data_quality".into(),
            message: "Not enough logged sets to measure a strength trend yet - keep logging"
                .into(),
            severity: InsightSeverity::Warning,
            metadata: HashMap::new(),
        });
        return insights;
    }

    let mut trend_metadata = HashMap::new();
    trend_metadata.insert(
        "weekly_rate_kg".into(),
        serde_json::Value::from(analysis.weekly_rate_kg),
    );
    trend_metadata.insert(
        "projected_current_1rm_kg".into(),
        serde_json::Value::from(analysis.projected_current_1rm_kg),
    );

    let (message, severity) = if analysis.weekly_rate_kg > FLAT_WEEKLY_RATE_KG {
        (
            format!(
                "Strength is trending up about {:.1} kg/week - keep the progression going",
                analysis.weekly_rate_kg
            ),
            InsightSeverity::Info,
        )
    } else if analysis.weekly_rate_kg < -FLAT_WEEKLY_RATE_KG {
        (
            format!(
                "Estimated 1RM is slipping about {:.1} kg/week - consider revisiting volume or recovery",
                analysis.weekly_rate_kg.abs()
            ),
            InsightSeverity::Warning,
        )
    } else {
        (
            "Strength is holding steady - add progressive overload to keep improving".into(),
            InsightSeverity::Info,
        )
    };

    insights.push(ProgressionInsight {
        insight_type: "strength_trend".into(),
        message,
        severity,
        metadata: trend_metadata,
    });

    if analysis.is_stale {
        let mut metadata = HashMap::new();
        metadata.insert(
            "days_since_best".into(),
            serde_json::Value::from(analysis.days_since_best),
        );
        insights.push(ProgressionInsight {
            insight_type: "staleness".into(),
            message: format!(
                "Best set was {} days ago - projections assume maintenance until a new peak is logged",
                analysis.days_since_best
            ),
            severity: InsightSeverity::Warning,
            metadata,
        });
    }

    if analysis.optimal_day.is_some() || analysis.optimal_time != TimeOfDay::Anytime {
        let mut metadata = HashMap::new();
        metadata.insert(
            "optimal_day".into(),
            serde_json::Value::from(analysis.optimal_day_name()),
        );
        metadata.insert(
            "optimal_time".into(),
            serde_json::Value::from(analysis.optimal_time.display_name()),
        );
        insights.push(ProgressionInsight {
            insight_type: "behavioral_pattern".into(),
            message: format!(
                "Historically strongest on {} {}s - schedule heavy attempts there",
                analysis.optimal_day_name(),
                analysis.optimal_time.display_name().to_lowercase()
            ),
            severity: InsightSeverity::Info,
            metadata,
        });
    }

    insights
}
