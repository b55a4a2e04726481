// ABOUTME: Data model consumed by the strength engine: workout log entries and the exercise catalog
// ABOUTME: Read-only inputs owned by the storage collaborator; the engine never mutates them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLog

//! Input data model for progression analysis.
//!
//! `WorkoutEntry` mirrors the storage layer's log row. The engine treats
//! the collection as read-only and holds no references past a call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A single logged exercise set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Unique entry identifier
    pub id: Uuid,
    /// When the set was performed
    pub recorded_at: DateTime<Utc>,
    /// Identifier of the exercise type (catalog key)
    pub exercise_id: String,
    /// Repetitions performed (positive for a valid set)
    pub reps: u32,
    /// Weight moved in storage units (kg); `None` for bodyweight work
    pub weight_kg: Option<f64>,
}

impl WorkoutEntry {
    /// Create a new entry with a fresh id
    #[must_use]
    pub fn new(
        recorded_at: DateTime<Utc>,
        exercise_id: impl Into<String>,
        reps: u32,
        weight_kg: Option<f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            exercise_id: exercise_id.into(),
            reps,
            weight_kg,
        }
    }

    /// Whether this entry contributes to weighted-progression analysis:
    /// positive reps and a finite, positive weight
    #[must_use]
    pub fn is_weighted_set(&self) -> bool {
        self.reps > 0
            && self
                .weight_kg
                .is_some_and(|w| w.is_finite() && w > 0.0)
    }
}

/// Static metadata for one exercise type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    /// Catalog key (e.g. `"barbell_squat"`)
    pub id: String,
    /// Human-readable name for presentation
    pub display_name: String,
    /// Whether the exercise is performed with external load
    pub weighted: bool,
}

/// Lookup capability over the exercise catalog.
///
/// Passed into the engine explicitly rather than referenced as ambient
/// global state, keeping analysis a pure function of its inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseCatalog {
    definitions: HashMap<String, ExerciseDefinition>,
}

impl ExerciseCatalog {
    /// Build a catalog from a list of definitions
    #[must_use]
    pub fn new(definitions: impl IntoIterator<Item = ExerciseDefinition>) -> Self {
        Self {
            definitions: definitions
                .into_iter()
                .map(|def| (def.id.clone(), def))
                .collect(),
        }
    }

    /// Look up one exercise definition
    #[must_use]
    pub fn get(&self, exercise_id: &str) -> Option<&ExerciseDefinition> {
        self.definitions.get(exercise_id)
    }

    /// Whether the exercise is weighted; unknown exercises default to
    /// weighted so that logged weights are never silently ignored
    #[must_use]
    pub fn is_weighted(&self, exercise_id: &str) -> bool {
        self.definitions
            .get(exercise_id)
            .is_none_or(|def| def.weighted)
    }

    /// Number of catalog entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
