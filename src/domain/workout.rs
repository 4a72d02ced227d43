use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One exercise entry in the user's workout log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutExercise {
    pub id: Uuid,
    pub exercise_name: String,
    pub muscle_group: MuscleGroup,
    /// Optional warm-up block; zero sets means no warm-up recorded.
    #[serde(default)]
    pub warmup_sets: u32,
    #[serde(default)]
    pub warmup_reps: u32,
    #[serde(default)]
    pub warmup_weight_kg: f64,
    pub sets: u32,
    pub reps: u32,
    pub weight_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkoutExercise {
    pub fn new(
        exercise_name: impl Into<String>,
        muscle_group: MuscleGroup,
        sets: u32,
        reps: u32,
        weight_kg: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            exercise_name: exercise_name.into(),
            muscle_group,
            warmup_sets: 0,
            warmup_reps: 0,
            warmup_weight_kg: 0.0,
            sets,
            reps,
            weight_kg,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_warmup(mut self, sets: u32, reps: u32, weight_kg: f64) -> Self {
        self.warmup_sets = sets;
        self.warmup_reps = reps;
        self.warmup_weight_kg = weight_kg;
        self
    }

    pub fn has_warmup(&self) -> bool {
        self.warmup_sets > 0 || self.warmup_reps > 0
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Muscle groups the workout log is organised by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Biceps,
    Triceps,
    Abs,
    Glutes,
    Calves,
    FullBody,
    Other,
}

impl MuscleGroup {
    pub const ALL: [MuscleGroup; 11] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Legs,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Abs,
        MuscleGroup::Glutes,
        MuscleGroup::Calves,
        MuscleGroup::FullBody,
        MuscleGroup::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::FullBody => "Full body",
            MuscleGroup::Other => "Other",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
