//models.rs
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const LBS_PER_KG: f32 = 2.20462;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn other(self) -> Self {
        match self {
            WeightUnit::Kg => WeightUnit::Lbs,
            WeightUnit::Lbs => WeightUnit::Kg,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Kg => write!(f, "kg"),
            WeightUnit::Lbs => write!(f, "lbs"),
        }
    }
}

/// Converts `value` out of `from` into the other unit, rounded to a whole number.
///
/// Rounding means a kg -> lbs -> kg round trip can drift by one.
pub fn convert_weight(value: f32, from: WeightUnit) -> f32 {
    match from {
        WeightUnit::Kg => (value * LBS_PER_KG).round(),
        WeightUnit::Lbs => (value / LBS_PER_KG).round(),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Set {
    pub id: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_weight: Option<f32>,
    pub weight_unit: WeightUnit,
}

impl Set {
    pub fn pending(id: impl Into<String>, unit: WeightUnit) -> Self {
        Set {
            id: id.into(),
            completed: false,
            actual_reps: None,
            actual_weight: None,
            weight_unit: unit,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f32,
    pub weight_unit: WeightUnit,
    #[serde(default)]
    pub completed: bool,
    pub set_details: Vec<Set>,
}

impl Exercise {
    /// Builds an exercise with `sets` pending sets named `<slug>-<n>`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sets: u32,
        reps: u32,
        weight: f32,
        weight_unit: WeightUnit,
    ) -> Self {
        let name = name.into();
        let slug = name
            .split_whitespace()
            .next()
            .unwrap_or("set")
            .to_lowercase();
        let set_details = (1..=sets)
            .map(|n| Set::pending(format!("{}-{}", slug, n), weight_unit))
            .collect();

        Exercise {
            id: id.into(),
            name,
            sets,
            reps,
            weight,
            weight_unit,
            completed: false,
            set_details,
        }
    }

    pub fn all_sets_completed(&self) -> bool {
        self.set_details.iter().all(|set| set.completed)
    }

    /// Recomputes the stored `completed` flag from the sets.
    pub fn sync_completed(&mut self) {
        self.completed = self.all_sets_completed();
    }

    pub fn set_mut(&mut self, set_id: &str) -> Option<&mut Set> {
        self.set_details.iter_mut().find(|set| set.id == set_id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub date: DateTime<Utc>,
    pub name: String,
    pub exercises: Vec<Exercise>,
}

impl Workout {
    pub fn new(name: impl Into<String>, date: DateTime<Utc>, exercises: Vec<Exercise>) -> Self {
        Workout {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            name: name.into(),
            exercises,
        }
    }

    pub fn exercise(&self, exercise_id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|ex| ex.id == exercise_id)
    }

    pub fn exercise_mut(&mut self, exercise_id: &str) -> Option<&mut Exercise> {
        self.exercises.iter_mut().find(|ex| ex.id == exercise_id)
    }

    pub fn completed_exercises(&self) -> usize {
        self.exercises.iter().filter(|ex| ex.completed).count()
    }

    /// Fraction of completed exercises, 0.0 for an empty workout.
    pub fn progress(&self) -> f32 {
        if self.exercises.is_empty() {
            return 0.0;
        }
        self.completed_exercises() as f32 / self.exercises.len() as f32
    }

    pub fn sync_completed(&mut self) {
        for exercise in &mut self.exercises {
            exercise.sync_completed();
        }
    }
}
