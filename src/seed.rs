use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::warn;

use crate::models::{Exercise, WeightUnit, Workout};

pub fn default_workouts(now: DateTime<Utc>) -> Vec<Workout> {
    vec![Workout::new(
        "Push Day",
        now,
        vec![
            Exercise::new("1", "Bench Press", 4, 8, 60.0, WeightUnit::Kg),
            Exercise::new("2", "Shoulder Press", 3, 10, 40.0, WeightUnit::Kg),
            Exercise::new("3", "Tricep Extensions", 3, 12, 20.0, WeightUnit::Kg),
        ],
    )]
}

/// Reads `{ "<workout name>": [ { "exercise": .., "sets": .., "reps": ..,
/// "weight": .., "unit": "kg" } ] }`. Falls back to the default workouts
/// when the file can't be parsed.
pub fn load_seed_workouts(json: &str, now: DateTime<Utc>) -> Vec<Workout> {
    let raw_data: BTreeMap<String, Vec<Value>> = match serde_json::from_str(json) {
        Ok(data) => data,
        Err(e) => {
            warn!("seed file unreadable, using defaults: {}", e);
            return default_workouts(now);
        }
    };

    raw_data
        .iter()
        .map(|(name, raw_exercises)| create_workout(name, raw_exercises, now))
        .collect()
}

fn create_workout(name: &str, raw_exercises: &[Value], now: DateTime<Utc>) -> Workout {
    let mut exercises = Vec::new();

    for raw_ex in raw_exercises {
        let exercise_name = raw_ex["exercise"].as_str().unwrap_or("").to_string();
        let sets = raw_ex["sets"].as_u64().unwrap_or(0) as u32;
        if exercise_name.is_empty() || exercise_name == "Warmup" || sets == 0 {
            continue;
        }
        let unit = match raw_ex["unit"].as_str() {
            Some("lbs") => WeightUnit::Lbs,
            _ => WeightUnit::Kg,
        };

        exercises.push(Exercise::new(
            (exercises.len() + 1).to_string(),
            exercise_name,
            sets,
            raw_ex["reps"].as_u64().unwrap_or(0) as u32,
            raw_ex["weight"].as_f64().unwrap_or(0.0) as f32,
            unit,
        ));
    }

    Workout::new(name, now, exercises)
}
