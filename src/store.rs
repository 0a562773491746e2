use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::models::{Exercise, Workout, WeightUnit};

/// Actuals captured when a set is recorded. Missing values fall back to the
/// exercise target reps and to the weight shown by the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SetRecord {
    pub actual_reps: Option<u32>,
    pub actual_weight: Option<f32>,
    pub displayed_weight: f32,
    pub unit: WeightUnit,
}

/// Owns the workout list. All mutations go through here and leave every
/// `Exercise::completed` consistent with its sets.
#[derive(Debug, Default, Clone)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new(workouts: Vec<Workout>) -> Self {
        let mut store = WorkoutStore {
            workouts: Vec::with_capacity(workouts.len()),
        };
        for workout in workouts {
            if let Err(e) = store.add_workout(workout) {
                warn!("skipping seed workout: {}", e);
            }
        }
        store
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn workout(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn add_workout(&mut self, mut workout: Workout) -> Result<(), StoreError> {
        if self.workout(&workout.id).is_some() {
            return Err(StoreError::DuplicateWorkout(workout.id));
        }
        validate(&workout)?;
        workout.sync_completed();
        info!(workout_id = %workout.id, name = %workout.name, "workout added");
        self.workouts.push(workout);
        Ok(())
    }

    /// Replaces the stored workout with the same id wholesale.
    pub fn update_workout(&mut self, mut workout: Workout) -> Result<(), StoreError> {
        validate(&workout)?;
        let slot = self
            .workouts
            .iter_mut()
            .find(|w| w.id == workout.id)
            .ok_or_else(|| StoreError::WorkoutNotFound(workout.id.clone()))?;
        workout.sync_completed();
        debug!(workout_id = %workout.id, "workout replaced");
        *slot = workout;
        Ok(())
    }

    pub fn delete_workout(&mut self, id: &str) -> Result<Workout, StoreError> {
        let idx = self
            .workouts
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| StoreError::WorkoutNotFound(id.to_string()))?;
        let removed = self.workouts.remove(idx);
        info!(workout_id = %id, "workout deleted");
        Ok(removed)
    }

    /// Marks every set complete, or every set incomplete when all already were.
    pub fn toggle_exercise(&mut self, workout_id: &str, exercise_id: &str) -> Result<bool, StoreError> {
        let exercise = self.exercise_mut(workout_id, exercise_id)?;
        let target = !exercise.all_sets_completed();
        for set in &mut exercise.set_details {
            set.completed = target;
        }
        exercise.sync_completed();
        debug!(workout_id, exercise_id, completed = target, "exercise toggled");
        Ok(exercise.completed)
    }

    /// Records the set at `set_index` as done. Returns the exercise's
    /// completion after the update.
    pub fn record_set(
        &mut self,
        workout_id: &str,
        exercise_id: &str,
        set_index: usize,
        record: SetRecord,
    ) -> Result<bool, StoreError> {
        let exercise = self.exercise_mut(workout_id, exercise_id)?;
        let target_reps = exercise.reps;
        let len = exercise.set_details.len();
        let set = exercise
            .set_details
            .get_mut(set_index)
            .ok_or_else(|| StoreError::SetIndexOutOfRange {
                exercise_id: exercise_id.to_string(),
                index: set_index,
                len,
            })?;

        set.completed = true;
        set.actual_reps = Some(record.actual_reps.unwrap_or(target_reps));
        set.actual_weight = Some(record.actual_weight.unwrap_or(record.displayed_weight));
        set.weight_unit = record.unit;
        exercise.sync_completed();

        info!(
            workout_id,
            exercise_id,
            set = set_index + 1,
            of = len,
            "set recorded"
        );
        Ok(exercise.completed)
    }

    pub fn toggle_set(&mut self, workout_id: &str, exercise_id: &str, set_id: &str) -> Result<bool, StoreError> {
        let exercise = self.exercise_mut(workout_id, exercise_id)?;
        let set = exercise.set_mut(set_id).ok_or_else(|| StoreError::SetNotFound {
            exercise_id: exercise_id.to_string(),
            set_id: set_id.to_string(),
        })?;
        set.completed = !set.completed;
        let completed = set.completed;
        exercise.sync_completed();
        Ok(completed)
    }

    /// Edits recorded actuals without touching completion.
    pub fn update_set_actuals(
        &mut self,
        workout_id: &str,
        exercise_id: &str,
        set_id: &str,
        actual_reps: Option<u32>,
        actual_weight: Option<f32>,
    ) -> Result<(), StoreError> {
        let exercise = self.exercise_mut(workout_id, exercise_id)?;
        let unit = exercise.weight_unit;
        let set = exercise.set_mut(set_id).ok_or_else(|| StoreError::SetNotFound {
            exercise_id: exercise_id.to_string(),
            set_id: set_id.to_string(),
        })?;
        if let Some(reps) = actual_reps {
            set.actual_reps = Some(reps);
        }
        if let Some(weight) = actual_weight {
            set.actual_weight = Some(weight);
            set.weight_unit = unit;
        }
        Ok(())
    }

    pub fn set_targets(
        &mut self,
        workout_id: &str,
        exercise_id: &str,
        reps: u32,
        weight: f32,
        unit: WeightUnit,
    ) -> Result<(), StoreError> {
        let exercise = self.exercise_mut(workout_id, exercise_id)?;
        exercise.reps = reps;
        exercise.weight = weight;
        exercise.weight_unit = unit;
        debug!(workout_id, exercise_id, reps, weight, %unit, "targets updated");
        Ok(())
    }

    fn exercise_mut(&mut self, workout_id: &str, exercise_id: &str) -> Result<&mut Exercise, StoreError> {
        let workout = self
            .workouts
            .iter_mut()
            .find(|w| w.id == workout_id)
            .ok_or_else(|| StoreError::WorkoutNotFound(workout_id.to_string()))?;
        workout
            .exercise_mut(exercise_id)
            .ok_or_else(|| StoreError::ExerciseNotFound {
                workout_id: workout_id.to_string(),
                exercise_id: exercise_id.to_string(),
            })
    }
}

fn validate(workout: &Workout) -> Result<(), StoreError> {
    for exercise in &workout.exercises {
        if exercise.set_details.len() != exercise.sets as usize {
            return Err(StoreError::SetCountMismatch {
                exercise_id: exercise.id.clone(),
                declared: exercise.sets,
                actual: exercise.set_details.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn workout(name: &str) -> Workout {
        Workout::new(
            name,
            Utc::now(),
            vec![
                Exercise::new("1", "Bench Press", 4, 8, 60.0, WeightUnit::Kg),
                Exercise::new("2", "Shoulder Press", 3, 10, 40.0, WeightUnit::Kg),
            ],
        )
    }

    fn record(weight: f32) -> SetRecord {
        SetRecord {
            actual_reps: None,
            actual_weight: None,
            displayed_weight: weight,
            unit: WeightUnit::Kg,
        }
    }

    #[test]
    fn test_toggle_exercise_never_leaves_mixed_state() {
        let w = workout("Push Day");
        let id = w.id.clone();
        let mut store = WorkoutStore::new(vec![w]);

        store.record_set(&id, "1", 0, record(60.0)).unwrap();
        assert!(store.toggle_exercise(&id, "1").unwrap());
        let ex = store.workout(&id).unwrap().exercise("1").unwrap();
        assert!(ex.set_details.iter().all(|s| s.completed));
        assert!(ex.completed);

        assert!(!store.toggle_exercise(&id, "1").unwrap());
        let ex = store.workout(&id).unwrap().exercise("1").unwrap();
        assert!(ex.set_details.iter().all(|s| !s.completed));
        assert!(!ex.completed);
    }

    #[test]
    fn test_toggle_unknown_ids() {
        let w = workout("Push Day");
        let id = w.id.clone();
        let mut store = WorkoutStore::new(vec![w]);
        assert_eq!(
            store.toggle_exercise("nope", "1"),
            Err(StoreError::WorkoutNotFound("nope".into()))
        );
        assert!(matches!(
            store.toggle_exercise(&id, "99"),
            Err(StoreError::ExerciseNotFound { .. })
        ));
    }

    #[test]
    fn test_record_set_defaults_and_completion() {
        let w = workout("Push Day");
        let id = w.id.clone();
        let mut store = WorkoutStore::new(vec![w]);

        let finished: Vec<bool> = (0..3)
            .map(|i| store.record_set(&id, "2", i, record(88.0)).unwrap())
            .collect();
        assert_eq!(finished, vec![false, false, true]);
        let ex = store.workout(&id).unwrap().exercise("2").unwrap();
        assert!(ex.completed);
        assert_eq!(ex.set_details[0].actual_reps, Some(10));
        assert_eq!(ex.set_details[0].actual_weight, Some(88.0));
    }

    #[test]
    fn test_record_set_keeps_recording_unit() {
        let w = workout("Push Day");
        let id = w.id.clone();
        let mut store = WorkoutStore::new(vec![w]);
        let rec = SetRecord {
            actual_reps: Some(6),
            actual_weight: Some(135.0),
            displayed_weight: 132.0,
            unit: WeightUnit::Lbs,
        };
        store.record_set(&id, "1", 1, rec).unwrap();
        let set = &store.workout(&id).unwrap().exercise("1").unwrap().set_details[1];
        assert_eq!(set.actual_reps, Some(6));
        assert_eq!(set.actual_weight, Some(135.0));
        assert_eq!(set.weight_unit, WeightUnit::Lbs);
    }

    #[test]
    fn test_record_set_out_of_range() {
        let w = workout("Push Day");
        let id = w.id.clone();
        let mut store = WorkoutStore::new(vec![w]);
        assert_eq!(
            store.record_set(&id, "2", 3, record(40.0)),
            Err(StoreError::SetIndexOutOfRange {
                exercise_id: "2".into(),
                index: 3,
                len: 3
            })
        );
    }

    #[test]
    fn test_delete_keeps_order() {
        let (a, b, c) = (workout("A"), workout("B"), workout("C"));
        let b_id = b.id.clone();
        let mut store = WorkoutStore::new(vec![a, b, c]);

        let removed = store.delete_workout(&b_id).unwrap();
        assert_eq!(removed.name, "B");
        let names: Vec<&str> = store.workouts().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert!(store.delete_workout(&b_id).is_err());
    }

    #[test]
    fn test_update_replaces_and_recomputes() {
        let w = workout("Push Day");
        let id = w.id.clone();
        let mut store = WorkoutStore::new(vec![w]);

        let mut replacement = store.workout(&id).unwrap().clone();
        replacement.name = "Heavy Push".into();
        for set in &mut replacement.exercises[1].set_details {
            set.completed = true;
        }
        store.update_workout(replacement).unwrap();

        let stored = store.workout(&id).unwrap();
        assert_eq!(stored.name, "Heavy Push");
        assert!(stored.exercises[1].completed);
        assert!(!stored.exercises[0].completed);
    }

    #[test]
    fn test_update_rejects_set_count_mismatch() {
        let w = workout("Push Day");
        let id = w.id.clone();
        let mut store = WorkoutStore::new(vec![w]);
        let mut bad = store.workout(&id).unwrap().clone();
        bad.exercises[0].set_details.pop();
        assert!(matches!(
            store.update_workout(bad),
            Err(StoreError::SetCountMismatch { declared: 4, actual: 3, .. })
        ));
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let w = workout("Push Day");
        let dup = w.clone();
        let mut store = WorkoutStore::new(vec![w]);
        assert!(matches!(store.add_workout(dup), Err(StoreError::DuplicateWorkout(_))));
        assert_eq!(store.workouts().len(), 1);
    }

    #[test]
    fn test_toggle_set_and_actuals() {
        let w = workout("Push Day");
        let id = w.id.clone();
        let mut store = WorkoutStore::new(vec![w]);

        assert!(store.toggle_set(&id, "1", "bench-2").unwrap());
        store
            .update_set_actuals(&id, "1", "bench-2", Some(7), Some(62.5))
            .unwrap();
        let set = &store.workout(&id).unwrap().exercise("1").unwrap().set_details[1];
        assert!(set.completed);
        assert_eq!(set.actual_reps, Some(7));
        assert_eq!(set.actual_weight, Some(62.5));
        assert!(store.toggle_set(&id, "1", "bench-9").is_err());
    }

    #[test]
    fn test_toggle_set_recomputes_exercise_completion() {
        let w = workout("Push Day");
        let id = w.id.clone();
        let mut store = WorkoutStore::new(vec![w]);

        for set_id in ["shoulder-1", "shoulder-2", "shoulder-3"] {
            assert!(!store.workout(&id).unwrap().exercise("2").unwrap().completed);
            store.toggle_set(&id, "2", set_id).unwrap();
        }
        assert!(store.workout(&id).unwrap().exercise("2").unwrap().completed);

        assert!(!store.toggle_set(&id, "2", "shoulder-2").unwrap());
        let ex = store.workout(&id).unwrap().exercise("2").unwrap();
        assert!(!ex.completed);
        assert_eq!(ex.set_details.iter().filter(|s| s.completed).count(), 2);
    }

    #[test]
    fn test_set_targets() {
        let w = workout("Push Day");
        let id = w.id.clone();
        let mut store = WorkoutStore::new(vec![w]);
        store.set_targets(&id, "1", 5, 225.0, WeightUnit::Lbs).unwrap();
        let ex = store.workout(&id).unwrap().exercise("1").unwrap();
        assert_eq!((ex.reps, ex.weight, ex.weight_unit), (5, 225.0, WeightUnit::Lbs));
    }
}
