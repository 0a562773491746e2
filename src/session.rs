//! Guided session over a workout: one exercise at a time, set by set, with a
//! rest countdown between sets.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::{SessionError, StoreError};
use crate::models::{convert_weight, Exercise, WeightUnit, Workout};
use crate::store::{SetRecord, WorkoutStore};
use crate::timer::SecondTicker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Active { set_index: usize },
    Resting { next_set: usize, remaining: u32 },
    Finished,
}

impl SessionState {
    pub fn is_resting(&self) -> bool {
        matches!(self, SessionState::Resting { .. })
    }
}

#[derive(Debug, Clone)]
pub struct ExerciseSession {
    workout_id: String,
    exercise_id: String,
    name: String,
    sets: usize,
    target_reps: u32,
    rest_seconds: u32,
    state: SessionState,
    elapsed_seconds: u64,
    displayed_weight: f32,
    unit: WeightUnit,
}

impl ExerciseSession {
    pub fn new(workout_id: &str, exercise: &Exercise, rest_seconds: u32) -> Self {
        let sets = exercise.set_details.len();
        let state = if sets == 0 {
            SessionState::Finished
        } else {
            SessionState::Active { set_index: 0 }
        };
        ExerciseSession {
            workout_id: workout_id.to_string(),
            exercise_id: exercise.id.clone(),
            name: exercise.name.clone(),
            sets,
            target_reps: exercise.reps,
            rest_seconds,
            state,
            elapsed_seconds: 0,
            displayed_weight: exercise.weight,
            unit: exercise.weight_unit,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn exercise_id(&self) -> &str {
        &self.exercise_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sets(&self) -> usize {
        self.sets
    }

    pub fn target_reps(&self) -> u32 {
        self.target_reps
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn displayed_weight(&self) -> f32 {
        self.displayed_weight
    }

    pub fn unit(&self) -> WeightUnit {
        self.unit
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Zero-based index of the set shown as "current".
    pub fn current_set(&self) -> usize {
        match self.state {
            SessionState::Active { set_index } => set_index,
            SessionState::Resting { next_set, .. } => next_set,
            SessionState::Finished => self.sets.saturating_sub(1),
        }
    }

    pub fn set_displayed_weight(&mut self, weight: f32) {
        self.displayed_weight = weight;
    }

    /// Switches kg <-> lbs, converting the displayed weight.
    pub fn toggle_unit(&mut self) {
        self.displayed_weight = convert_weight(self.displayed_weight, self.unit);
        self.unit = self.unit.other();
    }

    /// Records the active set in `store` and moves to resting, or to
    /// `Finished` after the last set.
    pub fn record_set(
        &mut self,
        store: &mut WorkoutStore,
        actual_reps: Option<u32>,
        actual_weight: Option<f32>,
    ) -> Result<SessionState, SessionError> {
        let SessionState::Active { set_index } = self.state else {
            return Err(SessionError::NotActive);
        };

        let record = SetRecord {
            actual_reps,
            actual_weight,
            displayed_weight: self.displayed_weight,
            unit: self.unit,
        };
        store.record_set(&self.workout_id, &self.exercise_id, set_index, record)?;

        self.state = if set_index + 1 < self.sets {
            SessionState::Resting {
                next_set: set_index + 1,
                remaining: self.rest_seconds,
            }
        } else {
            info!(exercise = %self.name, "exercise finished");
            SessionState::Finished
        };
        debug!(exercise = %self.name, state = ?self.state, "set complete");
        Ok(self.state)
    }

    /// One second passes.
    pub fn tick(&mut self) {
        match self.state {
            SessionState::Resting { next_set, remaining } if remaining > 0 => {
                self.state = SessionState::Resting {
                    next_set,
                    remaining: remaining - 1,
                };
            }
            SessionState::Resting { next_set, .. } => {
                self.state = SessionState::Active { set_index: next_set };
            }
            SessionState::Active { .. } | SessionState::Finished => {
                self.elapsed_seconds += 1;
            }
        }
    }

    /// Ends the rest early. Returns false when not resting.
    pub fn skip_rest(&mut self) -> bool {
        if let SessionState::Resting { next_set, .. } = self.state {
            self.state = SessionState::Active { set_index: next_set };
            true
        } else {
            false
        }
    }
}

/// The two one-second timers of the session view. Only the timer matching the
/// current state runs; the other is held at `now` so it never catches up on
/// time it did not own.
#[derive(Debug, Clone)]
pub struct SessionClock {
    elapsed: SecondTicker,
    rest: SecondTicker,
}

impl SessionClock {
    pub fn start(now: Instant) -> Self {
        SessionClock {
            elapsed: SecondTicker::start(now),
            rest: SecondTicker::start(now),
        }
    }

    pub fn drive(&mut self, session: &mut ExerciseSession, now: Instant) {
        if session.state().is_resting() {
            self.elapsed.reset(now);
            for _ in 0..self.rest.poll(now) {
                session.tick();
                if !session.state().is_resting() {
                    self.elapsed.reset(now);
                    break;
                }
            }
        } else {
            self.rest.reset(now);
            for _ in 0..self.elapsed.poll(now) {
                session.tick();
            }
        }
    }

    pub fn until_next(&self, session: &ExerciseSession, now: Instant) -> std::time::Duration {
        if session.state().is_resting() {
            self.rest.until_next(now)
        } else {
            self.elapsed.until_next(now)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionProgress {
    Next { exercise_index: usize },
    Ended,
}

/// Walks a workout's exercises in order.
#[derive(Debug, Clone)]
pub struct WorkoutSession {
    workout_id: String,
    exercise_ids: Vec<String>,
    index: usize,
    rest_seconds: u32,
    current: ExerciseSession,
}

impl WorkoutSession {
    pub fn start(workout: &Workout, rest_seconds: u32) -> Result<Self, SessionError> {
        let first = workout
            .exercises
            .first()
            .ok_or_else(|| SessionError::EmptyWorkout(workout.id.clone()))?;
        info!(workout = %workout.name, "session started");
        Ok(WorkoutSession {
            workout_id: workout.id.clone(),
            exercise_ids: workout.exercises.iter().map(|ex| ex.id.clone()).collect(),
            index: 0,
            rest_seconds,
            current: ExerciseSession::new(&workout.id, first, rest_seconds),
        })
    }

    pub fn workout_id(&self) -> &str {
        &self.workout_id
    }

    pub fn exercise_index(&self) -> usize {
        self.index
    }

    pub fn exercise_count(&self) -> usize {
        self.exercise_ids.len()
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.exercise_ids.len()
    }

    pub fn current(&self) -> &ExerciseSession {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut ExerciseSession {
        &mut self.current
    }

    /// Moves to the next exercise's first set, reading its latest state from
    /// `store`, or reports that the workout is over.
    pub fn advance(&mut self, store: &WorkoutStore) -> Result<SessionProgress, SessionError> {
        if self.is_last() {
            info!(workout_id = %self.workout_id, "session ended");
            return Ok(SessionProgress::Ended);
        }
        let next = self.index + 1;
        let workout = store
            .workout(&self.workout_id)
            .ok_or_else(|| StoreError::WorkoutNotFound(self.workout_id.clone()))?;
        let exercise = workout.exercise(&self.exercise_ids[next]).ok_or_else(|| {
            StoreError::ExerciseNotFound {
                workout_id: self.workout_id.clone(),
                exercise_id: self.exercise_ids[next].clone(),
            }
        })?;
        self.current = ExerciseSession::new(&self.workout_id, exercise, self.rest_seconds);
        self.index = next;
        Ok(SessionProgress::Next {
            exercise_index: next,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Duration;

    fn seeded() -> (WorkoutStore, Workout) {
        let workout = Workout::new(
            "Push Day",
            Utc::now(),
            vec![
                Exercise::new("1", "Bench Press", 2, 8, 60.0, WeightUnit::Kg),
                Exercise::new("2", "Shoulder Press", 1, 10, 40.0, WeightUnit::Kg),
            ],
        );
        (WorkoutStore::new(vec![workout.clone()]), workout)
    }

    #[test]
    fn test_initial_state_is_first_set() {
        let (_, workout) = seeded();
        let session = ExerciseSession::new(&workout.id, &workout.exercises[0], 60);
        assert_eq!(session.state(), SessionState::Active { set_index: 0 });
    }

    #[test]
    fn test_record_rests_then_finishes() {
        let (mut store, workout) = seeded();
        let mut session = ExerciseSession::new(&workout.id, &workout.exercises[0], 3);

        let state = session.record_set(&mut store, None, None).unwrap();
        assert_eq!(state, SessionState::Resting { next_set: 1, remaining: 3 });
        assert_eq!(session.record_set(&mut store, None, None), Err(SessionError::NotActive));

        for remaining in [2, 1, 0] {
            session.tick();
            assert_eq!(session.state(), SessionState::Resting { next_set: 1, remaining });
        }
        session.tick();
        assert_eq!(session.state(), SessionState::Active { set_index: 1 });

        assert_eq!(session.record_set(&mut store, None, None).unwrap(), SessionState::Finished);
        assert!(store.workout(&workout.id).unwrap().exercises[0].completed);
        assert_eq!(session.record_set(&mut store, None, None), Err(SessionError::NotActive));
    }

    #[test]
    fn test_skip_rest() {
        let (mut store, workout) = seeded();
        let mut session = ExerciseSession::new(&workout.id, &workout.exercises[0], 60);
        assert!(!session.skip_rest());
        session.record_set(&mut store, None, None).unwrap();
        assert!(session.skip_rest());
        assert_eq!(session.state(), SessionState::Active { set_index: 1 });
    }

    #[test]
    fn test_elapsed_only_counts_while_not_resting() {
        let (mut store, workout) = seeded();
        let mut session = ExerciseSession::new(&workout.id, &workout.exercises[0], 5);
        session.tick();
        session.tick();
        session.record_set(&mut store, None, None).unwrap();
        session.tick();
        assert_eq!(session.elapsed_seconds(), 2);
    }

    #[test]
    fn test_toggle_unit_converts_displayed_weight() {
        let (mut store, workout) = seeded();
        let mut session = ExerciseSession::new(&workout.id, &workout.exercises[0], 60);
        session.toggle_unit();
        assert_eq!(session.unit(), WeightUnit::Lbs);
        assert_eq!(session.displayed_weight(), 132.0);

        session.record_set(&mut store, None, None).unwrap();
        let set = &store.workout(&workout.id).unwrap().exercises[0].set_details[0];
        assert_eq!(set.actual_weight, Some(132.0));
        assert_eq!(set.weight_unit, WeightUnit::Lbs);
    }

    #[test]
    fn test_clock_drives_rest_countdown() {
        let (mut store, workout) = seeded();
        let mut session = ExerciseSession::new(&workout.id, &workout.exercises[0], 2);
        let t0 = Instant::now();
        let mut clock = SessionClock::start(t0);

        clock.drive(&mut session, t0 + Duration::from_secs(4));
        assert_eq!(session.elapsed_seconds(), 4);

        session.record_set(&mut store, None, None).unwrap();
        let t1 = t0 + Duration::from_secs(4);
        clock.drive(&mut session, t1);
        clock.drive(&mut session, t1 + Duration::from_secs(10));
        assert_eq!(session.state(), SessionState::Active { set_index: 1 });
        assert_eq!(session.elapsed_seconds(), 4);
    }

    #[test]
    fn test_workout_session_advances_and_ends() {
        let (store, workout) = seeded();
        let mut session = WorkoutSession::start(&workout, 60).unwrap();
        assert!(!session.is_last());
        assert_eq!((session.exercise_index(), session.exercise_count()), (0, 2));
        assert_eq!(
            session.advance(&store).unwrap(),
            SessionProgress::Next { exercise_index: 1 }
        );
        assert_eq!(session.current().name(), "Shoulder Press");
        assert_eq!(session.current().state(), SessionState::Active { set_index: 0 });
        assert!(session.is_last());
        assert_eq!(session.exercise_index(), 1);
        assert_eq!(session.advance(&store).unwrap(), SessionProgress::Ended);
    }

    #[test]
    fn test_empty_workout_cannot_start() {
        let workout = Workout::new("Rest Day", Utc::now(), Vec::new());
        assert!(matches!(
            WorkoutSession::start(&workout, 60),
            Err(SessionError::EmptyWorkout(_))
        ));
    }
}
