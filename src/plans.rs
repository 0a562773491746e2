use chrono::{DateTime, Datelike, Days, Duration, Local, TimeZone, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::StorageError;
use crate::models::Workout;
use crate::storage::KeyValueStore;

pub const PLANS_KEY: &str = "weeklyPlans";
const HISTORY_LEN: usize = 3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub id: String,
    pub week_start: DateTime<Local>,
    pub workouts: Vec<Workout>,
    pub created_at: DateTime<Local>,
    pub is_active: bool,
}

/// Moves `date` back to `first_day` of its week. The time of day is kept.
pub fn week_start<Tz: TimeZone>(date: &DateTime<Tz>, first_day: Weekday) -> DateTime<Tz> {
    let today = date.weekday().num_days_from_sunday();
    let first = first_day.num_days_from_sunday();
    let back = (7 + today - first) % 7;
    shift_days(date, -i64::from(back))
}

pub fn week_end<Tz: TimeZone>(week_start: &DateTime<Tz>) -> DateTime<Tz> {
    shift_days(week_start, 6)
}

/// Moves by calendar days, keeping the wall-clock time across DST changes.
/// When that wall-clock time doesn't exist (or is ambiguous) on the target
/// day, falls back to whole 24-hour steps.
fn shift_days<Tz: TimeZone>(date: &DateTime<Tz>, days: i64) -> DateTime<Tz> {
    let calendar = if days >= 0 {
        date.clone().checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.clone().checked_sub_days(Days::new(days.unsigned_abs()))
    };
    calendar.unwrap_or_else(|| date.clone() + Duration::days(days))
}

/// A week is over once `now` is past its start plus six days, compared to the
/// full timestamp.
pub fn is_week_expired<Tz: TimeZone>(week_start: &DateTime<Tz>, now: &DateTime<Tz>) -> bool {
    *now > week_end(week_start)
}

/// Weekly plans plus the week new workouts land in. Every change to the plan
/// list is written back to storage.
pub struct PlanBook<S: KeyValueStore> {
    storage: S,
    plans: Vec<WeeklyPlan>,
    current_week: DateTime<Local>,
}

impl<S: KeyValueStore> PlanBook<S> {
    /// Reads saved plans. Missing, unreadable or corrupt data starts empty.
    pub fn load(storage: S, now: DateTime<Local>, first_day: Weekday) -> Self {
        let plans = match storage.get(PLANS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<WeeklyPlan>>(&raw) {
                Ok(mut plans) => {
                    for plan in &mut plans {
                        for workout in &mut plan.workouts {
                            workout.sync_completed();
                        }
                    }
                    plans
                }
                Err(e) => {
                    warn!("ignoring corrupt {}: {}", PLANS_KEY, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("could not read {}: {}", PLANS_KEY, e);
                Vec::new()
            }
        };
        info!(plans = plans.len(), "weekly plans loaded");

        PlanBook {
            storage,
            plans,
            current_week: week_start(&now, first_day),
        }
    }

    pub fn plans(&self) -> &[WeeklyPlan] {
        &self.plans
    }

    pub fn current_week(&self) -> DateTime<Local> {
        self.current_week
    }

    pub fn current_plan(&self) -> Option<&WeeklyPlan> {
        self.plans.iter().find(|p| p.week_start == self.current_week)
    }

    pub fn current_week_expired(&self, now: DateTime<Local>) -> bool {
        self.current_plan()
            .map(|p| is_week_expired(&p.week_start, &now))
            .unwrap_or(false)
    }

    pub fn can_create_new_plan(&self, now: DateTime<Local>) -> bool {
        match self.current_plan() {
            None => true,
            Some(plan) => is_week_expired(&plan.week_start, &now),
        }
    }

    /// Files a copy of `workout` under the current week, creating the week's
    /// plan if needed.
    pub fn add_generated_workout(
        &mut self,
        workout: &Workout,
        now: DateTime<Local>,
    ) -> Result<(), StorageError> {
        let current_week = self.current_week;
        match self.plans.iter_mut().find(|p| p.week_start == current_week) {
            Some(plan) => {
                plan.workouts.push(workout.clone());
                info!(plan_id = %plan.id, workouts = plan.workouts.len(), "workout added to plan");
            }
            None => {
                let plan = WeeklyPlan {
                    id: uuid::Uuid::new_v4().to_string(),
                    week_start: current_week,
                    workouts: vec![workout.clone()],
                    created_at: now,
                    is_active: true,
                };
                info!(plan_id = %plan.id, week = %current_week.format("%Y-%m-%d"), "weekly plan created");
                self.plans.push(plan);
            }
        }
        self.persist()
    }

    /// Moves new workouts into next week's bucket. Existing plans stay.
    pub fn advance_week(&mut self) {
        self.current_week = shift_days(&self.current_week, 7);
        info!(week = %self.current_week.format("%Y-%m-%d"), "advanced to new week");
    }

    /// Up to three plans from other weeks, most recent first.
    pub fn history(&self) -> Vec<&WeeklyPlan> {
        let mut past: Vec<&WeeklyPlan> = self
            .plans
            .iter()
            .filter(|p| p.week_start != self.current_week)
            .collect();
        past.sort_by(|a, b| b.week_start.cmp(&a.week_start));
        past.truncate(HISTORY_LEN);
        past
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.plans)?;
        self.storage.set(PLANS_KEY, &raw)
    }
}
