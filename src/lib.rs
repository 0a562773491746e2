pub mod coach;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod plans;
pub mod seed;
pub mod session;
pub mod storage;
pub mod store;
pub mod timer;

pub use error::{ConfigError, SessionError, StorageError, StoreError};
pub use models::{convert_weight, Exercise, Set, WeightUnit, Workout};
pub use plans::{PlanBook, WeeklyPlan};
pub use session::{ExerciseSession, SessionProgress, SessionState, WorkoutSession};
pub use store::{SetRecord, WorkoutStore};
