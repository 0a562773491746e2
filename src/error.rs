use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("workout not found: {0}")]
    WorkoutNotFound(String),
    #[error("exercise '{exercise_id}' not found in workout '{workout_id}'")]
    ExerciseNotFound {
        workout_id: String,
        exercise_id: String,
    },
    #[error("set '{set_id}' not found in exercise '{exercise_id}'")]
    SetNotFound { exercise_id: String, set_id: String },
    #[error("set index {index} out of range for exercise '{exercise_id}' with {len} sets")]
    SetIndexOutOfRange {
        exercise_id: String,
        index: usize,
        len: usize,
    },
    #[error("workout already exists: {0}")]
    DuplicateWorkout(String),
    #[error("exercise '{exercise_id}' declares {declared} sets but holds {actual}")]
    SetCountMismatch {
        exercise_id: String,
        declared: u32,
        actual: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no set is waiting to be recorded")]
    NotActive,
    #[error("workout '{0}' has no exercises")]
    EmptyWorkout(String),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage io error on key '{key}': {source}")]
    Io {
        key: String,
        source: std::io::Error,
    },
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
