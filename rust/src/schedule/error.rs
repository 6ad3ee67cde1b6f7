//! Error types for schedule computation.

use thiserror::Error;

/// Errors raised while validating a dependency relation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationError {
    #[error("Task count must be positive, got {0}")]
    NonPositiveTaskCount(i64),
    #[error("Dependency relation has {rows} rows, expected {expected}")]
    RowCountMismatch { rows: usize, expected: usize },
    #[error("Row {row} of the dependency relation has {len} entries, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("Dependency relation entry ({row}, {col}) is {value}; only 0 or 1 is allowed")]
    InvalidEntry { row: usize, col: usize, value: i64 },
    #[error("Task id {id} is out of range for {num_tasks} tasks")]
    TaskOutOfRange { id: i64, num_tasks: usize },
    #[error("Duplicate task name: {0:?}")]
    DuplicateName(String),
    #[error("Task {task:?} depends on unknown task {dependency:?}")]
    UnknownDependency { task: String, dependency: String },
}

/// Errors that can occur during a scheduling run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error(transparent)]
    Relation(#[from] RelationError),
    #[error("Expected {expected} durations, got {actual}")]
    DurationCountMismatch { expected: usize, actual: usize },
    #[error("Task {task} has negative duration {duration}")]
    NegativeDuration { task: usize, duration: i64 },
    #[error("Unknown pass strategy: {0}")]
    UnknownStrategy(String),
    #[error("Finish time of task {task} exceeds the representable time range")]
    DurationOverflow { task: usize },
    #[error(
        "Dependency relation has a cycle ({}); the schedule is undefined",
        format_cycle(.cycle)
    )]
    CyclicDependency { cycle: Vec<usize> },
}

impl ScheduleError {
    /// Whether this is the undefined-schedule outcome rather than malformed input.
    pub fn is_cyclic(&self) -> bool {
        matches!(self, Self::CyclicDependency { .. })
    }
}

fn format_cycle(cycle: &[usize]) -> String {
    cycle
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
