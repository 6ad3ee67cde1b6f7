//! Critical Path Method scheduling engine.
//!
//! Computes earliest/latest start and finish times, slack and the critical
//! path for a set of tasks with integer durations and an acyclic dependency
//! relation. Usable as a Rust library or as the `cpm.rust` Python module.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

mod config;
mod interner;
pub mod logging;
mod models;
mod relation;
pub mod schedule;

pub use config::{EngineConfig, PassStrategy};
pub use interner::TaskNameInterner;
pub use models::{NamedTask, Schedule, TaskSchedule};
pub use relation::DependencyRelation;
pub use schedule::{compute_schedule, run_engine, RelationError, ScheduleError};

create_exception!(
    rust,
    CyclicDependencyError,
    PyValueError,
    "The dependency relation has a cycle, so no schedule is defined."
);

fn to_py_err(err: ScheduleError) -> PyErr {
    if err.is_cyclic() {
        CyclicDependencyError::new_err(err.to_string())
    } else {
        PyValueError::new_err(err.to_string())
    }
}

/// Compute a CPM schedule.
///
/// # Arguments
/// * `num_tasks` - Number of tasks N (must be positive)
/// * `dependency_relation` - N×N matrix of 0/1; entry [i][j] = 1 means task i depends on task j
/// * `durations` - N non-negative task durations, indexed by task id
/// * `config` - Engine configuration (defaults if omitted)
///
/// # Returns
/// * Schedule with per-task times, critical path and project duration
///
/// # Raises
/// * CyclicDependencyError if the relation has a cycle
/// * ValueError if the input is malformed
#[pyfunction]
#[pyo3(name = "compute_schedule", signature = (num_tasks, dependency_relation, durations, config=None))]
fn py_compute_schedule(
    num_tasks: i64,
    dependency_relation: Vec<Vec<i64>>,
    durations: Vec<i64>,
    config: Option<EngineConfig>,
) -> PyResult<Schedule> {
    let config = config.unwrap_or_default();
    compute_schedule(num_tasks, &dependency_relation, &durations, &config).map_err(to_py_err)
}

/// Compute a CPM schedule for tasks identified by name.
///
/// Task ids follow list order. Returns the schedule and the task names in id
/// order so callers can map ids back.
///
/// # Raises
/// * CyclicDependencyError if the dependencies form a cycle
/// * ValueError for duplicate names, unknown dependencies or bad durations
#[pyfunction]
#[pyo3(name = "compute_named_schedule", signature = (tasks, config=None))]
fn py_compute_named_schedule(
    tasks: Vec<NamedTask>,
    config: Option<EngineConfig>,
) -> PyResult<(Schedule, Vec<String>)> {
    let config = config.unwrap_or_default();
    let (relation, durations, interner) =
        DependencyRelation::from_named(&tasks, &config).map_err(|e| to_py_err(e.into()))?;
    let schedule = run_engine(&relation, &durations, &config).map_err(to_py_err)?;
    Ok((schedule, interner.names().to_vec()))
}

/// The cpm.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Data types
    m.add_class::<NamedTask>()?;
    m.add_class::<TaskSchedule>()?;
    m.add_class::<Schedule>()?;

    // Config types
    m.add_class::<EngineConfig>()?;

    // Errors
    m.add(
        "CyclicDependencyError",
        m.py().get_type_bound::<CyclicDependencyError>(),
    )?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_compute_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(py_compute_named_schedule, m)?)?;

    Ok(())
}
