//! Engine pipeline: build, gate on cycles, forward pass, backward pass,
//! extract.

use crate::config::EngineConfig;
use crate::log_stages;
use crate::models::{Schedule, TaskSchedule};
use crate::relation::DependencyRelation;

use super::backward::backward_pass;
use super::builder::build_tasks;
use super::cycle::find_cycle;
use super::error::ScheduleError;
use super::extract::extract_critical_path;
use super::forward::forward_pass;
use super::topology::topological_order;
use super::types::EngineState;

/// Compute a schedule from a raw 0/1 matrix and durations.
pub fn compute_schedule(
    num_tasks: i64,
    matrix: &[Vec<i64>],
    durations: &[i64],
    config: &EngineConfig,
) -> Result<Schedule, ScheduleError> {
    let relation = DependencyRelation::from_matrix(num_tasks, matrix, config)?;
    run_engine(&relation, durations, config)
}

/// Run every stage on a validated relation.
///
/// Each call owns a fresh task set; nothing is carried between runs.
pub fn run_engine(
    relation: &DependencyRelation,
    durations: &[i64],
    config: &EngineConfig,
) -> Result<Schedule, ScheduleError> {
    let verbosity = config.verbosity;
    let strategy = config.pass_strategy()?;

    let mut tasks = build_tasks(relation, durations)?;
    let mut state = EngineState::Built;
    log_stages!(verbosity, "{} {} tasks", state, tasks.len());

    if let Some(cycle) = find_cycle(&tasks, verbosity) {
        state = advance(state, EngineState::Rejected, verbosity);
        debug_assert!(state.is_terminal());
        return Err(ScheduleError::CyclicDependency { cycle });
    }

    let order = topological_order(&tasks, verbosity)?;
    let project_duration = forward_pass(&mut tasks, &order, strategy, verbosity)?;
    backward_pass(&mut tasks, &order, project_duration, strategy, verbosity);
    state = advance(state, EngineState::TimesComputed, verbosity);

    let critical = extract_critical_path(&tasks, project_duration, verbosity);
    state = advance(state, EngineState::PathExtracted, verbosity);
    debug_assert!(state.is_terminal());

    Ok(Schedule {
        tasks: tasks.into_iter().map(TaskSchedule::from).collect(),
        critical_path: critical.tasks,
        project_duration: critical.project_duration,
        topological_order: order,
    })
}

fn advance(from: EngineState, to: EngineState, verbosity: u8) -> EngineState {
    debug_assert!(from.can_advance_to(to), "illegal transition {from} -> {to}");
    log_stages!(verbosity, "{} -> {}", from, to);
    to
}
