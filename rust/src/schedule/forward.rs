//! Forward pass: earliest start and finish times.

use crate::config::PassStrategy;
use crate::{log_debug, log_tasks};

use super::error::ScheduleError;
use super::types::Task;

/// Compute `early_start` / `early_finish` for every task and return the
/// project duration (max early finish, 0 for an empty task set).
///
/// `order` must be a topological order of `tasks`; it drives the
/// `Topological` strategy and is ignored by `Relaxation`.
pub fn forward_pass(
    tasks: &mut [Task],
    order: &[usize],
    strategy: PassStrategy,
    verbosity: u8,
) -> Result<i64, ScheduleError> {
    match strategy {
        PassStrategy::Topological => {
            for &id in order {
                relax_earliest(tasks, id)?;
            }
        }
        PassStrategy::Relaxation => relax_until_stable(tasks, verbosity)?,
    }

    for task in tasks.iter() {
        log_tasks!(
            verbosity,
            "task {}: ES={} EF={}",
            task.id,
            task.timing.early_start,
            task.timing.early_finish
        );
    }

    Ok(project_duration(tasks))
}

/// Longest path length: the largest early finish.
pub fn project_duration(tasks: &[Task]) -> i64 {
    tasks
        .iter()
        .map(|t| t.timing.early_finish)
        .max()
        .unwrap_or(0)
}

/// Recompute one task's earliest times from its predecessors.
/// Returns whether anything changed.
fn relax_earliest(tasks: &mut [Task], id: usize) -> Result<bool, ScheduleError> {
    let early_start = tasks[id]
        .predecessors
        .iter()
        .map(|&p| tasks[p].timing.early_finish)
        .fold(0, i64::max);

    let early_finish = early_start
        .checked_add(tasks[id].duration)
        .ok_or(ScheduleError::DurationOverflow { task: id })?;

    let timing = &mut tasks[id].timing;
    let changed = timing.early_start != early_start || timing.early_finish != early_finish;
    timing.early_start = early_start;
    timing.early_finish = early_finish;
    Ok(changed)
}

/// Sweep in id order until a sweep changes nothing.
///
/// Each sweep fixes at least one more level of the longest chain, and a chain
/// has at most N tasks, so N sweeps always suffice on a DAG.
fn relax_until_stable(tasks: &mut [Task], verbosity: u8) -> Result<(), ScheduleError> {
    for sweep in 0..=tasks.len() {
        let mut changed = false;
        for id in 0..tasks.len() {
            changed |= relax_earliest(tasks, id)?;
        }
        log_debug!(verbosity, "forward sweep {} changed={}", sweep, changed);
        if !changed {
            break;
        }
    }
    Ok(())
}
