//! Backward pass: latest start and finish times and slack.

use crate::config::PassStrategy;
use crate::{log_debug, log_tasks};

use super::types::Task;

/// Compute `late_start`, `late_finish` and `slack` for every task, anchored
/// at `project_duration`. Must run after the forward pass.
///
/// A task without successors may finish as late as the project end; otherwise
/// it must finish before its tightest (minimum late start) successor.
pub fn backward_pass(
    tasks: &mut [Task],
    order: &[usize],
    project_duration: i64,
    strategy: PassStrategy,
    verbosity: u8,
) {
    match strategy {
        PassStrategy::Topological => {
            for &id in order.iter().rev() {
                relax_latest(tasks, id, project_duration);
            }
        }
        PassStrategy::Relaxation => relax_until_stable(tasks, project_duration, verbosity),
    }

    for task in tasks.iter_mut() {
        let timing = &mut task.timing;
        timing.slack = timing.late_finish - timing.early_finish;
        debug_assert_eq!(timing.slack, timing.late_start - timing.early_start);

        log_tasks!(
            verbosity,
            "task {}: LS={} LF={} slack={}",
            task.id,
            timing.late_start,
            timing.late_finish,
            timing.slack
        );
    }
}

/// Recompute one task's latest times from its successors.
/// Returns whether anything changed.
fn relax_latest(tasks: &mut [Task], id: usize, project_duration: i64) -> bool {
    let late_finish = tasks[id]
        .successors
        .iter()
        .map(|&s| tasks[s].timing.late_start)
        .min()
        .unwrap_or(project_duration);
    let late_start = late_finish - tasks[id].duration;

    let timing = &mut tasks[id].timing;
    let changed = timing.late_start != late_start || timing.late_finish != late_finish;
    timing.late_finish = late_finish;
    timing.late_start = late_start;
    changed
}

/// Sweep in descending id order until a sweep changes nothing.
///
/// Every task starts at the project end, so latest times only decrease and
/// settle within N sweeps on a DAG.
fn relax_until_stable(tasks: &mut [Task], project_duration: i64, verbosity: u8) {
    for task in tasks.iter_mut() {
        task.timing.late_finish = project_duration;
        task.timing.late_start = project_duration - task.duration;
    }

    for sweep in 0..=tasks.len() {
        let mut changed = false;
        for id in (0..tasks.len()).rev() {
            changed |= relax_latest(tasks, id, project_duration);
        }
        log_debug!(verbosity, "backward sweep {} changed={}", sweep, changed);
        if !changed {
            break;
        }
    }
}
