//! Critical path extraction.

use crate::log_stages;
use crate::models::TaskSchedule;

use super::types::Task;

/// Zero-slack tasks and the overall schedule length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CriticalPath {
    /// Ids with slack exactly 0, ascending.
    pub tasks: Vec<usize>,
    pub project_duration: i64,
}

/// Collect the critical tasks of a fully timed task set.
///
/// With no critical task at all (only possible for an empty task set) the
/// result is an empty path of length 0.
pub fn extract_critical_path(tasks: &[Task], project_duration: i64, verbosity: u8) -> CriticalPath {
    let critical: Vec<usize> = tasks
        .iter()
        .filter(|t| t.timing.is_critical())
        .map(|t| t.id)
        .collect();

    if critical.is_empty() {
        return CriticalPath::default();
    }

    log_stages!(
        verbosity,
        "critical path {:?}, project duration {}",
        critical,
        project_duration
    );

    CriticalPath {
        tasks: critical,
        project_duration,
    }
}

/// One canonical chain of critical tasks per chain start.
///
/// A link `p -> s` is tight when both are critical and `s` starts exactly when
/// `p` finishes. Chains start at a critical task with no tight predecessor and
/// always follow the lowest-id tight successor, so parallel equal-length
/// branches yield one chain rather than one per route. The result holds at
/// most one chain per start task, each at most N tasks long.
pub fn critical_chains(rows: &[TaskSchedule]) -> Vec<Vec<usize>> {
    let tight = |p: usize, s: usize| {
        rows[p].slack == 0 && rows[s].slack == 0 && rows[p].early_finish == rows[s].early_start
    };

    let mut chains = Vec::new();
    for row in rows.iter().filter(|r| r.slack == 0) {
        if row.predecessors.iter().any(|&p| tight(p, row.id)) {
            continue;
        }

        let mut chain = vec![row.id];
        let mut last = row.id;
        // Successor lists are ascending, so `find` picks the lowest id.
        while let Some(&next) = rows[last].successors.iter().find(|&&s| tight(last, s)) {
            chain.push(next);
            last = next;
        }
        chains.push(chain);
    }
    chains
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::TaskTiming;

    fn make_task(id: usize, duration: i64, early_start: i64, slack: i64) -> Task {
        let early_finish = early_start + duration;
        Task {
            id,
            duration,
            predecessors: vec![],
            successors: vec![],
            timing: TaskTiming {
                early_start,
                early_finish,
                late_start: early_start + slack,
                late_finish: early_finish + slack,
                slack,
            },
        }
    }

    fn make_row(id: usize, early_start: i64, duration: i64, slack: i64) -> TaskSchedule {
        TaskSchedule {
            id,
            duration,
            early_start,
            early_finish: early_start + duration,
            late_start: early_start + slack,
            late_finish: early_start + duration + slack,
            slack,
            predecessors: vec![],
            successors: vec![],
        }
    }

    fn link(rows: &mut [TaskSchedule], predecessor: usize, task: usize) {
        rows[task].predecessors.push(predecessor);
        rows[predecessor].successors.push(task);
    }

    #[test]
    fn test_zero_slack_tasks_selected() {
        let tasks = vec![
            make_task(0, 3, 0, 1),
            make_task(1, 2, 0, 0),
            make_task(2, 4, 0, 0),
        ];
        let path = extract_critical_path(&tasks, 4, 0);
        assert_eq!(path.tasks, vec![1, 2]);
        assert_eq!(path.project_duration, 4);
    }

    #[test]
    fn test_empty_task_set() {
        let path = extract_critical_path(&[], 0, 0);
        assert!(path.tasks.is_empty());
        assert_eq!(path.project_duration, 0);
    }

    #[test]
    fn test_all_positive_slack_reports_nothing() {
        let tasks = vec![make_task(0, 3, 0, 1)];
        assert_eq!(extract_critical_path(&tasks, 4, 0), CriticalPath::default());
    }

    #[test]
    fn test_single_chain() {
        let mut rows = vec![make_row(0, 0, 3, 0), make_row(1, 3, 2, 0), make_row(2, 5, 4, 0)];
        link(&mut rows, 0, 1);
        link(&mut rows, 1, 2);
        assert_eq!(critical_chains(&rows), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_branching_chains() {
        // 0 -> {1, 2} -> 3, both branches of equal length.
        let mut rows = vec![
            make_row(0, 0, 2, 0),
            make_row(1, 2, 3, 0),
            make_row(2, 2, 3, 0),
            make_row(3, 5, 1, 0),
        ];
        link(&mut rows, 0, 1);
        link(&mut rows, 0, 2);
        link(&mut rows, 1, 3);
        link(&mut rows, 2, 3);
        assert_eq!(critical_chains(&rows), vec![vec![0, 1, 3]]);
    }

    #[test]
    fn test_stacked_diamonds_yield_one_chain() {
        // Joints j0..jk with two unit-duration branches between each pair:
        // 2^k equal routes, but only one canonical chain.
        let diamonds = 40;
        let mut rows: Vec<TaskSchedule> = Vec::new();
        let mut joint = 0;
        rows.push(make_row(0, 0, 1, 0));
        for d in 0..diamonds {
            let start = 2 * d as i64 + 1;
            let upper = rows.len();
            rows.push(make_row(upper, start, 1, 0));
            rows.push(make_row(upper + 1, start, 1, 0));
            rows.push(make_row(upper + 2, start + 1, 1, 0));
            link(&mut rows, joint, upper);
            link(&mut rows, joint, upper + 1);
            link(&mut rows, upper, upper + 2);
            link(&mut rows, upper + 1, upper + 2);
            joint = upper + 2;
        }

        let chains = critical_chains(&rows);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].len(), 2 * diamonds + 1);
        assert_eq!(chains[0][0], 0);
        assert_eq!(chains[0].last(), Some(&joint));
    }

    #[test]
    fn test_slack_task_breaks_chain() {
        // 1 has slack, so 0 -> 1 -> 2 is not a chain; 0 and 2 stand alone.
        let mut rows = vec![make_row(0, 0, 4, 0), make_row(1, 4, 1, 2), make_row(2, 0, 4, 0)];
        link(&mut rows, 0, 1);
        assert_eq!(critical_chains(&rows), vec![vec![0], vec![2]]);
    }
}
