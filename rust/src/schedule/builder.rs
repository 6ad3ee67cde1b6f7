//! Graph construction: relation scan into predecessor/successor lists.

use crate::relation::DependencyRelation;

use super::error::ScheduleError;
use super::types::Task;

/// Build the task set for a relation and index-aligned durations.
///
/// Walks tasks in id order over the relation's sorted predecessor lists, so
/// both adjacency lists come out in ascending id order.
pub fn build_tasks(
    relation: &DependencyRelation,
    durations: &[i64],
) -> Result<Vec<Task>, ScheduleError> {
    let n = relation.num_tasks();
    if durations.len() != n {
        return Err(ScheduleError::DurationCountMismatch {
            expected: n,
            actual: durations.len(),
        });
    }

    let mut tasks: Vec<Task> = Vec::with_capacity(n);
    for (id, &duration) in durations.iter().enumerate() {
        if duration < 0 {
            return Err(ScheduleError::NegativeDuration { task: id, duration });
        }
        tasks.push(Task::new(id, duration));
    }

    for task in 0..n {
        for &predecessor in relation.predecessors(task) {
            tasks[task].predecessors.push(predecessor);
            tasks[predecessor].successors.push(task);
        }
    }

    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn make_relation(n: i64, edges: &[(i64, i64)]) -> DependencyRelation {
        DependencyRelation::from_edges(n, edges, &EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_adjacency_lists() {
        // 3 depends on 2 and 0; 2 depends on 0
        let relation = make_relation(4, &[(3, 2), (3, 0), (2, 0)]);
        let tasks = build_tasks(&relation, &[1, 1, 1, 1]).unwrap();

        assert_eq!(tasks[3].predecessors, vec![0, 2]);
        assert_eq!(tasks[0].successors, vec![2, 3]);
        assert_eq!(tasks[2].predecessors, vec![0]);
        assert_eq!(tasks[2].successors, vec![3]);
        assert!(tasks[1].predecessors.is_empty());
        assert!(tasks[1].successors.is_empty());
        assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_duration_count_mismatch() {
        let relation = make_relation(3, &[]);
        assert_eq!(
            build_tasks(&relation, &[1, 2]),
            Err(ScheduleError::DurationCountMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_negative_duration() {
        let relation = make_relation(2, &[]);
        assert_eq!(
            build_tasks(&relation, &[4, -1]),
            Err(ScheduleError::NegativeDuration {
                task: 1,
                duration: -1
            })
        );
    }

    #[test]
    fn test_zero_duration_allowed() {
        let relation = make_relation(2, &[(1, 0)]);
        let tasks = build_tasks(&relation, &[0, 0]).unwrap();
        assert_eq!(tasks[0].duration, 0);
        assert_eq!(tasks[1].predecessors, vec![0]);
    }
}
