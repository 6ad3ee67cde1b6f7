//! Topological ordering using Kahn's algorithm.

use std::collections::VecDeque;

use crate::log_debug;

use super::cycle::find_cycle;
use super::error::ScheduleError;
use super::types::Task;

/// Order tasks so every predecessor comes before its dependents.
///
/// The queue is seeded with predecessor-free tasks in ascending id order and
/// successors are released in ascending id order, so the result is
/// deterministic for a given relation.
pub fn topological_order(tasks: &[Task], verbosity: u8) -> Result<Vec<usize>, ScheduleError> {
    let mut in_degree: Vec<usize> = tasks.iter().map(|t| t.predecessors.len()).collect();

    let mut queue: VecDeque<usize> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, &degree)| degree == 0)
        .map(|(id, _)| id)
        .collect();

    let mut result: Vec<usize> = Vec::with_capacity(tasks.len());

    while let Some(id) = queue.pop_front() {
        log_debug!(verbosity, "kahn pop {}", id);
        result.push(id);

        for &successor in &tasks[id].successors {
            in_degree[successor] -= 1;
            if in_degree[successor] == 0 {
                queue.push_back(successor);
            }
        }
    }

    if result.len() != tasks.len() {
        // Only reachable if the cycle gate was bypassed.
        let cycle = find_cycle(tasks, verbosity)
            .unwrap_or_else(|| (0..tasks.len()).filter(|&id| in_degree[id] > 0).collect());
        return Err(ScheduleError::CyclicDependency { cycle });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::relation::DependencyRelation;
    use crate::schedule::builder::build_tasks;

    fn make_tasks(n: i64, edges: &[(i64, i64)]) -> Vec<Task> {
        let relation = DependencyRelation::from_edges(n, edges, &EngineConfig::default()).unwrap();
        build_tasks(&relation, &vec![1; n as usize]).unwrap()
    }

    fn position(order: &[usize], id: usize) -> usize {
        order.iter().position(|&x| x == id).unwrap()
    }

    #[test]
    fn test_reverse_id_chain() {
        // 2 -> 1 -> 0: id order is the opposite of dependency order.
        let tasks = make_tasks(3, &[(0, 1), (1, 2)]);
        assert_eq!(topological_order(&tasks, 0).unwrap(), vec![2, 1, 0]);
    }

    #[test]
    fn test_predecessors_first() {
        let edges = [(4, 0), (4, 3), (3, 1), (2, 3), (5, 2)];
        let tasks = make_tasks(6, &edges);
        let order = topological_order(&tasks, 0).unwrap();

        assert_eq!(order.len(), 6);
        for &(task, predecessor) in &edges {
            assert!(position(&order, predecessor as usize) < position(&order, task as usize));
        }
    }

    #[test]
    fn test_independent_tasks_keep_id_order() {
        let tasks = make_tasks(4, &[]);
        assert_eq!(topological_order(&tasks, 0).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_cycle_is_reported() {
        // 0 is free; 1 and 2 wait on each other; 3 waits on 2.
        let tasks = make_tasks(4, &[(1, 2), (2, 1), (3, 2)]);
        assert_eq!(
            topological_order(&tasks, 0),
            Err(ScheduleError::CyclicDependency {
                cycle: vec![1, 2, 1]
            })
        );
    }
}
