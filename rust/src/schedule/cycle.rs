//! Cycle detection by three-color depth-first search.
//!
//! Edges run from a task to its successors. Every white task becomes a fresh
//! DFS root so disconnected components are covered. Reaching a gray task means
//! it is on the current path: a back edge, hence a cycle. Self-loops are
//! back edges to the task itself.
//!
//! The traversal keeps an explicit stack of `(task, next successor index)`
//! frames instead of recursing, so deep chains cannot exhaust the call stack.

use crate::log_debug;

use super::types::Task;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Color {
    /// Not visited yet.
    White,
    /// On the current DFS path.
    Gray,
    /// Fully processed.
    Black,
}

/// Find a cycle in the task graph.
///
/// Returns `None` for a DAG. Otherwise returns one cycle as a closed id
/// sequence in dependency order (first == last), e.g. `[0, 1, 0]` when task 1
/// depends on task 0 and task 0 depends on task 1.
pub fn find_cycle(tasks: &[Task], verbosity: u8) -> Option<Vec<usize>> {
    let mut color = vec![Color::White; tasks.len()];

    for root in 0..tasks.len() {
        if color[root] != Color::White {
            continue;
        }
        log_debug!(verbosity, "dfs root {}", root);

        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        color[root] = Color::Gray;

        while let Some(frame) = stack.last_mut() {
            let (node, next_idx) = *frame;
            let successors = &tasks[node].successors;

            if next_idx == successors.len() {
                color[node] = Color::Black;
                stack.pop();
                continue;
            }
            frame.1 += 1;

            let next = successors[next_idx];
            match color[next] {
                Color::White => {
                    color[next] = Color::Gray;
                    stack.push((next, 0));
                }
                Color::Gray => {
                    log_debug!(verbosity, "back edge {} -> {}", node, next);
                    return Some(close_cycle(&stack, next));
                }
                Color::Black => {}
            }
        }
    }

    None
}

/// Whether the task graph contains a cycle.
pub fn has_cycle(tasks: &[Task]) -> bool {
    find_cycle(tasks, 0).is_some()
}

/// Cut the current DFS path at `target` and close it back onto `target`.
fn close_cycle(stack: &[(usize, usize)], target: usize) -> Vec<usize> {
    let start = stack
        .iter()
        .position(|&(node, _)| node == target)
        .unwrap_or(0);
    let mut cycle: Vec<usize> = stack[start..].iter().map(|&(node, _)| node).collect();
    cycle.push(target);
    cycle
}
