//! Validated dependency relation.
//!
//! Entry `(i, j)` set means "task i depends on task j": j is a predecessor of i
//! and must finish before i may start.

use crate::config::EngineConfig;
use crate::interner::TaskNameInterner;
use crate::models::NamedTask;
use crate::schedule::RelationError;

/// Square boolean relation over `num_tasks` tasks, stored sparsely as one
/// sorted, duplicate-free predecessor list per task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DependencyRelation {
    num_tasks: usize,
    predecessors: Vec<Vec<usize>>,
}

impl DependencyRelation {
    /// Relation with no dependencies.
    pub fn empty(num_tasks: usize) -> Self {
        Self {
            num_tasks,
            predecessors: vec![Vec::new(); num_tasks],
        }
    }

    /// Build from an N×N matrix of 0/1 entries.
    pub fn from_matrix(
        num_tasks: i64,
        matrix: &[Vec<i64>],
        config: &EngineConfig,
    ) -> Result<Self, RelationError> {
        let n = checked_task_count(num_tasks)?;
        if matrix.len() != n {
            return Err(RelationError::RowCountMismatch {
                rows: matrix.len(),
                expected: n,
            });
        }

        let mut relation = Self::empty(n);
        for (row, entries) in matrix.iter().enumerate() {
            if entries.len() != n {
                return Err(RelationError::RowLengthMismatch {
                    row,
                    len: entries.len(),
                    expected: n,
                });
            }
            for (col, &value) in entries.iter().enumerate() {
                match value {
                    0 => {}
                    1 => relation.insert(row, col, config),
                    _ => return Err(RelationError::InvalidEntry { row, col, value }),
                }
            }
        }
        Ok(relation)
    }

    /// Build from `(task, predecessor)` pairs.
    pub fn from_edges(
        num_tasks: i64,
        edges: &[(i64, i64)],
        config: &EngineConfig,
    ) -> Result<Self, RelationError> {
        let n = checked_task_count(num_tasks)?;
        let mut relation = Self::empty(n);
        for &(task, predecessor) in edges {
            let task = checked_task_id(task, n)?;
            let predecessor = checked_task_id(predecessor, n)?;
            relation.insert(task, predecessor, config);
        }
        Ok(relation)
    }

    /// Build from named tasks, returning the relation, the durations in id
    /// order and the name interner used to assign ids.
    pub fn from_named(
        tasks: &[NamedTask],
        config: &EngineConfig,
    ) -> Result<(Self, Vec<i64>, TaskNameInterner), RelationError> {
        if tasks.is_empty() {
            return Err(RelationError::NonPositiveTaskCount(0));
        }

        let mut interner = TaskNameInterner::with_capacity(tasks.len());
        for task in tasks {
            let (_, added) = interner.intern(&task.name);
            if !added {
                return Err(RelationError::DuplicateName(task.name.clone()));
            }
        }

        let mut relation = Self::empty(tasks.len());
        for (id, task) in tasks.iter().enumerate() {
            for dependency in &task.dependencies {
                let Some(predecessor) = interner.get(dependency) else {
                    return Err(RelationError::UnknownDependency {
                        task: task.name.clone(),
                        dependency: dependency.clone(),
                    });
                };
                relation.insert(id, predecessor, config);
            }
        }

        let durations = tasks.iter().map(|t| t.duration).collect();
        Ok((relation, durations, interner))
    }

    fn insert(&mut self, task: usize, predecessor: usize, config: &EngineConfig) {
        if task == predecessor && config.ignore_self_loops {
            return;
        }
        let row = &mut self.predecessors[task];
        if let Err(pos) = row.binary_search(&predecessor) {
            row.insert(pos, predecessor);
        }
    }

    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Whether `task` depends on `predecessor`.
    #[inline]
    pub fn depends_on(&self, task: usize, predecessor: usize) -> bool {
        self.predecessors(task).binary_search(&predecessor).is_ok()
    }

    /// Predecessors of `task` in ascending id order; empty when out of range.
    #[inline]
    pub fn predecessors(&self, task: usize) -> &[usize] {
        self.predecessors
            .get(task)
            .map(|row| row.as_slice())
            .unwrap_or(&[])
    }
}

fn checked_task_count(num_tasks: i64) -> Result<usize, RelationError> {
    if num_tasks <= 0 {
        return Err(RelationError::NonPositiveTaskCount(num_tasks));
    }
    usize::try_from(num_tasks).map_err(|_| RelationError::NonPositiveTaskCount(num_tasks))
}

fn checked_task_id(id: i64, num_tasks: usize) -> Result<usize, RelationError> {
    usize::try_from(id)
        .ok()
        .filter(|&idx| idx < num_tasks)
        .ok_or(RelationError::TaskOutOfRange { id, num_tasks })
}
