//! Input and output data types exposed to callers.

use pyo3::prelude::*;

use crate::schedule::{critical_chains, Task};

/// A task identified by name, with dependencies given by name.
#[pyclass]
#[derive(Clone, Debug)]
pub struct NamedTask {
    #[pyo3(get, set)]
    pub name: String,
    #[pyo3(get, set)]
    pub duration: i64,
    /// Names of tasks that must finish before this one starts.
    #[pyo3(get, set)]
    pub dependencies: Vec<String>,
}

#[pymethods]
impl NamedTask {
    #[new]
    #[pyo3(signature = (name, duration, dependencies=None))]
    fn new(name: String, duration: i64, dependencies: Option<Vec<String>>) -> Self {
        Self {
            name,
            duration,
            dependencies: dependencies.unwrap_or_default(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "NamedTask(name={:?}, duration={}, deps={})",
            self.name,
            self.duration,
            self.dependencies.len()
        )
    }
}

/// One row of the schedule table.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskSchedule {
    #[pyo3(get)]
    pub id: usize,
    #[pyo3(get)]
    pub duration: i64,
    #[pyo3(get)]
    pub early_start: i64,
    #[pyo3(get)]
    pub early_finish: i64,
    #[pyo3(get)]
    pub late_start: i64,
    #[pyo3(get)]
    pub late_finish: i64,
    #[pyo3(get)]
    pub slack: i64,
    #[pyo3(get)]
    pub predecessors: Vec<usize>,
    #[pyo3(get)]
    pub successors: Vec<usize>,
}

impl From<Task> for TaskSchedule {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            duration: task.duration,
            early_start: task.timing.early_start,
            early_finish: task.timing.early_finish,
            late_start: task.timing.late_start,
            late_finish: task.timing.late_finish,
            slack: task.timing.slack,
            predecessors: task.predecessors,
            successors: task.successors,
        }
    }
}

#[pymethods]
impl TaskSchedule {
    fn is_critical(&self) -> bool {
        self.slack == 0
    }

    /// `(id, early_start, early_finish, late_start, late_finish, slack)`
    fn as_tuple(&self) -> (usize, i64, i64, i64, i64, i64) {
        (
            self.id,
            self.early_start,
            self.early_finish,
            self.late_start,
            self.late_finish,
            self.slack,
        )
    }

    fn __repr__(&self) -> String {
        format!(
            "TaskSchedule(id={}, ES={}, EF={}, LS={}, LF={}, slack={})",
            self.id,
            self.early_start,
            self.early_finish,
            self.late_start,
            self.late_finish,
            self.slack
        )
    }
}

/// A complete CPM schedule.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    /// Rows indexed by task id.
    #[pyo3(get)]
    pub tasks: Vec<TaskSchedule>,
    /// Zero-slack task ids, ascending.
    #[pyo3(get)]
    pub critical_path: Vec<usize>,
    #[pyo3(get)]
    pub project_duration: i64,
    /// Order in which the passes visited the tasks.
    #[pyo3(get)]
    pub topological_order: Vec<usize>,
}

impl Schedule {
    pub fn timing(&self, id: usize) -> Option<&TaskSchedule> {
        self.tasks.get(id)
    }
}

#[pymethods]
impl Schedule {
    /// One chain of tightly linked critical tasks per chain start, following
    /// the lowest-id tight successor at each step.
    pub fn critical_chains(&self) -> Vec<Vec<usize>> {
        critical_chains(&self.tasks)
    }

    pub fn is_critical(&self, id: usize) -> bool {
        self.critical_path.binary_search(&id).is_ok()
    }

    fn __len__(&self) -> usize {
        self.tasks.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Schedule(tasks={}, project_duration={}, critical_path={:?})",
            self.tasks.len(),
            self.project_duration,
            self.critical_path
        )
    }
}
