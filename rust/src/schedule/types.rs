//! Types for CPM scheduling.

use std::fmt;

/// Per-task timing filled in by the forward and backward passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskTiming {
    /// Earliest possible start time (from forward pass).
    pub early_start: i64,
    /// Earliest possible finish time (from forward pass).
    pub early_finish: i64,
    /// Latest allowable start time (from backward pass).
    pub late_start: i64,
    /// Latest allowable finish time (from backward pass).
    pub late_finish: i64,
    /// Slack = late_finish - early_finish.
    pub slack: i64,
}

impl TaskTiming {
    /// Exact integer test, no tolerance.
    pub fn is_critical(&self) -> bool {
        self.slack == 0
    }
}

/// One schedulable unit of work, mutated in place by the passes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: usize,
    pub duration: i64,
    /// Tasks that must finish before this one starts, ascending.
    pub predecessors: Vec<usize>,
    /// Tasks waiting on this one, ascending.
    pub successors: Vec<usize>,
    pub timing: TaskTiming,
}

impl Task {
    pub fn new(id: usize, duration: i64) -> Self {
        Self {
            id,
            duration,
            predecessors: Vec::new(),
            successors: Vec::new(),
            timing: TaskTiming::default(),
        }
    }
}

/// Lifecycle of a single engine run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Built,
    Rejected,
    TimesComputed,
    PathExtracted,
}

impl EngineState {
    /// Whether `next` is a legal successor state.
    pub fn can_advance_to(self, next: EngineState) -> bool {
        matches!(
            (self, next),
            (Self::Built, Self::Rejected)
                | (Self::Built, Self::TimesComputed)
                | (Self::TimesComputed, Self::PathExtracted)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Rejected | Self::PathExtracted)
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Built => "built",
            Self::Rejected => "rejected",
            Self::TimesComputed => "times computed",
            Self::PathExtracted => "path extracted",
        };
        f.write_str(name)
    }
}
