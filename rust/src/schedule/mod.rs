//! Critical Path Method scheduling.
//!
//! Stages run in a fixed order over one task set per invocation: the graph
//! builder derives predecessor/successor lists, the cycle detector gates the
//! run, the forward and backward passes fill in times and slack, and the
//! extractor collects zero-slack tasks.

mod backward;
mod builder;
mod cycle;
mod engine;
mod error;
mod extract;
mod forward;
mod topology;
mod types;

pub use backward::backward_pass;
pub use builder::build_tasks;
pub use cycle::{find_cycle, has_cycle};
pub use engine::{compute_schedule, run_engine};
pub use error::{RelationError, ScheduleError};
pub use extract::{critical_chains, extract_critical_path, CriticalPath};
pub use forward::{forward_pass, project_duration};
pub use topology::topological_order;
pub use types::{EngineState, Task, TaskTiming};
