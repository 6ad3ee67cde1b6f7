//! Configuration for the CPM engine.

use pyo3::prelude::*;
use std::str::FromStr;

use crate::schedule::ScheduleError;

/// How the forward and backward passes order their work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassStrategy {
    /// One sweep in Kahn topological order (reverse order for the backward pass).
    Topological,
    /// Repeated sweeps in id order until no time changes, at most N sweeps.
    Relaxation,
}

impl PassStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Topological => "topological",
            Self::Relaxation => "relaxation",
        }
    }
}

impl FromStr for PassStrategy {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "topological" => Ok(Self::Topological),
            "relaxation" => Ok(Self::Relaxation),
            other => Err(ScheduleError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Options controlling a single engine run.
#[pyclass]
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Pass ordering strategy: "topological" or "relaxation"
    #[pyo3(get, set)]
    pub strategy: String,
    /// Verbosity level: 0=silent, 1=stages, 2=tasks, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
    /// Drop `(i, i)` entries instead of rejecting them as one-task cycles.
    #[pyo3(get, set)]
    pub ignore_self_loops: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: PassStrategy::Topological.as_str().to_string(),
            verbosity: 0,
            ignore_self_loops: false,
        }
    }
}

impl EngineConfig {
    /// Parse the configured strategy name.
    pub fn pass_strategy(&self) -> Result<PassStrategy, ScheduleError> {
        self.strategy.parse()
    }
}

#[pymethods]
impl EngineConfig {
    #[new]
    #[pyo3(signature = (strategy=None, verbosity=None, ignore_self_loops=None))]
    fn new(strategy: Option<String>, verbosity: Option<u8>, ignore_self_loops: Option<bool>) -> Self {
        let defaults = Self::default();
        Self {
            strategy: strategy.unwrap_or(defaults.strategy),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
            ignore_self_loops: ignore_self_loops.unwrap_or(defaults.ignore_self_loops),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "EngineConfig(strategy={:?}, verbosity={}, ignore_self_loops={})",
            self.strategy, self.verbosity, self.ignore_self_loops
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.strategy, "topological");
        assert_eq!(config.verbosity, 0);
        assert!(!config.ignore_self_loops);
        assert_eq!(config.pass_strategy().unwrap(), PassStrategy::Topological);
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(
            "relaxation".parse::<PassStrategy>().unwrap(),
            PassStrategy::Relaxation
        );
        assert_eq!(
            "topological".parse::<PassStrategy>().unwrap(),
            PassStrategy::Topological
        );
        assert_eq!(
            "pert".parse::<PassStrategy>(),
            Err(ScheduleError::UnknownStrategy("pert".to_string()))
        );
    }
}
