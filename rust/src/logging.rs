//! Logging macros for the CPM engine with verbosity level control.
//!
//! Provides zero-cost logging when disabled (verbosity=0).
//! Levels:
//! - 0: SILENT (nothing)
//! - 1: STAGES (stage transitions, rejection notices, project duration)
//! - 2: TASKS (per-task times computed by each pass)
//! - 3: DEBUG (traversal internals: DFS frames, Kahn queue, relaxation sweeps)

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_STAGES: u8 = 1;
pub const VERBOSITY_TASKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log at STAGES level (verbosity >= 1).
#[macro_export]
macro_rules! log_stages {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_STAGES {
            eprintln!("[cpm] {}", format_args!($($arg)*));
        }
    };
}

/// Log at TASKS level (verbosity >= 2).
#[macro_export]
macro_rules! log_tasks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_TASKS {
            eprintln!("[cpm]   {}", format_args!($($arg)*));
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!("[cpm]     {}", format_args!($($arg)*));
        }
    };
}
