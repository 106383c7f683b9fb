/// Solver imports
pub mod dpll_solver;

/// Search state: undo log, occurrence lists and the linked lists behind them
pub mod active_list;
pub mod assignment_trail;
pub mod occurrence_list;

pub mod clause;
/// Solver config
pub mod config;

/// Branching statistics
pub mod activity;
pub mod stats;
/// General util/definitions
pub mod types;
