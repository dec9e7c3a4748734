//! Process exit codes shared by every subcommand.

/// Clean completion (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, configuration problems, engine faults.
pub const ERROR: i32 = 2;

/// Interrupted by the user (Ctrl+C).
pub const INTERRUPTED: i32 = 130;
