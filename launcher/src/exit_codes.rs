//! Stable exit codes for launcher CLI commands.

/// Command succeeded, or `launcher check` found the archive up to date.
pub const OK: i32 = 0;
/// Command failed due to invalid input, config, or resolution errors.
pub const INVALID: i32 = 1;
/// `launcher check` found the archive missing or its classpath unresolvable.
pub const STALE: i32 = 2;
