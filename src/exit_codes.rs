//! Exit code constants for the bulldozer CLI.
//!
//! - 0: Success
//! - 1: Configuration or user input error
//! - 2: Resolution failure (a pull request could not be resolved)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Unreadable, malformed, or unsupported configuration; bad CLI input.
pub const CONFIG_ERROR: i32 = 1;

/// Resolution failed for the given pull request.
pub const RESOLUTION_FAILURE: i32 = 2;
