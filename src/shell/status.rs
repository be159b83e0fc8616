//! Exit status normalization.
//!
//! Every spawned process, captured or interactive, ends up as a single
//! integer exit code. `0` is success, any other value is failure, and `-1`
//! marks a status the host could not express as an exit code (for example a
//! child terminated by a signal).

use std::process::ExitStatus;

/// Exit code used when the host reports a failure without a usable status.
pub const UNKNOWN_EXIT_CODE: i32 = -1;

/// Capability for anything that can report how a child process ended.
pub trait ProcessResult {
    /// The normalized exit code of the process.
    fn exit_code(&self) -> i32;
}

impl ProcessResult for ExitStatus {
    fn exit_code(&self) -> i32 {
        normalize_exit_code(!self.success(), self.code())
    }
}

/// Derive an exit code from whether the host reported an exit error and
/// whether a wait status with an exit code was obtainable.
pub fn normalize_exit_code(exit_error: bool, wait_code: Option<i32>) -> i32 {
    if !exit_error {
        return 0;
    }
    wait_code.unwrap_or(UNKNOWN_EXIT_CODE)
}
