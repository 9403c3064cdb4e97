// src/exit.rs
//! Standardized process exit codes for `levgroups`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::GroupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LevGroupsExit {
    /// Groups were computed and printed (possibly zero of them).
    Success = 0,
    /// Generic error (e.g. unreadable explicit config, output write failure).
    Error = 1,
    /// Rejected settings: threshold out of range, malformed config file.
    InvalidInput = 2,
}

impl LevGroupsExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps a failed run onto an exit code, looking through `anyhow` context.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<GroupError>() {
            Some(e) if e.is_invalid_input() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for LevGroupsExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
