//! Fatal errors and their process exit codes.
//!
//! Recoverable problems (rejected moves, malformed commands) are handled
//! inside the session loop and never reach this type. What remains are
//! the three ways the program can refuse to run at all, each with its
//! own exit status and its fixed user-facing message.

use thiserror::Error;

use crate::deal::ConfigError;

/// An error that ends the process before or instead of a game.
///
/// The `Display` text is exactly what the player sees.
#[derive(Error, Debug)]
pub enum FatalError {
    /// The program was invoked with the wrong number of arguments.
    #[error("[ERR] Usage: {program} [file-name]")]
    Usage { program: String },

    /// Allocation failure. The global allocator aborts instead of
    /// returning null, so normal execution never constructs this; the
    /// variant keeps the outcome distinguishable in the process
    /// contract.
    #[error("[ERR] Out of memory")]
    OutOfMemory,

    /// The configuration file was missing, unreadable, or malformed.
    /// The underlying `ConfigError` carries the detail for logging.
    #[error("[ERR] Invalid file!")]
    InvalidConfiguration(#[from] ConfigError),
}

impl FatalError {
    /// The process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            FatalError::Usage { .. } => 1,
            FatalError::OutOfMemory => 2,
            FatalError::InvalidConfiguration(_) => 3,
        }
    }
}
