//! Configuration errors.
//!
//! Only construction can fail. Bus traffic never reports errors:
//! out-of-bounds, read-only and illegal writes are dropped silently and show
//! up only in [`AccessStats`](crate::stats::AccessStats) and the debug log.

use thiserror::Error;

/// Error raised while building a bank, file, map or configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An explicit default-value list does not have one entry per slot.
    #[error("reset value length ({found}) does not match the depth ({expected})")]
    DefaultsLength {
        /// Declared depth of the bank.
        expected: usize,
        /// Number of default values supplied.
        found: usize,
    },

    /// Word width outside `1..=32` bits.
    #[error("word width {0} is not in 1..=32 bits")]
    InvalidWidth(u32),

    /// A bank or file with no slots.
    #[error("depth must be at least one slot")]
    ZeroDepth,

    /// A file whose slots are zero address units apart.
    #[error("slot stride must be non-zero")]
    ZeroStride,

    /// More interrupt sources than the quad-mapped region can address.
    #[error("{requested} interrupt sources requested, at most {max} are addressable")]
    TooManySources {
        /// Requested source count.
        requested: usize,
        /// Architectural maximum.
        max: usize,
    },

    /// A file window that does not fit in the 32-bit address space.
    #[error("window at {base:#x} spanning {span:#x} bytes overflows the address space")]
    WindowOverflow {
        /// Base address of the file.
        base: u32,
        /// Size of the window in address units.
        span: u64,
    },

    /// Configuration text failed to parse.
    #[error("invalid configuration: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
